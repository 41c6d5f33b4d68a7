use crate::catalog::Catalog;
use serde::Serialize;

/// Current values of an entity's fixed filters, in catalog declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FixedValues {
    entries: Vec<(String, String)>,
}

impl FixedValues {
    /// One entry per fixed field, holding the catalog default.
    pub fn init(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .fixed_fields
                .iter()
                .map(|fixed| (fixed.name.to_string(), fixed.default.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set the value of an existing fixed field.
    ///
    /// Returns `false` when `name` is not one of the fields this state was
    /// initialised with; no new key is ever added.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Blank every value in place. Keys are kept.
    pub fn reset_all(&mut self) {
        for (_, value) in self.entries.iter_mut() {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from explicit pairs, in the given order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OUVRAGE, RECENSION};

    #[test]
    fn init_copies_catalog_defaults() {
        let values = FixedValues::init(&OUVRAGE);
        let pairs: Vec<_> = values.iter().collect();
        assert_eq!(
            pairs,
            vec![("titre", ""), ("editeur", ""), ("anneeParution", "")]
        );
    }

    #[test]
    fn set_only_touches_known_keys() {
        let mut values = FixedValues::init(&RECENSION);
        assert!(values.set("titre_revue", "Annales"));
        assert!(!values.set("editeur", "Seuil"));

        assert_eq!(values.get("titre_revue"), Some("Annales"));
        assert_eq!(values.get("editeur"), None);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn reset_all_blanks_values_and_keeps_keys() {
        let mut values = FixedValues::init(&OUVRAGE);
        values.set("titre", "Paris");
        values.set("anneeParution", "1999");

        values.reset_all();

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|(_, value)| value.is_empty()));
    }
}
