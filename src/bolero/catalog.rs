//! Field catalogs.
//!
//! Each entity type of the bibliographic backend owns a [`Catalog`]: the
//! ordered list of fields a user may attach as ad-hoc search rows, plus the
//! names of the fixed filters that are always shown for that entity.
//!
//! Catalogs are plain `const` data. Adding a selectable field means adding a
//! [`FieldDescriptor`] to the relevant table below; nothing else changes.
//!
//! The two namespaces of a catalog must not overlap: a key is either fixed or
//! selectable, never both. [`validate_all`] checks this and is run once when
//! the CLI starts.

use crate::error::{Result, SearchError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A selectable search field: the backend query key and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
}

impl FieldDescriptor {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// A fixed filter and the value it starts with when a session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedField {
    pub name: &'static str,
    pub default: &'static str,
}

impl FixedField {
    pub const fn new(name: &'static str) -> Self {
        Self { name, default: "" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Ouvrage,
    Recension,
    Auteur,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Ouvrage, EntityKind::Recension, EntityKind::Auteur]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Ouvrage => "ouvrage",
            EntityKind::Recension => "recension",
            EntityKind::Auteur => "auteur",
        }
    }

    /// The backend collection segment (`bolero/<collection>`).
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Ouvrage => "ouvrages",
            EntityKind::Recension => "recensions",
            EntityKind::Auteur => "auteurs",
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        catalog(*self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        EntityKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted || kind.collection() == wanted)
            .ok_or_else(|| SearchError::UnknownEntity(s.to_string()))
    }
}

/// Static description of the search fields of one entity type.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub entity: EntityKind,
    pub available_fields: &'static [FieldDescriptor],
    pub fixed_fields: &'static [FixedField],
}

impl Catalog {
    pub fn field(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.available_fields.iter().find(|field| field.key == key)
    }

    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        self.field(key).map(|field| field.label)
    }

    pub fn has_fixed(&self, name: &str) -> bool {
        self.fixed_fields.iter().any(|fixed| fixed.name == name)
    }

    /// Fails when a key is declared both as fixed and as selectable.
    pub fn validate(&self) -> Result<()> {
        let overlapping: Vec<String> = self
            .available_fields
            .iter()
            .filter(|field| self.has_fixed(field.key))
            .map(|field| field.key.to_string())
            .collect();

        if overlapping.is_empty() {
            Ok(())
        } else {
            Err(SearchError::OverlappingKeys {
                entity: self.entity.to_string(),
                keys: overlapping,
            })
        }
    }
}

const OUVRAGE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("id", "ID"),
    FieldDescriptor::new("sous_titre", "Sous-titre"),
    FieldDescriptor::new("volume", "Volume"),
    FieldDescriptor::new("ean", "EAN"),
    FieldDescriptor::new("portail", "Portail"),
    FieldDescriptor::new("auteur_nom", "Nom de l'auteur"),
    FieldDescriptor::new("auteur_prenom", "Prénom de l'auteur"),
    FieldDescriptor::new("id_auteur", "ID Auteur"),
    FieldDescriptor::new("id_proprio", "ID Propriétaire"),
    FieldDescriptor::new("traducteur", "Traducteur"),
    FieldDescriptor::new("langue", "Langue"),
];

const RECENSION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("id", "ID"),
    FieldDescriptor::new("portail", "Portail"),
    FieldDescriptor::new("volume", "Volume"),
    FieldDescriptor::new("numero", "Numéro"),
    FieldDescriptor::new("date_parution", "Date de parution"),
    FieldDescriptor::new("url", "URL"),
    FieldDescriptor::new("auteur_nom", "Nom de l'auteur"),
    FieldDescriptor::new("auteur_prenom", "Prénom de l'auteur"),
    FieldDescriptor::new("id_auteur", "ID Auteur"),
    FieldDescriptor::new("id_proprio", "ID Propriétaire"),
    FieldDescriptor::new("traducteur", "Traducteur"),
    FieldDescriptor::new("langue", "Langue"),
];

const AUTEUR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("id", "ID"),
    FieldDescriptor::new("id_ref", "ID IdRef"),
    FieldDescriptor::new("id_proprio", "ID Propriétaire"),
];

pub static OUVRAGE: Catalog = Catalog {
    entity: EntityKind::Ouvrage,
    available_fields: OUVRAGE_FIELDS,
    fixed_fields: &[
        FixedField::new("titre"),
        FixedField::new("editeur"),
        FixedField::new("anneeParution"),
    ],
};

pub static RECENSION: Catalog = Catalog {
    entity: EntityKind::Recension,
    available_fields: RECENSION_FIELDS,
    fixed_fields: &[
        FixedField::new("titre"),
        FixedField::new("titre_revue"),
        FixedField::new("annee"),
    ],
};

pub static AUTEUR: Catalog = Catalog {
    entity: EntityKind::Auteur,
    available_fields: AUTEUR_FIELDS,
    fixed_fields: &[FixedField::new("nom"), FixedField::new("prenom")],
};

/// Look up the catalog of an entity type.
pub fn catalog(entity: EntityKind) -> &'static Catalog {
    match entity {
        EntityKind::Ouvrage => &OUVRAGE,
        EntityKind::Recension => &RECENSION,
        EntityKind::Auteur => &AUTEUR,
    }
}

/// Validate every registered catalog.
pub fn validate_all() -> Result<()> {
    EntityKind::all()
        .iter()
        .try_for_each(|entity| catalog(*entity).validate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_catalogs_are_disjoint() {
        assert!(validate_all().is_ok());
    }

    #[test]
    fn overlapping_keys_are_reported() {
        static BROKEN: Catalog = Catalog {
            entity: EntityKind::Ouvrage,
            available_fields: &[
                FieldDescriptor::new("id", "ID"),
                FieldDescriptor::new("titre", "Titre"),
            ],
            fixed_fields: &[FixedField::new("titre")],
        };

        match BROKEN.validate() {
            Err(SearchError::OverlappingKeys { entity, keys }) => {
                assert_eq!(entity, "ouvrage");
                assert_eq!(keys, vec!["titre".to_string()]);
            }
            other => panic!("expected overlap error, got {:?}", other),
        }
    }

    #[test]
    fn ouvrage_catalog_keeps_declaration_order() {
        let keys: Vec<_> = OUVRAGE.available_fields.iter().map(|f| f.key).collect();
        assert_eq!(keys.first(), Some(&"id"));
        assert_eq!(keys.last(), Some(&"langue"));
        assert_eq!(keys.len(), 11);

        let fixed: Vec<_> = OUVRAGE.fixed_fields.iter().map(|f| f.name).collect();
        assert_eq!(fixed, vec!["titre", "editeur", "anneeParution"]);
    }

    #[test]
    fn fixed_defaults_are_empty() {
        for entity in EntityKind::all() {
            assert!(entity.catalog().fixed_fields.iter().all(|f| f.default.is_empty()));
        }
    }

    #[test]
    fn parses_entity_names_and_collections() {
        assert_eq!("ouvrage".parse::<EntityKind>().unwrap(), EntityKind::Ouvrage);
        assert_eq!("Recensions".parse::<EntityKind>().unwrap(), EntityKind::Recension);
        assert_eq!("auteurs".parse::<EntityKind>().unwrap(), EntityKind::Auteur);
        assert!(matches!(
            "revue".parse::<EntityKind>(),
            Err(SearchError::UnknownEntity(_))
        ));
    }

    #[test]
    fn label_lookup() {
        assert_eq!(RECENSION.label_for("numero"), Some("Numéro"));
        assert_eq!(RECENSION.label_for("ean"), None);
        assert!(RECENSION.has_fixed("titre_revue"));
    }
}
