use super::FieldRow;
use crate::catalog::{Catalog, FieldDescriptor};
use std::collections::HashSet;

/// Catalog fields row `index` may pick.
///
/// A field is offered when no row has selected it, or when it is the current
/// selection of row `index` itself. An empty key never hides anything.
/// Catalog declaration order is preserved. An `index` past the end simply
/// means "a row with no selection".
pub fn available_choices(
    catalog: &Catalog,
    rows: &[FieldRow],
    index: usize,
) -> Vec<&'static FieldDescriptor> {
    let selected: HashSet<&str> = rows
        .iter()
        .map(|row| row.key.as_str())
        .filter(|key| !key.is_empty())
        .collect();
    let own_key = rows.get(index).map(|row| row.key.as_str());

    catalog
        .available_fields
        .iter()
        .filter(|field| !selected.contains(field.key) || own_key == Some(field.key))
        .collect()
}
