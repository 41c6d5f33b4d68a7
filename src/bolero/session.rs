//! A search session: everything the search form of one entity holds.
//!
//! [`SearchSession`] bundles the fixed values and dynamic rows of one entity
//! type with the operations a front-end calls on user interaction. It is a
//! plain value owned by the caller; nothing is shared between sessions.

use crate::catalog::{catalog, Catalog, EntityKind, FieldDescriptor};
use crate::error::{Result, SearchError};
use crate::fields::{available_choices, FieldRow, FieldRows, FixedValues};
use crate::params::{build_export_params, build_params, Filters, ListOptions, PageOptions, QueryParams};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct SearchSession {
    entity: EntityKind,
    fixed: FixedValues,
    rows: FieldRows,
}

impl SearchSession {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            fixed: FixedValues::init(catalog(entity)),
            rows: FieldRows::new(),
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn catalog(&self) -> &'static Catalog {
        catalog(self.entity)
    }

    pub fn fixed(&self) -> &FixedValues {
        &self.fixed
    }

    pub fn rows(&self) -> &FieldRows {
        &self.rows
    }

    pub fn set_fixed(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.fixed.set(name, value) {
            Ok(())
        } else {
            Err(SearchError::UnknownFixedField {
                entity: self.entity.to_string(),
                name: name.to_string(),
            })
        }
    }

    /// Append a blank row; returns its index.
    pub fn add_field(&mut self) -> usize {
        self.rows.add_row()
    }

    pub fn remove_field(&mut self, index: usize) -> Result<FieldRow> {
        let removed = self.rows.remove_row(index)?;
        debug!(entity = %self.entity, index, key = %removed.key, "removed search row");
        Ok(removed)
    }

    pub fn remove_all_dynamic_fields(&mut self) {
        self.rows.remove_all_rows();
    }

    /// Drop every dynamic row and blank every fixed value.
    pub fn remove_all_fields(&mut self) {
        self.remove_all_dynamic_fields();
        self.fixed.reset_all();
    }

    pub fn set_row_key(&mut self, index: usize, key: impl Into<String>) -> Result<()> {
        self.rows.set_row_key(index, key)
    }

    pub fn set_row_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.rows.set_row_value(index, value)
    }

    /// Set a row's key, accepting only a field currently offered to that row.
    pub fn select_field(&mut self, index: usize, key: &str) -> Result<()> {
        if index >= self.rows.len() {
            return Err(SearchError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let offered = self.available_choices(index).iter().any(|f| f.key == key);
        if !offered {
            return Err(SearchError::FieldUnavailable {
                key: key.to_string(),
                index,
            });
        }
        debug!(entity = %self.entity, index, key, "selected search field");
        self.rows.set_row_key(index, key)
    }

    pub fn available_choices(&self, index: usize) -> Vec<&'static FieldDescriptor> {
        available_choices(self.catalog(), self.rows.as_slice(), index)
    }

    pub fn filters(&self) -> Filters<'_> {
        Filters::new(&self.fixed, self.rows.as_slice())
    }

    pub fn list_params(&self, page: &PageOptions) -> QueryParams {
        build_params(&ListOptions {
            page: page.clone(),
            filters: self.filters(),
        })
    }

    pub fn export_params(&self) -> QueryParams {
        build_export_params(&self.filters())
    }
}
