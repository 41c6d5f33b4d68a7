use crate::error::{Result, SearchError};
use serde::Serialize;

/// One ad-hoc `key = value` filter. An empty key means "no field chosen yet".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldRow {
    pub key: String,
    pub value: String,
}

impl FieldRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of dynamic rows. Rows are appended at the end and removed by
/// index; order only matters for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldRows {
    rows: Vec<FieldRow>,
}

impl FieldRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(FieldRow::default());
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> Result<FieldRow> {
        self.check(index)?;
        Ok(self.rows.remove(index))
    }

    pub fn remove_all_rows(&mut self) {
        self.rows = Vec::new();
    }

    pub fn set_row_key(&mut self, index: usize, key: impl Into<String>) -> Result<()> {
        self.check(index)?;
        self.rows[index].key = key.into();
        Ok(())
    }

    pub fn set_row_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.check(index)?;
        self.rows[index].value = value.into();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&FieldRow> {
        self.rows.get(index)
    }

    pub fn as_slice(&self) -> &[FieldRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(SearchError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}

impl From<Vec<FieldRow>> for FieldRows {
    fn from(rows: Vec<FieldRow>) -> Self {
        Self { rows }
    }
}
