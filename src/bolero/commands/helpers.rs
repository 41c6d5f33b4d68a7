use crate::catalog::EntityKind;
use crate::error::{Result, SearchError};
use crate::session::SearchSession;
use std::str::FromStr;

/// A `KEY=VALUE` pair as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub value: String,
}

impl FromStr for FieldSpec {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(FieldSpec {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(SearchError::InvalidFieldSpec(s.to_string())),
        }
    }
}

/// Everything needed to rebuild a search form from scratch.
#[derive(Debug, Clone)]
pub struct SessionSpec {
    pub entity: EntityKind,
    pub fixed: Vec<FieldSpec>,
    pub rows: Vec<FieldSpec>,
    /// Blank rows appended after `rows`.
    pub blank_rows: usize,
}

impl SessionSpec {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            fixed: Vec::new(),
            rows: Vec::new(),
            blank_rows: 0,
        }
    }
}

/// Replay a spec against a fresh session, the way a user would fill the form:
/// fixed fields first, then one row per field, each picked from the choices
/// still offered to it.
pub fn build_session(spec: &SessionSpec) -> Result<SearchSession> {
    let mut session = SearchSession::new(spec.entity);

    for fixed in &spec.fixed {
        session.set_fixed(&fixed.key, fixed.value.as_str())?;
    }

    for row in &spec.rows {
        let index = session.add_field();
        session.select_field(index, &row.key)?;
        session.set_row_value(index, row.value.as_str())?;
    }

    for _ in 0..spec.blank_rows {
        session.add_field();
    }

    Ok(session)
}
