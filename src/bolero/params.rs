//! # Query Parameter Builder
//!
//! Compiles search state into the flat string mapping sent to the backend.
//! Two shapes exist:
//!
//! - [`build_params`]: paginated list endpoint. `page`, `limit`, `sort` and
//!   `order` are always present, followed by the non-blank filters.
//! - [`build_export_params`]: export endpoint. Filters only, no pagination.
//!
//! Filter rules, applied in this order:
//!
//! 1. Every fixed value that is not blank after trimming is emitted under its
//!    backend name (see [`FIELD_ALIASES`]).
//! 2. Every dynamic row with a non-empty key and a non-blank value is emitted
//!    under its key, overwriting whatever was there (last write wins).
//!
//! Values are emitted as typed, not trimmed; trimming only decides presence.
//! Both builders are pure and return a fresh mapping on every call.

use crate::fields::{FieldRow, FixedValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// UI-facing field names that the backend spells differently.
///
/// Only fixed values go through this table; dynamic row keys come from the
/// catalog and are already backend names.
pub const FIELD_ALIASES: &[(&str, &str)] = &[("anneeParution", "annee_parution")];

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_SORT: &str = "id";

/// Backend name for a fixed field.
pub fn backend_key(name: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(ui_name, _)| *ui_name == name)
        .map(|(_, backend)| *backend)
        .unwrap_or(name)
}

/// `Some(value)` when the value is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order: {} (expected asc or desc)", other)),
        }
    }
}

/// Page window and ordering of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub order: SortOrder,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::Asc,
        }
    }
}

/// The filter half of a search: fixed values and dynamic rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filters<'a> {
    pub fixed_values: Option<&'a FixedValues>,
    pub search_fields: &'a [FieldRow],
}

impl<'a> Filters<'a> {
    pub fn new(fixed_values: &'a FixedValues, search_fields: &'a [FieldRow]) -> Self {
        Self {
            fixed_values: Some(fixed_values),
            search_fields,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions<'a> {
    pub page: PageOptions,
    pub filters: Filters<'a>,
}

/// Flat `name -> value` query mapping. Keys are unique; inserting an existing
/// key replaces its value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Parameters for the paginated list endpoint.
pub fn build_params(options: &ListOptions<'_>) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("page", options.page.page.to_string());
    params.insert("limit", options.page.limit.to_string());
    params.insert("sort", options.page.sort.clone());
    params.insert("order", options.page.order.as_str());

    apply_filters(&mut params, &options.filters);
    params
}

/// Parameters for the export endpoint: filters only.
pub fn build_export_params(filters: &Filters<'_>) -> QueryParams {
    let mut params = QueryParams::new();
    apply_filters(&mut params, filters);
    params
}

fn apply_filters(params: &mut QueryParams, filters: &Filters<'_>) {
    if let Some(fixed) = filters.fixed_values {
        for (name, value) in fixed.iter() {
            if let Some(value) = non_blank(Some(value)) {
                params.insert(backend_key(name), value);
            }
        }
    }

    for row in filters.search_fields {
        if row.key.is_empty() {
            continue;
        }
        if let Some(value) = non_blank(Some(row.value.as_str())) {
            params.insert(row.key.as_str(), value);
        }
    }
}
