//! Request descriptions handed to the HTTP transport.
//!
//! This module does not talk to the network. It resolves the endpoint of an
//! entity against the configured base URL, encodes the query parameters and
//! records how the response body is to be read (JSON for lists, raw bytes for
//! exports, which the backend serves as CSV).

use crate::catalog::EntityKind;
use crate::error::Result;
use crate::params::QueryParams;
use chrono::NaiveDate;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const API_PREFIX: &str = "bolero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    List,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Json,
    Binary,
}

impl Endpoint {
    pub fn path(&self, entity: EntityKind) -> String {
        match self {
            Endpoint::List => format!("{}/{}", API_PREFIX, entity.collection()),
            Endpoint::Export => format!("{}/{}/export", API_PREFIX, entity.collection()),
        }
    }

    pub fn response_mode(&self) -> ResponseMode {
        match self {
            Endpoint::List => ResponseMode::Json,
            Endpoint::Export => ResponseMode::Binary,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub entity: EntityKind,
    pub endpoint: Endpoint,
    pub url: Url,
    pub response: ResponseMode,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    pub params: QueryParams,
}

impl SearchRequest {
    /// Resolve `endpoint` for `entity` under `base` and attach `params`.
    ///
    /// `base` is treated as a directory: a missing trailing slash is added so
    /// that a base path such as `https://host/api` is kept.
    pub fn new(
        base: &Url,
        entity: EntityKind,
        endpoint: Endpoint,
        params: QueryParams,
        timeout: Duration,
    ) -> Result<Self> {
        let base = directory_url(base);
        let mut url = base.join(&endpoint.path(entity))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(Self {
            entity,
            endpoint,
            url,
            response: endpoint.response_mode(),
            timeout,
            params,
        })
    }

    /// File name to save an export under, e.g. `ouvrages-export-2024-05-01.csv`.
    pub fn export_filename(&self, date: NaiveDate) -> String {
        format!(
            "{}-export-{}.csv",
            self.entity.collection(),
            date.format("%Y-%m-%d")
        )
    }
}

fn directory_url(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }
}
