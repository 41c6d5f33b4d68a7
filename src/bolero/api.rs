//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for every search-form operation, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the effective configuration (file plus environment overrides)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, does not perform HTTP requests, and holds no search state
//! between calls: every call rebuilds its [`SearchSession`](crate::session::SearchSession)
//! from a [`SessionSpec`].

use crate::catalog::EntityKind;
use crate::commands;
use crate::config::SearchConfig;
use crate::error::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SearchApi {
    config: SearchConfig,
    config_dir: PathBuf,
}

impl SearchApi {
    pub fn new(config: SearchConfig, config_dir: PathBuf) -> Self {
        Self { config, config_dir }
    }

    /// Load `config.json` from `config_dir`, applying environment overrides.
    pub fn load(config_dir: PathBuf) -> Result<Self> {
        let config = SearchConfig::load_with_env(&config_dir)?;
        debug!(dir = %config_dir.display(), api_url = %config.api_url, "loaded config");
        Ok(Self::new(config, config_dir))
    }

    pub fn fields(&self, entity: EntityKind) -> commands::CmdResult {
        commands::fields::run(entity)
    }

    pub fn choices(&self, spec: &SessionSpec, row: Option<usize>) -> Result<commands::CmdResult> {
        commands::choices::run(spec, row)
    }

    pub fn list_request(
        &self,
        spec: &SessionSpec,
        overrides: &PageOverrides,
    ) -> Result<commands::CmdResult> {
        debug!(entity = %spec.entity, rows = spec.rows.len(), "building list request");
        commands::list::run(&self.config, spec, overrides)
    }

    pub fn export_request(
        &self,
        spec: &SessionSpec,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        debug!(entity = %spec.entity, rows = spec.rows.len(), "building export request");
        commands::export::run(&self.config, spec, today)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, &self.config, action)
    }

    pub fn current_config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::PageOverrides;
pub use commands::{CmdMessage, CmdResult, FieldSpec, MessageLevel, SessionSpec};

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> (tempfile::TempDir, SearchApi) {
        let dir = tempfile::tempdir().unwrap();
        let api = SearchApi::new(SearchConfig::default(), dir.path().to_path_buf());
        (dir, api)
    }

    #[test]
    fn fields_dispatches_to_catalog() {
        let (_dir, api) = api();
        let result = api.fields(EntityKind::Ouvrage);
        assert_eq!(result.catalog.unwrap().entity, EntityKind::Ouvrage);
    }

    #[test]
    fn list_request_uses_api_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SearchConfig::default();
        config.set("api-url", "https://bolero.example.org/").unwrap();
        let api = SearchApi::new(config, dir.path().to_path_buf());

        let spec = SessionSpec::new(EntityKind::Auteur);
        let result = api.list_request(&spec, &PageOverrides::default()).unwrap();
        let request = result.request.unwrap();
        assert_eq!(request.url.host_str(), Some("bolero.example.org"));
    }

    #[test]
    fn export_request_dispatches() {
        let (_dir, api) = api();
        let spec = SessionSpec::new(EntityKind::Recension);
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let result = api.export_request(&spec, today).unwrap();
        assert!(result.request.unwrap().url.path().ends_with("/export"));
    }

    #[test]
    fn config_set_writes_into_config_dir() {
        let (dir, api) = api();
        api.config(ConfigAction::Set("sort".into(), "titre".into()))
            .unwrap();
        assert_eq!(SearchConfig::load(dir.path()).unwrap().sort, "titre");
    }
}
