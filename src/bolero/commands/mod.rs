use crate::catalog::{Catalog, FieldDescriptor};
use crate::config::SearchConfig;
use crate::request::SearchRequest;

pub mod choices;
pub mod config;
pub mod export;
pub mod fields;
pub mod helpers;
pub mod list;

pub use helpers::{FieldSpec, SessionSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub catalog: Option<&'static Catalog>,
    pub choices: Vec<&'static FieldDescriptor>,
    pub request: Option<SearchRequest>,
    pub config: Option<SearchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_choices(mut self, choices: Vec<&'static FieldDescriptor>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_request(mut self, request: SearchRequest) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }
}
