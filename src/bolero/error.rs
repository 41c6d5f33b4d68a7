use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),

    #[error("Unknown fixed field for {entity}: {name}")]
    UnknownFixedField { entity: String, name: String },

    #[error("Row index {index} out of range (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Field '{key}' is not selectable for row {index}")]
    FieldUnavailable { key: String, index: usize },

    #[error("Catalog for {entity} declares keys both as fixed and selectable: {keys:?}")]
    OverlappingKeys { entity: String, keys: Vec<String> },

    #[error("Invalid field spec '{0}', expected KEY=VALUE")]
    InvalidFieldSpec(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
