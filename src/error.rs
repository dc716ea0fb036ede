use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum TomfigError {
    #[error("Required parameter '{name}' has neither a value nor a default")]
    MissingRequiredParameter { name: String },

    #[error("Unknown {kind} '{name}'")]
    UnknownSelection { kind: &'static str, name: String },

    #[error("No connector or valve selected")]
    NoSelection,

    #[error("Unknown key '{key}' in {path}")]
    UnknownKey { key: String, path: PathBuf },

    #[error("Unknown keys in catalog")]
    UnknownKeys(Vec<TomfigError>),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
