use std::path::PathBuf;
use thiserror::Error;

/// Host-level failures. Component validation problems are never reported
/// through this type; they become [`crate::Diagnostic`]s instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// IO error while reading a source file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source text could not be parsed as a TypeScript module.
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },
    /// Transform configuration JSON was malformed.
    #[error("Invalid transform config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "napi")]
impl From<TransformError> for napi::Error {
    fn from(err: TransformError) -> Self {
        napi::Error::from_reason(err.to_string())
    }
}
