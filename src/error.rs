//! Error types for the support bot.
//!
//! The reply pipeline itself never fails; these cover startup only.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Knowledge table error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors loading FAQ or order tables from disk.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read table {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for the support bot.
pub type Result<T> = std::result::Result<T, Error>;
