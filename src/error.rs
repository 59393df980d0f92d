use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a similarity capability.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("similarity capability failed: {message}")]
pub struct SimilarityError {
    pub message: String,
}

impl SimilarityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    ExternalCapability(#[from] SimilarityError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("duplicate question in knowledge base: {0:?}")]
    DuplicateQuestion(String),

    #[error("invalid knowledge base entry: {0}")]
    InvalidInput(String),

    #[error("failed to read knowledge base {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed knowledge base JSON: {0}")]
    Json(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold must be a finite number in [0, 1], got {0}")]
    InvalidThreshold(f64),
}
