//! Provider contract error types

use thiserror::Error;

/// Errors surfaced to the orchestrator as user-facing diagnostics
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),

    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("state encoding error: {0}")]
    State(#[from] serde_json::Error),
}

impl ProviderError {
    /// Wrap a plugin error with the operation and resource id it concerns.
    pub fn operation(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
