//! Tunnel client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TunnelError {
    #[error("missing required credential: {0}")]
    MissingCredential(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("tunnel not found: {0}")]
    NotFound(String),

    #[error("cloudflare api error: {0}")]
    Api(String),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TunnelError>;
