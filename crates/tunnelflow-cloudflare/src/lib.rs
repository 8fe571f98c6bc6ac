//! Cloudflare Tunnel plugin for tunnelflow
//!
//! This crate implements the tunnelflow provider contract for Cloudflare
//! tunnels (`cfd_tunnel`), enabling declarative management of a single remote
//! resource type: create, read, update and delete, plus a read-only lookup.
//!
//! # Requirements
//!
//! - A Cloudflare API token with tunnel permissions
//! - The account id the tunnels live under
//!
//! # Example
//!
//! ```ignore
//! use tunnelflow_cloudflare::CloudflareTunnelProvider;
//! use tunnelflow_provider::{Provider, ReadOutcome};
//! use serde_json::json;
//!
//! let provider = CloudflareTunnelProvider::new();
//! let handlers = provider
//!     .configure(json!({
//!         "api_token": std::env::var("CLOUDFLARE_API_TOKEN")?,
//!         "account_id": std::env::var("CLOUDFLARE_ACCOUNT_ID")?,
//!     }))
//!     .await?;
//!
//! let tunnels = handlers.resource("cloudflare_tunnel").unwrap();
//! let state = tunnels
//!     .create(json!({"id": null, "name": "edge", "tunnel_token": secret}))
//!     .await?;
//! ```
//!
//! Every operation is one authenticated HTTP call with a fixed 10-second
//! timeout. There is no retry, pagination or caching; the orchestrator owns
//! scheduling and state persistence.

pub mod client;
pub mod error;
pub mod lookup;
pub mod provider;
pub mod resource;

pub use client::{Tunnel, TunnelClient};
pub use error::{Result, TunnelError};
pub use lookup::{LookupState, TunnelLookup, TUNNEL_LOOKUP};
pub use provider::{CloudflareTunnelProvider, ProviderConfig, PROVIDER_TYPE};
pub use resource::{TunnelResource, TunnelState, TUNNEL_RESOURCE};
