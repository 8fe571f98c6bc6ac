//! Tunnelflow provider contract
//!
//! This crate defines the capability traits a tunnelflow plugin implements,
//! giving the orchestrator a unified interface for resource management that is
//! independent of any particular host framework.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Orchestrator                     │
//! │            (plan / apply / refresh)              │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │             tunnelflow-provider                  │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Capability traits                │   │
//! │  │  trait Provider { ... }                   │   │
//! │  │  trait ManagedResource { ... }            │   │
//! │  │  trait DataSource { ... }                 │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐                               │
//! │  │    Schema    │                               │
//! │  └──────────────┘                               │
//! └───────┬──────────────────────────────────────────┘
//!         │
//! ┌───────▼───────────┐
//! │ tunnelflow-       │
//! │   cloudflare      │
//! └───────────────────┘
//! ```
//!
//! A plugin declares its configuration surface through [`Schema`], then
//! implements [`Provider::configure`] to build its handlers around a single
//! shared API client. State crosses the trait boundary as `serde_json::Value`;
//! plugins decode it into their own typed models.

pub mod error;
pub mod provider;
pub mod schema;

// Re-exports
pub use error::{ProviderError, Result};
pub use provider::{DataSource, ManagedResource, Provider, ProviderHandlers, ReadOutcome};
pub use schema::{Attribute, AttributeMode, Schema};
