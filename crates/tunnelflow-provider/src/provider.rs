//! Capability traits implemented by provider plugins

use crate::error::Result;
use crate::schema::Schema;
use async_trait::async_trait;
use serde_json::Value;

/// Outcome of refreshing a tracked resource against remote truth
#[derive(Debug)]
pub enum ReadOutcome {
    /// The resource still exists; the refreshed state replaces the prior one
    Current(Value),
    /// The resource no longer exists remotely and must be dropped from
    /// tracked state
    Gone,
}

/// Full lifecycle manager for one tracked resource type
///
/// State crosses the boundary as `serde_json::Value`; implementations decode
/// it into their own typed models. Every operation is a single remote call
/// with no retry: any error aborts the operation and leaves state untouched.
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Resource type name (e.g. "cloudflare_tunnel")
    fn type_name(&self) -> &str;

    /// Declared attribute schema for this resource
    fn schema(&self) -> Schema;

    /// Create the resource from planned state and return the new state,
    /// including remotely assigned attributes.
    async fn create(&self, planned: Value) -> Result<Value>;

    /// Reconcile prior state against remote truth.
    async fn read(&self, prior: Value) -> Result<ReadOutcome>;

    /// Apply planned changes to an existing resource and return the new state.
    async fn update(&self, planned: Value) -> Result<Value>;

    /// Remove the resource. After a successful delete no further reads are
    /// performed for this instance.
    async fn delete(&self, prior: Value) -> Result<()>;
}

/// Read-only reference lookup
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Data source type name
    fn type_name(&self) -> &str;

    /// Declared attribute schema for this data source
    fn schema(&self) -> Schema;

    /// Resolve the query config into an immutable result.
    async fn read(&self, config: Value) -> Result<Value>;
}

/// Top-level provider bootstrap
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider type name (e.g. "cloudflare-tunnel")
    fn type_name(&self) -> &str;

    /// Declared provider-level configuration schema
    fn schema(&self) -> Schema;

    /// Validate configuration and build the handlers. Performs no network
    /// I/O; credential presence failures are reported here.
    async fn configure(&self, config: Value) -> Result<ProviderHandlers>;
}

/// Handlers built by [`Provider::configure`], all sharing one API client
#[derive(Default)]
pub struct ProviderHandlers {
    resources: Vec<Box<dyn ManagedResource>>,
    data_sources: Vec<Box<dyn DataSource>>,
}

impl std::fmt::Debug for ProviderHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandlers")
            .field(
                "resources",
                &self.resources.iter().map(|r| r.type_name()).collect::<Vec<_>>(),
            )
            .field(
                "data_sources",
                &self.data_sources.iter().map(|d| d.type_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ProviderHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource: impl ManagedResource + 'static) -> Self {
        self.resources.push(Box::new(resource));
        self
    }

    pub fn with_data_source(mut self, data_source: impl DataSource + 'static) -> Self {
        self.data_sources.push(Box::new(data_source));
        self
    }

    pub fn resource(&self, type_name: &str) -> Option<&dyn ManagedResource> {
        self.resources
            .iter()
            .find(|r| r.type_name() == type_name)
            .map(|r| r.as_ref())
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.data_sources
            .iter()
            .find(|d| d.type_name() == type_name)
            .map(|d| d.as_ref())
    }

    pub fn resources(&self) -> impl Iterator<Item = &dyn ManagedResource> {
        self.resources.iter().map(|r| r.as_ref())
    }

    pub fn data_sources(&self) -> impl Iterator<Item = &dyn DataSource> {
        self.data_sources.iter().map(|d| d.as_ref())
    }
}
