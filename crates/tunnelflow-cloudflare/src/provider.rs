//! Provider bootstrap
//!
//! Validates top-level configuration, builds exactly one [`TunnelClient`] and
//! injects it into the lifecycle and lookup handlers. No ambient singleton:
//! the client is passed explicitly at construction.

use crate::client::TunnelClient;
use crate::lookup::TunnelLookup;
use crate::resource::TunnelResource;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tunnelflow_provider::{
    Attribute, Provider, ProviderError, ProviderHandlers, Result, Schema,
};

pub const PROVIDER_TYPE: &str = "cloudflare-tunnel";

/// Provider-level configuration
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_token: String,
    pub account_id: String,
    /// Overrides the production API endpoint when set
    #[serde(default)]
    pub base_url: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Cloudflare Tunnel provider
#[derive(Debug, Default)]
pub struct CloudflareTunnelProvider;

impl CloudflareTunnelProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Provider for CloudflareTunnelProvider {
    fn type_name(&self) -> &str {
        PROVIDER_TYPE
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("api_token", Attribute::required().sensitive())
            .with_attribute("account_id", Attribute::required())
            .with_attribute("base_url", Attribute::optional())
    }

    async fn configure(&self, config: Value) -> Result<ProviderHandlers> {
        self.schema().validate(&config)?;
        let config: ProviderConfig = serde_json::from_value(config)?;

        let client = match config.base_url.as_deref() {
            Some(base_url) => TunnelClient::with_base_url(
                config.api_token.as_str(),
                config.account_id.as_str(),
                base_url,
            ),
            None => TunnelClient::new(config.api_token.as_str(), config.account_id.as_str()),
        }
        .map_err(|e| ProviderError::InvalidConfig(e.to_string()))?;
        let client = Arc::new(client);

        tracing::debug!(account_id = %config.account_id, "configured cloudflare tunnel provider");
        Ok(ProviderHandlers::new()
            .with_resource(TunnelResource::new(Arc::clone(&client)))
            .with_data_source(TunnelLookup::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_debug_never_shows_token() {
        let config = ProviderConfig {
            api_token: "very-secret-token".to_string(),
            account_id: "acc".to_string(),
            base_url: None,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("very-secret-token"));
        assert!(rendered.contains("acc"));
    }
}
