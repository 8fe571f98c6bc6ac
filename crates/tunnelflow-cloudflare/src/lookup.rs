//! Read-only tunnel lookup data source

use crate::client::TunnelClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tunnelflow_provider::{Attribute, DataSource, ProviderError, Result, Schema};

pub const TUNNEL_LOOKUP: &str = "cloudflare_tunnel";

/// Result of a tunnel lookup
#[derive(Clone, Serialize, Deserialize)]
pub struct LookupState {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_token: Option<String>,
}

impl fmt::Debug for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupState")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("account_id", &self.account_id)
            .field("tunnel_token", &self.tunnel_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Reference lookup for an existing tunnel by id
pub struct TunnelLookup {
    client: Arc<TunnelClient>,
}

impl TunnelLookup {
    pub fn new(client: Arc<TunnelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for TunnelLookup {
    fn type_name(&self) -> &str {
        TUNNEL_LOOKUP
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("id", Attribute::required())
            .with_attribute("name", Attribute::computed())
            .with_attribute("account_id", Attribute::computed())
            .with_attribute("tunnel_token", Attribute::computed().sensitive())
    }

    async fn read(&self, config: Value) -> Result<Value> {
        let mut state: LookupState = serde_json::from_value(config)?;
        let tunnel = self
            .client
            .get_tunnel(&state.id)
            .await
            .map_err(|e| ProviderError::operation(format!("could not read tunnel {}", state.id), e))?;
        state.name = tunnel.name;
        state.account_id = self.client.account_id().to_string();
        // Present only when the API chose to return it.
        state.tunnel_token = tunnel.secret;
        Ok(serde_json::to_value(state)?)
    }
}
