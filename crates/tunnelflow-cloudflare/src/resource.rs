//! Tunnel resource lifecycle handler

use crate::client::TunnelClient;
use crate::error::TunnelError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tunnelflow_provider::{
    Attribute, ManagedResource, ProviderError, ReadOutcome, Result, Schema,
};

pub const TUNNEL_RESOURCE: &str = "cloudflare_tunnel";

/// Tracked state of one tunnel resource
#[derive(Clone, Serialize, Deserialize)]
pub struct TunnelState {
    /// Remote-assigned; `None` before creation, immutable afterwards
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_token: Option<String>,
}

impl fmt::Debug for TunnelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TunnelState")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tunnel_token", &self.tunnel_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Full CRUD manager for the tunnel resource
pub struct TunnelResource {
    client: Arc<TunnelClient>,
}

impl TunnelResource {
    pub fn new(client: Arc<TunnelClient>) -> Self {
        Self { client }
    }
}

fn state_id(state: &TunnelState) -> Result<&str> {
    state.id.as_deref().ok_or_else(|| {
        ProviderError::InvalidConfig("tunnel state carries no id".to_string())
    })
}

#[async_trait]
impl ManagedResource for TunnelResource {
    fn type_name(&self) -> &str {
        TUNNEL_RESOURCE
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("id", Attribute::computed())
            .with_attribute("name", Attribute::required())
            .with_attribute("tunnel_token", Attribute::optional().sensitive())
    }

    async fn create(&self, planned: Value) -> Result<Value> {
        let mut state: TunnelState = serde_json::from_value(planned)?;
        let tunnel = self
            .client
            .create_tunnel(&state.name, state.tunnel_token.as_deref())
            .await
            .map_err(|e| ProviderError::operation("could not create tunnel", e))?;
        state.id = Some(tunnel.id);
        Ok(serde_json::to_value(state)?)
    }

    async fn read(&self, prior: Value) -> Result<ReadOutcome> {
        let mut state: TunnelState = serde_json::from_value(prior)?;
        let id = state_id(&state)?.to_string();
        let tunnel = match self.client.get_tunnel(&id).await {
            Ok(tunnel) => tunnel,
            Err(TunnelError::NotFound(_)) => return Ok(ReadOutcome::Gone),
            Err(e) => {
                return Err(ProviderError::operation(
                    format!("could not read tunnel {id}"),
                    e,
                ));
            }
        };
        state.name = tunnel.name;
        // The API does not guarantee returning the secret; absence means the
        // prior token is still current.
        if let Some(secret) = tunnel.secret {
            state.tunnel_token = Some(secret);
        }
        Ok(ReadOutcome::Current(serde_json::to_value(state)?))
    }

    async fn update(&self, planned: Value) -> Result<Value> {
        let state: TunnelState = serde_json::from_value(planned)?;
        let id = state_id(&state)?.to_string();
        self.client
            .update_tunnel(&id, &state.name, state.tunnel_token.as_deref())
            .await
            .map_err(|e| ProviderError::operation(format!("could not update tunnel {id}"), e))?;
        // The plan's own values become the new state.
        Ok(serde_json::to_value(state)?)
    }

    async fn delete(&self, prior: Value) -> Result<()> {
        let state: TunnelState = serde_json::from_value(prior)?;
        let id = state_id(&state)?.to_string();
        self.client
            .delete_tunnel(&id)
            .await
            .map_err(|e| ProviderError::operation(format!("could not delete tunnel {id}"), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_debug_never_shows_token() {
        let state = TunnelState {
            id: Some("tun-1".to_string()),
            name: "edge".to_string(),
            tunnel_token: Some("c2VjcmV0".to_string()),
        };
        let rendered = format!("{state:?}");
        assert!(!rendered.contains("c2VjcmV0"));
    }

    #[test]
    fn absent_token_is_omitted_from_state() {
        let state = TunnelState {
            id: Some("tun-1".to_string()),
            name: "edge".to_string(),
            tunnel_token: None,
        };
        let value = serde_json::to_value(state).unwrap();
        assert!(value.get("tunnel_token").is_none());
    }
}
