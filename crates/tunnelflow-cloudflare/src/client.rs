//! Cloudflare Tunnel API client
//!
//! Direct Cloudflare API implementation for `cfd_tunnel` management.
//! Uses Bearer token authentication.

use crate::error::{Result, TunnelError};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Each call is a single attempt; a timeout is a terminal failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Cloudflare Tunnel API client
///
/// Configuration (token, account id, base URL) is immutable after
/// construction, so one instance can be shared across handlers without
/// locking.
pub struct TunnelClient {
    client: reqwest::Client,
    api_token: String,
    account_id: String,
    base_url: String,
}

impl fmt::Debug for TunnelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TunnelClient")
            .field("api_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// A Cloudflare tunnel as returned by the API
#[derive(Clone, Deserialize)]
pub struct Tunnel {
    pub id: String,
    pub name: String,
    /// At least 32 bytes, base64-encoded. The API may withhold this field on
    /// read; `None` means "unchanged", never "cleared".
    #[serde(rename = "tunnel_secret")]
    pub secret: Option<String>,
}

impl fmt::Debug for Tunnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tunnel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl TunnelClient {
    /// Create a client against the production Cloudflare API.
    ///
    /// Fails without any I/O if either credential is empty.
    pub fn new(api_token: impl Into<String>, account_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, account_id, CLOUDFLARE_API_BASE)
    }

    /// Create a client against an alternative API endpoint.
    pub fn with_base_url(
        api_token: impl Into<String>,
        account_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let api_token = api_token.into();
        let account_id = account_id.into();
        if api_token.is_empty() {
            return Err(TunnelError::MissingCredential("api_token"));
        }
        if account_id.is_empty() {
            return Err(TunnelError::MissingCredential("account_id"));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into();
        Ok(Self {
            client,
            api_token,
            account_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The account under which all tunnel operations are scoped
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Create a new tunnel. The returned tunnel carries the remote-assigned id.
    pub async fn create_tunnel(&self, name: &str, secret: Option<&str>) -> Result<Tunnel> {
        tracing::info!(name, "creating cloudflare tunnel");
        let request = self.client.post(self.tunnels_url()).json(&CreateTunnelRequest {
            name,
            tunnel_secret: secret,
        });
        self.send(request, None).await
    }

    /// Fetch the current remote state of a tunnel.
    pub async fn get_tunnel(&self, id: &str) -> Result<Tunnel> {
        tracing::debug!(id, "fetching cloudflare tunnel");
        let request = self.client.get(self.tunnel_url(id));
        self.send(request, Some(id)).await
    }

    /// Update name and, when supplied, the secret of an existing tunnel.
    pub async fn update_tunnel(&self, id: &str, name: &str, secret: Option<&str>) -> Result<Tunnel> {
        tracing::info!(id, name, "updating cloudflare tunnel");
        let request = self.client.patch(self.tunnel_url(id)).json(&UpdateTunnelRequest {
            id,
            name,
            tunnel_secret: secret,
        });
        self.send(request, Some(id)).await
    }

    /// Delete a tunnel.
    pub async fn delete_tunnel(&self, id: &str) -> Result<Tunnel> {
        tracing::info!(id, "deleting cloudflare tunnel");
        let request = self.client.delete(self.tunnel_url(id));
        self.send(request, Some(id)).await
    }

    fn tunnels_url(&self) -> String {
        format!("{}/accounts/{}/cfd_tunnel", self.base_url, self.account_id)
    }

    fn tunnel_url(&self, id: &str) -> String {
        format!(
            "{}/accounts/{}/cfd_tunnel/{}",
            self.base_url, self.account_id, id
        )
    }

    /// Send one request and discriminate the failure channels in order:
    /// transport, HTTP status, envelope decode, API-level `success` flag.
    async fn send(&self, request: reqwest::RequestBuilder, id: Option<&str>) -> Result<Tunnel> {
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TunnelError::NotFound(id.unwrap_or_default().to_string()));
        }
        if status != StatusCode::OK {
            // Keep the raw body verbatim for diagnostics.
            let body = response.text().await.unwrap_or_default();
            return Err(TunnelError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ApiResponse<Tunnel> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(TunnelError::Api(join_messages(&envelope.errors)));
        }
        envelope
            .result
            .ok_or_else(|| TunnelError::Api("missing result in successful response".to_string()))
    }
}

// ============ API Types ============

#[derive(Serialize)]
struct CreateTunnelRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tunnel_secret: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateTunnelRequest<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tunnel_secret: Option<&'a str>,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    success: bool,
    result: Option<T>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    #[allow(dead_code)]
    #[serde(default)]
    code: i32,
    message: String,
}

fn join_messages(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "unknown error".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_requires_credentials() {
        assert!(matches!(
            TunnelClient::new("", "acc"),
            Err(TunnelError::MissingCredential("api_token"))
        ));
        assert!(matches!(
            TunnelClient::new("token", ""),
            Err(TunnelError::MissingCredential("account_id"))
        ));
        assert!(TunnelClient::new("token", "acc").is_ok());
    }

    #[test]
    fn urls_interpolate_account_and_id() {
        let client = TunnelClient::with_base_url("t", "acc-1", "https://api.test/v4/").unwrap();
        assert_eq!(client.tunnels_url(), "https://api.test/v4/accounts/acc-1/cfd_tunnel");
        assert_eq!(
            client.tunnel_url("tun-9"),
            "https://api.test/v4/accounts/acc-1/cfd_tunnel/tun-9"
        );
    }

    #[test]
    fn debug_never_shows_secrets() {
        let client = TunnelClient::new("very-secret-token", "acc").unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("very-secret-token"));

        let tunnel = Tunnel {
            id: "tun-1".to_string(),
            name: "edge".to_string(),
            secret: Some("c2VjcmV0".to_string()),
        };
        let rendered = format!("{tunnel:?}");
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("tun-1"));
    }

    #[test]
    fn envelope_decodes_without_secret() {
        let body = r#"{"result":{"id":"tun-1","name":"edge"},"success":true,"errors":[]}"#;
        let envelope: ApiResponse<Tunnel> = serde_json::from_str(body).unwrap();
        let tunnel = envelope.result.unwrap();
        assert_eq!(tunnel.id, "tun-1");
        assert!(tunnel.secret.is_none());
    }

    #[test]
    fn create_request_omits_absent_secret() {
        let body = serde_json::to_value(CreateTunnelRequest {
            name: "edge",
            tunnel_secret: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "edge"}));
    }
}
