//! Identity provider client.
//!
//! Token retrieval is best-effort: every failure collapses to "no token" and
//! the store client proceeds anonymously, relying on the store's own row
//! policies. See DESIGN.md for the security-review note on this fallback.

use async_trait::async_trait;
use serde::Deserialize;

/// Token template requested for store access.
pub const STORE_TOKEN_TEMPLATE: &str = "store";

/// Source of scoped access tokens.
#[async_trait(?Send)]
pub trait TokenProvider {
    /// Retrieve a token minted for the named template.
    ///
    /// Resolution failures are not errors: implementations log and return
    /// `None`, which callers treat as "no token".
    async fn access_token(&self, template: &str) -> Option<String>;
}

/// HTTP client for the identity provider's token endpoint.
pub struct IdentityClient {
    token_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

impl IdentityClient {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl TokenProvider for IdentityClient {
    async fn access_token(&self, template: &str) -> Option<String> {
        let body = serde_json::json!({ "template": template });
        let response = match self.http.post(&self.token_url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("token request failed: {}", err);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!("token endpoint returned {}", response.status());
            return None;
        }
        match response.json::<TokenResponse>().await {
            Ok(TokenResponse { token }) => Some(token),
            Err(err) => {
                tracing::warn!("token response malformed: {}", err);
                None
            }
        }
    }
}
