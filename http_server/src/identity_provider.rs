use access_gate::{IdentityProvider, SessionId};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use shared_kernel::http_client::HttpClient;
use std::collections::HashMap;
use url::Url;

/// Session management through the identity provider's backend API.
pub struct ProviderSessions {
    api_url: Url,
    secret_key: Secret<String>,
}

impl ProviderSessions {
    pub fn new(api_url: Url, secret_key: Secret<String>) -> Self {
        Self {
            api_url,
            secret_key,
        }
    }

    fn revoke_url(&self, session: &SessionId) -> anyhow::Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be used as an API base url", self.api_url))?
            .pop_if_empty()
            .extend(["sessions", session.as_ref(), "revoke"]);
        Ok(url)
    }
}

#[async_trait]
impl IdentityProvider for ProviderSessions {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn sign_out(&self, session: &SessionId) -> anyhow::Result<()> {
        let url = self.revoke_url(session)?;
        let bearer_token = format!("Bearer {}", self.secret_key.expose_secret());
        let headers = HashMap::from([("authorization", bearer_token)]);

        HttpClient::post_json::<serde_json::Value>(url, headers, serde_json::json!({}))
            .await
            .map(|_| ())
            .context("Failed to revoke session")
    }
}
