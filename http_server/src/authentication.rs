use access_gate::{AuthState, SessionId};
use actix_web::http::header::Header;
use actix_web::HttpRequest;
use actix_web_httpauth::headers::authorization;
use anyhow::{anyhow, Context};
use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use shared_kernel::http_client::HttpClient;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

/// Cookie the hosted sign-in UI stores the session token in.
pub const SESSION_COOKIE: &str = "__session";

/// Resolves the caller's authentication state from an incoming request.
pub trait SessionVerifier: Send + Sync {
    fn auth_state(&self, req: &HttpRequest) -> AuthState;
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    sid: Option<String>,
    email: Option<String>,
}

impl Claims {
    fn into_auth_state(self) -> anyhow::Result<AuthState> {
        let session = self
            .sid
            .ok_or_else(|| anyhow!("Token for {} does not carry a session id", self.sub))?;
        Ok(AuthState::SignedIn {
            session: SessionId::from(session),
            primary_email: self.email,
        })
    }
}

/// Verifies RS256 session tokens against the provider's published key set.
///
/// The key set is fetched in the background; until the first fetch lands
/// every caller is reported as `AuthState::Loading`.
#[derive(Clone)]
pub struct JwtSessionVerifier {
    keys: Arc<RwLock<Option<JwkSet>>>,
    issuer: String,
}

impl JwtSessionVerifier {
    pub fn new(issuer: String) -> Self {
        Self {
            keys: Arc::new(RwLock::new(None)),
            issuer,
        }
    }

    pub fn with_keys(issuer: String, keys: JwkSet) -> Self {
        Self {
            keys: Arc::new(RwLock::new(Some(keys))),
            issuer,
        }
    }

    /// Fetches the key set, retrying every `retry_every` until it loads and
    /// re-fetching every `refresh_every` afterwards. A failed refresh keeps
    /// the previous keys.
    pub fn spawn_key_fetch(
        &self,
        jwks_url: Url,
        retry_every: Duration,
        refresh_every: Duration,
    ) -> JoinHandle<()> {
        let keys = self.keys.clone();
        tokio::spawn(async move {
            loop {
                let wait = match HttpClient::get_json::<JwkSet>(jwks_url.clone()).await {
                    Ok(key_set) => {
                        tracing::info!(keys = key_set.keys.len(), "Loaded session signing keys");
                        *keys.write().unwrap_or_else(PoisonError::into_inner) = Some(key_set);
                        refresh_every
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "Could not fetch session signing keys");
                        retry_every
                    }
                };
                tokio::time::sleep(wait).await;
            }
        })
    }

    fn token(req: &HttpRequest) -> Option<String> {
        if let Some(cookie) = req.cookie(SESSION_COOKIE) {
            return Some(cookie.value().to_owned());
        }
        authorization::Authorization::<authorization::Bearer>::parse(req)
            .ok()
            .map(|header| header.as_ref().token().to_string())
    }

    fn verify(&self, key_set: &JwkSet, token: &str) -> anyhow::Result<Claims> {
        let header = decode_header(token).context("Failed to decode header")?;
        let kid = header
            .kid
            .ok_or_else(|| anyhow!("Token does not have a `kid` header field"))?;
        let jwk = key_set
            .find(&kid)
            .ok_or_else(|| anyhow!("No matching JWK found for the given kid"))?;

        let decoding_key = match &jwk.algorithm {
            AlgorithmParameters::RSA(rsa) => DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
                .context("Failed to get DecodingKey from rsa_components")?,
            _ => return Err(anyhow!("Algorithm should be RSA")),
        };

        let validation = {
            let mut validation = Validation::new(Algorithm::RS256);
            validation.set_issuer(&[self.issuer.as_str()]);
            validation
        };

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .context("Failed to decode token")
    }
}

impl SessionVerifier for JwtSessionVerifier {
    fn auth_state(&self, req: &HttpRequest) -> AuthState {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        let Some(key_set) = keys.as_ref() else {
            return AuthState::Loading;
        };
        let Some(token) = Self::token(req) else {
            return AuthState::SignedOut;
        };

        match self
            .verify(key_set, &token)
            .and_then(Claims::into_auth_state)
        {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = ?err, "Rejected session token");
                AuthState::SignedOut
            }
        }
    }
}
