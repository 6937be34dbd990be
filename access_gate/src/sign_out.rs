use crate::gate::AuthState;
use crate::SessionId;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

pub const SIGN_IN_PATH: &str = "/sign-in";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Ends the session on the provider's side.
    async fn sign_out(&self, session: &SessionId) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    NavigateTo(&'static str),
    StayOnPage,
}

pub struct SignOutInteractor {
    provider: Arc<dyn IdentityProvider>,
}

impl SignOutInteractor {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Signs the caller out and sends them to the sign-in page. A provider
    /// failure is logged and leaves the caller where they were.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn sign_out(&self, state: &AuthState) -> SignOutOutcome {
        tracing::info!("Attempting to sign out");
        let Some(session) = state.session() else {
            return SignOutOutcome::NavigateTo(SIGN_IN_PATH);
        };

        match self.provider.sign_out(session).await {
            Ok(()) => {
                tracing::info!("Sign out successful, redirecting to sign-in");
                SignOutOutcome::NavigateTo(SIGN_IN_PATH)
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error signing out");
                SignOutOutcome::StayOnPage
            }
        }
    }
}
