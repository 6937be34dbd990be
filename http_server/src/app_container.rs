use crate::authentication::SessionVerifier;
use access_gate::{AccessDecision, AccessGate, AuthState, SignOutInteractor};
use actix_web::HttpRequest;
use std::sync::Arc;
use travel_info::ArrivalWindow;
use url::Url;

pub struct Application {
    pub sessions: Arc<dyn SessionVerifier>,
    pub gate: AccessGate,
    pub sign_out: SignOutInteractor,
    pub arrival_window: ArrivalWindow,
    pub sign_in_url: Url,
}

impl Application {
    /// Authentication state of the caller and what the gate makes of it.
    pub fn access(&self, req: &HttpRequest) -> (AuthState, AccessDecision) {
        let state = self.sessions.auth_state(req);
        let decision = self.gate.decide(&state);
        (state, decision)
    }
}
