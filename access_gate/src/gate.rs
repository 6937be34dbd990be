use crate::institution::{Institution, PrimaryEmail};
use crate::SessionId;

/// What the identity provider knows about the caller.
///
/// `Loading` is distinct from `SignedOut` so that pages can wait instead of
/// briefly showing the wrong content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    SignedOut,
    SignedIn {
        session: SessionId,
        primary_email: Option<String>,
    },
}

impl AuthState {
    pub fn session(&self) -> Option<&SessionId> {
        match self {
            AuthState::SignedIn { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialReason {
    NotSignedIn,
    WrongDomain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Denied(DenialReason),
    Allowed { email: String },
}

impl AccessDecision {
    pub fn can_sign_out(&self) -> bool {
        !matches!(self, AccessDecision::Loading)
    }
}

#[derive(Clone, Debug)]
pub struct AccessGate {
    institution: Institution,
}

impl AccessGate {
    pub fn new(institution: Institution) -> Self {
        Self { institution }
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    #[tracing::instrument(skip(self), level = "debug", ret)]
    pub fn decide(&self, state: &AuthState) -> AccessDecision {
        match state {
            AuthState::Loading => AccessDecision::Loading,
            AuthState::SignedOut => AccessDecision::Denied(DenialReason::NotSignedIn),
            AuthState::SignedIn { primary_email, .. } => {
                // Stricter than a bare `ends_with("@brown.edu")`: the address must be
                // well-formed, and `X@BROWN.EDU` is accepted since the match ignores case.
                let email = primary_email
                    .clone()
                    .and_then(|email| PrimaryEmail::try_from(email).ok())
                    .filter(|email| self.institution.issued(email));
                match email {
                    Some(email) => AccessDecision::Allowed {
                        email: email.as_ref().to_owned(),
                    },
                    None => AccessDecision::Denied(DenialReason::WrongDomain),
                }
            }
        }
    }

    /// Explanation shown on the access-restricted page, one paragraph per line.
    pub fn denial_messages(&self, reason: DenialReason) -> Vec<String> {
        let mut messages = vec![format!(
            "Please sign in with your {} email address to access this form.",
            self.institution.name
        )];
        if reason == DenialReason::WrongDomain {
            messages.push(format!(
                "You are currently signed in with a non-{} email address.",
                self.institution.short_name
            ));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessDecision, AccessGate, AuthState, DenialReason};
    use crate::institution::Institution;
    use crate::SessionId;

    fn gate() -> AccessGate {
        AccessGate::new(Institution::brown())
    }

    fn signed_in(email: Option<&str>) -> AuthState {
        AuthState::SignedIn {
            session: SessionId::from("sess_123"),
            primary_email: email.map(str::to_owned),
        }
    }

    #[test]
    fn test_brown_addresses_are_allowed() {
        assert_eq!(
            gate().decide(&signed_in(Some("x@brown.edu"))),
            AccessDecision::Allowed {
                email: "x@brown.edu".to_string()
            }
        );
    }

    #[test]
    fn test_other_domains_are_denied_as_wrong_domain() {
        assert_eq!(
            gate().decide(&signed_in(Some("x@gmail.com"))),
            AccessDecision::Denied(DenialReason::WrongDomain)
        );
        assert_eq!(
            gate().decide(&signed_in(None)),
            AccessDecision::Denied(DenialReason::WrongDomain)
        );
    }

    #[test]
    fn test_domain_match_ignores_case_but_needs_a_real_address() {
        assert_eq!(
            gate().decide(&signed_in(Some("X@BROWN.EDU"))),
            AccessDecision::Allowed {
                email: "X@BROWN.EDU".to_string()
            }
        );
        assert_eq!(
            gate().decide(&signed_in(Some("@brown.edu"))),
            AccessDecision::Denied(DenialReason::WrongDomain)
        );
    }

    #[test]
    fn test_signed_out_callers_are_denied() {
        assert_eq!(
            gate().decide(&AuthState::SignedOut),
            AccessDecision::Denied(DenialReason::NotSignedIn)
        );
    }

    #[test]
    fn test_loading_wins_over_everything_else() {
        let decision = gate().decide(&AuthState::Loading);

        assert_eq!(decision, AccessDecision::Loading);
        assert!(!decision.can_sign_out());
    }

    #[test]
    fn test_wrong_domain_adds_a_second_message() {
        let gate = gate();

        assert_eq!(gate.denial_messages(DenialReason::NotSignedIn).len(), 1);
        assert_eq!(
            gate.denial_messages(DenialReason::WrongDomain),
            vec![
                "Please sign in with your Brown University email address to access this form."
                    .to_string(),
                "You are currently signed in with a non-Brown email address.".to_string(),
            ]
        );
    }
}
