pub mod gate;
pub mod institution;
pub mod sign_out;

use shared_kernel::string_key;

string_key!(SessionId);

pub use gate::{AccessDecision, AccessGate, AuthState, DenialReason};
pub use institution::Institution;
pub use sign_out::{IdentityProvider, SignOutInteractor, SignOutOutcome};
