//! Travel details collected by the arrival form: the record itself, the
//! in-progress form state, and the query-string round trip between the form
//! and the summary page.

pub mod arrival;
pub mod data;
pub mod form_state;
pub mod phone;
pub mod query_string;
pub mod submission;
pub mod summary;
pub mod validation;

pub use arrival::{ArrivalDisplay, ArrivalWindow};
pub use data::{
    Destination, PaymentMethod, PaymentMethods, RideAccount, RideAccounts, TravelInfo, TravelType,
};
pub use form_state::{FieldUpdate, FormField, FormStateStore};
pub use summary::TravelSummary;
