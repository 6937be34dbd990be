use crate::arrival::ArrivalDisplay;
use crate::data::{Destination, PaymentMethods, RideAccounts, TravelType};
use crate::query_string::{keys, QueryParams};

pub const FORM_PATH: &str = "/";

/// Display-ready record rebuilt from the summary page's query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravelSummary {
    pub name: String,
    pub phone: String,
    pub flight_number: String,
    pub travel_type: String,
    pub destination: String,
    pub arrival_date: String,
    pub arrival: ArrivalDisplay,
    pub payment_methods: PaymentMethods,
    pub accounts: RideAccounts,
}

impl TravelSummary {
    pub fn decode(raw_query: &str) -> Self {
        let params = QueryParams::parse_lossy(raw_query);
        let arrival_date = params.get_or_empty(keys::ARRIVAL_DATE);
        let arrival_time = params.get_or_empty(keys::ARRIVAL_TIME);
        let travel_type = params
            .get(keys::TRAVEL_TYPE)
            .map(|code| {
                TravelType::from_code(code)
                    .map(|kind| kind.label().to_owned())
                    .unwrap_or_else(|| code.to_owned())
            })
            .unwrap_or_default();

        TravelSummary {
            name: params.get_or_empty(keys::NAME),
            phone: params.get_or_empty(keys::PHONE),
            flight_number: params.get_or_empty(keys::FLIGHT_NUMBER),
            travel_type,
            destination: Destination::label_for(&params.get_or_empty(keys::DESTINATION)),
            arrival: ArrivalDisplay::from_parts(&arrival_date, &arrival_time),
            arrival_date,
            payment_methods: params.json_or_default(keys::PAYMENT_METHODS),
            accounts: params.json_or_default(keys::ACCOUNTS),
        }
    }

    pub fn payment_display(&self) -> String {
        self.payment_methods.display()
    }

    pub fn accounts_display(&self) -> String {
        self.accounts.display()
    }
}

/// The "Edit Response" target: back to the form, carrying the submitted
/// query so the form can restore what was entered.
pub fn edit_path(raw_query: &str) -> String {
    let raw_query = raw_query.strip_prefix('?').unwrap_or(raw_query);
    if raw_query.is_empty() {
        return FORM_PATH.to_owned();
    }
    format!("{FORM_PATH}?{raw_query}")
}
