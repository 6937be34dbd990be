use crate::data::TravelInfo;
use crate::query_string::keys;
use url::form_urlencoded;

pub const RESULTS_PATH: &str = "/success";

/// Serialises a record the same way the browser's `URLSearchParams` would:
/// one pair per scalar field followed by the two JSON-encoded checkbox sets.
pub fn encode_query(info: &TravelInfo) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(keys::NAME, &info.name)
        .append_pair(keys::PHONE, &info.phone)
        .append_pair(keys::FLIGHT_NUMBER, &info.flight_number)
        .append_pair(keys::TRAVEL_TYPE, info.travel_type.code())
        .append_pair(keys::DESTINATION, &info.destination)
        .append_pair(keys::ARRIVAL_DATE, &info.arrival_date)
        .append_pair(keys::ARRIVAL_TIME, &info.arrival_time)
        .append_pair(keys::PAYMENT_METHODS, &info.payment_methods.to_json())
        .append_pair(keys::ACCOUNTS, &info.accounts.to_json())
        .finish()
}

/// Where the browser is sent after a successful submit.
pub fn results_path(info: &TravelInfo) -> String {
    format!("{RESULTS_PATH}?{}", encode_query(info))
}
