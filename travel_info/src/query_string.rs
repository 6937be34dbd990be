use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::form_urlencoded;

/// Query-string keys shared by the form, the submit redirect and the summary.
pub mod keys {
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
    pub const FLIGHT_NUMBER: &str = "flightNumber";
    pub const TRAVEL_TYPE: &str = "travelType";
    pub const DESTINATION: &str = "destination";
    pub const ARRIVAL_DATE: &str = "arrivalDate";
    pub const ARRIVAL_TIME: &str = "arrivalTime";
    pub const PAYMENT_METHODS: &str = "paymentMethods";
    pub const ACCOUNTS: &str = "accounts";
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryStringError {
    #[error("query parameter `{0}` is not valid UTF-8 once decoded")]
    InvalidEncoding(String),
}

/// Decoded `application/x-www-form-urlencoded` pairs in their original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Decodes every pair, failing on the first key or value whose
    /// percent-escapes do not form UTF-8.
    pub fn parse_strict(raw: &str) -> Result<Self, QueryStringError> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<(String, String), QueryStringError> {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode_component(key)
                    .map_err(|_| QueryStringError::InvalidEncoding(key.to_owned()))?;
                let value = decode_component(value)
                    .map_err(|_| QueryStringError::InvalidEncoding(key.clone()))?;
                Ok((key, value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QueryParams(pairs))
    }

    /// Decodes every pair, replacing invalid sequences with U+FFFD.
    pub fn parse_lossy(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        QueryParams(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// First value for `key`, like `URLSearchParams.get`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_owned()
    }

    /// Parses a JSON-valued parameter, falling back to `T::default()` when the
    /// key is missing or the value is not the expected JSON.
    pub fn json_or_default<T>(&self, key: &str) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let Some(value) = self.get(key) else {
            return T::default();
        };
        serde_json::from_str(value).unwrap_or_else(|err| {
            tracing::debug!(key, %err, "falling back to default for malformed JSON parameter");
            T::default()
        })
    }
}

fn decode_component(raw: &str) -> Result<String, std::str::Utf8Error> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{QueryParams, QueryStringError};
    use crate::data::PaymentMethods;

    #[test]
    fn test_strict_parsing_decodes_plus_and_escapes() {
        let params =
            QueryParams::parse_strict("?name=Jane+Doe&phone=%28401%29%20555-1234").unwrap();

        assert_eq!(params.get("name"), Some("Jane Doe"));
        assert_eq!(params.get("phone"), Some("(401) 555-1234"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_strict_parsing_rejects_invalid_utf8() {
        let result = QueryParams::parse_strict("name=Jane&flightNumber=%FF%FE");

        assert_eq!(
            result,
            Err(QueryStringError::InvalidEncoding("flightNumber".to_string()))
        );
    }

    #[test]
    fn test_lossy_parsing_never_fails() {
        let params = QueryParams::parse_lossy("flightNumber=%FF");

        assert_eq!(params.get("flightNumber"), Some("\u{FFFD}"));
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::parse_lossy("name=first&name=second");

        assert_eq!(params.get("name"), Some("first"));
    }

    #[test]
    fn test_json_parameters_fall_back_to_default() {
        let params = QueryParams::parse_lossy("paymentMethods=not-json");

        let methods: PaymentMethods = params.json_or_default("paymentMethods");
        let missing: PaymentMethods = params.json_or_default("accounts");

        assert_eq!(methods, PaymentMethods::default());
        assert_eq!(missing, PaymentMethods::default());
    }
}
