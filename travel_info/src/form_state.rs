use crate::data::{PaymentMethod, RideAccount, TravelInfo, TravelType};
use crate::phone::format_phone;
use crate::query_string::{keys, QueryParams, QueryStringError};

/// Scalar fields of the form, addressable by their query-string key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Phone,
    FlightNumber,
    TravelType,
    Destination,
    ArrivalDate,
    ArrivalTime,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Phone,
        FormField::FlightNumber,
        FormField::TravelType,
        FormField::Destination,
        FormField::ArrivalDate,
        FormField::ArrivalTime,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => keys::NAME,
            FormField::Phone => keys::PHONE,
            FormField::FlightNumber => keys::FLIGHT_NUMBER,
            FormField::TravelType => keys::TRAVEL_TYPE,
            FormField::Destination => keys::DESTINATION,
            FormField::ArrivalDate => keys::ARRIVAL_DATE,
            FormField::ArrivalTime => keys::ARRIVAL_TIME,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Phone => "Phone Number",
            FormField::FlightNumber => "Flight Number",
            FormField::TravelType => "Travel Type",
            FormField::Destination => "Destination",
            FormField::ArrivalDate => "Estimated Arrival Date",
            FormField::ArrivalTime => "Estimated Arrival Time",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FormField::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// A single edit to the in-progress form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    Changed { field: FormField, value: String },
    PaymentMethodToggled(PaymentMethod),
    RideAccountToggled(RideAccount),
    /// A submitted checkbox; selects the method however often it repeats.
    PaymentMethodChecked(PaymentMethod),
    RideAccountChecked(RideAccount),
}

impl FieldUpdate {
    /// Checkbox name used by the HTML form for payment methods.
    pub const PAYMENT_METHOD_INPUT: &'static str = "paymentMethod";
    /// Checkbox name used by the HTML form for ride-share accounts.
    pub const RIDE_ACCOUNT_INPUT: &'static str = "account";

    /// Maps one submitted `name=value` pair onto an update. A checked box
    /// arrives as `paymentMethod=venmo` and selects that method.
    pub fn from_form_pair(name: &str, value: &str) -> Option<Self> {
        match name {
            Self::PAYMENT_METHOD_INPUT => {
                PaymentMethod::from_key(value).map(FieldUpdate::PaymentMethodChecked)
            }
            Self::RIDE_ACCOUNT_INPUT => {
                RideAccount::from_key(value).map(FieldUpdate::RideAccountChecked)
            }
            _ => FormField::from_key(name).map(|field| FieldUpdate::Changed {
                field,
                value: value.to_owned(),
            }),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormStateStore {
    info: TravelInfo,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &TravelInfo {
        &self.info
    }

    pub fn into_inner(self) -> TravelInfo {
        self.info
    }

    pub fn reset(&mut self) {
        self.info = TravelInfo::default();
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        let info = &mut self.info;
        match update {
            FieldUpdate::Changed { field, value } => match field {
                FormField::Name => info.name = value,
                FormField::Phone => info.phone = format_phone(&value),
                FormField::FlightNumber => info.flight_number = value,
                FormField::TravelType => match TravelType::from_code(&value) {
                    Some(travel_type) => info.travel_type = travel_type,
                    None => tracing::debug!(value, "ignoring unknown travel type"),
                },
                FormField::Destination => info.destination = value,
                FormField::ArrivalDate => info.arrival_date = value,
                FormField::ArrivalTime => info.arrival_time = value,
            },
            FieldUpdate::PaymentMethodToggled(method) => info.payment_methods.toggle(method),
            FieldUpdate::RideAccountToggled(account) => info.accounts.toggle(account),
            FieldUpdate::PaymentMethodChecked(method) => info.payment_methods.select(method),
            FieldUpdate::RideAccountChecked(account) => info.accounts.select(account),
        }
    }

    /// Restores a previously submitted record from its query string.
    ///
    /// Nothing happens unless a non-empty `name` is present. A query string
    /// that cannot be decoded leaves the store empty rather than partially
    /// filled.
    pub fn hydrate_from(&mut self, raw_query: &str) {
        match Self::try_hydrate(raw_query) {
            Ok(Some(info)) => self.info = info,
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%err, "Error restoring form data");
                self.reset();
            }
        }
    }

    fn try_hydrate(raw_query: &str) -> Result<Option<TravelInfo>, QueryStringError> {
        let params = QueryParams::parse_strict(raw_query)?;
        let name = match params.get(keys::NAME) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => return Ok(None),
        };

        Ok(Some(TravelInfo {
            name,
            phone: params.get_or_empty(keys::PHONE),
            flight_number: params.get_or_empty(keys::FLIGHT_NUMBER),
            travel_type: params
                .get(keys::TRAVEL_TYPE)
                .and_then(TravelType::from_code)
                .unwrap_or_default(),
            destination: params.get_or_empty(keys::DESTINATION),
            arrival_date: params.get_or_empty(keys::ARRIVAL_DATE),
            arrival_time: params.get_or_empty(keys::ARRIVAL_TIME),
            payment_methods: params.json_or_default(keys::PAYMENT_METHODS),
            accounts: params.json_or_default(keys::ACCOUNTS),
        }))
    }
}

impl FromIterator<FieldUpdate> for FormStateStore {
    fn from_iter<I: IntoIterator<Item = FieldUpdate>>(updates: I) -> Self {
        let mut store = FormStateStore::new();
        updates.into_iter().for_each(|update| store.apply(update));
        store
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldUpdate, FormField, FormStateStore};
    use crate::data::{
        PaymentMethod, PaymentMethods, RideAccount, RideAccounts, TravelInfo, TravelType,
    };
    use crate::submission::encode_query;

    fn jane() -> TravelInfo {
        TravelInfo {
            name: "Jane Doe".to_string(),
            phone: "(401) 555-1234".to_string(),
            flight_number: "AA100".to_string(),
            travel_type: TravelType::Flight,
            destination: "tf_green".to_string(),
            arrival_date: "2025-06-01".to_string(),
            arrival_time: "14:30".to_string(),
            payment_methods: PaymentMethods {
                venmo: true,
                zelle: false,
                cashapp: true,
            },
            accounts: RideAccounts {
                uber: true,
                lyft: false,
            },
        }
    }

    #[test]
    fn test_hydrating_from_an_encoded_record_restores_it() {
        let original = jane();
        let mut store = FormStateStore::new();

        store.hydrate_from(&encode_query(&original));

        assert_eq!(store.current(), &original);
    }

    #[test]
    fn test_hydration_keeps_other_fields_when_json_is_malformed() {
        let mut store = FormStateStore::new();

        store.hydrate_from(
            "name=Jane&flightNumber=AA100&paymentMethods=not-json&accounts=%7B%22lyft%22%3Atrue%7D",
        );

        let info = store.current();
        assert_eq!(info.name, "Jane");
        assert_eq!(info.flight_number, "AA100");
        assert_eq!(info.payment_methods, PaymentMethods::default());
        assert!(info.accounts.lyft);
    }

    #[test]
    fn test_undecodable_query_resets_the_whole_record() {
        let mut store = FormStateStore::new();
        store.hydrate_from(&encode_query(&jane()));

        store.hydrate_from("name=Jane&destination=%C3%28");

        assert_eq!(store.current(), &TravelInfo::default());
    }

    #[test]
    fn test_query_without_a_name_leaves_the_store_untouched() {
        let mut store = FormStateStore::new();
        store.apply(FieldUpdate::Changed {
            field: FormField::FlightNumber,
            value: "UA7".to_string(),
        });

        store.hydrate_from("phone=4015551234&flightNumber=AA100");

        assert_eq!(store.current().flight_number, "UA7");
        assert_eq!(store.current().phone, "");
    }

    #[test]
    fn test_toggling_a_payment_method_twice_restores_it() {
        let mut store = FormStateStore::new();
        store.apply(FieldUpdate::PaymentMethodToggled(PaymentMethod::Zelle));
        let before = store.current().payment_methods;

        store.apply(FieldUpdate::PaymentMethodToggled(PaymentMethod::Venmo));
        assert!(store.current().payment_methods.venmo);
        store.apply(FieldUpdate::PaymentMethodToggled(PaymentMethod::Venmo));

        assert_eq!(store.current().payment_methods, before);
        assert!(store.current().payment_methods.zelle);
        assert!(!store.current().payment_methods.cashapp);
    }

    #[test]
    fn test_field_updates_only_touch_their_field() {
        let mut store = FormStateStore::new();
        store.hydrate_from(&encode_query(&jane()));

        store.apply(FieldUpdate::Changed {
            field: FormField::Destination,
            value: "boston_logan".to_string(),
        });
        store.apply(FieldUpdate::RideAccountToggled(RideAccount::Lyft));

        let expected = TravelInfo {
            destination: "boston_logan".to_string(),
            accounts: RideAccounts {
                uber: true,
                lyft: true,
            },
            ..jane()
        };
        assert_eq!(store.current(), &expected);
    }

    #[test]
    fn test_phone_changes_are_formatted() {
        let mut store = FormStateStore::new();

        store.apply(FieldUpdate::Changed {
            field: FormField::Phone,
            value: "401-555-12345".to_string(),
        });

        assert_eq!(store.current().phone, "(401) 555-1234");
    }

    #[test]
    fn test_unknown_travel_type_is_ignored() {
        let mut store = FormStateStore::new();
        store.apply(FieldUpdate::Changed {
            field: FormField::TravelType,
            value: "train".to_string(),
        });
        store.apply(FieldUpdate::Changed {
            field: FormField::TravelType,
            value: "boat".to_string(),
        });

        assert_eq!(store.current().travel_type, TravelType::Train);
    }

    #[test]
    fn test_form_pairs_build_a_record() {
        let pairs = [
            ("name", "Jane Doe"),
            ("phone", "4015551234"),
            ("paymentMethod", "venmo"),
            ("account", "uber"),
            ("account", "bicycle"),
            ("csrf", "ignored"),
        ];

        let store: FormStateStore = pairs
            .iter()
            .filter_map(|(name, value)| FieldUpdate::from_form_pair(name, value))
            .collect();

        let info = store.into_inner();
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.phone, "(401) 555-1234");
        assert!(info.payment_methods.venmo);
        assert!(info.accounts.uber && !info.accounts.lyft);
    }

    #[test]
    fn test_repeated_checkbox_pairs_stay_selected() {
        let pairs = [
            ("paymentMethod", "venmo"),
            ("paymentMethod", "venmo"),
            ("account", "lyft"),
            ("account", "lyft"),
            ("account", "lyft"),
        ];

        let store: FormStateStore = pairs
            .iter()
            .filter_map(|(name, value)| FieldUpdate::from_form_pair(name, value))
            .collect();

        let info = store.into_inner();
        assert!(info.payment_methods.venmo);
        assert!(!info.payment_methods.zelle && !info.payment_methods.cashapp);
        assert!(info.accounts.lyft && !info.accounts.uber);
    }
}
