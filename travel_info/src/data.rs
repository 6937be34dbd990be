use itertools::Itertools;
use serde::Deserialize;
use serde_json::json;

/// The details a student submits about one trip to campus.
///
/// Scalar fields hold exactly what the form submitted; `destination` keeps the
/// raw option code so that unknown codes survive a round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelInfo {
    pub name: String,
    pub phone: String,
    pub flight_number: String,
    pub travel_type: TravelType,
    pub destination: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub payment_methods: PaymentMethods,
    pub accounts: RideAccounts,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TravelType {
    #[default]
    Flight,
    Train,
}

impl TravelType {
    pub const ALL: [TravelType; 2] = [TravelType::Flight, TravelType::Train];

    pub fn code(&self) -> &'static str {
        match self {
            TravelType::Flight => "flight",
            TravelType::Train => "train",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelType::Flight => "Flight",
            TravelType::Train => "Train",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TravelType::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn destinations(&self) -> impl Iterator<Item = Destination> + '_ {
        Destination::ALL
            .into_iter()
            .filter(move |destination| destination.travel_type() == *self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    TfGreen,
    BostonLogan,
    ProvidenceStation,
    BostonSouthStation,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::TfGreen,
        Destination::BostonLogan,
        Destination::ProvidenceStation,
        Destination::BostonSouthStation,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Destination::TfGreen => "tf_green",
            Destination::BostonLogan => "boston_logan",
            Destination::ProvidenceStation => "providence_station",
            Destination::BostonSouthStation => "boston_south_station",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::TfGreen => "T.F. Green",
            Destination::BostonLogan => "Boston Logan",
            Destination::ProvidenceStation => "Providence Station",
            Destination::BostonSouthStation => "Boston South Station",
        }
    }

    pub fn travel_type(&self) -> TravelType {
        match self {
            Destination::TfGreen | Destination::BostonLogan => TravelType::Flight,
            Destination::ProvidenceStation | Destination::BostonSouthStation => TravelType::Train,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Destination::ALL
            .into_iter()
            .find(|destination| destination.code() == code)
    }

    /// Human readable name for a destination code, or the code itself when it
    /// is not one we know about.
    pub fn label_for(code: &str) -> String {
        Destination::from_code(code)
            .map(|destination| destination.label().to_owned())
            .unwrap_or_else(|| code.to_owned())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Venmo,
    Zelle,
    CashApp,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Venmo,
        PaymentMethod::Zelle,
        PaymentMethod::CashApp,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::Venmo => "venmo",
            PaymentMethod::Zelle => "zelle",
            PaymentMethod::CashApp => "cashapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Venmo => "Venmo",
            PaymentMethod::Zelle => "Zelle",
            PaymentMethod::CashApp => "Cash App",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        PaymentMethod::ALL.into_iter().find(|method| method.key() == key)
    }
}

/// Payment apps the student can settle a shared ride with. Missing keys in
/// the JSON form read as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentMethods {
    pub venmo: bool,
    pub zelle: bool,
    pub cashapp: bool,
}

impl PaymentMethods {
    pub fn is_selected(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::Venmo => self.venmo,
            PaymentMethod::Zelle => self.zelle,
            PaymentMethod::CashApp => self.cashapp,
        }
    }

    pub fn toggle(&mut self, method: PaymentMethod) {
        let flag = match method {
            PaymentMethod::Venmo => &mut self.venmo,
            PaymentMethod::Zelle => &mut self.zelle,
            PaymentMethod::CashApp => &mut self.cashapp,
        };
        *flag = !*flag;
    }

    pub fn select(&mut self, method: PaymentMethod) {
        match method {
            PaymentMethod::Venmo => self.venmo = true,
            PaymentMethod::Zelle => self.zelle = true,
            PaymentMethod::CashApp => self.cashapp = true,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = PaymentMethod> + '_ {
        PaymentMethod::ALL
            .into_iter()
            .filter(|method| self.is_selected(*method))
    }

    /// Each selected label followed by a space, e.g. `"Venmo Zelle "`.
    pub fn display(&self) -> String {
        self.selected()
            .map(|method| format!("{} ", method.label()))
            .join("")
    }

    pub fn to_json(&self) -> String {
        json!({
            "venmo": self.venmo,
            "zelle": self.zelle,
            "cashapp": self.cashapp,
        })
        .to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RideAccount {
    Uber,
    Lyft,
}

impl RideAccount {
    pub const ALL: [RideAccount; 2] = [RideAccount::Uber, RideAccount::Lyft];

    pub fn key(&self) -> &'static str {
        match self {
            RideAccount::Uber => "uber",
            RideAccount::Lyft => "lyft",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RideAccount::Uber => "Uber",
            RideAccount::Lyft => "Lyft",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        RideAccount::ALL.into_iter().find(|account| account.key() == key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RideAccounts {
    pub uber: bool,
    pub lyft: bool,
}

impl RideAccounts {
    pub fn is_selected(&self, account: RideAccount) -> bool {
        match account {
            RideAccount::Uber => self.uber,
            RideAccount::Lyft => self.lyft,
        }
    }

    pub fn toggle(&mut self, account: RideAccount) {
        let flag = match account {
            RideAccount::Uber => &mut self.uber,
            RideAccount::Lyft => &mut self.lyft,
        };
        *flag = !*flag;
    }

    pub fn select(&mut self, account: RideAccount) {
        match account {
            RideAccount::Uber => self.uber = true,
            RideAccount::Lyft => self.lyft = true,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = RideAccount> + '_ {
        RideAccount::ALL
            .into_iter()
            .filter(|account| self.is_selected(*account))
    }

    pub fn display(&self) -> String {
        self.selected()
            .map(|account| format!("{} ", account.label()))
            .join("")
    }

    pub fn to_json(&self) -> String {
        json!({
            "uber": self.uber,
            "lyft": self.lyft,
        })
        .to_string()
    }
}
