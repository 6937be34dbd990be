use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// The arrival moment shown on the summary page. Date and time arrive as
/// separate form fields and are only combined once both are well formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalDisplay {
    At(NaiveDateTime),
    Unavailable,
}

impl ArrivalDisplay {
    pub fn from_parts(date: &str, time: &str) -> Self {
        match (parse_date(date), parse_time(time)) {
            (Some(date), Some(time)) => ArrivalDisplay::At(date.and_time(time)),
            _ => ArrivalDisplay::Unavailable,
        }
    }
}

impl Display for ArrivalDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrivalDisplay::At(moment) => write!(f, "{}", moment.format("%-I:%M:%S %p")),
            ArrivalDisplay::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Inclusive range of arrival dates the form accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ArrivalWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl ArrivalWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }

    pub fn earliest_attr(&self) -> String {
        self.earliest.format(DATE_FORMAT).to_string()
    }

    pub fn latest_attr(&self) -> String {
        self.latest.format(DATE_FORMAT).to_string()
    }
}

impl Default for ArrivalWindow {
    fn default() -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN),
            latest: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}
