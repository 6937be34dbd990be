use crate::arrival::{parse_date, parse_time, ArrivalWindow};
use crate::data::{Destination, TravelInfo};
use crate::form_state::FormField;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    Missing,
    Malformed,
    OutsideArrivalWindow,
    NotOfferedForTravelType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: FormField,
    pub problem: Problem,
}

impl Display for FieldProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = self.field.label();
        match self.problem {
            Problem::Missing => write!(f, "{label} is required"),
            Problem::Malformed => write!(f, "{label} is not in the expected format"),
            Problem::OutsideArrivalWindow => write!(f, "{label} is outside the accepted dates"),
            Problem::NotOfferedForTravelType => {
                write!(f, "{label} is not available for this travel type")
            }
        }
    }
}

impl TravelInfo {
    /// Server-side mirror of the form's `required`, `min` and `max` markers.
    pub fn validate(&self, window: &ArrivalWindow) -> Result<(), Vec<FieldProblem>> {
        let mut problems = Vec::new();
        let mut report = |field, problem| problems.push(FieldProblem { field, problem });

        let required = [
            (FormField::Name, &self.name),
            (FormField::Phone, &self.phone),
            (FormField::FlightNumber, &self.flight_number),
            (FormField::Destination, &self.destination),
            (FormField::ArrivalDate, &self.arrival_date),
            (FormField::ArrivalTime, &self.arrival_time),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                report(field, Problem::Missing);
            }
        }

        if !self.destination.is_empty() {
            let offered = Destination::from_code(&self.destination)
                .map(|destination| destination.travel_type() == self.travel_type)
                .unwrap_or(false);
            if !offered {
                report(FormField::Destination, Problem::NotOfferedForTravelType);
            }
        }

        if !self.arrival_date.is_empty() {
            match parse_date(&self.arrival_date) {
                Some(date) if !window.contains(date) => {
                    report(FormField::ArrivalDate, Problem::OutsideArrivalWindow)
                }
                Some(_) => {}
                None => report(FormField::ArrivalDate, Problem::Malformed),
            }
        }

        if !self.arrival_time.is_empty() && parse_time(&self.arrival_time).is_none() {
            report(FormField::ArrivalTime, Problem::Malformed);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldProblem, Problem};
    use crate::arrival::ArrivalWindow;
    use crate::data::{TravelInfo, TravelType};
    use crate::form_state::FormField;

    fn complete() -> TravelInfo {
        TravelInfo {
            name: "Jane Doe".to_string(),
            phone: "(401) 555-1234".to_string(),
            flight_number: "AA100".to_string(),
            destination: "tf_green".to_string(),
            arrival_date: "2025-06-01".to_string(),
            arrival_time: "14:30".to_string(),
            ..TravelInfo::default()
        }
    }

    #[test]
    fn test_complete_record_is_valid() {
        assert_eq!(complete().validate(&ArrivalWindow::default()), Ok(()));
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let problems = TravelInfo::default()
            .validate(&ArrivalWindow::default())
            .unwrap_err();

        assert_eq!(problems.len(), 6);
        assert!(problems
            .iter()
            .all(|problem| problem.problem == Problem::Missing));
    }

    #[test]
    fn test_train_destinations_are_rejected_for_flights() {
        let info = TravelInfo {
            destination: "providence_station".to_string(),
            ..complete()
        };
        let as_train = TravelInfo {
            travel_type: TravelType::Train,
            ..info.clone()
        };

        assert_eq!(
            info.validate(&ArrivalWindow::default()),
            Err(vec![FieldProblem {
                field: FormField::Destination,
                problem: Problem::NotOfferedForTravelType,
            }])
        );
        assert_eq!(as_train.validate(&ArrivalWindow::default()), Ok(()));
    }

    #[test]
    fn test_arrival_outside_the_window_is_rejected() {
        let info = TravelInfo {
            arrival_date: "2026-01-02".to_string(),
            arrival_time: "25:00".to_string(),
            ..complete()
        };

        let problems = info.validate(&ArrivalWindow::default()).unwrap_err();

        assert_eq!(
            problems
                .iter()
                .map(|problem| problem.to_string())
                .collect::<Vec<_>>(),
            vec![
                "Estimated Arrival Date is outside the accepted dates",
                "Estimated Arrival Time is not in the expected format",
            ]
        );
    }
}
