use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One candidate flight offer recognized in page text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDetails {
    pub flight_number: String,
    pub price: u32,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// Terminal result of one search: a concrete flight, or the distinguished
/// "nothing matched" sentinel. Callers must branch on the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    Flight(FlightDetails),
    NoFlightFound,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{FlightDetails, SearchOutcome};

    fn sample_flight() -> FlightDetails {
        FlightDetails {
            flight_number: "SFO-AK123".to_owned(),
            price: 350,
            origin: "SFO".to_owned(),
            destination: "ANC".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date"),
        }
    }

    #[test]
    fn search_outcome_round_trips_with_kind_tag() {
        let serialized = serde_json::to_value(SearchOutcome::Flight(sample_flight()))
            .expect("outcome serializes");
        assert_eq!(serialized["kind"], "flight");
        assert_eq!(serialized["flight_number"], "SFO-AK123");
        assert_eq!(serialized["date"], "2025-01-10");

        let sentinel = serde_json::to_value(SearchOutcome::NoFlightFound)
            .expect("sentinel serializes");
        assert_eq!(sentinel["kind"], "no_flight_found");
    }

    #[test]
    fn flight_outcome_parses_from_tagged_json() {
        let parsed: SearchOutcome = serde_json::from_str(
            r#"{"kind":"flight","flight_number":"SFO-AK123","price":350,"origin":"SFO","destination":"ANC","date":"2025-01-10"}"#,
        )
        .expect("tagged flight parses");
        assert_eq!(parsed, SearchOutcome::Flight(sample_flight()));
    }
}
