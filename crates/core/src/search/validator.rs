use crate::domain::flight::SearchOutcome;
use crate::domain::trip::SearchConstraints;

/// Verdict of checking a produced outcome against the original constraints.
///
/// `Retry` is not a terminal failure: the orchestrating workflow folds the
/// feedback into its conversation and searches again, bounded by its retry
/// ceiling and call budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted(SearchOutcome),
    Retry { feedback: String },
}

/// Compare a produced outcome against the requested trip.
///
/// `NoFlightFound` is accepted unconditionally. A flight record is checked
/// on origin, destination, and date with exact equality; every mismatch is
/// collected, one line each, so the next attempt sees all corrections at
/// once instead of discovering them one retry at a time.
pub fn validate(outcome: SearchOutcome, constraints: &SearchConstraints) -> Verdict {
    let flight = match outcome {
        SearchOutcome::NoFlightFound => {
            return Verdict::Accepted(SearchOutcome::NoFlightFound);
        }
        SearchOutcome::Flight(flight) => flight,
    };

    let mut mismatches = Vec::new();
    if flight.origin != constraints.origin {
        mismatches.push(format!("Origin mismatch: {}", flight.origin));
    }
    if flight.destination != constraints.destination {
        mismatches.push(format!("Destination mismatch: {}", flight.destination));
    }
    if flight.date != constraints.date {
        mismatches.push(format!("Date mismatch: {}", flight.date));
    }

    if mismatches.is_empty() {
        Verdict::Accepted(SearchOutcome::Flight(flight))
    } else {
        Verdict::Retry { feedback: mismatches.join("\n") }
    }
}
