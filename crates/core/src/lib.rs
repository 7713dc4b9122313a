pub mod config;
pub mod domain;
pub mod search;

pub use domain::flight::{FlightDetails, SearchOutcome};
pub use domain::seat::{SeatError, SeatLetter, SeatOutcome, SeatPreference};
pub use domain::trip::SearchConstraints;
pub use search::validator::{validate, Verdict};
