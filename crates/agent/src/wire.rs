//! Coercion of raw model replies into domain types.
//!
//! Models are asked for bare JSON but routinely wrap it in Markdown code
//! fences; stripping happens before parsing. The proposal and seat shapes
//! reuse the domain enums' own tagged serde representation, so the wire
//! contract and the domain contract cannot drift apart.

use serde::de::DeserializeOwned;
use thiserror::Error;

use farely_core::{FlightDetails, SearchOutcome, SeatOutcome};

#[derive(Debug, Error)]
#[error("model reply did not match the expected JSON contract: {detail}")]
pub struct MalformedReply {
    detail: String,
}

fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse<T: DeserializeOwned>(reply: &str) -> Result<T, MalformedReply> {
    serde_json::from_str(strip_code_fences(reply))
        .map_err(|err| MalformedReply { detail: err.to_string() })
}

/// Extraction replies: a JSON array of flight records, possibly empty.
pub fn parse_flight_list(reply: &str) -> Result<Vec<FlightDetails>, MalformedReply> {
    parse(reply)
}

/// Search replies: one tagged proposal object.
pub fn parse_proposal(reply: &str) -> Result<SearchOutcome, MalformedReply> {
    parse(reply)
}

/// Seat replies coerce leniently: anything that is not a well-formed,
/// in-range seat object is a parse failure, never an error. This covers the
/// model answering `failed`, emitting an out-of-range row (the domain type
/// refuses to deserialize it), or emitting garbage.
pub fn parse_seat(reply: &str) -> SeatOutcome {
    parse(reply).unwrap_or(SeatOutcome::Failed)
}
