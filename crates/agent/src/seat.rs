use std::sync::Arc;

use tracing::info;

use farely_core::SeatOutcome;

use crate::error::AgentError;
use crate::llm::{ChatMessage, LlmClient};
use crate::usage::{Usage, UsageLimits};
use crate::wire;

const SYSTEM_PROMPT: &str = "Extract the user's seat preference. \
    Seats A and F are window seats. \
    Row 1 is the front row and has extra leg room. \
    Rows 14, and 20 also have extra leg room. \
    Reply with a single JSON object: {\"kind\":\"seat\",\"row\":N,\"seat\":\"X\"} \
    with row between 1 and 30 and seat one of A-F when the preference is clear, \
    or {\"kind\":\"failed\"} when it cannot be determined.";

/// Stateless single-pass parse of free-text seat requests. A bad parse is
/// reported immediately as `Failed`, never retried.
pub struct SeatPreferenceAgent {
    llm: Arc<dyn LlmClient>,
    limits: UsageLimits,
}

impl SeatPreferenceAgent {
    pub fn new(llm: Arc<dyn LlmClient>, limits: UsageLimits) -> Self {
        Self { llm, limits }
    }

    pub async fn parse(&self, seat_text: &str) -> Result<SeatOutcome, AgentError> {
        // Each parse gets its own budget; a seat request can never starve a
        // concurrent search.
        let mut usage = Usage::new();
        usage.record(&self.limits)?;

        let messages =
            [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(seat_text.to_string())];
        let reply = self.llm.complete(&messages).await?;
        let outcome = wire::parse_seat(&reply);

        info!(
            event_name = "agent.seat.parsed",
            parsed = matches!(outcome, SeatOutcome::Seat(_)),
            "seat preference parsed"
        );

        Ok(outcome)
    }
}
