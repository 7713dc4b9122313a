use std::sync::Arc;

use tracing::{debug, info, warn};

use farely_core::search::validator::{validate, Verdict};
use farely_core::{FlightDetails, SearchConstraints, SearchOutcome};

use crate::conversation::Conversation;
use crate::error::AgentError;
use crate::extraction::ExtractionAgent;
use crate::llm::LlmClient;
use crate::usage::{Usage, UsageLimits};
use crate::wire;

const SYSTEM_PROMPT: &str = "Your job is to find the cheapest flight for the user on \
    the given date. Reply with a single JSON object: either \
    {\"kind\":\"flight\",\"flight_number\":\"...\",\"price\":0,\"origin\":\"...\",\
    \"destination\":\"...\",\"date\":\"YYYY-MM-DD\"} for the chosen offer, or \
    {\"kind\":\"no_flight_found\"} if no offer matches the request.";

/// Terminal result of the search workflow. `Exhausted` is a definitive
/// failure distinct from a clean `NoFlightFound`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResolution {
    Flight(FlightDetails),
    NoFlightFound,
    Exhausted(ExhaustedReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExhaustedReason {
    RetriesExceeded { attempts: u32 },
    BudgetExhausted { limit: u32 },
}

/// Drives a search to a terminal state: extract candidates once, then
/// propose-and-validate until a verdict is accepted or a ceiling is hit.
///
/// The loop carries the attempt count, the shared call budget, and the
/// conversation; a rejected proposal's feedback becomes the next user turn.
pub struct SearchAgent {
    llm: Arc<dyn LlmClient>,
    extraction: ExtractionAgent,
    limits: UsageLimits,
    max_retries: u32,
}

impl SearchAgent {
    pub fn new(llm: Arc<dyn LlmClient>, limits: UsageLimits, max_retries: u32) -> Self {
        Self {
            extraction: ExtractionAgent::new(Arc::clone(&llm), limits),
            llm,
            limits,
            max_retries,
        }
    }

    pub async fn run(
        &self,
        constraints: &SearchConstraints,
        source_text: &str,
    ) -> Result<SearchResolution, AgentError> {
        let mut usage = Usage::new();
        self.run_with_usage(constraints, source_text, &mut usage).await
    }

    pub async fn run_with_usage(
        &self,
        constraints: &SearchConstraints,
        source_text: &str,
        usage: &mut Usage,
    ) -> Result<SearchResolution, AgentError> {
        let mut conversation = Conversation::with_system(SYSTEM_PROMPT);
        conversation.push_user(format!(
            "Find me a flight from {} to {} on {}",
            constraints.origin, constraints.destination, constraints.date
        ));

        // The corpus is fixed for the life of the process, so extraction
        // runs once and its candidates are reused across retries.
        let candidates = match self.extraction.extract(source_text, usage).await {
            Ok(candidates) => candidates,
            Err(AgentError::Budget(exceeded)) => {
                return Ok(SearchResolution::Exhausted(ExhaustedReason::BudgetExhausted {
                    limit: exceeded.limit,
                }));
            }
            Err(other) => return Err(other),
        };
        conversation.push_user(render_candidates(&candidates));

        for attempt in 0..=self.max_retries {
            if let Err(exceeded) = usage.record(&self.limits) {
                warn!(
                    event_name = "agent.search.budget_exhausted",
                    limit = exceeded.limit,
                    attempt,
                    "search stopped by call budget"
                );
                return Ok(SearchResolution::Exhausted(ExhaustedReason::BudgetExhausted {
                    limit: exceeded.limit,
                }));
            }

            let reply = self.llm.complete(conversation.messages()).await?;
            conversation.push_assistant(reply.clone());

            let outcome = wire::parse_proposal(&reply)?;
            match validate(outcome, constraints) {
                Verdict::Accepted(SearchOutcome::Flight(flight)) => {
                    info!(
                        event_name = "agent.search.accepted",
                        flight_number = %flight.flight_number,
                        price = flight.price,
                        attempt,
                        "flight accepted"
                    );
                    return Ok(SearchResolution::Flight(flight));
                }
                Verdict::Accepted(SearchOutcome::NoFlightFound) => {
                    info!(
                        event_name = "agent.search.no_flight_found",
                        attempt,
                        "search concluded without a match"
                    );
                    return Ok(SearchResolution::NoFlightFound);
                }
                Verdict::Retry { feedback } => {
                    debug!(
                        event_name = "agent.search.retry_requested",
                        attempt,
                        feedback = %feedback,
                        "proposal rejected"
                    );
                    conversation.push_feedback(&feedback);
                }
            }
        }

        warn!(
            event_name = "agent.search.retries_exhausted",
            max_retries = self.max_retries,
            "search stopped by retry ceiling"
        );
        Ok(SearchResolution::Exhausted(ExhaustedReason::RetriesExceeded {
            attempts: self.max_retries,
        }))
    }
}

fn render_candidates(candidates: &[FlightDetails]) -> String {
    if candidates.is_empty() {
        return "No flight offers were found in the page text.".to_string();
    }

    let mut rendered = String::from("Flight offers found in the page text:\n");
    for flight in candidates {
        rendered.push_str(&format!(
            "- {} for ${} from {} to {} on {}\n",
            flight.flight_number, flight.price, flight.origin, flight.destination, flight.date
        ));
    }
    rendered
}
