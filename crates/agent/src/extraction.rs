use std::sync::Arc;

use tracing::info;

use farely_core::FlightDetails;

use crate::error::AgentError;
use crate::llm::{ChatMessage, LlmClient};
use crate::usage::{Usage, UsageLimits};
use crate::wire;

const SYSTEM_PROMPT: &str = "Extract all the flight details from the given text. \
    Reply with a JSON array of objects, each with fields flight_number (string), \
    price (integer, dollars), origin (string, airport code), destination (string, \
    airport code), and date (YYYY-MM-DD). Reply with [] if the text contains no \
    flights.";

/// Syntactic recognition of flight-shaped data in opaque text. Performs no
/// validation against the caller's constraints; that is the search
/// workflow's job.
pub struct ExtractionAgent {
    llm: Arc<dyn LlmClient>,
    limits: UsageLimits,
}

impl ExtractionAgent {
    pub fn new(llm: Arc<dyn LlmClient>, limits: UsageLimits) -> Self {
        Self { llm, limits }
    }

    /// Mine `source_text` for flight offers. Consumes one unit of the
    /// caller's budget.
    pub async fn extract(
        &self,
        source_text: &str,
        usage: &mut Usage,
    ) -> Result<Vec<FlightDetails>, AgentError> {
        usage.record(&self.limits)?;

        let messages =
            [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(source_text.to_string())];
        let reply = self.llm.complete(&messages).await?;
        let flights = wire::parse_flight_list(&reply)?;

        info!(
            event_name = "agent.extraction.completed",
            flight_count = flights.len(),
            "found {} flights",
            flights.len()
        );

        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::AgentError;
    use crate::testing::ScriptedLlm;
    use crate::usage::{Usage, UsageLimits};

    use super::ExtractionAgent;

    #[tokio::test]
    async fn extraction_parses_a_fenced_flight_array() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec![
            "```json\n[{\"flight_number\":\"SFO-AK123\",\"price\":350,\"origin\":\"SFO\",\"destination\":\"ANC\",\"date\":\"2025-01-10\"}]\n```".to_string(),
        ]));
        let agent = ExtractionAgent::new(llm.clone(), UsageLimits::default());
        let mut usage = Usage::new();

        let flights = agent.extract("page text", &mut usage).await.expect("extraction succeeds");

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].price, 350);
        assert_eq!(usage.requests(), 1);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn extraction_refuses_once_the_budget_is_spent() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec!["[]".to_string()]));
        let agent = ExtractionAgent::new(llm.clone(), UsageLimits { request_limit: 0 });
        let mut usage = Usage::new();

        let error = agent
            .extract("page text", &mut usage)
            .await
            .expect_err("zero budget admits no call");

        assert!(matches!(error, AgentError::Budget(_)));
        assert_eq!(llm.calls(), 0, "the model must not be called past the budget");
    }

    #[tokio::test]
    async fn garbled_extraction_reply_is_a_malformed_reply_error() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec!["no flights here".to_string()]));
        let agent = ExtractionAgent::new(llm, UsageLimits::default());
        let mut usage = Usage::new();

        let error = agent.extract("page text", &mut usage).await.expect_err("garbage must fail");
        assert!(matches!(error, AgentError::MalformedReply(_)));
    }
}
