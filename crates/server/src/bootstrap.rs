use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use farely_agent::{
    HttpLlmClient, LlmClient, LlmError, SearchAgent, SeatPreferenceAgent, UsageLimits,
};
use farely_core::config::AppConfig;

use crate::booking::BookingState;
use crate::corpus;

pub struct Application {
    pub config: AppConfig,
    pub booking: BookingState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("llm client construction failed: {0}")]
    LlmClient(#[source] LlmError),
}

/// Wire the model client and both workflow agents from config. Everything
/// is constructed here and passed in; no global handles.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    let llm: Arc<dyn LlmClient> =
        Arc::new(HttpLlmClient::from_config(&config.llm).map_err(BootstrapError::LlmClient)?);
    let limits = UsageLimits { request_limit: config.search.request_limit };

    let booking = BookingState {
        search: Arc::new(SearchAgent::new(
            Arc::clone(&llm),
            limits,
            config.search.max_retries,
        )),
        seats: Arc::new(SeatPreferenceAgent::new(llm, limits)),
        corpus: corpus::FLIGHTS_WEB_PAGE,
    };

    info!(
        event_name = "system.bootstrap.completed",
        correlation_id = "bootstrap",
        request_limit = config.search.request_limit,
        max_retries = config.search.max_retries,
        "application bootstrap completed"
    );

    Ok(Application { config, booking })
}

#[cfg(test)]
mod tests {
    use farely_core::config::AppConfig;

    use super::bootstrap_with_config;

    #[test]
    fn default_config_bootstraps() {
        let app = bootstrap_with_config(AppConfig::default()).expect("bootstrap succeeds");
        assert!(app.booking.corpus.contains("SFO-AK123"));
        assert_eq!(app.config.search.max_retries, 4);
    }
}
