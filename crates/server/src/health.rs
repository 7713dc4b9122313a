use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use farely_core::config::{LlmConfig, LlmProvider};

#[derive(Clone)]
pub struct HealthState {
    provider: &'static str,
    model: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub model: HealthCheck,
    pub checked_at: String,
}

pub fn router(llm: &LlmConfig) -> Router {
    let provider = match llm.provider {
        LlmProvider::OpenAi => "openai",
        LlmProvider::Ollama => "ollama",
    };
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState { provider, model: llm.model.clone() })
}

// The model check reports configuration only; a live probe would spend real
// model calls on every poll.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        service: HealthCheck { status: "ok", detail: "accepting requests".to_string() },
        model: HealthCheck {
            status: "ok",
            detail: format!("{} / {}", state.provider, state.model),
        },
        checked_at: Utc::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use farely_core::config::AppConfig;

    use super::router;

    #[tokio::test]
    async fn health_reports_the_configured_model() {
        let config = AppConfig::default();
        let app = router(&config.llm);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
            .await
            .expect("handler responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"]["detail"], "ollama / llama3.1");
    }
}
