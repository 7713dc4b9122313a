//! Booking routes.
//!
//! - `POST /search_flight` — find a flight for a requested trip (404 when
//!   nothing matches or the search exhausts its budget)
//! - `POST /select_seat`   — parse a free-text seat preference (400 when it
//!   cannot be parsed)
//! - `POST /buy_ticket`    — record a simulated purchase (always succeeds)

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use farely_agent::{AgentError, SearchAgent, SearchResolution, SeatPreferenceAgent};
use farely_core::{FlightDetails, SearchConstraints, SeatOutcome, SeatPreference};

#[derive(Clone)]
pub struct BookingState {
    pub search: Arc<SearchAgent>,
    pub seats: Arc<SeatPreferenceAgent>,
    pub corpus: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SeatRequest {
    pub seat_text: String,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub flight: FlightDetails,
    pub seat: SeatPreference,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub fn router(state: BookingState) -> Router {
    Router::new()
        .route("/search_flight", post(search_flight))
        .route("/select_seat", post(select_seat))
        .route("/buy_ticket", post(buy_ticket))
        .with_state(state)
}

pub async fn search_flight(
    State(state): State<BookingState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<FlightDetails> {
    let correlation_id = Uuid::new_v4();
    let constraints =
        SearchConstraints::new(request.origin, request.destination, request.date);

    info!(
        event_name = "api.search_flight.received",
        correlation_id = %correlation_id,
        origin = %constraints.origin,
        destination = %constraints.destination,
        date = %constraints.date,
        "flight search received"
    );

    match state.search.run(&constraints, state.corpus).await {
        Ok(SearchResolution::Flight(flight)) => Ok(Json(flight)),
        Ok(SearchResolution::NoFlightFound) => {
            info!(
                event_name = "api.search_flight.not_found",
                correlation_id = %correlation_id,
                "no flight matched the request"
            );
            Err(not_found("no flight found"))
        }
        Ok(SearchResolution::Exhausted(reason)) => {
            warn!(
                event_name = "api.search_flight.exhausted",
                correlation_id = %correlation_id,
                reason = ?reason,
                "search exhausted its ceilings without a match"
            );
            Err(not_found("no flight found"))
        }
        Err(error) => Err(upstream_fault(&correlation_id, error)),
    }
}

pub async fn select_seat(
    State(state): State<BookingState>,
    Json(request): Json<SeatRequest>,
) -> ApiResult<SeatPreference> {
    let correlation_id = Uuid::new_v4();

    match state.seats.parse(&request.seat_text).await {
        Ok(SeatOutcome::Seat(preference)) => Ok(Json(preference)),
        Ok(SeatOutcome::Failed) => {
            info!(
                event_name = "api.select_seat.unparseable",
                correlation_id = %correlation_id,
                "seat preference could not be parsed"
            );
            Err((
                StatusCode::BAD_REQUEST,
                Json(ApiError { error: "could not parse seat preference".to_string() }),
            ))
        }
        Err(error) => Err(upstream_fault(&correlation_id, error)),
    }
}

/// Purely a formatting echo: the flight and seat are trusted as given, and
/// nothing is persisted.
pub async fn buy_ticket(Json(request): Json<PurchaseRequest>) -> Json<PurchaseResponse> {
    info!(
        event_name = "api.buy_ticket.purchased",
        flight_number = %request.flight.flight_number,
        seat = %request.seat.label(),
        price = request.flight.price,
        "ticket purchase recorded"
    );

    Json(PurchaseResponse {
        message: format!(
            "Purchased flight {} seat {}",
            request.flight.flight_number,
            request.seat.label()
        ),
    })
}

fn not_found(detail: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError { error: detail.to_string() }))
}

fn upstream_fault(correlation_id: &Uuid, fault: AgentError) -> (StatusCode, Json<ApiError>) {
    error!(
        event_name = "api.upstream_fault",
        correlation_id = %correlation_id,
        error = %fault,
        "model service fault propagated to caller"
    );
    (
        StatusCode::BAD_GATEWAY,
        Json(ApiError { error: "model service error".to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use farely_agent::testing::ScriptedLlm;
    use farely_agent::{SearchAgent, SeatPreferenceAgent, UsageLimits};

    use super::{router, BookingState};

    const TEST_CORPUS: &str = "1. Flight SFO-AK123 ... corpus text ...";

    fn state_with(llm: Arc<ScriptedLlm>) -> BookingState {
        let llm: Arc<dyn farely_agent::LlmClient> = llm;
        BookingState {
            search: Arc::new(SearchAgent::new(Arc::clone(&llm), UsageLimits::default(), 4)),
            seats: Arc::new(SeatPreferenceAgent::new(llm, UsageLimits::default())),
            corpus: TEST_CORPUS,
        }
    }

    async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("handler responds");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn search_flight_returns_the_accepted_record() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec![
            r#"[{"flight_number":"SFO-AK123","price":350,"origin":"SFO","destination":"ANC","date":"2025-01-10"}]"#.to_string(),
            r#"{"kind":"flight","flight_number":"SFO-AK123","price":350,"origin":"SFO","destination":"ANC","date":"2025-01-10"}"#.to_string(),
        ]));
        let app = router(state_with(llm));

        let (status, body) = post(
            app,
            "/search_flight",
            json!({"origin": "SFO", "destination": "ANC", "date": "2025-01-10"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["flight_number"], "SFO-AK123");
        assert_eq!(body["price"], 350);
    }

    #[tokio::test]
    async fn search_flight_maps_no_flight_found_to_404() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec![
            "[]".to_string(),
            r#"{"kind":"no_flight_found"}"#.to_string(),
        ]));
        let app = router(state_with(llm));

        let (status, body) = post(
            app,
            "/search_flight",
            json!({"origin": "SFO", "destination": "ANC", "date": "2025-06-01"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no flight found");
    }

    #[tokio::test]
    async fn search_flight_maps_exhaustion_to_404() {
        let llm = Arc::new(ScriptedLlm::repeating(vec![
            r#"[{"flight_number":"LAX-AK999","price":120,"origin":"LAX","destination":"ANC","date":"2025-01-10"}]"#.to_string(),
            r#"{"kind":"flight","flight_number":"LAX-AK999","price":120,"origin":"LAX","destination":"ANC","date":"2025-01-10"}"#.to_string(),
        ]));
        let app = router(state_with(llm));

        let (status, body) = post(
            app,
            "/search_flight",
            json!({"origin": "SFO", "destination": "ANC", "date": "2025-01-10"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no flight found");
    }

    #[tokio::test]
    async fn search_flight_maps_model_faults_to_502() {
        // An empty script makes the model client fail outright.
        let llm = Arc::new(ScriptedLlm::with_replies(Vec::new()));
        let app = router(state_with(llm));

        let (status, body) = post(
            app,
            "/search_flight",
            json!({"origin": "SFO", "destination": "ANC", "date": "2025-01-10"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "model service error");
    }

    #[tokio::test]
    async fn select_seat_returns_the_parsed_preference() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec![
            r#"{"kind":"seat","row":14,"seat":"F"}"#.to_string(),
        ]));
        let app = router(state_with(llm));

        let (status, body) =
            post(app, "/select_seat", json!({"seat_text": "window with leg room"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["row"], 14);
        assert_eq!(body["seat"], "F");
    }

    #[tokio::test]
    async fn select_seat_maps_parse_failure_to_400() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec![
            r#"{"kind":"seat","row":31,"seat":"C"}"#.to_string(),
        ]));
        let app = router(state_with(llm));

        let (status, body) =
            post(app, "/select_seat", json!({"seat_text": "row 31 aisle"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "could not parse seat preference");
    }

    #[tokio::test]
    async fn buy_ticket_confirmation_names_flight_and_seat() {
        let llm = Arc::new(ScriptedLlm::with_replies(Vec::new()));
        let app = router(state_with(llm));

        let (status, body) = post(
            app,
            "/buy_ticket",
            json!({
                "flight": {
                    "flight_number": "AF123",
                    "price": 350,
                    "origin": "SFO",
                    "destination": "ANC",
                    "date": "2025-01-10"
                },
                "seat": {"row": 1, "seat": "A"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let message = body["message"].as_str().expect("confirmation is a string");
        assert!(message.contains("AF123"));
        assert!(message.contains("1A"));
    }

    #[tokio::test]
    async fn buy_ticket_rejects_an_out_of_range_seat_body() {
        let llm = Arc::new(ScriptedLlm::with_replies(Vec::new()));
        let app = router(state_with(llm));

        let (status, _body) = post(
            app,
            "/buy_ticket",
            json!({
                "flight": {
                    "flight_number": "AF123",
                    "price": 350,
                    "origin": "SFO",
                    "destination": "ANC",
                    "date": "2025-01-10"
                },
                "seat": {"row": 31, "seat": "A"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
