//! Agent layer - LLM-backed flight search and seat parsing
//!
//! This crate is the model-facing half of the service:
//! - **Extraction** (`extraction`) - mine page text for flight-shaped records
//! - **Search** (`search`) - pick a flight under a retry ceiling and call budget
//! - **Seat parsing** (`seat`) - one-shot free text -> structured seat choice
//! - **Transport** (`llm`) - the pluggable `LlmClient` trait and its HTTP impl
//!
//! # Control flow
//!
//! The search workflow is an explicit bounded loop, not exception-driven:
//! each cycle makes one budgeted model call, validates the proposal against
//! the caller's constraints, and either terminates or folds the validator's
//! feedback into the conversation for the next attempt. Both ceilings (4
//! retries, 15 model calls by default) strictly decrease, so the loop always
//! terminates.
//!
//! # Safety principle
//!
//! The model only proposes. Acceptance is decided by the deterministic
//! validator in `farely-core`; a proposal that contradicts the request never
//! leaves this crate as a success.

pub mod conversation;
pub mod error;
pub mod extraction;
pub mod llm;
pub mod search;
pub mod seat;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod usage;
pub mod wire;

pub use error::AgentError;
pub use llm::{ChatMessage, ChatRole, HttpLlmClient, LlmClient, LlmError};
pub use search::{ExhaustedReason, SearchAgent, SearchResolution};
pub use seat::SeatPreferenceAgent;
pub use usage::{Usage, UsageExceeded, UsageLimits};
pub use wire::MalformedReply;
