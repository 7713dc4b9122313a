use thiserror::Error;

use crate::llm::LlmError;
use crate::usage::UsageExceeded;
use crate::wire::MalformedReply;

/// Failures a workflow cannot resolve on its own.
///
/// `Budget` is special: the search workflow intercepts it and terminates in
/// its `Exhausted` state instead of propagating; it only escapes to callers
/// from workflows without a retry loop.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    MalformedReply(#[from] MalformedReply),
    #[error(transparent)]
    Budget(#[from] UsageExceeded),
}
