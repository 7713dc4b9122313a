//! Scripted in-memory model clients for tests. No network, no tokens.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{ChatMessage, LlmClient, LlmError};

/// Replays canned replies in order. With `repeating`, the final reply is
/// replayed forever once the script runs out; otherwise an exhausted script
/// surfaces as an empty-reply error.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<String>>,
    last_reply: Mutex<Option<String>>,
    repeat_last: bool,
    calls: AtomicU32,
}

impl ScriptedLlm {
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last_reply: Mutex::new(None),
            repeat_last: false,
            calls: AtomicU32::new(0),
        }
    }

    pub fn repeating(replies: Vec<String>) -> Self {
        Self { repeat_last: true, ..Self::with_replies(replies) }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.replies.lock().expect("scripted replies lock").pop_front();
        match next {
            Some(reply) => {
                if self.repeat_last {
                    *self.last_reply.lock().expect("last reply lock") = Some(reply.clone());
                }
                Ok(reply)
            }
            None => {
                let last = self.last_reply.lock().expect("last reply lock").clone();
                match (self.repeat_last, last) {
                    (true, Some(reply)) => Ok(reply),
                    _ => Err(LlmError::EmptyReply),
                }
            }
        }
    }
}
