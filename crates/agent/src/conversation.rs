use crate::llm::ChatMessage;

/// Ordered transcript of one workflow's exchange with the model.
///
/// Validator feedback is folded in as a user turn, so every later attempt
/// sees the full history of earlier corrections rather than only the latest
/// one.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn with_system(prompt: impl Into<String>) -> Self {
        Self { messages: vec![ChatMessage::system(prompt)] }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Fold a rejected proposal's feedback into the transcript.
    pub fn push_feedback(&mut self, feedback: &str) {
        self.messages.push(ChatMessage::user(format!(
            "The previous answer was rejected:\n{feedback}\n\
             Pick an offer that satisfies the original request exactly, \
             or answer no_flight_found."
        )));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::llm::ChatRole;

    use super::Conversation;

    #[test]
    fn transcript_preserves_order_and_roles() {
        let mut conversation = Conversation::with_system("you are a travel agent");
        conversation.push_user("find me a flight");
        conversation.push_assistant("{\"kind\":\"no_flight_found\"}");
        conversation.push_feedback("Origin mismatch: LAX");

        let roles: Vec<ChatRole> =
            conversation.messages().iter().map(|message| message.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::System, ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert_eq!(conversation.len(), 4);
    }

    #[test]
    fn feedback_turns_carry_the_mismatch_text() {
        let mut conversation = Conversation::with_system("system");
        conversation.push_feedback("Origin mismatch: LAX\nDate mismatch: 2025-01-12");

        let last = conversation.messages().last().expect("feedback was pushed");
        assert!(last.content.contains("Origin mismatch: LAX"));
        assert!(last.content.contains("Date mismatch: 2025-01-12"));
    }
}
