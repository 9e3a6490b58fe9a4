use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier
    pub id: Uuid,
    /// Author
    pub role: ChatRole,
    /// Message body
    pub content: String,
    /// Local wall-clock time the message was added
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Create a user message stamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an assistant message stamped now
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// HH:MM label shown under the message bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// The transcript shown when the chat panel first opens: one assistant
/// greeting stamped a minute in the past.
pub fn initial_transcript() -> Vec<ChatMessage> {
    let mut greeting = ChatMessage::assistant(
        "Hello! I'm your video editing assistant. How can I help you today?",
    );
    greeting.timestamp = Local::now() - Duration::seconds(60);
    vec![greeting]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_transcript_is_assistant_greeting() {
        let transcript = initial_transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::Assistant);
        assert!(transcript[0].timestamp < Local::now());
    }

    #[test]
    fn test_time_label_is_hours_and_minutes() {
        let message = ChatMessage::user("hi");
        let label = message.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
