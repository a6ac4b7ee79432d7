//! Chat session data model and the pure load/save logic over it.
//!
//! Everything here is browser-free: the frontend feeds raw storage strings in
//! and gets well-formed sessions back, so the fallback behavior is testable
//! on the host.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message author within a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }
}

/// One transcript entry. `created_at` (epoch milliseconds) is informational;
/// insertion order is the authoritative ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub created_at: i64,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: format!("{}-{}", role.as_str(), now),
            role,
            text: text.into(),
            created_at: now,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }
}

/// A persisted chat transcript. The `id` identifies the session in log lines
/// only; it never leaves the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// The default session: exactly one synthetic assistant greeting.
    pub fn with_welcome(welcome_text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage {
                id: "assistant-welcome".to_string(),
                role: ChatRole::Assistant,
                text: welcome_text.to_string(),
                created_at: Utc::now().timestamp_millis(),
            }],
        }
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn last_text(&self) -> Option<&str> {
        self.messages.last().map(|m| m.text.as_str())
    }
}

/// Stored values shorter than this cannot hold a message and are treated as
/// corrupt.
const MIN_MEANINGFUL_LEN: usize = 3;

/// Persisted transcripts keep only this many of the newest messages.
pub const MAX_PERSISTED_MESSAGES: usize = 200;

/// Rebuild a session from a raw storage value. Fails soft: a missing entry,
/// a degenerate short value, or unparseable JSON all yield the welcome-only
/// default session.
pub fn parse_session(raw: Option<&str>, welcome_text: &str) -> ChatSession {
    let Some(raw) = raw else {
        return ChatSession::with_welcome(welcome_text);
    };
    if raw.len() < MIN_MEANINGFUL_LEN {
        return ChatSession::with_welcome(welcome_text);
    }
    serde_json::from_str(raw).unwrap_or_else(|_| ChatSession::with_welcome(welcome_text))
}

/// Snapshot of a session bounded for persistence. In-memory transcripts are
/// left untouched; only the stored copy is pruned.
pub fn prune_for_save(session: &ChatSession) -> ChatSession {
    if session.messages.len() <= MAX_PERSISTED_MESSAGES {
        return session.clone();
    }
    let start = session.messages.len() - MAX_PERSISTED_MESSAGES;
    ChatSession {
        id: session.id,
        messages: session.messages[start..].to_vec(),
    }
}

/// Wire entry for the webhook `history` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

/// Body of the webhook POST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

/// Map a transcript to the minimal `{role, content}` shape the webhook takes.
pub fn history_of(session: &ChatSession) -> Vec<HistoryEntry> {
    session
        .messages
        .iter()
        .map(|m| HistoryEntry {
            role: m.role.as_str().to_string(),
            content: m.text.clone(),
        })
        .collect()
}

/// Acknowledgement used when a successful reply body carries no usable
/// `reply` string.
pub const FALLBACK_ACK: &str = "Thanks! I'll get back to you.";

/// Pull the assistant text out of a 2xx reply body.
pub fn extract_reply(body: &serde_json::Value) -> String {
    body.get("reply")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_ACK)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: &str = "Hi! How can I help?";

    fn welcome_only(session: &ChatSession) {
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, ChatRole::Assistant);
        assert_eq!(session.messages[0].text, WELCOME);
        assert_eq!(session.messages[0].id, "assistant-welcome");
    }

    #[test]
    fn parse_session_missing_entry_yields_welcome() {
        welcome_only(&parse_session(None, WELCOME));
    }

    #[test]
    fn parse_session_short_value_yields_welcome() {
        welcome_only(&parse_session(Some(""), WELCOME));
        welcome_only(&parse_session(Some("[]"), WELCOME));
    }

    #[test]
    fn parse_session_malformed_json_yields_welcome() {
        welcome_only(&parse_session(Some("{not json"), WELCOME));
        welcome_only(&parse_session(Some("[1, 2, 3]"), WELCOME));
    }

    #[test]
    fn parse_session_round_trips_ordered_messages() {
        let mut session = ChatSession::with_welcome(WELCOME);
        session.append(ChatMessage::user("Hello"));
        session.append(ChatMessage::assistant("Hi there"));

        let json = serde_json::to_string(&session).unwrap();
        let reloaded = parse_session(Some(&json), WELCOME);
        assert_eq!(reloaded, session);
        let texts: Vec<_> = reloaded.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![WELCOME, "Hello", "Hi there"]);
    }

    #[test]
    fn prune_keeps_newest_messages() {
        let mut session = ChatSession::with_welcome(WELCOME);
        for i in 0..(MAX_PERSISTED_MESSAGES + 50) {
            session.append(ChatMessage::user(format!("msg {i}")));
        }
        let pruned = prune_for_save(&session);
        assert_eq!(pruned.messages.len(), MAX_PERSISTED_MESSAGES);
        assert_eq!(pruned.id, session.id);
        assert_eq!(
            pruned.messages.last().unwrap().text,
            session.messages.last().unwrap().text
        );
    }

    #[test]
    fn prune_is_identity_under_cap() {
        let mut session = ChatSession::with_welcome(WELCOME);
        session.append(ChatMessage::user("Hello"));
        assert_eq!(prune_for_save(&session), session);
    }

    #[test]
    fn history_preserves_order_and_roles() {
        let mut session = ChatSession::with_welcome(WELCOME);
        session.append(ChatMessage::user("Hello"));
        let history = history_of(&session);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, "assistant");
        assert_eq!(history[0].content, WELCOME);
        assert_eq!(history[1].role, "user");
        assert_eq!(history[1].content, "Hello");
    }

    #[test]
    fn extract_reply_reads_reply_field() {
        let body = serde_json::json!({ "reply": "Hi there" });
        assert_eq!(extract_reply(&body), "Hi there");
    }

    #[test]
    fn extract_reply_falls_back_when_absent_or_empty() {
        assert_eq!(extract_reply(&serde_json::json!({})), FALLBACK_ACK);
        assert_eq!(extract_reply(&serde_json::json!({ "reply": "" })), FALLBACK_ACK);
        assert_eq!(extract_reply(&serde_json::json!({ "reply": 42 })), FALLBACK_ACK);
    }

    #[test]
    fn role_string_round_trip() {
        assert_eq!(ChatRole::from_str("user").unwrap(), ChatRole::User);
        assert_eq!(ChatRole::from_str("assistant").unwrap(), ChatRole::Assistant);
        assert!(ChatRole::from_str("system").is_err());
    }
}
