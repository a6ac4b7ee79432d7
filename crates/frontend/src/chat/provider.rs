//! The chat backend seam.
//!
//! Exactly one integration strategy is active per app instance: a configured
//! webhook, or the built-in demo responder when no endpoint is set. Callers
//! see a single `send` contract either way.

use contracts::chat::{extract_reply, HistoryEntry, WebhookRequest};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Reply used by the demo responder.
pub const DEMO_REPLY: &str = "This is a demo response as no backend is configured.";

/// Simulated round-trip latency of the demo responder.
pub const DEMO_DELAY_MS: u32 = 900;

#[derive(Debug, Clone)]
pub enum ChatProvider {
    Webhook { url: String },
    Demo,
}

impl ChatProvider {
    pub fn from_config(webhook_url: Option<&str>) -> Self {
        match webhook_url {
            Some(url) if !url.trim().is_empty() => ChatProvider::Webhook {
                url: url.to_string(),
            },
            _ => ChatProvider::Demo,
        }
    }

    /// One request/reply round trip. The error carries the cause for the
    /// console only; the widget maps any error to its fixed user-facing
    /// message.
    pub async fn send(
        &self,
        message: &str,
        history: Vec<HistoryEntry>,
    ) -> Result<String, String> {
        match self {
            ChatProvider::Demo => {
                TimeoutFuture::new(DEMO_DELAY_MS).await;
                Ok(DEMO_REPLY.to_string())
            }
            ChatProvider::Webhook { url } => {
                let body = WebhookRequest {
                    message: message.to_string(),
                    history,
                };

                let response = Request::post(url)
                    .json(&body)
                    .map_err(|e| format!("failed to encode request: {}", e))?
                    .send()
                    .await
                    .map_err(|e| format!("request failed: {}", e))?;

                if !response.ok() {
                    return Err(format!("HTTP error: {}", response.status()));
                }

                let value: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| format!("failed to parse response: {}", e))?;

                Ok(extract_reply(&value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_endpoint_selects_demo() {
        assert!(matches!(ChatProvider::from_config(None), ChatProvider::Demo));
        assert!(matches!(
            ChatProvider::from_config(Some("")),
            ChatProvider::Demo
        ));
        assert!(matches!(
            ChatProvider::from_config(Some("   ")),
            ChatProvider::Demo
        ));
    }

    #[test]
    fn configured_endpoint_selects_webhook() {
        match ChatProvider::from_config(Some("https://hooks.example.com/chat")) {
            ChatProvider::Webhook { url } => {
                assert_eq!(url, "https://hooks.example.com/chat");
            }
            other => panic!("expected webhook provider, got {:?}", other),
        }
    }
}
