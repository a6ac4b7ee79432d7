//! Persistence for the chat transcript.
//!
//! One storage key, one debounced writer. Loading never fails: corrupt or
//! missing entries fall back to the welcome-only session.

use contracts::chat::{parse_session, prune_for_save, ChatSession};
use leptos::prelude::*;

use crate::shared::debounce::Debouncer;
use crate::shared::storage;

/// Quiet period before a mutated transcript is written back, so a burst of
/// renders does not turn into a write per keystroke.
const SAVE_DEBOUNCE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct SessionStore {
    key: StoredValue<String>,
    welcome: StoredValue<String>,
    debounce: Debouncer,
}

impl SessionStore {
    pub fn new(key: String, welcome: String) -> Self {
        Self {
            key: StoredValue::new(key),
            welcome: StoredValue::new(welcome),
            debounce: Debouncer::new(SAVE_DEBOUNCE_MS),
        }
    }

    /// Load the stored session, or the welcome-only default. Never raises.
    pub fn load(&self) -> ChatSession {
        let key = self.key.get_value();
        let session = parse_session(
            storage::get_item(&key).as_deref(),
            &self.welcome.get_value(),
        );
        log::debug!("chat session {} loaded from '{}'", session.id, key);
        session
    }

    /// Schedule a debounced write of the (pruned) transcript.
    pub fn save(&self, session: &ChatSession) {
        let key = self.key.get_value();
        let snapshot = prune_for_save(session);
        self.debounce.schedule(move || {
            match serde_json::to_string(&snapshot) {
                Ok(json) => storage::set_item(&key, &json),
                Err(e) => log::error!("failed to serialize chat session: {}", e),
            }
        });
    }

    /// Delete the stored entry and hand back a fresh welcome-only session.
    pub fn clear(&self) -> ChatSession {
        self.debounce.cancel();
        storage::remove_item(&self.key.get_value());
        ChatSession::with_welcome(&self.welcome.get_value())
    }

    /// Cancel the pending write so nothing lands after disposal.
    pub fn teardown(&self) {
        self.debounce.cancel();
    }
}
