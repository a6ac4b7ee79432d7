//! Chat widget panel lifecycle and bubble preview.
//!
//! The widget is either a collapsed floating bubble or an open panel (normal
//! or expanded); closing passes through a transient `Closing` state that
//! exists only to let the exit animation play before collapsing back to the
//! bubble.

use contracts::chat::ChatSession;

/// Duration of the panel exit animation before the bubble returns.
pub const CLOSE_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Bubble,
    Normal,
    Expanded,
    Closing,
}

impl PanelState {
    pub fn initial(start_open: bool) -> Self {
        if start_open {
            PanelState::Normal
        } else {
            PanelState::Bubble
        }
    }

    /// Bubble → Normal; open panels are unaffected.
    pub fn open(self) -> Self {
        match self {
            PanelState::Bubble => PanelState::Normal,
            other => other,
        }
    }

    /// Normal ⇄ Expanded; no-op while collapsed or closing.
    pub fn toggle_expand(self) -> Self {
        match self {
            PanelState::Normal => PanelState::Expanded,
            PanelState::Expanded => PanelState::Normal,
            other => other,
        }
    }

    /// Either panel state → Closing; the close timer finishes the job.
    pub fn close(self) -> Self {
        match self {
            PanelState::Normal | PanelState::Expanded => PanelState::Closing,
            other => other,
        }
    }

    /// Closing → Bubble, fired by the animation timer.
    pub fn finish_close(self) -> Self {
        match self {
            PanelState::Closing => PanelState::Bubble,
            other => other,
        }
    }

    /// Whether the panel (in any form) is on screen.
    pub fn is_open(self) -> bool {
        !matches!(self, PanelState::Bubble)
    }

    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }

    pub fn is_closing(self) -> bool {
        self == PanelState::Closing
    }
}

/// Shown on the collapsed bubble when the transcript is empty.
pub const EMPTY_PREVIEW: &str = "Chat with me!";

const PREVIEW_MAX_CHARS: usize = 20;

/// First characters of the newest message, for the collapsed bubble label.
pub fn bubble_preview(session: &ChatSession) -> String {
    match session.last_text() {
        None => EMPTY_PREVIEW.to_string(),
        Some(text) => {
            let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
            if text.chars().count() > PREVIEW_MAX_CHARS {
                preview.push('…');
            }
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::chat::ChatMessage;

    #[test]
    fn initial_state_honors_start_open() {
        assert_eq!(PanelState::initial(false), PanelState::Bubble);
        assert_eq!(PanelState::initial(true), PanelState::Normal);
    }

    #[test]
    fn open_and_expand_transitions() {
        let state = PanelState::Bubble.open();
        assert_eq!(state, PanelState::Normal);
        let state = state.toggle_expand();
        assert_eq!(state, PanelState::Expanded);
        assert_eq!(state.toggle_expand(), PanelState::Normal);
    }

    #[test]
    fn close_passes_through_closing() {
        for open in [PanelState::Normal, PanelState::Expanded] {
            let state = open.close();
            assert_eq!(state, PanelState::Closing);
            assert_eq!(state.finish_close(), PanelState::Bubble);
        }
    }

    #[test]
    fn closing_ignores_other_transitions() {
        let state = PanelState::Closing;
        assert_eq!(state.open(), PanelState::Closing);
        assert_eq!(state.toggle_expand(), PanelState::Closing);
        assert_eq!(state.close(), PanelState::Closing);
    }

    #[test]
    fn bubble_is_not_open() {
        assert!(!PanelState::Bubble.is_open());
        assert!(PanelState::Normal.is_open());
        assert!(PanelState::Expanded.is_expanded());
        assert!(PanelState::Closing.is_open());
    }

    #[test]
    fn preview_truncates_long_messages() {
        let mut session = ChatSession::with_welcome("Hello");
        session.append(ChatMessage::user("a message that is definitely long"));
        assert_eq!(bubble_preview(&session), "a message that is de…");
    }

    #[test]
    fn preview_shows_short_messages_verbatim() {
        let session = ChatSession::with_welcome("Hello");
        assert_eq!(bubble_preview(&session), "Hello");
    }

    #[test]
    fn preview_of_empty_transcript_invites() {
        let session = ChatSession {
            id: uuid::Uuid::new_v4(),
            messages: vec![],
        };
        assert_eq!(bubble_preview(&session), EMPTY_PREVIEW);
    }
}
