//! Application configuration.
//!
//! Everything that used to be module-level default state (storage keys, the
//! welcome message, the default document) is carried here and provided via
//! context, so tests and alternate hosts can construct distinct configs.

use contracts::portfolio::{default_document, PortfolioDocument};
use leptos::prelude::*;

#[derive(Clone)]
pub struct AppConfig {
    /// Chat webhook endpoint. `None` puts the widget into demo mode.
    pub webhook_url: Option<String>,
    /// Whether the chat panel starts open instead of collapsed to the bubble.
    pub start_chat_open: bool,
    pub chat_storage_key: String,
    pub portfolio_storage_key: String,
    pub welcome_message: String,
    pub assistant_title: String,
    pub default_document: PortfolioDocument,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Baked in by the hosting build; there is no runtime env lookup.
            webhook_url: option_env!("PORTFOLIO_WEBHOOK_URL").map(str::to_string),
            start_chat_open: false,
            chat_storage_key: "portfolio_chat_history_v3".to_string(),
            portfolio_storage_key: "portfolioData".to_string(),
            welcome_message: "👋 Hi! I'm the portfolio AI assistant. How can I help you today?"
                .to_string(),
            assistant_title: "AI Assistant".to_string(),
            default_document: default_document(),
        }
    }
}

/// Hook to access the app configuration.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found. Provide it at the app root.")
}
