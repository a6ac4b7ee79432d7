//! Portfolio data provider.
//!
//! Owns the single in-memory copy of the portfolio document. Loads once at
//! mount, hands the document down via context, and re-persists the whole
//! document (debounced) after every mutation. Concurrent tabs each hold their
//! own copy; last write wins on the shared storage entry.

use contracts::portfolio::{
    parse_document, Certification, Content, Education, Experience, GalleryItem, Highlight,
    PortfolioDocument, Project, Skill,
};
use leptos::prelude::*;

use crate::config::use_app_config;
use crate::shared::debounce::Debouncer;
use crate::shared::storage;

/// Quiet period before a mutated document is written back.
const SAVE_DEBOUNCE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub document: RwSignal<PortfolioDocument>,
    storage_key: StoredValue<String>,
    debounce: Debouncer,
}

impl PortfolioContext {
    pub fn new(storage_key: String, defaults: PortfolioDocument) -> Self {
        let document = RwSignal::new(parse_document(
            storage::get_item(&storage_key).as_deref(),
            &defaults,
        ));
        Self {
            document,
            storage_key: StoredValue::new(storage_key),
            debounce: Debouncer::new(SAVE_DEBOUNCE_MS),
        }
    }

    fn schedule_persist(&self) {
        let key = self.storage_key.get_value();
        let doc = self.document.get_untracked();
        self.debounce.schedule(move || persist(&key, &doc));
    }

    pub fn update_projects(&self, projects: Vec<Project>) {
        self.document.update(|d| d.projects = projects);
        self.schedule_persist();
    }

    pub fn update_skills(&self, skills: Vec<Skill>) {
        self.document.update(|d| d.skills = skills);
        self.schedule_persist();
    }

    pub fn update_experiences(&self, experiences: Vec<Experience>) {
        self.document.update(|d| d.experiences = experiences);
        self.schedule_persist();
    }

    pub fn update_education(&self, education: Vec<Education>) {
        self.document.update(|d| d.education = education);
        self.schedule_persist();
    }

    pub fn update_gallery(&self, gallery: Vec<GalleryItem>) {
        self.document.update(|d| d.gallery = gallery);
        self.schedule_persist();
    }

    pub fn update_highlights(&self, highlights: Vec<Highlight>) {
        self.document.update(|d| d.highlights = highlights);
        self.schedule_persist();
    }

    pub fn update_certifications(&self, certifications: Vec<Certification>) {
        self.document.update(|d| d.certifications = certifications);
        self.schedule_persist();
    }

    pub fn update_content(&self, content: Content) {
        self.document.update(|d| d.content = content);
        self.schedule_persist();
    }

    /// Manual persist: cancels any pending debounced write and writes now.
    pub fn save(&self) {
        self.debounce.cancel();
        persist(
            &self.storage_key.get_value(),
            &self.document.get_untracked(),
        );
    }

    /// Cancel the pending write so nothing lands after disposal.
    pub fn teardown(&self) {
        self.debounce.cancel();
    }
}

fn persist(key: &str, doc: &PortfolioDocument) {
    match serde_json::to_string(doc) {
        Ok(json) => storage::set_item(key, &json),
        Err(e) => log::error!("failed to serialize portfolio document: {}", e),
    }
}

/// Portfolio context provider component.
#[component]
pub fn PortfolioProvider(children: Children) -> impl IntoView {
    let cfg = use_app_config();
    let ctx = PortfolioContext::new(cfg.portfolio_storage_key, cfg.default_document);

    on_cleanup(move || ctx.teardown());
    provide_context(ctx);

    children()
}

/// Hook to access the portfolio context.
pub fn use_portfolio() -> PortfolioContext {
    use_context::<PortfolioContext>()
        .expect("PortfolioContext not found. Wrap your app with PortfolioProvider.")
}
