//! Portfolio document data model.
//!
//! The whole profile is one JSON-serializable record persisted under a single
//! storage key. Loading goes through [`parse_document`], which coerces each
//! top-level field independently so one corrupt field never takes the rest of
//! the document down with it.

mod coerce;
mod defaults;

pub use coerce::parse_document;
pub use defaults::default_document;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    /// Self-assessed proficiency, 0–100. Drives the skill bar width.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub school: String,
    pub period: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub src: String,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: u32,
    /// Inline SVG markup rendered verbatim in the highlights grid.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: u32,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Free-form profile content: contact details, counters, asset paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub profile_image: String,
    pub resume_file: String,
    pub cv_file: String,
    pub technologies: Vec<String>,
    pub projects_completed: u32,
    pub years_experience: u32,
    pub technologies_count: u32,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// The persisted profile record. Every array field falls back to its default
/// independently on load; see [`parse_document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub gallery: Vec<GalleryItem>,
    pub highlights: Vec<Highlight>,
    pub certifications: Vec<Certification>,
    pub content: Content,
}
