//! Field-level structural coercion of stored portfolio documents.
//!
//! Validation is structural, not per-item: a field is replaced by its default
//! when it is missing, not an array, or its items fail to decode — but
//! sibling fields are never touched. `content` falls back field by field.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Content, PortfolioDocument};

/// Rebuild a document from a raw storage value. A missing entry or
/// unparseable JSON yields the defaults wholesale; anything else is coerced
/// one field at a time.
pub fn parse_document(raw: Option<&str>, defaults: &PortfolioDocument) -> PortfolioDocument {
    let Some(raw) = raw else {
        return defaults.clone();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => coerce_document(&value, defaults),
        Err(_) => defaults.clone(),
    }
}

fn coerce_document(value: &Value, defaults: &PortfolioDocument) -> PortfolioDocument {
    PortfolioDocument {
        projects: array_field(value, "projects", &defaults.projects),
        skills: array_field(value, "skills", &defaults.skills),
        experiences: array_field(value, "experiences", &defaults.experiences),
        education: array_field(value, "education", &defaults.education),
        gallery: array_field(value, "gallery", &defaults.gallery),
        highlights: array_field(value, "highlights", &defaults.highlights),
        certifications: array_field(value, "certifications", &defaults.certifications),
        content: coerce_content(value.get("content"), &defaults.content),
    }
}

fn array_field<T>(value: &Value, key: &str, fallback: &[T]) -> Vec<T>
where
    T: DeserializeOwned + Clone,
{
    match value.get(key) {
        Some(field @ Value::Array(_)) => {
            serde_json::from_value(field.clone()).unwrap_or_else(|_| fallback.to_vec())
        }
        _ => fallback.to_vec(),
    }
}

fn coerce_content(value: Option<&Value>, fallback: &Content) -> Content {
    let Some(value) = value else {
        return fallback.clone();
    };
    Content {
        about_text: string_field(value, "about_text", &fallback.about_text),
        contact_email: string_field(value, "contact_email", &fallback.contact_email),
        contact_phone: string_field(value, "contact_phone", &fallback.contact_phone),
        profile_image: string_field(value, "profile_image", &fallback.profile_image),
        resume_file: string_field(value, "resume_file", &fallback.resume_file),
        cv_file: string_field(value, "cv_file", &fallback.cv_file),
        technologies: array_field(value, "technologies", &fallback.technologies),
        projects_completed: counter_field(value, "projects_completed", fallback.projects_completed),
        years_experience: counter_field(value, "years_experience", fallback.years_experience),
        technologies_count: counter_field(value, "technologies_count", fallback.technologies_count),
        location: string_field(value, "location", &fallback.location),
        github_url: string_field(value, "github_url", &fallback.github_url),
        linkedin_url: string_field(value, "linkedin_url", &fallback.linkedin_url),
        twitter_url: string_field(value, "twitter_url", &fallback.twitter_url),
        social_links: array_field(value, "social_links", &fallback.social_links),
    }
}

fn string_field(value: &Value, key: &str, fallback: &str) -> String {
    match value.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => fallback.to_string(),
    }
}

fn counter_field(value: &Value, key: &str, fallback: u32) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n as u32)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::super::default_document;
    use super::*;

    #[test]
    fn missing_entry_yields_defaults() {
        let defaults = default_document();
        assert_eq!(parse_document(None, &defaults), defaults);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        let defaults = default_document();
        assert_eq!(parse_document(Some("{oops"), &defaults), defaults);
    }

    #[test]
    fn missing_education_falls_back_with_siblings_preserved() {
        let defaults = default_document();
        let mut stored = serde_json::to_value(&defaults).unwrap();
        stored.as_object_mut().unwrap().remove("education");
        stored["skills"] = serde_json::json!([{ "id": 9, "name": "Go", "level": 60 }]);

        let doc = parse_document(Some(&stored.to_string()), &defaults);
        assert_eq!(doc.education, defaults.education);
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.skills[0].name, "Go");
        assert_eq!(doc.projects, defaults.projects);
    }

    #[test]
    fn non_array_field_falls_back() {
        let defaults = default_document();
        let mut stored = serde_json::to_value(&defaults).unwrap();
        stored["projects"] = serde_json::json!("not an array");

        let doc = parse_document(Some(&stored.to_string()), &defaults);
        assert_eq!(doc.projects, defaults.projects);
    }

    #[test]
    fn wrong_shaped_items_fall_back() {
        let defaults = default_document();
        let mut stored = serde_json::to_value(&defaults).unwrap();
        stored["certifications"] = serde_json::json!([{ "bogus": true }]);

        let doc = parse_document(Some(&stored.to_string()), &defaults);
        assert_eq!(doc.certifications, defaults.certifications);
    }

    #[test]
    fn content_falls_back_field_by_field() {
        let defaults = default_document();
        let stored = serde_json::json!({
            "content": {
                "contact_email": "someone@example.com",
                "projects_completed": 12
            }
        });

        let doc = parse_document(Some(&stored.to_string()), &defaults);
        assert_eq!(doc.content.contact_email, "someone@example.com");
        assert_eq!(doc.content.projects_completed, 12);
        assert_eq!(doc.content.contact_phone, defaults.content.contact_phone);
        assert_eq!(doc.content.technologies, defaults.content.technologies);
    }

    #[test]
    fn missing_content_object_yields_default_content() {
        let defaults = default_document();
        let doc = parse_document(Some("{}"), &defaults);
        assert_eq!(doc.content, defaults.content);
    }

    #[test]
    fn distinct_defaults_flow_through() {
        let mut defaults = default_document();
        defaults.content.contact_email = "other@example.com".to_string();
        let doc = parse_document(None, &defaults);
        assert_eq!(doc.content.contact_email, "other@example.com");
    }

    #[test]
    fn round_trip_is_lossless() {
        let defaults = default_document();
        let json = serde_json::to_string(&defaults).unwrap();
        assert_eq!(parse_document(Some(&json), &default_document()), defaults);
    }
}
