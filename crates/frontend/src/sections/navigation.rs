//! Fixed top navigation with smooth scrolling between sections.
//!
//! The active section is mirrored into the URL query string so a reload (or
//! a shared link) lands on the same part of the page.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Query-string mirror of the active section.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SectionQuery {
    section: Option<String>,
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("About", "about"),
    ("Skills", "skills"),
    ("Works", "projects"),
    ("Journey", "resume"),
    ("Contact", "contact"),
];

/// Smooth-scroll the section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Mirror the active section into the `?section=` query parameter.
pub fn sync_section_query(id: &str) {
    let query = serde_qs::to_string(&SectionQuery {
        section: Some(id.to_string()),
    })
    .unwrap_or_default();
    let new_url = format!("?{}", query);

    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current != new_url {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Navigation() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    // Track scroll position to switch the header to its blurred style.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scrolled.set(y > 10.0);
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget(); // listener lives for the page lifetime
        }
    });

    // Land on the section recorded in the URL, if any.
    Effect::new(move |_| {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: SectionQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = &params.section {
            scroll_to_section(section);
        }
    });

    let header_style = move || {
        let background = if scrolled.get() {
            "backdrop-filter: blur(12px); background: rgba(0,0,0,0.6);"
        } else {
            "background: transparent;"
        };
        format!(
            "position: fixed; top: 0; width: 100%; z-index: 50; transition: all 0.3s; {}",
            background
        )
    };

    view! {
        <header style=header_style>
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <div style="display: flex; justify-content: center; align-items: center; height: 80px;">
                    <nav style="background: rgba(0,0,0,0.8); border: 1px solid #374151; border-radius: 9999px; padding: 8px 24px; display: flex; gap: 16px; box-shadow: 0 20px 25px rgba(0,0,0,0.3); backdrop-filter: blur(12px);">
                        {NAV_LINKS
                            .iter()
                            .map(|(name, id)| {
                                view! {
                                    <button
                                        style="background: none; border: none; color: #d1d5db; font-weight: 600; font-size: 15px; padding: 8px 20px; cursor: pointer; border-radius: 9999px; transition: all 0.3s;"
                                        on:click=move |_| {
                                            scroll_to_section(id);
                                            sync_section_query(id);
                                        }
                                    >
                                        {*name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
