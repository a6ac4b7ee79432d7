//! Journey section: experience and education timeline, certifications, and
//! the resume download.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::portfolio::context::use_portfolio;

/// Offer the configured resume file through a synthetic anchor click.
fn download_file(path: &str, filename: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(link) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    link.set_href(path);
    link.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&link);
    }
    link.click();
    link.remove();
}

#[component]
#[allow(non_snake_case)]
pub fn ResumeSection() -> impl IntoView {
    let portfolio = use_portfolio();

    let download_resume = move |_| {
        let path = portfolio
            .document
            .with_untracked(|d| d.content.resume_file.clone());
        if path.is_empty() {
            log::warn!("no resume file configured");
            return;
        }
        download_file(&path, "resume.pdf");
    };

    view! {
        <section id="resume" style="padding: 96px 24px; background: #0d0d20;">
            <div style="max-width: 900px; margin: 0 auto;">
                <div style="display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px; margin-bottom: 56px;">
                    <h2 style="font-size: 2.5rem; font-weight: 700;">
                        "My " <span style="color: #8b5cf6;">"Journey"</span>
                    </h2>
                    <button
                        style="padding: 10px 22px; border-radius: 10px; border: none; cursor: pointer; color: #fff; font-weight: 600; background: linear-gradient(180deg, #4f46e5, #9333ea);"
                        on:click=download_resume
                    >
                        "Download Resume"
                    </button>
                </div>

                <Show when=move || !portfolio.document.get().experiences.is_empty()>
                    <h3 style="font-size: 1.5rem; font-weight: 600; margin-bottom: 24px;">
                        "Experience"
                    </h3>
                    <div style="border-left: 2px solid rgba(139,92,246,0.4); padding-left: 24px; margin-bottom: 48px; display: flex; flex-direction: column; gap: 28px;">
                        <For
                            each=move || portfolio.document.get().experiences
                            key=|e| e.id
                            let:exp
                        >
                            <div>
                                <div style="font-weight: 600; font-size: 1.1rem;">
                                    {exp.title.clone()}
                                </div>
                                <div style="color: #c4b5fd;">{exp.company.clone()}</div>
                                <div style="color: #a1a1aa; font-size: 0.85rem; margin-bottom: 6px;">
                                    {exp.period.clone()}
                                </div>
                                <p style="color: #d1d5db;">{exp.description.clone()}</p>
                            </div>
                        </For>
                    </div>
                </Show>

                <h3 style="font-size: 1.5rem; font-weight: 600; margin-bottom: 24px;">
                    "Education"
                </h3>
                <div style="border-left: 2px solid rgba(59,130,246,0.4); padding-left: 24px; margin-bottom: 48px; display: flex; flex-direction: column; gap: 28px;">
                    <For
                        each=move || portfolio.document.get().education
                        key=|e| e.id
                        let:edu
                    >
                        <div>
                            <div style="font-weight: 600; font-size: 1.1rem;">
                                {edu.degree.clone()}
                            </div>
                            <div style="color: #93c5fd;">{edu.school.clone()}</div>
                            <div style="color: #a1a1aa; font-size: 0.85rem;">
                                {format!("{} · {}", edu.period, edu.location)}
                            </div>
                        </div>
                    </For>
                </div>

                <Show when=move || !portfolio.document.get().certifications.is_empty()>
                    <h3 style="font-size: 1.5rem; font-weight: 600; margin-bottom: 24px;">
                        "Certifications"
                    </h3>
                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px;">
                        <For
                            each=move || portfolio.document.get().certifications
                            key=|c| c.id
                            let:cert
                        >
                            <div style="background: #15152a; border: 1px solid rgba(255,255,255,0.08); border-radius: 10px; padding: 16px;">
                                <div style="font-weight: 600;">{cert.name.clone()}</div>
                                {cert
                                    .date
                                    .clone()
                                    .map(|date| {
                                        view! {
                                            <div style="color: #a1a1aa; font-size: 0.85rem; margin-top: 4px;">
                                                {date}
                                            </div>
                                        }
                                    })}
                            </div>
                        </For>
                    </div>
                </Show>
            </div>
        </section>
    }
}
