//! About section: bio text, highlight cards and the technology list.

use leptos::prelude::*;

use crate::portfolio::context::use_portfolio;

#[component]
#[allow(non_snake_case)]
pub fn About() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <section id="about" style="padding: 96px 24px; max-width: 1100px; margin: 0 auto;">
            <h2 style="font-size: 2.5rem; font-weight: 700; text-align: center; margin-bottom: 24px;">
                "About " <span style="color: #8b5cf6;">"Me"</span>
            </h2>
            <p style="font-size: 1.125rem; color: #a1a1aa; line-height: 1.75; text-align: center; max-width: 720px; margin: 0 auto 56px;">
                {move || portfolio.document.get().content.about_text}
            </p>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px; margin-bottom: 56px;">
                <For
                    each=move || portfolio.document.get().highlights
                    key=|h| h.id
                    let:highlight
                >
                    <div style="background: #1a1a1a; border: 1px solid #2d2d2d; border-radius: 12px; padding: 28px; text-align: center;">
                        <div
                            style="color: #8b5cf6; display: flex; justify-content: center; margin-bottom: 16px;"
                            inner_html=highlight.icon.clone()
                        ></div>
                        <h3 style="font-size: 1.125rem; font-weight: 600; margin-bottom: 8px;">
                            {highlight.title.clone()}
                        </h3>
                        <p style="color: #a1a1aa; font-size: 0.95rem;">
                            {highlight.description.clone()}
                        </p>
                    </div>
                </For>
            </div>

            <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 10px;">
                <For
                    each=move || portfolio.document.get().content.technologies
                    key=|tech| tech.clone()
                    let:tech
                >
                    <span style="padding: 6px 14px; border-radius: 9999px; background: rgba(139,92,246,0.12); border: 1px solid rgba(139,92,246,0.35); color: #c4b5fd; font-size: 0.9rem;">
                        {tech}
                    </span>
                </For>
            </div>
        </section>
    }
}
