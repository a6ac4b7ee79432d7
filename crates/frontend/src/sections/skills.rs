//! Skills grid with proficiency bars.

use leptos::prelude::*;

use crate::portfolio::context::use_portfolio;

#[component]
#[allow(non_snake_case)]
pub fn Skills() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <section id="skills" style="padding: 96px 24px; background: #0d0d20;">
            <div style="max-width: 900px; margin: 0 auto;">
                <h2 style="font-size: 2.5rem; font-weight: 700; text-align: center; margin-bottom: 56px;">
                    "Skills"
                </h2>

                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 28px;">
                    <For
                        each=move || portfolio.document.get().skills
                        key=|s| s.id
                        let:skill
                    >
                        {{
                            let width = format!("width: {}%;", skill.level.min(100));
                            view! {
                                <div>
                                    <div style="display: flex; justify-content: space-between; margin-bottom: 8px;">
                                        <span style="font-weight: 600;">{skill.name.clone()}</span>
                                        <span style="color: #a1a1aa;">
                                            {format!("{}%", skill.level.min(100))}
                                        </span>
                                    </div>
                                    <div style="height: 8px; border-radius: 9999px; background: rgba(255,255,255,0.08); overflow: hidden;">
                                        <div style=format!(
                                            "height: 100%; border-radius: 9999px; background: linear-gradient(to right, #3b82f6, #8b5cf6); {}",
                                            width,
                                        )></div>
                                    </div>
                                </div>
                            }
                        }}
                    </For>
                </div>
            </div>
        </section>
    }
}
