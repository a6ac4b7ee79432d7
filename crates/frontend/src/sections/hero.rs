//! Landing section with the animated particle backdrop.

use leptos::prelude::*;

use crate::background::particles::ParticleCanvas;
use crate::portfolio::context::use_portfolio;
use crate::sections::navigation::scroll_to_section;

const GRADIENT_TEXT: &str = "background: linear-gradient(to right, #3b82f6, #8b5cf6); -webkit-background-clip: text; background-clip: text; color: transparent;";

#[component]
#[allow(non_snake_case)]
pub fn Hero() -> impl IntoView {
    let portfolio = use_portfolio();
    let content = move || portfolio.document.get().content;

    view! {
        <section
            id="hero"
            style="position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden;"
        >
            <ParticleCanvas />

            <div style="position: relative; z-index: 1; text-align: center; padding: 0 24px; max-width: 900px;">
                <h1 style="font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 700; margin-bottom: 16px;">
                    "Hi, I'm " <span style=GRADIENT_TEXT>"Alex Carter"</span>
                </h1>
                <p style="font-size: 1.25rem; color: #a1a1aa; margin-bottom: 40px; line-height: 1.75;">
                    {move || content().about_text}
                </p>

                <div style="display: flex; justify-content: center; gap: 48px; margin-bottom: 48px; flex-wrap: wrap;">
                    <div>
                        <div style="font-size: 2rem; font-weight: 700;">
                            {move || content().projects_completed}
                        </div>
                        <div style="color: #a1a1aa; font-size: 0.9rem;">"Projects"</div>
                    </div>
                    <div>
                        <div style="font-size: 2rem; font-weight: 700;">
                            {move || content().years_experience}
                        </div>
                        <div style="color: #a1a1aa; font-size: 0.9rem;">"Years Experience"</div>
                    </div>
                    <div>
                        <div style="font-size: 2rem; font-weight: 700;">
                            {move || content().technologies_count}
                        </div>
                        <div style="color: #a1a1aa; font-size: 0.9rem;">"Technologies"</div>
                    </div>
                </div>

                <div style="display: flex; justify-content: center; gap: 16px; flex-wrap: wrap;">
                    <button
                        style="padding: 12px 28px; border-radius: 10px; border: none; cursor: pointer; color: #fff; font-weight: 600; background: linear-gradient(180deg, #4f46e5, #9333ea);"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        style="padding: 12px 28px; border-radius: 10px; cursor: pointer; color: #fff; font-weight: 600; background: transparent; border: 1px solid rgba(255,255,255,0.25);"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}
