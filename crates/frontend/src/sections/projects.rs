//! Project showcase: card grid plus a detail overlay.

use contracts::portfolio::Project;
use leptos::prelude::*;

use crate::portfolio::context::use_portfolio;

#[component]
#[allow(non_snake_case)]
pub fn Projects() -> impl IntoView {
    let portfolio = use_portfolio();
    let selected = RwSignal::new(None::<Project>);

    view! {
        <section id="projects" style="padding: 96px 24px; max-width: 1200px; margin: 0 auto;">
            <h2 style="font-size: 2.5rem; font-weight: 700; text-align: center; margin-bottom: 56px;">
                "Featured " <span style="color: #8b5cf6;">"Works"</span>
            </h2>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 28px;">
                <For
                    each=move || portfolio.document.get().projects
                    key=|p| p.id
                    let:project
                >
                    {{
                        let card = project.clone();
                        let featured = project.featured;
                        view! {
                            <article
                                style="background: #15152a; border: 1px solid rgba(255,255,255,0.08); border-radius: 14px; overflow: hidden; cursor: pointer; transition: transform 0.2s;"
                                on:click=move |_| selected.set(Some(card.clone()))
                            >
                                {project
                                    .image
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt=project.title.clone()
                                                style="width: 100%; height: 180px; object-fit: cover;"
                                            />
                                        }
                                    })}
                                <div style="padding: 20px;">
                                    <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 8px;">
                                        <h3 style="font-size: 1.25rem; font-weight: 600;">
                                            {project.title.clone()}
                                        </h3>
                                        <Show when=move || featured>
                                            <span style="font-size: 0.75rem; padding: 2px 8px; border-radius: 9999px; background: rgba(139,92,246,0.2); color: #c4b5fd;">
                                                "Featured"
                                            </span>
                                        </Show>
                                    </div>
                                    <p style="color: #a1a1aa; font-size: 0.95rem; margin-bottom: 12px;">
                                        {project.description.clone()}
                                    </p>
                                    <p style="color: #8b5cf6; font-size: 0.85rem;">
                                        {project.tech.clone()}
                                    </p>
                                </div>
                            </article>
                        }
                    }}
                </For>
            </div>

            // Detail overlay
            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <div
                                style="position: fixed; inset: 0; z-index: 100; background: rgba(0,0,0,0.7); display: flex; align-items: center; justify-content: center; padding: 24px;"
                                on:click=move |_| selected.set(None)
                            >
                                <div
                                    style="background: #15152a; border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; max-width: 560px; width: 100%; padding: 28px;"
                                    on:click=move |ev| ev.stop_propagation()
                                >
                                    <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                                        <h3 style="font-size: 1.5rem; font-weight: 700;">
                                            {project.title.clone()}
                                        </h3>
                                        <button
                                            style="background: transparent; border: none; color: #fff; cursor: pointer; font-size: 18px;"
                                            on:click=move |_| selected.set(None)
                                        >
                                            "✖"
                                        </button>
                                    </div>
                                    <p style="color: #d1d5db; line-height: 1.7; margin-bottom: 16px;">
                                        {project.description.clone()}
                                    </p>
                                    <p style="color: #8b5cf6; font-size: 0.9rem; margin-bottom: 20px;">
                                        {project.tech.clone()}
                                    </p>
                                    <div style="display: flex; gap: 12px;">
                                        {project
                                            .github
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        href=url
                                                        target="_blank"
                                                        rel="noopener"
                                                        style="color: #c4b5fd; text-decoration: none; border: 1px solid rgba(139,92,246,0.35); border-radius: 8px; padding: 8px 16px;"
                                                    >
                                                        "Source"
                                                    </a>
                                                }
                                            })}
                                        {project
                                            .live
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        href=url
                                                        target="_blank"
                                                        rel="noopener"
                                                        style="color: #fff; text-decoration: none; background: linear-gradient(180deg, #4f46e5, #9333ea); border-radius: 8px; padding: 8px 16px;"
                                                    >
                                                        "Live"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
