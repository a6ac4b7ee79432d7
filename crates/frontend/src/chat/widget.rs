//! Floating chat widget.
//!
//! Collapsed it is a bubble previewing the newest message; open it is a
//! panel with the transcript, a typing indicator and an input row. Sends are
//! strictly sequential: the in-flight guard makes a second send a no-op, so
//! replies always land in request order.

use contracts::chat::{history_of, ChatMessage, ChatRole};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::provider::ChatProvider;
use super::session::SessionStore;
use super::state::{bubble_preview, PanelState, CLOSE_ANIMATION_MS};
use crate::config::use_app_config;

/// Fixed assistant message shown when the round trip fails for any reason.
pub const CONNECT_ERROR_REPLY: &str = "Couldn't reach the server. Please try again later.";

/// Scrolled-up distance (px) beyond which autoscroll yields to the
/// scroll-to-bottom affordance.
const SCROLL_THRESHOLD_PX: i32 = 100;

const BUBBLE_Z: i32 = 2147483000;
const PANEL_Z: i32 = 2147483001;

#[component]
#[allow(non_snake_case)]
pub fn ChatWidget() -> impl IntoView {
    let cfg = use_app_config();
    let store = SessionStore::new(cfg.chat_storage_key.clone(), cfg.welcome_message.clone());
    let provider = StoredValue::new(ChatProvider::from_config(cfg.webhook_url.as_deref()));
    let assistant_title = StoredValue::new(cfg.assistant_title.clone());

    let session = RwSignal::new(store.load());
    let panel = RwSignal::new(PanelState::initial(cfg.start_chat_open));
    let input = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let show_scroll_button = RwSignal::new(false);

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Persist (debounced) after every transcript mutation.
    Effect::new(move |_| {
        session.with(|s| store.save(s));
    });
    on_cleanup(move || store.teardown());

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
        show_scroll_button.set(false);
    };

    // Keep the newest message in view unless the user scrolled away.
    Effect::new(move |_| {
        session.track();
        loading.track();
        if !show_scroll_button.get_untracked() {
            scroll_to_bottom();
        }
    });

    // Focus the input shortly after the panel opens.
    Effect::new(move |_| {
        if panel.get().is_open() {
            Timeout::new(100, move || {
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            })
            .forget();
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || loading.get_untracked() {
            return;
        }
        input.set(String::new());

        // History carries the transcript as it was before this send.
        let history = session.with_untracked(history_of);
        session.update(|s| s.append(ChatMessage::user(text.clone())));
        loading.set(true);

        spawn_local(async move {
            match provider.get_value().send(&text, history).await {
                Ok(reply) => {
                    session.update(|s| s.append(ChatMessage::assistant(reply)));
                }
                Err(e) => {
                    log::error!("chat send failed: {}", e);
                    session.update(|s| s.append(ChatMessage::assistant(CONNECT_ERROR_REPLY)));
                }
            }
            loading.set(false);
        });
    });

    let handle_close = move |_| {
        panel.update(|p| *p = p.close());
        if panel.get_untracked().is_closing() {
            Timeout::new(CLOSE_ANIMATION_MS, move || {
                panel.update(|p| *p = p.finish_close());
            })
            .forget();
        }
    };

    let handle_clear = move |_| {
        session.set(store.clear());
    };

    let preview = move || {
        if loading.get() {
            "Typing…".to_string()
        } else {
            session.with(bubble_preview)
        }
    };

    let panel_style = move || {
        let p = panel.get();
        let (width, height) = if p.is_expanded() {
            ("min(900px, 90vw)", "80vh")
        } else {
            ("360px", "70vh")
        };
        let animation = if p.is_closing() {
            "chat-exit 0.3s ease-in forwards"
        } else {
            "chat-entry 0.35s ease-out"
        };
        format!(
            "position: fixed; left: 24px; bottom: 24px; z-index: {}; width: {}; height: {}; animation: {};",
            PANEL_Z, width, height, animation
        )
    };

    view! {
        <style>
            "@keyframes chat-entry { from { opacity: 0; transform: translateY(30px) scale(0.95); } to { opacity: 1; transform: translateY(0) scale(1); } }
             @keyframes chat-exit { from { opacity: 1; transform: translateY(0) scale(1); } to { opacity: 0; transform: translateY(30px) scale(0.95); } }"
        </style>

        // Floating bubble
        <Show when=move || !panel.get().is_open()>
            <div
                style=format!(
                    "position: fixed; left: 24px; bottom: 24px; z-index: {}; display: flex; align-items: center; gap: 8px; cursor: pointer;",
                    BUBBLE_Z,
                )
                on:click=move |_| panel.update(|p| *p = p.open())
            >
                <button style="width: 60px; height: 60px; border-radius: 50%; background: linear-gradient(180deg, #4f46e5, #9333ea); color: #fff; border: 1px solid rgba(255,255,255,0.15); display: flex; align-items: center; justify-content: center; font-size: 24px; box-shadow: 0 8px 20px rgba(0,0,0,0.4);">
                    "💬"
                </button>
                <span style="max-width: 140px; padding: 6px 10px; border-radius: 12px; background: rgba(20,20,35,0.9); color: #fff; font-size: 13px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; box-shadow: 0 4px 12px rgba(0,0,0,0.25);">
                    {preview}
                </span>
            </div>
        </Show>

        // Chat panel
        <Show when=move || panel.get().is_open()>
            <div style=panel_style>
                <div style="height: 100%; border-radius: 18px; overflow: hidden; background: linear-gradient(180deg, rgba(10,10,26,0.96), rgba(10,10,26,0.94)); border: 1px solid rgba(255,255,255,0.08); box-shadow: 0 20px 50px rgba(0,0,0,0.5); display: flex; flex-direction: column;">
                    // Header
                    <Flex
                        justify=FlexJustify::SpaceBetween
                        align=FlexAlign::Center
                        style="padding: 12px 16px; background: linear-gradient(90deg, #4f46e5, #9333ea); color: #fff; flex-shrink: 0;"
                    >
                        <span style="font-weight: 600;">{move || assistant_title.get_value()}</span>
                        <div style="display: flex; gap: 8px;">
                            <button
                                title="Clear chat"
                                style="background: transparent; border: none; cursor: pointer; color: #fff;"
                                on:click=handle_clear
                            >
                                "🗑"
                            </button>
                            <button
                                title="Toggle size"
                                style="background: transparent; border: none; cursor: pointer; color: #fff;"
                                on:click=move |_| panel.update(|p| *p = p.toggle_expand())
                            >
                                {move || if panel.get().is_expanded() { "🗗" } else { "🗖" }}
                            </button>
                            <button
                                title="Close"
                                style="background: transparent; border: none; cursor: pointer; color: #fff;"
                                on:click=handle_close
                            >
                                "✖"
                            </button>
                        </div>
                    </Flex>

                    // Messages
                    <div
                        node_ref=messages_ref
                        style="flex: 1; padding: 12px; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; position: relative;"
                        on:scroll=move |_| {
                            if let Some(container) = messages_ref.get_untracked() {
                                let gap = container.scroll_height()
                                    - container.scroll_top()
                                    - container.client_height();
                                show_scroll_button.set(gap > SCROLL_THRESHOLD_PX);
                            }
                        }
                    >
                        <For
                            each=move || session.get().messages
                            key=|msg| msg.id.clone()
                            let:msg
                        >
                            {{
                                let is_user = msg.role == ChatRole::User;
                                view! {
                                    <div style=if is_user {
                                        "align-self: flex-end; background: linear-gradient(180deg, #2563eb, #1e40af); color: #fff; padding: 8px 12px; border-radius: 12px; max-width: 75%; font-size: 14px; word-break: break-word;"
                                    } else {
                                        "align-self: flex-start; background: rgba(255,255,255,0.08); color: #fff; padding: 8px 12px; border-radius: 12px; max-width: 75%; font-size: 14px; word-break: break-word;"
                                    }>
                                        {msg.text.clone()}
                                    </div>
                                }
                            }}
                        </For>

                        <Show when=move || loading.get()>
                            <div style="font-size: 13px; opacity: 0.8; align-self: flex-start; color: #ccc;">
                                "Typing…"
                            </div>
                        </Show>

                        <Show when=move || show_scroll_button.get()>
                            <button
                                title="Scroll to bottom"
                                style="position: sticky; bottom: 4px; align-self: flex-end; width: 36px; height: 36px; border-radius: 50%; background: linear-gradient(180deg, #4f46e5, #9333ea); color: #fff; border: none; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.3); font-size: 16px;"
                                on:click=move |_| scroll_to_bottom()
                            >
                                "↓"
                            </button>
                        </Show>
                    </div>

                    // Input row
                    <div style="padding: 10px; border-top: 1px solid rgba(255,255,255,0.08); display: flex; gap: 8px; flex-shrink: 0;">
                        <input
                            node_ref=input_ref
                            prop:value=move || input.get()
                            placeholder="Type your message…"
                            style="flex: 1; border-radius: 10px; padding: 10px 12px; background: rgba(255,255,255,0.06); color: #fff; border: 1px solid rgba(255,255,255,0.08); outline: none; font-size: 14px;"
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || {
                                input.get().trim().is_empty() || loading.get()
                            })
                            on_click=move |_| handle_send.run(())
                        >
                            "Send"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
