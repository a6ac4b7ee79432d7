//! Contact section: info card plus a form relayed through an external
//! form-submission service.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::portfolio::context::use_portfolio;

const FORM_RELAY_BASE: &str = "https://formsubmit.co";

/// Build a detached form and submit it to the relay. Navigation away is the
/// relay's own confirmation flow.
fn submit_via_relay(recipient: &str, fields: &[(&str, String)]) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("form") else {
        return;
    };
    let Ok(form) = element.dyn_into::<web_sys::HtmlFormElement>() else {
        return;
    };
    form.set_action(&format!("{}/{}", FORM_RELAY_BASE, recipient));
    form.set_method("POST");

    for (name, value) in fields {
        let Ok(input_element) = document.create_element("input") else {
            continue;
        };
        let Ok(input) = input_element.dyn_into::<web_sys::HtmlInputElement>() else {
            continue;
        };
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        let _ = form.append_child(&input);
    }

    if let Some(body) = document.body() {
        let _ = body.append_child(&form);
        let _ = form.submit();
        form.remove();
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Contact() -> impl IntoView {
    let portfolio = use_portfolio();
    let content = move || portfolio.document.get().content;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let recipient = portfolio
            .document
            .with_untracked(|d| d.content.contact_email.clone());
        submit_via_relay(
            &recipient,
            &[
                ("name", name.get_untracked()),
                ("email", email.get_untracked()),
                ("message", message.get_untracked()),
                ("_subject", "New portfolio contact".to_string()),
            ],
        );
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    let mailto = move || {
        format!(
            "mailto:{}?subject={}",
            content().contact_email,
            urlencoding::encode("Portfolio inquiry"),
        )
    };

    let input_style = "width: 100%; border-radius: 10px; padding: 12px; background: rgba(255,255,255,0.06); color: #fff; border: 1px solid rgba(255,255,255,0.1); outline: none; font-size: 14px;";

    view! {
        <section id="contact" style="padding: 96px 24px; max-width: 1100px; margin: 0 auto;">
            <h2 style="font-size: 2.5rem; font-weight: 700; text-align: center; margin-bottom: 56px;">
                "Get In " <span style="color: #8b5cf6;">"Touch"</span>
            </h2>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 40px;">
                // Info card
                <div style="background: #1a1a1a; border: 1px solid #2d2d2d; border-radius: 12px; padding: 36px;">
                    <h3 style="font-size: 1.5rem; font-weight: 600; margin-bottom: 20px;">
                        "Let's talk"
                    </h3>
                    <div style="display: flex; flex-direction: column; gap: 18px; color: #a1a1aa;">
                        <div>
                            <div style="color: #fff; font-weight: 600;">"Email"</div>
                            <a href=mailto style="color: #c4b5fd; text-decoration: none;">
                                {move || content().contact_email}
                            </a>
                        </div>
                        <div>
                            <div style="color: #fff; font-weight: 600;">"Phone"</div>
                            <span>{move || content().contact_phone}</span>
                        </div>
                        <div>
                            <div style="color: #fff; font-weight: 600;">"Location"</div>
                            <span>{move || content().location}</span>
                        </div>
                    </div>

                    <div style="margin-top: 28px; display: flex; gap: 12px;">
                        <a
                            href=move || content().github_url
                            target="_blank"
                            rel="noopener"
                            style="color: #d1d5db; text-decoration: none; border: 1px solid #2d2d2d; border-radius: 9999px; padding: 8px 16px;"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=move || content().linkedin_url
                            target="_blank"
                            rel="noopener"
                            style="color: #d1d5db; text-decoration: none; border: 1px solid #2d2d2d; border-radius: 9999px; padding: 8px 16px;"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=move || content().twitter_url
                            target="_blank"
                            rel="noopener"
                            style="color: #d1d5db; text-decoration: none; border: 1px solid #2d2d2d; border-radius: 9999px; padding: 8px 16px;"
                        >
                            "Twitter"
                        </a>
                    </div>
                </div>

                // Form
                <form
                    style="display: flex; flex-direction: column; gap: 16px;"
                    on:submit=handle_submit
                >
                    <input
                        style=input_style
                        placeholder="Your name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        style=input_style
                        type="email"
                        placeholder="Your email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <textarea
                        style=format!("{} min-height: 140px; resize: vertical;", input_style)
                        placeholder="Your message"
                        required=true
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        style="padding: 12px 28px; border-radius: 10px; border: none; cursor: pointer; color: #fff; font-weight: 600; background: linear-gradient(180deg, #4f46e5, #9333ea);"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
