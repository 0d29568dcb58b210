//! Contact form with inline validation and mailto submission.

use dioxus::prelude::*;
use folio_core::contact::{validate_email, validate_message, ContactMessage};
use gloo_timers::future::TimeoutFuture;

/// How long the success note stays on screen.
const SUCCESS_NOTE_MS: u32 = 5_000;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px 14px; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 8px; color: #fff; font-size: 14px;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 6px; font-size: 13px; color: rgba(255, 255, 255, 0.8);";
const FIELD_ERROR_STYLE: &str = "display: block; margin-top: 4px; font-size: 12px; color: #ff7ad9;";

/// Email + message form that validates on blur and submit, then opens the
/// visitor's mail client with a prefilled message addressed to `recipient`.
/// Nothing is sent from the page itself.
#[component]
pub fn ContactForm(recipient: String) -> Element {
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut message_error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| false);

    let on_email_blur = move |_| {
        email_error.set(validate_email(&email()).err().map(|e| e.to_string()));
    };
    let on_message_blur = move |_| {
        message_error.set(validate_message(&message()).err().map(|e| e.to_string()));
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let email_check = validate_email(&email());
        let message_check = validate_message(&message());
        email_error.set(email_check.as_ref().err().map(|e| e.to_string()));
        message_error.set(message_check.as_ref().err().map(|e| e.to_string()));

        let (Ok(email_value), Ok(message_value)) = (email_check, message_check) else {
            return;
        };

        let link = match ContactMessage::new(&email_value, &message_value) {
            Ok(msg) => msg.mailto_link(&recipient),
            Err(e) => {
                log::warn!("Contact message rejected: {}", e);
                return;
            }
        };

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(&link, "_self") {
                log::warn!("Failed to open mail client: {:?}", e);
                return;
            }
        }
        log::info!("Opened mail client for {}", email_value);

        email.set(String::new());
        message.set(String::new());
        sent.set(true);
        spawn(async move {
            TimeoutFuture::new(SUCCESS_NOTE_MS).await;
            sent.set(false);
        });
    };

    rsx! {
        form {
            novalidate: true,
            style: "display: flex; flex-direction: column; gap: 16px; max-width: 480px;",
            onsubmit: on_submit,

            div {
                label {
                    r#for: "contact-email",
                    style: LABEL_STYLE,
                    "Your email"
                }
                input {
                    id: "contact-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    style: INPUT_STYLE,
                    value: "{email}",
                    oninput: move |evt| {
                        email.set(evt.value());
                        email_error.set(None);
                    },
                    onblur: on_email_blur,
                }
                if let Some(err) = email_error() {
                    span { style: FIELD_ERROR_STYLE, "{err}" }
                }
            }

            div {
                label {
                    r#for: "contact-message",
                    style: LABEL_STYLE,
                    "Message"
                }
                textarea {
                    id: "contact-message",
                    rows: "5",
                    placeholder: "Tell me about your project...",
                    style: INPUT_STYLE,
                    value: "{message}",
                    oninput: move |evt| {
                        message.set(evt.value());
                        message_error.set(None);
                    },
                    onblur: on_message_blur,
                }
                if let Some(err) = message_error() {
                    span { style: FIELD_ERROR_STYLE, "{err}" }
                }
            }

            button {
                r#type: "submit",
                style: "align-self: flex-start; padding: 10px 28px; border-radius: 20px; border: 1px solid #00f7ff; background: rgba(0, 247, 255, 0.15); color: #00f7ff; cursor: pointer; font-size: 14px;",
                "Send Message"
            }

            if sent() {
                div {
                    aria_live: "polite",
                    style: "padding: 12px 16px; background: rgba(0, 247, 255, 0.08); border: 1px solid rgba(0, 247, 255, 0.4); border-radius: 8px; color: #00f7ff; font-size: 13px;",
                    "Your mail client should open with the message prefilled. Thanks for reaching out!"
                }
            }
        }
    }
}
