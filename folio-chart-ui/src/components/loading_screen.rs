//! Full-screen intro loader.

use dioxus::prelude::*;
use folio_core::loading::FADE_OUT_MS;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingScreenProps {
    /// Status line currently shown
    pub text: String,
    /// True once the fade-out has started
    #[props(default = false)]
    pub fading: bool,
    /// Fired when the visitor skips the intro
    pub on_skip: EventHandler<()>,
}

/// Full-screen overlay that walks through the loader status lines and then
/// fades out. The page shows this instead of its content while
/// `AppState::loading` is true; the parent drives the timers.
#[component]
pub fn LoadingScreen(props: LoadingScreenProps) -> Element {
    let opacity = if props.fading { "0" } else { "1" };
    let style = format!(
        "position: fixed; inset: 0; z-index: 100; display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 24px; background: #0e0e0e; opacity: {}; transition: opacity {}ms ease;",
        opacity, FADE_OUT_MS
    );

    rsx! {
        div {
            style: "{style}",
            div {
                aria_live: "polite",
                style: "color: #00f7ff; font-size: 18px; letter-spacing: 2px; font-family: 'Courier New', monospace;",
                "{props.text}"
            }
            button {
                style: "background: none; border: 1px solid rgba(255, 255, 255, 0.3); color: rgba(255, 255, 255, 0.6); padding: 6px 16px; border-radius: 20px; cursor: pointer; font-size: 12px;",
                onclick: move |_| props.on_skip.call(()),
                "Skip intro"
            }
        }
    }
}
