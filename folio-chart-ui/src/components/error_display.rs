//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: rgba(255, 0, 195, 0.08); color: #ff7ad9; border-radius: 8px; border: 1px solid rgba(255, 0, 195, 0.4);",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
