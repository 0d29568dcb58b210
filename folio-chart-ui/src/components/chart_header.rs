//! Chart header component with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title (the selected project's metric name)
    pub title: String,
    /// Short line under the title (e.g., "Predicted vs Actual")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for the chart section showing the selected project's title.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h3 {
                id: "chart-title",
                style: "margin: 0 0 4px 0; font-size: 18px; color: #fff;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: rgba(255, 255, 255, 0.6);",
                    "{props.subtitle}"
                }
            }
        }
    }
}
