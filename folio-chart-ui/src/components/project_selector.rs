//! Project selector buttons above the chart.

use crate::state::AppState;
use dioxus::prelude::*;

const BUTTON_STYLE: &str = "padding: 8px 18px; border-radius: 20px; border: 1px solid rgba(0, 247, 255, 0.4); background: transparent; color: rgba(255, 255, 255, 0.8); cursor: pointer; font-size: 13px;";
const BUTTON_ACTIVE_STYLE: &str = "padding: 8px 18px; border-radius: 20px; border: 1px solid #00f7ff; background: rgba(0, 247, 255, 0.15); color: #00f7ff; cursor: pointer; font-size: 13px;";

/// One button per project in the dataset store.
/// Clicking selects that project on the shared SelectionManager; the chart
/// re-render is driven by the resulting signal write.
#[component]
pub fn ProjectSelector() -> Element {
    let mut state = use_context::<AppState>();

    let manager = state.manager.read();
    let Some(m) = &*manager else {
        return rsx! {};
    };
    let current = m.current_project_id();
    let buttons: Vec<(String, String, bool, &str)> = m
        .projects()
        .iter()
        .map(|p| {
            let active = p.id == current;
            let style = if active { BUTTON_ACTIVE_STYLE } else { BUTTON_STYLE };
            (p.id.clone(), p.display_name(), active, style)
        })
        .collect();
    drop(manager);

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin: 8px 0;",
            for (id, name, active, style) in buttons {
                button {
                    style: style,
                    onclick: move |_| {
                        if active {
                            return;
                        }
                        if let Some(m) = state.manager.write().as_mut() {
                            match m.select_project(&id) {
                                Ok(view) => log::info!("Selected project: {}", view.title),
                                Err(e) => log::warn!("Project selection rejected: {}", e),
                            }
                        }
                    },
                    "{name}"
                }
            }
        }
    }
}
