//! Show/hide toggle buttons for the two chart series.

use crate::state::AppState;
use dioxus::prelude::*;
use folio_core::selection::Series;

const PREDICTED_ON_STYLE: &str = "padding: 6px 16px; border-radius: 16px; border: 1px solid #00f7ff; background: rgba(0, 247, 255, 0.15); color: #00f7ff; cursor: pointer; font-size: 13px;";
const ACTUAL_ON_STYLE: &str = "padding: 6px 16px; border-radius: 16px; border: 1px solid #ff00c3; background: rgba(255, 0, 195, 0.15); color: #ff00c3; cursor: pointer; font-size: 13px;";
const OFF_STYLE: &str = "padding: 6px 16px; border-radius: 16px; border: 1px solid rgba(255, 255, 255, 0.2); background: transparent; color: rgba(255, 255, 255, 0.4); cursor: pointer; font-size: 13px;";

/// Two buttons that flip series visibility on the shared SelectionManager.
/// An active (lit) button means the series is currently drawn.
#[component]
pub fn SeriesToggles() -> Element {
    let mut state = use_context::<AppState>();

    let visibility = match &*state.manager.read() {
        Some(m) => m.visibility(),
        None => return rsx! {},
    };
    let predicted_style = if visibility.predicted { PREDICTED_ON_STYLE } else { OFF_STYLE };
    let actual_style = if visibility.actual { ACTUAL_ON_STYLE } else { OFF_STYLE };

    let on_predicted = move |_| {
        if let Some(m) = state.manager.write().as_mut() {
            let visible = m.toggle(Series::Predicted);
            log::info!("Predicted series {}", if visible { "shown" } else { "hidden" });
        }
    };
    let on_actual = move |_| {
        if let Some(m) = state.manager.write().as_mut() {
            let visible = m.toggle(Series::Actual);
            log::info!("Actual series {}", if visible { "shown" } else { "hidden" });
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; margin: 8px 0;",
            button {
                style: predicted_style,
                onclick: on_predicted,
                "Predicted"
            }
            button {
                style: actual_style,
                onclick: on_actual,
                "Actual"
            }
        }
    }
}
