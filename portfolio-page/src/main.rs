//! ML Portfolio Page
//!
//! Single-page portfolio app: an intro loading sequence, a D3.js chart
//! comparing predicted vs actual metrics for five ML projects with a
//! project selector and per-series visibility toggles, and a contact form
//! that opens the visitor's mail client with a prefilled message.
//!
//! Data flow:
//! 1. `include_str!` embeds the project CSV fixture inside folio-core.
//! 2. On mount, the fixture is parsed into a `DatasetStore` and wrapped in
//!    a `SelectionManager` held in `AppState`.
//! 3. Selector and toggle clicks mutate the manager; a render effect
//!    serializes the current view and hands it to the D3 bridge.

use dioxus::prelude::*;
use folio_chart_ui::components::{
    ChartContainer, ChartHeader, ContactForm, ErrorDisplay, LoadingScreen, ProjectSelector,
    SeriesToggles,
};
use folio_chart_ui::js_bridge;
use folio_chart_ui::state::AppState;
use folio_core::loading::{step_waits, FADE_OUT_MS, FINAL_HOLD_MS, LOADING_SEQUENCE};
use folio_core::selection::SelectionManager;
use folio_core::store::DatasetStore;
use gloo_timers::future::TimeoutFuture;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "prediction-chart";
/// Project selected on first paint.
const DEFAULT_PROJECT: &str = "biodiversity";
/// Address the contact form's mailto link targets.
const CONTACT_RECIPIENT: &str = "hello@mlfolio.dev";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("portfolio-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut fading = use_signal(|| false);

    // Load the dataset and selection state on mount
    use_effect(move || {
        js_bridge::init_charts();

        match DatasetStore::embedded() {
            Ok(store) => match SelectionManager::new(store, DEFAULT_PROJECT) {
                Ok(manager) => state.manager.set(Some(manager)),
                Err(e) => {
                    log::error!("Failed to initialize selection state: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to initialize selection state: {}", e)));
                }
            },
            Err(e) => {
                log::error!("Failed to load project data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load project data: {}", e)));
            }
        }
    });

    // Walk the intro loader through its status lines, then fade it out.
    // Every wait re-checks `loading` so a skip ends the sequence early.
    use_effect(move || {
        spawn(async move {
            for (step, wait) in LOADING_SEQUENCE.iter().zip(step_waits()) {
                TimeoutFuture::new(wait).await;
                if !(state.loading)() {
                    return;
                }
                state.loader_text.set(step.text.to_string());
            }
            TimeoutFuture::new(FINAL_HOLD_MS).await;
            if !(state.loading)() {
                return;
            }
            fading.set(true);
            TimeoutFuture::new(FADE_OUT_MS).await;
            state.loading.set(false);
        });
    });

    // Re-render the chart whenever the selection or visibility changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let view = match &*state.manager.read() {
            Some(manager) => manager.current_view(),
            None => return,
        };

        let data_json = serde_json::to_string(&view).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "yMin": 60,
            "yMax": 100,
            "yTickSuffix": "%",
            "height": 420,
            "seriesColors": { "predicted": "#00f7ff", "actual": "#ff00c3" },
            "seriesLabels": { "predicted": "Predicted", "actual": "Actual" },
        }))
        .unwrap_or_default();

        log::info!("Rendering chart for: {}", view.title);
        js_bridge::render_prediction_chart(CHART_ID, &data_json, &config_json);
    });

    let chart_title = state
        .manager
        .read()
        .as_ref()
        .map(|m| m.current_view().title)
        .unwrap_or_else(|| "Project Metrics".to_string());

    rsx! {
        if (state.loading)() {
            LoadingScreen {
                text: (state.loader_text)(),
                fading: fading(),
                on_skip: move |_| {
                    fading.set(true);
                    spawn(async move {
                        TimeoutFuture::new(FADE_OUT_MS).await;
                        state.loading.set(false);
                    });
                },
            }
        } else {
            div {
                style: "min-height: 100vh; background: #0e0e0e; color: #fff; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 32px 24px;",

                header {
                    class: "section",
                    style: "max-width: 960px; margin: 0 auto 48px auto;",
                    h1 {
                        style: "margin: 0 0 8px 0; font-size: 32px; color: #00f7ff;",
                        "Machine Learning Portfolio"
                    }
                    p {
                        style: "margin: 0; color: rgba(255, 255, 255, 0.6); font-size: 15px;",
                        "Predictive models across ecology, markets, and pricing"
                    }
                }

                section {
                    class: "section",
                    style: "max-width: 960px; margin: 0 auto 64px auto;",
                    h2 {
                        style: "font-size: 20px; margin: 0 0 16px 0;",
                        "Prediction Accuracy"
                    }

                    ChartHeader {
                        title: chart_title,
                        subtitle: "Predicted vs Actual".to_string(),
                    }

                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    } else {
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; margin-bottom: 12px;",
                            ProjectSelector {}
                            SeriesToggles {}
                        }

                        ChartContainer {
                            id: CHART_ID.to_string(),
                            loading: state.manager.read().is_none(),
                            min_height: 420,
                        }
                    }
                }

                section {
                    class: "section",
                    style: "max-width: 960px; margin: 0 auto;",
                    h2 {
                        style: "font-size: 20px; margin: 0 0 16px 0;",
                        "Get In Touch"
                    }
                    ContactForm {
                        recipient: CONTACT_RECIPIENT.to_string(),
                    }
                }
            }
        }
    }
}
