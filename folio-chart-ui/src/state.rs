//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use folio_core::loading::LOADING_SEQUENCE;
use folio_core::selection::SelectionManager;

/// Shared application state for the portfolio page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Chart selection state (None until the dataset is loaded)
    pub manager: Signal<Option<SelectionManager>>,
    /// Whether the intro loader still covers the page
    pub loading: Signal<bool>,
    /// Status line currently shown by the intro loader
    pub loader_text: Signal<String>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            manager: Signal::new(None),
            loading: Signal::new(true),
            loader_text: Signal::new(LOADING_SEQUENCE[0].text.to_string()),
            error_msg: Signal::new(None),
        }
    }
}
