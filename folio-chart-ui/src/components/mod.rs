//! Reusable Dioxus RSX components for the portfolio page.

mod chart_container;
mod chart_header;
mod contact_form;
mod error_display;
mod loading_screen;
mod project_selector;
mod series_toggles;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use contact_form::ContactForm;
pub use error_display::ErrorDisplay;
pub use loading_screen::LoadingScreen;
pub use project_selector::ProjectSelector;
pub use series_toggles::SeriesToggles;
