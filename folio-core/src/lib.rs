//! Core domain logic for the ML portfolio page.
//!
//! This crate holds everything that does not need a browser: the embedded
//! project dataset, the selection/visibility state machine behind the
//! prediction chart, contact-form validation, and the loading-sequence
//! schedule. The WASM-side crates (`folio-chart-ui`, `portfolio-page`)
//! consume it; nothing here touches a rendering surface, so the whole crate
//! tests natively.
//!
//! # Architecture
//!
//! - [`store::DatasetStore`]: read-only lookup from project id to
//!   [`project::ProjectSeries`], parsed from a CSV fixture embedded at
//!   compile time.
//! - [`selection::SelectionManager`]: owns the current project id and the
//!   per-series visibility flags, and computes the
//!   [`selection::RenderableDataset`] handed to the chart bridge.
//! - [`contact`]: field validation and `mailto:` composition for the
//!   contact form.
//! - [`loading`]: the timed status-line schedule for the intro loader.

pub mod contact;
pub mod error;
pub mod loading;
pub mod project;
pub mod selection;
pub mod store;
