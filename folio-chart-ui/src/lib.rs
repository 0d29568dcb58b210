//! Shared Dioxus components and D3.js bridge for the portfolio page.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js prediction chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, toggles, contact form, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
