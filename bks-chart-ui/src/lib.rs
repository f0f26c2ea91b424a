//! Shared Dioxus components and D3.js bridge for the bike sharing dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`,
//!   plus the browser `fetch` used to load the dataset
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (date picker, metric cards, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
