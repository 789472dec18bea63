//! Shared Dioxus components and Plotly bridge for the SIGS results explorer.
//!
//! This crate provides:
//! - `js_bridge`: the rendering adapter that hands `sigs_plot` scenes to Plotly
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `ticker`: the cancellable playback timer owned by an animated panel
//! - `components`: reusable RSX components (pickers, tabs, the plot panel)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod ticker;
