//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sigs_data::{CategoryFilter, ProblemBundle};
use sigs_plot::ThemeMode;

/// Shared application state for the results explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Catalog and problem records (None until decoded)
    pub bundle: Signal<Option<ProblemBundle>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Active category tab
    pub filter: Signal<CategoryFilter>,
    /// Currently selected problem id
    pub selected_problem: Signal<Option<String>>,
    /// Light or dark chart chrome
    pub theme: Signal<ThemeMode>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            bundle: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(CategoryFilter::All),
            selected_problem: Signal::new(None),
            theme: Signal::new(ThemeMode::Light),
        }
    }

    /// Switch category and select the first problem it contains.
    pub fn apply_filter(mut self, filter: CategoryFilter) {
        self.filter.set(filter);
        let first = self
            .bundle
            .read()
            .as_ref()
            .and_then(|b| b.catalog.default_selection(filter))
            .map(str::to_string);
        self.selected_problem.set(first);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
