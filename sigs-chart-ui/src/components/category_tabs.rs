//! Category tabs narrowing the catalog.

use crate::state::AppState;
use dioxus::prelude::*;
use sigs_data::CategoryFilter;

#[component]
pub fn CategoryTabs() -> Element {
    let state = use_context::<AppState>();
    let current = (state.filter)();

    rsx! {
        div {
            class: "filter-tabs",
            role: "tablist",
            aria_label: "Benchmark filter",
            for filter in CategoryFilter::ALL {
                button {
                    key: "{filter}",
                    role: "tab",
                    aria_selected: filter == current,
                    class: if filter == current { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| state.apply_filter(filter),
                    "{filter.label()}"
                }
            }
        }
    }
}
