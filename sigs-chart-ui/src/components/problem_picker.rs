//! Dropdown selector for choosing a benchmark problem.

use crate::state::AppState;
use dioxus::prelude::*;

/// Problem dropdown selector.
/// Lists the catalog entries in the active category and updates selected_problem on change.
#[component]
pub fn ProblemPicker() -> Element {
    let mut state = use_context::<AppState>();
    let filter = (state.filter)();
    let selected = (state.selected_problem)().unwrap_or_default();
    let entries: Vec<(String, String)> = state
        .bundle
        .read()
        .as_ref()
        .map(|b| {
            b.catalog
                .filtered(filter)
                .into_iter()
                .map(|e| (e.id.clone(), e.name.clone()))
                .collect()
        })
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.selected_problem.set(Some(evt.value()));
    };

    rsx! {
        div {
            class: "demo-card",
            style: "margin-bottom: 14px;",
            label {
                r#for: "problem-select",
                class: "demo-card-title",
                "Choose a PDE benchmark"
            }
            if entries.is_empty() {
                p {
                    style: "color: var(--muted, #666); font-size: 0.9rem;",
                    "No problems in this category."
                }
            } else {
                select {
                    id: "problem-select",
                    class: "select",
                    onchange: on_change,
                    for (id, name) in entries.iter() {
                        option {
                            key: "{id}",
                            value: "{id}",
                            selected: *id == selected,
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
