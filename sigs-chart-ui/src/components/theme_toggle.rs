//! Light/dark switch for the chart chrome.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use sigs_plot::ThemeMode;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let mode = (state.theme)();
    let next = mode.toggled();

    let on_click = move |_| {
        state.theme.set(next);
        js_bridge::set_document_theme(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Switch to {next} theme",
            onclick: on_click,
            if mode == ThemeMode::Dark { "Light mode" } else { "Dark mode" }
        }
    }
}
