//! Tabs switching between the fields of a multi-field panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldTabsProps {
    pub names: Vec<String>,
    pub active: usize,
    pub on_select: EventHandler<usize>,
}

#[component]
pub fn FieldTabs(props: FieldTabsProps) -> Element {
    if props.names.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "filter-tabs",
            role: "tablist",
            aria_label: "Field",
            for (i, name) in props.names.iter().enumerate() {
                button {
                    key: "{i}",
                    role: "tab",
                    aria_selected: i == props.active,
                    class: if i == props.active { "tab-btn active" } else { "tab-btn" },
                    onclick: move |_| props.on_select.call(i),
                    "{name}"
                }
            }
        }
    }
}
