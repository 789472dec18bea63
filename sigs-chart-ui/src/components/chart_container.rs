//! Fixed-height container the plot adapter draws into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Plotly will render into this)
    pub id: String,
    /// Height in pixels; the plot fills it
    pub height: u32,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading plot..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
