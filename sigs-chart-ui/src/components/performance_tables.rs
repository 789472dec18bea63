//! Metric and baseline tables for the selected problem.

use dioxus::prelude::*;
use sigs_data::problem::display_scalar;
use sigs_data::BaselineRow;

#[derive(Props, Clone, PartialEq)]
pub struct MetricTableProps {
    /// (humanized name, display value) pairs
    pub rows: Vec<(String, String)>,
}

#[component]
pub fn MetricTable(props: MetricTableProps) -> Element {
    if props.rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "metricTable",
            h3 { "SIGS metrics" }
            table {
                tbody {
                    for (name, value) in props.rows.iter() {
                        tr {
                            key: "{name}",
                            td { style: "text-transform: capitalize;", "{name}" }
                            td { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BaselineTableProps {
    pub rows: Vec<BaselineRow>,
}

#[component]
pub fn BaselineTable(props: BaselineTableProps) -> Element {
    if props.rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "baselineTable",
            h3 { "Baseline comparison" }
            table {
                thead {
                    tr {
                        th { "Method" }
                        th { "Rel L2" }
                        th { "Time (s)" }
                    }
                }
                tbody {
                    for (i, row) in props.rows.iter().enumerate() {
                        tr {
                            key: "{i}",
                            td { "{row.method}" }
                            td { {display_scalar(&row.error)} }
                            td { {display_scalar(&row.time_sec)} }
                        }
                    }
                }
            }
        }
    }
}
