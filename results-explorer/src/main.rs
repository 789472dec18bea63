//! SIGS Results Explorer
//!
//! Lists the benchmark PDE problems, narrows them by category, and shows the
//! selected problem's equations, metrics, baseline comparison, paper figure
//! and interactive plot.
//!
//! Data flow:
//! 1. `build.rs` bundles `fixtures/problems.json` and `fixtures/data/*.json`
//!    into a gzip blob in `OUT_DIR`.
//! 2. `include_bytes!` embeds the blob into the WASM binary.
//! 3. On mount the blob is decoded into a `ProblemBundle` and the first
//!    problem of the active category is selected.
//! 4. The selected problem's plot descriptor is dispatched to a `PlotPanel`.

use dioxus::prelude::*;
use sigs_chart_ui::components::{
    BaselineTable, CategoryTabs, ErrorDisplay, LoadingSpinner, MetricTable, PlotPanel,
    ProblemPicker, ThemeToggle,
};
use sigs_chart_ui::js_bridge;
use sigs_chart_ui::state::AppState;
use sigs_data::{Problem, ProblemBundle};

/// Catalog and problem records, gzip-compressed JSON.
const BUNDLE_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/bundle.json.gz"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("results-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_hook(js_bridge::init_charts);

    // Decode the embedded bundle once. Reads go through `peek` so this never reruns.
    use_effect(move || {
        match ProblemBundle::from_gzip(BUNDLE_GZ) {
            Ok(bundle) => {
                let filter = *state.filter.peek();
                let first = bundle.catalog.default_selection(filter).map(str::to_string);
                log::info!("explorer ready, selecting {:?}", first);
                state.selected_problem.set(first);
                state.bundle.set(Some(bundle));
            }
            Err(e) => {
                log::error!("Failed to decode problem bundle: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load benchmark data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    let selected = (state.selected_problem)();
    let problem: Option<Problem> = selected.as_deref().and_then(|id| {
        state
            .bundle
            .read()
            .as_ref()
            .and_then(|b| b.problem(id).ok().cloned())
    });

    rsx! {
        section {
            id: "results",
            div {
                class: "section-inner wide",
                div { class: "section-eyebrow", "Interactive Demo" }
                div {
                    style: "display: flex; justify-content: space-between; align-items: baseline; gap: 12px;",
                    h2 { class: "section-title", "Results Explorer" }
                    ThemeToggle {}
                }
                p {
                    class: "demo-intro",
                    "Select a benchmark PDE to see the governing equation, the analytical solution "
                    "(or symbolic approximation) discovered by SIGS, performance metrics, and a "
                    "comparison against baseline methods. Plots are fully interactive."
                }

                CategoryTabs {}

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    ProblemPicker {}
                    if let Some(problem) = problem {
                        ProblemView { problem }
                    } else if let Some(id) = selected {
                        ErrorDisplay { message: format!("No record for problem '{}'", id) }
                    }
                }
            }
        }
    }
}

#[component]
fn ProblemView(problem: Problem) -> Element {
    let equations: Vec<(&'static str, String)> = problem
        .equations()
        .into_iter()
        .map(|(label, latex)| (label, latex.to_string()))
        .collect();
    let metric_rows = problem.metric_rows();
    let panel = problem.panel();
    let figure = problem
        .figure
        .as_deref()
        .map(|path| path.trim_start_matches('/').to_string());
    let figure_alt = problem
        .figure_caption
        .clone()
        .unwrap_or_else(|| problem.name.clone());

    rsx! {
        div {
            class: "demo-grid",
            div {
                class: "demo-card",
                div { class: "demo-card-title", "Equations" }
                for (label, latex) in equations.iter() {
                    div {
                        key: "{label}",
                        class: "equation-block",
                        div { class: "equation-label", "{label}" }
                        code { "{latex}" }
                    }
                }
                if let Some(note) = problem.note.clone() {
                    p { class: "problem-note", "{note}" }
                }
            }
            div {
                class: "demo-card",
                div { class: "demo-card-title", "Performance" }
                MetricTable { rows: metric_rows }
                BaselineTable { rows: problem.baseline.clone() }
            }
        }

        if let Some(src) = figure {
            div {
                class: "demo-card result-figure-card",
                img { src: "{src}", alt: "{figure_alt}", class: "result-figure" }
                if let Some(caption) = problem.figure_caption.clone() {
                    p { class: "result-figure-caption", "{caption}" }
                }
            }
        }

        if let Some(panel) = panel {
            div {
                class: "demo-card",
                div { class: "demo-card-title", "Interactive plot" }
                PlotPanel { panel }
            }
        }
    }
}
