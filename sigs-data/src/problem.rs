use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sigs_plot::{choose_panel, Panel};

use crate::error::DataError;

fn default_known() -> bool {
    true
}

/// One row of the baseline comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    pub method: String,
    /// Relative L2 error, kept as written (numbers or strings like "diverged").
    pub error: Value,
    pub time_sec: Value,
}

/// A benchmark problem record (`data/<id>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub name: String,
    #[serde(default = "default_known")]
    pub known: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pde_latex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_latex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ansatz_latex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_latex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_latex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub metrics: Map<String, Value>,
    #[serde(default)]
    pub baseline: Vec<BaselineRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_caption: Option<String>,
    /// Raw plot descriptor; interpreted lazily so a bad plot never hides the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plots: Option<Value>,
}

impl Problem {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The plot panel for this problem, if it has a usable plot.
    pub fn panel(&self) -> Option<Panel> {
        choose_panel(self.plots.as_ref())
    }

    /// Labelled equations present on the record, in display order.
    pub fn equations(&self) -> Vec<(&'static str, &str)> {
        [
            ("PDE", &self.pde_latex),
            ("Domain / Conditions", &self.domain_latex),
            ("Ansatz", &self.ansatz_latex),
            ("SIGS discovered", &self.solution_latex),
            ("True solution", &self.true_latex),
        ]
        .into_iter()
        .filter_map(|(label, latex)| latex.as_deref().map(|l| (label, l)))
        .collect()
    }

    /// Metric names with underscores turned into spaces, paired with display text,
    /// in the order the record lists them.
    pub fn metric_rows(&self) -> Vec<(String, String)> {
        self.metrics
            .iter()
            .map(|(key, value)| (key.replace('_', " "), display_scalar(value)))
            .collect()
    }
}

/// Render a JSON scalar the way it would read in a table cell.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigs_plot::PanelKind;

    const HEAT: &str = r#"{
        "id": "heat1d",
        "name": "1D heat equation",
        "pde_latex": "u_t = u_{xx}",
        "metrics": { "rel_l2": 1.2e-13, "wall_time": "41 s" },
        "baseline": [
            { "method": "PySR", "error": 0.031, "time_sec": 820 },
            { "method": "DSR", "error": "diverged", "time_sec": null }
        ],
        "plots": {
            "type": "line",
            "x": [0.0, 0.5, 1.0],
            "t_slices": [{ "t": 0, "u": [0.0, 1.0, 0.0] }]
        }
    }"#;

    #[test]
    fn parses_problem_record() {
        let problem = Problem::from_json(HEAT).unwrap();
        assert_eq!(problem.id, "heat1d");
        assert!(problem.known);
        assert_eq!(problem.baseline.len(), 2);
        assert_eq!(display_scalar(&problem.baseline[1].error), "diverged");
        assert_eq!(display_scalar(&problem.baseline[1].time_sec), "");
        assert_eq!(problem.panel().map(|p| p.kind), Some(PanelKind::TimeSeriesOverlay));
    }

    #[test]
    fn metric_rows_are_humanized() {
        let problem = Problem::from_json(HEAT).unwrap();
        let rows = problem.metric_rows();
        assert!(rows.contains(&("rel l2".to_string(), "1.2e-13".to_string())));
        assert!(rows.contains(&("wall time".to_string(), "41 s".to_string())));
    }

    #[test]
    fn metric_rows_follow_record_order() {
        let problem = Problem::from_json(
            r#"{
                "id": "burgers", "name": "Burgers", "known": true,
                "metrics": { "wall_time": "12 s", "rel_l2": 3e-4, "max_abs_error": 0.002 }
            }"#,
        )
        .unwrap();
        let labels: Vec<String> = problem.metric_rows().into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["wall time", "rel l2", "max abs error"]);
    }

    #[test]
    fn equations_skip_missing_entries() {
        let problem = Problem::from_json(HEAT).unwrap();
        assert_eq!(problem.equations(), vec![("PDE", "u_t = u_{xx}")]);
    }

    #[test]
    fn bad_plot_does_not_hide_the_record() {
        let problem = Problem::from_json(
            r#"{ "id": "x", "name": "X", "known": false, "plots": { "type": "surface" } }"#,
        )
        .unwrap();
        assert!(!problem.known);
        assert!(problem.panel().is_none());
    }

    #[test]
    fn record_without_plot_has_no_panel() {
        let problem = Problem::from_json(r#"{ "id": "y", "name": "Y", "plots": null }"#).unwrap();
        assert!(problem.plots.is_none());
        assert!(problem.panel().is_none());
    }
}
