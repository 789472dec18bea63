//! Loading catalogs and problem records from files or URLs.

use std::time::Duration;

use anyhow::Context;
use log::info;
use sigs_data::{Catalog, Problem};
use sigs_plot::{Panel, PlotDescriptor};

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the text behind `source`, fetching it when it is an http(s) URL.
pub async fn load_text(source: &str) -> anyhow::Result<String> {
    if is_url(source) {
        info!("Fetching {}", source);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        let response = client
            .get(source)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", source))?;
        if !response.status().is_success() {
            anyhow::bail!("Bad response for {}: {}", source, response.status());
        }
        Ok(response.text().await?)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read {}", source))
    }
}

pub async fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    let json = load_text(source).await?;
    Catalog::from_json(&json).with_context(|| format!("Invalid catalog {}", source))
}

pub async fn load_problem(source: &str) -> anyhow::Result<Problem> {
    let json = load_text(source).await?;
    Problem::from_json(&json).with_context(|| format!("Invalid problem record {}", source))
}

/// The plot panel of `problem`, with the reason when there is none.
///
/// The web app silently renders nothing in these cases; on the command line
/// the user asked for the plot, so it is an error.
pub fn require_panel(problem: &Problem) -> anyhow::Result<Panel> {
    let raw = match &problem.plots {
        Some(raw) if !raw.is_null() => raw,
        _ => anyhow::bail!("Problem '{}' has no plot", problem.id),
    };
    let descriptor = PlotDescriptor::from_value(raw)
        .with_context(|| format!("Problem '{}' has an unusable plot", problem.id))?;
    Ok(Panel::new(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigs_plot::PanelKind;

    #[test]
    fn recognizes_urls() {
        assert!(is_url("https://example.org/data/problems.json"));
        assert!(is_url("http://localhost:5173/data/heat1d.json"));
        assert!(!is_url("fixtures/problems.json"));
    }

    #[test]
    fn missing_and_broken_plots_are_errors() {
        let none = Problem::from_json(r#"{ "id": "a", "name": "A" }"#).unwrap();
        assert!(require_panel(&none).is_err());

        let broken =
            Problem::from_json(r#"{ "id": "b", "name": "B", "plots": { "type": "pie" } }"#).unwrap();
        let err = require_panel(&broken).unwrap_err();
        assert!(format!("{:#}", err).contains("unusable plot"));
    }

    #[test]
    fn usable_plot_becomes_panel() {
        let problem = Problem::from_json(
            r#"{ "id": "c", "name": "C", "plots": { "type": "line", "x": [0, 1], "t_slices": [] } }"#,
        )
        .unwrap();
        assert_eq!(require_panel(&problem).unwrap().kind, PanelKind::TimeSeriesOverlay);
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = load_text("definitely/not/here.json").await.unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
