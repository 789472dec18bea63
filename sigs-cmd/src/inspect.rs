//! Read-only subcommands: catalog listing, color scales and scenes.

use std::io::{self, Write};

use anyhow::Context;
use log::info;
use serde::Serialize;
use sigs_data::{Catalog, CategoryFilter};
use sigs_plot::{build_scene, ColorScalePolicy, Panel, PanelView, ScaleKind, ThemeMode};

use crate::source::{load_catalog, load_problem, require_panel};
use crate::OutputFormat;

/// List the catalog entries in `filter`, marking the one the explorer selects first.
pub async fn run_catalog(source: &str, filter: CategoryFilter) -> anyhow::Result<()> {
    let catalog = load_catalog(source).await?;
    info!("Loaded {} catalog entries from {}", catalog.len(), source);
    let stdout = io::stdout();
    write_catalog(&mut stdout.lock(), &catalog, filter)?;
    Ok(())
}

fn write_catalog<W: Write>(out: &mut W, catalog: &Catalog, filter: CategoryFilter) -> io::Result<()> {
    let entries = catalog.filtered(filter);
    if entries.is_empty() {
        writeln!(out, "No problems in this category.")?;
        return Ok(());
    }
    let first = catalog.default_selection(filter);
    for entry in entries {
        let marker = if Some(entry.id.as_str()) == first { '*' } else { ' ' };
        let category = if entry.known { "known" } else { "unknown" };
        writeln!(out, "{} {:<24} {:<8} {}", marker, entry.id, category, entry.name)?;
    }
    Ok(())
}

/// One line of `scales` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleRow {
    pub field: String,
    pub kind: ScaleKind,
    pub min: f64,
    pub max: f64,
    pub mid: Option<f64>,
}

pub fn scale_rows(panel: &Panel) -> Vec<ScaleRow> {
    panel
        .field_scales(&ColorScalePolicy::default())
        .into_iter()
        .map(|fs| ScaleRow {
            field: fs.label,
            kind: fs.scale.kind,
            min: fs.scale.min,
            max: fs.scale.max,
            mid: fs.scale.mid,
        })
        .collect()
}

pub async fn run_scales(problem_source: &str, format: OutputFormat) -> anyhow::Result<()> {
    let problem = load_problem(problem_source).await?;
    let panel = require_panel(&problem)?;
    let rows = scale_rows(&panel);
    if rows.is_empty() {
        info!("'{}' is a {:?} panel and has no color scales", problem.id, panel.kind);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_scales_text(&mut out, &rows)?,
        OutputFormat::Csv => write_scales_csv(&mut out, &rows)?,
    }
    Ok(())
}

fn write_scales_text<W: Write>(out: &mut W, rows: &[ScaleRow]) -> io::Result<()> {
    for row in rows {
        let mid = row.mid.map(|m| format!("  mid {}", m)).unwrap_or_default();
        writeln!(
            out,
            "{:<20} {:<10} [{}, {}]{}",
            row.field,
            row.kind.as_str(),
            row.min,
            row.max,
            mid
        )?;
    }
    Ok(())
}

fn write_scales_csv<W: Write>(out: W, rows: &[ScaleRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_scene(
    problem_source: &str,
    theme: ThemeMode,
    field: usize,
    pretty: bool,
) -> anyhow::Result<()> {
    let problem = load_problem(problem_source).await?;
    let panel = require_panel(&problem)?;
    let scene = build_scene(&panel, &PanelView::field(field), theme);
    info!(
        "'{}': {:?} panel, {} traces, {} frames",
        problem.id,
        panel.kind,
        scene.data.len(),
        scene.frame_count()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        scene.to_json()
    }
    .context("Failed to serialize scene")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigs_data::Problem;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{ "problems": [
                { "id": "heat1d", "name": "1D heat equation" },
                { "id": "wave2d", "name": "2D wave equation", "known": false }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn catalog_listing_marks_first_selection() {
        let mut out = Vec::new();
        write_catalog(&mut out, &catalog(), CategoryFilter::Unknown).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("* wave2d"));
        assert!(text.contains("unknown"));
    }

    #[test]
    fn empty_category_says_so() {
        let only_known = Catalog::from_json(r#"{ "problems": [{ "id": "a", "name": "A" }] }"#).unwrap();
        let mut out = Vec::new();
        write_catalog(&mut out, &only_known, CategoryFilter::Unknown).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "No problems in this category.");
    }

    fn two_field_problem() -> Problem {
        Problem::from_json(
            r#"{
                "id": "sw", "name": "Shallow water",
                "plots": {
                    "type": "heatmap",
                    "x": [0, 1], "y": [0, 1],
                    "fields": [
                        { "label": "ρ", "z": [[1.0, 1.2], [0.9, 1.1]] },
                        { "label": "h", "z": [[0.0, 1.0], [2.0, 3.0]] }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn scales_follow_field_order() {
        let panel = require_panel(&two_field_problem()).unwrap();
        let rows = scale_rows(&panel);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field, "ρ");
        assert_eq!(rows[0].kind, ScaleKind::Diverging);
        assert_eq!(rows[1].kind, ScaleKind::Sequential);
        assert_eq!((rows[1].min, rows[1].max, rows[1].mid), (0.0, 3.0, None));
    }

    #[test]
    fn scales_csv_has_header_and_blank_mid() {
        let panel = require_panel(&two_field_problem()).unwrap();
        let mut out = Vec::new();
        write_scales_csv(&mut out, &scale_rows(&panel)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "field,kind,min,max,mid");
        assert_eq!(lines[2], "h,sequential,0.0,3.0,");
    }

    #[test]
    fn scales_text_shows_midpoint_for_diverging() {
        let panel = require_panel(&two_field_problem()).unwrap();
        let mut out = Vec::new();
        write_scales_text(&mut out, &scale_rows(&panel)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.contains("diverging"));
        assert!(first.contains("mid 1"));
    }
}
