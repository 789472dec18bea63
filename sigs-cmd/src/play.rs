//! Terminal playback of animated plots.
//!
//! Drives the same playback machine as the web panel from a tokio interval,
//! printing one line per frame until the tick limit or Ctrl-C.

use std::time::Duration;

use log::info;
use sigs_plot::descriptor::Matrix;
use sigs_plot::{Panel, Playback, PlotDescriptor};

use crate::source::{load_problem, require_panel};

/// The grid shown for `field` at `frame`, if the panel animates one.
fn frame_grid(descriptor: &PlotDescriptor, field: usize, frame: usize) -> Option<&Matrix> {
    match descriptor {
        PlotDescriptor::AnimatedSingleHeatmap(frames) => frames.frames.get(frame).map(|f| &f.z),
        PlotDescriptor::AnimatedMultiHeatmap(anim) => {
            let field = field.min(anim.data.len().saturating_sub(1));
            anim.data.get(field).and_then(|frames| frames.get(frame))
        }
        PlotDescriptor::Line(_) | PlotDescriptor::StaticMultiHeatmap(_) => None,
    }
}

/// One status line: position, time label, and the frame's value range.
pub fn frame_line(panel: &Panel, field: usize, frame: usize) -> String {
    let labels = panel.descriptor.frame_labels();
    let label = labels.get(frame).copied().unwrap_or("");
    let range = frame_grid(&panel.descriptor, field, frame)
        .into_iter()
        .flatten()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });
    let range = match range {
        Some((lo, hi)) => format!("min {:>10.4}  max {:>10.4}", lo, hi),
        None => "no data".to_string(),
    };
    format!("[{:>3}/{}] {:<12} {}", frame + 1, labels.len(), label, range)
}

pub async fn run_play(
    problem_source: &str,
    field: usize,
    ticks: Option<u64>,
    period_ms: u64,
) -> anyhow::Result<()> {
    let problem = load_problem(problem_source).await?;
    let panel = require_panel(&problem)?;
    if !panel.kind.is_animated() {
        anyhow::bail!(
            "Problem '{}' has a {:?} plot; only animated plots can play",
            problem.id,
            panel.kind
        );
    }

    let names = panel.descriptor.field_names();
    if let Some(name) = names.get(field.min(names.len().saturating_sub(1))) {
        info!("Playing field '{}' of '{}'", name, problem.id);
    }

    let mut playback = Playback::new(panel.descriptor.frame_count());
    playback.select_field(field);
    let Some(token) = playback.play() else {
        anyhow::bail!("Problem '{}' has no frames to play", problem.id);
    };
    println!("{}", frame_line(&panel, field, playback.frame()));

    let mut interval = tokio::time::interval(Duration::from_millis(period_ms.max(1)));
    // The first tick completes immediately.
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut elapsed: u64 = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match playback.tick(token) {
                    Some(frame) => println!("{}", frame_line(&panel, field, frame)),
                    None => break,
                }
                elapsed += 1;
                if ticks.is_some_and(|limit| elapsed >= limit) {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                info!("Interrupted");
                break;
            }
        }
    }

    playback.pause();
    info!("Stopped at frame {} after {} ticks", playback.frame(), elapsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigs_plot::choose_panel;
    use serde_json::json;

    fn wave() -> Panel {
        choose_panel(Some(&json!({
            "type": "heatmap",
            "time_animation": true,
            "x": [0, 1],
            "y": [0, 1],
            "fields": [
                { "label": "t = 0", "z": [[0.0, 1.0], [2.0, 3.0]] },
                { "label": "t = 1", "z": [[-1.0, 0.5], [0.25, 0.75]] }
            ]
        })))
        .unwrap()
    }

    #[test]
    fn frame_line_reports_label_and_range() {
        let line = frame_line(&wave(), 0, 0);
        assert!(line.starts_with("[  1/2] t = 0"));
        assert!(line.contains("min     0.0000"));
        assert!(line.contains("max     3.0000"));
    }

    #[test]
    fn frame_line_past_the_end_has_no_data() {
        assert!(frame_line(&wave(), 0, 9).ends_with("no data"));
    }

    #[test]
    fn static_panels_have_no_frame_grid() {
        let line = choose_panel(Some(&json!({
            "type": "line", "x": [0.0], "t_slices": [{ "t": 0, "u": [1.0] }]
        })))
        .unwrap();
        assert!(frame_grid(&line.descriptor, 0, 0).is_none());
    }

    #[tokio::test]
    async fn static_plot_refuses_to_play() {
        let dir = std::env::temp_dir().join("sigs-cmd-play-test.json");
        tokio::fs::write(
            &dir,
            r#"{ "id": "s", "name": "S", "plots": { "type": "line", "x": [0], "t_slices": [] } }"#,
        )
        .await
        .unwrap();
        let err = run_play(dir.to_str().unwrap(), 0, Some(1), 1).await.unwrap_err();
        assert!(err.to_string().contains("only animated plots can play"));
    }
}
