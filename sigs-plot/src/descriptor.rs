use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlotError;

/// A `rows x columns` grid of values, indexed `[y][x]`.
pub type Matrix = Vec<Vec<f64>>;

/// One curve of a line plot: the values `u(x)` at time `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlice {
    pub t: f64,
    pub u: Vec<f64>,
}

/// A labeled heatmap grid. Used both for static tabs and for animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledGrid {
    pub label: String,
    pub z: Matrix,
}

/// All time slices overlaid on one shared x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub series: Vec<TimeSlice>,
}

/// Several static fields on one grid, shown one tab at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapTabs {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fields: Vec<LabeledGrid>,
}

/// A single field evolving over time.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapFrames {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub frames: Vec<LabeledGrid>,
}

/// Several fields, each evolving over the same time labels.
///
/// `data` is indexed `[field][frame]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAnimation {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub field_names: Vec<String>,
    pub frame_labels: Vec<String>,
    pub data: Vec<Vec<Matrix>>,
    pub colorbar_labels: Option<Vec<String>>,
}

impl FieldAnimation {
    /// Colorbar title for a field, falling back to the field name.
    pub fn colorbar_label(&self, field: usize) -> &str {
        self.colorbar_labels
            .as_ref()
            .and_then(|labels| labels.get(field))
            .or_else(|| self.field_names.get(field))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// The plot attached to a benchmark problem.
///
/// Owned by whoever loaded the problem; the renderer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotDescriptor {
    Line(LinePlot),
    StaticMultiHeatmap(HeatmapTabs),
    AnimatedSingleHeatmap(HeatmapFrames),
    AnimatedMultiHeatmap(FieldAnimation),
}

/// Wire shape of `problem.plots`. Every key is optional so that shape errors
/// are reported by validation rather than by serde.
#[derive(Debug, Deserialize)]
struct RawPlot {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    time_animation: bool,
    #[serde(default)]
    x: Vec<f64>,
    #[serde(default)]
    y: Vec<f64>,
    #[serde(default)]
    t_slices: Vec<TimeSlice>,
    #[serde(default)]
    fields: Vec<LabeledGrid>,
    #[serde(default)]
    field_names: Vec<String>,
    #[serde(default)]
    t_labels: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Matrix>>,
    #[serde(default)]
    colorbar_labels: Option<Vec<String>>,
}

impl PlotDescriptor {
    /// Parse and validate a descriptor from the site's JSON.
    pub fn from_value(value: &Value) -> Result<Self, PlotError> {
        if !value.is_object() {
            return Err(malformed("plot descriptor must be a JSON object"));
        }
        let raw = RawPlot::deserialize(value)
            .map_err(|e| PlotError::MalformedDescriptor(e.to_string()))?;

        let descriptor = match raw.kind.as_deref() {
            Some("line") => PlotDescriptor::Line(LinePlot {
                x: raw.x,
                series: raw.t_slices,
            }),
            Some("heatmap") if raw.time_animation => {
                PlotDescriptor::AnimatedSingleHeatmap(HeatmapFrames {
                    x: raw.x,
                    y: raw.y,
                    frames: raw.fields,
                })
            }
            Some("heatmap") => PlotDescriptor::StaticMultiHeatmap(HeatmapTabs {
                x: raw.x,
                y: raw.y,
                fields: raw.fields,
            }),
            Some("multi_animated_heatmap") => {
                PlotDescriptor::AnimatedMultiHeatmap(FieldAnimation {
                    x: raw.x,
                    y: raw.y,
                    field_names: raw.field_names,
                    frame_labels: raw.t_labels,
                    data: raw.data,
                    colorbar_labels: raw.colorbar_labels,
                })
            }
            Some(other) => return Err(malformed(&format!("unrecognized plot type '{other}'"))),
            None => return Err(malformed("missing plot type")),
        };

        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PlotError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| PlotError::MalformedDescriptor(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Check the shape invariants of each kind.
    pub fn validate(&self) -> Result<(), PlotError> {
        match self {
            PlotDescriptor::Line(line) => {
                for slice in &line.series {
                    if slice.u.len() != line.x.len() {
                        return Err(malformed(&format!(
                            "time slice t={} has {} values for {} x points",
                            slice.t,
                            slice.u.len(),
                            line.x.len()
                        )));
                    }
                }
                Ok(())
            }
            PlotDescriptor::StaticMultiHeatmap(tabs) => tabs
                .fields
                .iter()
                .try_for_each(|field| check_grid(&field.label, &field.z, &tabs.x, &tabs.y)),
            PlotDescriptor::AnimatedSingleHeatmap(frames) => frames
                .frames
                .iter()
                .try_for_each(|frame| check_grid(&frame.label, &frame.z, &frames.x, &frames.y)),
            PlotDescriptor::AnimatedMultiHeatmap(anim) => {
                if anim.data.len() != anim.field_names.len() {
                    return Err(malformed(&format!(
                        "{} data blocks for {} field names",
                        anim.data.len(),
                        anim.field_names.len()
                    )));
                }
                for (name, frames) in anim.field_names.iter().zip(&anim.data) {
                    if frames.len() != anim.frame_labels.len() {
                        return Err(malformed(&format!(
                            "field '{}' has {} frames for {} time labels",
                            name,
                            frames.len(),
                            anim.frame_labels.len()
                        )));
                    }
                    for z in frames {
                        check_grid(name, z, &anim.x, &anim.y)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Number of animation frames; zero for static layouts.
    pub fn frame_count(&self) -> usize {
        match self {
            PlotDescriptor::Line(_) | PlotDescriptor::StaticMultiHeatmap(_) => 0,
            PlotDescriptor::AnimatedSingleHeatmap(frames) => frames.frames.len(),
            PlotDescriptor::AnimatedMultiHeatmap(anim) => anim.frame_labels.len(),
        }
    }

    /// Labels shown on the time slider, in frame order.
    pub fn frame_labels(&self) -> Vec<&str> {
        match self {
            PlotDescriptor::Line(_) | PlotDescriptor::StaticMultiHeatmap(_) => Vec::new(),
            PlotDescriptor::AnimatedSingleHeatmap(frames) => {
                frames.frames.iter().map(|f| f.label.as_str()).collect()
            }
            PlotDescriptor::AnimatedMultiHeatmap(anim) => {
                anim.frame_labels.iter().map(String::as_str).collect()
            }
        }
    }

    /// Names of the selectable fields (tabs). Empty when there is nothing to switch.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            PlotDescriptor::Line(_) | PlotDescriptor::AnimatedSingleHeatmap(_) => Vec::new(),
            PlotDescriptor::StaticMultiHeatmap(tabs) => {
                tabs.fields.iter().map(|f| f.label.as_str()).collect()
            }
            PlotDescriptor::AnimatedMultiHeatmap(anim) => {
                anim.field_names.iter().map(String::as_str).collect()
            }
        }
    }
}

fn check_grid(label: &str, z: &Matrix, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if z.len() != y.len() {
        return Err(malformed(&format!(
            "grid '{}' has {} rows for {} y points",
            label,
            z.len(),
            y.len()
        )));
    }
    if let Some(row) = z.iter().find(|row| row.len() != x.len()) {
        return Err(malformed(&format!(
            "grid '{}' has a row of {} values for {} x points",
            label,
            row.len(),
            x.len()
        )));
    }
    Ok(())
}

fn malformed(reason: &str) -> PlotError {
    PlotError::MalformedDescriptor(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_line_plot() {
        let value = json!({
            "type": "line",
            "x": [0.0, 0.5, 1.0],
            "t_slices": [
                { "t": 0, "u": [0.0, 1.0, 0.0] },
                { "t": 0.5, "u": [0.0, 0.5, 0.0] }
            ]
        });
        let descriptor = PlotDescriptor::from_value(&value).unwrap();
        match descriptor {
            PlotDescriptor::Line(line) => {
                assert_eq!(line.x.len(), 3);
                assert_eq!(line.series.len(), 2);
                assert_eq!(line.series[1].t, 0.5);
            }
            other => panic!("expected line plot, got {:?}", other),
        }
    }

    #[test]
    fn time_animation_flag_selects_animated_heatmap() {
        let value = json!({
            "type": "heatmap",
            "time_animation": true,
            "x": [0.0, 1.0],
            "y": [0.0],
            "fields": [
                { "label": "t = 0", "z": [[0.0, 1.0]] },
                { "label": "t = 1", "z": [[1.0, 0.0]] }
            ]
        });
        let descriptor = PlotDescriptor::from_value(&value).unwrap();
        assert!(matches!(descriptor, PlotDescriptor::AnimatedSingleHeatmap(_)));
        assert_eq!(descriptor.frame_count(), 2);
        assert_eq!(descriptor.frame_labels(), vec!["t = 0", "t = 1"]);
        assert!(descriptor.field_names().is_empty());
    }

    #[test]
    fn plain_heatmap_is_tabbed() {
        let value = json!({
            "type": "heatmap",
            "x": [0.0, 1.0],
            "y": [0.0, 1.0],
            "fields": [
                { "label": "SIGS", "z": [[0.0, 1.0], [1.0, 2.0]] },
                { "label": "Error", "z": [[0.0, 0.1], [0.1, 0.2]] }
            ]
        });
        let descriptor = PlotDescriptor::from_value(&value).unwrap();
        assert!(matches!(descriptor, PlotDescriptor::StaticMultiHeatmap(_)));
        assert_eq!(descriptor.frame_count(), 0);
        assert_eq!(descriptor.field_names(), vec!["SIGS", "Error"]);
    }

    #[test]
    fn parses_multi_field_animation() {
        let value = json!({
            "type": "multi_animated_heatmap",
            "x": [0.0, 1.0],
            "y": [0.0],
            "field_names": ["ρ", "u"],
            "t_labels": ["t=0", "t=1", "t=2"],
            "colorbar_labels": ["ρ(x,y,t)"],
            "data": [
                [[[1.0, 1.1]], [[1.0, 1.2]], [[0.9, 1.0]]],
                [[[-1.0, 1.0]], [[-0.5, 0.5]], [[0.0, 0.0]]]
            ]
        });
        let descriptor = PlotDescriptor::from_value(&value).unwrap();
        assert_eq!(descriptor.frame_count(), 3);
        match descriptor {
            PlotDescriptor::AnimatedMultiHeatmap(anim) => {
                assert_eq!(anim.colorbar_label(0), "ρ(x,y,t)");
                assert_eq!(anim.colorbar_label(1), "u");
                assert_eq!(anim.colorbar_label(5), "");
            }
            other => panic!("expected multi-field animation, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_and_missing_types() {
        let bogus = PlotDescriptor::from_value(&json!({ "type": "Bogus" }));
        assert!(matches!(bogus, Err(PlotError::MalformedDescriptor(_))));

        let untyped = PlotDescriptor::from_value(&json!({ "x": [1.0] }));
        assert!(matches!(untyped, Err(PlotError::MalformedDescriptor(_))));

        let not_object = PlotDescriptor::from_value(&json!([1, 2, 3]));
        assert!(matches!(not_object, Err(PlotError::MalformedDescriptor(_))));
    }

    #[test]
    fn rejects_line_with_mismatched_series() {
        let value = json!({
            "type": "line",
            "x": [0.0, 1.0],
            "t_slices": [{ "t": 0, "u": [0.0] }]
        });
        assert!(PlotDescriptor::from_value(&value).is_err());
    }

    #[test]
    fn rejects_grid_with_wrong_shape() {
        let value = json!({
            "type": "heatmap",
            "x": [0.0, 1.0],
            "y": [0.0, 1.0],
            "fields": [{ "label": "u", "z": [[0.0, 1.0]] }]
        });
        assert!(PlotDescriptor::from_value(&value).is_err());

        let ragged = json!({
            "type": "heatmap",
            "x": [0.0, 1.0],
            "y": [0.0],
            "fields": [{ "label": "u", "z": [[0.0]] }]
        });
        assert!(PlotDescriptor::from_value(&ragged).is_err());
    }

    #[test]
    fn rejects_multi_field_count_mismatch() {
        let value = json!({
            "type": "multi_animated_heatmap",
            "x": [0.0],
            "y": [0.0],
            "field_names": ["u", "v"],
            "t_labels": ["t=0"],
            "data": [[[[0.0]]]]
        });
        assert!(PlotDescriptor::from_value(&value).is_err());

        let frames_short = json!({
            "type": "multi_animated_heatmap",
            "x": [0.0],
            "y": [0.0],
            "field_names": ["u"],
            "t_labels": ["t=0", "t=1"],
            "data": [[[[0.0]]]]
        });
        assert!(PlotDescriptor::from_value(&frames_short).is_err());
    }

    #[test]
    fn rejects_wrong_value_types() {
        let value = json!({ "type": "line", "x": "not an array" });
        assert!(PlotDescriptor::from_value(&value).is_err());
        assert!(PlotDescriptor::from_json("{ not json").is_err());
    }
}
