use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::color_scale::{ColorScalePolicy, ColorScaleSpec};
use crate::descriptor::{Matrix, PlotDescriptor};

/// Colorbar title of single-field animations.
pub const SINGLE_FIELD_COLORBAR_TITLE: &str = "u(x,y,t)";

/// The four panel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Every time slice overlaid on one line chart.
    TimeSeriesOverlay,
    /// Field tabs, each field animated over time.
    MultiFieldAnimated,
    /// One field animated over time.
    SingleFieldAnimated,
    /// Field tabs, each a static heatmap.
    TabbedStatic,
}

impl PanelKind {
    pub fn is_animated(self) -> bool {
        matches!(self, PanelKind::MultiFieldAnimated | PanelKind::SingleFieldAnimated)
    }

    pub fn has_field_tabs(self) -> bool {
        matches!(self, PanelKind::MultiFieldAnimated | PanelKind::TabbedStatic)
    }

    /// Height of the drawing region in pixels.
    pub fn height_px(self) -> u32 {
        match self {
            PanelKind::TimeSeriesOverlay => 420,
            PanelKind::TabbedStatic => 480,
            PanelKind::MultiFieldAnimated | PanelKind::SingleFieldAnimated => 500,
        }
    }
}

impl PlotDescriptor {
    pub fn panel_kind(&self) -> PanelKind {
        match self {
            PlotDescriptor::Line(_) => PanelKind::TimeSeriesOverlay,
            PlotDescriptor::AnimatedMultiHeatmap(_) => PanelKind::MultiFieldAnimated,
            PlotDescriptor::AnimatedSingleHeatmap(_) => PanelKind::SingleFieldAnimated,
            PlotDescriptor::StaticMultiHeatmap(_) => PanelKind::TabbedStatic,
        }
    }
}

/// The color scale computed for one selectable field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldScale {
    pub label: String,
    pub scale: ColorScaleSpec,
}

/// A descriptor paired with the layout chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub descriptor: PlotDescriptor,
}

impl Panel {
    pub fn new(descriptor: PlotDescriptor) -> Self {
        Self {
            kind: descriptor.panel_kind(),
            descriptor,
        }
    }

    /// One color scale per selectable field, in field order.
    ///
    /// Line plots have no color scale and return an empty list. Single-field
    /// animations return one zero-centered scale pooled across all frames.
    pub fn field_scales(&self, policy: &ColorScalePolicy) -> Vec<FieldScale> {
        match &self.descriptor {
            PlotDescriptor::Line(_) => Vec::new(),
            PlotDescriptor::StaticMultiHeatmap(tabs) => tabs
                .fields
                .iter()
                .map(|field| FieldScale {
                    label: field.label.clone(),
                    scale: policy.select(&flatten([&field.z]), Some(&field.label)),
                })
                .collect(),
            PlotDescriptor::AnimatedSingleHeatmap(frames) => {
                let values = flatten(frames.frames.iter().map(|f| &f.z));
                vec![FieldScale {
                    label: SINGLE_FIELD_COLORBAR_TITLE.to_string(),
                    scale: ColorScaleSpec::zero_centered(&values),
                }]
            }
            PlotDescriptor::AnimatedMultiHeatmap(anim) => anim
                .field_names
                .iter()
                .zip(&anim.data)
                .enumerate()
                .map(|(i, (name, frames))| FieldScale {
                    label: anim.colorbar_label(i).to_string(),
                    scale: policy.select(&flatten(frames), Some(name)),
                })
                .collect(),
        }
    }
}

/// Choose the panel for a problem's `plots` value.
///
/// Absent, `null` and malformed descriptors all yield `None`: there is
/// simply nothing to draw.
pub fn choose_panel(raw: Option<&Value>) -> Option<Panel> {
    let raw = match raw {
        Some(value) if !value.is_null() => value,
        _ => {
            debug!("no plot descriptor; nothing to render");
            return None;
        }
    };
    match PlotDescriptor::from_value(raw) {
        Ok(descriptor) => Some(Panel::new(descriptor)),
        Err(e) => {
            debug!("skipping plot panel: {}", e);
            None
        }
    }
}

fn flatten<'a>(grids: impl IntoIterator<Item = &'a Matrix>) -> Vec<f64> {
    grids
        .into_iter()
        .flat_map(|z| z.iter().flatten().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_scale::ScaleKind;
    use serde_json::json;

    #[test]
    fn dispatches_each_kind() {
        let line = json!({ "type": "line", "x": [0.0], "t_slices": [] });
        assert_eq!(
            choose_panel(Some(&line)).map(|p| p.kind),
            Some(PanelKind::TimeSeriesOverlay)
        );

        let tabs = json!({ "type": "heatmap", "x": [], "y": [], "fields": [] });
        assert_eq!(
            choose_panel(Some(&tabs)).map(|p| p.kind),
            Some(PanelKind::TabbedStatic)
        );

        let single = json!({ "type": "heatmap", "time_animation": true, "fields": [] });
        assert_eq!(
            choose_panel(Some(&single)).map(|p| p.kind),
            Some(PanelKind::SingleFieldAnimated)
        );

        let multi = json!({
            "type": "multi_animated_heatmap",
            "field_names": [],
            "t_labels": [],
            "data": []
        });
        assert_eq!(
            choose_panel(Some(&multi)).map(|p| p.kind),
            Some(PanelKind::MultiFieldAnimated)
        );
    }

    #[test]
    fn unrecognized_or_absent_renders_nothing() {
        assert!(choose_panel(Some(&json!({ "kind": "Bogus" }))).is_none());
        assert!(choose_panel(Some(&json!({ "type": "Bogus" }))).is_none());
        assert!(choose_panel(Some(&Value::Null)).is_none());
        assert!(choose_panel(None).is_none());
    }

    #[test]
    fn panel_flags() {
        assert!(PanelKind::SingleFieldAnimated.is_animated());
        assert!(!PanelKind::TabbedStatic.is_animated());
        assert!(PanelKind::TabbedStatic.has_field_tabs());
        assert!(!PanelKind::TimeSeriesOverlay.has_field_tabs());
    }

    #[test]
    fn multi_field_scales_use_each_field_label() {
        let value = json!({
            "type": "multi_animated_heatmap",
            "x": [0.0, 1.0],
            "y": [0.0],
            "field_names": ["ρ", "u"],
            "t_labels": ["t=0", "t=1"],
            "data": [
                [[[0.9, 1.0]], [[1.0, 1.1]]],
                [[[-1.0, 0.5]], [[0.25, 0.0]]]
            ]
        });
        let panel = choose_panel(Some(&value)).unwrap();
        let scales = panel.field_scales(&ColorScalePolicy::default());
        assert_eq!(scales.len(), 2);

        assert_eq!(scales[0].label, "ρ");
        assert_eq!(scales[0].scale.kind, ScaleKind::Diverging);
        assert!((scales[0].scale.mid.unwrap() - 1.0).abs() < 1e-9);

        assert_eq!(scales[1].scale.kind, ScaleKind::Diverging);
        assert_eq!(scales[1].scale.min, -1.0);
        assert_eq!(scales[1].scale.max, 1.0);
    }

    #[test]
    fn single_field_animation_pools_frames() {
        let value = json!({
            "type": "heatmap",
            "time_animation": true,
            "x": [0.0],
            "y": [0.0],
            "fields": [
                { "label": "t=0", "z": [[0.5]] },
                { "label": "t=1", "z": [[-2.0]] }
            ]
        });
        let panel = choose_panel(Some(&value)).unwrap();
        let scales = panel.field_scales(&ColorScalePolicy::default());
        assert_eq!(scales.len(), 1);
        assert_eq!(scales[0].label, SINGLE_FIELD_COLORBAR_TITLE);
        assert_eq!(scales[0].scale.min, -2.0);
        assert_eq!(scales[0].scale.max, 2.0);
    }

    #[test]
    fn static_tabs_scale_independently() {
        let value = json!({
            "type": "heatmap",
            "x": [0.0, 1.0],
            "y": [0.0],
            "fields": [
                { "label": "SIGS", "z": [[0.1, 0.3]] },
                { "label": "Error", "z": [[-0.5, 0.5]] }
            ]
        });
        let panel = choose_panel(Some(&value)).unwrap();
        let scales = panel.field_scales(&ColorScalePolicy::default());
        assert_eq!(scales[0].scale.kind, ScaleKind::Sequential);
        assert_eq!(scales[1].scale.kind, ScaleKind::Diverging);
    }

    #[test]
    fn line_plots_have_no_scales() {
        let value = json!({ "type": "line", "x": [0.0], "t_slices": [{ "t": 0, "u": [1.0] }] });
        let panel = choose_panel(Some(&value)).unwrap();
        assert!(panel.field_scales(&ColorScalePolicy::default()).is_empty());
    }
}
