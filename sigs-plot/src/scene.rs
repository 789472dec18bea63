//! Declarative scene description.
//!
//! A [`Scene`] serializes to the `{ data, layout, frames, config }` shape
//! Plotly accepts, but nothing here depends on Plotly: the rendering adapter
//! is free to interpret the scene however it likes.

use serde::Serialize;

use crate::color_scale::{ColorScalePolicy, ColorScaleSpec, Colorscale};
use crate::descriptor::{Matrix, PlotDescriptor};
use crate::panel::{Panel, SINGLE_FIELD_COLORBAR_TITLE};
use crate::playback::PlaybackTiming;
use crate::theme::{theme_tokens, ThemeMode, ThemeTokens};

/// Line colors, cycled by series index.
pub const LINE_PALETTE: [&str; 8] = [
    "#2563eb", "#e11d48", "#16a34a", "#d97706", "#7c3aed", "#0891b2", "#be123c", "#065f46",
];

/// Which field (tab) of a panel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelView {
    pub field: usize,
}

impl PanelView {
    pub fn field(field: usize) -> Self {
        Self { field }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<SceneFrame>,
    pub config: SceneConfig,
}

impl Scene {
    /// Number of animation frames (zero for static scenes).
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(LineTrace),
    Heatmap(HeatmapTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: &'static str,
    pub line: LineStyle,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Matrix,
    pub colorscale: Colorscale,
    pub zmin: f64,
    pub zmax: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmid: Option<f64>,
    pub zsmooth: &'static str,
    pub colorbar: Colorbar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colorbar {
    pub tickfont: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub len: f64,
    pub thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Font {
    fn colored(color: &'static str) -> Self {
        Self {
            color,
            family: None,
            size: None,
        }
    }

    fn sized(color: &'static str, size: u32) -> Self {
        Self {
            color,
            family: None,
            size: Some(size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub gridcolor: &'static str,
    pub linecolor: &'static str,
    pub tickfont: Font,
    pub zerolinecolor: &'static str,
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constrain: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
    pub borderwidth: u32,
    pub font: Font,
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub active: usize,
    pub steps: Vec<SliderStep>,
    pub x: f64,
    pub len: f64,
    pub y: f64,
    pub yanchor: &'static str,
    pub pad: Pad,
    pub currentvalue: CurrentValue,
    pub transition: Transition,
    pub font: Font,
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub method: &'static str,
    pub args: (Vec<String>, AnimationOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pad {
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentValue {
    pub visible: bool,
    pub xanchor: &'static str,
    pub font: Font,
}

/// Options passed along with every frame change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOptions {
    pub frame: FrameOptions,
    pub mode: &'static str,
    pub transition: Transition,
}

impl AnimationOptions {
    pub fn from_timing(timing: &PlaybackTiming) -> Self {
        Self {
            frame: FrameOptions {
                duration: timing.frame_duration_ms,
                redraw: true,
            },
            mode: "immediate",
            transition: Transition::linear(timing.transition_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameOptions {
    pub duration: u32,
    pub redraw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: u32,
    pub easing: &'static str,
}

impl Transition {
    fn linear(duration: u32) -> Self {
        Self {
            duration,
            easing: "linear",
        }
    }
}

/// One named animation frame: replacement `z` data for the heatmap trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub name: String,
    pub data: Vec<FrameData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameData {
    pub z: Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneConfig {
    pub responsive: bool,
}

/// Build the scene for a panel with default timings.
pub fn build_scene(panel: &Panel, view: &PanelView, theme: ThemeMode) -> Scene {
    build_scene_with(panel, view, theme, &PlaybackTiming::default())
}

/// Build the scene for a panel.
///
/// `view.field` selects the tab of multi-field panels and clamps to the last
/// field when out of range. Animated scenes always start on their first frame.
pub fn build_scene_with(
    panel: &Panel,
    view: &PanelView,
    theme: ThemeMode,
    timing: &PlaybackTiming,
) -> Scene {
    let th = theme_tokens(theme);
    let policy = ColorScalePolicy::default();

    match &panel.descriptor {
        PlotDescriptor::Line(line) => {
            let data = line
                .series
                .iter()
                .enumerate()
                .map(|(i, slice)| {
                    Trace::Scatter(LineTrace {
                        x: line.x.clone(),
                        y: slice.u.clone(),
                        name: format!("t = {}", slice.t),
                        mode: "lines",
                        line: LineStyle {
                            color: LINE_PALETTE[i % LINE_PALETTE.len()],
                            width: 2.0,
                        },
                        hovertemplate: format!(
                            "x=%{{x:.2f}}  u=%{{y:.4f}}<extra>t={}</extra>",
                            slice.t
                        ),
                    })
                })
                .collect();

            let mut layout = base_layout(&th, "x", "u", Margin { t: 40, r: 16, l: 54, b: 48 });
            layout.legend = Some(Legend {
                bgcolor: th.legend_bgcolor,
                bordercolor: th.legend_border_color,
                borderwidth: 1,
                font: Font::colored(th.font_color),
                orientation: "h",
                x: 0.0,
                y: 1.12,
                xanchor: "left",
            });
            layout.hovermode = Some("x unified");

            Scene {
                data,
                layout,
                frames: Vec::new(),
                config: SceneConfig { responsive: true },
            }
        }

        PlotDescriptor::StaticMultiHeatmap(tabs) => {
            let field = clamp_field(view.field, tabs.fields.len());
            let z = tabs.fields.get(field).map(|f| f.z.clone()).unwrap_or_default();
            let scale = field_scale(panel, &policy, field);
            let trace = heatmap_trace(&th, tabs.x.clone(), tabs.y.clone(), z, &scale, None);
            Scene {
                data: vec![Trace::Heatmap(trace)],
                layout: heatmap_layout(&th, 48),
                frames: Vec::new(),
                config: SceneConfig { responsive: true },
            }
        }

        PlotDescriptor::AnimatedSingleHeatmap(frames) => {
            let scale = field_scale(panel, &policy, 0);
            let first = frames.frames.first().map(|f| f.z.clone()).unwrap_or_default();
            let trace = heatmap_trace(
                &th,
                frames.x.clone(),
                frames.y.clone(),
                first,
                &scale,
                Some(SINGLE_FIELD_COLORBAR_TITLE.to_string()),
            );
            let labels: Vec<&str> = frames.frames.iter().map(|f| f.label.as_str()).collect();

            let mut layout = heatmap_layout(&th, 76);
            layout.sliders = vec![slider(&th, &labels, timing)];

            Scene {
                data: vec![Trace::Heatmap(trace)],
                layout,
                frames: scene_frames(frames.frames.iter().map(|f| &f.z)),
                config: SceneConfig { responsive: true },
            }
        }

        PlotDescriptor::AnimatedMultiHeatmap(anim) => {
            let field = clamp_field(view.field, anim.field_names.len());
            let field_frames: &[Matrix] = anim.data.get(field).map(Vec::as_slice).unwrap_or(&[]);
            let scale = field_scale(panel, &policy, field);
            let first = field_frames.first().cloned().unwrap_or_default();
            let trace = heatmap_trace(
                &th,
                anim.x.clone(),
                anim.y.clone(),
                first,
                &scale,
                Some(anim.colorbar_label(field).to_string()),
            );
            let labels: Vec<&str> = anim.frame_labels.iter().map(String::as_str).collect();

            let mut layout = heatmap_layout(&th, 76);
            layout.sliders = vec![slider(&th, &labels, timing)];

            Scene {
                data: vec![Trace::Heatmap(trace)],
                layout,
                frames: scene_frames(field_frames),
                config: SceneConfig { responsive: true },
            }
        }
    }
}

fn clamp_field(field: usize, count: usize) -> usize {
    field.min(count.saturating_sub(1))
}

/// The scale [`Panel::field_scales`] reports for `field`.
fn field_scale(panel: &Panel, policy: &ColorScalePolicy, field: usize) -> ColorScaleSpec {
    panel
        .field_scales(policy)
        .into_iter()
        .nth(field)
        .map(|fs| fs.scale)
        .unwrap_or(ColorScaleSpec::DEGENERATE)
}

fn axis(th: &ThemeTokens, title: &str) -> Axis {
    Axis {
        gridcolor: th.grid_color,
        linecolor: th.line_color,
        tickfont: Font::colored(th.tick_color),
        zerolinecolor: th.zeroline_color,
        title: Title {
            text: title.to_string(),
            font: Font::colored(th.font_color),
        },
        constrain: None,
        scaleanchor: None,
    }
}

fn base_layout(th: &ThemeTokens, x_title: &str, y_title: &str, margin: Margin) -> Layout {
    Layout {
        paper_bgcolor: th.paper_bgcolor,
        plot_bgcolor: th.plot_bgcolor,
        font: Font {
            color: th.font_color,
            family: Some(th.font_family),
            size: Some(th.font_size),
        },
        xaxis: axis(th, x_title),
        yaxis: axis(th, y_title),
        legend: None,
        margin,
        hovermode: None,
        sliders: Vec::new(),
    }
}

/// Square-pixel heatmap axes; the bottom margin leaves room for a slider.
fn heatmap_layout(th: &ThemeTokens, bottom_margin: u32) -> Layout {
    let mut layout = base_layout(th, "x", "y", Margin { t: 10, r: 20, l: 54, b: bottom_margin });
    layout.xaxis.constrain = Some("domain");
    layout.yaxis.scaleanchor = Some("x");
    layout
}

fn heatmap_trace(
    th: &ThemeTokens,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Matrix,
    scale: &ColorScaleSpec,
    colorbar_title: Option<String>,
) -> HeatmapTrace {
    HeatmapTrace {
        x,
        y,
        z,
        colorscale: scale.kind.palette(),
        zmin: scale.min,
        zmax: scale.max,
        zmid: scale.mid,
        zsmooth: "best",
        colorbar: Colorbar {
            tickfont: Font::sized(th.font_color, 11),
            title: colorbar_title.map(|text| Title {
                text,
                font: Font::sized(th.font_color, 12),
            }),
            len: 0.85,
            thickness: 14,
        },
    }
}

fn slider(th: &ThemeTokens, labels: &[&str], timing: &PlaybackTiming) -> Slider {
    let steps = labels
        .iter()
        .enumerate()
        .map(|(i, label)| SliderStep {
            label: label.to_string(),
            method: "animate",
            args: (vec![i.to_string()], AnimationOptions::from_timing(timing)),
        })
        .collect();

    Slider {
        active: 0,
        steps,
        x: 0.0,
        len: 1.0,
        y: -0.1,
        yanchor: "top",
        pad: Pad { t: 8, b: 8 },
        currentvalue: CurrentValue {
            visible: true,
            xanchor: "center",
            font: Font::sized(th.font_color, 13),
        },
        transition: Transition::linear(timing.transition_ms),
        font: Font::sized(th.font_color, 10),
        bgcolor: "rgba(150,150,150,0.12)",
        bordercolor: "rgba(150,150,150,0.28)",
    }
}

fn scene_frames<'a>(grids: impl IntoIterator<Item = &'a Matrix>) -> Vec<SceneFrame> {
    grids
        .into_iter()
        .enumerate()
        .map(|(i, z)| SceneFrame {
            name: i.to_string(),
            data: vec![FrameData { z: z.clone() }],
        })
        .collect()
}
