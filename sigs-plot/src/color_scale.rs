//! Color-scale selection for heatmap fields.
//!
//! A field is drawn with a diverging scale when its label names a quantity
//! that is read relative to a center (density, pressure) or when its values
//! visibly straddle zero. Everything else gets a sequential scale spanning
//! the data.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Values within this distance of zero count as numerical noise when deciding
/// whether a field straddles zero.
pub const ZERO_STRADDLE_THRESHOLD: f64 = 0.05;

/// Label fragments that force a diverging scale (matched case-insensitively).
pub const DIVERGING_KEYWORDS: [&str; 3] = ["ρ", "density", "pressure"];

/// Red/blue diverging palette: blue negative, white at the midpoint, red positive.
pub const RD_BU: [(f64, &str); 11] = [
    (0.0, "#2166ac"),
    (0.1, "#4393c3"),
    (0.2, "#74add1"),
    (0.3, "#abd9e9"),
    (0.4, "#d1e5f0"),
    (0.5, "#f7f7f7"),
    (0.6, "#fddbc7"),
    (0.7, "#f4a582"),
    (0.8, "#d6604d"),
    (0.9, "#b2182b"),
    (1.0, "#67001f"),
];

/// Named sequential palette understood by the renderer.
pub const SEQUENTIAL_PALETTE: &str = "Viridis";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Sequential,
    Diverging,
}

impl ScaleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleKind::Sequential => "sequential",
            ScaleKind::Diverging => "diverging",
        }
    }

    /// Palette used to draw a scale of this kind.
    pub fn palette(self) -> Colorscale {
        match self {
            ScaleKind::Sequential => Colorscale::Named(SEQUENTIAL_PALETTE),
            ScaleKind::Diverging => Colorscale::Stops(RD_BU.to_vec()),
        }
    }
}

/// A palette as the renderer expects it: either a built-in name or explicit stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colorscale {
    Named(&'static str),
    Stops(Vec<(f64, &'static str)>),
}

/// Bounds and kind of the color scale for one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScaleSpec {
    pub kind: ScaleKind,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
}

impl ColorScaleSpec {
    /// Safe fallback for fields with nothing to scale.
    pub const DEGENERATE: ColorScaleSpec = ColorScaleSpec {
        kind: ScaleKind::Sequential,
        min: 0.0,
        max: 1.0,
        mid: None,
    };

    /// Select a scale with the default policy, reporting empty input as an error.
    pub fn try_from_values(values: &[f64], label: Option<&str>) -> Result<Self, PlotError> {
        ColorScalePolicy::default().try_select(values, label)
    }

    /// Diverging scale pinned at zero, spanning the largest magnitude present.
    ///
    /// Used for single-field animations, where every frame shares one scale.
    pub fn zero_centered(values: &[f64]) -> Self {
        match finite_range(values) {
            Some((min, max)) => {
                let abs_max = min.abs().max(max.abs());
                if abs_max == 0.0 {
                    Self::DEGENERATE
                } else {
                    symmetric_about_zero(abs_max)
                }
            }
            None => Self::DEGENERATE,
        }
    }
}

/// Tunable inputs of the selection rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScalePolicy {
    pub zero_threshold: f64,
    pub diverging_keywords: Vec<String>,
}

impl Default for ColorScalePolicy {
    fn default() -> Self {
        Self {
            zero_threshold: ZERO_STRADDLE_THRESHOLD,
            diverging_keywords: DIVERGING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ColorScalePolicy {
    /// Whether a field label names a center-relative quantity.
    pub fn forces_diverging(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        self.diverging_keywords
            .iter()
            .any(|keyword| lower.contains(&keyword.to_lowercase()))
    }

    /// Whether a value range extends past the noise threshold on both sides of zero.
    pub fn straddles_zero(&self, min: f64, max: f64) -> bool {
        min < -self.zero_threshold && max > self.zero_threshold
    }

    pub fn try_select(&self, values: &[f64], label: Option<&str>) -> Result<ColorScaleSpec, PlotError> {
        let (min, max) = finite_range(values).ok_or(PlotError::EmptyValueSet)?;
        let straddles = self.straddles_zero(min, max);
        let label_forced = label.is_some_and(|l| self.forces_diverging(l));

        if !label_forced && !straddles {
            return Ok(ColorScaleSpec {
                kind: ScaleKind::Sequential,
                min,
                max,
                mid: None,
            });
        }

        if straddles {
            return Ok(symmetric_about_zero(min.abs().max(max.abs())));
        }

        // Forced diverging without crossing zero: center on the data itself.
        let mid = (min + max) / 2.0;
        let half_range = (max - mid).max(mid - min);
        Ok(ColorScaleSpec {
            kind: ScaleKind::Diverging,
            min: mid - half_range,
            max: mid + half_range,
            mid: Some(mid),
        })
    }

    /// Like [`try_select`](Self::try_select) but never fails.
    pub fn select(&self, values: &[f64], label: Option<&str>) -> ColorScaleSpec {
        self.try_select(values, label).unwrap_or_else(|e| {
            debug!("{} (label {:?}); using default scale", e, label);
            ColorScaleSpec::DEGENERATE
        })
    }
}

/// Pick the color scale for a field with the default policy.
///
/// Empty input (or input with no finite values) yields
/// [`ColorScaleSpec::DEGENERATE`].
pub fn select_color_scale(values: &[f64], label: Option<&str>) -> ColorScaleSpec {
    ColorScalePolicy::default().select(values, label)
}

fn symmetric_about_zero(abs_max: f64) -> ColorScaleSpec {
    ColorScaleSpec {
        kind: ScaleKind::Diverging,
        min: -abs_max,
        max: abs_max,
        mid: Some(0.0),
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
