//! Plot descriptors, color scales, playback and scene building for the
//! SIGS results explorer.
//!
//! This crate is pure: it never touches the DOM or the network. It provides:
//! - `descriptor`: the four plot shapes a problem can carry, parsed from the site's JSON
//! - `color_scale`: sequential/diverging color-scale selection per field
//! - `panel`: dispatch from a descriptor to one of four panel layouts
//! - `playback`: the play/pause/scrub state machine for animated panels
//! - `theme`: light/dark chart tokens
//! - `scene`: a declarative, Plotly-shaped scene consumed by a rendering adapter

pub mod color_scale;
pub mod descriptor;
pub mod error;
pub mod panel;
pub mod playback;
pub mod scene;
pub mod theme;

pub use color_scale::{select_color_scale, ColorScalePolicy, ColorScaleSpec, ScaleKind};
pub use descriptor::PlotDescriptor;
pub use error::PlotError;
pub use panel::{choose_panel, Panel, PanelKind};
pub use playback::{Playback, PlaybackState, PlaybackTiming, TickToken};
pub use scene::{build_scene, PanelView, Scene};
pub use theme::{theme_tokens, ThemeMode, ThemeTokens};
