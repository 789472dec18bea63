use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(PlotError::UnknownTheme(other.to_string())),
        }
    }
}

/// Chart chrome colors for one theme. Data colors are never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font_color: &'static str,
    pub font_family: &'static str,
    pub font_size: u32,
    pub grid_color: &'static str,
    pub line_color: &'static str,
    pub tick_color: &'static str,
    pub zeroline_color: &'static str,
    pub legend_bgcolor: &'static str,
    pub legend_border_color: &'static str,
}

const FONT_FAMILY: &str = "Inter,system-ui,sans-serif";

pub const LIGHT: ThemeTokens = ThemeTokens {
    paper_bgcolor: "transparent",
    plot_bgcolor: "#f8fafc",
    font_color: "#3d4f6b",
    font_family: FONT_FAMILY,
    font_size: 13,
    grid_color: "#e2e8f0",
    line_color: "#dde3ed",
    tick_color: "#6b7d96",
    zeroline_color: "#dde3ed",
    legend_bgcolor: "rgba(255,255,255,0.9)",
    legend_border_color: "#dde3ed",
};

pub const DARK: ThemeTokens = ThemeTokens {
    paper_bgcolor: "transparent",
    plot_bgcolor: "rgba(8,11,20,0.5)",
    font_color: "#b8c5d9",
    font_family: FONT_FAMILY,
    font_size: 13,
    grid_color: "#1e2d44",
    line_color: "#1e2d44",
    tick_color: "#7d8fa8",
    zeroline_color: "#1e2d44",
    legend_bgcolor: "rgba(20,25,41,0.85)",
    legend_border_color: "#1e2d44",
};

pub fn theme_tokens(mode: ThemeMode) -> ThemeTokens {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_a_complete_token_set() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let tokens = theme_tokens(mode);
            let colors = [
                tokens.paper_bgcolor,
                tokens.plot_bgcolor,
                tokens.font_color,
                tokens.font_family,
                tokens.grid_color,
                tokens.line_color,
                tokens.tick_color,
                tokens.zeroline_color,
                tokens.legend_bgcolor,
                tokens.legend_border_color,
            ];
            assert!(colors.iter().all(|c| !c.is_empty()), "{mode} has empty tokens");
            assert!(tokens.font_size > 0);
        }
        assert_ne!(theme_tokens(ThemeMode::Light), theme_tokens(ThemeMode::Dark));
    }

    #[test]
    fn parses_and_toggles() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
