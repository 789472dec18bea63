//! Command implementations for the SIGS CLI.
//!
//! Provides subcommands for listing the benchmark catalog, printing the color
//! scales and the rendered scene of a problem's plot, and driving the playback
//! machine of an animated plot from the terminal.

use clap::{Subcommand, ValueEnum};
use sigs_data::CategoryFilter;
use sigs_plot::ThemeMode;

pub mod inspect;
pub mod play;
pub mod source;

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the problems of a catalog (problems.json)
    Catalog {
        /// Path or http(s) URL of the catalog
        #[arg(short, long)]
        source: String,

        /// Category to list: all, known or unknown
        #[arg(short, long, default_value_t = CategoryFilter::All)]
        filter: CategoryFilter,
    },

    /// Print the color scale chosen for every field of a problem's plot
    Scales {
        /// Path or http(s) URL of the problem record
        #[arg(short, long)]
        problem: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the scene JSON the plot panel would hand to the renderer
    Scene {
        /// Path or http(s) URL of the problem record
        #[arg(short, long)]
        problem: String,

        /// Chart theme: light or dark
        #[arg(short, long, default_value_t = ThemeMode::Light)]
        theme: ThemeMode,

        /// Field (tab) to show; out-of-range values select the last field
        #[arg(long, default_value_t = 0)]
        field: usize,

        #[arg(long)]
        pretty: bool,
    },

    /// Play an animated plot in the terminal until Ctrl-C or the tick limit
    Play {
        /// Path or http(s) URL of the problem record
        #[arg(short, long)]
        problem: String,

        #[arg(long, default_value_t = 0)]
        field: usize,

        /// Stop after this many ticks (runs until Ctrl-C when omitted)
        #[arg(long)]
        ticks: Option<u64>,

        /// Milliseconds between frames
        #[arg(long, default_value_t = 120)]
        period_ms: u64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Catalog { source, filter } => inspect::run_catalog(&source, filter).await,
        Command::Scales { problem, format } => inspect::run_scales(&problem, format).await,
        Command::Scene {
            problem,
            theme,
            field,
            pretty,
        } => inspect::run_scene(&problem, theme, field, pretty).await,
        Command::Play {
            problem,
            field,
            ticks,
            period_ms,
        } => play::run_play(&problem, field, ticks, period_ms).await,
    }
}
