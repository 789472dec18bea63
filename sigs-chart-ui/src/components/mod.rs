//! Reusable Dioxus RSX components for the results explorer.

mod category_tabs;
mod chart_container;
mod error_display;
mod field_tabs;
mod loading_spinner;
mod performance_tables;
mod play_controls;
mod plot_panel;
mod problem_picker;
mod theme_toggle;

pub use category_tabs::CategoryTabs;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use field_tabs::FieldTabs;
pub use loading_spinner::LoadingSpinner;
pub use performance_tables::{BaselineTable, MetricTable};
pub use play_controls::PlayControls;
pub use plot_panel::PlotPanel;
pub use problem_picker::ProblemPicker;
pub use theme_toggle::ThemeToggle;
