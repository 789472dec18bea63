//! Benchmark catalog, problem records and the embedded data bundle.
//!
//! The explorer lists benchmark PDE problems from a catalog, lets the user
//! narrow it by category, and loads the selected problem's record, whose
//! `plots` value feeds the plot panel.
//!
//! In the web app all records ship inside a gzip-compressed [`ProblemBundle`]
//! assembled at build time; the CLI reads the same JSON files directly.

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod problem;

pub use bundle::ProblemBundle;
pub use catalog::{Catalog, CatalogEntry, CategoryFilter};
pub use error::DataError;
pub use problem::{BaselineRow, Problem};
