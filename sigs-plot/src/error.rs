use thiserror::Error;

/// Errors raised while interpreting plot data.
///
/// None of these are fatal to the page: a malformed descriptor renders
/// nothing and an empty value set falls back to a default scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("malformed plot descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("no finite values to build a color scale from")]
    EmptyValueSet,

    #[error("unknown theme mode '{0}' (expected 'light' or 'dark')")]
    UnknownTheme(String),
}
