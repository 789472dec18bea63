use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to (de)compress data bundle: {0}")]
    Compression(#[from] std::io::Error),

    #[error("unknown category filter '{0}' (expected all, known or unknown)")]
    UnknownFilter(String),

    #[error("problem '{0}' is listed in the catalog but has no record")]
    MissingProblem(String),
}
