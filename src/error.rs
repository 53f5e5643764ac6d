use std::path::PathBuf;

/// Errors raised while loading planner inputs or writing reports.
///
/// The allocation engine itself never fails; only file-facing code returns these.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
