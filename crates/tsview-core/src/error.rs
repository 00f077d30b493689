// File: crates/tsview-core/src/error.rs
// Summary: Library error type shared by table loading, session setup and rendering.

use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("column '{name}' has {len} rows but the time column has {expected}")]
    LengthMismatch { name: String, len: usize, expected: usize },

    #[error("table has no rows")]
    EmptyTable,

    #[error("table has no value columns")]
    NoValueColumns,

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("unknown column '{name}' (available: {available})")]
    UnknownColumn { name: String, available: String },

    #[error("row {row}: cannot parse '{value}' in column '{column}'")]
    BadValue { row: usize, column: String, value: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid render target size: width={width}, height={height}")]
    InvalidTarget { width: i32, height: i32 },

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
