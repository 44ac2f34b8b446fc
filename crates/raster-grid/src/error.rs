//! Error types for raster-grid operations.

use thiserror::Error;

/// Errors that can occur when constructing or windowing rasters.
#[derive(Error, Debug)]
pub enum GridError {
    /// The requested raster origin convention is not implemented.
    #[error("'{0}' is not a supported raster origin (only 'Lower' is implemented)")]
    UnsupportedOrigin(String),

    /// The buffer length does not match the declared grid dimensions.
    #[error("buffer of length {len} does not match a {rows}x{cols} grid")]
    ShapeMismatch {
        len: usize,
        rows: usize,
        cols: usize,
    },

    /// The requested region does not intersect the grid bounds.
    #[error("requested region {requested} is outside grid bounds {grid}")]
    OutOfBounds { requested: String, grid: String },

    /// The target shape of an embed/crop is not compatible with the source.
    #[error("target shape {target_rows}x{target_cols} is not compatible with source {rows}x{cols}")]
    IncompatibleShape {
        rows: usize,
        cols: usize,
        target_rows: usize,
        target_cols: usize,
    },
}

impl GridError {
    /// Create an OutOfBounds error.
    pub fn out_of_bounds(requested: impl Into<String>, grid: impl Into<String>) -> Self {
        Self::OutOfBounds {
            requested: requested.into(),
            grid: grid.into(),
        }
    }
}

/// Result type for raster-grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
