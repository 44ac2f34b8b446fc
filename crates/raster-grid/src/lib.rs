//! Regular-grid geometry for hydro-meteorological rasters.
//!
//! This crate is the shared geometric core behind a family of
//! remote-sensing and station-data readers: it maps geographic
//! coordinates onto regularly spaced 2D grids and windows or samples the
//! gridded values. Decoding file formats and rendering stay with the
//! callers; this crate only ever sees in-memory buffers plus their grid
//! geometry.
//!
//! # Architecture
//!
//! ```text
//! reader (GRIB / PGM / HDF / ...)
//!      │  decoded buffer + geometry
//!      ▼
//! Raster::new(data, rows, cols, x0, y0, dx, dy, origin)
//!      │
//!      ├─► subset(bbox)  ──► GridGeometry::locate_many ──► new Raster
//!      │
//!      └─► sample(x, y)  ──► GridGeometry::locate_many ──► values
//! ```
//!
//! Out-of-region lookups are values, not errors: each axis reports a
//! tagged [`AxisIndex`], and the integer-encoded [`find_indices`] surface
//! uses the reserved sentinel [`OUT_OF_REGION`].
//!
//! # Example
//!
//! ```
//! use raster_grid::{Origin, Raster};
//!
//! // 3x3 one-degree grid, lower-left cell centred at (20E, 10S).
//! let data: Vec<f64> = (0..9).map(|v| v as f64).collect();
//! let raster = Raster::new(data, 3, 3, 20.0, -10.0, 1.0, 1.0, Origin::Lower)?;
//!
//! assert_eq!(raster.sample_at(21.0, -9.0), Some(4.0));
//! assert_eq!(raster.sample_at(90.0, -9.0), None);
//! # Ok::<(), raster_grid::GridError>(())
//! ```

pub mod bbox;
pub mod error;
pub mod grid;
pub mod index;
pub mod mask;
pub mod poly;
pub mod raster;
pub mod window;

// Re-export commonly used types at crate root
pub use bbox::BoundingBox;
pub use error::{GridError, Result};
pub use grid::GridGeometry;
pub use index::{find_index, find_indices, AxisIndex, CellIndex, OUT_OF_REGION};
pub use mask::{mask_where, masked_where_flag, scale_offset};
pub use poly::point_in_polygon;
pub use raster::{Origin, Raster};
pub use window::{crop, embed};
