//! A 2D grid value container that carries its own spatial reference.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bbox::BoundingBox;
use crate::error::{GridError, Result};
use crate::grid::GridGeometry;

/// Which cell of the grid the stored `(x0, y0)` coordinate refers to.
///
/// `Lower` means the centre of the lower-left grid cell and is the only
/// implemented convention; `Upper` (top-left) is recognised but rejected
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Lower,
    Upper,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Lower => write!(f, "Lower"),
            Origin::Upper => write!(f, "Upper"),
        }
    }
}

/// A 2D data grid bound to a spatial reference.
///
/// A `Raster` exclusively owns one flat row-major buffer together with the
/// geometry that places it on a map: the coordinate of the lower-left cell
/// centre (`x0`, `y0`) and the regular cell spacing (`dx`, `dy`), in the
/// units of whatever projection the data are defined in. Geometry is fixed
/// at construction; [`subset`](Raster::subset) and the sampling methods
/// return new values and never mutate the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    x0: f64,
    y0: f64,
    dx: f64,
    dy: f64,
    origin: Origin,
}

impl<T: Copy> Raster<T> {
    /// Bind a row-major buffer to a grid geometry.
    ///
    /// Fails with [`GridError::UnsupportedOrigin`] for any origin other
    /// than [`Origin::Lower`], and with [`GridError::ShapeMismatch`] when
    /// the buffer length is not `rows * cols`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        data: Vec<T>,
        rows: usize,
        cols: usize,
        x0: f64,
        y0: f64,
        dx: f64,
        dy: f64,
        origin: Origin,
    ) -> Result<Self> {
        if origin != Origin::Lower {
            return Err(GridError::UnsupportedOrigin(origin.to_string()));
        }
        if data.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }

        Ok(Self {
            data,
            rows,
            cols,
            x0,
            y0,
            dx,
            dy,
            origin,
        })
    }

    /// Number of rows in the data grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the data grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// X coordinate of the lower-left cell centre.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Y coordinate of the lower-left cell centre.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Grid spacing along the x axis.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Grid spacing along the y axis.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// The origin convention of this raster.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The underlying row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The value at a grid position, or `None` outside the extent.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// The grid geometry of this raster (y maps to latitude, x to
    /// longitude).
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.y0, self.x0, self.dy, self.dx, self.rows, self.cols)
    }

    /// The rectangular region covered by this raster.
    pub fn envelope(&self) -> BoundingBox {
        self.geometry().envelope()
    }

    /// Extract a sub-region as a new, independent raster.
    ///
    /// The requested box is clamped to the raster envelope, the covering
    /// row/column window is resolved with a single two-point index query
    /// (top-left and bottom-right corner), and the buffer is sliced
    /// half-open over that window. No resampling is done; the result
    /// matches the requested region only within a tolerance of one cell.
    ///
    /// A box that does not overlap the raster at all fails with
    /// [`GridError::OutOfBounds`].
    pub fn subset(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Raster<T>> {
        let grid_env = self.envelope();
        let requested = BoundingBox::new(min_x, min_y, max_x, max_y);
        let window = requested.intersection(&grid_env).ok_or_else(|| {
            GridError::out_of_bounds(requested.to_string(), grid_env.to_string())
        })?;

        // Two-point query: top-left corner, then bottom-right corner.
        let corners = self
            .geometry()
            .locate_many(&[window.max_y, window.min_y], &[window.min_x, window.max_x]);

        // The window corners lie on or inside the envelope, so every axis
        // resolves; the fallbacks only guard the edges of the extent.
        let min_row = corners[0].row.inside().unwrap_or(0);
        let max_row = corners[1].row.inside().unwrap_or(self.rows - 1);
        let min_col = corners[0].col.inside().unwrap_or(0);
        let max_col = corners[1].col.inside().unwrap_or(self.cols - 1);

        debug!(
            min_row,
            max_row, min_col, max_col, "resolved subset window"
        );

        let new_rows = max_row.saturating_sub(min_row);
        let new_cols = max_col.saturating_sub(min_col);
        let mut data = Vec::with_capacity(new_rows * new_cols);
        for row in min_row..max_row {
            let start = row * self.cols + min_col;
            data.extend_from_slice(&self.data[start..start + new_cols]);
        }

        let new_x0 = self.x0 + min_col as f64 * self.dx;
        let new_y0 = self.y0 + (self.rows - 1 - max_row) as f64 * self.dy;

        Raster::new(
            data, new_rows, new_cols, new_x0, new_y0, self.dx, self.dy, self.origin,
        )
    }

    /// Sample the raster at a single location.
    ///
    /// Nearest-neighbour: the value of the cell whose centre is closest to
    /// `(x, y)`, or `None` when the point is outside the grid envelope.
    pub fn sample_at(&self, x: f64, y: f64) -> Option<T> {
        self.geometry()
            .locate(y, x)
            .resolved()
            .map(|(row, col)| self.data[row * self.cols + col])
    }

    /// Sample the raster at multiple scattered locations.
    ///
    /// Nearest-neighbour sampling with no interpolation. All points are
    /// resolved with one index query; the result preserves input order,
    /// with `None` for every point that falls outside the grid envelope
    /// on either axis.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` have different lengths.
    pub fn sample(&self, xs: &[f64], ys: &[f64]) -> Vec<Option<T>> {
        assert_eq!(
            xs.len(),
            ys.len(),
            "x and y sequences must have equal length"
        );

        let cells = self.geometry().locate_many(ys, xs);
        let missing = cells.iter().filter(|cell| !cell.is_inside()).count();
        if missing > 0 {
            trace!(total = xs.len(), missing, "sample points outside grid");
        }

        cells
            .into_iter()
            .map(|cell| {
                cell.resolved()
                    .map(|(row, col)| self.data[row * self.cols + col])
            })
            .collect()
    }

    /// Sample at multiple locations, filling out-of-region points with
    /// `no_data`.
    ///
    /// Convenience form of [`sample`](Raster::sample) for callers that
    /// encode missing values in-band (historically -999).
    pub fn sample_filled(&self, xs: &[f64], ys: &[f64], no_data: T) -> Vec<T> {
        self.sample(xs, ys)
            .into_iter()
            .map(|value| value.unwrap_or(no_data))
            .collect()
    }
}
