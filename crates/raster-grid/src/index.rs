//! Index results for coordinate-to-cell lookups.
//!
//! A lookup resolves each axis independently, so the outcome is reported
//! per axis: a valid index into the grid extent, or out-of-region. For
//! callers that encode indices as plain integers, [`find_index`] and
//! [`find_indices`] provide the historical sentinel form, where
//! out-of-region is the reserved value [`OUT_OF_REGION`].

use crate::grid::GridGeometry;

/// Reserved sentinel for "coordinate outside the grid envelope" in the
/// integer-encoded index form.
pub const OUT_OF_REGION: i64 = -999;

/// Index of a grid cell along one axis, or out-of-region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisIndex {
    /// A valid index in `[0, extent)`.
    Inside(usize),
    /// The coordinate lies outside the grid envelope on this axis.
    Outside,
}

impl AxisIndex {
    /// The index if the coordinate was inside the grid.
    pub fn inside(self) -> Option<usize> {
        match self {
            AxisIndex::Inside(i) => Some(i),
            AxisIndex::Outside => None,
        }
    }

    /// Encode as an integer, using [`OUT_OF_REGION`] for the outside case.
    pub fn to_sentinel(self) -> i64 {
        match self {
            AxisIndex::Inside(i) => i as i64,
            AxisIndex::Outside => OUT_OF_REGION,
        }
    }
}

/// Row/column outcome of a single coordinate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIndex {
    pub row: AxisIndex,
    pub col: AxisIndex,
}

impl CellIndex {
    /// True when the point was inside the grid on both axes.
    pub fn is_inside(&self) -> bool {
        matches!(
            (self.row, self.col),
            (AxisIndex::Inside(_), AxisIndex::Inside(_))
        )
    }

    /// The (row, col) pair, if the point was inside the grid on both axes.
    pub fn resolved(&self) -> Option<(usize, usize)> {
        match (self.row, self.col) {
            (AxisIndex::Inside(r), AxisIndex::Inside(c)) => Some((r, c)),
            _ => None,
        }
    }
}

/// Find the row and column index for a single coordinate pair.
///
/// `(lat0, lon0)` is the centre of the lower-left cell, `dlat`/`dlon` the
/// positive cell spacing and `nrows`/`ncols` the grid extent. Out-of-region
/// coordinates yield [`OUT_OF_REGION`] for the corresponding index; the row
/// and column are resolved independently.
#[allow(clippy::too_many_arguments)]
pub fn find_index(
    lat: f64,
    lon: f64,
    lat0: f64,
    lon0: f64,
    dlat: f64,
    dlon: f64,
    nrows: usize,
    ncols: usize,
) -> (i64, i64) {
    let cell = GridGeometry::new(lat0, lon0, dlat, dlon, nrows, ncols).locate(lat, lon);
    (cell.row.to_sentinel(), cell.col.to_sentinel())
}

/// Find row and column indices for a sequence of coordinate pairs.
///
/// Sequence counterpart of [`find_index`]: returns one row index and one
/// column index per input pair, in input order.
///
/// # Panics
///
/// Panics if `lats` and `lons` have different lengths.
#[allow(clippy::too_many_arguments)]
pub fn find_indices(
    lats: &[f64],
    lons: &[f64],
    lat0: f64,
    lon0: f64,
    dlat: f64,
    dlon: f64,
    nrows: usize,
    ncols: usize,
) -> (Vec<i64>, Vec<i64>) {
    let geometry = GridGeometry::new(lat0, lon0, dlat, dlon, nrows, ncols);

    geometry
        .locate_many(lats, lons)
        .into_iter()
        .map(|cell| (cell.row.to_sentinel(), cell.col.to_sentinel()))
        .unzip()
}
