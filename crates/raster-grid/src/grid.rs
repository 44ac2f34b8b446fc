//! Regular lat/lon grid geometry and coordinate indexing.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::index::{AxisIndex, CellIndex};

/// Geometry of a regular, axis-aligned lat/lon grid.
///
/// The location of each element in the grid is given by the latitude and
/// longitude of the *centre* of the cell at the lower-left corner of the
/// grid (`lat0`, `lon0`) and the regular cell spacing `dlat`/`dlon`.
/// Row numbering increases southward from the top of the grid; column
/// numbering increases eastward. Irregular spacing and rotated grids are
/// not supported.
///
/// Invariants (caller contract, not validated): `dlat > 0`, `dlon > 0`,
/// `nrows > 0`, `ncols > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Latitude of the centre of the lower-left cell
    pub lat0: f64,
    /// Longitude of the centre of the lower-left cell
    pub lon0: f64,
    /// Cell spacing in latitude (positive)
    pub dlat: f64,
    /// Cell spacing in longitude (positive)
    pub dlon: f64,
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl GridGeometry {
    /// Create a new grid geometry.
    pub fn new(lat0: f64, lon0: f64, dlat: f64, dlon: f64, nrows: usize, ncols: usize) -> Self {
        Self {
            lat0,
            lon0,
            dlat,
            dlon,
            nrows,
            ncols,
        }
    }

    /// The rectangular region covered by the grid.
    ///
    /// The envelope extends half a cell beyond the outermost cell centres:
    /// `min_lat = lat0 - dlat/2`, `max_lat = min_lat + nrows*dlat`, and
    /// symmetrically for longitude.
    pub fn envelope(&self) -> BoundingBox {
        let min_lat = self.lat0 - 0.5 * self.dlat;
        let min_lon = self.lon0 - 0.5 * self.dlon;

        BoundingBox {
            min_x: min_lon,
            min_y: min_lat,
            max_x: min_lon + self.ncols as f64 * self.dlon,
            max_y: min_lat + self.nrows as f64 * self.dlat,
        }
    }

    /// Coordinates of the centre of a grid cell, or `None` for indices
    /// outside the grid extent.
    pub fn cell_center(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }

        let lat = self.lat0 + (self.nrows - 1 - row) as f64 * self.dlat;
        let lon = self.lon0 + col as f64 * self.dlon;
        Some((lat, lon))
    }

    /// Map a latitude to a row index.
    ///
    /// The topmost row band maps to row 0 and the bottom band to
    /// `nrows - 1`; both edge bands keep the full half-cell-widened
    /// catchment of the historical indexing rule, so a coordinate exactly
    /// on the envelope edge still resolves to the edge row. Latitudes
    /// outside the envelope report [`AxisIndex::Outside`].
    pub fn locate_row(&self, lat: f64) -> AxisIndex {
        let min_lat = self.lat0 - 0.5 * self.dlat;
        let max_lat = min_lat + self.nrows as f64 * self.dlat;

        if lat < min_lat || max_lat < lat {
            AxisIndex::Outside
        } else if (max_lat - self.dlat) <= lat && lat <= max_lat {
            // first (topmost) row
            AxisIndex::Inside(0)
        } else if min_lat <= lat && lat <= min_lat + self.dlat {
            // last (bottom) row
            AxisIndex::Inside(self.nrows - 1)
        } else {
            let diff = lat - min_lat;
            AxisIndex::Inside((self.nrows as f64 - diff / self.dlat).floor() as usize)
        }
    }

    /// Map a longitude to a column index.
    ///
    /// The leftmost column band maps to column 0 and the rightmost to
    /// `ncols - 1`, with the same widened edge-band catchment as
    /// [`locate_row`](Self::locate_row).
    pub fn locate_col(&self, lon: f64) -> AxisIndex {
        let min_lon = self.lon0 - 0.5 * self.dlon;
        let max_lon = min_lon + self.ncols as f64 * self.dlon;

        if lon < min_lon || max_lon < lon {
            AxisIndex::Outside
        } else if min_lon <= lon && lon <= min_lon + self.dlon {
            // first (leftmost) column
            AxisIndex::Inside(0)
        } else if (max_lon - self.dlon) <= lon && lon <= max_lon {
            // last (rightmost) column
            AxisIndex::Inside(self.ncols - 1)
        } else {
            let diff = lon - min_lon;
            AxisIndex::Inside((diff / self.dlon).floor() as usize)
        }
    }

    /// Map a single coordinate pair to a cell index.
    ///
    /// The row and column are resolved independently, so a point can be
    /// out-of-region on one axis only.
    pub fn locate(&self, lat: f64, lon: f64) -> CellIndex {
        CellIndex {
            row: self.locate_row(lat),
            col: self.locate_col(lon),
        }
    }

    /// Map a sequence of coordinate pairs to cell indices, preserving
    /// input order.
    ///
    /// # Panics
    ///
    /// Panics if `lats` and `lons` have different lengths.
    pub fn locate_many(&self, lats: &[f64], lons: &[f64]) -> Vec<CellIndex> {
        assert_eq!(
            lats.len(),
            lons.len(),
            "latitude and longitude sequences must have equal length"
        );

        lats.iter()
            .zip(lons.iter())
            .map(|(&lat, &lon)| self.locate(lat, lon))
            .collect()
    }
}
