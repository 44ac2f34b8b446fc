//! Centred embedding and cropping of 2D buffers.
//!
//! Border-padding helpers for moving a grid between array shapes: `embed`
//! centres a grid inside a larger zero-filled one, `crop` cuts the centred
//! sub-grid back out. The centring offset is `(target - source) / 2`,
//! rounded down.

use num_traits::Zero;

use crate::error::{GridError, Result};

fn check_shape<T>(data: &[T], rows: usize, cols: usize) -> Result<()> {
    if data.len() != rows * cols {
        return Err(GridError::ShapeMismatch {
            len: data.len(),
            rows,
            cols,
        });
    }
    Ok(())
}

/// Embed a 2D buffer in the centre of a larger zero-filled one.
///
/// Fails with [`GridError::IncompatibleShape`] when the target shape is
/// smaller than the source along either axis.
pub fn embed<T: Copy + Zero>(
    data: &[T],
    rows: usize,
    cols: usize,
    out_rows: usize,
    out_cols: usize,
) -> Result<Vec<T>> {
    check_shape(data, rows, cols)?;
    if out_rows < rows || out_cols < cols {
        return Err(GridError::IncompatibleShape {
            rows,
            cols,
            target_rows: out_rows,
            target_cols: out_cols,
        });
    }

    let start_row = (out_rows - rows) / 2;
    let start_col = (out_cols - cols) / 2;

    let mut result = vec![T::zero(); out_rows * out_cols];
    for row in 0..rows {
        let src = row * cols;
        let dst = (start_row + row) * out_cols + start_col;
        result[dst..dst + cols].copy_from_slice(&data[src..src + cols]);
    }

    Ok(result)
}

/// Crop the centred sub-grid out of a larger 2D buffer.
///
/// Fails with [`GridError::IncompatibleShape`] when the target shape is
/// larger than the source along either axis.
pub fn crop<T: Copy>(
    data: &[T],
    rows: usize,
    cols: usize,
    out_rows: usize,
    out_cols: usize,
) -> Result<Vec<T>> {
    check_shape(data, rows, cols)?;
    if out_rows > rows || out_cols > cols {
        return Err(GridError::IncompatibleShape {
            rows,
            cols,
            target_rows: out_rows,
            target_cols: out_cols,
        });
    }

    let start_row = (rows - out_rows) / 2;
    let start_col = (cols - out_cols) / 2;

    let mut result = Vec::with_capacity(out_rows * out_cols);
    for row in start_row..start_row + out_rows {
        let src = row * cols + start_col;
        result.extend_from_slice(&data[src..src + out_cols]);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_centres_source() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let out = embed(&data, 2, 2, 4, 4).unwrap();

        assert_eq!(out.len(), 16);
        assert_eq!(out[5], 1.0);
        assert_eq!(out[6], 2.0);
        assert_eq!(out[9], 3.0);
        assert_eq!(out[10], 4.0);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[15], 0.0);
    }

    #[test]
    fn test_embed_odd_margin_rounds_down() {
        let data = vec![7.0];
        let out = embed(&data, 1, 1, 4, 4).unwrap();
        // Offset (4 - 1) / 2 = 1 along both axes.
        assert_eq!(out[5], 7.0);
    }

    #[test]
    fn test_crop_centres_window() {
        let data: Vec<f64> = (0..16).map(|v| v as f64).collect();
        let out = crop(&data, 4, 4, 2, 2).unwrap();
        assert_eq!(out, vec![5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_embed_then_crop_round_trips() {
        let data: Vec<f64> = (1..=6).map(|v| v as f64).collect();
        let padded = embed(&data, 2, 3, 6, 7).unwrap();
        let restored = crop(&padded, 6, 7, 2, 3).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn test_incompatible_shapes_fail() {
        let data = vec![0.0; 16];
        assert!(matches!(
            embed(&data, 4, 4, 2, 8).unwrap_err(),
            GridError::IncompatibleShape { .. }
        ));
        assert!(matches!(
            crop(&data, 4, 4, 8, 2).unwrap_err(),
            GridError::IncompatibleShape { .. }
        ));
        assert!(matches!(
            crop(&data, 4, 3, 2, 2).unwrap_err(),
            GridError::ShapeMismatch { .. }
        ));
    }
}
