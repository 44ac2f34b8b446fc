//! Masking and scaling rules applied to decoded grid buffers.
//!
//! Satellite and radar products typically arrive as raw integer counts
//! plus a quality-flag plane; after decoding, pixels are masked against
//! the flag table and the counts are converted to physical units with a
//! linear scale/offset rule. NaN is the in-memory no-data value.

/// Mask values where the predicate holds, replacing them with NaN.
pub fn mask_where(values: &[f64], predicate: impl Fn(f64) -> bool) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if predicate(v) { f64::NAN } else { v })
        .collect()
}

/// Mask values whose quality flag appears in the flagged set.
///
/// # Panics
///
/// Panics if `values` and `flags` have different lengths.
pub fn masked_where_flag(values: &[f64], flags: &[u16], flagged: &[u16]) -> Vec<f64> {
    assert_eq!(
        values.len(),
        flags.len(),
        "value and flag planes must have equal length"
    );

    values
        .iter()
        .zip(flags.iter())
        .map(|(&v, flag)| {
            if flagged.contains(flag) {
                f64::NAN
            } else {
                v
            }
        })
        .collect()
}

/// Convert raw counts to physical units with a linear scale/offset rule.
pub fn scale_offset(values: &[f64], scale: f64, offset: f64) -> Vec<f64> {
    values.iter().map(|&v| v * scale + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_where_negative_nodata() {
        let out = mask_where(&[1.0, -9999.0, 3.0], |v| v < 0.0);
        assert_eq!(out[0], 1.0);
        assert!(out[1].is_nan());
        assert_eq!(out[2], 3.0);
    }

    #[test]
    fn test_masked_where_flag() {
        let values = [290.1, 288.4, 301.7, 295.0];
        let flags = [0u16, 2, 44, 2];
        let out = masked_where_flag(&values, &flags, &[0, 44]);

        assert!(out[0].is_nan());
        assert_eq!(out[1], 288.4);
        assert!(out[2].is_nan());
        assert_eq!(out[3], 295.0);
    }

    #[test]
    fn test_scale_offset_exact_for_counts() {
        let out = scale_offset(&[0.0, 100.0, 250.0], 0.5, -40.0);
        assert_eq!(out, vec![-40.0, 10.0, 85.0]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_flag_plane_length_mismatch_panics() {
        masked_where_flag(&[1.0], &[0, 1], &[0]);
    }
}
