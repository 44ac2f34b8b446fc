//! Solar position and time relations.

use std::f64::consts::PI;

/// Day number in the year from the calendar day and month.
///
/// FAO56 approximation of the day of the year; leap years are not
/// adjusted for.
pub fn julian_day(day: u32, month: u32) -> f64 {
    let mut j = ((275.0 / 9.0) * month as f64 - 30.0 + day as f64).floor() - 2.0;
    if month < 3 {
        j += 2.0;
    }

    j
}

/// Convert latitude in decimal degrees to radians.
///
/// Equation 22 from FAO56.
pub fn latitude_radians(lat: f64) -> f64 {
    (PI / 180.0) * lat
}

/// Inverse relative earth-sun distance.
///
/// Equation 23 from FAO56.
pub fn inv_rel_earth_sun_dist(j: f64) -> f64 {
    1.0 + 0.033 * (((2.0 * PI) / 365.0) * j).cos()
}

/// Solar declination in radians.
///
/// Equation 24 from FAO56.
pub fn solar_declination(j: f64) -> f64 {
    0.409 * (((2.0 * PI) / 365.0) * j - 1.39).sin()
}

/// Seasonal correction for solar time, in hours.
///
/// Equations 32 and 33 from FAO56.
pub fn solar_time_correction(j: f64) -> f64 {
    let b = (2.0 * PI * (j - 81.0)) / 364.0;

    0.1645 * (2.0 * b).sin() - 0.1255 * b.cos() - 0.025 * b.sin()
}

/// Solar time angle at the midpoint of the period, in radians.
///
/// Equation 31 from FAO56. `tm` is the standard clock time at the
/// midpoint of the period, `lz` the longitude of the centre of the local
/// time zone and `lm` the longitude of the site, both in degrees west of
/// Greenwich. `sc` is the seasonal solar time correction.
pub fn midpoint_solar_time_angle(tm: f64, lz: f64, lm: f64, sc: f64) -> f64 {
    (PI / 12.0) * ((tm + 0.06667 * (lz - lm) + sc) - 12.0)
}

/// Solar time angle at the start of the period.
///
/// Equation 29 from FAO56.
pub fn start_solar_time_angle(omega: f64, period: f64) -> f64 {
    omega - (PI * period) / 24.0
}

/// Solar time angle at the end of the period.
///
/// Equation 30 from FAO56.
pub fn end_solar_time_angle(omega: f64, period: f64) -> f64 {
    omega + (PI * period) / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day() {
        assert_eq!(julian_day(1, 10), 274.0);
        assert_eq!(julian_day(15, 1), 15.0);
        assert_eq!(julian_day(1, 3), 60.0);
        assert_eq!(julian_day(31, 12), 365.0);
    }

    #[test]
    fn test_fao56_example19_solar_chain() {
        let j = julian_day(1, 10);
        assert!((latitude_radians(16.22) - 0.283).abs() < 0.001);
        assert!((inv_rel_earth_sun_dist(j) - 1.0001).abs() < 0.0005);
        assert!((solar_declination(j) - -0.0753).abs() < 0.001);
        assert!((solar_time_correction(j) - 0.1889).abs() < 0.001);

        let sc = solar_time_correction(j);
        let omega = midpoint_solar_time_angle(14.5, 15.0, 16.25, sc);
        assert!((omega - 0.682).abs() < 0.001);
        assert!((start_solar_time_angle(omega, 1.0) - 0.5512).abs() < 0.001);
        assert!((end_solar_time_angle(omega, 1.0) - 0.813).abs() < 0.001);
    }
}
