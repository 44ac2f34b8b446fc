//! Radiation balance terms.

use std::f64::consts::PI;

/// Extraterrestrial radiation for the period, in MJ m^-2.
///
/// Equations 25 and 28 from FAO56. `dr` is the inverse relative earth-sun
/// distance, `delta` the solar declination, `phi` the latitude in radians
/// and `omega`/`omega1`/`omega2` the midpoint/start/end solar time angles.
/// When the midpoint angle falls outside the daylight interval bounded by
/// the sunset hour angle, the sun is below the horizon and the incoming
/// radiation is zero.
pub fn extraterrestrial_radiation(
    dr: f64,
    delta: f64,
    phi: f64,
    omega: f64,
    omega1: f64,
    omega2: f64,
) -> f64 {
    let omega_s = (-phi.tan() * delta.tan()).acos();
    if omega < -omega_s || omega > omega_s {
        return 0.0;
    }

    let a = (omega2 - omega1) * phi.sin() * delta.sin();
    let b = phi.cos() * delta.cos() * (omega2.sin() - omega1.sin());

    ((12.0 * 60.0) / PI) * 0.082 * dr * (a + b)
}

/// Clear sky solar radiation, in MJ m^-2.
///
/// Equation 37 from FAO56; `z` is the elevation in metres.
pub fn clear_sky_radiation(ra: f64, z: f64) -> f64 {
    (0.75 + 0.00002 * z) * ra
}

/// Net short wave radiation, in MJ m^-2.
///
/// Equation 38 from FAO56 with an albedo of 0.23 based on the definition
/// of the reference crop.
pub fn net_sw_radiation(rs: f64) -> f64 {
    0.77 * rs
}

/// Net outgoing long wave radiation, in MJ m^-2.
///
/// Equation 39 from FAO56. The relative shortwave ratio Rs/Rs0 is capped
/// at 1 and fixed at 0.8 at night, when no clear-sky radiation is
/// available to form the ratio.
/// TODO: use the ratio from 2-3 hours before sunset through the night, as
/// FAO56 suggests.
pub fn net_outgoing_lw_radiation(t: f64, ea: f64, rs: f64, rs0: f64) -> f64 {
    let a = 2.043e-10 * (t + 273.16).powi(4);
    let b = 0.34 - 0.14 * ea.sqrt();

    let ratio = if rs0 > 0.0 { (rs / rs0).min(1.0) } else { 0.8 };
    let c = 1.35 * ratio - 0.35;

    a * b * c
}

/// Net radiation, in MJ m^-2.
///
/// Equation 40 from FAO56.
pub fn net_radiation(rns: f64, rnl: f64) -> f64 {
    rns - rnl
}

/// Soil heat flux for hourly periods, in MJ m^-2.
///
/// Equations 45 and 46 from FAO56. Nighttime is assumed when the measured
/// solar radiation falls below 0.05 MJ m^-2 h^-1.
pub fn soil_heat_flux(rn: f64, rs: f64) -> f64 {
    if rs < 0.05 {
        0.5 * rn
    } else {
        0.1 * rn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::{
        end_solar_time_angle, inv_rel_earth_sun_dist, julian_day, latitude_radians,
        midpoint_solar_time_angle, solar_declination, solar_time_correction,
        start_solar_time_angle,
    };

    #[test]
    fn test_extraterrestrial_radiation_daytime() {
        // FAO56 example 19, 14:00-15:00.
        let j = julian_day(1, 10);
        let dr = inv_rel_earth_sun_dist(j);
        let delta = solar_declination(j);
        let phi = latitude_radians(16.22);
        let sc = solar_time_correction(j);
        let omega = midpoint_solar_time_angle(14.5, 15.0, 16.25, sc);
        let omega1 = start_solar_time_angle(omega, 1.0);
        let omega2 = end_solar_time_angle(omega, 1.0);

        let ra = extraterrestrial_radiation(dr, delta, phi, omega, omega1, omega2);
        assert!((ra - 3.543).abs() < 0.01);
        assert!((clear_sky_radiation(ra, 8.0) - 2.658).abs() < 0.01);
    }

    #[test]
    fn test_extraterrestrial_radiation_is_zero_at_night() {
        // Same site at 02:00-03:00.
        let j = julian_day(1, 10);
        let dr = inv_rel_earth_sun_dist(j);
        let delta = solar_declination(j);
        let phi = latitude_radians(16.22);
        let sc = solar_time_correction(j);
        let omega = midpoint_solar_time_angle(2.5, 15.0, 16.25, sc);
        let omega1 = start_solar_time_angle(omega, 1.0);
        let omega2 = end_solar_time_angle(omega, 1.0);

        let ra = extraterrestrial_radiation(dr, delta, phi, omega, omega1, omega2);
        assert_eq!(ra, 0.0);
    }

    #[test]
    fn test_net_lw_radiation_night_ratio() {
        // At night the Rs/Rs0 ratio is fixed at 0.8.
        let rnl = net_outgoing_lw_radiation(28.0, 3.402, 0.0, 0.0);
        assert!((rnl - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_soil_heat_flux_day_night_split() {
        assert!((soil_heat_flux(1.75, 2.45) - 0.175).abs() < 1e-12);
        assert!((soil_heat_flux(-0.1, 0.0) - -0.05).abs() < 1e-12);
    }
}
