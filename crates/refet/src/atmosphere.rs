//! Vapour pressure and psychrometric relations.

/// Saturation vapour pressure in kPa at air temperature `t` (deg C).
///
/// Equation 11 from FAO56.
pub fn saturation_vapour_pressure(t: f64) -> f64 {
    0.6108 * ((17.27 * t) / (t + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve in kPa per deg C.
///
/// Equation 13 from FAO56, with the mean temperature for the hour in
/// deg C as input.
pub fn vapour_pressure_slope(t: f64) -> f64 {
    let a = t + 237.3;
    let b = saturation_vapour_pressure(t);

    (4098.0 * b) / (a * a)
}

/// Actual vapour pressure in kPa from temperature (deg C) and relative
/// humidity (%).
///
/// Equation 54 from FAO56.
pub fn actual_vapour_pressure(t: f64, rh: f64) -> f64 {
    saturation_vapour_pressure(t) * (rh / 100.0)
}

/// Vapour pressure deficit in kPa.
pub fn vapour_pressure_deficit(t: f64, rh: f64) -> f64 {
    saturation_vapour_pressure(t) - actual_vapour_pressure(t, rh)
}

/// Psychrometric constant in kPa per deg C at elevation `z` metres above
/// sea level.
///
/// Equation 8 from FAO56, with atmospheric pressure estimated from
/// elevation (equation 7). Physical constants used: latent heat of
/// vapourization 2.45 MJ/kg, specific heat at constant pressure
/// 1.013e-3 MJ/kg/degC, dry/wet molecular weight ratio 0.622.
pub fn psychrometric_constant(z: f64) -> f64 {
    let p = 101.3 * (((293.0 - 0.0065 * z) / 293.0).powf(5.26));

    0.000665 * p
}
