//! The hourly Penman-Monteith combination equation and its driver.

use serde::{Deserialize, Serialize};

use crate::atmosphere::{
    actual_vapour_pressure, psychrometric_constant, saturation_vapour_pressure,
    vapour_pressure_slope,
};
use crate::radiation::{
    clear_sky_radiation, extraterrestrial_radiation, net_outgoing_lw_radiation, net_radiation,
    net_sw_radiation, soil_heat_flux,
};
use crate::solar::{
    end_solar_time_angle, inv_rel_earth_sun_dist, julian_day, latitude_radians,
    midpoint_solar_time_angle, solar_declination, solar_time_correction, start_solar_time_angle,
};

/// Hourly meteorological observations and site position for one
/// reference ET calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HourlyForcing {
    /// Mean air temperature for the hour (deg C)
    pub temperature: f64,
    /// Site elevation above sea level (m)
    pub elevation: f64,
    /// Mean relative humidity for the hour (%)
    pub relative_humidity: f64,
    /// Day of the month
    pub day: u32,
    /// Month of the year
    pub month: u32,
    /// Site latitude (decimal degrees)
    pub latitude: f64,
    /// Standard clock time at the midpoint of the period (e.g. 14.5 for
    /// the hour between 14:00 and 15:00)
    pub standard_time: f64,
    /// Longitude of the centre of the local time zone (degrees west of
    /// Greenwich)
    pub zone_longitude: f64,
    /// Site longitude (degrees west of Greenwich)
    pub site_longitude: f64,
    /// Length of the calculation period (hours)
    pub period: f64,
    /// Measured incoming solar radiation (MJ m^-2 h^-1)
    pub solar_radiation: f64,
    /// Wind speed at 2 m height (m s^-1)
    pub wind_speed: f64,
}

/// Hourly reference crop ET in mm from pre-computed terms.
///
/// Equation 53 from FAO56: `delta` the vapour pressure slope, `rn`/`g`
/// the net radiation and soil heat flux, `gamma` the psychrometric
/// constant, `t` the air temperature, `e0`/`ea` the saturation and actual
/// vapour pressures and `u2` the wind speed at 2 m.
#[allow(clippy::too_many_arguments)]
pub fn compute_et(
    delta: f64,
    rn: f64,
    g: f64,
    gamma: f64,
    t: f64,
    e0: f64,
    ea: f64,
    u2: f64,
) -> f64 {
    let a = 0.408 * delta * (rn - g);
    let b = gamma * (37.0 / (t + 273.0)) * u2 * (e0 - ea);
    let c = delta + gamma * (1.0 + 0.34 * u2);

    (a + b) / c
}

/// Hourly reference crop ET in mm for one set of observations.
///
/// Runs the full FAO56 chain: vapour pressure terms from temperature and
/// humidity, solar geometry from the date and site position, the
/// radiation balance from the measured solar radiation, and finally the
/// Penman-Monteith combination equation.
pub fn reference_et(forcing: &HourlyForcing) -> f64 {
    let delta = vapour_pressure_slope(forcing.temperature);
    let gamma = psychrometric_constant(forcing.elevation);
    let e0 = saturation_vapour_pressure(forcing.temperature);
    let ea = actual_vapour_pressure(forcing.temperature, forcing.relative_humidity);

    let j = julian_day(forcing.day, forcing.month);
    let phi = latitude_radians(forcing.latitude);
    let dr = inv_rel_earth_sun_dist(j);
    let decl = solar_declination(j);
    let sc = solar_time_correction(j);
    let omega = midpoint_solar_time_angle(
        forcing.standard_time,
        forcing.zone_longitude,
        forcing.site_longitude,
        sc,
    );
    let omega1 = start_solar_time_angle(omega, forcing.period);
    let omega2 = end_solar_time_angle(omega, forcing.period);

    let ra = extraterrestrial_radiation(dr, decl, phi, omega, omega1, omega2);
    let rs0 = clear_sky_radiation(ra, forcing.elevation);
    let rns = net_sw_radiation(forcing.solar_radiation);
    let rnl = net_outgoing_lw_radiation(forcing.temperature, ea, forcing.solar_radiation, rs0);
    let rn = net_radiation(rns, rnl);
    let g = soil_heat_flux(rn, forcing.solar_radiation);

    compute_et(delta, rn, g, gamma, forcing.temperature, e0, ea, forcing.wind_speed)
}

/// Reference ET for a sequence of observations, in input order.
pub fn reference_et_many(forcings: &[HourlyForcing]) -> Vec<f64> {
    forcings.iter().map(reference_et).collect()
}
