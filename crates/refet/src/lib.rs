//! FAO-56 hourly reference crop evapotranspiration.
//!
//! Computes the hourly reference crop ET in mm using the FAO
//! Penman-Monteith algorithm described in FAO56, from hourly station
//! observations (temperature, humidity, solar radiation, wind) plus the
//! site position. Every step of the equation chain is exposed so callers
//! can substitute their own measured radiation terms where available.
//!
//! Allen R.G., Pereira L.S., Raes D. and Smith M., (1998), 'Crop
//! evapotranspiration - Guidelines for computing crop water
//! requirements', FAO Irrigation and drainage paper 56, Rome.
//!
//! # Example
//!
//! ```
//! use refet::{reference_et, HourlyForcing};
//!
//! // Daytime hour from the FAO56 worked example (example 19).
//! let forcing = HourlyForcing {
//!     temperature: 38.0,
//!     elevation: 8.0,
//!     relative_humidity: 52.0,
//!     day: 1,
//!     month: 10,
//!     latitude: 16.22,
//!     standard_time: 14.5,
//!     zone_longitude: 15.0,
//!     site_longitude: 16.25,
//!     period: 1.0,
//!     solar_radiation: 2.45,
//!     wind_speed: 3.3,
//! };
//!
//! let et = reference_et(&forcing);
//! assert!((et - 0.63).abs() < 0.01);
//! ```

pub mod atmosphere;
pub mod et;
pub mod radiation;
pub mod solar;

pub use atmosphere::{
    actual_vapour_pressure, psychrometric_constant, saturation_vapour_pressure,
    vapour_pressure_deficit, vapour_pressure_slope,
};
pub use et::{compute_et, reference_et, reference_et_many, HourlyForcing};
pub use radiation::{
    clear_sky_radiation, extraterrestrial_radiation, net_outgoing_lw_radiation, net_radiation,
    net_sw_radiation, soil_heat_flux,
};
pub use solar::{
    end_solar_time_angle, inv_rel_earth_sun_dist, julian_day, latitude_radians,
    midpoint_solar_time_angle, solar_declination, solar_time_correction, start_solar_time_angle,
};
