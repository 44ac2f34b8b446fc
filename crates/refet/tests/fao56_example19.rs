//! Checks the full hourly chain against the worked values of FAO56
//! example 19 (N'Diaye, Senegal, 1 October): a daytime hour at
//! 14:00-15:00 and a night hour at 02:00-03:00.

use refet::*;

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn daytime_hour_matches_fao56() {
    let (temp, elev, rh) = (38.0, 8.0, 52.0);

    let delta = vapour_pressure_slope(temp);
    let gamma = psychrometric_constant(elev);
    let e0 = saturation_vapour_pressure(temp);
    let ea = actual_vapour_pressure(temp, rh);
    assert_close(delta, 0.358, 0.001, "vapour pressure slope");
    assert_close(gamma, 0.0673, 0.0005, "psychrometric constant");
    assert_close(e0, 6.625, 0.001, "saturation vapour pressure");
    assert_close(ea, 3.445, 0.001, "actual vapour pressure");
    assert_close(vapour_pressure_deficit(temp, rh), 3.180, 0.001, "vapour pressure deficit");

    let j = julian_day(1, 10);
    assert_close(j, 274.0, 1e-12, "julian day");
    let phi = latitude_radians(16.22);
    let dr = inv_rel_earth_sun_dist(j);
    let decl = solar_declination(j);
    let sc = solar_time_correction(j);
    assert_close(phi, 0.283, 0.001, "latitude in radians");
    assert_close(dr, 1.0001, 0.0005, "inverse earth-sun distance");
    assert_close(decl, -0.0753, 0.001, "solar declination");
    assert_close(sc, 0.1889, 0.001, "solar time correction");

    let omega = midpoint_solar_time_angle(14.5, 15.0, 16.25, sc);
    let omega1 = start_solar_time_angle(omega, 1.0);
    let omega2 = end_solar_time_angle(omega, 1.0);
    assert_close(omega, 0.682, 0.001, "midpoint solar time angle");
    assert_close(omega1, 0.5512, 0.001, "start solar time angle");
    assert_close(omega2, 0.813, 0.001, "end solar time angle");

    let ra = extraterrestrial_radiation(dr, decl, phi, omega, omega1, omega2);
    let rs0 = clear_sky_radiation(ra, elev);
    assert_close(ra, 3.543, 0.01, "extraterrestrial radiation");
    assert_close(rs0, 2.658, 0.01, "clear sky radiation");

    let rs = 2.45;
    let rns = net_sw_radiation(rs);
    let rnl = net_outgoing_lw_radiation(temp, ea, rs, rs0);
    let rn = net_radiation(rns, rnl);
    let g = soil_heat_flux(rn, rs);
    assert_close(rns, 1.887, 0.001, "net short wave radiation");
    assert_close(rnl, 0.137, 0.001, "net outgoing long wave radiation");
    assert_close(rn, 1.749, 0.002, "net radiation");
    assert_close(g, 0.175, 0.001, "soil heat flux");

    let et = compute_et(delta, rn, g, gamma, temp, e0, ea, 3.3);
    assert_close(et, 0.63, 0.01, "reference ET");

    // The driver gives the same answer from raw observations.
    let forcing = HourlyForcing {
        temperature: temp,
        elevation: elev,
        relative_humidity: rh,
        day: 1,
        month: 10,
        latitude: 16.22,
        standard_time: 14.5,
        zone_longitude: 15.0,
        site_longitude: 16.25,
        period: 1.0,
        solar_radiation: rs,
        wind_speed: 3.3,
    };
    assert_close(reference_et(&forcing), et, 1e-12, "driver ET");
}

#[test]
fn night_hour_matches_fao56() {
    let (temp, elev, rh) = (28.0, 8.0, 90.0);

    let delta = vapour_pressure_slope(temp);
    let e0 = saturation_vapour_pressure(temp);
    let ea = actual_vapour_pressure(temp, rh);
    assert_close(delta, 0.220, 0.001, "vapour pressure slope");
    assert_close(e0, 3.780, 0.001, "saturation vapour pressure");
    assert_close(ea, 3.402, 0.001, "actual vapour pressure");

    let j = julian_day(1, 10);
    let phi = latitude_radians(16.22);
    let dr = inv_rel_earth_sun_dist(j);
    let decl = solar_declination(j);
    let sc = solar_time_correction(j);

    let omega = midpoint_solar_time_angle(2.5, 15.0, 16.25, sc);
    assert_close(omega, -2.46, 0.001, "midpoint solar time angle");

    // The sun is below the horizon: no incoming radiation.
    let omega1 = start_solar_time_angle(omega, 1.0);
    let omega2 = end_solar_time_angle(omega, 1.0);
    let ra = extraterrestrial_radiation(dr, decl, phi, omega, omega1, omega2);
    assert_eq!(ra, 0.0);

    let rs = 0.0;
    let rs0 = clear_sky_radiation(ra, elev);
    let rnl = net_outgoing_lw_radiation(temp, ea, rs, rs0);
    let rn = net_radiation(net_sw_radiation(rs), rnl);
    let g = soil_heat_flux(rn, rs);
    assert_close(rnl, 0.100, 0.001, "net outgoing long wave radiation");
    assert_close(rn, -0.100, 0.001, "net radiation");
    assert_close(g, -0.050, 0.001, "soil heat flux");

    let et = compute_et(delta, rn, g, psychrometric_constant(elev), temp, e0, ea, 1.9);
    assert_close(et, 0.0, 0.01, "reference ET");
}
