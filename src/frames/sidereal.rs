//! Greenwich mean/apparent sidereal time.
//!
//! GMST follows the IAU-1982 polynomial (Vallado, *Fundamentals of
//! Astrodynamics and Applications*, eq. 3-45).

use super::nutation::{mean_obliquity, nutation_angles};
use crate::time::julian_centuries_tt;

const ARCSEC2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);
const TWO_PI: f64 = std::f64::consts::TAU;

/// Greenwich mean sidereal time, radians in `[0, 2*pi)`, from the UT1 MJD.
pub fn gmst(mjd_ut1: f64) -> f64 {
    let mjd_j2000 = crate::time::MJD_J2000;
    let t_ut1 = (mjd_ut1 - mjd_j2000) / 36525.0;

    let seconds = 67310.54841
        + (876600.0 * 3600.0 + 8640184.812866) * t_ut1
        + 0.093104 * t_ut1 * t_ut1
        - 6.2e-6 * t_ut1 * t_ut1 * t_ut1;

    // 86400 seconds per sidereal-reckoned day, converted to an angle.
    let frac_days = seconds / 86400.0;
    wrap_2pi(frac_days * TWO_PI)
}

/// Equation of the equinoxes: the nutation-induced correction from mean to
/// apparent sidereal time.
pub fn equation_of_equinoxes(mjd_tt: f64) -> f64 {
    let t = julian_centuries_tt(mjd_tt);
    let eps0 = mean_obliquity(t);
    let angles = nutation_angles(t);
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    angles.dpsi * eps0.cos() + 0.00264 * ARCSEC2RAD * omega.sin()
        + 0.000063 * ARCSEC2RAD * (2.0 * omega).sin()
}

/// Greenwich apparent sidereal time: `GMST + equation of the equinoxes`.
pub fn gast(mjd_ut1: f64, mjd_tt: f64) -> f64 {
    wrap_2pi(gmst(mjd_ut1) + equation_of_equinoxes(mjd_tt))
}

fn wrap_2pi(x: f64) -> f64 {
    x.rem_euclid(TWO_PI)
}
