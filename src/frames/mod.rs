//! Time/frame transformation pipeline: precession, nutation, Greenwich
//! sidereal time, polar motion, and geodetic conversion.
//!
//! All rotations are returned as 3x3 orthogonal [`Matrix`] values so that
//! `gravity`/`forces` can compose them (`E = PoleMatrix * GHAMatrix * N *
//! P`) without re-deriving angles at each call site.
//!
//! Nutation uses the truncated IAU-1980 106-term luni-solar series
//! (~0.1 mas fidelity); see `nutation.rs`.

mod geodetic;
mod nutation;
mod precession;
mod sidereal;

pub use geodetic::{ecef_to_geodetic, geodetic_to_ecef, Geodetic};
pub use nutation::{mean_obliquity, nutation_angles, NutationAngles};
pub use precession::precession_matrix;
pub use sidereal::{equation_of_equinoxes, gast, gmst};

use crate::eop::EopRecord;
use crate::linalg::Matrix;
use crate::time::julian_centuries_tt;

/// Precession matrix from J2000 to the mean-of-date frame at `mjd_tt`.
pub fn prec_matrix(mjd_tt: f64) -> Matrix {
    precession_matrix(julian_centuries_tt(mjd_tt))
}

/// Combined nutation matrix `N` at `mjd_tt`.
pub fn nut_matrix(mjd_tt: f64) -> Matrix {
    let t = julian_centuries_tt(mjd_tt);
    let NutationAngles { dpsi, deps } = nutation_angles(t);
    let eps0 = mean_obliquity(t);
    let eps = eps0 + deps;
    &(&Matrix::r_x(-eps) * &Matrix::r_z(-dpsi)) * &Matrix::r_x(eps0)
}

/// Mean-obliquity ecliptic rotation used to bring the analytic Sun/Moon
/// series from the ecliptic of date into the mean equator of date.
pub fn ecl_matrix(mjd_tt: f64) -> Matrix {
    let eps0 = mean_obliquity(julian_centuries_tt(mjd_tt));
    Matrix::r_x(eps0)
}

/// Greenwich apparent sidereal time rotation.
pub fn gha_matrix(mjd_ut1: f64, mjd_tt: f64) -> Matrix {
    Matrix::r_z(gast(mjd_ut1, mjd_tt))
}

/// Polar-motion matrix from EOP pole coordinates (arcseconds), applied as
/// the outermost rotation of the ECI -> ECEF chain.
pub fn pole_matrix(eop: &EopRecord) -> Matrix {
    const AS2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);
    let xp = eop.xp * AS2RAD;
    let yp = eop.yp * AS2RAD;
    &Matrix::r_y(-xp) * &Matrix::r_x(-yp)
}

/// `E = PoleMatrix * GHAMatrix * N * P`: full ECI (EME2000) -> ECEF
/// transformation.
pub fn eci_to_ecef(_mjd_utc: f64, mjd_ut1: f64, mjd_tt: f64, eop: &EopRecord) -> Matrix {
    let p = prec_matrix(mjd_tt);
    let n = nut_matrix(mjd_tt);
    let t = &n * &p;
    let gha = gha_matrix(mjd_ut1, mjd_tt);
    let pole = pole_matrix(eop);
    &(&pole * &gha) * &t
}
