//! IAU-1976 precession matrix.
//!
//! Standard Lieske zeta/z/theta series; coefficients are the textbook
//! IAU-1976 values (Montenbruck & Gill, *Satellite Orbits*, eq. 5.108).

use crate::linalg::Matrix;

const ARCSEC2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Precession matrix `P` taking EME2000 coordinates to the mean-of-date
/// frame at Julian century `t` (TT, referenced to J2000).
pub fn precession_matrix(t: f64) -> Matrix {
    let t2 = t * t;
    let t3 = t2 * t;

    let zeta = (2306.2181 * t + 0.30188 * t2 + 0.017998 * t3) * ARCSEC2RAD;
    let z = (2306.2181 * t + 1.09468 * t2 + 0.018203 * t3) * ARCSEC2RAD;
    let theta = (2004.3109 * t - 0.42665 * t2 - 0.041833 * t3) * ARCSEC2RAD;

    &(&Matrix::r_z(-z) * &Matrix::r_y(theta)) * &Matrix::r_z(-zeta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_epoch() {
        let p = precession_matrix(0.0);
        let id = Matrix::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert!((p.get(r, c) - id.get(r, c)).abs() < 1e-12);
            }
        }
    }
}
