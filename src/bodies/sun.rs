//! Low-precision analytical Sun position series.

use crate::linalg::Vector;

const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Geocentric ecliptic-of-date direction of the Sun, unit length.
/// Mean-anomaly/mean-longitude series good to ~0.01 deg.
pub fn sun_pos(t: f64) -> Vector {
    let m = wrap_deg(357.5256 + 35999.049 * t) * DEG2RAD;
    let l = wrap_deg(280.4600 + 36000.7698 * t
        + (1.9148 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.0200 - 0.000101 * t) * (2.0 * m).sin()
        + 0.0003 * (3.0 * m).sin())
        * DEG2RAD;

    Vector::from_slice(&[l.cos(), l.sin(), 0.0])
}

fn wrap_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_unit_length_in_ecliptic_plane() {
        let s = sun_pos(0.25);
        assert!((s.norm() - 1.0).abs() < 1e-9);
        assert_eq!(s[2], 0.0);
    }
}
