//! Low-precision analytical Moon position series.

use crate::linalg::Vector;

const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Geocentric ecliptic-of-date position of the Moon, km. A truncated
/// low-precision series (leading lunar inequality terms: evection,
/// variation, annual equation) standing in for the full Brown ELP/ILE
/// theory; see `DESIGN.md` for the accuracy tradeoff this makes.
pub fn moon_pos(t: f64) -> Vector {
    let l0 = wrap_deg(218.31617 + 481267.88088 * t);
    let l = wrap_deg(134.96292 + 477198.86753 * t) * DEG2RAD;
    let lp = wrap_deg(357.52543 + 35999.04944 * t) * DEG2RAD;
    let f = wrap_deg(93.27283 + 483202.01873 * t) * DEG2RAD;
    let d = wrap_deg(297.85027 + 445267.11135 * t) * DEG2RAD;

    let lon = wrap_deg(
        l0 + 6.28875 * l.sin()
            + 1.27402 * (2.0 * d - l).sin()
            + 0.65831 * (2.0 * d).sin()
            + 0.21393 * (2.0 * l).sin()
            - 0.18520 * lp.sin()
            - 0.11463 * (2.0 * f).sin(),
    ) * DEG2RAD;

    let lat = (5.12819 * f.sin()
        + 0.28058 * (l - 2.0 * f).sin()
        + 0.27726 * (l + 2.0 * f).sin()
        + 0.17348 * (2.0 * d - f).sin())
        * DEG2RAD;

    let dist_km = 385000.56
        - 20905.36 * l.cos()
        - 3699.11 * (2.0 * d - l).cos()
        - 2955.97 * (2.0 * d).cos()
        - 569.93 * (2.0 * l).cos();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    Vector::from_slice(&[
        dist_km * cos_lat * cos_lon,
        dist_km * cos_lat * sin_lon,
        dist_km * sin_lat,
    ])
}

fn wrap_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_plausible_lunar_range() {
        let m = moon_pos(0.1);
        let dist = m.norm();
        assert!(dist > 356_000.0 && dist < 407_000.0, "got {dist}");
    }
}
