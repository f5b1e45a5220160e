//! ECEF <-> geodetic latitude/longitude/height conversion via iterative
//! Bowring reduction with WGS-84 flattening.
//!
//! The inverse direction (geodetic -> ECEF) is used by the PDOP grid walk
//! and text-ephemeris output.

use crate::linalg::Vector;

/// WGS-84 semi-major axis, meters.
pub const WGS84_A: f64 = 6378137.0;
/// WGS-84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257223563;
/// WGS-84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// A geodetic position: latitude and longitude in radians, height in
/// meters above the WGS-84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

/// Prime-vertical radius of curvature at geodetic latitude `lat`.
fn prime_vertical_radius(lat: f64) -> f64 {
    WGS84_A / (1.0 - WGS84_E2 * lat.sin().powi(2)).sqrt()
}

/// Geodetic -> ECEF, closed form.
pub fn geodetic_to_ecef(g: Geodetic) -> Vector {
    let n = prime_vertical_radius(g.lat);
    let x = (n + g.height) * g.lat.cos() * g.lon.cos();
    let y = (n + g.height) * g.lat.cos() * g.lon.sin();
    let z = (n * (1.0 - WGS84_E2) + g.height) * g.lat.sin();
    Vector::from_slice(&[x, y, z])
}

/// ECEF -> geodetic via iterative Bowring reduction. Converges to better
/// than 1e-11 rad / 1e-6 m within a handful of iterations for any orbital
/// altitude.
pub fn ecef_to_geodetic(r: &Vector) -> Geodetic {
    let (x, y, z) = (r[0], r[1], r[2]);
    let lon = y.atan2(x);
    let p = (x * x + y * y).sqrt();

    let mut lat = (z / (p * (1.0 - WGS84_E2))).atan();
    for _ in 0..8 {
        let n = prime_vertical_radius(lat);
        let next = (z + WGS84_E2 * n * lat.sin()) / p;
        let next_lat = next.atan();
        if (next_lat - lat).abs() < 1e-13 {
            lat = next_lat;
            break;
        }
        lat = next_lat;
    }
    let n = prime_vertical_radius(lat);
    let height = p / lat.cos() - n;

    Geodetic { lat, lon, height }
}
