//! Grid PDOP computation.
//!
//! Geodetic-to-ECEF conversion for the grid walk reuses
//! `frames::geodetic_to_ecef` rather than duplicating the closed-form
//! WGS-84 conversion.

use crate::frames::{geodetic_to_ecef, Geodetic};
use crate::linalg::{Matrix, Vector};

/// One grid cell's PDOP at one propagation step. `pdop` is `NaN` when
/// fewer than four satellites are visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdopCell {
    pub time_step: usize,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub pdop: f64,
}

/// Bounds and resolution of the latitude/longitude grid walk, degrees and
/// observer altitude in km.
#[derive(Debug, Clone, Copy)]
pub struct GridBounds {
    pub lat_start: f64,
    pub lat_end: f64,
    pub lat_step: f64,
    pub lon_start: f64,
    pub lon_end: f64,
    pub lon_step: f64,
    pub alt_km: f64,
}

/// Elevation angle (degrees) of `sat_ecef` as seen from `obs_ecef`, both
/// in meters. `up` is the observer's local radial direction, so
/// `dot(los_unit, up)` is `sin(elevation)` and `asin` of it yields the
/// elevation directly.
pub fn elevation_deg(sat_ecef: &Vector, obs_ecef: &Vector) -> f64 {
    let los_unit = sat_ecef.sub(obs_ecef).normalize();
    let up = obs_ecef.normalize();
    los_unit.dot(&up).asin().to_degrees()
}

/// For every `(time_step, lat, lon)` triple, counts the satellites in
/// `sat_positions_ecef` above `min_elevation_deg` and solves the PDOP
/// geometry matrix. Also returns, per satellite, the list of time steps
/// visible from the grid's first cell `(lat_start, lon_start)`, which
/// anchors the visibility-interval report to a single reference ground
/// station.
pub fn compute_grid_pdop(
    sat_positions_ecef: &[Vec<Vector>],
    num_steps: usize,
    bounds: &GridBounds,
    min_elevation_deg: f64,
) -> (Vec<PdopCell>, Vec<Vec<usize>>) {
    let num_sats = sat_positions_ecef.len();
    let mut visible_times: Vec<Vec<usize>> = vec![Vec::new(); num_sats];
    let mut cells = Vec::new();

    for t in 0..num_steps {
        let mut lat = bounds.lat_start;
        while lat <= bounds.lat_end {
            let mut lon = bounds.lon_start;
            while lon <= bounds.lon_end {
                let obs = geodetic_to_ecef(Geodetic {
                    lat: lat.to_radians(),
                    lon: lon.to_radians(),
                    height: bounds.alt_km * 1000.0,
                });

                let mut los_rows = Vec::new();
                for (s, track) in sat_positions_ecef.iter().enumerate() {
                    let sat = &track[t];
                    if elevation_deg(sat, &obs) >= min_elevation_deg {
                        los_rows.push(sat.sub(&obs).normalize());
                        if lat == bounds.lat_start && lon == bounds.lon_start {
                            visible_times[s].push(t);
                        }
                    }
                }

                let pdop = if los_rows.len() >= 4 {
                    solve_pdop(&los_rows)
                } else {
                    f64::NAN
                };
                cells.push(PdopCell {
                    time_step: t,
                    lat_deg: lat,
                    lon_deg: lon,
                    pdop,
                });

                lon += bounds.lon_step;
            }
            lat += bounds.lat_step;
        }
    }

    (cells, visible_times)
}

/// `Q = (A^T A)^-1`, `PDOP = sqrt(Q00 + Q11 + Q22)`, built from unit
/// line-of-sight rows `[x, y, z, 1]`.
fn solve_pdop(los_rows: &[Vector]) -> f64 {
    let mut a = Matrix::zeros(los_rows.len(), 4);
    for (i, los) in los_rows.iter().enumerate() {
        a.set(i, 0, los[0]);
        a.set(i, 1, los[1]);
        a.set(i, 2, los[2]);
        a.set(i, 3, 1.0);
    }
    let ata = &a.transpose() * &a;
    match ata.try_inverse() {
        Some(q) => (q.get(0, 0) + q.get(1, 1) + q.get(2, 2)).sqrt(),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overhead_satellite_is_ninety_degrees_elevation() {
        let obs = Vector::from_slice(&[6378137.0, 0.0, 0.0]);
        let sat = Vector::from_slice(&[7378137.0, 0.0, 0.0]);
        assert!((elevation_deg(&sat, &obs) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn horizon_satellite_is_near_zero_elevation() {
        // Satellite on the local horizontal plane through `obs`, far enough
        // away that the line of sight is effectively tangent to the sphere.
        let obs = Vector::from_slice(&[6378137.0, 0.0, 0.0]);
        let sat = Vector::from_slice(&[6378137.0, 1.0e7, 0.0]);
        let elev = elevation_deg(&sat, &obs);
        assert!(elev < 1.0 && elev > -90.0, "elev={elev}");
    }

    fn gps_like_constellation() -> Vec<Vec<Vector>> {
        // Four satellites roughly overhead from four compass directions at
        // GPS-like altitude, one time step.
        const R: f64 = 26_560_000.0;
        let dirs = [
            (R, 0.0, 8_000_000.0),
            (-R, 0.0, 8_000_000.0),
            (0.0, R, 8_000_000.0),
            (0.0, -R, 8_000_000.0),
        ];
        dirs.iter()
            .map(|&(x, y, z)| vec![Vector::from_slice(&[x, y, z])])
            .collect()
    }

    #[test]
    fn four_visible_satellites_give_finite_pdop() {
        let sats = gps_like_constellation();
        let bounds = GridBounds {
            lat_start: 0.0,
            lat_end: 0.0,
            lat_step: 1.0,
            lon_start: 0.0,
            lon_end: 0.0,
            lon_step: 1.0,
            alt_km: 0.0,
        };
        let (cells, visible) = compute_grid_pdop(&sats, 1, &bounds, 0.0);
        assert_eq!(cells.len(), 1);
        assert!(cells[0].pdop.is_finite() && cells[0].pdop > 0.0);
        for track in &visible {
            assert_eq!(track, &vec![0]);
        }
    }

    #[test]
    fn fewer_than_four_visible_satellites_gives_nan() {
        let sats = &gps_like_constellation()[0..2];
        let bounds = GridBounds {
            lat_start: 0.0,
            lat_end: 0.0,
            lat_step: 1.0,
            lon_start: 0.0,
            lon_end: 0.0,
            lon_step: 1.0,
            alt_km: 0.0,
        };
        let (cells, _) = compute_grid_pdop(sats, 1, &bounds, 0.0);
        assert!(cells[0].pdop.is_nan());
    }
}
