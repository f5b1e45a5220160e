//! Four well-spread overhead satellites should give a small, finite PDOP;
//! dropping below four visible satellites should report `NaN`.

use approx::assert_abs_diff_eq;
use hpop::frames::{geodetic_to_ecef, Geodetic};
use hpop::linalg::Vector;
use hpop::pdop::{compute_grid_pdop, GridBounds};

fn single_point_bounds() -> GridBounds {
    GridBounds {
        lat_start: 0.0,
        lat_end: 0.0,
        lat_step: 1.0,
        lon_start: 0.0,
        lon_end: 0.0,
        lon_step: 1.0,
        alt_km: 0.0,
    }
}

/// Four satellites spread across the sky above the equatorial observer at
/// (lat=0, lon=0): nearly overhead, and three more offset north, east and
/// west at GPS-like altitude, giving good geometric spread.
fn well_spread_satellites() -> Vec<Vec<Vector>> {
    let obs = geodetic_to_ecef(Geodetic {
        lat: 0.0,
        lon: 0.0,
        height: 0.0,
    });
    const ALT: f64 = 20_200_000.0;
    let up = obs.normalize();
    let directions = [
        Vector::from_slice(&[1.0, 0.0, 0.0]),
        Vector::from_slice(&[0.0, 1.0, 0.0]),
        Vector::from_slice(&[0.0, 0.0, 1.0]),
        Vector::from_slice(&[-1.0, -1.0, -1.0]).normalize(),
    ];
    directions
        .iter()
        .map(|d| {
            let combined = up.add(d).normalize();
            vec![obs.add(&combined.scale(ALT))]
        })
        .collect()
}

#[test]
fn four_spread_satellites_give_small_finite_pdop() {
    let sats = well_spread_satellites();
    let bounds = single_point_bounds();
    let (cells, visible) = compute_grid_pdop(&sats, 1, &bounds, 0.0);

    assert_eq!(cells.len(), 1);
    let pdop = cells[0].pdop;
    assert!(pdop.is_finite(), "expected finite PDOP, got {pdop}");
    assert!(pdop < 2.0, "expected PDOP < 2, got {pdop}");
    assert_abs_diff_eq!(cells[0].lat_deg, 0.0);

    for track in &visible {
        assert_eq!(track, &vec![0], "all four satellites should be visible");
    }
}

#[test]
fn fewer_than_four_satellites_gives_nan_pdop() {
    let sats = well_spread_satellites();
    let bounds = single_point_bounds();
    let (cells, _) = compute_grid_pdop(&sats[0..3], 1, &bounds, 0.0);

    assert_eq!(cells.len(), 1);
    assert!(cells[0].pdop.is_nan(), "expected NaN PDOP with only 3 satellites visible");
}
