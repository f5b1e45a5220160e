//! A 24/3/1 Walker constellation (a = 27,878 km, e = 0, i = 55 deg) should
//! produce 24 satellites, 8 per plane, with planes at Omega0 + {0, 120, 240}
//! degrees, and every satellite's state vector should land on a circular
//! orbit of the seed's semi-major axis.

use approx::assert_relative_eq;
use hpop::constellation::{elements_to_state, generate_walker_constellation, OrbitalElements};
use rstest::rstest;

const GM_EARTH_KM: f64 = 398_600.4415;

fn seed(raan0: f64) -> OrbitalElements {
    OrbitalElements {
        a: 27_878.0,
        e: 0.0,
        i: 55.0,
        raan: raan0,
        argp: 0.0,
        nu: 0.0,
    }
}

#[rstest]
#[case(0.0)]
#[case(45.0)]
#[case(200.0)]
fn produces_24_satellites_in_3_evenly_spaced_planes(#[case] raan0: f64) {
    let sats = generate_walker_constellation(&seed(raan0), 24, 3, 1);
    assert_eq!(sats.len(), 24);

    let plane_raans: Vec<f64> = (0..3).map(|p| sats[p * 8].raan).collect();
    for p in 0..3 {
        let expected = (raan0 + p as f64 * 120.0).rem_euclid(360.0);
        assert_relative_eq!(plane_raans[p], expected, epsilon = 1e-9);
    }

    for plane in sats.chunks(8) {
        assert_eq!(plane.len(), 8);
    }
}

#[test]
fn every_satellite_converts_to_a_circular_state_of_the_seed_radius() {
    let sats = generate_walker_constellation(&seed(10.0), 24, 3, 1);
    let expected_speed = (GM_EARTH_KM / 27_878.0).sqrt();

    for el in &sats {
        let state = elements_to_state(el, GM_EARTH_KM);
        let r = state.slice(0, 2).norm();
        let v = state.slice(3, 5).norm();
        assert_relative_eq!(r, 27_878.0, epsilon = 1e-6);
        assert_relative_eq!(v, expected_speed, epsilon = 1e-6);
    }
}
