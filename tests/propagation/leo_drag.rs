//! Atmospheric drag on a low-inclination LEO orbit should monotonically
//! shrink the semi-major axis over a one-day propagation.

use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::eop::{EopRow, EopTable, SpwRow, SpwTable};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::gravity::Harmonics;
use hpop::linalg::Vector;
use hpop::propagator::ephemeris;

#[test]
fn drag_monotonically_shrinks_semi_major_axis() {
    let mut cnm = Harmonics::zeros(0);
    cnm.set(0, 0, 1.0);
    let snm = Harmonics::zeros(0);

    let mut eop = EopTable::new();
    for mjd in 57996..=58002 {
        eop.insert(mjd, EopRow::default());
    }

    let mut spw = SpwTable::new();
    for mjd in 57996..=58002 {
        spw.insert(
            mjd,
            SpwRow {
                ap_daily: 15.0,
                kp_daily: 3.0,
                f107: 150.0,
                f107_bar: 150.0,
                ap3h: [15.0; 8],
                kp3h: [3.0; 8],
            },
        );
    }

    let tables = ForceModelTables {
        cnm: &cnm,
        snm: &snm,
        eop: &eop,
        spw: &spw,
        gm_ref: GM_EARTH,
        r_ref: R_EARTH,
    };

    let aux = AuxParam {
        mjd_utc: 58000.0,
        area_drag: 0.01,
        area_solar: 0.0,
        mass: 1.0,
        cr: 0.0,
        cd: 2.2,
        n: 0,
        m: 0,
        sun: false,
        moon: false,
        srad: false,
        drag: true,
        solid_earth_tides: false,
        ocean_tides: false,
        relativity: false,
    };

    // a = 6,778 km, i = 51.6 deg circular LEO (ISS-class).
    const A_LEO: f64 = 6_778_000.0;
    const INCL: f64 = 51.6_f64.to_radians();
    let v_circ = (GM_EARTH / A_LEO).sqrt();
    let y0 = Vector::from_slice(&[
        A_LEO,
        0.0,
        0.0,
        0.0,
        v_circ * INCL.cos(),
        v_circ * INCL.sin(),
    ]);

    // 24 hours at 60 s steps, sampling the semi-major axis (vis-viva) once
    // per simulated hour.
    let eph = ephemeris(&y0, 1_440, 60.0, &aux, &tables);

    let semi_major_axis = |state: &Vector| -> f64 {
        let r = state.slice(0, 2).norm();
        let v = state.slice(3, 5).norm();
        1.0 / (2.0 / r - v * v / GM_EARTH)
    };

    let hourly: Vec<f64> = (0..=24).map(|h| semi_major_axis(&eph[h * 60])).collect();

    for window in hourly.windows(2) {
        assert!(
            window[1] <= window[0] + 1.0,
            "semi-major axis increased: {} -> {}",
            window[0],
            window[1]
        );
    }
    assert!(
        hourly[24] < hourly[0],
        "expected net semi-major-axis decay over 24h: {} -> {}",
        hourly[0],
        hourly[24]
    );
}
