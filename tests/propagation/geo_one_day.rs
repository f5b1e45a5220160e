//! Geostationary-class orbit over one day with Sun, Moon and solar radiation
//! pressure enabled. No real gravity-coefficient file is available in this
//! environment, so `n = m = 0` (central-body term only); the perturbations
//! under test are the third-body and SRP terms, not the harmonic field.
//! Checked for boundedness and near-conservation rather than an exact
//! external reference ephemeris, which this environment has no access to.

use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::eop::{EopRow, EopTable, SpwTable};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::gravity::Harmonics;
use hpop::linalg::Vector;
use hpop::propagator::ephemeris;

#[test]
fn geo_orbit_stays_bounded_with_third_body_and_srp() {
    let mut cnm = Harmonics::zeros(0);
    cnm.set(0, 0, 1.0);
    let snm = Harmonics::zeros(0);
    let mut eop = EopTable::new();
    for mjd in 58000..=58002 {
        eop.insert(mjd, EopRow::default());
    }
    let spw = SpwTable::new();

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
        area_drag: 0.0,
        area_solar: 10.0,
        mass: 1000.0,
        cr: 1.3,
        cd: 0.0,
        n: 0,
        m: 0,
        sun: true,
        moon: true,
        srad: true,
        drag: false,
        solid_earth_tides: false,
        ocean_tides: false,
        relativity: false,
    };

    // a = 42,164 km circular equatorial GEO, RAAN/inclination zero.
    const A_GEO: f64 = 42_164_000.0;
    let v_circ = (GM_EARTH / A_GEO).sqrt();
    let y0 = Vector::from_slice(&[A_GEO, 0.0, 0.0, 0.0, v_circ, 0.0]);

    let eph = ephemeris(&y0, 1_440, 60.0, &aux, &tables);
    assert_eq!(eph.len(), 1_441);

    let r0 = y0.slice(0, 2).norm();
    for state in &eph {
        let r = state.slice(0, 2).norm();
        assert!(r.is_finite(), "radius diverged to non-finite");
        // Third-body/SRP perturbations over GEO in one day should not move
        // the radius by more than a few percent.
        assert!((r - r0).abs() / r0 < 0.05, "radius drifted too far: {r} vs {r0}");
    }
}
