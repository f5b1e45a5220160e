//! Pure two-body propagation: every perturbation disabled, `n = m = 0`.
//! A circular LEO orbit should hold its radius and vis-viva energy constant
//! over a single RK4-integrated revolution-fraction.

use approx::assert_relative_eq;
use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::eop::{EopRow, EopTable, SpwTable};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::gravity::Harmonics;
use hpop::linalg::Vector;
use hpop::propagator::ephemeris;

fn point_mass_tables() -> (Harmonics, Harmonics, EopTable, SpwTable) {
    let mut cnm = Harmonics::zeros(0);
    cnm.set(0, 0, 1.0);
    let snm = Harmonics::zeros(0);
    let mut eop = EopTable::new();
    eop.insert(58000, EopRow::default());
    eop.insert(58001, EopRow::default());
    (cnm, snm, eop, SpwTable::new())
}

fn no_perturbation_aux() -> AuxParam {
    AuxParam {
        mjd_utc: 58000.0,
        area_drag: 0.0,
        area_solar: 0.0,
        mass: 1.0,
        cr: 0.0,
        cd: 0.0,
        n: 0,
        m: 0,
        sun: false,
        moon: false,
        srad: false,
        drag: false,
        solid_earth_tides: false,
        ocean_tides: false,
        relativity: false,
    }
}

#[test]
fn circular_leo_holds_radius_and_energy() {
    let (cnm, snm, eop, spw) = point_mass_tables();
    let tables = ForceModelTables {
        cnm: &cnm,
        snm: &snm,
        eop: &eop,
        spw: &spw,
        gm_ref: GM_EARTH,
        r_ref: R_EARTH,
    };
    let aux = no_perturbation_aux();

    let y0 = Vector::from_slice(&[7_000_000.0, 0.0, 0.0, 0.0, 7_546.0, 0.0]);
    let eph = ephemeris(&y0, 540, 10.0, &aux, &tables);
    assert_eq!(eph.len(), 541);

    let r0 = y0.slice(0, 2).norm();
    let v0 = y0.slice(3, 5).norm();
    let energy0 = 0.5 * v0 * v0 - GM_EARTH / r0;

    for state in &eph {
        let r = state.slice(0, 2).norm();
        let v = state.slice(3, 5).norm();
        let energy = 0.5 * v * v - GM_EARTH / r;

        assert_relative_eq!(r, r0, max_relative = 1e-3);
        assert_relative_eq!(energy, energy0, max_relative = 1e-6);
    }
}
