//! Propagates a single circular LEO orbit for one hour with every
//! perturbation switched off, then prints the radius at each 10-minute
//! mark so you can see it holds steady.

extern crate log;
extern crate pretty_env_logger as pel;

use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::eop::{EopTable, SpwTable};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::gravity::Harmonics;
use hpop::linalg::Vector;
use hpop::propagator::ephemeris;

fn main() {
    pel::init();

    let mut cnm = Harmonics::zeros(0);
    cnm.set(0, 0, 1.0);
    let snm = Harmonics::zeros(0);
    let eop = EopTable::new();
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
        mjd_utc: 60000.0,
        area_drag: 0.0,
        area_solar: 0.0,
        mass: 1000.0,
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
    };

    // 700 km circular orbit.
    const A: f64 = R_EARTH + 700_000.0;
    let v_circ = (GM_EARTH / A).sqrt();
    let y0 = Vector::from_slice(&[A, 0.0, 0.0, 0.0, v_circ, 0.0]);

    log::info!("propagating a {:.0} km circular orbit for one hour", A / 1000.0);

    let eph = ephemeris(&y0, 360, 10.0, &aux, &tables);

    println!("{:>8}  {:>14}", "minute", "radius_km");
    for minute in (0..=60).step_by(10) {
        let step = minute * 6;
        let r = eph[step].slice(0, 2).norm();
        println!("{:>8}  {:>14.3}", minute, r / 1000.0);
    }
}
