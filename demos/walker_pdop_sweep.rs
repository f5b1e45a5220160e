//! Builds a small Walker constellation, propagates it for two time steps,
//! converts to ECEF and runs a coarse global PDOP/visibility grid sweep —
//! the same pipeline `hpop-cli scene_edit Walker` runs, condensed into a
//! single in-memory example.

extern crate log;
extern crate pretty_env_logger as pel;

use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::constellation::{elements_to_state, generate_walker_constellation, OrbitalElements};
use hpop::eop::{EopTable, SpwTable};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::frames::eci_to_ecef;
use hpop::gravity::Harmonics;
use hpop::linalg::Vector;
use hpop::pdop::{compute_grid_pdop, GridBounds};
use hpop::propagator::ephemeris;
use hpop::time::{mjd, mjd_tt, mjd_ut1};

const STEP_SECONDS: f64 = 30.0;
const N_STEP: usize = 2;

fn main() {
    pel::init();

    let seed = OrbitalElements {
        a: 27_878.0,
        e: 0.0,
        i: 55.0,
        raan: 0.0,
        argp: 0.0,
        nu: 0.0,
    };
    let constellation = generate_walker_constellation(&seed, 24, 3, 1);
    log::info!("seeded {} satellites", constellation.len());

    let gm_km = GM_EARTH / 1.0e9;
    let epoch_mjd_utc = mjd(2024, 1, 1, 0, 0, 0.0);

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
        mjd_utc: epoch_mjd_utc,
        area_drag: 55.64,
        area_solar: 88.4,
        mass: 8000.0,
        cr: 1.0,
        cd: 2.7,
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

    let ecef_tracks: Vec<Vec<Vector>> = constellation
        .iter()
        .map(|el| {
            let y0 = elements_to_state(el, gm_km).scale(1000.0);
            let eph = ephemeris(&y0, N_STEP, STEP_SECONDS, &aux, &tables);
            eph.iter()
                .enumerate()
                .map(|(i, state)| {
                    let t_mjd_utc = epoch_mjd_utc + i as f64 * STEP_SECONDS / 86400.0;
                    let eop_row = tables.eop.lookup(t_mjd_utc);
                    let ut1 = mjd_ut1(t_mjd_utc, &eop_row);
                    let tt = mjd_tt(t_mjd_utc, &eop_row);
                    let e = eci_to_ecef(t_mjd_utc, ut1, tt, &eop_row);
                    e.mul_vec(&state.slice(0, 2))
                })
                .collect()
        })
        .collect();

    let bounds = GridBounds {
        lat_start: -90.0,
        lat_end: 90.0,
        lat_step: 10.0,
        lon_start: -180.0,
        lon_end: 180.0,
        lon_step: 10.0,
        alt_km: 0.0,
    };
    let (cells, _visible_times) = compute_grid_pdop(&ecef_tracks, N_STEP + 1, &bounds, 5.0);

    let finite: Vec<f64> = cells.iter().map(|c| c.pdop).filter(|p| p.is_finite()).collect();
    let worst = finite.iter().cloned().fold(0.0_f64, f64::max);
    let best = finite
        .iter()
        .cloned()
        .fold(f64::INFINITY, f64::min);

    println!("grid cells: {}", cells.len());
    println!("cells with a finite PDOP: {}", finite.len());
    println!("best PDOP:  {best:.3}");
    println!("worst PDOP: {worst:.3}");
}
