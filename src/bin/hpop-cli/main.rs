//! `hpop-cli`: two entry points —
//! `scene_edit {BEIDOU|GPS|GLONASS|GALILEO|Walker [...]}` for constellation
//! generation and analysis, and
//! `Perturbation_force YYYY MM DD HH mm SS a e i Omega omega nu n m
//! area_drag mass cd cr area_solar` for single-satellite propagation —
//! built on `clap`'s derive API instead of manual `argv` parsing.

use clap::{Parser, Subcommand};
use hpop::constants::{GM_EARTH, R_EARTH};
use hpop::constellation::{elements_to_state, generate_walker_constellation, OrbitalElements};
use hpop::eop::{load_eop_table, load_spw_table};
use hpop::forces::{AuxParam, ForceModelTables};
use hpop::frames::eci_to_ecef;
use hpop::io::{
    build_ephemeris_record, load_gravity_coefficients, load_initial_state, write_ecef_text,
    write_json_ephemeris, write_pdop_csv,
};
use hpop::linalg::Vector;
use hpop::pdop::{compute_grid_pdop, contiguous_intervals, format_access_report, GridBounds};
use hpop::propagator::ephemeris;
use hpop::time::{mjd, mjd_tt, mjd_ut1};
use hpop::{HpopError, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

const GGM03C_PATH: &str = "GGM03C.txt";
const EOP_PATH: &str = "eop.txt";
const SPW_PATH: &str = "spw.txt";
const N_MAX: usize = 360;

#[derive(Parser)]
#[command(name = "hpop-cli", about = "High-precision orbit propagator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(name = "scene_edit")]
    SceneEdit {
        #[command(subcommand)]
        kind: SceneEditKind,
    },
    #[command(name = "Perturbation_force")]
    PerturbationForce {
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        min: i32,
        sec: f64,
        a: f64,
        e: f64,
        i: f64,
        raan: f64,
        argp: f64,
        nu: f64,
        n: usize,
        m: usize,
        area_drag: f64,
        mass: f64,
        cd: f64,
        cr: f64,
        area_solar: f64,
    },
}

#[derive(Subcommand)]
enum SceneEditKind {
    #[command(name = "BEIDOU")]
    Beidou,
    #[command(name = "GPS")]
    Gps,
    #[command(name = "GLONASS")]
    Glonass,
    #[command(name = "GALILEO")]
    Galileo,
    Walker {
        a: f64,
        e: f64,
        i: f64,
        raan: f64,
        argp: f64,
        nu: f64,
        t: u32,
        s: u32,
        f: u32,
    },
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::SceneEdit { kind } => run_scene_edit(kind),
        Command::PerturbationForce {
            year,
            month,
            day,
            hour,
            min,
            sec,
            a,
            e,
            i,
            raan,
            argp,
            nu,
            n,
            m,
            area_drag,
            mass,
            cd,
            cr,
            area_solar,
        } => run_perturbation_force(PerturbationForceArgs {
            year,
            month,
            day,
            hour,
            min,
            sec,
            a,
            e,
            i,
            raan,
            argp,
            nu,
            n,
            m,
            area_drag,
            mass,
            cd,
            cr,
            area_solar,
        }),
    };

    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn scene_edit_label(kind: &SceneEditKind) -> &'static str {
    match kind {
        SceneEditKind::Beidou => "BEIDOU",
        SceneEditKind::Gps => "GPS",
        SceneEditKind::Glonass => "GLONASS",
        SceneEditKind::Galileo => "GALILEO",
        SceneEditKind::Walker { .. } => "Walker",
    }
}

/// Loads the per-satellite epoch/state-vector list for a `scene_edit`
/// run: a named constellation's on-disk initial-state file, or a
/// freshly-synthesized Walker constellation (kept in memory rather than
/// round-tripped through the intermediate `Walker_J2000_InitState.txt`
/// file the original writes and immediately rereads).
fn constellation_init_states(kind: &SceneEditKind) -> Result<(f64, Vec<(String, Vector)>)> {
    match kind {
        SceneEditKind::Beidou => load_named_init_state("BEIDOU_J2000_InitState.txt"),
        SceneEditKind::Gps => load_named_init_state("GPS_J2000_InitState.txt"),
        SceneEditKind::Glonass => load_named_init_state("GLONASS_J2000_InitState.txt"),
        SceneEditKind::Galileo => load_named_init_state("Galileo_J2000_InitState.txt"),
        SceneEditKind::Walker {
            a,
            e,
            i,
            raan,
            argp,
            nu,
            t,
            s,
            f,
        } => {
            if *s == 0 || t % s != 0 {
                return Err(HpopError::Cli(format!(
                    "Walker parameters invalid: S must divide T (T={t}, S={s})"
                )));
            }
            if *f >= *t {
                return Err(HpopError::Cli(format!(
                    "Walker parameters invalid: F must satisfy 0 <= F < T (T={t}, F={f})"
                )));
            }

            let seed = OrbitalElements {
                a: *a,
                e: *e,
                i: *i,
                raan: *raan,
                argp: *argp,
                nu: *nu,
            };
            // The Walker CLI arguments carry no epoch (the original reads
            // one back out of the init-state file it writes for itself);
            // a fixed epoch is used here since Walker orbits are seeded
            // directly rather than round-tripped through that file.
            let epoch_mjd_utc = mjd(2024, 1, 1, 0, 0, 0.0);
            let gm_km = GM_EARTH / 1.0e9;
            let states = generate_walker_constellation(&seed, *t, *s, *f)
                .iter()
                .enumerate()
                .map(|(idx, el)| {
                    let rv_km = elements_to_state(el, gm_km);
                    (format!("Walker-{:03}", idx + 1), rv_km.scale(1000.0))
                })
                .collect();
            Ok((epoch_mjd_utc, states))
        }
    }
}

fn load_named_init_state(filename: &str) -> Result<(f64, Vec<(String, Vector)>)> {
    let path = PathBuf::from("sat_init_txt").join(filename);
    let state = load_initial_state(&path)?;
    Ok((state.mjd_utc, state.satellites))
}

/// `scene_edit`: propagates a named constellation (or a freshly-seeded
/// Walker one) and emits the JSON/ECEF/PDOP/visibility artifacts.
fn run_scene_edit(kind: SceneEditKind) -> Result<()> {
    let label = scene_edit_label(&kind);
    let (epoch_mjd_utc, satellites) = constellation_init_states(&kind)?;

    let (cnm, snm) = load_gravity_coefficients(GGM03C_PATH, N_MAX)?;
    let eop = load_eop_table(EOP_PATH)?;
    let spw = load_spw_table(SPW_PATH)?;
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
        sun: false,
        moon: false,
        srad: false,
        drag: false,
        solid_earth_tides: false,
        ocean_tides: false,
        relativity: false,
    };

    const STEP_SECONDS: f64 = 30.0;
    const N_STEP: usize = 60;

    // One propagation task per satellite, scheduled across `rayon`'s
    // work-stealing par-iterator.
    let results: Vec<(String, Vec<Vector>)> = satellites
        .par_iter()
        .map(|(name, y0)| {
            let eph = ephemeris(y0, N_STEP, STEP_SECONDS, &aux, &tables);
            (name.clone(), eph)
        })
        .collect();

    let ecef_dir = PathBuf::from(format!("{label}_ecef"));
    std::fs::create_dir_all(&ecef_dir)?;

    let mut records = BTreeMap::new();
    let mut ecef_tracks = Vec::with_capacity(results.len());
    for (name, eph) in &results {
        records.insert(
            name.clone(),
            build_ephemeris_record(epoch_mjd_utc, STEP_SECONDS, eph),
        );

        let ecef_eph: Vec<Vector> = eph
            .iter()
            .enumerate()
            .map(|(i, state)| {
                let t_mjd_utc = epoch_mjd_utc + i as f64 * STEP_SECONDS / 86400.0;
                let eop_row = tables.eop.lookup(t_mjd_utc);
                let ut1 = mjd_ut1(t_mjd_utc, &eop_row);
                let tt = mjd_tt(t_mjd_utc, &eop_row);
                let e = eci_to_ecef(t_mjd_utc, ut1, tt, &eop_row);
                let r = e.mul_vec(&state.slice(0, 2));
                let v = e.mul_vec(&state.slice(3, 5));
                Vector::stack(&r, &v)
            })
            .collect();

        write_ecef_text(
            ecef_dir.join(format!("{name}_ECEF.txt")),
            epoch_mjd_utc,
            STEP_SECONDS,
            &ecef_eph,
        )?;
        ecef_tracks.push(ecef_eph);
    }

    write_json_ephemeris(format!("{label}All_J2000_Ephemeris.json"), &records)?;
    log::info!("wrote {} J2000 ephemerides as JSON", records.len());

    // The PDOP/visibility walk only inspects the first two propagation
    // steps, matching the original's literal `NUM_Step = 2`.
    let bounds = GridBounds {
        lat_start: -90.0,
        lat_end: 90.0,
        lat_step: 10.0,
        lon_start: -180.0,
        lon_end: 180.0,
        lon_step: 10.0,
        alt_km: 0.0,
    };
    let pdop_steps = 2.min(N_STEP + 1);
    let (cells, visible_times) = compute_grid_pdop(&ecef_tracks, pdop_steps, &bounds, 0.0);
    write_pdop_csv(format!("{label}_pdop_grid_all.csv"), &cells)?;

    let mut report = String::new();
    for (idx, steps) in visible_times.iter().enumerate() {
        let intervals = contiguous_intervals(steps);
        report.push_str(&format_access_report(
            &format!("Satellite {}", idx + 1),
            &intervals,
            epoch_mjd_utc,
            STEP_SECONDS,
        ));
    }
    std::fs::write(format!("{label}_sat_visibility.txt"), report)?;

    log::info!("wrote PDOP grid and visibility report for {label}");
    Ok(())
}

struct PerturbationForceArgs {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    min: i32,
    sec: f64,
    a: f64,
    e: f64,
    i: f64,
    raan: f64,
    argp: f64,
    nu: f64,
    n: usize,
    m: usize,
    area_drag: f64,
    mass: f64,
    cd: f64,
    cr: f64,
    area_solar: f64,
}

/// `Perturbation_force`: propagates a single osculating-element seed with
/// solar-radiation-pressure and drag enabled, writing a single JSON
/// ephemeris document.
fn run_perturbation_force(args: PerturbationForceArgs) -> Result<()> {
    let epoch_mjd_utc = mjd(args.year, args.month, args.day, args.hour, args.min, args.sec);

    let orbit = OrbitalElements {
        a: args.a,
        e: args.e,
        i: args.i,
        raan: args.raan,
        argp: args.argp,
        nu: args.nu,
    };
    let gm_km = GM_EARTH / 1.0e9;
    let y0 = elements_to_state(&orbit, gm_km).scale(1000.0);

    let (cnm, snm) = load_gravity_coefficients(GGM03C_PATH, N_MAX)?;
    let eop = load_eop_table(EOP_PATH)?;
    let spw = load_spw_table(SPW_PATH)?;
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
        area_drag: args.area_drag,
        area_solar: args.area_solar,
        mass: args.mass,
        cr: args.cr,
        cd: args.cd,
        n: args.n,
        m: args.m,
        sun: false,
        moon: false,
        srad: true,
        drag: true,
        solid_earth_tides: false,
        ocean_tides: false,
        relativity: false,
    };

    const STEP_SECONDS: f64 = 30.0;
    const N_STEP: usize = 2;
    let eph = ephemeris(&y0, N_STEP, STEP_SECONDS, &aux, &tables);
    let record = build_ephemeris_record(epoch_mjd_utc, STEP_SECONDS, &eph);

    let file = std::fs::File::create("Perturbation_forceAll_J2000_Ephemeris.json")?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &record)?;
    log::info!("wrote perturbation-force ephemeris as JSON");
    Ok(())
}
