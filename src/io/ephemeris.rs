//! JSON and text ephemeris emission, including a dense per-step inertial
//! text form alongside the ECEF one.
//!
//! JSON output goes through `serde_json`; the text forms reproduce the
//! fixed-width `%20.6f`-padded columnar layout satellite ground tools
//! expect.

use crate::error::Result;
use crate::linalg::Vector;
use crate::time::cal_dat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// One satellite's JSON ephemeris entry: `{epoch, cartesian: [[t_sec, x,
/// y, z, vx, vy, vz], ...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct EphemerisRecord {
    pub epoch: String,
    pub cartesian: Vec<[f64; 7]>,
}

/// Builds an [`EphemerisRecord`] from a dense per-step state history,
/// stamping the epoch string and `t_sec` column from `epoch_mjd_utc`/
/// `step_seconds`.
pub fn build_ephemeris_record(
    epoch_mjd_utc: f64,
    step_seconds: f64,
    eph: &[Vector],
) -> EphemerisRecord {
    let (y, mo, d, h, mi, s) = cal_dat(epoch_mjd_utc);
    let epoch = format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{:02.0}Z", s.round());
    let cartesian = eph
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let t_sec = i as f64 * step_seconds;
            [
                t_sec, state[0], state[1], state[2], state[3], state[4], state[5],
            ]
        })
        .collect();
    EphemerisRecord { epoch, cartesian }
}

/// Writes a map of satellite name -> [`EphemerisRecord`] as a single JSON
/// object, one key per satellite.
pub fn write_json_ephemeris<P: AsRef<Path>>(
    path: P,
    records: &BTreeMap<String, EphemerisRecord>,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Writes one satellite's ECEF ephemeris as text: one line per step,
/// `YYYY-MM-DD HH:MM:SS.sss x y z vx vy vz`, 6-decimal, meters and m/s.
pub fn write_ecef_text<P: AsRef<Path>>(
    path: P,
    epoch_mjd_utc: f64,
    step_seconds: f64,
    eph_ecef: &[Vector],
) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for (i, state) in eph_ecef.iter().enumerate() {
        let t_mjd = epoch_mjd_utc + i as f64 * step_seconds / 86400.0;
        let (y, mo, d, h, mi, s) = cal_dat(t_mjd);
        writeln!(
            file,
            "{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:06.3} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
            state[0], state[1], state[2], state[3], state[4], state[5]
        )?;
    }
    Ok(())
}

/// Writes the dense per-step inertial (EME2000) ephemeris as text, in the
/// same `%20.6f`-padded tab-separated layout as the ECEF writer but
/// without the ECI -> ECEF rotation.
pub fn write_inertial_text<P: AsRef<Path>>(
    path: P,
    epoch_mjd_utc: f64,
    step_seconds: f64,
    eph: &[Vector],
) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for (i, state) in eph.iter().enumerate() {
        let t_mjd = epoch_mjd_utc + i as f64 * step_seconds / 86400.0;
        let (y, mo, d, h, mi, s) = cal_dat(t_mjd);
        write!(file, "{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:06.3}\t")?;
        for j in 0..6 {
            write!(file, "{:20.6}\t", state[j])?;
        }
        writeln!(file)?;
    }
    Ok(())
}
