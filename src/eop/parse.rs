//! Plain-text EOP/SpW table ingestion.
//!
//! Format: one row per day, whitespace-separated fields, `#`-prefixed lines
//! ignored as comments. A simplified stand-in for the IERS Bulletin-A /
//! CelesTrak space-weather formats.
//!
//! EOP columns: `mjd dut1 lod xp yp dpsi deps dx dy delta_at`
//! SpW columns: `mjd ap_daily kp_daily f107 f107_bar ap3h[0..8] kp3h[0..8]`

use super::{EopRow, EopTable, SpwRow, SpwTable};
use crate::error::{HpopError, Result};
use std::io::BufRead;
use std::path::Path;

fn parse_fields(line: &str) -> Option<Vec<f64>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split_whitespace()
        .map(|tok| tok.parse::<f64>().ok())
        .collect()
}

pub fn load_eop_table<P: AsRef<Path>>(path: P) -> Result<EopTable> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut table = EopTable::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(fields) = parse_fields(&line) else {
            continue;
        };
        if fields.len() < 10 {
            return Err(HpopError::Table(format!(
                "EOP table line {}: expected 10 fields, got {}",
                lineno + 1,
                fields.len()
            )));
        }
        table.insert(
            fields[0] as i32,
            EopRow {
                dut1: fields[1],
                lod: fields[2],
                xp: fields[3],
                yp: fields[4],
                dpsi: fields[5],
                deps: fields[6],
                dx: fields[7],
                dy: fields[8],
                delta_at: fields[9],
            },
        );
    }
    Ok(table)
}

pub fn load_spw_table<P: AsRef<Path>>(path: P) -> Result<SpwTable> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut table = SpwTable::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(fields) = parse_fields(&line) else {
            continue;
        };
        if fields.len() < 21 {
            return Err(HpopError::Table(format!(
                "SpW table line {}: expected 21 fields, got {}",
                lineno + 1,
                fields.len()
            )));
        }
        let mut ap3h = [0.0; 8];
        let mut kp3h = [0.0; 8];
        ap3h.copy_from_slice(&fields[4..12]);
        kp3h.copy_from_slice(&fields[13..21]);
        table.insert(
            fields[0] as i32,
            SpwRow {
                ap_daily: fields[1],
                kp_daily: fields[2],
                f107: fields[3],
                f107_bar: fields[12],
                ap3h,
                kp3h,
            },
        );
    }
    Ok(table)
}
