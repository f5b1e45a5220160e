//! Initial-state file ingestion.
//!
//! Format: first line `YYYY/MM/DD-HH:MM:SS.sss` UTC epoch, then per
//! satellite a name token followed by six whitespace-separated doubles
//! (`x y z vx vy vz`, km and km/s, EME2000), scaled to meters on ingest.

use crate::error::{HpopError, Result};
use crate::linalg::Vector;
use crate::time::mjd;
use std::io::BufRead;
use std::path::Path;

/// One parsed initial-state file: the UTC epoch as an MJD, plus each
/// satellite's name and six-component state vector already scaled from
/// km/km-s to meters/m-s.
pub struct InitialState {
    pub mjd_utc: f64,
    pub satellites: Vec<(String, Vector)>,
}

pub fn load_initial_state<P: AsRef<Path>>(path: P) -> Result<InitialState> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut lines = reader.lines();

    let epoch_line = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(HpopError::Parse {
                context: "initial-state file".to_string(),
                message: "missing epoch line".to_string(),
            })
        }
    };
    let (year, month, day, hour, minute, second) = parse_epoch(&epoch_line)?;
    let mjd_utc = mjd(year, month, day, hour, minute, second);

    let mut tokens: Vec<String> = Vec::new();
    for line in lines {
        tokens.extend(line?.split_whitespace().map(str::to_string));
    }

    let mut satellites = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let name = tokens[i].clone();
        i += 1;
        if i + 6 > tokens.len() {
            return Err(HpopError::Table(format!(
                "initial-state file: satellite '{name}' is missing state components"
            )));
        }
        let mut comps = [0.0; 6];
        for (j, comp) in comps.iter_mut().enumerate() {
            let parsed = tokens[i + j].parse::<f64>().map_err(|e| HpopError::Parse {
                context: format!("initial state for {name}"),
                message: e.to_string(),
            })?;
            *comp = parsed * 1000.0;
        }
        i += 6;
        satellites.push((name, Vector::from_slice(&comps)));
    }

    Ok(InitialState {
        mjd_utc,
        satellites,
    })
}

fn parse_epoch(line: &str) -> Result<(i32, i32, i32, i32, i32, f64)> {
    let line = line.trim();
    let (date, time) = line.split_once('-').ok_or_else(|| HpopError::Parse {
        context: "epoch line".to_string(),
        message: format!("expected 'YYYY/MM/DD-HH:MM:SS.sss', got '{line}'"),
    })?;

    let date_parts: Vec<&str> = date.split('/').collect();
    let [y, mo, d]: [&str; 3] = date_parts.try_into().map_err(|_| HpopError::Parse {
        context: "epoch date".to_string(),
        message: format!("expected 'YYYY/MM/DD', got '{date}'"),
    })?;

    let time_parts: Vec<&str> = time.split(':').collect();
    let [h, mi, s]: [&str; 3] = time_parts.try_into().map_err(|_| HpopError::Parse {
        context: "epoch time".to_string(),
        message: format!("expected 'HH:MM:SS.sss', got '{time}'"),
    })?;

    let parse_i32 = |s: &str, ctx: &str| -> Result<i32> {
        s.parse::<i32>().map_err(|e| HpopError::Parse {
            context: ctx.to_string(),
            message: e.to_string(),
        })
    };
    let second = s.parse::<f64>().map_err(|e| HpopError::Parse {
        context: "epoch second".to_string(),
        message: e.to_string(),
    })?;

    Ok((
        parse_i32(y, "epoch year")?,
        parse_i32(mo, "epoch month")?,
        parse_i32(d, "epoch day")?,
        parse_i32(h, "epoch hour")?,
        parse_i32(mi, "epoch minute")?,
        second,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_epoch_and_satellites() {
        let path = std::env::temp_dir().join(format!("hpop-init-test-{}.txt", std::process::id()));
        std::fs::write(
            &path,
            "2024/06/15-03:27:41.250\nSAT-1 7000.0 0.0 0.0 0.0 7.5 1.0\n",
        )
        .unwrap();
        let state = load_initial_state(&path).unwrap();
        assert_eq!(state.satellites.len(), 1);
        assert_eq!(state.satellites[0].0, "SAT-1");
        assert!((state.satellites[0].1[0] - 7_000_000.0).abs() < 1e-6);
        assert!((state.satellites[0].1[4] - 7_500.0).abs() < 1e-6);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn parses_multiple_satellites_across_lines() {
        let path = std::env::temp_dir().join(format!("hpop-init-test2-{}.txt", std::process::id()));
        std::fs::write(
            &path,
            "2024/01/01-00:00:00.0\nA\n1.0 2.0 3.0\n4.0 5.0 6.0\nB 7.0 8.0 9.0 10.0 11.0 12.0\n",
        )
        .unwrap();
        let state = load_initial_state(&path).unwrap();
        assert_eq!(state.satellites.len(), 2);
        assert_eq!(state.satellites[1].0, "B");
        assert!((state.satellites[1].1[5] - 12_000.0).abs() < 1e-6);
        std::fs::remove_file(&path).ok();
    }
}
