//! Gravity-coefficient file ingestion.
//!
//! Format: one line per `(n, m)` in triangular order `n = 0..=n_max`,
//! `m = 0..=n`, whitespace-separated `n m Cbar Sbar sigmaC sigmaS` (the
//! GGM03C.txt convention); only `Cbar`/`Sbar` are retained.

use crate::error::{HpopError, Result};
use crate::gravity::Harmonics;
use std::io::BufRead;
use std::path::Path;

fn parse_f64(context: &str, s: &str) -> Result<f64> {
    s.parse::<f64>().map_err(|e| HpopError::Parse {
        context: context.to_string(),
        message: e.to_string(),
    })
}

fn parse_usize(context: &str, s: &str) -> Result<usize> {
    s.parse::<usize>().map_err(|e| HpopError::Parse {
        context: context.to_string(),
        message: e.to_string(),
    })
}

/// Reads a triangular gravity-coefficient file into `(cnm, snm)` compact
/// storage, retaining only rows with `n <= n_max`.
pub fn load_gravity_coefficients<P: AsRef<Path>>(
    path: P,
    n_max: usize,
) -> Result<(Harmonics, Harmonics)> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut cnm = Harmonics::zeros(n_max);
    let mut snm = Harmonics::zeros(n_max);

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(HpopError::Table(format!(
                "gravity coefficient file line {}: expected at least 4 fields, got {}",
                lineno + 1,
                fields.len()
            )));
        }

        let n = parse_usize("gravity coefficient degree", fields[0])?;
        let m = parse_usize("gravity coefficient order", fields[1])?;
        let c = parse_f64("gravity coefficient Cbar", fields[2])?;
        let s = parse_f64("gravity coefficient Sbar", fields[3])?;

        if n > n_max {
            continue;
        }
        cnm.set(n, m, c);
        snm.set(n, m, s);
    }
    Ok((cnm, snm))
}
