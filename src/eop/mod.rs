//! Earth Orientation Parameter and space-weather tables.
//!
//! Tables are loaded once at process start and treated as read-only,
//! process-wide state. Every lookup returns an owned record rather than
//! mutating shared globals, so the fleet-parallel propagation workflow has
//! no shared mutable state to race on.

mod parse;

pub use parse::{load_eop_table, load_spw_table};

use log::warn;
use std::collections::BTreeMap;

/// One row of the Earth Orientation Parameter table, keyed by integer MJD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EopRow {
    pub dut1: f64,
    pub lod: f64,
    pub xp: f64,
    pub yp: f64,
    pub dpsi: f64,
    pub deps: f64,
    pub dx: f64,
    pub dy: f64,
    pub delta_at: f64,
}

/// The interpolated result of an EOP lookup at an arbitrary MJD.
pub type EopRecord = EopRow;

/// One row of the space-weather table, keyed by integer MJD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpwRow {
    pub ap_daily: f64,
    pub kp_daily: f64,
    pub f107: f64,
    pub f107_bar: f64,
    pub ap3h: [f64; 8],
    pub kp3h: [f64; 8],
}

pub type SpwRecord = SpwRow;

/// Indexed, linearly-interpolated EOP table.
#[derive(Debug, Clone, Default)]
pub struct EopTable {
    rows: BTreeMap<i32, EopRow>,
}

impl EopTable {
    pub fn new() -> Self {
        EopTable {
            rows: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, mjd: i32, row: EopRow) {
        self.rows.insert(mjd, row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Linear interpolation between the two nearest daily rows. Queries
    /// beyond the loaded span clamp to the nearest edge row and log a
    /// warning rather than silently returning zero.
    pub fn lookup(&self, mjd_utc: f64) -> EopRecord {
        if self.rows.is_empty() {
            warn!("EOP table empty; returning zeroed record for Mjd_UTC={mjd_utc}");
            return EopRecord::default();
        }

        let floor = mjd_utc.floor() as i32;
        let frac = mjd_utc - floor as f64;

        let first = *self.rows.keys().next().unwrap();
        let last = *self.rows.keys().next_back().unwrap();

        if floor < first {
            warn!("Mjd_UTC={mjd_utc} precedes EOP table start ({first}); clamping");
            return self.rows[&first];
        }
        if floor >= last {
            warn!("Mjd_UTC={mjd_utc} is past EOP table end ({last}); clamping");
            return self.rows[&last];
        }

        let row0 = self.rows[&floor];
        let row1 = self.rows[&(floor + 1)];
        interpolate_eop(&row0, &row1, frac)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn interpolate_eop(a: &EopRow, b: &EopRow, t: f64) -> EopRow {
    EopRow {
        dut1: lerp(a.dut1, b.dut1, t),
        lod: lerp(a.lod, b.lod, t),
        xp: lerp(a.xp, b.xp, t),
        yp: lerp(a.yp, b.yp, t),
        dpsi: lerp(a.dpsi, b.dpsi, t),
        deps: lerp(a.deps, b.deps, t),
        dx: lerp(a.dx, b.dx, t),
        dy: lerp(a.dy, b.dy, t),
        // Leap seconds step discontinuously; never interpolate them.
        delta_at: a.delta_at,
    }
}

/// Indexed space-weather table, keyed by integer MJD.
#[derive(Debug, Clone, Default)]
pub struct SpwTable {
    rows: BTreeMap<i32, SpwRow>,
}

impl SpwTable {
    pub fn new() -> Self {
        SpwTable {
            rows: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, mjd: i32, row: SpwRow) {
        self.rows.insert(mjd, row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Nearest-row lookup for the given (possibly fractional) MJD, clamped
    /// to the loaded span.
    pub fn lookup(&self, mjd_utc: f64) -> SpwRecord {
        if self.rows.is_empty() {
            warn!("SpW table empty; returning zeroed record for Mjd_UTC={mjd_utc}");
            return SpwRecord::default();
        }
        let day = mjd_utc.round() as i32;
        let first = *self.rows.keys().next().unwrap();
        let last = *self.rows.keys().next_back().unwrap();
        let clamped = day.clamp(first, last);
        if clamped != day {
            warn!("Mjd_UTC={mjd_utc} outside SpW table span [{first}, {last}]; clamping");
        }
        self.rows[&clamped]
    }
}
