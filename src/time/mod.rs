//! Calendar <-> Modified Julian Date conversion and the UTC -> UT1/TT time
//! scale pipeline.
//!
//! The calendar entry points (`mjd`, `cal_dat`) route through `hifitime`,
//! matching the base crate's own epoch handling; everything downstream of
//! them (frame rotations, the force model, the integrator) stays on bare
//! `f64` MJDs, since that is the shape every call site in this crate
//! actually needs.

use crate::eop::EopRecord;
use hifitime::Epoch;

pub const MJD_J2000: f64 = 51544.5;

/// Gregorian calendar date/time -> Modified Julian Date.
pub fn mjd(year: i32, month: i32, day: i32, hour: i32, minute: i32, sec: f64) -> f64 {
    let whole_sec = sec.floor();
    let nanos = ((sec - whole_sec) * 1.0e9).round() as u32;
    let epoch = Epoch::from_gregorian_utc(
        year,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        whole_sec as u8,
        nanos,
    );
    epoch.to_mjd_utc_days()
}

/// Modified Julian Date -> Gregorian calendar date/time.
pub fn cal_dat(mjd_value: f64) -> (i32, i32, i32, i32, i32, f64) {
    let epoch = Epoch::from_mjd_utc(mjd_value);
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    let sec = second as f64 + nanos as f64 * 1.0e-9;
    (year, month as i32, day as i32, hour as i32, minute as i32, sec)
}

/// Julian centuries since J2000.0 TT, given Mjd_TT.
pub fn julian_centuries_tt(mjd_tt: f64) -> f64 {
    (mjd_tt - MJD_J2000) / 36525.0
}

/// `Mjd_UT1 = Mjd_UTC + dUT1(UTC)/86400`.
pub fn mjd_ut1(mjd_utc: f64, eop: &EopRecord) -> f64 {
    mjd_utc + eop.dut1 / 86400.0
}

/// `Mjd_TT = Mjd_UTC + (32.184 + ΔAT)/86400`.
pub fn mjd_tt(mjd_utc: f64, eop: &EopRecord) -> f64 {
    mjd_utc + (32.184 + eop.delta_at) / 86400.0
}
