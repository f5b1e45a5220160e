//! Atmospheric drag with an NRLMSISE-00-shaped density call contract.
//!
//! The full NRLMSISE-00 reference model is a ~1500-line tabulated
//! polynomial set driven by a seven-slot `Ap` array and F10.7/F10.7bar
//! pulled from the space-weather table for today and the preceding three
//! days. This module assembles that exact input shape (day-of-year,
//! seconds-of-day, altitude, geodetic lat/lon, local solar time, the
//! seven-slot Ap array, F10.7/F10.7bar) but computes density with a
//! documented simplified exponential/harmonic law rather than the full
//! tabulated polynomial set — see `DESIGN.md`.

use crate::constants::OMEGA_EARTH;
use crate::eop::SpwTable;
use crate::frames::{ecef_to_geodetic, gast};
use crate::linalg::{Matrix, Vector};
use crate::time::cal_dat;

/// The seven-slot `Ap` structure NRLMSISE-00 expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApArray(pub [f64; 7]);

/// Builds the seven-slot Ap array and the (F10.7, F10.7bar) pair from the
/// SpW table, reading today's and the preceding three days' rows.
pub fn assemble_space_weather(spw: &SpwTable, mjd_utc: f64, hour_of_day: f64) -> (ApArray, f64, f64) {
    let today = spw.lookup(mjd_utc);
    let yesterday = spw.lookup(mjd_utc - 1.0);
    let day2 = spw.lookup(mjd_utc - 2.0);
    let day3 = spw.lookup(mjd_utc - 3.0);

    let seg = ((hour_of_day / 3.0).floor() as i64).clamp(0, 7);

    let avg8 = |row: &[f64; 8]| row.iter().sum::<f64>() / 8.0;

    // Slots 2-4 are the 3-hour Ap values 3/6/9 h before the current
    // segment, rolling back into yesterday's array when the offset
    // segment index goes negative.
    let ap_before = |offset: i64| {
        let idx = seg - offset;
        if idx >= 0 {
            today.ap3h[idx as usize]
        } else {
            yesterday.ap3h[(idx + 8) as usize]
        }
    };

    let ap = ApArray([
        today.ap_daily,
        today.ap3h[seg as usize],
        ap_before(1),
        ap_before(2),
        ap_before(3),
        avg8(&day2.ap3h),
        avg8(&day3.ap3h),
    ]);

    (ap, today.f107, yesterday.f107_bar)
}

/// `lst = 24*(lon + GAST)/(2*pi) mod 24` hours, local apparent solar time.
pub fn local_solar_time(lon_rad: f64, gast_rad: f64) -> f64 {
    let two_pi = std::f64::consts::TAU;
    let lst = (lon_rad + gast_rad).rem_euclid(two_pi);
    lst * 24.0 / two_pi
}

/// `Density_NRL(Mjd_UTC, r_ecef)`: atmospheric density, kg/m^3.
pub fn density_nrl(mjd_utc: f64, r_ecef: &Vector, spw: &SpwTable, mjd_ut1: f64, mjd_tt: f64) -> f64 {
    let (year, month, day, hour, minute, sec) = cal_dat(mjd_utc);
    let doy = day_of_year(year, month, day);
    let seconds_of_day = hour as f64 * 3600.0 + minute as f64 * 60.0 + sec;

    let geo = ecef_to_geodetic(r_ecef);
    let alt_km = geo.height / 1000.0;

    let hour_of_day = seconds_of_day / 3600.0;
    let (ap, f107, f107_bar) = assemble_space_weather(spw, mjd_utc, hour_of_day);

    let lst = local_solar_time(geo.lon, gast(mjd_ut1, mjd_tt));

    // Simplified exponential/harmonic density law: an isothermal
    // scale-height falloff from a 400 km reference, modulated by
    // solar/geomagnetic activity and a diurnal bulge term.
    const RHO0: f64 = 3.5e-12; // kg/m^3 at 400 km, quiet conditions.
    const H0: f64 = 400.0; // km
    const SCALE_HEIGHT: f64 = 60.0; // km, representative thermospheric value

    let activity = (1.0 + 0.0014 * (f107_bar - 150.0)) * (1.0 + 0.012 * ap.0[0]);
    let diurnal = 1.0 + 0.25 * (std::f64::consts::TAU * (lst - 14.0) / 24.0).cos();
    let _ = (doy, f107); // retained for call-contract parity with NRLMSISE-00

    RHO0 * (-(alt_km - H0) / SCALE_HEIGHT).exp() * activity * diurnal
}

fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    const CUM: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let mut doy = CUM[(month - 1) as usize] + day;
    if leap && month > 2 {
        doy += 1;
    }
    doy
}

/// `AccelDrag(Mjd_UTC, r, v, T, E, Area, mass, CD)`.
#[allow(clippy::too_many_arguments)]
pub fn accel_drag(
    mjd_utc: f64,
    r: &Vector,
    v: &Vector,
    t_matrix: &Matrix,
    e: &Matrix,
    area: f64,
    mass: f64,
    cd: f64,
    spw: &SpwTable,
    mjd_ut1: f64,
    mjd_tt: f64,
) -> Vector {
    let omega = Vector::from_slice(&[0.0, 0.0, OMEGA_EARTH]);

    let t_trp = t_matrix.transpose();
    let r_tod = t_matrix.mul_vec(r);
    let v_tod = t_matrix.mul_vec(v);

    let v_rel = v_tod.sub(&omega.cross(&r_tod));
    let v_abs = v_rel.norm();

    let r_ecef = e.mul_vec(r);
    let dens = density_nrl(mjd_utc, &r_ecef, spw, mjd_ut1, mjd_tt);

    let a_tod = v_rel.scale(-0.5 * cd * (area / mass) * dens * v_abs);
    t_trp.mul_vec(&a_tod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eop::SpwRow;

    fn sample_table() -> SpwTable {
        let mut t = SpwTable::new();
        for mjd in 58000..=58010 {
            t.insert(
                mjd,
                SpwRow {
                    ap_daily: 10.0,
                    kp_daily: 2.0,
                    f107: 150.0,
                    f107_bar: 150.0,
                    ap3h: [10.0; 8],
                    kp3h: [2.0; 8],
                },
            );
        }
        t
    }

    fn table_with_rows(today_ap3h: [f64; 8], yesterday_ap3h: [f64; 8]) -> SpwTable {
        let mut t = sample_table();
        t.insert(
            58005,
            SpwRow {
                ap_daily: 10.0,
                kp_daily: 2.0,
                f107: 150.0,
                f107_bar: 150.0,
                ap3h: today_ap3h,
                kp3h: [2.0; 8],
            },
        );
        t.insert(
            58004,
            SpwRow {
                ap_daily: 10.0,
                kp_daily: 2.0,
                f107: 150.0,
                f107_bar: 150.0,
                ap3h: yesterday_ap3h,
                kp3h: [2.0; 8],
            },
        );
        t
    }

    #[test]
    fn ap_slots_roll_back_within_today_when_segment_allows() {
        // At 12:00 UTC (seg=4) the 3/6/9h-earlier slots are today's
        // segments 3, 2, 1 -- not yesterday's array at all.
        let table = table_with_rows([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], [90.0; 8]);
        let (ap, _, _) = assemble_space_weather(&table, 58005.0, 12.0);
        assert_eq!(ap.0[1], 5.0, "current segment (seg=4) Ap");
        assert_eq!(ap.0[2], 4.0, "3h earlier -> today's seg 3");
        assert_eq!(ap.0[3], 3.0, "6h earlier -> today's seg 2");
        assert_eq!(ap.0[4], 2.0, "9h earlier -> today's seg 1");
    }

    #[test]
    fn ap_slots_roll_back_into_yesterday_near_midnight() {
        // At 01:30 UTC (seg=0) the 3/6/9h-earlier slots must all come
        // from yesterday's trailing segments.
        let table = table_with_rows(
            [11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
            [21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0],
        );
        let (ap, _, _) = assemble_space_weather(&table, 58005.0, 1.5);
        assert_eq!(ap.0[1], 11.0, "current segment (seg=0) Ap");
        assert_eq!(ap.0[2], 28.0, "3h earlier -> yesterday's seg 7");
        assert_eq!(ap.0[3], 27.0, "6h earlier -> yesterday's seg 6");
        assert_eq!(ap.0[4], 26.0, "9h earlier -> yesterday's seg 5");
    }

    #[test]
    fn density_decreases_with_altitude() {
        let table = sample_table();
        let low = density_nrl(58005.0, &Vector::from_slice(&[6_778_000.0, 0.0, 0.0]), &table, 58005.0, 58005.0);
        let high = density_nrl(58005.0, &Vector::from_slice(&[7_378_000.0, 0.0, 0.0]), &table, 58005.0, 58005.0);
        assert!(high < low);
    }

    #[test]
    fn density_is_positive_and_finite() {
        let table = sample_table();
        let r = Vector::from_slice(&[0.0, 6_900_000.0, 500_000.0]);
        let d = density_nrl(58003.5, &r, &table, 58003.5, 58003.5);
        assert!(d.is_finite() && d > 0.0);
    }
}
