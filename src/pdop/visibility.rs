//! Contiguous visible-time-step extraction and STK-style access report.
//!
//! Walks a satellite's visible time steps into `Start:`/`Stop:` runs,
//! reusing `time::cal_dat` for calendar formatting rather than hand-rolled
//! carry arithmetic.

use crate::time::cal_dat;

/// A closed step-index interval `[start_step, stop_step]` of contiguous
/// visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityInterval {
    pub start_step: usize,
    pub stop_step: usize,
}

/// Collapses a sorted, deduplicated list of visible step indices into
/// contiguous `[start, stop]` runs.
pub fn contiguous_intervals(steps: &[usize]) -> Vec<VisibilityInterval> {
    let mut out = Vec::new();
    let mut iter = steps.iter().copied();
    let Some(first) = iter.next() else {
        return out;
    };

    let mut start = first;
    let mut prev = first;
    for step in iter {
        if step != prev + 1 {
            out.push(VisibilityInterval {
                start_step: start,
                stop_step: prev,
            });
            start = step;
        }
        prev = step;
    }
    out.push(VisibilityInterval {
        start_step: start,
        stop_step: prev,
    });
    out
}

/// Renders the STK-style `Start:`/`Stop:` access report for one
/// satellite's visibility intervals, given the propagation epoch and step
/// size.
pub fn format_access_report(
    satellite_label: &str,
    intervals: &[VisibilityInterval],
    epoch_mjd_utc: f64,
    step_seconds: f64,
) -> String {
    let mut report = format!("{satellite_label}\n");
    if intervals.is_empty() {
        report.push_str("  No access intervals.\n\n");
        return report;
    }
    for iv in intervals {
        let start_ts =
            format_timestamp(epoch_mjd_utc + iv.start_step as f64 * step_seconds / 86400.0);
        let stop_ts =
            format_timestamp(epoch_mjd_utc + iv.stop_step as f64 * step_seconds / 86400.0);
        report.push_str(&format!("Start: {start_ts}\n"));
        report.push_str(&format!("Stop:  {stop_ts}\n\n"));
    }
    report
}

fn format_timestamp(mjd_utc: f64) -> String {
    let (y, mo, d, h, mi, s) = cal_dat(mjd_utc);
    format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{:02}", s.round() as i32)
}
