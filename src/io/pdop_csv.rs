//! PDOP grid CSV emission.
//!
//! Writes a `time_step,lat,lon,pdop` header and one row per grid cell via
//! `csv::Writer`.

use crate::error::Result;
use crate::pdop::PdopCell;
use std::path::Path;

/// Writes `cells` as a CSV with header `time_step,lat,lon,pdop`. `NaN`
/// cells render as the literal text `NaN`, matching the original writer.
pub fn write_pdop_csv<P: AsRef<Path>>(path: P, cells: &[PdopCell]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["time_step", "lat", "lon", "pdop"])?;
    for cell in cells {
        writer.write_record(&[
            cell.time_step.to_string(),
            cell.lat_deg.to_string(),
            cell.lon_deg.to_string(),
            cell.pdop.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
