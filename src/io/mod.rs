//! File I/O glue: gravity-coefficient and initial-state ingestion, and
//! JSON/CSV/text ephemeris + PDOP emission.
//!
//! EOP/SpW table parsing lives in [`crate::eop::parse`], which predates
//! this module; everything specific to the propagator's own file formats
//! is collected here instead.

pub mod ephemeris;
pub mod gravity_file;
pub mod init_state;
pub mod pdop_csv;

pub use ephemeris::{
    build_ephemeris_record, write_ecef_text, write_inertial_text, write_json_ephemeris,
    EphemerisRecord,
};
pub use gravity_file::load_gravity_coefficients;
pub use init_state::{load_initial_state, InitialState};
pub use pdop_csv::write_pdop_csv;
