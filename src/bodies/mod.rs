//! Closed-form low-precision Sun/Moon position series.
//!
//! Both follow the standard low-precision Montenbruck/Pfleger forms
//! (*Astronomy on the Personal Computer*) rather than a full ephemeris
//! interpolation; see `DESIGN.md` for the accuracy tradeoff.

mod moon;
mod sun;

pub use moon::moon_pos;
pub use sun::sun_pos;
