//! PDOP grid-analysis integration tests.

mod grid_sanity;
