//! Propagation integration tests: one module per scenario.

mod two_body;
mod geo_one_day;
mod leo_drag;
