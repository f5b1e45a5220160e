//! Walker constellation synthesis: orbital element types, the Kepler
//! equation solver, and `(T, S, F)` constellation generation.

pub mod elements;
pub mod kepler;
pub mod walker;

pub use elements::{elements_to_state, OrbitalElements};
pub use kepler::{mean_to_true, true_to_mean};
pub use walker::generate_walker_constellation;
