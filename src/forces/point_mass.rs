//! Third-body point-mass perturbation.

use crate::linalg::Vector;

/// `AccelPointMass(r, s, GM)`: perturbation from a point mass at `s`,
/// including the indirect term from the body's pull on the Earth.
pub fn accel_point_mass(r: &Vector, s: &Vector, gm: f64) -> Vector {
    let d = r.sub(s);
    let d_norm3 = d.norm().powi(3);
    let s_norm3 = s.norm().powi(3);
    let term = d.scale(1.0 / d_norm3).add(&s.scale(1.0 / s_norm3));
    term.scale(-gm)
}
