//! Schwarzschild post-Newtonian relativistic correction.

use crate::constants::{C_LIGHT, GM_EARTH};
use crate::linalg::Vector;

/// `Relativity(r, v)`.
pub fn relativity(r: &Vector, v: &Vector) -> Vector {
    let r_sat = r.norm();
    let v_sat = v.norm();
    let factor = GM_EARTH / (C_LIGHT * C_LIGHT * r_sat.powi(3));
    let term = r.scale(4.0 * GM_EARTH / r_sat - v_sat * v_sat)
        .add(&v.scale(4.0 * r.dot(v)));
    term.scale(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_is_tiny_for_leo() {
        let r = Vector::from_slice(&[6_778_000.0, 0.0, 0.0]);
        let v = Vector::from_slice(&[0.0, 7_668.0, 0.0]);
        let a = relativity(&r, &v);
        assert!(a.norm() < 1e-7);
        assert!(a.norm() > 0.0);
    }
}
