//! Solar radiation pressure with a cylindrical Earth shadow.

use crate::constants::R_EARTH;
use crate::linalg::Vector;

/// `Illumination(r, r_Sun)`: 1.0 if the spacecraft is sunlit (either on the
/// sunward side, or outside the Earth's shadow cylinder), else 0.0.
pub fn illumination(r: &Vector, r_sun: &Vector) -> f64 {
    let e_sun = r_sun.normalize();
    let s = r.dot(&e_sun);
    let in_sunlit_side = s > 0.0;
    let outside_cylinder = r.sub(&e_sun.scale(s)).norm() > R_EARTH;
    if in_sunlit_side || outside_cylinder {
        1.0
    } else {
        0.0
    }
}

/// `AccelSolrad(r, r_Sun, Area, mass, CR, P0, AU)`.
pub fn accel_solrad(
    r: &Vector,
    r_sun: &Vector,
    area: f64,
    mass: f64,
    cr: f64,
    p0: f64,
    au: f64,
) -> Vector {
    let nu = illumination(r, r_sun);
    let d = r.sub(r_sun);
    let factor = nu * cr * (area / mass) * p0 * au * au / d.norm().powi(3);
    d.scale(factor)
}
