//! Classical Keplerian elements and the PQW -> ECI state-vector conversion.

use crate::linalg::{Matrix, Vector};

/// Classical orbital elements. Angles in degrees, `a` in km; `nu` is true
/// anomaly — see `DESIGN.md` for why the PQW conversion takes true anomaly
/// directly rather than mean anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub raan: f64,
    pub argp: f64,
    pub nu: f64,
}

/// Converts `OrbitalElements` (true anomaly `nu`) to a Cartesian state
/// vector `(x, y, z, vx, vy, vz)` in km, km/s, via the perifocal (PQW) ->
/// ECI rotation through `(Omega, i, omega)`.
pub fn elements_to_state(el: &OrbitalElements, gm_km: f64) -> Vector {
    let nu = el.nu.to_radians();
    let p = el.a * (1.0 - el.e * el.e);
    let r_mag = p / (1.0 + el.e * nu.cos());

    let r_pqw = Vector::from_slice(&[r_mag * nu.cos(), r_mag * nu.sin(), 0.0]);
    let h = (gm_km * p).sqrt();
    let v_pqw = Vector::from_slice(&[
        -(gm_km / h) * nu.sin(),
        (gm_km / h) * (el.e + nu.cos()),
        0.0,
    ]);

    let raan = el.raan.to_radians();
    let incl = el.i.to_radians();
    let argp = el.argp.to_radians();

    // R_z(-Omega) * R_x(-i) * R_z(-omega), the standard PQW -> ECI rotation.
    let rot = &(&Matrix::r_z(-raan) * &Matrix::r_x(-incl)) * &Matrix::r_z(-argp);

    let r_eci = rot.mul_vec(&r_pqw);
    let v_eci = rot.mul_vec(&v_pqw);

    Vector::stack(&r_eci, &v_eci)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_equatorial_orbit_has_expected_speed() {
        const GM_EARTH_KM: f64 = 398_600.4415;
        let el = OrbitalElements {
            a: 7_000.0,
            e: 0.0,
            i: 0.0,
            raan: 0.0,
            argp: 0.0,
            nu: 0.0,
        };
        let s = elements_to_state(&el, GM_EARTH_KM);
        let r = s.slice(0, 2);
        let v = s.slice(3, 5);
        assert!((r.norm() - 7_000.0).abs() < 1e-6);
        let expected_speed = (GM_EARTH_KM / 7_000.0).sqrt();
        assert!((v.norm() - expected_speed).abs() < 1e-6);
    }
}
