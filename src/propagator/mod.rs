//! Propagation driver: builds the RK4 right-hand side from the force model
//! and records a dense per-step ephemeris.

use crate::forces::{accel, AuxParam, ForceModelTables};
use crate::integrator::Rk4;
use crate::linalg::Vector;

/// Propagates the six-component state `y0` (meters, m/s, EME2000) for
/// `n_steps` steps of `step_seconds`, returning `n_steps + 1` state vectors
/// with `eph[0] == y0`.
pub fn ephemeris(
    y0: &Vector,
    n_steps: usize,
    step_seconds: f64,
    aux: &AuxParam,
    tables: &ForceModelTables,
) -> Vec<Vector> {
    let deriv = |t: f64, y: &Vector| -> Vector {
        let r = y.slice(0, 2);
        let v = y.slice(3, 5);
        let mjd_utc = aux.mjd_utc + t / 86400.0;
        let a = accel(mjd_utc, &r, &v, aux, tables);
        Vector::stack(&v, &a)
    };

    let mut rk4 = Rk4::new(deriv);
    let mut eph = Vec::with_capacity(n_steps + 1);
    let mut y = y0.clone();
    let mut t = 0.0;

    eph.push(y.clone());
    for _ in 0..n_steps {
        rk4.step(&mut t, &mut y, step_seconds);
        eph.push(y.clone());
    }
    eph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GM_EARTH, R_EARTH};
    use crate::eop::{EopRow, EopTable, SpwTable};
    use crate::gravity::Harmonics;

    #[test]
    fn two_body_orbit_conserves_radius_approximately() {
        let mut cnm = Harmonics::zeros(0);
        let snm = Harmonics::zeros(0);
        cnm.set(0, 0, 1.0);
        let mut eop = EopTable::new();
        eop.insert(58000, EopRow::default());
        eop.insert(58001, EopRow::default());
        let spw = SpwTable::new();

        let tables = ForceModelTables {
            cnm: &cnm,
            snm: &snm,
            eop: &eop,
            spw: &spw,
            gm_ref: GM_EARTH,
            r_ref: R_EARTH,
        };

        let aux = AuxParam {
            mjd_utc: 58000.0,
            area_drag: 0.0,
            area_solar: 0.0,
            mass: 1.0,
            cr: 0.0,
            cd: 0.0,
            n: 0,
            m: 0,
            sun: false,
            moon: false,
            srad: false,
            drag: false,
            solid_earth_tides: false,
            ocean_tides: false,
            relativity: false,
        };

        let y0 = Vector::from_slice(&[7_000_000.0, 0.0, 0.0, 0.0, 7_546.0, 0.0]);
        let eph = ephemeris(&y0, 540, 10.0, &aux, &tables);

        assert_eq!(eph.len(), 541);
        let r0 = eph[0].slice(0, 2).norm();
        for state in eph.iter().skip(1) {
            let r = state.slice(0, 2).norm();
            assert!((r - r0).abs() / r0 < 2e-3, "radius drifted: {r} vs {r0}");
        }
    }
}
