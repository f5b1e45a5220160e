//! Harmonic (spherical-coefficient) Earth gravity, plus the anelastic-Earth
//! tidal correction variant.

mod tides;

pub use tides::accel_harmonic_anelastic_earth;

use crate::legendre::legendre;
use crate::linalg::{Matrix, Vector};

/// Compact lower-triangular storage for a degree/order coefficient table
/// (`cnm` or `snm`). Avoids the ~50% wasted memory of a dense `(N+1, N+1)`
/// matrix while preserving the `(n, m)` addressing invariant.
#[derive(Debug, Clone)]
pub struct Harmonics {
    n_max: usize,
    data: Vec<f64>,
}

impl Harmonics {
    pub fn zeros(n_max: usize) -> Self {
        Harmonics {
            n_max,
            data: vec![0.0; (n_max + 1) * (n_max + 2) / 2],
        }
    }

    fn index(n: usize, m: usize) -> usize {
        n * (n + 1) / 2 + m
    }

    pub fn n_max(&self) -> usize {
        self.n_max
    }

    pub fn get(&self, n: usize, m: usize) -> f64 {
        if m > n {
            return 0.0;
        }
        self.data[Self::index(n, m)]
    }

    pub fn set(&mut self, n: usize, m: usize, value: f64) {
        assert!(m <= n, "m={m} must not exceed n={n}");
        let i = Self::index(n, m);
        self.data[i] = value;
    }

    pub fn add(&mut self, n: usize, m: usize, delta: f64) {
        let i = Self::index(n, m);
        self.data[i] += delta;
    }
}

/// `AccelHarmonic(r, E, GM, R, cnm, snm, n_max, m_max)` — acceleration due
/// to the harmonic gravity field of the central body.
pub fn accel_harmonic(
    r: &Vector,
    e: &Matrix,
    gm: f64,
    r_ref: f64,
    cnm: &Harmonics,
    snm: &Harmonics,
    n_max: usize,
    m_max: usize,
) -> Vector {
    let r_bf = e.mul_vec(r);
    harmonic_sum(&r_bf, e, gm, r_ref, cnm, snm, n_max, m_max)
}

/// Shared body-fixed Legendre summation used by both [`accel_harmonic`]
/// and the anelastic-Earth variant once coefficients have been corrected.
pub(crate) fn harmonic_sum(
    r_bf: &Vector,
    e: &Matrix,
    gm: f64,
    r_ref: f64,
    cnm: &Harmonics,
    snm: &Harmonics,
    n_max: usize,
    m_max: usize,
) -> Vector {
    let d = r_bf.norm();
    let latgc = (r_bf[2] / d).asin();
    let lon = r_bf[1].atan2(r_bf[0]);

    let (pnm, dpnm) = legendre(n_max, n_max, latgc);

    let mut d_udr = 0.0;
    let mut d_udlatgc = 0.0;
    let mut d_udlon = 0.0;

    for n in 0..=n_max {
        let nd = n as f64;
        let ratio = r_ref / d;
        let b1 = (-gm / (d * d)) * ratio.powf(nd) * (nd + 1.0);
        let b23 = (gm / d) * ratio.powf(nd);

        let mut q1 = 0.0;
        let mut q2 = 0.0;
        let mut q3 = 0.0;
        for m in 0..=m_max.min(n) {
            let c = cnm.get(n, m);
            let s = snm.get(n, m);
            let (sm, cm) = (m as f64 * lon).sin_cos();
            q1 += pnm.get(n, m) * (c * cm + s * sm);
            q2 += dpnm.get(n, m) * (c * cm + s * sm);
            q3 += m as f64 * pnm.get(n, m) * (s * cm - c * sm);
        }
        d_udr += q1 * b1;
        d_udlatgc += q2 * b23;
        d_udlon += q3 * b23;
    }

    let r2xy = r_bf[0] * r_bf[0] + r_bf[1] * r_bf[1];
    // The spherical->Cartesian Jacobian below divides by r2xy; floor it
    // rather than propagate a NaN for satellites passing near-exactly over
    // a pole.
    let r2xy = r2xy.max(1e-6 * d * d);

    let ax = (d_udr / d - r_bf[2] / (d * d * r2xy.sqrt()) * d_udlatgc) * r_bf[0]
        - (d_udlon / r2xy) * r_bf[1];
    let ay = (d_udr / d - r_bf[2] / (d * d * r2xy.sqrt()) * d_udlatgc) * r_bf[1]
        + (d_udlon / r2xy) * r_bf[0];
    let az = d_udr / d * r_bf[2] + r2xy.sqrt() / (d * d) * d_udlatgc;

    let a_bf = Vector::from_slice(&[ax, ay, az]);
    e.transpose().mul_vec(&a_bf)
}
