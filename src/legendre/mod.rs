//! Fully-normalized associated Legendre polynomials and their first
//! latitude derivative, computed jointly by the stable diagonal +
//! two-step recursion.
//!
//! `Pnm` and `dPnm/dphi` are produced in a single pass since every harmonic
//! gravity accumulator downstream always needs both.

use crate::linalg::Matrix;

/// Computes `Pnm(phi)` and `dPnm/dphi` up to degree/order `(n_max, m_max)`.
///
/// Entries with `m > n` are left at zero (triangular storage invariant).
/// Stable up to `n ≈ 360`.
pub fn legendre(n_max: usize, m_max: usize, phi: f64) -> (Matrix, Matrix) {
    let dim = n_max + 1;
    let mut pnm = Matrix::zeros(dim, dim);
    let mut dpnm = Matrix::zeros(dim, dim);

    let (s, c) = phi.sin_cos();

    pnm.set(0, 0, 1.0);
    dpnm.set(0, 0, 0.0);

    if n_max >= 1 && m_max >= 1 {
        pnm.set(1, 1, 3f64.sqrt() * c);
        dpnm.set(1, 1, -3f64.sqrt() * s);
    }

    // Diagonal coefficients: Pnn, dPnn.
    for i in 2..=n_max {
        let sd = i as f64;
        let p_prev = pnm.get(i - 1, i - 1);
        let dp_prev = dpnm.get(i - 1, i - 1);
        let fac = ((2.0 * sd + 1.0) / (2.0 * sd)).sqrt();
        pnm.set(i, i, fac * c * p_prev);
        dpnm.set(i, i, fac * (c * dp_prev - s * p_prev));
    }

    // Sub-diagonal coefficients: P(n, n-1), dP(n, n-1).
    for i in 1..=n_max {
        let sd = i as f64;
        let p_prev = pnm.get(i - 1, i - 1);
        let dp_prev = dpnm.get(i - 1, i - 1);
        let fac = (2.0 * sd + 1.0).sqrt();
        pnm.set(i, i - 1, fac * s * p_prev);
        dpnm.set(i, i - 1, fac * (c * p_prev + s * dp_prev));
    }

    // General recursion for n > m+1.
    let mut j = 0usize;
    let mut k = 2usize;
    while j <= m_max {
        for i in k..=n_max {
            let sd = i as f64;
            let hd = j as f64;
            let fac = ((2.0 * sd + 1.0) / ((sd - hd) * (sd + hd))).sqrt();
            let a = (2.0 * sd - 1.0).sqrt();
            let b = (((sd + hd - 1.0) * (sd - hd - 1.0)) / (2.0 * sd - 3.0)).sqrt();
            let p_im1 = pnm.get(i - 1, j);
            let p_im2 = pnm.get(i - 2, j);
            let dp_im1 = dpnm.get(i - 1, j);
            let dp_im2 = dpnm.get(i - 2, j);

            pnm.set(i, j, fac * (a * s * p_im1 - b * p_im2));
            dpnm.set(i, j, fac * (a * s * dp_im1 + a * c * p_im1 - b * dp_im2));
        }
        j += 1;
        k += 1;
    }

    (pnm, dpnm)
}
