//! Anelastic-Earth tidal corrections to the low-degree gravity
//! coefficients: solid-Earth tides (IERS 2010 Table 6.5a/b/c, permanent
//! tide, solid-Earth pole tide) and ocean tides.
//!
//! The coefficient tables below are transcribed verbatim from IERS 2010
//! Conventions Table 6.5a/b/c.

use super::{harmonic_sum, Harmonics};
use crate::frames::gmst;
use crate::linalg::{Matrix, Vector};

const DAS2R: f64 = std::f64::consts::PI / (180.0 * 3600.0);
const TURNAS: f64 = 1_296_000.0;

fn modulo(x: f64, y: f64) -> f64 {
    y * (x / y - (x / y).floor())
}

/// Geocentric (longitude, latitude, distance) of a position vector.
fn polar_angles(r: &Vector) -> (f64, f64, f64) {
    let d = r.norm();
    let lon = r[1].atan2(r[0]);
    let lat = (r[2] / d).asin();
    (lon, lat, d)
}

// IERS 2010 Table 6.5a: in-phase/out-of-phase diurnal (dC21, dS21) amplitudes.
#[rustfmt::skip]
const COEFF0: [[f64; 7]; 48] = [
    [ 2.0,  0.0,  2.0,  0.0,  2.0,  -0.1,    0.0],
    [ 0.0,  0.0,  2.0,  2.0,  2.0,  -0.1,    0.0],
    [ 1.0,  0.0,  2.0,  0.0,  1.0,  -0.1,    0.0],
    [ 1.0,  0.0,  2.0,  0.0,  2.0,  -0.7,    0.1],
    [-1.0,  0.0,  2.0,  2.0,  2.0,  -0.1,    0.0],
    [ 0.0,  0.0,  2.0,  0.0,  1.0,  -1.3,    0.1],
    [ 0.0,  0.0,  2.0,  0.0,  2.0,  -6.8,    0.6],
    [ 0.0,  0.0,  0.0,  2.0,  0.0,   0.1,    0.0],
    [ 1.0,  0.0,  2.0, -2.0,  2.0,   0.1,    0.0],
    [-1.0,  0.0,  2.0,  0.0,  1.0,   0.1,    0.0],
    [-1.0,  0.0,  2.0,  0.0,  2.0,   0.4,    0.0],
    [ 1.0,  0.0,  0.0,  0.0,  0.0,   1.3,   -0.1],
    [ 1.0,  0.0,  0.0,  0.0,  1.0,   0.3,    0.0],
    [-1.0,  0.0,  0.0,  2.0,  0.0,   0.3,    0.0],
    [-1.0,  0.0,  0.0,  2.0,  1.0,   0.1,    0.0],
    [ 0.0,  1.0,  2.0, -2.0,  2.0,  -1.9,    0.1],
    [ 0.0,  0.0,  2.0, -2.0,  1.0,   0.5,    0.0],
    [ 0.0,  0.0,  2.0, -2.0,  2.0, -43.4,    2.9],
    [ 0.0, -1.0,  2.0, -2.0,  2.0,   0.6,    0.0],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,   1.6,   -0.1],
    [-2.0,  0.0,  2.0,  0.0,  1.0,   0.1,    0.0],
    [ 0.0,  0.0,  0.0,  0.0, -2.0,   0.1,    0.0],
    [ 0.0,  0.0,  0.0,  0.0, -1.0,  -8.8,    0.5],
    [ 0.0,  0.0,  0.0,  0.0,  0.0, 470.9,  -30.2],
    [ 0.0,  0.0,  0.0,  0.0,  1.0,  68.1,   -4.6],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  -1.6,    0.1],
    [-1.0,  0.0,  0.0,  1.0,  0.0,   0.1,    0.0],
    [ 0.0, -1.0,  0.0,  0.0, -1.0,  -0.1,    0.0],
    [ 0.0, -1.0,  0.0,  0.0,  0.0, -20.6,   -0.3],
    [ 0.0,  1.0, -2.0,  2.0, -2.0,   0.3,    0.0],
    [ 0.0, -1.0,  0.0,  0.0,  1.0,  -0.3,    0.0],
    [-2.0,  0.0,  0.0,  2.0,  0.0,  -0.2,    0.0],
    [-2.0,  0.0,  0.0,  2.0,  1.0,  -0.1,    0.0],
    [ 0.0,  0.0, -2.0,  2.0, -2.0,  -5.0,    0.3],
    [ 0.0,  0.0, -2.0,  2.0, -1.0,   0.2,    0.0],
    [ 0.0, -1.0, -2.0,  2.0, -2.0,  -0.2,    0.0],
    [ 1.0,  0.0,  0.0, -2.0,  0.0,  -0.5,    0.0],
    [ 1.0,  0.0,  0.0, -2.0,  1.0,  -0.1,    0.0],
    [-1.0,  0.0,  0.0,  0.0, -1.0,   0.1,    0.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  -2.1,    0.1],
    [-1.0,  0.0,  0.0,  0.0,  1.0,  -0.4,    0.0],
    [ 0.0,  0.0,  0.0, -2.0,  0.0,  -0.2,    0.0],
    [-2.0,  0.0,  0.0,  0.0,  0.0,  -0.1,    0.0],
    [ 0.0,  0.0, -2.0,  0.0, -2.0,  -0.6,    0.0],
    [ 0.0,  0.0, -2.0,  0.0, -1.0,  -0.4,    0.0],
    [ 0.0,  0.0, -2.0,  0.0,  0.0,  -0.1,    0.0],
    [-1.0,  0.0, -2.0,  0.0, -2.0,  -0.1,    0.0],
    [-1.0,  0.0, -2.0,  0.0, -1.0,  -0.1,    0.0],
];

// IERS 2010 Table 6.5b: long-period dC20.
#[rustfmt::skip]
const COEFF1: [[f64; 7]; 21] = [
    [ 0.0,  0.0,  0.0,  0.0,  1.0,  16.6,  -6.7],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  -0.1,   0.1],
    [ 0.0, -1.0,  0.0,  0.0,  0.0,  -1.2,   0.8],
    [ 0.0,  0.0, -2.0,  2.0, -2.0,  -5.5,   4.3],
    [ 0.0,  0.0, -2.0,  2.0, -1.0,   0.1,  -0.1],
    [ 0.0, -1.0, -2.0,  2.0, -2.0,  -0.3,   0.2],
    [ 1.0,  0.0,  0.0, -2.0,  0.0,  -0.3,   0.7],
    [-1.0,  0.0,  0.0,  0.0, -1.0,   0.1,  -0.2],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  -1.2,   3.7],
    [-1.0,  0.0,  0.0,  0.0,  1.0,   0.1,  -0.2],
    [ 1.0,  0.0, -2.0,  0.0, -2.0,   0.1,  -0.2],
    [ 0.0,  0.0,  0.0, -2.0,  0.0,   0.0,   0.6],
    [-2.0,  0.0,  0.0,  0.0,  0.0,   0.0,   0.3],
    [ 0.0,  0.0, -2.0,  0.0, -2.0,   0.6,   6.3],
    [ 0.0,  0.0, -2.0,  0.0, -1.0,   0.2,   2.6],
    [ 0.0,  0.0, -2.0,  0.0,  0.0,   0.0,   0.2],
    [ 1.0,  0.0, -2.0, -2.0, -2.0,   0.1,   0.2],
    [-1.0,  0.0, -2.0,  0.0, -2.0,   0.4,   1.1],
    [-1.0,  0.0, -2.0,  0.0, -1.0,   0.2,   0.5],
    [ 0.0,  0.0, -2.0, -2.0, -2.0,   0.1,   0.2],
    [-2.0,  0.0, -2.0,  0.0, -2.0,   0.1,   0.1],
];

// IERS 2010 Table 6.5c: semi-diurnal dC22, dS22.
const COEFF2: [[f64; 6]; 2] = [
    [1.0, 0.0, 2.0, 0.0, 2.0, -0.3],
    [0.0, 0.0, 2.0, 0.0, 2.0, -1.2],
];

#[allow(clippy::too_many_arguments)]
fn solid_earth_tides(
    cnm: &mut Harmonics,
    snm: &mut Harmonics,
    gm: f64,
    r_ref: f64,
    gm_sun: f64,
    gm_moon: f64,
    r_sun: &Vector,
    r_moon: &Vector,
    mjd_ut1: f64,
    xp_as: f64,
    yp_as: f64,
) {
    let (l_m, phi_m, r_m) = polar_angles(r_moon);
    let (l_s, phi_s, r_s) = polar_angles(r_sun);

    let t = (mjd_ut1 - crate::time::MJD_J2000) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = modulo(
        485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.0002447 * t4,
        TURNAS,
    ) * DAS2R;
    let lp = modulo(
        1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4,
        TURNAS,
    ) * DAS2R;
    let f = modulo(
        335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4,
        TURNAS,
    ) * DAS2R;
    let d = modulo(
        1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4,
        TURNAS,
    ) * DAS2R;
    let om = modulo(
        450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4,
        TURNAS,
    ) * DAS2R;

    let (pm, _) = crate::legendre::legendre(2, 2, phi_m);
    let (ps, _) = crate::legendre::legendre(2, 2, phi_s);

    let lunisolar = |n: i32, m: i32, trig_m: f64, trig_s: f64| -> f64 {
        let pm_nm = pm.get(n as usize, m as usize);
        let ps_nm = ps.get(n as usize, m as usize);
        gm_moon / gm * (r_ref / r_m).powi(3) * pm_nm * trig_m
            + gm_sun / gm * (r_ref / r_s).powi(3) * ps_nm * trig_s
    };

    let mut d_c20 = 0.30190 / 5.0 * lunisolar(2, 0, 1.0, 1.0);
    let mut d_c21 = 0.29830 / 5.0 * lunisolar(2, 1, l_m.cos(), l_s.cos())
        - 0.00144 / 5.0 * lunisolar(2, 1, l_m.sin(), l_s.sin());
    let mut d_s21 = 0.00144 / 5.0 * lunisolar(2, 1, l_m.cos(), l_s.cos())
        + 0.29830 / 5.0 * lunisolar(2, 1, l_m.sin(), l_s.sin());
    let mut d_c22 = 0.30102 / 5.0 * lunisolar(2, 2, (2.0 * l_m).cos(), (2.0 * l_s).cos())
        - 0.00130 / 5.0 * lunisolar(2, 2, (2.0 * l_m).sin(), (2.0 * l_s).sin());
    let mut d_s22 = 0.00130 / 5.0 * lunisolar(2, 2, (2.0 * l_m).cos(), (2.0 * l_s).cos())
        + 0.30102 / 5.0 * lunisolar(2, 2, (2.0 * l_m).sin(), (2.0 * l_s).sin());
    let d_c40 = -0.00089 / 5.0 * lunisolar(2, 0, 1.0, 1.0);
    let d_c41 = -0.00080 / 5.0 * lunisolar(2, 1, l_m.cos(), l_s.cos());
    let d_s41 = -0.00080 / 5.0 * lunisolar(2, 1, l_m.sin(), l_s.sin());
    let d_c42 = -0.00057 / 5.0 * lunisolar(2, 2, (2.0 * l_m).cos(), (2.0 * l_s).cos());
    let d_s42 = -0.00057 / 5.0 * lunisolar(2, 2, (2.0 * l_m).sin(), (2.0 * l_s).sin());

    // STEP2: frequency-dependent long-period (dC20).
    let mut step2_c20 = 0.0;
    for row in COEFF1.iter() {
        let theta_f = -(row[0] * l + row[1] * lp + row[2] * f + row[3] * d + row[4] * om);
        step2_c20 += 1e-12 * (row[5] * theta_f.cos() - row[6] * theta_f.sin());
    }
    d_c20 += step2_c20;

    // STEP2: diurnal (dC21, dS21).
    let theta_g = gmst(mjd_ut1);
    let mut step2_c21 = 0.0;
    let mut step2_s21 = 0.0;
    for row in COEFF0.iter() {
        let theta_f = (theta_g + std::f64::consts::PI)
            - (row[0] * l + row[1] * lp + row[2] * f + row[3] * d + row[4] * om);
        step2_c21 += 1e-12 * (row[5] * theta_f.sin() + row[6] * theta_f.cos());
        step2_s21 += 1e-12 * (row[5] * theta_f.cos() - row[6] * theta_f.sin());
    }
    d_c21 += step2_c21;
    d_s21 += step2_s21;

    // STEP2: semi-diurnal (dC22, dS22).
    let mut step2_c22 = 0.0;
    let mut step2_s22 = 0.0;
    for row in COEFF2.iter() {
        let theta_f = 2.0 * (theta_g + std::f64::consts::PI)
            - (row[0] * l + row[1] * lp + row[2] * f + row[3] * d + row[4] * om);
        step2_c22 += 1e-12 * row[5] * theta_f.cos();
        step2_s22 -= 1e-12 * row[5] * theta_f.sin();
    }
    d_c22 += step2_c22;
    d_s22 += step2_s22;

    // Permanent tide: convert to a tide-free system, then remove the
    // permanent-tide contribution that the conversion reintroduces.
    let permanent = 4.4228e-8 * (-0.31460) * 0.30190;
    d_c20 += 4.173e-9 - permanent;

    // Solid-Earth pole tide.
    let xp = xp_as * DAS2R;
    let yp = yp_as * DAS2R;
    d_c21 += -1.348e-9 * (xp + 0.0112 * yp);
    d_s21 += 1.348e-9 * (yp - 0.0112 * xp);

    cnm.add(2, 0, d_c20);
    cnm.add(2, 1, d_c21);
    cnm.add(2, 2, d_c22);
    snm.add(2, 1, d_s21);
    snm.add(2, 2, d_s22);

    cnm.add(4, 0, d_c40);
    cnm.add(4, 1, d_c41);
    cnm.add(4, 2, d_c42);
    snm.add(4, 1, d_s41);
    snm.add(4, 2, d_s42);
}

#[allow(clippy::too_many_arguments)]
fn ocean_tides(
    cnm: &mut Harmonics,
    snm: &mut Harmonics,
    gm: f64,
    r_ref: f64,
    gm_sun: f64,
    gm_moon: f64,
    r_sun: &Vector,
    r_moon: &Vector,
) {
    const RHO_WATER: f64 = 1025.0;
    const M_EARTH: f64 = 5.9722e24;
    const LOVE: [f64; 5] = [-0.3075, -0.195, -0.132, -0.1032, -0.0892];

    let (l_m, phi_m, r_m) = polar_angles(r_moon);
    let (l_s, phi_s, r_s) = polar_angles(r_sun);

    let (pm, _) = crate::legendre::legendre(6, 6, phi_m);
    let (ps, _) = crate::legendre::legendre(6, 6, phi_s);

    for (idx, n) in (2..=6).enumerate() {
        let k = LOVE[idx];
        let denom = 2.0 * n as f64 + 1.0;
        let prefac = 4.0 * std::f64::consts::PI * r_ref * r_ref * RHO_WATER / M_EARTH * (1.0 - k)
            / denom;

        for m in 0..=n {
            let pm_nm = pm.get(n, m);
            let ps_nm = ps.get(n, m);
            let (sin_m, cos_m) = (m as f64 * l_m).sin_cos();
            let (sin_s, cos_s) = (m as f64 * l_s).sin_cos();

            let lunisolar_cos = gm_moon / gm * (r_ref / r_m).powi(n as i32 + 1) * pm_nm * cos_m
                + gm_sun / gm * (r_ref / r_s).powi(n as i32 + 1) * ps_nm * cos_s;
            let lunisolar_sin = gm_moon / gm * (r_ref / r_m).powi(n as i32 + 1) * pm_nm * sin_m
                + gm_sun / gm * (r_ref / r_s).powi(n as i32 + 1) * ps_nm * sin_s;

            if m == 0 {
                cnm.add(n, 0, prefac * lunisolar_cos);
            } else {
                cnm.add(n, m, prefac * lunisolar_cos);
                snm.add(n, m, k / denom * lunisolar_sin);
            }
        }
    }
}

/// Augments `cnm`/`snm` with solid-Earth and/or ocean-tide corrections,
/// then runs the same Legendre summation as [`super::accel_harmonic`].
#[allow(clippy::too_many_arguments)]
pub fn accel_harmonic_anelastic_earth(
    mjd_ut1: f64,
    r: &Vector,
    r_sun: &Vector,
    r_moon: &Vector,
    e: &Matrix,
    gm: f64,
    r_ref: f64,
    cnm: &Harmonics,
    snm: &Harmonics,
    n_max: usize,
    m_max: usize,
    xp_as: f64,
    yp_as: f64,
    solid_earth_tides_on: bool,
    ocean_tides_on: bool,
    gm_sun: f64,
    gm_moon: f64,
) -> Vector {
    let mut c = cnm.clone();
    let mut s = snm.clone();

    if solid_earth_tides_on {
        solid_earth_tides(
            &mut c, &mut s, gm, r_ref, gm_sun, gm_moon, r_sun, r_moon, mjd_ut1, xp_as, yp_as,
        );
    }
    if ocean_tides_on {
        ocean_tides(&mut c, &mut s, gm, r_ref, gm_sun, gm_moon, r_sun, r_moon);
    }

    let r_bf = e.mul_vec(r);
    harmonic_sum(&r_bf, e, gm, r_ref, &c, &s, n_max, m_max)
}
