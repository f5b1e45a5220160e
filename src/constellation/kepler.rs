//! Kepler equation solver: mean anomaly <-> true anomaly.
//!
//! The PQW -> ECI conversion takes true anomaly directly; Kepler's
//! equation is solved only at the caller when mean anomaly is the given
//! input (constellation seeding).

/// Newton-Raphson solution of Kepler's equation `M = E - e*sin(E)` for the
/// eccentric anomaly, then conversion to true anomaly. `m`/return in
/// radians.
pub fn mean_to_true(m: f64, e: f64) -> f64 {
    let mut ecc_anom = m;
    for _ in 0..50 {
        let f = ecc_anom - e * ecc_anom.sin() - m;
        let fp = 1.0 - e * ecc_anom.cos();
        let delta = f / fp;
        ecc_anom -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    let beta = e / (1.0 + (1.0 - e * e).sqrt());
    ecc_anom + 2.0 * (beta * ecc_anom.sin() / (1.0 - beta * ecc_anom.cos())).atan()
}

/// True anomaly -> mean anomaly, the inverse of [`mean_to_true`].
pub fn true_to_mean(nu: f64, e: f64) -> f64 {
    let ecc_anom = 2.0 * ((1.0 - e).sqrt() / (1.0 + e).sqrt() * (nu / 2.0).tan()).atan();
    ecc_anom - e * ecc_anom.sin()
}
