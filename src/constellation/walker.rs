//! Walker (T, S, F) constellation synthesis.

use super::elements::OrbitalElements;
use super::kepler::mean_to_true;

/// From a seed orbit and Walker parameters `(T, S, F)`, emits `T` orbits:
/// plane RAAN `Omega_p = (Omega0 + p*360/S) mod 360`, and per-satellite
/// mean anomaly `M_{p,q} = (anomaly0 + q*(360*S/T) + p*F*360/T) mod 360`.
/// `seed.nu` is interpreted as the seed mean anomaly `anomaly0`; each
/// emitted element set's `nu` is the true anomaly solved from that mean
/// anomaly via Kepler's equation.
pub fn generate_walker_constellation(
    seed: &OrbitalElements,
    t: u32,
    s: u32,
    f: u32,
) -> Vec<OrbitalElements> {
    assert!(s > 0 && t % s == 0, "S must divide T");
    assert!(f < t, "F must satisfy 0 <= F < T");

    let sats_per_plane = t / s;
    let anomaly0 = seed.nu;
    let mut out = Vec::with_capacity(t as usize);

    for p in 0..s {
        let raan = wrap_deg(seed.raan + p as f64 * 360.0 / s as f64);
        for q in 0..sats_per_plane {
            let mean_anomaly_deg = wrap_deg(
                anomaly0 + q as f64 * (360.0 * s as f64 / t as f64) + p as f64 * f as f64 * 360.0 / t as f64,
            );
            let nu_deg = mean_to_true(mean_anomaly_deg.to_radians(), seed.e).to_degrees();
            out.push(OrbitalElements {
                a: seed.a,
                e: seed.e,
                i: seed.i,
                raan,
                argp: seed.argp,
                nu: wrap_deg(nu_deg),
            });
        }
    }
    out
}

fn wrap_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
