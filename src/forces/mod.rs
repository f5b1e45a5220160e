//! Force-model aggregation: sums every enabled acceleration term for a
//! satellite at a given epoch and state.

pub mod drag;
pub mod point_mass;
pub mod relativity;
pub mod srp;

pub use drag::accel_drag;
pub use point_mass::accel_point_mass;
pub use relativity::relativity;
pub use srp::{accel_solrad, illumination};

use crate::bodies::{moon_pos, sun_pos};
use crate::constants::{AU, GM_MOON, GM_SUN, P_SOLAR};
use crate::eop::{EopTable, SpwTable};
use crate::frames::{ecl_matrix, eci_to_ecef, gha_matrix, nut_matrix, pole_matrix, prec_matrix};
use crate::gravity::{accel_harmonic, accel_harmonic_anelastic_earth, Harmonics};
use crate::linalg::Vector;
use crate::time::{julian_centuries_tt, mjd_tt, mjd_ut1};

/// Per-satellite configuration carried alongside the state through the
/// ODE right-hand side.
#[derive(Debug, Clone)]
pub struct AuxParam {
    pub mjd_utc: f64,
    pub area_drag: f64,
    pub area_solar: f64,
    pub mass: f64,
    pub cr: f64,
    pub cd: f64,
    pub n: usize,
    pub m: usize,
    pub sun: bool,
    pub moon: bool,
    pub srad: bool,
    pub drag: bool,
    pub solid_earth_tides: bool,
    pub ocean_tides: bool,
    pub relativity: bool,
}

/// Read-only shared tables every force-model evaluation consults: loaded
/// once, passed by reference into every propagation task.
pub struct ForceModelTables<'a> {
    pub cnm: &'a Harmonics,
    pub snm: &'a Harmonics,
    pub eop: &'a EopTable,
    pub spw: &'a SpwTable,
    pub gm_ref: f64,
    pub r_ref: f64,
}

/// `Accel(Mjd_UTC, r, v, ...)`: the full force-model summation.
pub fn accel(mjd_utc: f64, r: &Vector, v: &Vector, aux: &AuxParam, tables: &ForceModelTables) -> Vector {
    let eop = tables.eop.lookup(mjd_utc);
    let mjd_ut1_v = mjd_ut1(mjd_utc, &eop);
    let mjd_tt_v = mjd_tt(mjd_utc, &eop);

    let p = prec_matrix(mjd_tt_v);
    let n = nut_matrix(mjd_tt_v);
    let t = &n * &p;
    let e = &(&pole_matrix(&eop) * &gha_matrix(mjd_ut1_v, mjd_tt_v)) * &t;

    let t1 = julian_centuries_tt(mjd_tt_v);
    let ecl_p_transpose = (&ecl_matrix(mjd_tt_v) * &p).transpose();
    let r_sun = ecl_p_transpose.mul_vec(&sun_pos(t1)).scale(AU);
    let r_moon = ecl_p_transpose.mul_vec(&moon_pos(t1).scale(1000.0));

    let mut a = if aux.solid_earth_tides || aux.ocean_tides {
        accel_harmonic_anelastic_earth(
            mjd_ut1_v,
            r,
            &r_sun,
            &r_moon,
            &e,
            tables.gm_ref,
            tables.r_ref,
            tables.cnm,
            tables.snm,
            aux.n,
            aux.m,
            eop.xp,
            eop.yp,
            aux.solid_earth_tides,
            aux.ocean_tides,
            GM_SUN,
            GM_MOON,
        )
    } else {
        accel_harmonic(r, &e, tables.gm_ref, tables.r_ref, tables.cnm, tables.snm, aux.n, aux.m)
    };

    if aux.sun {
        a = a.add(&accel_point_mass(r, &r_sun, GM_SUN));
    }
    if aux.moon {
        a = a.add(&accel_point_mass(r, &r_moon, GM_MOON));
    }
    if aux.srad {
        a = a.add(&accel_solrad(r, &r_sun, aux.area_solar, aux.mass, aux.cr, P_SOLAR, AU));
    }
    if aux.drag {
        a = a.add(&accel_drag(
            mjd_utc, r, v, &t, &e, aux.area_drag, aux.mass, aux.cd, tables.spw, mjd_ut1_v, mjd_tt_v,
        ));
    }
    if aux.relativity {
        a = a.add(&relativity(r, v));
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GM_EARTH as GME, R_EARTH};
    use crate::eop::{EopRow, EopTable, SpwRow, SpwTable};

    fn tables() -> (Harmonics, Harmonics, EopTable, SpwTable) {
        let mut cnm = Harmonics::zeros(0);
        let snm = Harmonics::zeros(0);
        cnm.set(0, 0, 1.0);
        let mut eop = EopTable::new();
        eop.insert(58000, EopRow::default());
        eop.insert(58001, EopRow::default());
        let mut spw = SpwTable::new();
        spw.insert(
            58000,
            SpwRow {
                f107: 150.0,
                f107_bar: 150.0,
                ap3h: [10.0; 8],
                ..Default::default()
            },
        );
        (cnm, snm, eop, spw)
    }

    #[test]
    fn two_body_only_matches_point_mass_gravity() {
        let (cnm, snm, eop, spw) = tables();
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
        let t = ForceModelTables {
            cnm: &cnm,
            snm: &snm,
            eop: &eop,
            spw: &spw,
            gm_ref: GME,
            r_ref: R_EARTH,
        };
        let r = Vector::from_slice(&[7_000_000.0, 0.0, 0.0]);
        let v = Vector::from_slice(&[0.0, 7_546.0, 0.0]);
        let a = accel(58000.0, &r, &v, &aux, &t);
        assert!((a.norm() - GME / (7_000_000.0_f64.powi(2))).abs() / a.norm() < 1e-2);
    }
}
