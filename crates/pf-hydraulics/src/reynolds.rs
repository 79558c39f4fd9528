//! Reynolds number and the self-cleansing turbulence check.

use crate::error::HydroResult;
use pf_core::numeric::{Real, ensure_divisor, ensure_physical};
use pf_core::units::constants::NU_WATER_M2PS;
use pf_core::units::{KinVisc, Length, Velocity};
use serde::Serialize;
use std::fmt;

/// Reynolds number a flow must exceed to count as turbulent enough for
/// self-cleansing pipe design (STW requirement). Strict: exactly 4000 fails.
pub const RE_SELF_CLEANSING: Real = 4000.0;

const RE_OK_TXT: &str = "> 4000, acceptable.";
const RE_NOT_OK_TXT: &str =
    "< 4000, unacceptable, increase flow velocity or decrease pipe diameter.";

/// Outcome of a Reynolds number check, created once per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReynoldsCheck {
    /// Reynolds number (dimensionless).
    pub re: Real,
    /// True iff `re` exceeds [`RE_SELF_CLEANSING`].
    pub re_ok: bool,
    /// Fixed verdict message matching `re_ok`. Consumers parse this wording;
    /// it must not change.
    pub re_ok_txt: &'static str,
}

impl ReynoldsCheck {
    /// Textual summary combining the Reynolds number and the verdict message.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReynoldsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reynolds no. {} {}", self.re, self.re_ok_txt)
    }
}

/// Reynolds number of a pipe flow, with the self-cleansing verdict.
///
/// Takes the flow velocity `v_mps` in m/s, the internal diameter `id_mm` in
/// millimeters and the kinematic viscosity `nu_m2ps` in m²/s, and computes
/// Re = V·(ID/1000)/ν. A zero viscosity is a [`ZeroDivisor`] error.
///
/// [`ZeroDivisor`]: crate::HydroError::ZeroDivisor
pub fn reynolds_check(v_mps: Real, id_mm: Real, nu_m2ps: Real) -> HydroResult<ReynoldsCheck> {
    let v = ensure_physical(v_mps, "flow velocity")?;
    let id = ensure_physical(id_mm, "internal diameter")?;
    let nu = ensure_physical(nu_m2ps, "kinematic viscosity")?;
    let nu = ensure_divisor(nu, "kinematic viscosity")?;

    let re = v * (id / 1000.0) / nu;
    let re_ok = re > RE_SELF_CLEANSING;
    Ok(ReynoldsCheck {
        re,
        re_ok,
        re_ok_txt: if re_ok { RE_OK_TXT } else { RE_NOT_OK_TXT },
    })
}

/// [`reynolds_check`] with the kinematic viscosity of water at ~20 °C.
pub fn reynolds_check_water(v_mps: Real, id_mm: Real) -> HydroResult<ReynoldsCheck> {
    reynolds_check(v_mps, id_mm, NU_WATER_M2PS)
}

/// Unit-aware wrapper around [`reynolds_check`].
pub fn reynolds_check_si(v: Velocity, diameter: Length, nu: KinVisc) -> HydroResult<ReynoldsCheck> {
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, length::millimeter,
        velocity::meter_per_second,
    };
    reynolds_check(
        v.get::<meter_per_second>(),
        diameter.get::<millimeter>(),
        nu.get::<square_meter_per_second>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HydroError;

    #[test]
    fn fast_wide_flow_is_acceptable() {
        let check = reynolds_check(1.0, 4000.0, 1e-6).unwrap();
        assert!((check.re - 4_000_000.0).abs() < 1.0);
        assert!(check.re_ok);
        assert_eq!(check.re_ok_txt, "> 4000, acceptable.");
    }

    #[test]
    fn creeping_flow_is_unacceptable() {
        let check = reynolds_check(0.001, 1.0, 1e-6).unwrap();
        assert!((check.re - 1.0).abs() < 1e-9);
        assert!(!check.re_ok);
        assert_eq!(
            check.re_ok_txt,
            "< 4000, unacceptable, increase flow velocity or decrease pipe diameter."
        );
    }

    #[test]
    fn threshold_is_strict() {
        // 1000 mm / 1000 is exactly 1.0, so re lands on exactly 4000.
        let check = reynolds_check(4000.0, 1000.0, 1.0).unwrap();
        assert_eq!(check.re, 4000.0);
        assert!(!check.re_ok);
    }

    #[test]
    fn water_default_matches_explicit() {
        let explicit = reynolds_check(1.5, 200.0, 1e-6).unwrap();
        let defaulted = reynolds_check_water(1.5, 200.0).unwrap();
        assert_eq!(explicit, defaulted);
    }

    #[test]
    fn zero_viscosity_rejected() {
        let err = reynolds_check(1.0, 200.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            HydroError::ZeroDivisor {
                what: "kinematic viscosity"
            }
        ));
    }

    #[test]
    fn summary_combines_re_and_verdict() {
        let check = reynolds_check(1.0, 4000.0, 1e-6).unwrap();
        let summary = check.summary();
        assert!(summary.starts_with("Reynolds no."));
        assert!(summary.contains("4000000"));
        assert!(summary.ends_with("> 4000, acceptable."));
    }

    #[test]
    fn si_wrapper_matches_scalar() {
        use pf_core::units::{constants::nu_water, mm, mps};
        let typed = reynolds_check_si(mps(1.5), mm(200.0), nu_water()).unwrap();
        let scalar = reynolds_check(1.5, 200.0, 1e-6).unwrap();
        assert!((typed.re - scalar.re).abs() < 1e-3);
        assert_eq!(typed.re_ok, scalar.re_ok);
    }

    #[test]
    fn serializes_all_three_outputs() {
        let check = reynolds_check(1.0, 4000.0, 1e-6).unwrap();
        let json = serde_json::to_value(check).unwrap();
        assert_eq!(json["re"], 4_000_000.0);
        assert_eq!(json["re_ok"], true);
        assert_eq!(json["re_ok_txt"], "> 4000, acceptable.");
    }
}
