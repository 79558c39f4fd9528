//! Darcy friction factor correlations.

use crate::error::HydroResult;
use pf_core::numeric::{Real, ensure_divisor, ensure_physical};

/// Reynolds number below which flow is treated as laminar.
const RE_LAMINAR_MAX: Real = 2300.0;

/// Lower clamp on the turbulent friction factor.
const F_MIN: Real = 1e-4;

/// Turbulent Darcy friction factor via the Swamee-Jain approximation to
/// Colebrook-White.
///
/// Takes the Reynolds number `re` and the relative roughness ε/D, both
/// dimensionless, and returns f = 0.25 / log10(ε/D/3.7 + 5.74/Re^0.9)²,
/// clamped below at 1e-4.
pub fn swamee_jain(re: Real, rel_roughness: Real) -> HydroResult<Real> {
    let re = ensure_physical(re, "Reynolds number")?;
    let re = ensure_divisor(re, "Reynolds number")?;
    let e_d = ensure_physical(rel_roughness, "relative roughness")?;

    let a = e_d / 3.7;
    let b = 5.74 / re.powf(0.9);
    let f = 0.25 / (a + b).log10().powi(2);
    Ok(f.max(F_MIN))
}

/// Darcy friction factor across both flow regimes.
///
/// Laminar flow (Re < 2300) uses 64/Re; turbulent flow uses [`swamee_jain`].
pub fn friction_factor(re: Real, rel_roughness: Real) -> HydroResult<Real> {
    let re = ensure_physical(re, "Reynolds number")?;
    let re = ensure_divisor(re, "Reynolds number")?;

    if re < RE_LAMINAR_MAX {
        Ok(64.0 / re)
    } else {
        swamee_jain(re, rel_roughness)
    }
}
