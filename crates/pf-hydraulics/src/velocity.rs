//! Flow velocity from volumetric flow rate and pipe area.

use crate::error::HydroResult;
use pf_core::numeric::{Real, ensure_divisor, ensure_physical};
use pf_core::units::{Area, FlowRate, Velocity, mps};

/// Flow velocity in a pipe of known cross-sectional area.
///
/// Takes the volumetric flow rate `q_lps` in liters per second and the area
/// `area_m2` in square meters, and returns the velocity in meters per second,
/// V = (Q/1000)/A. A zero area is a [`ZeroDivisor`] error.
///
/// [`ZeroDivisor`]: crate::HydroError::ZeroDivisor
pub fn flow_velocity(q_lps: Real, area_m2: Real) -> HydroResult<Real> {
    let q = ensure_physical(q_lps, "flow rate")?;
    let a = ensure_physical(area_m2, "pipe area")?;
    let a = ensure_divisor(a, "pipe area")?;
    Ok((q / 1000.0) / a)
}

/// Unit-aware wrapper around [`flow_velocity`].
pub fn flow_velocity_si(q: FlowRate, area: Area) -> HydroResult<Velocity> {
    use uom::si::{area::square_meter, volume_rate::liter_per_second};
    flow_velocity(q.get::<liter_per_second>(), area.get::<square_meter>()).map(mps)
}
