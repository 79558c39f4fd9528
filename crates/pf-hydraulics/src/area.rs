//! Internal cross-sectional area of a circular pipe.

use crate::error::HydroResult;
use pf_core::numeric::{Real, ensure_physical};
use pf_core::units::{Area, Length, m2};
use std::f64::consts::PI;

/// Internal cross-sectional area of a circular pipe.
///
/// Takes the internal diameter `id_mm` in millimeters and returns the area
/// in square meters, A = π·(ID/1000)²/4. A zero diameter gives a zero area.
pub fn pipe_area(id_mm: Real) -> HydroResult<Real> {
    let id = ensure_physical(id_mm, "internal diameter")?;
    Ok(PI * (id / 1000.0).powi(2) / 4.0)
}

/// Unit-aware wrapper around [`pipe_area`].
pub fn pipe_area_si(diameter: Length) -> HydroResult<Area> {
    use uom::si::length::millimeter;
    pipe_area(diameter.get::<millimeter>()).map(m2)
}
