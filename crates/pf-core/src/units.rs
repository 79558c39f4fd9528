// pf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    Ratio as UomRatio, Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type FlowRate = UomVolumeRate;
/// uom has no dedicated kinematic-viscosity quantity; m²/s is the same
/// dimension as a diffusion coefficient.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn lps(v: f64) -> FlowRate {
    use uom::si::volume_rate::liter_per_second;
    FlowRate::new::<liter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

pub mod constants {
    use super::*;

    /// Kinematic viscosity of water at ~20 °C (m²/s).
    pub const NU_WATER_M2PS: f64 = 1e-6;

    #[inline]
    pub fn nu_water() -> KinVisc {
        m2ps(NU_WATER_M2PS)
    }
}
