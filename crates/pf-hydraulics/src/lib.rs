//! pf-hydraulics: leaf formulas for basic pipe-flow hydraulics.
//!
//! Provides three independent calculations:
//! - [`pipe_area`]: internal diameter (mm) → cross-sectional area (m²)
//! - [`flow_velocity`]: flow rate (l/s) + area (m²) → velocity (m/s)
//! - [`reynolds_check`]: velocity, diameter, viscosity → Reynolds number
//!   plus a self-cleansing acceptability verdict
//!
//! plus the Darcy friction factor correlations ([`friction_factor`],
//! [`swamee_jain`]) that build on the Reynolds number.
//!
//! Each function is a pure, stateless transformation over scalar inputs;
//! there is no orchestration here, a caller chains outputs as needed.
//!
//! # Example
//!
//! ```
//! use pf_hydraulics::{pipe_area, flow_velocity, reynolds_check_water};
//!
//! // Size check for a 200 mm pipe carrying 50 l/s of water.
//! let area = pipe_area(200.0).unwrap();
//! let v = flow_velocity(50.0, area).unwrap();
//! let check = reynolds_check_water(v, 200.0).unwrap();
//! assert!(check.re_ok);
//! println!("{check}");
//! ```

pub mod area;
pub mod error;
pub mod friction;
pub mod reynolds;
pub mod velocity;

// Re-exports
pub use area::{pipe_area, pipe_area_si};
pub use error::{HydroError, HydroResult};
pub use friction::{friction_factor, swamee_jain};
pub use reynolds::{RE_SELF_CLEANSING, ReynoldsCheck, reynolds_check, reynolds_check_si, reynolds_check_water};
pub use velocity::{flow_velocity, flow_velocity_si};
