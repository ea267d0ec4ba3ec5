//! Closed-form transmission line design formulas.
//!
//! Microstrip W/H synthesis and analysis for thin conductors, and
//! rectangular waveguide cutoff, propagation, loss and impedance. All
//! quantities are carried in SI base units through the newtypes of [`unit`].
//!
//! ```
//! use rfline::prelude::*;
//!
//! let (line, _) = Microstrip::synthesize(
//!     Impedance::new(50.0),
//!     Permittivity::new(4.3),
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//! assert!((line.z0().unwrap().val() - 50.0).abs() < 0.5);
//! ```

pub mod consts;
pub mod error;
pub mod math;
pub mod microstrip;
pub mod prelude;
pub mod unit;
pub mod waveguide;
