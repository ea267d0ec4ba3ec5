//! rfline prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use rfline::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::unit::{
    AngularFrequency, Attenuation, Conductivity, Frequency, Impedance, Length, LossTangent,
    Permeability, Permittivity, ReflectionCoefficient, SurfaceResistance, Unit, Wavenumber,
    WhRatio,
};

#[doc(no_inline)]
pub use crate::microstrip::line::Microstrip;
#[doc(no_inline)]
pub use crate::microstrip::synthesis::{
    synthesize_wh_ratio, SolverConfig, SolverConfigBuilder, Synthesis,
};
#[doc(no_inline)]
pub use crate::microstrip::{
    characteristic_impedance, effective_permittivity, wh_ratio, Branch, RatioSearch,
};

#[doc(no_inline)]
pub use crate::waveguide::rect::{Mode, RectWaveguide, RectWaveguideBuilder};
#[doc(no_inline)]
pub use crate::waveguide::{
    cutoff_frequency, dielectric_loss, dielectric_loss_db, vswr,
};
