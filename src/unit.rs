//! Units and strongly typed physical quantities.
//!
//! Every quantity is a newtype over `f64` holding the value in base SI units.
//! Distinct types keep a frequency from being passed where an impedance is
//! expected; `val()` unwraps to the raw number at the formula boundary.

use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Descriptor of unit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[default]
    None, // Dimensionless ratio
    Hz,              // Frequency in hertz
    RadianPerSecond, // Angular frequency
    Meter,           // Length in meters
    Ohm,             // Resistance or impedance in ohms
    SiemensPerMeter, // Conductivity
    RadianPerMeter,  // Wavenumber or phase constant
    NeperPerMeter,   // Attenuation
}

impl Unit {
    pub fn to_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Hz => "Hz",
            Unit::RadianPerSecond => "rad/s",
            Unit::Meter => "m",
            Unit::Ohm => "Ω",
            Unit::SiemensPerMeter => "S/m",
            Unit::RadianPerMeter => "rad/m",
            Unit::NeperPerMeter => "Np/m",
        }
    }

    /// Dimensionless values are printed as a bare number.
    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Unit::None)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

fn fmt_quantity(f: &mut fmt::Formatter<'_>, val: f64, unit: Unit) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, val)?,
        None => write!(f, "{}", val)?,
    }
    if !unit.is_dimensionless() {
        write!(f, " {}", unit)?;
    }
    Ok(())
}

macro_rules! define_quantity {
    ($(#[$meta:meta])* $name:ident, $unit:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
        pub struct $name(f64);

        impl $name {
            pub const UNIT: Unit = $unit;

            pub const fn new(val: f64) -> Self {
                Self(val)
            }

            /// Value in base SI units
            pub fn val(&self) -> f64 {
                self.0
            }

            pub fn unit(&self) -> Unit {
                Self::UNIT
            }
        }

        impl From<f64> for $name {
            fn from(val: f64) -> Self {
                Self(val)
            }
        }

        impl From<$name> for f64 {
            fn from(q: $name) -> f64 {
                q.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_quantity(f, self.0, Self::UNIT)
            }
        }
    };
}

define_quantity!(
    /// Real characteristic or wave impedance
    Impedance,
    Unit::Ohm
);
define_quantity!(Frequency, Unit::Hz);
define_quantity!(AngularFrequency, Unit::RadianPerSecond);
define_quantity!(Length, Unit::Meter);
define_quantity!(
    /// Conductor conductivity σ
    Conductivity,
    Unit::SiemensPerMeter
);
define_quantity!(
    /// Relative permittivity εr (also used for the effective permittivity)
    Permittivity,
    Unit::None
);
define_quantity!(
    /// Relative permeability μr
    Permeability,
    Unit::None
);
define_quantity!(LossTangent, Unit::None);
define_quantity!(
    /// Wavenumber k or phase constant β
    Wavenumber,
    Unit::RadianPerMeter
);
define_quantity!(
    /// Attenuation constant α
    Attenuation,
    Unit::NeperPerMeter
);
define_quantity!(
    /// Surface resistivity Rs of a conductor
    SurfaceResistance,
    Unit::Ohm
);
define_quantity!(
    /// Microstrip conductor width over substrate height
    WhRatio,
    Unit::None
);
define_quantity!(ReflectionCoefficient, Unit::None);

impl Frequency {
    pub fn angular(&self) -> AngularFrequency {
        AngularFrequency(crate::consts::angular(self.0))
    }

    /// `n` evenly spaced frequencies from `start` to `stop` inclusive, in Hz
    pub fn linspace(start: Frequency, stop: Frequency, n: usize) -> Array1<f64> {
        Array1::linspace(start.0, stop.0, n)
    }
}

impl AngularFrequency {
    pub fn hz(&self) -> Frequency {
        Frequency(self.0 / (2.0 * std::f64::consts::PI))
    }
}

impl Attenuation {
    pub fn from_db_per_meter(db: f64) -> Self {
        Attenuation(db * crate::consts::NEPER_PER_DB)
    }

    pub fn db_per_meter(&self) -> f64 {
        self.0 / crate::consts::NEPER_PER_DB
    }
}

impl std::ops::Add for Attenuation {
    type Output = Attenuation;

    fn add(self, rhs: Attenuation) -> Attenuation {
        Attenuation(self.0 + rhs.0)
    }
}
