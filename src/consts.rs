//! Physical constants shared by the microstrip and waveguide formulas.

use std::f64::consts::PI;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Vacuum permittivity ε₀ (F/m)
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Vacuum permeability μ₀ (H/m)
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

/// Nepers in one decibel. Attenuation in dB/m is Np/m divided by this.
pub const NEPER_PER_DB: f64 = 0.115_129_254_65;

/// Impedance constant used by the Wheeler synthesis formulas (Ω).
pub const WHEELER_ETA: f64 = 377.0;

/// Angular frequency ω = 2πf
pub fn angular(hz: f64) -> f64 {
    2.0 * PI * hz
}
