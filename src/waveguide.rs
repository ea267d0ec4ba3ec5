//! Rectangular waveguide closed forms.
//!
//! Broad wall `a`, narrow wall `b` (a > b), mode indices `m` along `a` and `n`
//! along `b`. Every formula returns an error instead of NaN when evaluated at
//! or below cutoff or with non-physical inputs.

pub mod rect;

use crate::{
    consts::{SPEED_OF_LIGHT, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY},
    error::{Error, Result},
    math,
    unit::{
        AngularFrequency, Attenuation, Conductivity, Frequency, Impedance, Length, LossTangent,
        Permeability, Permittivity, ReflectionCoefficient, SurfaceResistance, Wavenumber,
    },
};
use num_complex::Complex64;
use std::f64::consts::PI;

fn check_mode(m: u32, n: u32, op: &'static str) -> Result<()> {
    if m == 0 && n == 0 {
        return Err(Error::InvalidParameter(format!(
            "{}: mode indices m and n cannot both be zero",
            op
        )));
    }
    Ok(())
}

/// Transverse cutoff wavenumber squared, (mπ/a)² + (nπ/b)²
fn kc_squared(a: Length, b: Length, m: u32, n: u32, op: &'static str) -> Result<f64> {
    check_mode(m, n, op)?;
    let a = math::positive(a.val(), op, "a")?;
    let b = math::positive(b.val(), op, "b")?;
    Ok((m as f64 * PI / a).powi(2) + (n as f64 * PI / b).powi(2))
}

/// Cutoff frequency of the TEmn/TMmn mode, c / (2 sqrt(er)) * sqrt((m/a)² + (n/b)²)
pub fn cutoff_frequency(
    a: Length,
    b: Length,
    er: Permittivity,
    m: u32,
    n: u32,
) -> Result<Frequency> {
    const OP: &str = "cutoff_frequency";
    check_mode(m, n, OP)?;
    let a = math::positive(a.val(), OP, "a")?;
    let b = math::positive(b.val(), OP, "b")?;
    let er = math::positive(er.val(), OP, "er")?;

    let fc = SPEED_OF_LIGHT / (2.0 * er.sqrt())
        * ((m as f64 / a).powi(2) + (n as f64 / b).powi(2)).sqrt();
    math::finite(fc, OP).map(Frequency::new)
}

/// Wavenumber of the filling medium from angular frequency, ω sqrt(μ ε)
pub fn wave_number_omega(
    omega: AngularFrequency,
    ur: Permeability,
    er: Permittivity,
) -> Result<Wavenumber> {
    const OP: &str = "wave_number_omega";
    let k = omega.val()
        * math::sqrt(
            ur.val() * VACUUM_PERMEABILITY * er.val() * VACUUM_PERMITTIVITY,
            OP,
        )?;
    math::finite(k, OP).map(Wavenumber::new)
}

/// Wavenumber of a non-magnetic filling medium, 2πf sqrt(er) / c
pub fn wave_number(f: Frequency, er: Permittivity) -> Result<Wavenumber> {
    const OP: &str = "wave_number";
    let k = 2.0 * PI * f.val() * math::sqrt(er.val(), OP)? / SPEED_OF_LIGHT;
    math::finite(k, OP).map(Wavenumber::new)
}

/// Phase constant β = sqrt(k² - (mπ/a)² - (nπ/b)²)
///
/// Fails below cutoff, where β would be imaginary.
pub fn phase_constant(k: Wavenumber, a: Length, b: Length, m: u32, n: u32) -> Result<Wavenumber> {
    const OP: &str = "phase_constant";
    let kc2 = kc_squared(a, b, m, n, OP)?;
    let radicand = k.val().powi(2) - kc2;
    if radicand < 0.0 {
        return Err(Error::domain(
            OP,
            format!(
                "k = {} is below the cutoff wavenumber {} of mode ({}, {})",
                k.val(),
                kc2.sqrt(),
                m,
                n
            ),
        ));
    }
    math::sqrt(radicand, OP).map(Wavenumber::new)
}

/// Dielectric attenuation from k and β, k² tanδ / (2β)
pub fn dielectric_loss_from_beta(
    k: Wavenumber,
    tand: LossTangent,
    beta: Wavenumber,
) -> Result<Attenuation> {
    math::div(
        k.val().powi(2) * tand.val(),
        2.0 * beta.val(),
        "dielectric_loss_from_beta",
    )
    .map(Attenuation::new)
}

/// Dielectric attenuation αd in Np/m
pub fn dielectric_loss(
    f: Frequency,
    tand: LossTangent,
    a: Length,
    b: Length,
    er: Permittivity,
    m: u32,
    n: u32,
) -> Result<Attenuation> {
    let k = wave_number(f, er)?;
    let beta = phase_constant(k, a, b, m, n)?;
    dielectric_loss_from_beta(k, tand, beta)
}

/// Dielectric attenuation αd in dB/m
pub fn dielectric_loss_db(
    f: Frequency,
    tand: LossTangent,
    a: Length,
    b: Length,
    er: Permittivity,
    m: u32,
    n: u32,
) -> Result<f64> {
    dielectric_loss(f, tand, a, b, er, m, n).map(|alpha| alpha.db_per_meter())
}

/// Surface resistivity of a good conductor, sqrt(ω μ / 2σ)
pub fn surface_resistivity(
    omega: AngularFrequency,
    ur: Permeability,
    sigma: Conductivity,
) -> Result<SurfaceResistance> {
    const OP: &str = "surface_resistivity";
    let sigma = math::positive(sigma.val(), OP, "sigma")?;
    math::sqrt(omega.val() * ur.val() * VACUUM_PERMEABILITY / (2.0 * sigma), OP)
        .map(SurfaceResistance::new)
}

/// Conductor attenuation αc of the TE10 mode in Np/m
pub fn conduction_loss_te10(
    rs: SurfaceResistance,
    beta: Wavenumber,
    k: Wavenumber,
    a: Length,
    b: Length,
    ur: Permeability,
    er: Permittivity,
) -> Result<Attenuation> {
    const OP: &str = "conduction_loss_te10";
    let (a, b) = (a.val(), b.val());
    let eta = bulk_wave_impedance(ur, er)?.val();

    math::div(
        rs.val() * (2.0 * b * PI.powi(2) + a.powi(3) * k.val().powi(2)),
        a.powi(3) * b * beta.val() * k.val() * eta,
        OP,
    )
    .map(Attenuation::new)
}

/// Intrinsic impedance of the filling medium, sqrt(μ / ε)
pub fn bulk_wave_impedance(ur: Permeability, er: Permittivity) -> Result<Impedance> {
    const OP: &str = "bulk_wave_impedance";
    let ratio = math::div(
        ur.val() * VACUUM_PERMEABILITY,
        er.val() * VACUUM_PERMITTIVITY,
        OP,
    )?;
    math::sqrt(ratio, OP).map(Impedance::new)
}

/// TE wave impedance η / sqrt(1 - (fc/f)²). Fails at or below cutoff.
pub fn characteristic_wave_impedance(
    ur: Permeability,
    er: Permittivity,
    fc: Frequency,
    f: Frequency,
) -> Result<Impedance> {
    const OP: &str = "characteristic_wave_impedance";
    let eta = bulk_wave_impedance(ur, er)?.val();
    let r = math::div(fc.val(), f.val(), OP)?;
    if r.abs() >= 1.0 {
        return Err(Error::domain(
            OP,
            format!("operating frequency {} is not above cutoff {}", f, fc),
        ));
    }
    math::div(eta, math::sqrt(1.0 - r * r, OP)?, OP).map(Impedance::new)
}

/// Complex TE wave impedance.
///
/// Below cutoff the mode is evanescent, γ = α = k sqrt((fc/f)² - 1), and the
/// impedance jωμ/γ is purely inductive.
pub fn characteristic_wave_impedance_complex(
    ur: Permeability,
    er: Permittivity,
    fc: Frequency,
    f: Frequency,
) -> Result<Complex64> {
    const OP: &str = "characteristic_wave_impedance_complex";
    let eta = bulk_wave_impedance(ur, er)?.val();
    let r = math::div(fc.val(), f.val(), OP)?.abs();
    if r == 1.0 {
        return Err(Error::domain(OP, "operating exactly at cutoff"));
    }

    if r < 1.0 {
        let z = math::div(eta, math::sqrt(1.0 - r * r, OP)?, OP)?;
        Ok(Complex64::new(z, 0.0))
    } else {
        // decaying root of 1 - r², -j sqrt(r² - 1)
        let x = math::div(eta, math::sqrt(r * r - 1.0, OP)?, OP)?;
        Ok(Complex64::new(0.0, x))
    }
}

/// Voltage standing wave ratio (1 + |Γ|) / (1 - |Γ|)
///
/// Defined for passive loads only; |Γ| >= 1 is rejected.
pub fn vswr(rc: ReflectionCoefficient) -> Result<f64> {
    const OP: &str = "vswr";
    let mag = rc.val().abs();
    if mag > 1.0 {
        return Err(Error::domain(OP, format!("|RC| = {} exceeds 1", mag)));
    }
    math::div(1.0 + mag, 1.0 - mag, OP)
}

/// Real reflection coefficient of a resistive load, (ZL - Z0) / (ZL + Z0)
pub fn reflection_coefficient(zl: Impedance, z0: Impedance) -> Result<ReflectionCoefficient> {
    math::div(zl.val() - z0.val(), zl.val() + z0.val(), "reflection_coefficient")
        .map(ReflectionCoefficient::new)
}

/// Complex reflection coefficient of an arbitrary load on a real Z0 line
pub fn reflection_coefficient_complex(zl: Complex64, z0: Impedance) -> Result<Complex64> {
    let den = zl + z0.val();
    if den.norm() == 0.0 {
        return Err(Error::domain("reflection_coefficient_complex", "ZL = -Z0"));
    }
    Ok((zl - z0.val()) / den)
}

/// Return loss in dB, -20 log10 |Γ|
pub fn return_loss_db(rc: ReflectionCoefficient) -> Result<f64> {
    const OP: &str = "return_loss_db";
    Ok(-20.0 * math::ln(rc.val().abs(), OP)? / std::f64::consts::LN_10)
}
