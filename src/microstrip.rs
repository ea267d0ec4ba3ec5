//! Closed-form microstrip synthesis and analysis (Wheeler / Hammerstad).
//!
//! Conductor thickness is assumed negligible throughout. Synthesis uses two
//! closed forms for W/H, one accurate for narrow strips (W/H < 2) and one for
//! wide strips (W/H > 2); the caller, or [`wh_ratio`], picks the branch whose
//! result lands on its own side of the boundary.

pub mod line;
pub mod synthesis;

use crate::{
    consts::WHEELER_ETA,
    error::Result,
    math,
    unit::{Impedance, Permittivity, WhRatio},
};
use serde::Serialize;
use std::f64::consts::PI;

/// W/H value separating the narrow and wide closed forms
pub const BRANCH_BOUNDARY: f64 = 2.0;

/// Which closed form produced a W/H ratio
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Branch {
    /// W/H < 2, from auxiliary variable A
    Narrow,
    /// W/H > 2, from auxiliary variable B
    Wide,
}

/// Outcome of the single pass ratio search
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum RatioSearch {
    Found(WhRatio),
    /// Neither closed form produced a ratio on its own side of the boundary
    NotFound,
}

impl RatioSearch {
    pub fn ratio(&self) -> Option<WhRatio> {
        match self {
            RatioSearch::Found(r) => Some(*r),
            RatioSearch::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RatioSearch::Found(_))
    }
}

fn check_line(zo: Impedance, er: Permittivity, op: &'static str) -> Result<(f64, f64)> {
    let zo = math::positive(zo.val(), op, "Zo")?;
    let er = math::positive(er.val(), op, "er")?;
    Ok((zo, er))
}

/// A = Zo/60 * sqrt((er + 1)/2) + (er - 1)/(er + 1) * (0.23 + 0.11/er)
pub fn aux_var_a(zo: Impedance, er: Permittivity) -> Result<f64> {
    const OP: &str = "aux_var_a";
    let (zo, er) = check_line(zo, er, OP)?;

    let a = zo / 60.0 * math::sqrt((er + 1.0) / 2.0, OP)?
        + math::div(er - 1.0, er + 1.0, OP)? * (0.23 + math::div(0.11, er, OP)?);
    math::finite(a, OP)
}

/// B = 377π / (2 Zo sqrt(er))
pub fn aux_var_b(zo: Impedance, er: Permittivity) -> Result<f64> {
    const OP: &str = "aux_var_b";
    let (zo, er) = check_line(zo, er, OP)?;

    math::div(WHEELER_ETA * PI, 2.0 * zo * math::sqrt(er, OP)?, OP)
}

/// W/H for narrow strips, 8e^A / (e^2A - 2). Only meaningful when the result is below 2.
pub fn wh_ratio_a(zo: Impedance, er: Permittivity) -> Result<WhRatio> {
    const OP: &str = "wh_ratio_a";
    let a = aux_var_a(zo, er)?;

    // divided through by e^A so large A does not overflow
    math::div(8.0, a.exp() - 2.0 * (-a).exp(), OP).map(WhRatio::new)
}

/// W/H for wide strips. Only meaningful when the result is above 2.
pub fn wh_ratio_b(zo: Impedance, er: Permittivity) -> Result<WhRatio> {
    const OP: &str = "wh_ratio_b";
    let b = aux_var_b(zo, er)?;
    let er = er.val();

    let r = 2.0 / PI
        * (b - 1.0 - math::ln(2.0 * b - 1.0, OP)?
            + math::div(er - 1.0, 2.0 * er, OP)?
                * (math::ln(b - 1.0, OP)? + 0.39 - math::div(0.61, er, OP)?));
    math::finite(r, OP).map(WhRatio::new)
}

/// Evaluate the narrow form first and fall back to the wide form.
///
/// The wide form is only evaluated when the narrow one is rejected, so a
/// logarithm domain error in the unused wide form cannot mask a valid narrow
/// strip. A negative narrow result (e^2A < 2) is rejected.
pub(crate) fn select_branch(
    zo_a: Impedance,
    er_a: Permittivity,
    zo_b: Impedance,
    er_b: Permittivity,
) -> Result<Option<(WhRatio, Branch)>> {
    let ra = wh_ratio_a(zo_a, er_a)?;
    if ra.val() > 0.0 && ra.val() < BRANCH_BOUNDARY {
        return Ok(Some((ra, Branch::Narrow)));
    }

    let rb = wh_ratio_b(zo_b, er_b)?;
    if rb.val() > BRANCH_BOUNDARY {
        return Ok(Some((rb, Branch::Wide)));
    }

    Ok(None)
}

/// Single pass W/H synthesis using the bulk permittivity.
pub fn wh_ratio(zo: Impedance, er: Permittivity) -> Result<RatioSearch> {
    Ok(match select_branch(zo, er, zo, er)? {
        Some((r, _)) => RatioSearch::Found(r),
        None => RatioSearch::NotFound,
    })
}

/// Effective permittivity of a microstrip with the given W/H on a substrate of `er`.
pub fn effective_permittivity(ratio: WhRatio, er: Permittivity) -> Result<Permittivity> {
    const OP: &str = "effective_permittivity";
    let w = math::positive(ratio.val(), OP, "W/H")?;
    let er = er.val();

    let mut fill = (1.0 + 12.0 / w).powf(-0.5);
    if w <= 1.0 {
        fill += 0.04 * (1.0 - w).powi(2);
    }

    math::finite((er + 1.0) / 2.0 + fill * (er - 1.0) / 2.0, OP).map(Permittivity::new)
}

/// Characteristic impedance of a microstrip from W/H and effective permittivity.
pub fn characteristic_impedance(ratio: WhRatio, ef: Permittivity) -> Result<Impedance> {
    const OP: &str = "characteristic_impedance";
    let w = math::positive(ratio.val(), OP, "W/H")?;
    let root_ef = math::sqrt(math::positive(ef.val(), OP, "ef")?, OP)?;

    let zo = if w <= 1.0 {
        60.0 / root_ef * math::ln(8.0 / w + w / 4.0, OP)?
    } else {
        120.0 * PI / root_ef / (w + 1.393 + 0.667 * math::ln(w + 1.444, OP)?)
    };
    math::finite(zo, OP).map(Impedance::new)
}
