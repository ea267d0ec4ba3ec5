//! Iterative W/H synthesis.
//!
//! The closed forms assume the line sees the bulk permittivity `er`, while a
//! real microstrip sees an effective permittivity that depends on the W/H
//! being solved for. When neither closed form lands on its own side of the
//! W/H = 2 boundary the target impedance is scaled by sqrt(er) and both forms
//! are evaluated again.
//!
//! The permittivity used by the forms is never updated from the intermediate
//! ratio; only the impedance is rescaled each round. With `er = 1` the scale
//! factor is unity and the search cannot make progress, which is reported as
//! [`Error::Convergence`] once the iteration cap is reached.

use crate::{
    error::{Error, Result},
    microstrip::{select_branch, Branch},
    unit::{Impedance, Permittivity, WhRatio},
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverConfig {
    max_iterations: usize,
}

impl SolverConfig {
    pub fn new(max_iterations: usize) -> Self {
        SolverConfig { max_iterations }
    }

    /// Maximum number of evaluation rounds before giving up
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

#[derive(Clone, Default)]
pub struct SolverConfigBuilder {
    max_iterations: Option<usize>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        SolverConfigBuilder::default()
    }

    pub fn max_iterations(mut self, val: usize) -> Self {
        self.max_iterations = Some(val);
        self
    }

    pub fn build(self) -> SolverConfig {
        let default = SolverConfig::default();
        SolverConfig {
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
        }
    }
}

/// Converged W/H together with how it was reached
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Synthesis {
    ratio: WhRatio,
    branch: Branch,
    iterations: usize,
    scaled_impedance: Impedance,
}

impl Synthesis {
    pub fn ratio(&self) -> WhRatio {
        self.ratio
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// Evaluation rounds used, 1 when the first pass already converged
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Impedance fed to the closed form on the final round
    pub fn scaled_impedance(&self) -> Impedance {
        self.scaled_impedance
    }
}

/// Solve for W/H with the impedance rescaling search.
pub fn synthesize_wh_ratio(
    zo: Impedance,
    er: Permittivity,
    config: &SolverConfig,
) -> Result<Synthesis> {
    let scale = er.val().sqrt();
    // both forms start from the same impedance and permittivity, so their
    // rescaled impedances stay equal every round
    let mut zo_scaled = zo;

    for iteration in 1..=config.max_iterations {
        if let Some((ratio, branch)) = select_branch(zo_scaled, er, zo_scaled, er)? {
            log::debug!(
                "W/H synthesis converged: Zo = {}, er = {}, W/H = {}, {:?} branch after {} iteration(s)",
                zo,
                er,
                ratio,
                branch,
                iteration
            );
            return Ok(Synthesis {
                ratio,
                branch,
                iterations: iteration,
                scaled_impedance: zo_scaled,
            });
        }

        zo_scaled = Impedance::new(scale * zo_scaled.val());
        log::debug!(
            "W/H synthesis iteration {}: no branch accepted, rescaled Zo to {}",
            iteration,
            zo_scaled
        );
    }

    log::warn!(
        "W/H synthesis for Zo = {}, er = {} exhausted {} iterations",
        zo,
        er,
        config.max_iterations
    );
    Err(Error::Convergence {
        iterations: config.max_iterations,
    })
}
