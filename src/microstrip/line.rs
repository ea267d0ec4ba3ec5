//! Microstrip line as a value: substrate permittivity plus W/H.

use crate::{
    error::Result,
    math,
    microstrip::{
        characteristic_impedance, effective_permittivity,
        synthesis::{synthesize_wh_ratio, SolverConfig, Synthesis},
    },
    unit::{Impedance, Length, Permittivity, WhRatio},
};
use serde::Serialize;

/// A microstrip conductor described by its W/H on a substrate of permittivity `er`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Microstrip {
    er: Permittivity,
    ratio: WhRatio,
}

impl Microstrip {
    pub fn new(er: Permittivity, ratio: WhRatio) -> Microstrip {
        Microstrip { er, ratio }
    }

    /// Microstrip from its physical width and substrate height
    pub fn from_dimensions(er: Permittivity, width: Length, height: Length) -> Result<Microstrip> {
        const OP: &str = "from_dimensions";
        let ratio = math::div(width.val(), height.val(), OP)?;
        Ok(Microstrip {
            er,
            ratio: WhRatio::new(math::positive(ratio, OP, "W/H")?),
        })
    }

    /// Synthesize the line for a target impedance, returning the solver record as well
    pub fn synthesize(
        zo: Impedance,
        er: Permittivity,
        config: &SolverConfig,
    ) -> Result<(Microstrip, Synthesis)> {
        let synthesis = synthesize_wh_ratio(zo, er, config)?;
        Ok((Microstrip::new(er, synthesis.ratio()), synthesis))
    }

    pub fn er(&self) -> Permittivity {
        self.er
    }

    pub fn ratio(&self) -> WhRatio {
        self.ratio
    }

    pub fn er_eff(&self) -> Result<Permittivity> {
        effective_permittivity(self.ratio, self.er)
    }

    pub fn z0(&self) -> Result<Impedance> {
        characteristic_impedance(self.ratio, self.er_eff()?)
    }

    /// Conductor width on a substrate of the given height
    pub fn width(&self, height: Length) -> Length {
        Length::new(self.ratio.val() * height.val())
    }
}
