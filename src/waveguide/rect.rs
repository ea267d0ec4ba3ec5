//! A rectangular guide described once and queried per frequency and mode.

use crate::{
    error::{Error, Result},
    math,
    unit::{
        Attenuation, Conductivity, Frequency, Impedance, Length, LossTangent, Permeability,
        Permittivity, Wavenumber,
    },
    waveguide::{
        characteristic_wave_impedance, characteristic_wave_impedance_complex,
        conduction_loss_te10, cutoff_frequency, dielectric_loss_from_beta, phase_constant,
        surface_resistivity, wave_number_omega,
    },
};
use ndarray::Array1;
use num_complex::Complex64;
use serde::Serialize;
use std::{f64::consts::PI, fmt};

/// Waveguide mode indices, m along the broad wall and n along the narrow wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Mode {
    m: u32,
    n: u32,
}

impl Mode {
    /// Dominant mode of a rectangular guide with a > b
    pub const TE10: Mode = Mode { m: 1, n: 0 };

    pub fn new(m: u32, n: u32) -> Result<Mode> {
        if m == 0 && n == 0 {
            return Err(Error::InvalidParameter(
                "mode indices m and n cannot both be zero".to_string(),
            ));
        }
        Ok(Mode { m, n })
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn n(&self) -> u32 {
        self.n
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}

/// Rectangular waveguide with homogeneous filling and uniform wall conductivity
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectWaveguide {
    id: String,
    a: Length,
    b: Length,
    er: Permittivity,
    ur: Permeability,
    tand: LossTangent,
    sigma: Conductivity,
}

impl RectWaveguide {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn a(&self) -> Length {
        self.a
    }

    pub fn b(&self) -> Length {
        self.b
    }

    pub fn er(&self) -> Permittivity {
        self.er
    }

    pub fn ur(&self) -> Permeability {
        self.ur
    }

    pub fn tand(&self) -> LossTangent {
        self.tand
    }

    pub fn sigma(&self) -> Conductivity {
        self.sigma
    }

    pub fn cutoff(&self, mode: Mode) -> Result<Frequency> {
        cutoff_frequency(self.a, self.b, self.er, mode.m, mode.n)
    }

    pub fn is_propagating(&self, freq: Frequency, mode: Mode) -> Result<bool> {
        Ok(freq.val() > self.cutoff(mode)?.val())
    }

    /// Wavenumber k of the filling medium
    pub fn wavenumber(&self, freq: Frequency) -> Result<Wavenumber> {
        wave_number_omega(freq.angular(), self.ur, self.er)
    }

    /// Phase constant β
    pub fn beta(&self, freq: Frequency, mode: Mode) -> Result<Wavenumber> {
        phase_constant(self.wavenumber(freq)?, self.a, self.b, mode.m, mode.n)
    }

    /// Guide wavelength 2π/β
    pub fn guide_wavelength(&self, freq: Frequency, mode: Mode) -> Result<Length> {
        math::div(2.0 * PI, self.beta(freq, mode)?.val(), "guide_wavelength").map(Length::new)
    }

    /// Dielectric attenuation αd
    pub fn alpha_d(&self, freq: Frequency, mode: Mode) -> Result<Attenuation> {
        let k = self.wavenumber(freq)?;
        let beta = phase_constant(k, self.a, self.b, mode.m, mode.n)?;
        dielectric_loss_from_beta(k, self.tand, beta)
    }

    /// Wall conduction attenuation αc of the TE10 mode
    pub fn alpha_c_te10(&self, freq: Frequency) -> Result<Attenuation> {
        let k = self.wavenumber(freq)?;
        let beta = phase_constant(k, self.a, self.b, 1, 0)?;
        let rs = surface_resistivity(freq.angular(), self.ur, self.sigma)?;
        conduction_loss_te10(rs, beta, k, self.a, self.b, self.ur, self.er)
    }

    /// Total TE10 attenuation αd + αc
    pub fn attenuation_te10(&self, freq: Frequency) -> Result<Attenuation> {
        Ok(self.alpha_d(freq, Mode::TE10)? + self.alpha_c_te10(freq)?)
    }

    pub fn wave_impedance(&self, freq: Frequency, mode: Mode) -> Result<Impedance> {
        characteristic_wave_impedance(self.ur, self.er, self.cutoff(mode)?, freq)
    }

    /// Wave impedance that stays defined below cutoff, where it is purely reactive
    pub fn wave_impedance_complex(&self, freq: Frequency, mode: Mode) -> Result<Complex64> {
        characteristic_wave_impedance_complex(self.ur, self.er, self.cutoff(mode)?, freq)
    }

    /// Total TE10 attenuation in dB/m at each frequency (Hz) of `freqs`
    pub fn attenuation_sweep(&self, freqs: &Array1<f64>) -> Result<Array1<f64>> {
        freqs
            .iter()
            .map(|&f| {
                self.attenuation_te10(Frequency::new(f))
                    .map(|alpha| alpha.db_per_meter())
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }

    /// Phase constant of `mode` at each frequency (Hz) of `freqs`
    pub fn beta_sweep(&self, freqs: &Array1<f64>, mode: Mode) -> Result<Array1<f64>> {
        freqs
            .iter()
            .map(|&f| self.beta(Frequency::new(f), mode).map(|b| b.val()))
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }
}

#[derive(Clone)]
pub struct RectWaveguideBuilder {
    id: String,
    a: Length,
    b: Length,
    er: Permittivity,
    ur: Permeability,
    tand: LossTangent,
    sigma: Conductivity,
}

impl RectWaveguideBuilder {
    pub fn new() -> Self {
        RectWaveguideBuilder::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn a(mut self, val: Length) -> Self {
        self.a = val;
        self
    }

    pub fn b(mut self, val: Length) -> Self {
        self.b = val;
        self
    }

    pub fn er(mut self, val: f64) -> Self {
        self.er = Permittivity::new(val);
        self
    }

    pub fn ur(mut self, val: f64) -> Self {
        self.ur = Permeability::new(val);
        self
    }

    pub fn tand(mut self, val: f64) -> Self {
        self.tand = LossTangent::new(val);
        self
    }

    pub fn sigma(mut self, val: Conductivity) -> Self {
        self.sigma = val;
        self
    }

    pub fn build(self) -> Result<RectWaveguide> {
        if !(self.b.val() > 0.0 && self.a.val() > self.b.val()) {
            return Err(Error::InvalidParameter(format!(
                "{}: expected a > b > 0, got a = {}, b = {}",
                self.id, self.a, self.b
            )));
        }
        if !(self.er.val() > 0.0 && self.ur.val() > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "{}: er and ur must be positive",
                self.id
            )));
        }
        if self.tand.val() < 0.0 || !(self.sigma.val() > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "{}: tand must be non-negative and sigma positive",
                self.id
            )));
        }

        Ok(RectWaveguide {
            id: self.id,
            a: self.a,
            b: self.b,
            er: self.er,
            ur: self.ur,
            tand: self.tand,
            sigma: self.sigma,
        })
    }
}

impl Default for RectWaveguideBuilder {
    /// Air filled WR-90 with copper walls
    fn default() -> Self {
        Self {
            id: "WG0".to_string(),
            a: Length::new(22.86e-3),
            b: Length::new(10.16e-3),
            er: Permittivity::new(1.0),
            ur: Permeability::new(1.0),
            tand: LossTangent::new(0.0),
            sigma: Conductivity::new(58.0e6),
        }
    }
}

#[cfg(test)]
mod rect_waveguide_tests {
    use super::*;
    use float_cmp::{approx_eq, F64Margin};

    const DEFAULT_MARGIN: F64Margin = F64Margin {
        epsilon: 1e-10,
        ulps: 4,
    };

    const RELAXED_MARGIN: F64Margin = F64Margin {
        epsilon: 1e-6,
        ulps: 10,
    };

    fn ghz(val: f64) -> Frequency {
        Frequency::new(val * 1e9)
    }

    #[test]
    fn test_mode() {
        assert_eq!(Mode::new(1, 0).unwrap(), Mode::TE10);
        assert_eq!(Mode::new(0, 1).unwrap().n(), 1);
        assert!(Mode::new(0, 0).is_err());
        assert_eq!(Mode::TE10.to_string(), "(1, 0)");
    }

    #[test]
    fn test_builder_default() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        assert_eq!(wg.id(), "WG0");
        assert_eq!(wg.er(), Permittivity::new(1.0));
        assert_eq!(wg.ur(), Permeability::new(1.0));
        assert_eq!(wg.tand(), LossTangent::new(0.0));
        assert_eq!(wg.sigma().val(), 5.8e7);
        assert!(approx_eq!(f64, wg.a().val(), 0.02286, DEFAULT_MARGIN));
        assert!(approx_eq!(f64, wg.b().val(), 0.01016, DEFAULT_MARGIN));
    }

    #[test]
    fn test_builder_validation() {
        let calc = RectWaveguideBuilder::new()
            .a(Length::new(10e-3))
            .b(Length::new(20e-3))
            .build();
        assert!(matches!(calc, Err(Error::InvalidParameter(_))));

        assert!(RectWaveguideBuilder::new().er(0.0).build().is_err());
        assert!(RectWaveguideBuilder::new().tand(-0.1).build().is_err());
        assert!(RectWaveguideBuilder::new()
            .sigma(Conductivity::new(0.0))
            .build()
            .is_err());
    }

    #[test]
    fn test_cutoff_and_propagation() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let fc10 = wg.cutoff(Mode::TE10).unwrap();
        let fc20 = wg.cutoff(Mode::new(2, 0).unwrap()).unwrap();
        let fc01 = wg.cutoff(Mode::new(0, 1).unwrap()).unwrap();

        assert!(approx_eq!(f64, fc20.val() / fc10.val(), 2.0, DEFAULT_MARGIN));
        assert!(fc01.val() > fc10.val());

        assert!(wg.is_propagating(ghz(10.0), Mode::TE10).unwrap());
        assert!(!wg.is_propagating(ghz(10.0), Mode::new(2, 0).unwrap()).unwrap());
        assert!(!wg.is_propagating(ghz(5.0), Mode::TE10).unwrap());
    }

    #[test]
    fn test_beta_and_guide_wavelength() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let beta = wg.beta(ghz(10.0), Mode::TE10).unwrap();
        assert!(approx_eq!(f64, beta.val(), 158.238_256_313_013_7, RELAXED_MARGIN));

        let lg = wg.guide_wavelength(ghz(10.0), Mode::TE10).unwrap();
        assert!(approx_eq!(f64, lg.val(), 0.039_707_119_211_113_61, RELAXED_MARGIN));

        assert!(wg.beta(ghz(5.0), Mode::TE10).unwrap_err().is_domain());
    }

    #[test]
    fn test_losses() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let alpha_c = wg.alpha_c_te10(ghz(10.0)).unwrap();
        assert!(approx_eq!(f64, alpha_c.val(), 0.012_478_323_017_108_75, RELAXED_MARGIN));

        // lossless filling
        assert_eq!(wg.alpha_d(ghz(10.0), Mode::TE10).unwrap().val(), 0.0);
        assert_eq!(wg.attenuation_te10(ghz(10.0)).unwrap(), alpha_c);

        let filled = RectWaveguideBuilder::new()
            .er(2.08)
            .tand(0.0004)
            .build()
            .unwrap();
        let alpha_d = filled.alpha_d(ghz(10.0), Mode::TE10).unwrap();
        assert!(approx_eq!(f64, alpha_d.val(), 0.067_874_302_266_643_54, RELAXED_MARGIN));

        let total = filled.attenuation_te10(ghz(10.0)).unwrap();
        let alpha_c = filled.alpha_c_te10(ghz(10.0)).unwrap();
        assert!(approx_eq!(
            f64,
            total.val(),
            alpha_d.val() + alpha_c.val(),
            DEFAULT_MARGIN
        ));
    }

    #[test]
    fn test_wave_impedance() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let z = wg.wave_impedance(ghz(10.0), Mode::TE10).unwrap();
        assert!(approx_eq!(f64, z.val(), 498.974_376_307_016_1, RELAXED_MARGIN));
        assert!(wg.wave_impedance(ghz(6.0), Mode::TE10).is_err());

        let zc = wg.wave_impedance_complex(ghz(6.0), Mode::TE10).unwrap();
        // evanescent TE mode stores magnetic energy
        assert!(zc.im > 0.0);
        assert_eq!(zc.re, 0.0);
    }

    #[test]
    fn test_attenuation_sweep() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let freqs = Frequency::linspace(ghz(8.2), ghz(12.4), 43);
        let sweep = wg.attenuation_sweep(&freqs).unwrap();

        assert_eq!(sweep.len(), 43);
        assert!(sweep.iter().all(|&x| x > 0.0));
        // conductor loss of TE10 falls across the X band
        assert!(sweep[0] > sweep[42]);

        let single = wg.attenuation_te10(ghz(8.2)).unwrap().db_per_meter();
        assert!(approx_eq!(f64, sweep[0], single, DEFAULT_MARGIN));
    }

    #[test]
    fn test_sweep_below_cutoff() {
        let wg = RectWaveguideBuilder::new().build().unwrap();
        let freqs = Frequency::linspace(ghz(5.0), ghz(10.0), 6);
        assert!(wg.attenuation_sweep(&freqs).unwrap_err().is_domain());

        let beta = wg
            .beta_sweep(&Frequency::linspace(ghz(8.0), ghz(12.0), 5), Mode::TE10)
            .unwrap();
        assert!(beta.iter().zip(beta.iter().skip(1)).all(|(lo, hi)| hi > lo));
    }
}
