use std::fmt::Display;

use crate::errors::FluxError;

mod formulas;

pub use formulas::{DensityFrom, EnergyFrom, PressureFrom, TemperatureFrom, ThermoArgs};

/// Number of significant digits used in human readable descriptions.
pub(crate) const DESCRIPTION_DIGITS: usize = 6;

/// Any two of the four ideal gas constants `cp`, `cv`, `gamma` and `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EosParameters {
    CpCv { cp: f64, cv: f64 },
    CpGamma { cp: f64, gamma: f64 },
    CpR { cp: f64, r: f64 },
    CvGamma { cv: f64, gamma: f64 },
    CvR { cv: f64, r: f64 },
    GammaR { gamma: f64, r: f64 },
}

impl EosParameters {
    /// Solve for the heat capacities `(cp, cv)`.
    fn heat_capacities(&self) -> (f64, f64) {
        match *self {
            EosParameters::CpCv { cp, cv } => (cp, cv),
            EosParameters::CpGamma { cp, gamma } => (cp, cp / gamma),
            EosParameters::CpR { cp, r } => (cp, cp - r),
            EosParameters::CvGamma { cv, gamma } => (gamma * cv, cv),
            EosParameters::CvR { cv, r } => (cv + r, cv),
            EosParameters::GammaR { gamma, r } => {
                let cv = r / (gamma - 1.);
                (gamma * cv, cv)
            }
        }
    }
}

/// Calorically perfect ideal gas.
///
/// All derived constants are computed when the gas is constructed (or its parameters are
/// reset), never lazily.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas {
    cp: f64,
    cv: f64,
    /* cp / cv */
    gamma: f64,
    /* cp - cv */
    r: f64,
    /* gamma - 1 */
    gm1: f64,
    /* gamma + 1 */
    gp1: f64,
    /* (gamma - 1) / 2 */
    delta: f64,
    /* 2 gamma / (gamma - 1) */
    eta: f64,
}

impl IdealGas {
    pub fn new(parameters: EosParameters) -> Result<Self, FluxError> {
        let (cp, cv) = parameters.heat_capacities();
        if !(cv > 0.) || !(cp > cv) || !cp.is_finite() {
            return Err(FluxError::InvalidEos { cp, cv });
        }
        let gamma = cp / cv;
        let gm1 = gamma - 1.;
        Ok(Self {
            cp,
            cv,
            gamma,
            r: cp - cv,
            gm1,
            gp1: gamma + 1.,
            delta: 0.5 * gm1,
            eta: 2. * gamma / gm1,
        })
    }

    /// Reset the gas constants, recomputing every derived quantity.
    ///
    /// On error the gas is left untouched.
    pub fn set_parameters(&mut self, parameters: EosParameters) -> Result<(), FluxError> {
        *self = Self::new(parameters)?;
        Ok(())
    }

    pub fn cp(&self) -> f64 {
        self.cp
    }

    pub fn cv(&self) -> f64 {
        self.cv
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Specific gas constant
    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn gm1(&self) -> f64 {
        self.gm1
    }

    pub fn gp1(&self) -> f64 {
        self.gp1
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn density(&self, from: DensityFrom) -> f64 {
        match from {
            DensityFrom::EnergyPressure { energy, pressure } => pressure / (self.gm1 * energy),
            DensityFrom::PressureSoundSpeed {
                pressure,
                speed_of_sound,
            } => self.gamma * pressure / (speed_of_sound * speed_of_sound),
            DensityFrom::PressureTemperature {
                pressure,
                temperature,
            } => pressure / (self.r * temperature),
        }
    }

    pub fn pressure(&self, from: PressureFrom) -> f64 {
        match from {
            PressureFrom::DensityEnergy { density, energy } => density * self.gm1 * energy,
            PressureFrom::DensityTemperature {
                density,
                temperature,
            } => density * self.r * temperature,
        }
    }

    /// Specific internal energy
    pub fn energy(&self, from: EnergyFrom) -> f64 {
        match from {
            EnergyFrom::DensityPressure { density, pressure } => pressure / (density * self.gm1),
            EnergyFrom::Temperature { temperature } => self.cv * temperature,
        }
    }

    pub fn temperature(&self, from: TemperatureFrom) -> f64 {
        match from {
            TemperatureFrom::DensityPressure { density, pressure } => {
                pressure / (self.r * density)
            }
            TemperatureFrom::Energy { energy } => energy / self.cv,
        }
    }

    pub fn speed_of_sound(&self, density: f64, pressure: f64) -> f64 {
        (self.gamma * pressure / density).sqrt()
    }
}

impl Display for IdealGas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = DESCRIPTION_DIGITS - 1;
        writeln!(f, "cp = {:.*e}", p, self.cp)?;
        writeln!(f, "cv = {:.*e}", p, self.cv)?;
        writeln!(f, "gamma = {:.*e}", p, self.gamma)?;
        writeln!(f, "R = {:.*e}", p, self.r)?;
        writeln!(f, "gm1 = {:.*e}", p, self.gm1)?;
        writeln!(f, "gp1 = {:.*e}", p, self.gp1)?;
        writeln!(f, "delta = {:.*e}", p, self.delta)?;
        write!(f, "eta = {:.*e}", p, self.eta)
    }
}

/// Equation of state relating density, pressure, temperature and energy.
///
/// Only the ideal gas is currently available; solvers dispatch on this enum so new
/// variants do not require changes to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquationOfState {
    Ideal(IdealGas),
}

/// Build an ideal gas equation of state from any two of `cp`, `cv`, `gamma` and `R`.
pub fn make_eos(parameters: EosParameters) -> Result<EquationOfState, FluxError> {
    Ok(EquationOfState::Ideal(IdealGas::new(parameters)?))
}

impl EquationOfState {
    pub fn label(&self) -> &'static str {
        match self {
            EquationOfState::Ideal(_) => "Ideal",
        }
    }

    pub fn cp(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.cp(),
        }
    }

    pub fn cv(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.cv(),
        }
    }

    pub fn gamma(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.gamma(),
        }
    }

    pub fn r(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.r(),
        }
    }

    pub fn gm1(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.gm1(),
        }
    }

    pub fn gp1(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.gp1(),
        }
    }

    pub fn delta(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.delta(),
        }
    }

    pub fn eta(&self) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.eta(),
        }
    }

    pub fn density(&self, from: DensityFrom) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.density(from),
        }
    }

    pub fn pressure(&self, from: PressureFrom) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.pressure(from),
        }
    }

    pub fn energy(&self, from: EnergyFrom) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.energy(from),
        }
    }

    pub fn temperature(&self, from: TemperatureFrom) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.temperature(from),
        }
    }

    pub fn speed_of_sound(&self, density: f64, pressure: f64) -> f64 {
        match self {
            EquationOfState::Ideal(gas) => gas.speed_of_sound(density, pressure),
        }
    }

    /// Density from a loose set of optional arguments.
    ///
    /// Fails unless the supplied arguments form exactly one recognised combination.
    pub fn density_from_args(&self, args: &ThermoArgs) -> Result<f64, FluxError> {
        Ok(self.density(DensityFrom::try_from(args)?))
    }

    pub fn pressure_from_args(&self, args: &ThermoArgs) -> Result<f64, FluxError> {
        Ok(self.pressure(PressureFrom::try_from(args)?))
    }

    pub fn energy_from_args(&self, args: &ThermoArgs) -> Result<f64, FluxError> {
        Ok(self.energy(EnergyFrom::try_from(args)?))
    }

    pub fn temperature_from_args(&self, args: &ThermoArgs) -> Result<f64, FluxError> {
        Ok(self.temperature(TemperatureFrom::try_from(args)?))
    }

    /// Downcast to the ideal gas realisation.
    pub fn as_ideal(&self) -> Result<&IdealGas, FluxError> {
        match self {
            EquationOfState::Ideal(gas) => Ok(gas),
        }
    }
}

impl From<IdealGas> for EquationOfState {
    fn from(gas: IdealGas) -> Self {
        EquationOfState::Ideal(gas)
    }
}

impl Display for EquationOfState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquationOfState::Ideal(gas) => {
                writeln!(f, "kind = {}", self.label())?;
                write!(f, "{}", gas)
            }
        }
    }
}
