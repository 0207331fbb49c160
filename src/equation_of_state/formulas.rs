use crate::errors::FluxError;

/// Arguments from which a density can be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityFrom {
    /// `rho = p / ((gamma - 1) e)`
    EnergyPressure { energy: f64, pressure: f64 },
    /// `rho = gamma p / a^2`
    PressureSoundSpeed { pressure: f64, speed_of_sound: f64 },
    /// `rho = p / (R T)`
    PressureTemperature { pressure: f64, temperature: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressureFrom {
    DensityEnergy { density: f64, energy: f64 },
    DensityTemperature { density: f64, temperature: f64 },
}

/// Arguments from which a specific internal energy can be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyFrom {
    DensityPressure { density: f64, pressure: f64 },
    Temperature { temperature: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureFrom {
    DensityPressure { density: f64, pressure: f64 },
    Energy { energy: f64 },
}

/// Loose collection of optional thermodynamic arguments.
///
/// Converting it into one of the formula selectors succeeds only when the supplied
/// arguments are exactly one recognised combination.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ThermoArgs {
    pub density: Option<f64>,
    pub pressure: Option<f64>,
    pub energy: Option<f64>,
    pub temperature: Option<f64>,
    pub speed_of_sound: Option<f64>,
}

impl ThermoArgs {
    pub fn density(mut self, value: f64) -> Self {
        self.density = Some(value);
        self
    }

    pub fn pressure(mut self, value: f64) -> Self {
        self.pressure = Some(value);
        self
    }

    pub fn energy(mut self, value: f64) -> Self {
        self.energy = Some(value);
        self
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = Some(value);
        self
    }

    pub fn speed_of_sound(mut self, value: f64) -> Self {
        self.speed_of_sound = Some(value);
        self
    }

    fn supplied(&self) -> String {
        [
            ("density", self.density),
            ("pressure", self.pressure),
            ("energy", self.energy),
            ("temperature", self.temperature),
            ("speed_of_sound", self.speed_of_sound),
        ]
        .iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
    }

    fn invalid(&self, quantity: &'static str) -> FluxError {
        FluxError::InvalidArgumentCombination {
            quantity,
            supplied: self.supplied(),
        }
    }
}

impl TryFrom<&ThermoArgs> for DensityFrom {
    type Error = FluxError;

    fn try_from(args: &ThermoArgs) -> Result<Self, Self::Error> {
        match (
            args.density,
            args.pressure,
            args.energy,
            args.temperature,
            args.speed_of_sound,
        ) {
            (None, Some(pressure), Some(energy), None, None) => {
                Ok(DensityFrom::EnergyPressure { energy, pressure })
            }
            (None, Some(pressure), None, None, Some(speed_of_sound)) => {
                Ok(DensityFrom::PressureSoundSpeed {
                    pressure,
                    speed_of_sound,
                })
            }
            (None, Some(pressure), None, Some(temperature), None) => {
                Ok(DensityFrom::PressureTemperature {
                    pressure,
                    temperature,
                })
            }
            _ => Err(args.invalid("density")),
        }
    }
}

impl TryFrom<&ThermoArgs> for PressureFrom {
    type Error = FluxError;

    fn try_from(args: &ThermoArgs) -> Result<Self, Self::Error> {
        match (
            args.density,
            args.pressure,
            args.energy,
            args.temperature,
            args.speed_of_sound,
        ) {
            (Some(density), None, Some(energy), None, None) => {
                Ok(PressureFrom::DensityEnergy { density, energy })
            }
            (Some(density), None, None, Some(temperature), None) => {
                Ok(PressureFrom::DensityTemperature {
                    density,
                    temperature,
                })
            }
            _ => Err(args.invalid("pressure")),
        }
    }
}

impl TryFrom<&ThermoArgs> for EnergyFrom {
    type Error = FluxError;

    fn try_from(args: &ThermoArgs) -> Result<Self, Self::Error> {
        match (
            args.density,
            args.pressure,
            args.energy,
            args.temperature,
            args.speed_of_sound,
        ) {
            (Some(density), Some(pressure), None, None, None) => {
                Ok(EnergyFrom::DensityPressure { density, pressure })
            }
            (None, None, None, Some(temperature), None) => {
                Ok(EnergyFrom::Temperature { temperature })
            }
            _ => Err(args.invalid("energy")),
        }
    }
}

impl TryFrom<&ThermoArgs> for TemperatureFrom {
    type Error = FluxError;

    fn try_from(args: &ThermoArgs) -> Result<Self, Self::Error> {
        match (
            args.density,
            args.pressure,
            args.energy,
            args.temperature,
            args.speed_of_sound,
        ) {
            (Some(density), Some(pressure), None, None, None) => {
                Ok(TemperatureFrom::DensityPressure { density, pressure })
            }
            (None, None, Some(energy), None, None) => Ok(TemperatureFrom::Energy { energy }),
            _ => Err(args.invalid("temperature")),
        }
    }
}
