//! Exact conversions between primitive and conserved states.

use crate::{
    equation_of_state::{EnergyFrom, EquationOfState},
    errors::FluxError,
    physical_quantities::{AnyState, Conserved, Primitive, State},
};

impl State<Primitive> {
    pub fn from_conserved(
        conserved: &State<Conserved>,
        eos: &EquationOfState,
    ) -> Result<Self, FluxError> {
        let velocity = conserved.velocity()?;
        let pressure = conserved.pressure(eos)?;
        Ok(Self::new(conserved.density(), velocity, pressure))
    }
}

impl State<Conserved> {
    pub fn from_primitives(primitives: &State<Primitive>, eos: &EquationOfState) -> Self {
        let density = primitives.density();
        let momentum = primitives.momentum();
        let energy = 0.5 * momentum.dot(primitives.velocity())
            + density
                * eos.energy(EnergyFrom::DensityPressure {
                    density,
                    pressure: primitives.pressure(),
                });
        Self::new(density, momentum, energy)
    }
}

pub fn primitive_to_conservative(
    primitives: &State<Primitive>,
    eos: &EquationOfState,
) -> State<Conserved> {
    State::<Conserved>::from_primitives(primitives, eos)
}

pub fn conservative_to_primitive(
    conserved: &State<Conserved>,
    eos: &EquationOfState,
) -> Result<State<Primitive>, FluxError> {
    State::<Primitive>::from_conserved(conserved, eos)
}

/// Convert a state of either variant to its conserved representation.
pub fn to_conserved(state: &AnyState, eos: &EquationOfState) -> State<Conserved> {
    match state {
        AnyState::Conserved(conserved) => *conserved,
        AnyState::Primitive(primitives) => primitive_to_conservative(primitives, eos),
    }
}
