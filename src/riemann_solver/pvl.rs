use glam::DVec3;

use crate::{
    equation_of_state::EquationOfState,
    errors::FluxError,
    physical_quantities::{Conserved, State},
    riemann_pattern::RiemannPattern,
};

use super::{Linearization, RiemannSolver};

/// Primitive variable linearization Riemann solver.
///
/// Samples the flux of whichever region of the linearized wave fan contains the
/// interface.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PvlRiemannSolver {
    linearization: Linearization,
}

impl PvlRiemannSolver {
    pub fn new(linearization: Linearization) -> Self {
        Self { linearization }
    }

    pub fn linearization(&self) -> Linearization {
        self.linearization
    }
}

impl RiemannSolver for PvlRiemannSolver {
    fn label(&self) -> &'static str {
        "PVL"
    }

    fn initialize(&mut self, config: &str) -> Result<(), FluxError> {
        self.linearization = config.parse()?;
        log::debug!(
            "Initialized PVL Riemann solver with linearization {}",
            self.linearization.label()
        );
        Ok(())
    }

    fn solve(
        &self,
        eos_l: &EquationOfState,
        left: &State<Conserved>,
        eos_r: &EquationOfState,
        right: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<State<Conserved>, FluxError> {
        let mut pattern = RiemannPattern::new(eos_l, left, eos_r, right, n_unit)?;
        match self.linearization {
            Linearization::U23 | Linearization::Up23 | Linearization::Upr23 => {
                pattern.compute_waves()
            }
        }
        pattern.compute_fluxes(n_unit)
    }
}
