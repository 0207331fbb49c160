use glam::DVec3;

use crate::{
    equation_of_state::EquationOfState,
    errors::FluxError,
    physical_quantities::{Conserved, State},
    riemann_pattern::RiemannPattern,
};

use super::{Linearization, RiemannSolver};

/// Local Lax-Friedrichs (Rusanov) Riemann solver.
///
/// `F = (F_L + F_R - max(|s1|, |s4|) (U_R - U_L)) / 2`
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LlfRiemannSolver;

impl RiemannSolver for LlfRiemannSolver {
    fn label(&self) -> &'static str {
        "LLF"
    }

    fn initialize(&mut self, config: &str) -> Result<(), FluxError> {
        // Only the outer wave speeds are used, so the linearization is irrelevant
        let linearization: Linearization = config.parse()?;
        log::debug!(
            "Initialized LLF Riemann solver (ignoring linearization {})",
            linearization.label()
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
        pattern.compute_waves_extrema();
        let s_max = pattern
            .max_wave_speed()
            .ok_or(FluxError::IncompleteWavePattern)?;

        let flux_l = left.compute_fluxes(eos_l, n_unit)?;
        let flux_r = right.compute_fluxes(eos_r, n_unit)?;

        Ok(0.5 * (flux_l + flux_r - s_max * (*right - *left)))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        equation_of_state::{make_eos, EosParameters},
        physical_quantities::Primitive,
    };

    fn get_eos() -> EquationOfState {
        make_eos(EosParameters::GammaR { gamma: 1.4, r: 287. }).unwrap()
    }

    fn conserved(eos: &EquationOfState, rho: f64, v: DVec3, p: f64) -> State<Conserved> {
        State::<Conserved>::from_primitives(&State::<Primitive>::new(rho, v, p), eos)
    }

    #[test]
    fn test_llf_solver() {
        let eos = get_eos();
        let left = conserved(&eos, 1., DVec3::ZERO, 1.);
        let right = conserved(&eos, 0.125, DVec3::ZERO, 0.1);
        let fluxes = LlfRiemannSolver
            .solve(&eos, &left, &eos, &right, DVec3::X)
            .unwrap();

        let s_max = 1.4f64.sqrt();
        let e_l = 1. / 0.4;
        let e_r = 0.1 / 0.4;
        assert_approx_eq!(
            f64,
            fluxes.density(),
            -0.5 * s_max * (0.125 - 1.),
            epsilon = 1e-12
        );
        assert_approx_eq!(f64, fluxes.momentum().x, 0.5 * (1. + 0.1), epsilon = 1e-12);
        assert_approx_eq!(f64, fluxes.momentum().y, 0.);
        assert_approx_eq!(
            f64,
            fluxes.energy(),
            -0.5 * s_max * (e_r - e_l),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_llf_is_more_dissipative_than_pvl() {
        let eos = get_eos();
        let left = conserved(&eos, 1., DVec3::ZERO, 1.);
        let right = conserved(&eos, 0.125, DVec3::ZERO, 0.1);
        let llf = LlfRiemannSolver
            .solve(&eos, &left, &eos, &right, DVec3::X)
            .unwrap();
        let pvl = super::super::PvlRiemannSolver::default()
            .solve(&eos, &left, &eos, &right, DVec3::X)
            .unwrap();
        assert!(llf.density() > pvl.density());
    }

    #[test]
    fn test_initialize() {
        let mut solver = LlfRiemannSolver;
        assert!(solver.initialize("up23").is_ok());
        assert_eq!(
            solver.initialize("exact"),
            Err(FluxError::UnknownLinearization("exact".to_string()))
        );
    }
}
