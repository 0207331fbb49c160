use std::str::FromStr;

use glam::DVec3;
use rayon::prelude::*;

use crate::{
    equation_of_state::EquationOfState,
    errors::FluxError,
    flux::{FaceFlux, FaceProblem},
    physical_quantities::{AnyState, Conserved, State},
    riemann_pattern::RiemannPattern,
};

mod llf;
mod pvl;

pub use llf::LlfRiemannSolver;
pub use pvl::PvlRiemannSolver;

/// Subset of primitive variables used to parameterize the linearization.
///
/// All three currently select the same formulas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Linearization {
    #[default]
    U23,
    Up23,
    Upr23,
}

impl Linearization {
    pub fn label(&self) -> &'static str {
        match self {
            Linearization::U23 => "u23",
            Linearization::Up23 => "up23",
            Linearization::Upr23 => "upr23",
        }
    }
}

impl FromStr for Linearization {
    type Err = FluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u23" => Ok(Linearization::U23),
            "up23" => Ok(Linearization::Up23),
            "upr23" => Ok(Linearization::Upr23),
            _ => Err(FluxError::UnknownLinearization(s.to_string())),
        }
    }
}

/// Interface flux between two states of the Euler equations.
///
/// `solve` is a pure function of its arguments, so faces can be evaluated in any order
/// and in parallel.
pub trait RiemannSolver: Sync {
    fn label(&self) -> &'static str;

    /// Configure the solver with one of `"u23"`, `"up23"` or `"upr23"`.
    fn initialize(&mut self, config: &str) -> Result<(), FluxError>;

    fn solve(
        &self,
        eos_l: &EquationOfState,
        left: &State<Conserved>,
        eos_r: &EquationOfState,
        right: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<State<Conserved>, FluxError>;

    /// Upper bound on the absolute wave speeds of the local Riemann problem.
    fn max_wave_speed(
        &self,
        eos_l: &EquationOfState,
        left: &State<Conserved>,
        eos_r: &EquationOfState,
        right: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<f64, FluxError> {
        let mut pattern = RiemannPattern::new(eos_l, left, eos_r, right, n_unit)?;
        pattern.compute_waves_extrema();
        pattern
            .max_wave_speed()
            .ok_or(FluxError::IncompleteWavePattern)
    }

    /// Solve for states whose variant is only known at run time.
    ///
    /// Both states must be conserved states.
    fn solve_any(
        &self,
        eos_l: &EquationOfState,
        left: &AnyState,
        eos_r: &EquationOfState,
        right: &AnyState,
        n_unit: DVec3,
    ) -> Result<AnyState, FluxError> {
        let left = left.into_conserved("left state of Riemann problem")?;
        let right = right.into_conserved("right state of Riemann problem")?;
        Ok(self.solve(eos_l, &left, eos_r, &right, n_unit)?.into())
    }

    fn solve_face(&self, face: &FaceProblem) -> Result<FaceFlux, FluxError> {
        let flux = self.solve(
            &face.eos_left,
            &face.left,
            &face.eos_right,
            &face.right,
            face.n_unit,
        )?;
        let v_max = self.max_wave_speed(
            &face.eos_left,
            &face.left,
            &face.eos_right,
            &face.right,
            face.n_unit,
        )?;
        Ok(FaceFlux {
            fluxes: face.area * flux,
            v_max,
        })
    }

    /// Evaluate many independent faces in parallel.
    fn solve_faces(&self, faces: &[FaceProblem]) -> Vec<Result<FaceFlux, FluxError>> {
        log::trace!("Solving {} faces with {} solver", faces.len(), self.label());
        faces.par_iter().map(|face| self.solve_face(face)).collect()
    }
}

/// The available Riemann solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiemannSolverKind {
    Pvl(PvlRiemannSolver),
    Llf(LlfRiemannSolver),
}

impl RiemannSolver for RiemannSolverKind {
    fn label(&self) -> &'static str {
        match self {
            RiemannSolverKind::Pvl(solver) => solver.label(),
            RiemannSolverKind::Llf(solver) => solver.label(),
        }
    }

    fn initialize(&mut self, config: &str) -> Result<(), FluxError> {
        match self {
            RiemannSolverKind::Pvl(solver) => solver.initialize(config),
            RiemannSolverKind::Llf(solver) => solver.initialize(config),
        }
    }

    fn solve(
        &self,
        eos_l: &EquationOfState,
        left: &State<Conserved>,
        eos_r: &EquationOfState,
        right: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<State<Conserved>, FluxError> {
        match self {
            RiemannSolverKind::Pvl(solver) => solver.solve(eos_l, left, eos_r, right, n_unit),
            RiemannSolverKind::Llf(solver) => solver.solve(eos_l, left, eos_r, right, n_unit),
        }
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
    fn test_linearization_parsing() {
        assert_eq!("u23".parse::<Linearization>(), Ok(Linearization::U23));
        assert_eq!("up23".parse::<Linearization>(), Ok(Linearization::Up23));
        assert_eq!("upr23".parse::<Linearization>(), Ok(Linearization::Upr23));
        assert_eq!(
            "roe".parse::<Linearization>(),
            Err(FluxError::UnknownLinearization("roe".to_string()))
        );
        assert_eq!(Linearization::default().label(), "u23");
    }

    #[test]
    fn test_kind_dispatch() {
        let eos = get_eos();
        let left = conserved(&eos, 1.2, DVec3::new(30., 5., 0.), 101325.);
        let right = conserved(&eos, 0.9, DVec3::new(-10., 0., 2.), 80000.);
        let n_unit = DVec3::new(0.6, 0.8, 0.);

        let mut kind = RiemannSolverKind::Pvl(PvlRiemannSolver::default());
        kind.initialize("upr23").unwrap();
        assert_eq!(kind.label(), "PVL");
        assert_eq!(
            kind.solve(&eos, &left, &eos, &right, n_unit).unwrap(),
            PvlRiemannSolver::default()
                .solve(&eos, &left, &eos, &right, n_unit)
                .unwrap()
        );

        let kind = RiemannSolverKind::Llf(LlfRiemannSolver);
        assert_eq!(kind.label(), "LLF");
        assert_eq!(
            kind.solve(&eos, &left, &eos, &right, n_unit).unwrap(),
            LlfRiemannSolver.solve(&eos, &left, &eos, &right, n_unit).unwrap()
        );
    }

    #[test]
    fn test_solve_any() {
        let eos = get_eos();
        let left = conserved(&eos, 1., DVec3::ZERO, 1.);
        let right = conserved(&eos, 0.125, DVec3::ZERO, 0.1);
        let solver = RiemannSolverKind::Llf(LlfRiemannSolver);

        let flux = solver
            .solve_any(&eos, &left.into(), &eos, &right.into(), DVec3::X)
            .unwrap();
        assert_eq!(
            flux,
            AnyState::Conserved(solver.solve(&eos, &left, &eos, &right, DVec3::X).unwrap())
        );

        let primitive = State::<Primitive>::new(0.125, DVec3::ZERO, 0.1);
        assert_eq!(
            solver.solve_any(&eos, &left.into(), &eos, &primitive.into(), DVec3::X),
            Err(FluxError::VariantMismatch {
                expected: "conserved",
                found: "primitive",
                context: "right state of Riemann problem",
            })
        );
    }

    #[test]
    fn test_max_wave_speed() {
        let eos = get_eos();
        let left = conserved(&eos, 1.2, 100. * DVec3::X, 101325.);
        let right = conserved(&eos, 1.2, -50. * DVec3::X, 101325.);
        let a = eos.speed_of_sound(1.2, 101325.);
        let v_max = LlfRiemannSolver
            .max_wave_speed(&eos, &left, &eos, &right, DVec3::X)
            .unwrap();
        assert_approx_eq!(f64, v_max, 100. + a, epsilon = 1e-9);
    }
}
