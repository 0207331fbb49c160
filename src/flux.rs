use glam::DVec3;

use crate::{
    equation_of_state::EquationOfState,
    physical_quantities::{Conserved, State},
};

/// The inputs of a single face evaluation, as assembled by a finite volume loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceProblem {
    pub eos_left: EquationOfState,
    pub left: State<Conserved>,
    pub eos_right: EquationOfState,
    pub right: State<Conserved>,
    /// Unit normal pointing from left to right
    pub n_unit: DVec3,
    /// Fluxes are scaled by this area
    pub area: f64,
}

impl FaceProblem {
    pub fn new(
        eos_left: EquationOfState,
        left: State<Conserved>,
        eos_right: EquationOfState,
        right: State<Conserved>,
        n_unit: DVec3,
    ) -> Self {
        Self {
            eos_left,
            left,
            eos_right,
            right,
            n_unit,
            area: 1.,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// The same face seen from the right hand side.
    pub fn reversed(&self) -> Self {
        Self {
            eos_left: self.eos_right,
            left: self.right,
            eos_right: self.eos_left,
            right: self.left,
            n_unit: -self.n_unit,
            area: self.area,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFlux {
    pub fluxes: State<Conserved>,
    /// Maximal signal velocity, used for time step computation
    pub v_max: f64,
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        equation_of_state::{make_eos, EosParameters},
        errors::FluxError,
        physical_quantities::Primitive,
        riemann_solver::{LlfRiemannSolver, PvlRiemannSolver, RiemannSolver},
    };

    fn faces() -> Vec<FaceProblem> {
        let eos = make_eos(EosParameters::CvGamma { cv: 1., gamma: 1.4 }).unwrap();
        (0..64)
            .map(|i| {
                let x = i as f64 / 64.;
                let left = State::<Primitive>::new(1. + x, DVec3::new(x, 0.2, 0.), 1. + 0.5 * x);
                let right = State::<Primitive>::new(0.5, DVec3::new(-x, 0., 0.1), 0.4);
                let n_unit = DVec3::new(x, 1., 0.).normalize();
                FaceProblem::new(
                    eos,
                    State::<Conserved>::from_primitives(&left, &eos),
                    eos,
                    State::<Conserved>::from_primitives(&right, &eos),
                    n_unit,
                )
                .with_area(0.5)
            })
            .collect()
    }

    #[test]
    fn test_parallel_faces_match_serial() {
        let faces = faces();
        for solver in [
            &PvlRiemannSolver::default() as &dyn RiemannSolver,
            &LlfRiemannSolver as &dyn RiemannSolver,
        ] {
            let results = solver.solve_faces(&faces);
            assert_eq!(results.len(), faces.len());
            for (face, result) in faces.iter().zip(results) {
                let face_flux = result.unwrap();
                let flux = solver
                    .solve(&face.eos_left, &face.left, &face.eos_right, &face.right, face.n_unit)
                    .unwrap();
                assert_eq!(face_flux.fluxes, 0.5 * flux);
                assert!(face_flux.v_max > 0.);
            }
        }
    }

    #[test]
    fn test_reversed_face() {
        let face = faces()[17];
        let flux = LlfRiemannSolver.solve_face(&face).unwrap();
        let flux_reversed = LlfRiemannSolver.solve_face(&face.reversed()).unwrap();
        for i in 0..5 {
            assert_approx_eq!(
                f64,
                flux.fluxes[i],
                -flux_reversed.fluxes[i],
                epsilon = 1e-12
            );
        }
        assert_approx_eq!(f64, flux.v_max, flux_reversed.v_max, epsilon = 1e-12);
    }

    #[test]
    fn test_failing_face_does_not_poison_batch() {
        let mut faces = faces();
        faces[3].right = State::vacuum();
        let results = PvlRiemannSolver::default().solve_faces(&faces);
        assert_eq!(results[3], Err(FluxError::NonPositiveDensity(0.)));
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), faces.len() - 1);
    }
}
