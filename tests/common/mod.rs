use euler_flux::{Conserved, EquationOfState, Primitive, RiemannSolver, RiemannSolverKind, State};
use float_cmp::approx_eq;
use glam::DVec3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use yaml_rust::YamlLoader;

pub const AIR_CONFIG: &'static str = r##"
kind: "Ideal"
gamma: 1.4
R: 287.
"##;

pub const DIMENSIONLESS_CONFIG: &'static str = r##"
kind: "Ideal"
gamma: 1.4
R: 1.
"##;

pub const MONATOMIC_CONFIG: &'static str = r##"
cv: 1.5
gamma: 1.66666666667
"##;

pub const PVL_CONFIG: &'static str = r##"
kind: "PVL"
linearization: "u23"
"##;

pub const LLF_CONFIG: &'static str = r##"
kind: "LLF"
"##;

pub fn get_eos(cfg: &str) -> EquationOfState {
    EquationOfState::init(&YamlLoader::load_from_str(cfg).expect("Error loading EOS cfg!")[0])
        .expect("Error creating EquationOfState!")
}

pub fn get_solver(cfg: &str) -> RiemannSolverKind {
    RiemannSolverKind::init(
        &YamlLoader::load_from_str(cfg).expect("Error loading Riemann solver cfg!")[0],
    )
    .expect("Error creating Riemann solver!")
}

pub fn get_solvers() -> [RiemannSolverKind; 2] {
    [get_solver(PVL_CONFIG), get_solver(LLF_CONFIG)]
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub fn random_unit_vector(rng: &mut StdRng) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if v.length_squared() > 1e-2 {
            return v.normalize();
        }
    }
}

pub fn random_primitive(rng: &mut StdRng) -> State<Primitive> {
    State::<Primitive>::new(
        rng.gen_range(0.1..10.0),
        DVec3::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
        ),
        rng.gen_range(0.1..10.0),
    )
}

pub fn random_conserved(rng: &mut StdRng, eos: &EquationOfState) -> State<Conserved> {
    State::<Conserved>::from_primitives(&random_primitive(rng), eos)
}

pub fn solve(
    solver: &RiemannSolverKind,
    eos: &EquationOfState,
    left: &State<Conserved>,
    right: &State<Conserved>,
    n_unit: DVec3,
) -> State<Conserved> {
    solver
        .solve(eos, left, eos, right, n_unit)
        .expect("Error solving Riemann problem!")
}

/// Componentwise comparison relative to the magnitude of the compared values.
pub fn states_close<T>(a: &State<T>, b: &State<T>, tolerance: f64) -> bool {
    a.array().iter().zip(b.array().iter()).all(|(a, b)| {
        let scale = a.abs().max(b.abs()).max(1.);
        approx_eq!(f64, *a, *b, epsilon = tolerance * scale)
    })
}

macro_rules! assert_states_close {
    ($a:expr, $b:expr, $tol:expr) => {
        assert!(
            $crate::common::states_close(&$a, &$b, $tol),
            "States differ:\n{}\n---\n{}",
            $a,
            $b
        );
    };
}
pub(crate) use assert_states_close;
