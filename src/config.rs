//! YAML configuration of the equation of state, the Riemann solver and single Riemann
//! problems.
//!
//! ```yaml
//! equation_of_state:
//!   kind: "Ideal"
//!   gamma: 1.4
//!   R: 287.
//! riemann_solver:
//!   kind: "PVL"
//!   linearization: "u23"
//! problem:
//!   left: [1., 0., 0., 0., 1.]
//!   right: [0.125, 0., 0., 0., 0.1]
//!   normal: [1., 0., 0.]
//! ```

use glam::DVec3;
use yaml_rust::{Yaml, YamlLoader};

use crate::{
    equation_of_state::{make_eos, EosParameters, EquationOfState},
    errors::{ConfigError, FluxError},
    physical_quantities::{Primitive, State},
    riemann_solver::{LlfRiemannSolver, PvlRiemannSolver, RiemannSolver, RiemannSolverKind},
};

fn as_float(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn parse_floats<const N: usize>(yaml: &Yaml, name: &str) -> Result<[f64; N], ConfigError> {
    if yaml.is_badvalue() {
        return Err(ConfigError::MissingParameter(name.to_string()));
    }
    let values = yaml
        .as_vec()
        .filter(|values| values.len() == N)
        .and_then(|values| values.iter().map(as_float).collect::<Option<Vec<_>>>())
        .ok_or_else(|| ConfigError::InvalidArrayFormat(N, yaml.clone()))?;
    let mut array = [0.; N];
    array.copy_from_slice(&values);
    Ok(array)
}

pub fn parse_dvec3(yaml: &Yaml, name: &str) -> Result<DVec3, ConfigError> {
    Ok(DVec3::from_array(parse_floats::<3>(yaml, name)?))
}

/// Primitive state in the layout `[rho, vx, vy, vz, p]`.
pub fn parse_primitive(yaml: &Yaml, name: &str) -> Result<State<Primitive>, ConfigError> {
    Ok(State::<Primitive>::from_array(parse_floats::<5>(yaml, name)?))
}

impl EquationOfState {
    /// Reads the optional `kind` (only `"Ideal"`) and exactly two of `cp`, `cv`, `gamma`
    /// and `R`.
    pub fn init(yaml: &Yaml) -> Result<Self, ConfigError> {
        let kind = &yaml["kind"];
        if !kind.is_badvalue() && kind.as_str() != Some("Ideal") {
            let name = kind
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{:?}", kind));
            return Err(ConfigError::UnknownEOS(name));
        }

        let parameters = match (
            as_float(&yaml["cp"]),
            as_float(&yaml["cv"]),
            as_float(&yaml["gamma"]),
            as_float(&yaml["R"]),
        ) {
            (Some(cp), Some(cv), None, None) => EosParameters::CpCv { cp, cv },
            (Some(cp), None, Some(gamma), None) => EosParameters::CpGamma { cp, gamma },
            (Some(cp), None, None, Some(r)) => EosParameters::CpR { cp, r },
            (None, Some(cv), Some(gamma), None) => EosParameters::CvGamma { cv, gamma },
            (None, Some(cv), None, Some(r)) => EosParameters::CvR { cv, r },
            (None, None, Some(gamma), Some(r)) => EosParameters::GammaR { gamma, r },
            _ => {
                let supplied = ["cp", "cv", "gamma", "R"]
                    .iter()
                    .filter(|key| as_float(&yaml[**key]).is_some())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(FluxError::InvalidArgumentCombination {
                    quantity: "ideal gas constants",
                    supplied,
                }
                .into());
            }
        };

        let eos = make_eos(parameters)?;
        log::debug!("Configured equation of state:\n{}", eos);
        Ok(eos)
    }
}

impl RiemannSolverKind {
    /// Reads `kind` (`"PVL"` or `"LLF"`) and the optional `linearization`.
    pub fn init(yaml: &Yaml) -> Result<Self, ConfigError> {
        let kind = yaml["kind"]
            .as_str()
            .ok_or_else(|| ConfigError::MissingParameter("riemann_solver: kind".to_string()))?;
        let mut solver = match kind {
            "PVL" => RiemannSolverKind::Pvl(PvlRiemannSolver::default()),
            "LLF" => RiemannSolverKind::Llf(LlfRiemannSolver),
            _ => return Err(ConfigError::UnknownRiemannSolver(kind.to_string())),
        };
        solver.initialize(yaml["linearization"].as_str().unwrap_or("u23"))?;
        Ok(solver)
    }
}

/// A single Riemann problem, fully configured.
#[derive(Debug, Clone, Copy)]
pub struct RiemannProblemCfg {
    pub eos: EquationOfState,
    pub solver: RiemannSolverKind,
    pub left: State<Primitive>,
    pub right: State<Primitive>,
    pub n_unit: DVec3,
}

impl RiemannProblemCfg {
    pub fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let eos = EquationOfState::init(&yaml["equation_of_state"])?;
        let solver = RiemannSolverKind::init(&yaml["riemann_solver"])?;
        let problem = &yaml["problem"];
        let left = parse_primitive(&problem["left"], "problem: left")?;
        let right = parse_primitive(&problem["right"], "problem: right")?;
        let normal = parse_dvec3(&problem["normal"], "problem: normal")?;
        let n_unit = normal.normalize();
        if (normal.length() - 1.).abs() > 1e-12 {
            log::warn!("Normal {} is not a unit vector, using {}", normal, n_unit);
        }
        Ok(Self {
            eos,
            solver,
            left,
            right,
            n_unit,
        })
    }

    pub fn load_str(source: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let docs = YamlLoader::load_from_str(source)?;
        let yaml = docs
            .first()
            .ok_or_else(|| ConfigError::MissingParameter("problem".to_string()))?;
        Ok(Self::parse(yaml)?)
    }
}
