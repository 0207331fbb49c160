//! Approximate Riemann solvers for the compressible Euler equations.
//!
//! The library provides an ideal gas equation of state, primitive and conserved states with
//! exact conversions between them, a linearized estimate of the wave fan between two
//! states and the PVL and LLF interface fluxes built on top of it.

pub use equation_of_state::{make_eos, EosParameters, EquationOfState, IdealGas};
pub use errors::{ConfigError, FluxError};
pub use flux::{FaceFlux, FaceProblem};
pub use physical_quantities::{AnyState, Conserved, Primitive, State};
pub use riemann_pattern::RiemannPattern;
pub use riemann_solver::{
    Linearization, LlfRiemannSolver, PvlRiemannSolver, RiemannSolver, RiemannSolverKind,
};

pub mod config;
pub mod equation_of_state;
mod errors;
mod flux;
pub mod physical_quantities;
pub mod riemann_pattern;
pub mod riemann_solver;
pub mod state_transform;
