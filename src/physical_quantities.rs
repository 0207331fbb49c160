use std::{
    fmt::Display,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

use glam::DVec3;

use crate::{
    equation_of_state::{EquationOfState, DESCRIPTION_DIGITS},
    errors::FluxError,
};

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Primitive;
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Conserved;

/// The five unknowns of the Euler equations, stored as `{scalar, vector, scalar}`.
///
/// * `State<Conserved>`: density, momentum density, total energy density.
/// * `State<Primitive>`: density, velocity, pressure.
///
/// Arithmetic acts independently on the three fields, for both variants.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct State<T>(f64, DVec3, f64, PhantomData<T>);

impl<T> Add for State<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2, PhantomData)
    }
}

impl<T> AddAssign for State<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
        self.2 += rhs.2;
    }
}

impl<T> Sub for State<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2, PhantomData)
    }
}

impl<T> SubAssign for State<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
        self.2 -= rhs.2;
    }
}

impl<T> Neg for State<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1, -self.2, PhantomData)
    }
}

impl<T> Mul<State<T>> for f64 {
    type Output = State<T>;

    fn mul(self, rhs: State<T>) -> Self::Output {
        State::<T>(self * rhs.0, self * rhs.1, self * rhs.2, PhantomData)
    }
}

impl<T> Mul<f64> for State<T> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}

/// Field-by-field product. This has no physical meaning, but is used by flux limiters.
impl<T> Mul for State<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0, self.1 * rhs.1, self.2 * rhs.2, PhantomData)
    }
}

impl<T> Div<f64> for State<T> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs, self.1 / rhs, self.2 / rhs, PhantomData)
    }
}

impl<T> State<T> {
    pub fn vacuum() -> Self {
        Self(0., DVec3::ZERO, 0., PhantomData)
    }

    /// Reset all fields to zero.
    pub fn destroy(&mut self) {
        *self = Self::vacuum();
    }

    /// The fixed 5 element layout `[scalar, x, y, z, scalar]`.
    pub fn array(&self) -> [f64; 5] {
        [self.0, self.1.x, self.1.y, self.1.z, self.2]
    }

    pub fn from_array(values: [f64; 5]) -> Self {
        Self(
            values[0],
            DVec3::new(values[1], values[2], values[3]),
            values[4],
            PhantomData,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl<T> Index<usize> for State<T> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1.x,
            2 => &self.1.y,
            3 => &self.1.z,
            4 => &self.2,
            _ => panic!("Index out of bounds for StateVector!"),
        }
    }
}

impl<T> IndexMut<usize> for State<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.0,
            1 => &mut self.1.x,
            2 => &mut self.1.y,
            3 => &mut self.1.z,
            4 => &mut self.2,
            _ => panic!("Index out of bounds for StateVector!"),
        }
    }
}

fn check_density(density: f64) -> Result<f64, FluxError> {
    if density > 0. {
        Ok(density)
    } else {
        Err(FluxError::NonPositiveDensity(density))
    }
}

impl State<Primitive> {
    pub fn new(density: f64, velocity: DVec3, pressure: f64) -> Self {
        Self(density, velocity, pressure, PhantomData)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn velocity(&self) -> DVec3 {
        self.1
    }

    pub fn pressure(&self) -> f64 {
        self.2
    }

    pub fn momentum(&self) -> DVec3 {
        self.density() * self.velocity()
    }

    /// Total energy density `p / (gamma - 1) + rho |v|^2 / 2`
    pub fn energy(&self, eos: &EquationOfState) -> f64 {
        self.pressure() / eos.gm1() + 0.5 * self.density() * self.velocity().length_squared()
    }

    pub fn initialize(&mut self, source: Option<&AnyState>) {
        match source {
            None => self.destroy(),
            Some(AnyState::Primitive(state)) => *self = *state,
            Some(other) => log::debug!(
                "Ignoring copy of {} state into primitive state",
                other.variant()
            ),
        }
    }
}

impl State<Conserved> {
    pub fn new(density: f64, momentum: DVec3, energy: f64) -> Self {
        Self(density, momentum, energy, PhantomData)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn momentum(&self) -> DVec3 {
        self.1
    }

    pub fn energy(&self) -> f64 {
        self.2
    }

    pub fn velocity(&self) -> Result<DVec3, FluxError> {
        Ok(self.momentum() / check_density(self.density())?)
    }

    /// `(gamma - 1) (E - rho |v|^2 / 2)`
    pub fn pressure(&self, eos: &EquationOfState) -> Result<f64, FluxError> {
        let velocity = self.velocity()?;
        Ok(eos.gm1() * (self.energy() - 0.5 * self.density() * velocity.length_squared()))
    }

    /// Physical flux of the Euler equations through a face with unit normal `n_unit`.
    pub fn compute_fluxes(&self, eos: &EquationOfState, n_unit: DVec3) -> Result<Self, FluxError> {
        let velocity = self.velocity()?;
        let pressure = self.pressure(eos)?;
        let v_n = velocity.dot(n_unit);
        Ok(Self::new(
            self.momentum().dot(n_unit),
            self.density() * velocity * v_n + pressure * n_unit,
            (self.energy() + pressure) * v_n,
        ))
    }

    /// Flux of a one dimensional state with pressure `p`, density `rho` and normal
    /// velocity `u`, oriented along `n_unit`.
    pub fn compute_fluxes_from_primitive(
        eos: &EquationOfState,
        p: f64,
        rho: f64,
        u: f64,
        n_unit: DVec3,
    ) -> Self {
        let rho_e = p / eos.gm1();
        Self::new(
            rho * u,
            (rho * u * u + p) * n_unit,
            (rho_e + 0.5 * rho * u * u + p) * u,
        )
    }

    pub fn initialize(&mut self, source: Option<&AnyState>) {
        match source {
            None => self.destroy(),
            Some(AnyState::Conserved(state)) => *self = *state,
            Some(other) => log::debug!(
                "Ignoring copy of {} state into conserved state",
                other.variant()
            ),
        }
    }
}

fn describe(
    f: &mut std::fmt::Formatter<'_>,
    labels: [&str; 5],
    values: [f64; 5],
) -> std::fmt::Result {
    let precision = DESCRIPTION_DIGITS - 1;
    for (i, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{} = {:.*e}", label, precision, value)?;
    }
    Ok(())
}

impl Display for State<Conserved> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        describe(
            f,
            ["density", "momentum_x", "momentum_y", "momentum_z", "energy"],
            self.array(),
        )
    }
}

impl Display for State<Primitive> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        describe(
            f,
            ["density", "velocity_x", "velocity_y", "velocity_z", "pressure"],
            self.array(),
        )
    }
}

/// A state whose concrete variant is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyState {
    Primitive(State<Primitive>),
    Conserved(State<Conserved>),
}

impl AnyState {
    pub fn variant(&self) -> &'static str {
        match self {
            AnyState::Primitive(_) => "primitive",
            AnyState::Conserved(_) => "conserved",
        }
    }

    pub fn array(&self) -> [f64; 5] {
        match self {
            AnyState::Primitive(state) => state.array(),
            AnyState::Conserved(state) => state.array(),
        }
    }

    pub fn into_conserved(self, context: &'static str) -> Result<State<Conserved>, FluxError> {
        match self {
            AnyState::Conserved(state) => Ok(state),
            other => Err(FluxError::VariantMismatch {
                expected: "conserved",
                found: other.variant(),
                context,
            }),
        }
    }

    pub fn into_primitive(self, context: &'static str) -> Result<State<Primitive>, FluxError> {
        match self {
            AnyState::Primitive(state) => Ok(state),
            other => Err(FluxError::VariantMismatch {
                expected: "primitive",
                found: other.variant(),
                context,
            }),
        }
    }
}

impl From<State<Conserved>> for AnyState {
    fn from(state: State<Conserved>) -> Self {
        AnyState::Conserved(state)
    }
}

impl From<State<Primitive>> for AnyState {
    fn from(state: State<Primitive>) -> Self {
        AnyState::Primitive(state)
    }
}

impl TryFrom<AnyState> for State<Conserved> {
    type Error = FluxError;

    fn try_from(state: AnyState) -> Result<Self, Self::Error> {
        state.into_conserved("conversion")
    }
}

impl TryFrom<AnyState> for State<Primitive> {
    type Error = FluxError;

    fn try_from(state: AnyState) -> Result<Self, Self::Error> {
        state.into_primitive("conversion")
    }
}
