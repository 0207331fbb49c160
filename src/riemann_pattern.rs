//! Wave fan estimate of a Riemann problem across a single face.
//!
//! The star region is estimated with the primitive variable linearization (Toro 2009,
//! section 9.3): with `rho_bar = (rho_l + rho_r) / 2` and `a_bar = (a_l + a_r) / 2`
//!
//! ```text
//! p*  = (p_l + p_r) / 2 - (u_r - u_l) rho_bar a_bar / 2
//! u*  = (u_l + u_r) / 2 - (p_r - p_l) / (2 rho_bar a_bar)
//! ```

use std::fmt::Display;

use glam::DVec3;

use crate::{
    equation_of_state::{EquationOfState, DESCRIPTION_DIGITS},
    errors::FluxError,
    physical_quantities::{Conserved, State},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Waves {
    Unknown,
    Extrema {
        s1: f64,
        s4: f64,
    },
    Full {
        speeds: [f64; 4],
        rho_star_l: f64,
        rho_star_r: f64,
    },
}

/// One side of the Riemann problem, projected on the face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Side {
    eos: EquationOfState,
    state: State<Conserved>,
    rho: f64,
    p: f64,
    /// Normal velocity
    u: f64,
    /// Velocity component orthogonal to the normal
    v_t: DVec3,
    a: f64,
}

impl Side {
    fn new(
        eos: &EquationOfState,
        state: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<Self, FluxError> {
        let velocity = state.velocity()?;
        let p = state.pressure(eos)?;
        let u = velocity.dot(n_unit);
        Ok(Self {
            eos: *eos,
            state: *state,
            rho: state.density(),
            p,
            u,
            v_t: velocity - u * n_unit,
            a: eos.speed_of_sound(state.density(), p.max(0.)),
        })
    }

    /// Sound speed in the star region adjacent to this side.
    ///
    /// Falls back to the sound speed of the unperturbed side when the star region is
    /// cold or empty.
    fn star_sound_speed(&self, rho_star: f64, p_star: f64) -> f64 {
        if rho_star > 0. && p_star > 0. {
            self.eos.speed_of_sound(rho_star, p_star)
        } else {
            self.a
        }
    }

    /// Flux of the star state on this side of the contact discontinuity.
    fn star_flux(
        &self,
        rho_star: f64,
        p_star: f64,
        u_star: f64,
        n_unit: DVec3,
    ) -> State<Conserved> {
        let flux_n = State::<Conserved>::compute_fluxes_from_primitive(
            &self.eos, p_star, rho_star, u_star, n_unit,
        );
        // The tangential velocity is advected unchanged with the contact
        let mass_flux = rho_star * u_star;
        flux_n
            + State::<Conserved>::new(
                0.,
                mass_flux * self.v_t,
                0.5 * mass_flux * self.v_t.length_squared(),
            )
    }
}

/// Linearized star pressures and densities can become negative in strong rarefactions.
fn clamp_star(value: f64, label: &str) -> f64 {
    if value < 0. {
        log::warn!("Unphysical star state ({} = {:.4e}), clamping to zero", label, value);
        0.
    } else {
        value
    }
}

/// Approximate wave structure of the Riemann problem between two states.
///
/// Created fresh for every face evaluation. The bounding wave speeds are only available
/// after [`RiemannPattern::compute_waves`] or [`RiemannPattern::compute_waves_extrema`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannPattern {
    n_unit: DVec3,
    left: Side,
    right: Side,
    p_star: f64,
    u_star: f64,
    waves: Waves,
}

impl RiemannPattern {
    pub fn new(
        eos_l: &EquationOfState,
        left: &State<Conserved>,
        eos_r: &EquationOfState,
        right: &State<Conserved>,
        n_unit: DVec3,
    ) -> Result<Self, FluxError> {
        let left = Side::new(eos_l, left, n_unit)?;
        let right = Side::new(eos_r, right, n_unit)?;

        let rho_bar = 0.5 * (left.rho + right.rho);
        let a_bar = 0.5 * (left.a + right.a);
        let impedance = rho_bar * a_bar;
        let p_star = clamp_star(
            0.5 * (left.p + right.p) - 0.5 * (right.u - left.u) * impedance,
            "p*",
        );
        // Cold gas on both sides: no pressure waves, the normal velocities are averaged
        let u_star = if impedance > 0. {
            0.5 * (left.u + right.u) - 0.5 * (right.p - left.p) / impedance
        } else {
            0.5 * (left.u + right.u)
        };

        Ok(Self {
            n_unit,
            left,
            right,
            p_star,
            u_star,
            waves: Waves::Unknown,
        })
    }

    pub fn u_l(&self) -> f64 {
        self.left.u
    }

    pub fn u_r(&self) -> f64 {
        self.right.u
    }

    pub fn a_l(&self) -> f64 {
        self.left.a
    }

    pub fn a_r(&self) -> f64 {
        self.right.a
    }

    pub fn p_l(&self) -> f64 {
        self.left.p
    }

    pub fn p_r(&self) -> f64 {
        self.right.p
    }

    pub fn p_star(&self) -> f64 {
        self.p_star
    }

    pub fn u_star(&self) -> f64 {
        self.u_star
    }

    pub fn n_unit(&self) -> DVec3 {
        self.n_unit
    }

    /// Densities on the left and right of the contact discontinuity.
    pub fn star_densities(&self) -> Option<(f64, f64)> {
        match self.waves {
            Waves::Full {
                rho_star_l,
                rho_star_r,
                ..
            } => Some((rho_star_l, rho_star_r)),
            _ => None,
        }
    }

    /// `[s1, s2, s3, s4]`, if the full pattern has been computed.
    pub fn wave_speeds(&self) -> Option<[f64; 4]> {
        match self.waves {
            Waves::Full { speeds, .. } => Some(speeds),
            _ => None,
        }
    }

    /// The outer bounding speeds `(s1, s4)`.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        match self.waves {
            Waves::Unknown => None,
            Waves::Extrema { s1, s4 } => Some((s1, s4)),
            Waves::Full { speeds, .. } => Some((speeds[0], speeds[3])),
        }
    }

    pub fn max_wave_speed(&self) -> Option<f64> {
        self.extrema().map(|(s1, s4)| s1.abs().max(s4.abs()))
    }

    /// Compute all four wave speeds together with the star densities.
    pub fn compute_waves(&mut self) {
        let rho_bar = 0.5 * (self.left.rho + self.right.rho);
        let a_bar = 0.5 * (self.left.a + self.right.a);
        let (rho_star_l, rho_star_r) = if a_bar > 0. {
            (
                self.left.rho + (self.left.u - self.u_star) * rho_bar / a_bar,
                self.right.rho + (self.u_star - self.right.u) * rho_bar / a_bar,
            )
        } else {
            (self.left.rho, self.right.rho)
        };
        let rho_star_l = clamp_star(rho_star_l, "rho*_l");
        let rho_star_r = clamp_star(rho_star_r, "rho*_r");

        let a_star_l = self.left.star_sound_speed(rho_star_l, self.p_star);
        let a_star_r = self.right.star_sound_speed(rho_star_r, self.p_star);

        let s1 = (self.left.u - self.left.a)
            .min(self.u_star - a_star_l)
            .min(self.u_star);
        let s4 = (self.right.u + self.right.a)
            .max(self.u_star + a_star_r)
            .max(self.u_star);

        self.waves = Waves::Full {
            speeds: [s1, self.u_star, self.u_star, s4],
            rho_star_l,
            rho_star_r,
        };
    }

    /// Compute only the outer bounding speeds `s1` and `s4`, skipping the star region.
    pub fn compute_waves_extrema(&mut self) {
        let s1 = (self.left.u - self.left.a).min(self.right.u - self.right.a);
        let s4 = (self.left.u + self.left.a).max(self.right.u + self.right.a);
        self.waves = Waves::Extrema { s1, s4 };
    }

    /// Sample the flux at the interface, which sits at the origin of the wave fan.
    pub fn compute_fluxes(&self, n_unit: DVec3) -> Result<State<Conserved>, FluxError> {
        debug_assert!((n_unit - self.n_unit).length_squared() < 1e-20);
        let (speeds, rho_star_l, rho_star_r) = match self.waves {
            Waves::Full {
                speeds,
                rho_star_l,
                rho_star_r,
            } => (speeds, rho_star_l, rho_star_r),
            _ => return Err(FluxError::IncompleteWavePattern),
        };
        if speeds.iter().any(|s| !s.is_finite()) {
            return Err(FluxError::NonFiniteWaveSpeeds(speeds));
        }
        let [s1, s2, _, s4] = speeds;

        let flux = if s1 >= 0. {
            self.left.state.compute_fluxes(&self.left.eos, n_unit)?
        } else if s4 <= 0. {
            self.right.state.compute_fluxes(&self.right.eos, n_unit)?
        } else if s2 >= 0. {
            self.left
                .star_flux(rho_star_l, self.p_star, self.u_star, n_unit)
        } else {
            self.right
                .star_flux(rho_star_r, self.p_star, self.u_star, n_unit)
        };
        debug_assert!(flux.is_finite());

        Ok(flux)
    }
}

impl Display for RiemannPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = DESCRIPTION_DIGITS - 1;
        writeln!(f, "u_l = {:.*e}", p, self.left.u)?;
        writeln!(f, "u_r = {:.*e}", p, self.right.u)?;
        writeln!(f, "a_l = {:.*e}", p, self.left.a)?;
        writeln!(f, "a_r = {:.*e}", p, self.right.a)?;
        writeln!(f, "p_star = {:.*e}", p, self.p_star)?;
        write!(f, "u_star = {:.*e}", p, self.u_star)?;
        match self.waves {
            Waves::Unknown => Ok(()),
            Waves::Extrema { s1, s4 } => {
                write!(f, "\ns1 = {:.*e}\ns4 = {:.*e}", p, s1, p, s4)
            }
            Waves::Full { speeds, .. } => {
                for (i, s) in speeds.iter().enumerate() {
                    write!(f, "\ns{} = {:.*e}", i + 1, p, s)?;
                }
                Ok(())
            }
        }
    }
}
