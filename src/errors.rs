use yaml_rust::Yaml;

/// Errors raised while evaluating thermodynamic relations or interface fluxes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FluxError {
    #[error("Invalid combination of arguments for {quantity}: supplied [{supplied}]")]
    InvalidArgumentCombination {
        quantity: &'static str,
        supplied: String,
    },

    #[error("Non-positive density encountered: {0:.4e}")]
    NonPositiveDensity(f64),

    #[error("Expected a {expected} state but found a {found} state ({context})")]
    VariantMismatch {
        expected: &'static str,
        found: &'static str,
        context: &'static str,
    },

    #[error("Invalid ideal gas constants: cp = {cp:.4e}, cv = {cv:.4e} (need cv > 0 and cp > cv)")]
    InvalidEos { cp: f64, cv: f64 },

    #[error("Unknown linearization: {0} (expected one of u23, up23, upr23)")]
    UnknownLinearization(String),

    #[error("The full wave pattern must be computed before sampling fluxes")]
    IncompleteWavePattern,

    #[error("Non-finite wave speeds: {0:?}")]
    NonFiniteWaveSpeeds([f64; 4]),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Missing required parameter in configuration: {0}")]
    MissingParameter(String),

    #[error("Unknown type of equation of state configured: {0}")]
    UnknownEOS(String),

    #[error("Unknown type of Riemann solver configured: {0}")]
    UnknownRiemannSolver(String),

    #[error("Expected array of length {0} but found: {1:?}")]
    InvalidArrayFormat(usize, Yaml),

    #[error(transparent)]
    Flux(#[from] FluxError),
}
