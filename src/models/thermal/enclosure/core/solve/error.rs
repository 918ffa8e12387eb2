use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A solver argument that leaves its governing equation undefined.
///
/// Each variant names the offending argument; the solvers never return a
/// non-finite result in place of this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The air-side temperature difference was zero or `NaN`.
    #[error("invalid air-side ΔT: {0}")]
    AirDeltaT(ConstraintError),

    /// The coolant-side temperature difference was zero or `NaN`.
    #[error("invalid coolant-side ΔT: {0}")]
    CoolantDeltaT(ConstraintError),

    /// The air mass flow rate through the coil was zero or `NaN`.
    #[error("invalid air mass flow rate: {0}")]
    AirMassRate(ConstraintError),
}

impl SolveError {
    /// Name of the invalid argument.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::AirDeltaT(_) => "air_delta_t",
            Self::CoolantDeltaT(_) => "coolant_delta_t",
            Self::AirMassRate(_) => "air_mass_rate",
        }
    }
}
