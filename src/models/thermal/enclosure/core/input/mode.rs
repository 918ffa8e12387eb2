use serde::{Deserialize, Serialize};

/// Which relation a presentation layer is solving for.
///
/// The mode only decides which input a form leaves editable. Every solver is
/// callable regardless of mode, and no solver takes a mode argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    #[default]
    Airflow,
    Coolant,
    CoilTemp,
    Heater,
}

impl SolveMode {
    /// All modes in menu order.
    pub const ALL: [SolveMode; 4] = [Self::Airflow, Self::Coolant, Self::CoilTemp, Self::Heater];

    /// Menu label for the mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Airflow => "Solve airflow given Q and ΔT_air",
            Self::Coolant => "Solve coolant flow given Q and ΔT_water",
            Self::CoilTemp => "Solve coil leaving air temperature",
            Self::Heater => "Solve heater requirement",
        }
    }
}
