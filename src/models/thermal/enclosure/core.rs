//! Single-node steady-state energy balance for a sealed enclosure.
//!
//! The enclosure air is one well-mixed node held at a setpoint. Heat enters
//! from internal loads, leaves through the cooling coil, and is exchanged with
//! the room through a lumped conductance `UA`. No time dependence is modeled.

mod case;
mod error;
mod input;
mod results;
mod solve;
mod warnings;

pub use case::Case;
pub use error::ValidationError;
pub use input::{
    AmbientConditions, CoolingPlant, CoolingPlantSpec, CoolingType, Enclosure, HeatLoads,
    SolveMode, ua_from_air_changes,
};
pub use results::SolverResult;
pub use solve::{
    SolveError, solve_airflow, solve_coil_leaving_temperature, solve_coolant_flow, solve_heater,
};
pub use warnings::{Warning, classify_warnings, warning_messages};
