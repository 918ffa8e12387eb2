//! Closed-form steady-state solvers.
//!
//! Each solver is a pure function of its arguments. Fluid properties are
//! passed in explicitly rather than read from shared state.

mod airflow;
mod coil;
mod coolant;
mod error;
mod heater;

pub use airflow::solve_airflow;
pub use coil::solve_coil_leaving_temperature;
pub use coolant::solve_coolant_flow;
pub use error::SolveError;
pub use heater::solve_heater;
