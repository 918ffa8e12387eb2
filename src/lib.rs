//! # Enclosure Thermal
//!
//! Steady-state thermal sizing for sealed instrument enclosures, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a steady internal heat load, the crate computes the airflow and
//! coolant flow needed to remove it, the coil supply-air temperature, and any
//! supplemental heater power needed to hold the setpoint against a cold room.
//! It is a calculator: one well-mixed air node, no time integration.
//!
//! ## Crate layout
//!
//! - [`models`]: The enclosure model, its solvers, and [`twine_core::Model`] adapters.
//! - [`support`]: Constraints, constants, fluid properties and unit conversion.
//!
//! ## Quick example
//!
//! ```
//! use enclosure_thermal::models::thermal::enclosure::Case;
//! use enclosure_thermal::support::constants::PhysicalConstants;
//!
//! let result = Case::reference()
//!     .evaluate(&PhysicalConstants::standard())
//!     .unwrap();
//!
//! println!("airflow: {:.1} CFM", result.airflow_cfm());
//! println!("coolant: {:.2} L/min", result.coolant_lpm());
//! for warning in &result.warnings {
//!     println!("{warning}");
//! }
//! ```
//!
//! ## Logging
//!
//! Solvers emit [`tracing`] events (`trace` per solve, `debug` per case and
//! advisory). Install a subscriber in the application to see them.

pub mod models;
pub mod support;
