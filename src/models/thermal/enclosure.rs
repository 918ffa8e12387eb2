//! Sealed enclosure thermal sizing.
//!
//! Given a steady internal heat load, these models size the airflow, coolant
//! flow, coil supply temperature and supplemental heater for a sealed
//! enclosure. The computation lives in the internal `core` module; this module
//! re-exports its types and wraps each solver in a [`twine_core::Model`].
//!
//! ```
//! use enclosure_thermal::models::thermal::enclosure::{AirflowModel, FlowInput};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Power, TemperatureInterval},
//!     power::watt,
//!     temperature_interval::kelvin,
//! };
//!
//! let model = AirflowModel::default();
//! let result = model
//!     .call(&FlowInput {
//!         load: Power::new::<watt>(100.0),
//!         delta_t: TemperatureInterval::new::<kelvin>(5.0),
//!     })
//!     .unwrap();
//! assert!(result.airflow_cfm() > 35.0);
//! ```

mod config;
mod core;

pub use config::{
    AmbientConfig, CaseConfig, CoolingConfig, EnclosureConfig, LoadsConfig, UaSource,
};
pub use self::core::{
    AmbientConditions, Case, CoolingPlant, CoolingPlantSpec, CoolingType, Enclosure, HeatLoads,
    SolveError, SolveMode, SolverResult, ValidationError, Warning, classify_warnings,
    solve_airflow, solve_coil_leaving_temperature, solve_coolant_flow, solve_heater,
    ua_from_air_changes, warning_messages,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{
    MassRate, Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature,
};

use crate::support::{constants::PhysicalConstants, fluid::FluidProperties};

/// A heat load and the temperature rise allowed across the carrying stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInput {
    pub load: Power,
    pub delta_t: TemperatureInterval,
}

/// Coil inputs for the leaving-air temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilInput {
    pub load: Power,
    pub air_mass_rate: MassRate,
    pub return_air: ThermodynamicTemperature,
}

/// Heat balance inputs for the heater requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaterInput {
    pub load: Power,
    pub ua: ThermalConductance,
    pub ambient: ThermodynamicTemperature,
    pub setpoint: ThermodynamicTemperature,
}

/// Airflow sizing with fixed air properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirflowModel {
    pub air: FluidProperties,
}

impl Default for AirflowModel {
    fn default() -> Self {
        Self {
            air: PhysicalConstants::standard().air(),
        }
    }
}

impl Model for AirflowModel {
    type Input = FlowInput;
    type Output = SolverResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_airflow(input.load, input.delta_t, &self.air)
    }
}

/// Coolant sizing with fixed water properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantModel {
    pub water: FluidProperties,
}

impl Default for CoolantModel {
    fn default() -> Self {
        Self {
            water: PhysicalConstants::standard().water(),
        }
    }
}

impl Model for CoolantModel {
    type Input = FlowInput;
    type Output = SolverResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_coolant_flow(input.load, input.delta_t, &self.water)
    }
}

/// Coil leaving-air temperature with fixed air properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilTemperatureModel {
    pub air: FluidProperties,
}

impl Default for CoilTemperatureModel {
    fn default() -> Self {
        Self {
            air: PhysicalConstants::standard().air(),
        }
    }
}

impl Model for CoilTemperatureModel {
    type Input = CoilInput;
    type Output = SolverResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_coil_leaving_temperature(input.load, input.air_mass_rate, input.return_air, &self.air)
    }
}

/// Heater requirement. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaterModel;

impl Model for HeaterModel {
    type Input = HeaterInput;
    type Output = SolverResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(solve_heater(
            input.load,
            input.ua,
            input.ambient,
            input.setpoint,
        ))
    }
}

/// Full evaluation of a [`Case`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingModel {
    pub constants: PhysicalConstants,
}

impl Model for SizingModel {
    type Input = Case;
    type Output = SolverResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.evaluate(&self.constants)
    }
}
