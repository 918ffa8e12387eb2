//! Solver output bundle.

use uom::{
    ConstZero,
    si::{
        f64::{MassRate, Power, Ratio, ThermodynamicTemperature, VolumeRate},
        mass_rate::kilogram_per_second,
        ratio::percent,
        volume_rate::cubic_meter_per_second,
    },
};

use crate::support::units::conversion::{kgs_to_lpm, lpm_to_gpm, m3s_to_cfm};

use super::Warning;

/// Values produced by one or more solvers.
///
/// A single solver fills only its own fields; the rest stay at zero
/// (or `None`/empty). [`Case::evaluate`](super::Case::evaluate) fills all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    /// Air mass flow through the enclosure.
    pub air_mass_rate: MassRate,

    /// Air volumetric flow through the enclosure.
    pub air_volume_rate: VolumeRate,

    /// Chilled-water mass flow through the coil.
    pub coolant_mass_rate: MassRate,

    /// Supply air temperature leaving the coil, if solved.
    pub coil_leaving_temperature: Option<ThermodynamicTemperature>,

    /// Supplemental heater power.
    pub heater_power: Power,

    /// Required load over installed coil capacity.
    pub coil_utilization: Ratio,

    /// Advisories, in reporting order.
    pub warnings: Vec<Warning>,
}

impl SolverResult {
    /// Air volumetric flow in cubic feet per minute.
    #[must_use]
    pub fn airflow_cfm(&self) -> f64 {
        m3s_to_cfm(self.air_volume_rate.get::<cubic_meter_per_second>())
    }

    /// Coolant flow in litres per minute of water.
    #[must_use]
    pub fn coolant_lpm(&self) -> f64 {
        kgs_to_lpm(self.coolant_mass_rate.get::<kilogram_per_second>())
    }

    /// Coolant flow in US gallons per minute of water.
    #[must_use]
    pub fn coolant_gpm(&self) -> f64 {
        lpm_to_gpm(self.coolant_lpm())
    }

    #[must_use]
    pub fn coil_utilization_percent(&self) -> f64 {
        self.coil_utilization.get::<percent>()
    }
}

impl Default for SolverResult {
    fn default() -> Self {
        Self {
            air_mass_rate: MassRate::ZERO,
            air_volume_rate: VolumeRate::ZERO,
            coolant_mass_rate: MassRate::ZERO,
            coil_leaving_temperature: None,
            heater_power: Power::ZERO,
            coil_utilization: Ratio::ZERO,
            warnings: Vec::new(),
        }
    }
}
