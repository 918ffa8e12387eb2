//! A complete sizing case and its evaluation.

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{MassRate, ThermodynamicTemperature},
        power::watt,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::constants::PhysicalConstants;

use super::{
    AmbientConditions, CoolingPlant, Enclosure, HeatLoads, SolveError, SolverResult,
    classify_warnings,
    solve::{solve_airflow, solve_coil_leaving_temperature, solve_coolant_flow, solve_heater},
};

/// Everything needed to size cooling for one enclosure.
///
/// The setpoint is the temperature the enclosure air is held at. It is both
/// the return-air temperature at the coil and the target of the heater balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub enclosure: Enclosure,
    pub loads: HeatLoads,
    pub cooling: CoolingPlant,
    pub ambient: AmbientConditions,
    pub setpoint: ThermodynamicTemperature,
}

impl Case {
    /// Creates a case held at the ambient temperature.
    #[must_use]
    pub fn new(
        enclosure: Enclosure,
        loads: HeatLoads,
        cooling: CoolingPlant,
        ambient: AmbientConditions,
    ) -> Self {
        Self {
            enclosure,
            loads,
            cooling,
            ambient,
            setpoint: ambient.temperature(),
        }
    }

    /// Returns a copy held at `setpoint`.
    #[must_use]
    pub fn with_setpoint(self, setpoint: ThermodynamicTemperature) -> Self {
        Self { setpoint, ..self }
    }

    /// The reference case: a 100 W instrument in a 4 ft × 10 ft × 2.5 ft
    /// enclosure, cooled by a 500 W air coil, in a 23.5 °C room.
    ///
    /// ```
    /// use enclosure_thermal::models::thermal::enclosure::Case;
    /// use enclosure_thermal::support::constants::PhysicalConstants;
    ///
    /// let result = Case::reference().evaluate(&PhysicalConstants::standard()).unwrap();
    /// assert!((35.0..=42.0).contains(&result.airflow_cfm()));
    /// assert!((result.coolant_lpm() - 0.72).abs() / 0.72 < 0.05);
    /// ```
    #[must_use]
    pub fn reference() -> Self {
        Self::new(
            Enclosure::reference(),
            HeatLoads::default(),
            CoolingPlant::default(),
            AmbientConditions::default(),
        )
    }

    /// Runs every solver on this case and classifies the outcome.
    ///
    /// Air-side flow uses the enclosure's air properties; coolant flow uses
    /// `constants.water()`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if a solver rejects its arguments.
    pub fn evaluate(&self, constants: &PhysicalConstants) -> Result<SolverResult, SolveError> {
        let load = self.loads.total();
        let air = self.enclosure.air();

        let airflow = solve_airflow(load, self.cooling.air_delta_t(), &air)?;
        let coolant = solve_coolant_flow(load, self.cooling.water_delta_t(), &constants.water())?;

        // With no air flow the leaving temperature tends to T_set − ΔT_air.
        let coil_leaving_temperature = if airflow.air_mass_rate == MassRate::ZERO {
            Some(self.setpoint - self.cooling.air_delta_t())
        } else {
            solve_coil_leaving_temperature(load, airflow.air_mass_rate, self.setpoint, &air)?
                .coil_leaving_temperature
        };

        let heater = solve_heater(
            load,
            self.ambient.ua(),
            self.ambient.temperature(),
            self.setpoint,
        );

        let coil_utilization = self.cooling.coil_utilization(load);
        let warnings = classify_warnings(coil_utilization, heater.heater_power);

        debug!(
            load_w = load.get::<watt>(),
            airflow_cfm = airflow.airflow_cfm(),
            coolant_lpm = coolant.coolant_lpm(),
            heater_w = heater.heater_power.get::<watt>(),
            setpoint_c = self.setpoint.get::<degree_celsius>(),
            warnings = warnings.len(),
            "evaluated enclosure case"
        );

        Ok(SolverResult {
            air_mass_rate: airflow.air_mass_rate,
            air_volume_rate: airflow.air_volume_rate,
            coolant_mass_rate: coolant.coolant_mass_rate,
            coil_leaving_temperature,
            heater_power: heater.heater_power,
            coil_utilization,
            warnings,
        })
    }
}

impl Default for Case {
    fn default() -> Self {
        Self::reference()
    }
}
