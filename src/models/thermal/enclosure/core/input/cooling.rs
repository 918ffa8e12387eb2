use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Power, Ratio, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::super::ValidationError;

/// How heat leaves the enclosure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingType {
    /// Recirculated air passes over a chilled-water coil.
    #[default]
    AirCoil,
    /// Chilled water cools the loads directly.
    Liquid,
    /// Both paths are present.
    Hybrid,
}

/// Cooling plant configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingPlant {
    cooling_type: CoolingType,
    coil_approach: Constrained<TemperatureInterval, StrictlyPositive>,
    coil_capacity: Constrained<Power, StrictlyPositive>,
    chilled_water_supply: ThermodynamicTemperature,
    air_delta_t: Constrained<TemperatureInterval, StrictlyPositive>,
    water_delta_t: Constrained<TemperatureInterval, StrictlyPositive>,
}

/// Raw cooling plant values before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingPlantSpec {
    pub cooling_type: CoolingType,
    pub coil_approach: TemperatureInterval,
    pub coil_capacity: Power,
    pub chilled_water_supply: ThermodynamicTemperature,
    pub air_delta_t: TemperatureInterval,
    pub water_delta_t: TemperatureInterval,
}

impl CoolingPlant {
    /// Validates a [`CoolingPlantSpec`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first of approach, capacity,
    /// air ΔT or water ΔT that is not strictly positive.
    pub fn new(spec: CoolingPlantSpec) -> Result<Self, ValidationError> {
        Ok(Self {
            cooling_type: spec.cooling_type,
            coil_approach: StrictlyPositive::new(spec.coil_approach)
                .map_err(ValidationError::at("cooling.coil_approach"))?,
            coil_capacity: StrictlyPositive::new(spec.coil_capacity)
                .map_err(ValidationError::at("cooling.coil_capacity"))?,
            chilled_water_supply: spec.chilled_water_supply,
            air_delta_t: StrictlyPositive::new(spec.air_delta_t)
                .map_err(ValidationError::at("cooling.air_delta_t"))?,
            water_delta_t: StrictlyPositive::new(spec.water_delta_t)
                .map_err(ValidationError::at("cooling.water_delta_t"))?,
        })
    }

    /// Returns how heat leaves the enclosure.
    #[must_use]
    pub fn cooling_type(&self) -> CoolingType {
        self.cooling_type
    }

    /// Returns the coil approach temperature.
    #[must_use]
    pub fn coil_approach(&self) -> TemperatureInterval {
        self.coil_approach.into_inner()
    }

    /// Returns the installed coil capacity.
    #[must_use]
    pub fn coil_capacity(&self) -> Power {
        self.coil_capacity.into_inner()
    }

    /// Returns the chilled-water supply temperature.
    #[must_use]
    pub fn chilled_water_supply(&self) -> ThermodynamicTemperature {
        self.chilled_water_supply
    }

    /// Returns the air temperature drop across the coil.
    #[must_use]
    pub fn air_delta_t(&self) -> TemperatureInterval {
        self.air_delta_t.into_inner()
    }

    /// Returns the chilled-water temperature rise.
    #[must_use]
    pub fn water_delta_t(&self) -> TemperatureInterval {
        self.water_delta_t.into_inner()
    }

    /// Fraction of the coil capacity needed to remove `load`.
    ///
    /// Exceeds one when the coil is undersized.
    #[must_use]
    pub fn coil_utilization(&self, load: Power) -> Ratio {
        load / self.coil_capacity()
    }
}

/// Air coil, 2 K approach, 500 W capacity, 15 °C chilled water, 5 K air ΔT, 2 K water ΔT.
impl Default for CoolingPlant {
    fn default() -> Self {
        Self {
            cooling_type: CoolingType::AirCoil,
            coil_approach: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(
                2.0,
            )),
            coil_capacity: Constrained::new_unchecked(Power::new::<watt>(500.0)),
            chilled_water_supply: ThermodynamicTemperature::new::<degree_celsius>(15.0),
            air_delta_t: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(5.0)),
            water_delta_t: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(
                2.0,
            )),
        }
    }
}

impl From<CoolingPlant> for CoolingPlantSpec {
    fn from(plant: CoolingPlant) -> Self {
        Self {
            cooling_type: plant.cooling_type(),
            coil_approach: plant.coil_approach(),
            coil_capacity: plant.coil_capacity(),
            chilled_water_supply: plant.chilled_water_supply(),
            air_delta_t: plant.air_delta_t(),
            water_delta_t: plant.water_delta_t(),
        }
    }
}
