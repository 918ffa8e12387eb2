use uom::si::{
    f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature, Time},
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{super::ValidationError, Enclosure, ua_from_air_changes};

/// Conditions outside the enclosure and how strongly it couples to them.
///
/// The variation amplitude and period describe the room's daily swing.
/// They are carried for display and for checks by callers; no steady-state
/// solver reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConditions {
    temperature: ThermodynamicTemperature,
    variation_amplitude: Constrained<TemperatureInterval, NonNegative>,
    variation_period: Constrained<Time, StrictlyPositive>,
    ua: Constrained<ThermalConductance, NonNegative>,
}

impl AmbientConditions {
    /// Creates ambient conditions with a directly specified UA.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the amplitude or UA is negative, or the
    /// period is not strictly positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        variation_amplitude: TemperatureInterval,
        variation_period: Time,
        ua: ThermalConductance,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            temperature,
            variation_amplitude: NonNegative::new(variation_amplitude)
                .map_err(ValidationError::at("ambient.variation_amplitude"))?,
            variation_period: StrictlyPositive::new(variation_period)
                .map_err(ValidationError::at("ambient.variation_period"))?,
            ua: NonNegative::new(ua).map_err(ValidationError::at("ambient.ua"))?,
        })
    }

    /// Creates ambient conditions whose UA comes from an air-change rate.
    ///
    /// See [`ua_from_air_changes`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the same reasons as [`AmbientConditions::new`],
    /// or if the air-change rate is negative.
    pub fn with_air_changes(
        temperature: ThermodynamicTemperature,
        variation_amplitude: TemperatureInterval,
        variation_period: Time,
        air_changes_per_hour: f64,
        enclosure: &Enclosure,
    ) -> Result<Self, ValidationError> {
        let ua = ua_from_air_changes(air_changes_per_hour, enclosure)?;
        Self::new(temperature, variation_amplitude, variation_period, ua)
    }

    /// Returns the mean ambient temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the amplitude of the ambient swing.
    #[must_use]
    pub fn variation_amplitude(&self) -> TemperatureInterval {
        self.variation_amplitude.into_inner()
    }

    /// Returns the period of the ambient swing.
    #[must_use]
    pub fn variation_period(&self) -> Time {
        self.variation_period.into_inner()
    }

    /// Combined conduction and infiltration coupling to ambient.
    #[must_use]
    pub fn ua(&self) -> ThermalConductance {
        self.ua.into_inner()
    }
}

/// A 23.5 °C ± 2 K room with a 24 h swing and UA = 2 W/K.
impl Default for AmbientConditions {
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(23.5),
            variation_amplitude: Constrained::new_unchecked(
                TemperatureInterval::new::<delta_kelvin>(2.0),
            ),
            variation_period: Constrained::new_unchecked(Time::new::<hour>(24.0)),
            ua: Constrained::new_unchecked(ThermalConductance::new::<watt_per_kelvin>(2.0)),
        }
    }
}
