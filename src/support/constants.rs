//! Reference physical constants.
//!
//! Property values are for air near 23 °C at 1 atm and for water near 15–20 °C.
//! Computations never read these from shared state: callers pass a
//! [`PhysicalConstants`] value (usually [`PhysicalConstants::standard`]) and
//! override by building a different one.

use crate::support::fluid::FluidProperties;

/// Specific heat of air, J/(kg·K).
pub const AIR_SPECIFIC_HEAT: f64 = 1005.0;

/// Density of air, kg/m³.
pub const AIR_DENSITY: f64 = 1.19;

/// Specific heat of water, J/(kg·K).
pub const WATER_SPECIFIC_HEAT: f64 = 4186.0;

/// Density of water, kg/m³.
pub const WATER_DENSITY: f64 = 998.0;

/// Seconds in one hour, used by air-change rates.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Air and water properties used by the enclosure solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    air: FluidProperties,
    water: FluidProperties,
}

impl PhysicalConstants {
    /// Returns the reference air and water properties.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            air: FluidProperties::from_reference(AIR_SPECIFIC_HEAT, AIR_DENSITY),
            water: FluidProperties::from_reference(WATER_SPECIFIC_HEAT, WATER_DENSITY),
        }
    }

    /// Returns a copy using the given air properties.
    #[must_use]
    pub fn with_air(self, air: FluidProperties) -> Self {
        Self { air, ..self }
    }

    /// Returns a copy using the given water properties.
    #[must_use]
    pub fn with_water(self, water: FluidProperties) -> Self {
        Self { water, ..self }
    }

    /// Returns the air properties.
    #[must_use]
    pub fn air(&self) -> FluidProperties {
        self.air
    }

    /// Returns the water properties.
    #[must_use]
    pub fn water(&self) -> FluidProperties {
        self.water
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    #[test]
    fn standard_values() {
        let constants = PhysicalConstants::default();

        assert_relative_eq!(
            constants.air().specific_heat().get::<joule_per_kilogram_kelvin>(),
            1005.0
        );
        assert_relative_eq!(constants.air().density().get::<kilogram_per_cubic_meter>(), 1.19);
        assert_relative_eq!(
            constants.water().specific_heat().get::<joule_per_kilogram_kelvin>(),
            4186.0
        );
        assert_relative_eq!(
            constants.water().density().get::<kilogram_per_cubic_meter>(),
            998.0
        );
    }

    #[test]
    fn override_does_not_touch_standard() {
        let warm_water = FluidProperties::from_reference(4180.0, 992.0);
        let overridden = PhysicalConstants::standard().with_water(warm_water);

        assert_eq!(overridden.water(), warm_water);
        assert_eq!(overridden.air(), PhysicalConstants::standard().air());
        assert_relative_eq!(
            PhysicalConstants::standard()
                .water()
                .density()
                .get::<kilogram_per_cubic_meter>(),
            WATER_DENSITY
        );
    }
}
