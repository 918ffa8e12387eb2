use uom::si::{
    f64::{HeatCapacity, Length, ThermalConductance, Volume},
    heat_capacity::joule_per_kelvin,
    length::meter,
    thermal_conductance::watt_per_kelvin,
};

use crate::support::{
    constants::{PhysicalConstants, SECONDS_PER_HOUR},
    constraint::{Constrained, NonNegative, StrictlyPositive},
    fluid::FluidProperties,
    units::conversion::ft_to_m,
};

use super::super::ValidationError;

/// Internal thermal mass used when none is given, J/K.
const DEFAULT_INTERNAL_THERMAL_MASS: f64 = 50_000.0;

fn default_internal_thermal_mass() -> Constrained<HeatCapacity, NonNegative> {
    Constrained::new_unchecked(HeatCapacity::new::<joule_per_kelvin>(
        DEFAULT_INTERNAL_THERMAL_MASS,
    ))
}

/// A sealed rectangular enclosure and the air it holds.
///
/// Derived quantities are computed from the fields on every call.
/// The type is a value object: the `with_*` methods return a new enclosure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enclosure {
    length: Constrained<Length, StrictlyPositive>,
    width: Constrained<Length, StrictlyPositive>,
    height: Constrained<Length, StrictlyPositive>,
    air: FluidProperties,
    internal_thermal_mass: Constrained<HeatCapacity, NonNegative>,
}

impl Enclosure {
    /// Creates an enclosure with standard air and the default internal thermal mass.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first dimension that is not
    /// strictly positive.
    pub fn new(length: Length, width: Length, height: Length) -> Result<Self, ValidationError> {
        Ok(Self {
            length: StrictlyPositive::new(length).map_err(ValidationError::at("enclosure.length"))?,
            width: StrictlyPositive::new(width).map_err(ValidationError::at("enclosure.width"))?,
            height: StrictlyPositive::new(height).map_err(ValidationError::at("enclosure.height"))?,
            air: PhysicalConstants::standard().air(),
            internal_thermal_mass: default_internal_thermal_mass(),
        })
    }

    /// The 4 ft × 10 ft × 2.5 ft reference enclosure.
    #[must_use]
    pub fn reference() -> Self {
        let dimension = |ft: f64| Constrained::new_unchecked(Length::new::<meter>(ft_to_m(ft)));
        Self {
            length: dimension(4.0),
            width: dimension(10.0),
            height: dimension(2.5),
            air: PhysicalConstants::standard().air(),
            internal_thermal_mass: default_internal_thermal_mass(),
        }
    }

    /// Returns a copy holding air with the given properties.
    #[must_use]
    pub fn with_air(self, air: FluidProperties) -> Self {
        Self { air, ..self }
    }

    /// Returns a copy with the given internal thermal mass.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the mass is negative.
    pub fn with_internal_thermal_mass(self, mass: HeatCapacity) -> Result<Self, ValidationError> {
        Ok(Self {
            internal_thermal_mass: NonNegative::new(mass)
                .map_err(ValidationError::at("enclosure.internal_thermal_mass"))?,
            ..self
        })
    }

    /// Returns the interior length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length.into_inner()
    }

    /// Returns the interior width.
    #[must_use]
    pub fn width(&self) -> Length {
        self.width.into_inner()
    }

    /// Returns the interior height.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height.into_inner()
    }

    /// Returns the properties of the enclosed air.
    #[must_use]
    pub fn air(&self) -> FluidProperties {
        self.air
    }

    /// Returns the heat capacity of the contents, excluding air.
    #[must_use]
    pub fn internal_thermal_mass(&self) -> HeatCapacity {
        self.internal_thermal_mass.into_inner()
    }

    /// Interior volume, `L·W·H`.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.length() * self.width() * self.height()
    }

    /// Heat capacity of the enclosed air alone, `ρ·V·c_p`.
    #[must_use]
    pub fn air_heat_capacity(&self) -> HeatCapacity {
        self.air.density() * self.volume() * self.air.specific_heat()
    }

    /// Total thermal capacitance, `ρ·V·c_p + C_internal`.
    #[must_use]
    pub fn thermal_capacitance(&self) -> HeatCapacity {
        self.air_heat_capacity() + self.internal_thermal_mass()
    }
}

/// Ambient coupling equivalent to an air-change rate through this enclosure.
///
/// `UA = ACH · V · ρ · c_p / 3600`, using the enclosure's own air properties.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `air_changes_per_hour` is negative or `NaN`.
pub fn ua_from_air_changes(
    air_changes_per_hour: f64,
    enclosure: &Enclosure,
) -> Result<ThermalConductance, ValidationError> {
    let ach = NonNegative::new(air_changes_per_hour)
        .map_err(ValidationError::at("ambient.air_changes_per_hour"))?
        .into_inner();
    let air_capacity = enclosure.air_heat_capacity().get::<joule_per_kelvin>();
    Ok(ThermalConductance::new::<watt_per_kelvin>(
        ach * air_capacity / SECONDS_PER_HOUR,
    ))
}
