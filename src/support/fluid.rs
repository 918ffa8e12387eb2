use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Constant thermophysical properties of a working fluid.
///
/// Both values are strictly positive, so a solver dividing by either
/// never produces a non-finite result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
}

impl FluidProperties {
    /// Creates fluid properties from a specific heat and a density.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either value is not strictly positive.
    pub fn new(specific_heat: SpecificHeatCapacity, density: MassDensity) -> ConstraintResult<Self> {
        Ok(Self {
            specific_heat: StrictlyPositive::new(specific_heat)?,
            density: StrictlyPositive::new(density)?,
        })
    }

    /// Builds properties from raw SI values known to be positive.
    pub(crate) fn from_reference(cp_j_per_kg_k: f64, density_kg_per_m3: f64) -> Self {
        Self {
            specific_heat: Constrained::new_unchecked(SpecificHeatCapacity::new::<
                joule_per_kilogram_kelvin,
            >(cp_j_per_kg_k)),
            density: Constrained::new_unchecked(MassDensity::new::<kilogram_per_cubic_meter>(
                density_kg_per_m3,
            )),
        }
    }

    /// Returns a copy with the specific heat replaced.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn with_specific_heat(self, specific_heat: SpecificHeatCapacity) -> ConstraintResult<Self> {
        Ok(Self {
            specific_heat: StrictlyPositive::new(specific_heat)?,
            ..self
        })
    }

    /// Returns a copy with the density replaced.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn with_density(self, density: MassDensity) -> ConstraintResult<Self> {
        Ok(Self {
            density: StrictlyPositive::new(density)?,
            ..self
        })
    }

    /// Returns the specific heat at constant pressure.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat.into_inner()
    }

    /// Returns the density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_non_positive_properties() {
        let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.19);

        assert!(FluidProperties::new(cp, rho).is_ok());
        assert_eq!(
            FluidProperties::new(cp * 0.0, rho),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            FluidProperties::new(cp, -rho),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn overrides_leave_other_property_untouched() -> ConstraintResult<()> {
        let air = FluidProperties::from_reference(1005.0, 1.19);
        let thin_air = air.with_density(MassDensity::new::<kilogram_per_cubic_meter>(1.0))?;

        assert_eq!(thin_air.specific_heat(), air.specific_heat());
        assert_eq!(thin_air.density().get::<kilogram_per_cubic_meter>(), 1.0);
        Ok(())
    }
}
