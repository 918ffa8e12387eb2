use uom::si::{f64::Power, power::watt};

use crate::support::constraint::{Constrained, NonNegative};

use super::super::ValidationError;

/// Steady internal heat released into the enclosure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLoads {
    baseline: Constrained<Power, NonNegative>,
    additional: Constrained<Power, NonNegative>,
}

impl HeatLoads {
    /// Creates heat loads from a baseline and an additional component.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either load is negative or `NaN`.
    pub fn new(baseline: Power, additional: Power) -> Result<Self, ValidationError> {
        Ok(Self {
            baseline: NonNegative::new(baseline).map_err(ValidationError::at("loads.baseline"))?,
            additional: NonNegative::new(additional)
                .map_err(ValidationError::at("loads.additional"))?,
        })
    }

    /// Returns the baseline load.
    #[must_use]
    pub fn baseline(&self) -> Power {
        self.baseline.into_inner()
    }

    /// Returns the additional load.
    #[must_use]
    pub fn additional(&self) -> Power {
        self.additional.into_inner()
    }

    /// Baseline plus additional load.
    #[must_use]
    pub fn total(&self) -> Power {
        [self.baseline, self.additional]
            .into_iter()
            .sum::<Constrained<Power, NonNegative>>()
            .into_inner()
    }
}

/// The reference 100 W instrument load with nothing added.
impl Default for HeatLoads {
    fn default() -> Self {
        Self {
            baseline: Constrained::new_unchecked(Power::new::<watt>(100.0)),
            additional: Constrained::new_unchecked(Power::new::<watt>(0.0)),
        }
    }
}
