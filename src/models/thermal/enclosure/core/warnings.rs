//! Advisory classification of solver outputs.

use std::fmt;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Power, Ratio},
        power::watt,
        ratio::percent,
    },
};

/// Utilization above which the coil cannot carry the load, in percent.
const SATURATION_PERCENT: f64 = 100.0;

/// Utilization above which little cooling margin remains, in percent.
const HIGH_UTILIZATION_PERCENT: f64 = 90.0;

/// An advisory raised by [`classify_warnings`].
///
/// `Display` renders the operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The coil is undersized for the load.
    CoolingSaturated { utilization: Ratio },
    /// The coil carries the load with little margin.
    HighUtilization { utilization: Ratio },
    /// A heater is needed to hold the setpoint.
    HeaterRequired { power: Power },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoolingSaturated { utilization } => write!(
                f,
                "COOLING SATURATED: Coil utilization at {:.0}%. \
                 Increase coil capacity or reduce heat load.",
                utilization.get::<percent>()
            ),
            Self::HighUtilization { utilization } => write!(
                f,
                "High coil utilization: {:.0}%. Limited cooling margin remaining.",
                utilization.get::<percent>()
            ),
            Self::HeaterRequired { power } => write!(
                f,
                "Heater required: {:.1} W to maintain setpoint under current ambient conditions.",
                power.get::<watt>()
            ),
        }
    }
}

/// Classifies coil utilization and heater demand into advisories.
///
/// At most one utilization advisory is raised: saturation above 100 %,
/// otherwise high utilization above 90 %. A heater advisory follows whenever
/// heater power is positive. Utilization advisories always come first.
#[must_use]
pub fn classify_warnings(utilization: Ratio, heater_power: Power) -> Vec<Warning> {
    let mut warnings = Vec::with_capacity(2);

    let utilization_percent = utilization.get::<percent>();
    if utilization_percent > SATURATION_PERCENT {
        warnings.push(Warning::CoolingSaturated { utilization });
    } else if utilization_percent > HIGH_UTILIZATION_PERCENT {
        warnings.push(Warning::HighUtilization { utilization });
    }

    if heater_power > Power::ZERO {
        warnings.push(Warning::HeaterRequired {
            power: heater_power,
        });
    }

    for warning in &warnings {
        debug!(%warning, "enclosure advisory");
    }

    warnings
}

/// Advisory messages for a utilization in percent and a heater power in watts.
///
/// ```
/// use enclosure_thermal::models::thermal::enclosure::warning_messages;
///
/// let messages = warning_messages(105.0, 15.0);
/// assert_eq!(messages.len(), 2);
/// assert!(messages[0].contains("SATURATED"));
/// assert!(messages[1].starts_with("Heater required"));
/// ```
#[must_use]
pub fn warning_messages(utilization_percent: f64, heater_required_w: f64) -> Vec<String> {
    classify_warnings(
        Ratio::new::<percent>(utilization_percent),
        Power::new::<watt>(heater_required_w),
    )
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_has_no_warnings() {
        assert!(warning_messages(50.0, 0.0).is_empty());
        assert!(warning_messages(89.9, 0.0).is_empty());
        assert!(warning_messages(90.0, 0.0).is_empty());
        assert!(
            classify_warnings(Power::new::<watt>(450.0) / Power::new::<watt>(500.0), Power::ZERO)
                .is_empty()
        );
    }

    #[test]
    fn full_capacity_is_high_utilization_not_saturation() {
        let messages = warning_messages(100.0, 0.0);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("High coil utilization: 100%"));

        assert!(matches!(
            classify_warnings(Power::new::<watt>(500.0) / Power::new::<watt>(500.0), Power::ZERO)
                .as_slice(),
            [Warning::HighUtilization { .. }]
        ));
    }

    #[test]
    fn no_heater_advisory_without_positive_demand() {
        assert!(warning_messages(0.0, 0.0).is_empty());
        assert!(warning_messages(10.0, -5.0).is_empty());
    }

    #[test]
    fn high_utilization() {
        let messages = warning_messages(92.0, 0.0);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].to_lowercase().contains("utilization"));
        assert!(!messages[0].to_lowercase().contains("saturated"));

        assert!(matches!(
            classify_warnings(Ratio::new::<percent>(99.5), Power::ZERO).as_slice(),
            [Warning::HighUtilization { .. }]
        ));
    }

    #[test]
    fn saturation_replaces_high_utilization() {
        let warnings = classify_warnings(Ratio::new::<percent>(105.0), Power::ZERO);
        assert!(matches!(
            warnings.as_slice(),
            [Warning::CoolingSaturated { .. }]
        ));
        assert!(warnings[0].to_string().to_lowercase().contains("saturated"));
        assert!(warnings[0].to_string().contains("105%"));
    }

    #[test]
    fn heater_alone() {
        let messages = warning_messages(10.0, 15.0);
        assert_eq!(
            messages,
            vec![
                "Heater required: 15.0 W to maintain setpoint under current ambient conditions."
                    .to_string()
            ]
        );
    }

    #[test]
    fn utilization_precedes_heater() {
        let warnings = classify_warnings(Ratio::new::<percent>(95.0), Power::new::<watt>(3.0));
        assert!(matches!(
            warnings.as_slice(),
            [
                Warning::HighUtilization { .. },
                Warning::HeaterRequired { .. }
            ]
        ));
    }
}
