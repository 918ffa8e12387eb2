//! Serializable case configuration.
//!
//! Presentation layers and configuration files describe a case with plain SI
//! numbers. [`CaseConfig`] mirrors those inputs, fills anything missing from the
//! reference case, and converts into a validated [`Case`] with `try_from`.
//!
//! ```
//! use enclosure_thermal::models::thermal::enclosure::{Case, CaseConfig};
//!
//! let config: CaseConfig = serde_json::from_str(
//!     r#"{ "loads": { "baseline_w": 250.0 },
//!          "ambient": { "coupling": { "mode": "air_changes", "per_hour": 0.5 } } }"#,
//! ).unwrap();
//! let case = Case::try_from(config).unwrap();
//! assert_eq!(case.loads.total().value, 250.0);
//! ```

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{
        HeatCapacity, Length, Power, TemperatureInterval, ThermalConductance,
        ThermodynamicTemperature, Time,
    },
    heat_capacity::joule_per_kelvin,
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use super::core::{
    AmbientConditions, Case, CoolingPlant, CoolingPlantSpec, CoolingType, Enclosure, HeatLoads,
    ValidationError,
};

/// Raw inputs for a [`Case`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseConfig {
    pub enclosure: EnclosureConfig,
    pub loads: LoadsConfig,
    pub cooling: CoolingConfig,
    pub ambient: AmbientConfig,
    /// Enclosure setpoint in °C; the ambient temperature when absent.
    pub setpoint_c: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnclosureConfig {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub internal_thermal_mass_j_per_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadsConfig {
    pub baseline_w: f64,
    pub additional_w: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoolingConfig {
    pub cooling_type: CoolingType,
    pub coil_approach_k: f64,
    pub coil_capacity_w: f64,
    pub chilled_water_c: f64,
    pub air_delta_t_k: f64,
    pub water_delta_t_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmbientConfig {
    pub temperature_c: f64,
    pub variation_amplitude_k: f64,
    pub variation_period_h: f64,
    pub coupling: UaSource,
}

/// How the ambient coupling is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UaSource {
    /// UA given directly, W/K.
    Conductance { ua_w_per_k: f64 },
    /// UA derived from an air-change rate through the enclosure volume.
    AirChanges { per_hour: f64 },
}

impl TryFrom<CaseConfig> for Case {
    type Error = ValidationError;

    fn try_from(config: CaseConfig) -> Result<Self, Self::Error> {
        let EnclosureConfig {
            length_m,
            width_m,
            height_m,
            internal_thermal_mass_j_per_k,
        } = config.enclosure;
        let enclosure = Enclosure::new(
            Length::new::<meter>(length_m),
            Length::new::<meter>(width_m),
            Length::new::<meter>(height_m),
        )?
        .with_internal_thermal_mass(HeatCapacity::new::<joule_per_kelvin>(
            internal_thermal_mass_j_per_k,
        ))?;

        let loads = HeatLoads::new(
            Power::new::<watt>(config.loads.baseline_w),
            Power::new::<watt>(config.loads.additional_w),
        )?;

        let cooling = CoolingPlant::new(CoolingPlantSpec {
            cooling_type: config.cooling.cooling_type,
            coil_approach: TemperatureInterval::new::<delta_kelvin>(config.cooling.coil_approach_k),
            coil_capacity: Power::new::<watt>(config.cooling.coil_capacity_w),
            chilled_water_supply: ThermodynamicTemperature::new::<degree_celsius>(
                config.cooling.chilled_water_c,
            ),
            air_delta_t: TemperatureInterval::new::<delta_kelvin>(config.cooling.air_delta_t_k),
            water_delta_t: TemperatureInterval::new::<delta_kelvin>(config.cooling.water_delta_t_k),
        })?;

        let ambient_config = config.ambient;
        let temperature = ThermodynamicTemperature::new::<degree_celsius>(ambient_config.temperature_c);
        let amplitude = TemperatureInterval::new::<delta_kelvin>(ambient_config.variation_amplitude_k);
        let period = Time::new::<hour>(ambient_config.variation_period_h);
        let ambient = match ambient_config.coupling {
            UaSource::Conductance { ua_w_per_k } => AmbientConditions::new(
                temperature,
                amplitude,
                period,
                ThermalConductance::new::<watt_per_kelvin>(ua_w_per_k),
            )?,
            UaSource::AirChanges { per_hour } => AmbientConditions::with_air_changes(
                temperature,
                amplitude,
                period,
                per_hour,
                &enclosure,
            )?,
        };

        let case = Case::new(enclosure, loads, cooling, ambient);
        Ok(match config.setpoint_c {
            Some(setpoint_c) => {
                case.with_setpoint(ThermodynamicTemperature::new::<degree_celsius>(setpoint_c))
            }
            None => case,
        })
    }
}

impl From<&Case> for CaseConfig {
    fn from(case: &Case) -> Self {
        let enclosure = &case.enclosure;
        let cooling = &case.cooling;
        let ambient = &case.ambient;
        Self {
            enclosure: EnclosureConfig {
                length_m: enclosure.length().get::<meter>(),
                width_m: enclosure.width().get::<meter>(),
                height_m: enclosure.height().get::<meter>(),
                internal_thermal_mass_j_per_k: enclosure
                    .internal_thermal_mass()
                    .get::<joule_per_kelvin>(),
            },
            loads: LoadsConfig {
                baseline_w: case.loads.baseline().get::<watt>(),
                additional_w: case.loads.additional().get::<watt>(),
            },
            cooling: CoolingConfig {
                cooling_type: cooling.cooling_type(),
                coil_approach_k: cooling.coil_approach().get::<delta_kelvin>(),
                coil_capacity_w: cooling.coil_capacity().get::<watt>(),
                chilled_water_c: cooling.chilled_water_supply().get::<degree_celsius>(),
                air_delta_t_k: cooling.air_delta_t().get::<delta_kelvin>(),
                water_delta_t_k: cooling.water_delta_t().get::<delta_kelvin>(),
            },
            ambient: AmbientConfig {
                temperature_c: ambient.temperature().get::<degree_celsius>(),
                variation_amplitude_k: ambient.variation_amplitude().get::<delta_kelvin>(),
                variation_period_h: ambient.variation_period().get::<hour>(),
                coupling: UaSource::Conductance {
                    ua_w_per_k: ambient.ua().get::<watt_per_kelvin>(),
                },
            },
            setpoint_c: Some(case.setpoint.get::<degree_celsius>()),
        }
    }
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            setpoint_c: None,
            ..Self::from(&Case::reference())
        }
    }
}

impl Default for EnclosureConfig {
    fn default() -> Self {
        CaseConfig::default().enclosure
    }
}

impl Default for LoadsConfig {
    fn default() -> Self {
        CaseConfig::default().loads
    }
}

impl Default for CoolingConfig {
    fn default() -> Self {
        CaseConfig::default().cooling
    }
}

impl Default for AmbientConfig {
    fn default() -> Self {
        CaseConfig::default().ambient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn empty_document_is_the_reference_case() -> Result<(), ValidationError> {
        let config: CaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CaseConfig::default());

        let case = Case::try_from(config)?;
        let reference = Case::reference();

        assert_relative_eq!(
            case.enclosure.volume().get::<uom::si::volume::cubic_meter>(),
            reference.enclosure.volume().get::<uom::si::volume::cubic_meter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            case.setpoint.get::<degree_celsius>(),
            reference.setpoint.get::<degree_celsius>(),
            max_relative = 1e-12
        );
        assert_eq!(case.cooling.cooling_type(), CoolingType::AirCoil);
        Ok(())
    }

    #[test]
    fn air_changes_resolve_through_enclosure_volume() -> Result<(), ValidationError> {
        let config: CaseConfig = serde_json::from_str(
            r#"{
                "enclosure": { "length_m": 2.0, "width_m": 1.0, "height_m": 0.5 },
                "ambient": { "coupling": { "mode": "air_changes", "per_hour": 2.0 } },
                "setpoint_c": 21.0
            }"#,
        )
        .unwrap();

        let case = Case::try_from(config)?;

        // 2 ACH · 1 m³ · 1.19 kg/m³ · 1005 J/(kg·K) / 3600 s
        assert_relative_eq!(
            case.ambient.ua().get::<watt_per_kelvin>(),
            2.0 * 1.19 * 1005.0 / 3600.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(case.setpoint.get::<degree_celsius>(), 21.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn invalid_field_is_named() {
        let config: CaseConfig =
            serde_json::from_str(r#"{ "cooling": { "air_delta_t_k": 0.0 } }"#).unwrap();

        let err = Case::try_from(config).unwrap_err();
        assert_eq!(err.field, "cooling.air_delta_t");
        assert_eq!(err.source, ConstraintError::Zero);
        assert_eq!(err.to_string(), "invalid cooling.air_delta_t: value must not be zero");
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed = serde_json::from_str::<CaseConfig>(r#"{ "loads": { "baseline": 5.0 } }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn cooling_type_parses() {
        let config: CaseConfig =
            serde_json::from_str(r#"{ "cooling": { "cooling_type": "hybrid" } }"#).unwrap();
        assert_eq!(config.cooling.cooling_type, CoolingType::Hybrid);
    }
}
