use tracing::trace;
use uom::si::{
    f64::{MassRate, Power, TemperatureInterval, VolumeRate},
    mass_rate::kilogram_per_second,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{constraint::NonZero, fluid::FluidProperties};

use super::{super::SolverResult, SolveError};

/// Air flow needed to carry `load` away at the given air-side ΔT.
///
/// `m_dot = Q / (c_p · ΔT)` and `V_dot = m_dot / ρ`.
/// A negative ΔT yields a negative flow; the sign is left for the caller.
///
/// # Errors
///
/// Returns [`SolveError::AirDeltaT`] if `air_delta_t` is zero or `NaN`.
pub fn solve_airflow(
    load: Power,
    air_delta_t: TemperatureInterval,
    air: &FluidProperties,
) -> Result<SolverResult, SolveError> {
    let delta_t = NonZero::new(air_delta_t)
        .map_err(SolveError::AirDeltaT)?
        .into_inner();

    let air_mass_rate: MassRate = load / (air.specific_heat() * delta_t);
    let air_volume_rate: VolumeRate = air_mass_rate / air.density();

    trace!(
        load_w = load.get::<watt>(),
        delta_t_k = delta_t.get::<delta_kelvin>(),
        mass_rate_kg_s = air_mass_rate.get::<kilogram_per_second>(),
        volume_rate_m3_s = air_volume_rate.get::<cubic_meter_per_second>(),
        "solved airflow"
    );

    Ok(SolverResult {
        air_mass_rate,
        air_volume_rate,
        ..SolverResult::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constants::PhysicalConstants, constraint::ConstraintError};

    fn air() -> FluidProperties {
        PhysicalConstants::standard().air()
    }

    fn solve(load_w: f64, delta_t_k: f64) -> Result<SolverResult, SolveError> {
        solve_airflow(
            Power::new::<watt>(load_w),
            TemperatureInterval::new::<delta_kelvin>(delta_t_k),
            &air(),
        )
    }

    #[test]
    fn analytical_value() -> Result<(), SolveError> {
        let result = solve(100.0, 5.0)?;

        let expected_kg_s = 100.0 / (1005.0 * 5.0);
        assert_relative_eq!(
            result.air_mass_rate.get::<kilogram_per_second>(),
            expected_kg_s,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.air_volume_rate.get::<cubic_meter_per_second>(),
            expected_kg_s / 1.19,
            max_relative = 1e-12
        );
        assert!(35.0 <= result.airflow_cfm() && result.airflow_cfm() <= 42.0);
        Ok(())
    }

    #[test]
    fn linear_in_load() -> Result<(), SolveError> {
        let single = solve(40.0, 5.0)?.air_mass_rate.get::<kilogram_per_second>();
        let triple = solve(120.0, 5.0)?.air_mass_rate.get::<kilogram_per_second>();
        assert_relative_eq!(triple, 3.0 * single, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn halving_delta_t_doubles_flow() -> Result<(), SolveError> {
        let wide = solve(100.0, 5.0)?.air_mass_rate.get::<kilogram_per_second>();
        let narrow = solve(100.0, 2.5)?.air_mass_rate.get::<kilogram_per_second>();
        assert_relative_eq!(narrow, 2.0 * wide, max_relative = 1e-12);

        assert!(solve(100.0, 1.0)?.airflow_cfm() > 150.0);
        Ok(())
    }

    #[test]
    fn zero_load_gives_zero_flow() -> Result<(), SolveError> {
        for delta_t in [0.5, 5.0, -3.0] {
            let result = solve(0.0, delta_t)?;
            assert_eq!(result.air_mass_rate.get::<kilogram_per_second>(), 0.0);
            assert_eq!(result.air_volume_rate.get::<cubic_meter_per_second>(), 0.0);
        }
        Ok(())
    }

    #[test]
    fn negative_delta_t_reverses_sign() -> Result<(), SolveError> {
        let result = solve(100.0, -5.0)?;
        assert!(result.air_mass_rate.get::<kilogram_per_second>() < 0.0);
        Ok(())
    }

    #[test]
    fn overridden_properties_are_used() -> Result<(), SolveError> {
        let light = FluidProperties::from_reference(1000.0, 1.0);
        let result = solve_airflow(
            Power::new::<watt>(100.0),
            TemperatureInterval::new::<delta_kelvin>(5.0),
            &light,
        )?;
        assert_relative_eq!(
            result.air_volume_rate.get::<cubic_meter_per_second>(),
            0.02,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn zero_delta_t_is_a_domain_error() {
        let err = solve(100.0, 0.0).unwrap_err();
        assert_eq!(err, SolveError::AirDeltaT(ConstraintError::Zero));
        assert_eq!(err.parameter(), "air_delta_t");

        assert_eq!(
            solve(100.0, f64::NAN).unwrap_err(),
            SolveError::AirDeltaT(ConstraintError::NotANumber)
        );
    }
}
