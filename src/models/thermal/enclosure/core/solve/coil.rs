use tracing::trace;
use uom::si::{
    f64::{MassRate, Power, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{constraint::NonZero, fluid::FluidProperties};

use super::{super::SolverResult, SolveError};

/// Air temperature leaving the coil, `T_return − Q / (m_dot · c_p)`.
///
/// The result is not bounded below by the chilled-water supply or the dew point.
///
/// # Errors
///
/// Returns [`SolveError::AirMassRate`] if `air_mass_rate` is zero or `NaN`.
pub fn solve_coil_leaving_temperature(
    load: Power,
    air_mass_rate: MassRate,
    return_air: ThermodynamicTemperature,
    air: &FluidProperties,
) -> Result<SolverResult, SolveError> {
    let m_dot = NonZero::new(air_mass_rate)
        .map_err(SolveError::AirMassRate)?
        .into_inner();

    let leaving = return_air - load / (m_dot * air.specific_heat());

    trace!(
        load_w = load.get::<watt>(),
        mass_rate_kg_s = m_dot.get::<kilogram_per_second>(),
        return_c = return_air.get::<degree_celsius>(),
        leaving_c = leaving.get::<degree_celsius>(),
        "solved coil leaving temperature"
    );

    Ok(SolverResult {
        coil_leaving_temperature: Some(leaving),
        ..SolverResult::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constants::PhysicalConstants, constraint::ConstraintError};

    fn leaving_c(load_w: f64, mass_rate_kg_s: f64, return_c: f64) -> Result<f64, SolveError> {
        let result = solve_coil_leaving_temperature(
            Power::new::<watt>(load_w),
            MassRate::new::<kilogram_per_second>(mass_rate_kg_s),
            ThermodynamicTemperature::new::<degree_celsius>(return_c),
            &PhysicalConstants::standard().air(),
        )?;
        Ok(result
            .coil_leaving_temperature
            .map(|t| t.get::<degree_celsius>())
            .unwrap_or(f64::NAN))
    }

    #[test]
    fn known_case() -> Result<(), SolveError> {
        let m_dot = 100.0 / (1005.0 * 5.0);
        assert_relative_eq!(leaving_c(100.0, m_dot, 23.5)?, 18.5, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn no_load_leaves_air_unchanged() -> Result<(), SolveError> {
        assert_relative_eq!(leaving_c(0.0, 0.02, 23.5)?, 23.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn not_clamped_to_physical_bounds() -> Result<(), SolveError> {
        // 1 kW through a trickle of air lands far below any chilled-water supply.
        assert!(leaving_c(1000.0, 0.001, 23.5)? < -900.0);
        Ok(())
    }

    #[test]
    fn zero_mass_rate_is_a_domain_error() {
        let err = leaving_c(100.0, 0.0, 23.5).unwrap_err();
        assert_eq!(err, SolveError::AirMassRate(ConstraintError::Zero));
        assert_eq!(err.parameter(), "air_mass_rate");

        assert_eq!(
            leaving_c(100.0, f64::NAN, 23.5).unwrap_err(),
            SolveError::AirMassRate(ConstraintError::NotANumber)
        );
    }
}
