use tracing::trace;
use uom::si::{
    f64::{MassRate, Power, TemperatureInterval},
    mass_rate::kilogram_per_second,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{constraint::NonZero, fluid::FluidProperties};

use super::{super::SolverResult, SolveError};

/// Coolant mass flow needed to absorb `load` at the given water-side ΔT.
///
/// `m_dot = Q / (c_p,water · ΔT_water)`.
///
/// # Errors
///
/// Returns [`SolveError::CoolantDeltaT`] if `water_delta_t` is zero or `NaN`.
pub fn solve_coolant_flow(
    load: Power,
    water_delta_t: TemperatureInterval,
    water: &FluidProperties,
) -> Result<SolverResult, SolveError> {
    let delta_t = NonZero::new(water_delta_t)
        .map_err(SolveError::CoolantDeltaT)?
        .into_inner();

    let coolant_mass_rate: MassRate = load / (water.specific_heat() * delta_t);

    trace!(
        load_w = load.get::<watt>(),
        delta_t_k = delta_t.get::<delta_kelvin>(),
        mass_rate_kg_s = coolant_mass_rate.get::<kilogram_per_second>(),
        "solved coolant flow"
    );

    Ok(SolverResult {
        coolant_mass_rate,
        ..SolverResult::default()
    })
}
