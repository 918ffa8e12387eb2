use tracing::trace;
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermalConductance, ThermodynamicTemperature},
        power::watt,
    },
};

use crate::support::units::TemperatureDifference;

use super::super::SolverResult;

/// Heater power needed to hold `setpoint` against losses to ambient.
///
/// The loss `UA · (T_set − T_amb)` is applied with its sign, so a warm
/// ambient contributes heat. The heater covers whatever the internal load
/// does not: `max(0, loss − load)`.
#[must_use]
pub fn solve_heater(
    load: Power,
    ua: ThermalConductance,
    ambient: ThermodynamicTemperature,
    setpoint: ThermodynamicTemperature,
) -> SolverResult {
    let heat_loss: Power = ua * setpoint.minus(ambient);
    let deficit = heat_loss - load;
    let heater_power = if deficit > Power::ZERO {
        deficit
    } else {
        Power::ZERO
    };

    trace!(
        load_w = load.get::<watt>(),
        heat_loss_w = heat_loss.get::<watt>(),
        heater_w = heater_power.get::<watt>(),
        "solved heater requirement"
    );

    SolverResult {
        heater_power,
        ..SolverResult::default()
    }
}
