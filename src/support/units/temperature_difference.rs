use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// [`uom`] does not define `ThermodynamicTemperature - ThermodynamicTemperature`,
/// so setpoint-to-ambient differences go through [`minus`](Self::minus),
/// which returns a [`TemperatureInterval`].
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn setpoint_above_and_below_ambient() {
        let setpoint = ThermodynamicTemperature::new::<degree_celsius>(23.5);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(15.0);

        assert_relative_eq!(setpoint.minus(cold).get::<delta_celsius>(), 8.5, epsilon = 1e-12);
        assert_relative_eq!(cold.minus(setpoint).get::<delta_celsius>(), -8.5, epsilon = 1e-12);
    }

    #[test]
    fn mixed_scales() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(t_f.minus(t_c).get::<delta_celsius>(), 0.0, epsilon = 1e-12);
    }
}
