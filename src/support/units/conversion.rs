//! Conversions between SI and the display units used by enclosure dashboards.
//!
//! Every reverse ratio is defined as the reciprocal of its forward ratio, so
//! a round trip returns the original value to floating-point precision.

use crate::support::constants::WATER_DENSITY;

/// Metres per foot.
pub const FT_TO_M: f64 = 0.3048;
/// Feet per metre.
pub const M_TO_FT: f64 = 1.0 / FT_TO_M;

/// Cubic metres per cubic foot.
pub const FT3_TO_M3: f64 = FT_TO_M * FT_TO_M * FT_TO_M;
/// Cubic feet per cubic metre.
pub const M3_TO_FT3: f64 = 1.0 / FT3_TO_M3;

/// Cubic feet per minute in one cubic metre per second.
pub const M3S_TO_CFM: f64 = 60.0 * M3_TO_FT3;
/// Cubic metres per second in one cubic foot per minute.
pub const CFM_TO_M3S: f64 = 1.0 / M3S_TO_CFM;

/// Litres per minute of water in one kilogram per second.
pub const KGS_TO_LPM_WATER: f64 = 60.0 * 1000.0 / WATER_DENSITY;
/// Kilograms per second of water in one litre per minute.
pub const LPM_TO_KGS_WATER: f64 = 1.0 / KGS_TO_LPM_WATER;

/// Litres in one US gallon.
pub const GPM_TO_LPM: f64 = 3.785_411_784;
/// US gallons in one litre.
pub const LPM_TO_GPM: f64 = 1.0 / GPM_TO_LPM;

#[must_use]
pub fn ft_to_m(ft: f64) -> f64 {
    ft * FT_TO_M
}

#[must_use]
pub fn m_to_ft(m: f64) -> f64 {
    m * M_TO_FT
}

#[must_use]
pub fn ft3_to_m3(ft3: f64) -> f64 {
    ft3 * FT3_TO_M3
}

#[must_use]
pub fn m3_to_ft3(m3: f64) -> f64 {
    m3 * M3_TO_FT3
}

#[must_use]
pub fn cfm_to_m3s(cfm: f64) -> f64 {
    cfm * CFM_TO_M3S
}

#[must_use]
pub fn m3s_to_cfm(m3s: f64) -> f64 {
    m3s * M3S_TO_CFM
}

/// Converts a water mass flow in kg/s to litres per minute.
#[must_use]
pub fn kgs_to_lpm(kgs: f64) -> f64 {
    kgs * KGS_TO_LPM_WATER
}

/// Converts a water volumetric flow in litres per minute to kg/s.
#[must_use]
pub fn lpm_to_kgs(lpm: f64) -> f64 {
    lpm * LPM_TO_KGS_WATER
}

#[must_use]
pub fn lpm_to_gpm(lpm: f64) -> f64 {
    lpm * LPM_TO_GPM
}

#[must_use]
pub fn gpm_to_lpm(gpm: f64) -> f64 {
    gpm * GPM_TO_LPM
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Volume, VolumeRate},
        length::{foot, meter},
        volume::{cubic_foot, cubic_meter},
        volume_rate::{
            cubic_foot_per_minute, cubic_meter_per_second, gallon_per_minute, liter_per_minute,
        },
    };

    const SAMPLES: [f64; 7] = [1e-6, 0.72, 1.0, 2.83, 38.0, 1234.5, 9.87e8];

    #[test]
    fn ratios_agree_with_uom() {
        assert_relative_eq!(
            ft_to_m(10.0),
            Length::new::<foot>(10.0).get::<meter>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            ft3_to_m3(100.0),
            Volume::new::<cubic_foot>(100.0).get::<cubic_meter>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            cfm_to_m3s(40.0),
            VolumeRate::new::<cubic_foot_per_minute>(40.0).get::<cubic_meter_per_second>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            lpm_to_gpm(1.0),
            VolumeRate::new::<liter_per_minute>(1.0).get::<gallon_per_minute>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn display_values() {
        assert_relative_eq!(m_to_ft(1.0), 3.28084, max_relative = 1e-5);
        assert_relative_eq!(ft3_to_m3(100.0), 2.8317, max_relative = 1e-3);
        assert_relative_eq!(m3s_to_cfm(1.0), 2118.88, max_relative = 1e-3);
        assert_relative_eq!(kgs_to_lpm(0.012), 0.72, max_relative = 2e-2);
        assert_relative_eq!(lpm_to_gpm(1.0), 0.264172, max_relative = 1e-5);
    }

    #[test]
    fn round_trips() {
        for x in SAMPLES {
            assert_relative_eq!(m_to_ft(ft_to_m(x)), x, max_relative = 1e-9);
            assert_relative_eq!(m3_to_ft3(ft3_to_m3(x)), x, max_relative = 1e-9);
            assert_relative_eq!(m3s_to_cfm(cfm_to_m3s(x)), x, max_relative = 1e-9);
            assert_relative_eq!(gpm_to_lpm(lpm_to_gpm(x)), x, max_relative = 1e-9);
            assert_relative_eq!(lpm_to_kgs(kgs_to_lpm(x)), x, max_relative = 1e-9);
        }
    }
}
