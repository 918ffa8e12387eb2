//! Unit helpers layered on [`uom`].
//!
//! All internal calculations carry [`uom`] quantities. This module adds:
//!
//! - [`TemperatureDifference`]: absolute minus absolute temperature as a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//! - [`conversion`]: plain `f64` conversions between SI and the imperial or
//!   flow units shown to operators (ft, ft³, CFM, L/min, GPM).
//!
//! ```
//! use enclosure_thermal::support::units::conversion::{cfm_to_m3s, m3s_to_cfm};
//!
//! let cfm = 38.0;
//! assert!((m3s_to_cfm(cfm_to_m3s(cfm)) - cfm).abs() < 1e-9);
//! ```

pub mod conversion;
mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
