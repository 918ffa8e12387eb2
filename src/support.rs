//! Crate-level utilities shared by the enclosure models.
//!
//! These APIs are public because presentation layers need them (e.g. unit
//! conversion for display), but they are not yet stable.

pub mod constants;
pub mod constraint;
pub mod fluid;
pub mod units;
