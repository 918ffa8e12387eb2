//! Validated model inputs.
//!
//! Each type is built once per evaluation from SI quantities and is immutable
//! afterward. Construction fails with a [`ValidationError`](super::ValidationError)
//! naming the offending field.

mod ambient;
mod cooling;
mod geometry;
mod loads;
mod mode;

pub use ambient::AmbientConditions;
pub use cooling::{CoolingPlant, CoolingPlantSpec, CoolingType};
pub use geometry::{Enclosure, ua_from_air_changes};
pub use loads::HeatLoads;
pub use mode::SolveMode;
