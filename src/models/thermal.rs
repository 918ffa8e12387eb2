//! Thermal systems models.
//!
//! This module contains steady-state sizing models for thermally managed
//! enclosures.

pub mod enclosure;
