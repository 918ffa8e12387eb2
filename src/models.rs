//! Public enclosure models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the computation and domain types. The module re-exports the core
//! types callers need and adds thin [`twine_core::Model`] adapters that
//! delegate to the core functions.
//!
//! The core solvers stay callable directly; an adapter only fixes the fluid
//! properties it was built with.

pub mod thermal;
