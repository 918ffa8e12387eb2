use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A model input that failed validation.
///
/// `field` is a stable dotted name such as `"enclosure.length"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field}: {source}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,

    /// The constraint the value violated.
    pub source: ConstraintError,
}

impl ValidationError {
    /// Returns a closure tagging a [`ConstraintError`] with `field`.
    ///
    /// Intended for `map_err` at construction sites.
    pub(crate) fn at(field: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self { field, source }
    }
}
