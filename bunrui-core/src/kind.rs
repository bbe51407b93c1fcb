//! Kind discriminators and classification

use crate::fault::Fault;
use std::error::Error;
use std::fmt;

/// Discriminator identifying which fault variant a value is.
///
/// [`FaultKind::Unknown`] is never carried by a constructed [`Fault`];
/// it is the sentinel returned when classifying a value outside the
/// taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Failure with a message and no further structure
    Generic,
    /// Failure summarizing another failure
    Wrapped,
    /// Malformed or incomplete input data
    Validation,
    /// Required field absent from the input
    MissingProperty,
    /// Value outside the taxonomy
    Unknown,
}

impl FaultKind {
    /// Classify an arbitrary error value.
    ///
    /// Total and exact: every input maps to the kind set at construction
    /// for taxonomy values, and to [`FaultKind::Unknown`] for everything
    /// else. Never panics.
    pub fn of(error: &(dyn Error + 'static)) -> Self {
        match error.downcast_ref::<Fault>() {
            Some(fault) => fault.kind(),
            None => FaultKind::Unknown,
        }
    }

    /// Whether this kind belongs to the validation family.
    ///
    /// Missing-property faults are a specialization of validation, so
    /// both report `true` here.
    pub fn is_validation(self) -> bool {
        matches!(self, FaultKind::Validation | FaultKind::MissingProperty)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Generic => write!(f, "generic"),
            FaultKind::Wrapped => write!(f, "wrapped"),
            FaultKind::Validation => write!(f, "validation"),
            FaultKind::MissingProperty => write!(f, "missing_property"),
            FaultKind::Unknown => write!(f, "unknown"),
        }
    }
}
