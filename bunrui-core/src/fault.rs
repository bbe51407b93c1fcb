//! The fault taxonomy

use crate::kind::FaultKind;
use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error type used for wrapped causes and cross-boundary propagation.
///
/// Causes are not required to come from this taxonomy; any error value
/// can travel in this form.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A classified application failure.
///
/// The variant set is closed: handlers can match exhaustively, and
/// [`Fault::kind`] maps each variant to its discriminator. Messages are
/// the `Display` rendering; for [`Fault::MissingProperty`] the message is
/// derived from the field name.
#[derive(Debug, Error)]
pub enum Fault {
    /// Failure with a message and no further structure
    #[error("{0}")]
    Generic(String),

    /// Failure summarizing an inner failure
    #[error("{message}")]
    Wrapped {
        /// Summary shown for the wrapping failure
        message: String,
        /// The originating failure, held unchanged
        #[source]
        cause: BoxError,
    },

    /// Malformed or incomplete input data
    #[error("{0}")]
    Validation(String),

    /// A required field was absent from the input
    #[error("No property: {0}")]
    MissingProperty(String),
}

impl Fault {
    /// Create a failure with a message and no further structure.
    pub fn generic(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "fault message must be non-empty");
        Fault::Generic(message)
    }

    /// Create a failure summarizing `cause`.
    ///
    /// The cause stays inspectable through [`Fault::cause`] and the
    /// standard [`std::error::Error::source`] chain.
    pub fn wrapped(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "fault message must be non-empty");
        Fault::Wrapped {
            message,
            cause: cause.into(),
        }
    }

    /// Create a data-shape failure with no specific field attached.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "fault message must be non-empty");
        Fault::Validation(message)
    }

    /// Create a failure naming a required field that was absent.
    pub fn missing_property(property: impl Into<String>) -> Self {
        let property = property.into();
        debug_assert!(!property.is_empty(), "property name must be non-empty");
        Fault::MissingProperty(property)
    }

    /// The discriminator set at construction.
    ///
    /// Never returns [`FaultKind::Unknown`]; that kind exists only as the
    /// classification sentinel for foreign values.
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::Generic(_) => FaultKind::Generic,
            Fault::Wrapped { .. } => FaultKind::Wrapped,
            Fault::Validation(_) => FaultKind::Validation,
            Fault::MissingProperty(_) => FaultKind::MissingProperty,
        }
    }

    /// The nested cause, unchanged, for wrapped faults.
    ///
    /// No further classification is implied; callers classify the
    /// returned value themselves if they need its kind.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Fault::Wrapped { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }

    /// The missing field name, for missing-property faults.
    pub fn property(&self) -> Option<&str> {
        match self {
            Fault::MissingProperty(property) => Some(property),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_set_at_construction() {
        assert_eq!(Fault::generic("boom").kind(), FaultKind::Generic);
        assert_eq!(
            Fault::wrapped("outer", Fault::generic("inner")).kind(),
            FaultKind::Wrapped
        );
        assert_eq!(Fault::validation("bad shape").kind(), FaultKind::Validation);
        assert_eq!(
            Fault::missing_property("age").kind(),
            FaultKind::MissingProperty
        );
    }

    #[test]
    fn test_missing_property_message_names_field() {
        let fault = Fault::missing_property("age");
        assert_eq!(fault.to_string(), "No property: age");
        assert_eq!(fault.property(), Some("age"));
    }

    #[test]
    fn test_accessors_absent_for_other_variants() {
        assert_eq!(Fault::validation("bad").property(), None);
        assert!(Fault::generic("boom").cause().is_none());
        assert!(Fault::missing_property("age").cause().is_none());
    }

    #[test]
    fn test_cause_preserved_unchanged() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let fault = Fault::wrapped("card declined", inner);

        let cause = fault.cause().expect("wrapped fault carries a cause");
        assert_eq!(cause.to_string(), "connection reset");

        let io = cause
            .downcast_ref::<std::io::Error>()
            .expect("cause type preserved");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionReset);
    }

    #[test]
    fn test_source_chain_matches_cause() {
        let fault = Fault::wrapped("outer", Fault::missing_property("name"));
        let source = fault.source().expect("wrapped fault has a source");
        assert_eq!(source.to_string(), "No property: name");

        assert!(Fault::generic("boom").source().is_none());
        assert!(Fault::validation("bad").source().is_none());
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(Fault::generic("boom").to_string(), "boom");
        assert_eq!(
            Fault::wrapped("outer failed", Fault::generic("inner")).to_string(),
            "outer failed"
        );
        assert_eq!(
            Fault::validation("age must be a number").to_string(),
            "age must be a number"
        );
    }
}
