//! Failure dispatch at the submission boundary
//!
//! Recognized kinds are rendered into user-visible messages here; any
//! other failure is re-raised unchanged so an outer handler keeps the
//! opportunity to interpret it.

use crate::record::UserRecord;
use bunrui_core::{BoxError, Fault, FaultKind};

/// User-visible rendering of a failure handled at this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// A specific required field was missing
    MissingField {
        /// Name of the absent field
        property: String,
        /// Message naming the field
        message: String,
    },
    /// The record was malformed in some other way
    InvalidData(String),
    /// The payload could not be parsed at all
    MalformedPayload(String),
    /// A recognized non-validation failure
    Failed(String),
}

/// Outcome of a submission once recognized failures are rendered.
#[derive(Debug)]
pub enum Submission {
    /// The record parsed and validated
    Accepted(UserRecord),
    /// A recognized failure, rendered for the user
    Rejected(FormMessage),
}

/// Handle a submission failure: render recognized kinds, re-raise the rest.
///
/// Taxonomy faults and `serde_json` syntax errors are handled locally.
/// Anything else comes back in `Err` as the original value, unchanged.
pub fn dispatch(error: BoxError) -> Result<FormMessage, BoxError> {
    log::debug!(
        "submission failed: kind={}, error={error}",
        FaultKind::of(error.as_ref())
    );

    if let Some(parse) = error.downcast_ref::<serde_json::Error>() {
        return Ok(FormMessage::MalformedPayload(format!(
            "Malformed submission: {parse}"
        )));
    }

    match error.downcast::<Fault>() {
        Ok(fault) => Ok(render(*fault)),
        Err(unrecognized) => Err(unrecognized),
    }
}

fn render(fault: Fault) -> FormMessage {
    match fault {
        Fault::MissingProperty(ref property) => FormMessage::MissingField {
            property: property.clone(),
            message: format!("Invalid data: {fault}"),
        },
        Fault::Validation(message) => FormMessage::InvalidData(format!("Invalid data: {message}")),
        Fault::Wrapped { message, cause } => {
            log::debug!("rejected submission caused by: {cause}");
            FormMessage::Failed(message)
        }
        Fault::Generic(message) => FormMessage::Failed(message),
    }
}
