//! Form-submission boundary over the bunrui fault taxonomy
//!
//! This crate is the embedding collaborator for `bunrui-core`: it reads
//! a user record from a JSON payload and applies the dispatch policy at
//! the submission boundary. Validation-family faults and payload syntax
//! errors are rendered into user-visible messages; every other failure
//! is re-raised unchanged for an outer handler.
//!
//! # Example
//!
//! ```rust
//! use bunrui_forms::{submit, FormMessage, Submission};
//!
//! match submit(r#"{"name": "John"}"#).unwrap() {
//!     Submission::Rejected(FormMessage::MissingField { property, .. }) => {
//!         assert_eq!(property, "age");
//!     }
//!     other => panic!("expected a missing-field rejection, got {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

pub mod boundary;
pub mod reader;
pub mod record;

pub use boundary::{dispatch, FormMessage, Submission};
pub use reader::read_user;
pub use record::UserRecord;

use bunrui_core::BoxError;

/// Read and validate a submission, rendering recognized failures.
///
/// Unknown failures propagate unchanged to the caller.
pub fn submit(json: &str) -> Result<Submission, BoxError> {
    match reader::read_user(json) {
        Ok(record) => Ok(Submission::Accepted(record)),
        Err(error) => boundary::dispatch(error).map(Submission::Rejected),
    }
}
