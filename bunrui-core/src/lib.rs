//! Closed fault taxonomy with total kind classification
//!
//! This crate provides a small, closed set of failure variants so that a
//! catch site can dispatch behavior by kind instead of string-matching
//! messages. Values are constructed at the failure site, propagated to
//! the nearest boundary that understands their kind, and dropped after
//! handling.
//!
//! # Example
//!
//! ```rust
//! use bunrui_core::{Fault, FaultKind};
//!
//! let fault = Fault::missing_property("age");
//! assert_eq!(fault.kind(), FaultKind::MissingProperty);
//! assert_eq!(fault.to_string(), "No property: age");
//!
//! // Foreign errors classify as Unknown, never as a real kind.
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
//! assert_eq!(FaultKind::of(&io), FaultKind::Unknown);
//! ```

#![warn(missing_docs)]

pub mod fault;
pub mod kind;

pub use fault::{BoxError, Fault};
pub use kind::FaultKind;
