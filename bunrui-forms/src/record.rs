//! Submitted user record DTO

use serde::{Deserialize, Serialize};

/// Required fields for a user submission, in checking order.
pub const REQUIRED_FIELDS: [&str; 2] = ["age", "name"];

/// A parsed and validated user submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
}
