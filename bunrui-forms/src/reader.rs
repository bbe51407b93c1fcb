//! Reading user records from submitted JSON

use crate::record::{UserRecord, REQUIRED_FIELDS};
use bunrui_core::{BoxError, Fault};
use serde_json::Value;

/// Parse a submitted JSON payload into a [`UserRecord`].
///
/// Malformed JSON propagates as the raw `serde_json` error, which stays
/// outside the fault taxonomy (the syntax class). A required field that
/// is absent or `null` becomes a missing-property fault; fields present
/// with the wrong shape become validation faults.
pub fn read_user(json: &str) -> Result<UserRecord, BoxError> {
    let value: Value = serde_json::from_str(json)?;

    for field in REQUIRED_FIELDS {
        if matches!(value.get(field), None | Some(Value::Null)) {
            return Err(Fault::missing_property(field).into());
        }
    }

    let record = serde_json::from_value(value)
        .map_err(|err| Fault::validation(format!("malformed user record: {err}")))?;
    Ok(record)
}
