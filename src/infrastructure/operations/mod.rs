//! Operation description loading

pub mod file_loader;

pub use file_loader::*;

use serde_json::Value;

use crate::generation::{GenerationError, OperationInfo};

/// Converts a parsed JSON/YAML value into the ordered operation list.
///
/// Accepts a bare list or an object with an `operations` key.
pub fn parse_operations(value: Value) -> Result<Vec<Option<OperationInfo>>, GenerationError> {
    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut document) => document.remove("operations").ok_or_else(|| {
            GenerationError::LoadError(
                "Invalid operations document: missing `operations` key".to_string(),
            )
        })?,
        other => {
            return Err(GenerationError::LoadError(format!(
                "Invalid operations document: expected a list or an object, found {other}"
            )));
        }
    };

    serde_json::from_value(list)
        .map_err(|e| GenerationError::LoadError(format!("Invalid operations document: {e}")))
}
