//! Business rules for the generation domain

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::generation::{GenerationError, OperationInfo};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid"));

/// Validates that an operation id can seed generated identifiers
pub fn validate_operation_id(operation_id: &str) -> Result<(), GenerationError> {
    if !IDENTIFIER_RE.is_match(operation_id) {
        return Err(GenerationError::InvalidOperationId(
            operation_id.to_string(),
        ));
    }
    Ok(())
}

/// Rejects operations that declare the same status code twice
pub fn validate_responses(op: &OperationInfo) -> Result<(), GenerationError> {
    let mut seen = HashSet::new();
    for response in &op.responses {
        if !seen.insert(response.status_code.as_str()) {
            return Err(GenerationError::DuplicateStatusCode {
                operation_id: op.operation_id.clone(),
                status_code: response.status_code.clone(),
            });
        }
        if response.status_code.chars().count() != 3 {
            tracing::warn!(
                operation_id = %op.operation_id,
                status_code = %response.status_code,
                "Status code is not 3 characters long and will never be treated as a success response"
            );
        }
    }
    Ok(())
}

/// Validates parameter names
pub fn validate_parameters(op: &OperationInfo) -> Result<(), GenerationError> {
    for param in &op.parameters {
        if param.property_name().is_empty() {
            return Err(GenerationError::ValidationError(format!(
                "Operation '{}' has a parameter with an empty name",
                op.operation_id
            )));
        }
    }
    Ok(())
}

/// Runs every rule against one operation
pub fn validate_operation(op: &OperationInfo) -> Result<(), GenerationError> {
    validate_operation_id(&op.operation_id)?;
    validate_parameters(op)?;
    validate_responses(op)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{HttpMethod, ParameterLocation, ResponseSpec};

    #[test]
    fn test_validate_operation_id() {
        assert!(validate_operation_id("getThing").is_ok());
        assert!(validate_operation_id("_private").is_ok());
        assert!(validate_operation_id("$ref2").is_ok());

        assert!(validate_operation_id("").is_err());
        assert!(validate_operation_id("2things").is_err());
        assert!(validate_operation_id("get-thing").is_err());
        assert!(validate_operation_id("get thing").is_err());
    }

    #[test]
    fn test_duplicate_status_is_rejected() {
        let op = OperationInfo::new(HttpMethod::Get, "getThing")
            .with_response(ResponseSpec::new("200", "Thing", &[]))
            .with_response(ResponseSpec::new("200", "Other", &[]));

        match validate_responses(&op).unwrap_err() {
            GenerationError::DuplicateStatusCode {
                operation_id,
                status_code,
            } => {
                assert_eq!(operation_id, "getThing");
                assert_eq!(status_code, "200");
            }
            other => panic!("Expected DuplicateStatusCode, got {other:?}"),
        }
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_odd_status_code_only_warns() {
        let op = OperationInfo::new(HttpMethod::Get, "getThing")
            .with_response(ResponseSpec::new("default", "Error", &[]));
        assert!(validate_responses(&op).is_ok());
        assert!(logs_contain("will never be treated as a success response"));
    }

    #[test]
    fn test_empty_parameter_name() {
        let op = OperationInfo::new(HttpMethod::Get, "getThing").with_parameter(
            "?",
            "string",
            ParameterLocation::Query,
        );
        assert!(validate_parameters(&op).is_err());
        assert!(validate_operation(&op).is_err());
    }

    #[test]
    fn test_validate_operation_ok() {
        let op = OperationInfo::new(HttpMethod::Post, "createThing")
            .with_parameter("body", "Thing", ParameterLocation::Body)
            .with_response(ResponseSpec::new("201", "Thing", &[]))
            .with_response(ResponseSpec::new("400", "Error", &[]));
        assert!(validate_operation(&op).is_ok());
    }
}
