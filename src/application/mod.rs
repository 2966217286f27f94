//! Application layer - orchestrates use cases and coordinates between domains

pub mod commands;
pub mod errors;
pub mod generate_request_types;
pub mod traits;

pub use commands::*;
pub use errors::*;
pub use generate_request_types::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use std::path::PathBuf;

    fn request() -> GenerateRequest {
        GenerateRequest {
            operations_source: "operations.yaml".to_string(),
            output_dir: PathBuf::from("generated"),
            output_file: PathBuf::from("requestTypes.ts"),
            config: GeneratorConfig::default(),
        }
    }

    #[test]
    fn test_generate_request_validation() {
        assert!(request().validate().is_ok());

        let mut invalid = request();
        invalid.operations_source = "  ".to_string();
        assert!(matches!(
            invalid.validate(),
            Err(ValidationError::MissingField(_))
        ));

        let mut invalid = request();
        invalid.output_file = PathBuf::new();
        assert!(matches!(
            invalid.validate(),
            Err(ValidationError::MissingField(_))
        ));

        let mut invalid = request();
        invalid.output_file = PathBuf::from("/abs/requestTypes.ts");
        assert!(matches!(
            invalid.validate(),
            Err(ValidationError::InvalidOutputFile(_))
        ));

        let mut invalid = request();
        invalid.config.io_ts_module = String::new();
        assert!(matches!(
            invalid.validate(),
            Err(ValidationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_application_error_types() {
        let error: ApplicationError = ValidationError::MissingField("output file".to_string()).into();
        assert_eq!(
            error.to_string(),
            "Validation error: Missing required field: output file"
        );

        let error: ApplicationError =
            crate::generation::GenerationError::FormattingError("bad".to_string()).into();
        assert!(matches!(error, ApplicationError::GenerationError(_)));
    }
}
