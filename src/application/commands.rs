//! Request and response types for the application use cases

use serde::Serialize;
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::config::GeneratorConfig;

/// Request to generate a request-types module
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Location of the operation list handed to the loader
    pub operations_source: String,
    pub output_dir: PathBuf,
    /// File name of the generated module inside `output_dir`
    pub output_file: PathBuf,
    pub config: GeneratorConfig,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.operations_source.trim().is_empty() {
            return Err(ValidationError::MissingField(
                "operations source".to_string(),
            ));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingField("output file".to_string()));
        }
        if self.output_file.is_absolute() {
            return Err(ValidationError::InvalidOutputFile(format!(
                "{} must be relative to the output directory",
                self.output_file.display()
            )));
        }

        if self.config.io_ts_module.trim().is_empty() {
            return Err(ValidationError::InvalidConfiguration(
                "io_ts_module cannot be empty".to_string(),
            ));
        }
        if self.config.requests_module.trim().is_empty() {
            return Err(ValidationError::InvalidConfiguration(
                "requests_module cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Response from request-types generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub operations_rendered: usize,
    pub decoder_blocks: usize,
    pub output_path: PathBuf,
}
