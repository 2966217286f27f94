//! File-based operation loader
//!
//! Reads a JSON or YAML document listing the operations to generate.

use async_trait::async_trait;
use tokio::fs;

use super::parse_operations;
use crate::generation::{GenerationError, OperationInfo, OperationLoader};

/// Loads operation descriptions from local files
pub struct FileOperationLoader;

impl FileOperationLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileOperationLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperationLoader for FileOperationLoader {
    async fn load(&self, source: &str) -> Result<Vec<Option<OperationInfo>>, GenerationError> {
        tracing::debug!("FileOperationLoader: Loading from source: {source}");

        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        // Parse content as JSON or YAML
        let value: serde_json::Value = if source.ends_with(".json") {
            serde_json::from_str(&content).map_err(GenerationError::SerializationError)?
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(&content)
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))?
        } else {
            // Try JSON first, then YAML
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| {
                    GenerationError::LoadError(format!("Failed to parse operations file: {e}"))
                })?
        };

        let operations = parse_operations(value)?;
        tracing::info!(
            source = %source,
            operations = operations.len(),
            "Loaded operation descriptions"
        );
        Ok(operations)
    }
}
