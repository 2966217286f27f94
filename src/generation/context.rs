//! Generation context - the core aggregate for the generation domain

use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::generation::{GenerationError, OperationInfo};

/// Flags consumed by the operation assemblers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub generate_decoders: bool,
    /// Module path the referenced definitions are imported from
    pub definitions_path: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            generate_decoders: true,
            definitions_path: ".".to_string(),
        }
    }
}

/// Runtime modules imported by the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleImports {
    pub io_ts_module: String,
    pub requests_module: String,
}

impl Default for ModuleImports {
    fn default() -> Self {
        Self {
            io_ts_module: "io-ts".to_string(),
            requests_module: "@pagopa/ts-commons/lib/requests".to_string(),
        }
    }
}

/// Selects operations by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl OperationFilter {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Keeps included ids (all when the include list is empty), then drops excluded ids.
    /// Absent entries are kept so the assembler can skip them.
    pub fn apply(&self, operations: Vec<Option<OperationInfo>>) -> Vec<Option<OperationInfo>> {
        if self.is_empty() {
            return operations;
        }

        let present: HashSet<&str> = operations
            .iter()
            .flatten()
            .map(|op| op.operation_id.as_str())
            .collect();
        for id in &self.include {
            if !present.contains(id.as_str()) {
                tracing::warn!(operation_id = %id, "Included operation not found in input");
            }
        }

        let include: HashSet<&str> = self.include.iter().map(String::as_str).collect();
        let exclude: HashSet<&str> = self.exclude.iter().map(String::as_str).collect();
        operations
            .into_iter()
            .filter(|entry| match entry {
                None => true,
                Some(op) => {
                    let id = op.operation_id.as_str();
                    (include.is_empty() || include.contains(id)) && !exclude.contains(id)
                }
            })
            .collect()
    }
}

/// The main generation context that flows through the generation workflow
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub operations: Vec<Option<OperationInfo>>,
    pub options: AssemblyOptions,
    pub imports: ModuleImports,
    pub filter: OperationFilter,
    /// Path of the generated module, relative to the output directory
    pub output_path: PathBuf,
}

impl GenerationContext {
    /// Create a new generation context
    pub fn new(operations: Vec<Option<OperationInfo>>, output_path: PathBuf) -> Self {
        Self {
            operations,
            options: AssemblyOptions::default(),
            imports: ModuleImports::default(),
            filter: OperationFilter::default(),
            output_path,
        }
    }

    /// Validate the context has all required data
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(GenerationError::ValidationError(
                "Output path is required".to_string(),
            ));
        }
        if self.imports.io_ts_module.is_empty() || self.imports.requests_module.is_empty() {
            return Err(GenerationError::ValidationError(
                "Runtime module paths cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Render context used for template rendering
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    /// Create a new render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Check if a variable exists
    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}
