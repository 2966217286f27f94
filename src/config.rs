//! Generator configuration.
//!
//! Read from a TOML file; every key is optional. Command-line flags are applied
//! on top with [`GeneratorConfig::apply_overrides`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generation::{AssemblyOptions, ModuleImports, OperationFilter};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings controlling what gets generated and how the module is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Emit decoder blocks next to the request types.
    pub generate_decoders: bool,

    /// Module imported as `t`.
    pub io_ts_module: String,

    /// Module imported as `r`.
    pub requests_module: String,

    /// Directory the referenced definitions are imported from.
    pub definitions_path: String,

    /// Custom module template; the embedded layout is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Shell command the generated code is piped through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_command: Option<String>,

    pub include_operations: Vec<String>,
    pub exclude_operations: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let imports = ModuleImports::default();
        let options = AssemblyOptions::default();
        Self {
            generate_decoders: options.generate_decoders,
            io_ts_module: imports.io_ts_module,
            requests_module: imports.requests_module,
            definitions_path: options.definitions_path,
            template: None,
            format_command: None,
            include_operations: Vec::new(),
            exclude_operations: Vec::new(),
        }
    }
}

/// Values given on the command line. `None` leaves the file value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub no_decoders: bool,
    pub format_command: Option<String>,
    pub template: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from disk.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded generator config");
        Ok(config)
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.no_decoders {
            self.generate_decoders = false;
        }
        if let Some(command) = overrides.format_command {
            self.format_command = Some(command);
        }
        if let Some(template) = overrides.template {
            self.template = Some(template);
        }
        self
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            generate_decoders: self.generate_decoders,
            definitions_path: self.definitions_path.clone(),
        }
    }

    pub fn module_imports(&self) -> ModuleImports {
        ModuleImports {
            io_ts_module: self.io_ts_module.clone(),
            requests_module: self.requests_module.clone(),
        }
    }

    pub fn operation_filter(&self) -> OperationFilter {
        OperationFilter {
            include: self.include_operations.clone(),
            exclude: self.exclude_operations.clone(),
        }
    }
}
