//! Formatting of generated code
//!
//! The generator never validates its own output. A configured formatter such as
//! `prettier --parser typescript` doubles as the syntax check: a non-zero exit
//! fails the whole generation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::generation::{CodeFormatter, GenerationError};
use crate::infrastructure::shell::{CommandExecutor, ShellCommandExecutor};

/// Returns the code unchanged
pub struct PassthroughFormatter;

impl PassthroughFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PassthroughFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeFormatter for PassthroughFormatter {
    async fn format(&self, code: String) -> Result<String, GenerationError> {
        Ok(code)
    }
}

/// Pipes the code through an external command and keeps its stdout
pub struct CommandFormatter {
    executor: Arc<dyn CommandExecutor>,
    command: String,
    working_dir: PathBuf,
}

impl CommandFormatter {
    pub fn new(executor: Arc<dyn CommandExecutor>, command: impl Into<String>) -> Self {
        Self {
            executor,
            command: command.into(),
            working_dir: PathBuf::from("."),
        }
    }

    pub fn with_working_dir(mut self, working_dir: &Path) -> Self {
        self.working_dir = working_dir.to_path_buf();
        self
    }
}

#[async_trait]
impl CodeFormatter for CommandFormatter {
    async fn format(&self, code: String) -> Result<String, GenerationError> {
        tracing::info!(command = %self.command, "Formatting generated code");

        let result = self
            .executor
            .execute(&self.command, &self.working_dir, Some(&code))
            .await?;

        if !result.is_success() {
            tracing::error!(
                command = %self.command,
                exit_code = result.exit_code,
                stderr = %result.stderr,
                "Formatter command failed"
            );
            return Err(GenerationError::FormattingError(format!(
                "'{}' exited with code {}: {}",
                self.command,
                result.exit_code,
                result.stderr.trim()
            )));
        }

        Ok(result.stdout)
    }
}

/// Picks the formatter for an optional command
pub fn select_formatter(command: Option<&str>) -> Arc<dyn CodeFormatter> {
    match command {
        Some(cmd) if !cmd.trim().is_empty() => Arc::new(CommandFormatter::new(
            Arc::new(ShellCommandExecutor::new()),
            cmd,
        )),
        _ => Arc::new(PassthroughFormatter::new()),
    }
}
