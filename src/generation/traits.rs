//! Port interfaces for the generation domain

use crate::generation::{GenerationError, OperationInfo, RenderContext};
use async_trait::async_trait;

/// Loads operation descriptions produced by an upstream parser
#[async_trait]
pub trait OperationLoader: Send + Sync {
    /// Load the ordered operation list; `None` entries stand for absent operations
    async fn load(&self, source: &str) -> Result<Vec<Option<OperationInfo>>, GenerationError>;
}

/// Lays out the final module file around the assembled code
#[async_trait]
pub trait ModuleRenderer: Send + Sync {
    async fn render(&self, context: &RenderContext) -> Result<String, GenerationError>;
}

/// Pretty-prints generated text
#[async_trait]
pub trait CodeFormatter: Send + Sync {
    async fn format(&self, code: String) -> Result<String, GenerationError>;
}
