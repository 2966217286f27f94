//! Generation orchestration - coordinates the generation workflow

use serde_json::json;
use std::sync::Arc;

use crate::generation::operation_set::render_operation_set;
use crate::generation::{
    Artifact, CodeFormatter, GenerationContext, GenerationError, GenerationResult,
    ModuleRenderer, RenderContext,
};

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    module_renderer: Arc<dyn ModuleRenderer>,
    formatter: Arc<dyn CodeFormatter>,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(module_renderer: Arc<dyn ModuleRenderer>, formatter: Arc<dyn CodeFormatter>) -> Self {
        Self {
            module_renderer,
            formatter,
        }
    }

    /// Execute the generation workflow
    pub async fn generate(
        &self,
        context: GenerationContext,
    ) -> Result<GenerationResult, GenerationError> {
        // 1. Validate context
        context.validate()?;

        // 2. Select operations
        let operations = context.filter.apply(context.operations);
        tracing::debug!(
            "Orchestrator starting generation with {} operations",
            operations.iter().flatten().count()
        );

        // 3. Assemble request types and decoders
        let code = render_operation_set(&operations, &context.options)?;

        // 4. Lay out the module
        let mut render_context = RenderContext::new();
        render_context.add_variable("io_ts_module", json!(context.imports.io_ts_module));
        render_context.add_variable("requests_module", json!(context.imports.requests_module));
        render_context.add_variable("imports", json!(code.imports));
        render_context.add_variable("operations", json!(code.operations));
        let rendered = self.module_renderer.render(&render_context).await?;

        // 5. Format
        let content = self.formatter.format(rendered).await?;

        Ok(GenerationResult {
            artifacts: vec![Artifact {
                path: context.output_path,
                content,
            }],
            operations_rendered: code.operations.len(),
            decoder_blocks: code.decoder_blocks,
        })
    }
}
