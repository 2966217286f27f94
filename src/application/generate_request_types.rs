//! Use case for generating the request-types module

use std::sync::Arc;

use crate::application::{ApplicationError, GenerateRequest, GenerateResponse, OutputService};
use crate::generation::{GenerationContext, GenerationOrchestrator, OperationLoader};

/// Use case for generating request types and response decoders
pub struct GenerateRequestTypesUseCase {
    operation_loader: Arc<dyn OperationLoader>,
    generation_orchestrator: Arc<GenerationOrchestrator>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateRequestTypesUseCase {
    pub fn new(
        operation_loader: Arc<dyn OperationLoader>,
        generation_orchestrator: Arc<GenerationOrchestrator>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            operation_loader,
            generation_orchestrator,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load operations
        let operations = self
            .operation_loader
            .load(&request.operations_source)
            .await?;
        tracing::debug!(
            entries = operations.len(),
            absent = operations.iter().filter(|op| op.is_none()).count(),
            "Operations ready for generation"
        );

        // 3. Build generation context
        let mut context = GenerationContext::new(operations, request.output_file.clone());
        context.options = request.config.assembly_options();
        context.imports = request.config.module_imports();
        context.filter = request.config.operation_filter();

        // 4. Generate code
        let result = self.generation_orchestrator.generate(context).await?;

        // 5. Ensure output directory exists
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;

        // 6. Prepend output directory to artifact paths and write
        let mut output_artifacts = result.artifacts;
        for artifact in &mut output_artifacts {
            artifact.path = request.output_dir.join(&artifact.path);
        }

        self.output_service
            .write_artifacts(&output_artifacts)
            .await?;

        let output_path = request.output_dir.join(&request.output_file);
        tracing::info!(
            path = %output_path.display(),
            operations = result.operations_rendered,
            decoders = result.decoder_blocks,
            "Generated request types"
        );

        Ok(GenerateResponse {
            operations_rendered: result.operations_rendered,
            decoder_blocks: result.decoder_blocks,
            output_path,
        })
    }
}
