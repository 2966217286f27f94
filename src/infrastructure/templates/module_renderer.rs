//! Tera-based module renderer

use async_trait::async_trait;
use std::path::Path;
use tera::Tera;

use crate::generation::{GenerationError, ModuleRenderer, RenderContext};

/// Layout used when no custom template is configured
pub const DEFAULT_MODULE_TEMPLATE: &str = include_str!("../../../templates/request_types.ts.tera");

const TEMPLATE_NAME: &str = "request_types.ts";

/// Variables every module template receives
const REQUIRED_VARIABLES: [&str; 4] = ["io_ts_module", "requests_module", "imports", "operations"];

/// Renders the generated module through a Tera template
pub struct TeraModuleRenderer {
    tera: Tera,
}

impl TeraModuleRenderer {
    /// Renderer using the embedded default layout
    pub fn new() -> Result<Self, GenerationError> {
        Self::from_source(DEFAULT_MODULE_TEMPLATE)
    }

    pub fn from_source(source: &str) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        // generated code must not be HTML-escaped
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;
        Ok(Self { tera })
    }

    /// Renderer using a custom layout read from disk
    pub async fn from_file(path: &Path) -> Result<Self, GenerationError> {
        tracing::debug!(path = %path.display(), "Loading custom module template");
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_source(&source)
    }
}

#[async_trait]
impl ModuleRenderer for TeraModuleRenderer {
    async fn render(&self, context: &RenderContext) -> Result<String, GenerationError> {
        if let Some(missing) = REQUIRED_VARIABLES
            .iter()
            .find(|key| !context.has_variable(key))
        {
            return Err(GenerationError::RenderError(format!(
                "Variable '{missing}' not found in context"
            )));
        }

        self.tera
            .render(TEMPLATE_NAME, &context.to_tera_context())
            .map_err(|e| GenerationError::RenderError(format!("Failed to render template: {e}")))
    }
}
