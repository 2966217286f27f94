//! respgen CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use respgen::application::{GenerateRequest, GenerateRequestTypesUseCase};
use respgen::config::{ConfigOverrides, GeneratorConfig};
use respgen::generation::{GenerationOrchestrator, ModuleRenderer, OperationInfo, OperationLoader};
use respgen::infrastructure::{
    FileOperationLoader, FileSystemOutputService, TeraModuleRenderer, select_formatter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "respgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate request types and response decoders from an operation list
    Generate {
        /// Operation list (JSON or YAML)
        #[arg(long)]
        operations: PathBuf,
        /// Generated TypeScript module
        #[arg(long)]
        out: PathBuf,
        /// Generator config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit request types only
        #[arg(long)]
        no_decoders: bool,
        /// Command the generated code is piped through, e.g. "prettier --parser typescript"
        #[arg(long)]
        format_command: Option<String>,
        /// Custom module template (Tera)
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Show the operations of a list and which ones get a decoder block
    Inspect {
        /// Operation list (JSON or YAML)
        #[arg(long)]
        operations: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            operations,
            out,
            config,
            no_decoders,
            format_command,
            template,
        } => {
            let overrides = ConfigOverrides {
                no_decoders,
                format_command,
                template,
            };
            generate(&operations, &out, config.as_deref(), overrides).await?
        }
        Commands::Inspect { operations } => inspect(&operations).await?,
    }
    Ok(())
}

/// Splits `--out` into the output directory and the module file name
fn split_output_path(out: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let file_name = out
        .file_name()
        .with_context(|| format!("Output path '{}' has no file name", out.display()))?;
    let output_dir = match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((output_dir, PathBuf::from(file_name)))
}

async fn generate(
    operations: &Path,
    out: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => GeneratorConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    }
    .apply_overrides(overrides);

    let renderer: Arc<dyn ModuleRenderer> = match &config.template {
        Some(path) => Arc::new(
            TeraModuleRenderer::from_file(path)
                .await
                .with_context(|| format!("Failed to load template {}", path.display()))?,
        ),
        None => Arc::new(TeraModuleRenderer::new().context("Failed to load default template")?),
    };
    let formatter = select_formatter(config.format_command.as_deref());
    let orchestrator = Arc::new(GenerationOrchestrator::new(renderer, formatter));

    let use_case = GenerateRequestTypesUseCase::new(
        Arc::new(FileOperationLoader::new()),
        orchestrator,
        Arc::new(FileSystemOutputService::new()),
    );

    let (output_dir, output_file) = split_output_path(out)?;
    let request = GenerateRequest {
        operations_source: operations.to_string_lossy().into_owned(),
        output_dir,
        output_file,
        config,
    };

    let response = use_case
        .execute(request)
        .await
        .context("Failed to generate request types")?;

    info!(
        "Wrote {} operation(s), {} decoder block(s) to {}",
        response.operations_rendered,
        response.decoder_blocks,
        response.output_path.display()
    );
    Ok(())
}

fn describe_operation(op: &OperationInfo) -> String {
    let statuses = op
        .responses
        .iter()
        .map(|r| r.status_code.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let decoder = match op.success_response() {
        Some(success) => format!("decoder on {}", success.status_code),
        None => "no decoder block".to_string(),
    };
    format!(
        "{} {} [{}] {}",
        op.operation_id,
        op.method.to_string().to_uppercase(),
        statuses,
        decoder
    )
}

async fn inspect(operations: &Path) -> anyhow::Result<()> {
    let source = operations.to_string_lossy();
    let loaded = FileOperationLoader::new()
        .load(&source)
        .await
        .with_context(|| format!("Failed to load operations from {source}"))?;

    let mut absent = 0;
    for entry in &loaded {
        match entry {
            Some(op) => println!("{}", describe_operation(op)),
            None => absent += 1,
        }
    }
    if absent > 0 {
        println!("({absent} absent operation(s) skipped)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use respgen::generation::{HttpMethod, ResponseSpec};

    #[test]
    fn test_split_output_path() {
        let (dir, file) = split_output_path(Path::new("generated/requestTypes.ts")).unwrap();
        assert_eq!(dir, PathBuf::from("generated"));
        assert_eq!(file, PathBuf::from("requestTypes.ts"));

        let (dir, file) = split_output_path(Path::new("requestTypes.ts")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("requestTypes.ts"));

        assert!(split_output_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_describe_operation() {
        let op = OperationInfo::new(HttpMethod::Get, "getThing")
            .with_response(ResponseSpec::new("200", "Thing", &[]))
            .with_response(ResponseSpec::new("404", "undefined", &[]));
        assert_eq!(
            describe_operation(&op),
            "getThing GET [200, 404] decoder on 200"
        );

        let op = OperationInfo::new(HttpMethod::Delete, "dropThing")
            .with_response(ResponseSpec::new("500", "Error", &[]));
        assert_eq!(describe_operation(&op), "dropThing DELETE [500] no decoder block");
    }
}
