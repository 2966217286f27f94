//! Assembles the code of a whole set of operations

use std::collections::BTreeSet;

use crate::generation::operation::render_operation;
use crate::generation::{AssemblyOptions, GenerationError, OperationInfo};

/// Code of an operation set, split into its import lines and operation blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSetCode {
    pub imports: Vec<String>,
    pub operations: Vec<String>,
    pub decoder_blocks: usize,
}

impl OperationSetCode {
    pub fn render(&self) -> String {
        let imports = self.imports.join("\n");
        let operations = self.operations.join("\n\n");
        match (imports.is_empty(), operations.is_empty()) {
            (true, _) => operations,
            (false, true) => imports,
            (false, false) => format!("{imports}\n\n{operations}"),
        }
    }
}

/// `import { Name } from "<definitions path>/Name";`
pub fn render_import(definitions_path: &str, type_name: &str) -> String {
    let base = definitions_path.trim_end_matches('/');
    format!("import {{ {type_name} }} from \"{base}/{type_name}\";")
}

/// Distinct type names referenced by the given operations, sorted
pub fn collect_imported_types<'a>(
    operations: impl IntoIterator<Item = &'a OperationInfo>,
) -> BTreeSet<String> {
    operations
        .into_iter()
        .flat_map(|op| op.imported_types.iter().cloned())
        .collect()
}

/// Renders every present operation and the imports they need.
///
/// Absent entries are skipped. The first invalid operation aborts the whole set.
pub fn render_operation_set(
    operations: &[Option<OperationInfo>],
    options: &AssemblyOptions,
) -> Result<OperationSetCode, GenerationError> {
    let present: Vec<&OperationInfo> = operations.iter().flatten().collect();

    let operations = present
        .iter()
        .map(|op| render_operation(op, options.generate_decoders))
        .collect::<Result<Vec<_>, _>>()?;

    let decoder_blocks = if options.generate_decoders {
        present
            .iter()
            .filter(|op| op.success_response().is_some())
            .count()
    } else {
        0
    };

    let imports = collect_imported_types(present.iter().copied())
        .iter()
        .map(|name| render_import(&options.definitions_path, name))
        .collect();

    tracing::debug!(
        operations = operations.len(),
        decoder_blocks,
        "Assembled operation set"
    );

    Ok(OperationSetCode {
        imports,
        operations,
        decoder_blocks,
    })
}
