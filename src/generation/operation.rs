//! Assembles the code block of a single operation

use crate::generation::composition::render_decoder_code;
use crate::generation::rules::validate_operation;
use crate::generation::utils::{capitalize, escape_ts_string, to_union_of_literals, with_generics};
use crate::generation::{GenerationError, OperationInfo, ParameterInfo, ResponseSpec};

/// Check if a property key must be quoted in an object type
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            .unwrap_or(false)
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn render_parameter(param: &ParameterInfo) -> String {
    if param.is_optional() {
        format!(
            "readonly \"{}\"?: {}",
            escape_ts_string(&param.property_name()),
            param.type_name
        )
    } else if needs_quoting(&param.name) {
        format!(
            "readonly \"{}\": {}",
            escape_ts_string(&param.name),
            param.type_name
        )
    } else {
        format!("readonly {}: {}", param.name, param.type_name)
    }
}

/// Object type with one property per parameter, `{}` when there are none
pub fn render_parameters_type(params: &[ParameterInfo]) -> String {
    if params.is_empty() {
        return "{}".to_string();
    }
    let props = params
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{{ {props} }}")
}

fn render_response_type(response: &ResponseSpec) -> String {
    with_generics(
        "r.IResponseType",
        &[
            response.status_code.clone(),
            response.payload_type.clone(),
            to_union_of_literals(&response.header_names),
        ],
    )
}

/// Union of every declared response, `never` when the operation declares none
pub fn render_responses_union(responses: &[ResponseSpec]) -> String {
    if responses.is_empty() {
        return "never".to_string();
    }
    responses
        .iter()
        .map(render_response_type)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Name of the request type declaration, e.g. `GetThingT`
pub fn request_type_name(operation_id: &str) -> String {
    format!("{}T", capitalize(operation_id))
}

/// The `r.I<Method>ApiRequestType<...>` declaration of an operation
pub fn render_request_type(op: &OperationInfo) -> String {
    let request_kind = format!("r.{}", op.method.request_type_name());
    let declaration = with_generics(
        &request_kind,
        &[
            render_parameters_type(&op.parameters),
            to_union_of_literals(&op.headers),
            "never".to_string(),
            render_responses_union(&op.responses),
        ],
    );
    let location = if op.path.is_empty() {
        String::new()
    } else {
        format!(" ({} {})", op.method.to_string().to_uppercase(), op.path)
    };
    format!(
        "/****************************************************************\n \
         * {operation_id}{location}\n \
         */\n\n\
         // Request type definition\nexport type {name} = {declaration};",
        operation_id = op.operation_id,
        name = request_type_name(&op.operation_id),
    )
}

/// Renders the request type and, when requested, the decoder block of one operation
pub fn render_operation(
    op: &OperationInfo,
    generate_decoders: bool,
) -> Result<String, GenerationError> {
    validate_operation(op)?;

    let request_type = render_request_type(op);
    if !generate_decoders {
        return Ok(request_type);
    }

    let decoders = render_decoder_code(&op.operation_id, &op.responses);
    if decoders.is_empty() {
        Ok(request_type)
    } else {
        Ok(format!("{request_type}\n\n{decoders}"))
    }
}
