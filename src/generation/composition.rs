//! Decoder composition and response type synthesis
//!
//! Turns the ordered responses of one operation into five declarations:
//! the default-responses map, the generic responses type, the override-merging
//! decoder function and its zero-argument wrapper. The first 2xx response is the
//! "success" response whose type can be overridden by passing a bare decoder.

use crate::generation::decoders::{response_decoder_expr, DecoderStrategy};
use crate::generation::utils::{capitalize, to_union_of_literals, uncapitalize, with_generics};
use crate::generation::{ResponseSpec, VOID_PAYLOAD};

/// Name of the merged type map inside the generated decoder function
const TYPE_MAP_VAR: &str = "type";

/// Field whose presence marks a bare `io-ts` type passed as override
const DECODER_MARKER_FIELD: &str = "_A";

/// Identifiers derived from an operation id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderNames {
    pub responses_type: String,
    pub decoder: String,
    pub default_decoder: String,
    pub default_responses: String,
}

impl DecoderNames {
    pub fn for_operation(operation_id: &str) -> Self {
        let lower = uncapitalize(operation_id);
        Self {
            responses_type: format!("{}ResponsesT", capitalize(operation_id)),
            decoder: format!("{lower}Decoder"),
            default_decoder: format!("{lower}DefaultDecoder"),
            default_responses: format!("{lower}DefaultResponses"),
        }
    }
}

/// The generated declarations for one operation, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderBlock {
    pub names: DecoderNames,
    pub success_status: String,
    pub default_responses: String,
    pub responses_type: String,
    pub decoder_function: String,
    pub default_decoder: String,
}

impl DecoderBlock {
    pub fn render(&self) -> String {
        [
            self.default_responses.as_str(),
            self.responses_type.as_str(),
            self.decoder_function.as_str(),
            self.default_decoder.as_str(),
        ]
        .join("\n\n")
    }
}

fn decoded_param(status: &str) -> String {
    format!("A{status}")
}

fn encoded_param(status: &str) -> String {
    format!("C{status}")
}

/// `A200 = Thing, C200 = Thing, ...` in response order
fn type_params_with_defaults(responses: &[ResponseSpec]) -> Vec<String> {
    responses
        .iter()
        .flat_map(|r| {
            let status = r.status_code.as_str();
            [
                format!("{} = {}", decoded_param(status), r.payload_type),
                format!("{} = {}", encoded_param(status), r.payload_type),
            ]
        })
        .collect()
}

fn type_param_names(responses: &[ResponseSpec]) -> Vec<String> {
    responses
        .iter()
        .flat_map(|r| [decoded_param(&r.status_code), encoded_param(&r.status_code)])
        .collect()
}

fn io_type(status: &str) -> String {
    with_generics("t.Type", &[decoded_param(status), encoded_param(status)])
}

fn decoded_response_type(response: &ResponseSpec) -> String {
    let headers = to_union_of_literals(&response.header_names);
    with_generics(
        "r.IResponseType",
        &[
            response.status_code.clone(),
            decoded_param(&response.status_code),
            headers,
        ],
    )
}

fn render_default_responses(names: &DecoderNames, responses: &[ResponseSpec]) -> String {
    let entries = responses
        .iter()
        .map(|r| {
            let type_ref = if r.payload_type == VOID_PAYLOAD {
                "t.undefined"
            } else {
                r.payload_type.as_str()
            };
            format!("  {}: {}", r.status_code, type_ref)
        })
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "export const {} = {{\n{}\n}};",
        names.default_responses, entries
    )
}

fn render_responses_type(names: &DecoderNames, responses: &[ResponseSpec]) -> String {
    let fields = responses
        .iter()
        .map(|r| format!("  {}: {};", r.status_code, io_type(&r.status_code)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "export type {} = {{\n{}\n}};",
        with_generics(&names.responses_type, &type_params_with_defaults(responses)),
        fields
    )
}

/// Folds decoder bindings left to right: `compose(compose(d1, d2), d3)`
fn compose_bindings<'a>(bindings: impl IntoIterator<Item = &'a str>) -> Option<String> {
    bindings.into_iter().fold(None, |acc, next| {
        Some(match acc {
            None => next.to_string(),
            Some(prev) => format!("r.composeResponseDecoders({prev}, {next})"),
        })
    })
}

fn render_binding(response: &ResponseSpec) -> (String, String) {
    let name = format!("d{}", response.status_code);
    let expr = response_decoder_expr(response, TYPE_MAP_VAR);
    let code = match DecoderStrategy::for_response(response) {
        DecoderStrategy::BasicError => format!("  const {name} = {expr};"),
        DecoderStrategy::RuntimeSelected => {
            let target = with_generics("r.ResponseDecoder", &[decoded_response_type(response)]);
            let indented = expr.replace('\n', "\n  ");
            format!("  const {name} = ({indented}) as {target};")
        }
    };
    (name, code)
}

fn render_decoder_function(
    names: &DecoderNames,
    responses: &[ResponseSpec],
    success: &ResponseSpec,
) -> String {
    let param_names = type_param_names(responses);
    let responses_type_applied = with_generics(&names.responses_type, &param_names);
    let success_type = io_type(&success.status_code);
    let signature = with_generics(&names.decoder, &type_params_with_defaults(responses));
    let return_union = responses
        .iter()
        .map(decoded_response_type)
        .collect::<Vec<_>>()
        .join(" | ");
    let return_type = with_generics("r.ResponseDecoder", &[return_union]);

    let (binding_names, binding_code): (Vec<String>, Vec<String>) =
        responses.iter().map(render_binding).unzip();
    let composed = compose_bindings(binding_names.iter().map(String::as_str))
        .map(|c| format!("\n\n  return {c};"))
        .unwrap_or_default();

    format!(
        "export function {signature}(\n  overrideTypes:\n    | Partial<{responses_type_applied}>\n    | {success_type}\n    | undefined = {{}}\n): {return_type} {{\n  \
         const isDecoder = (d: any): d is {success_type} =>\n    typeof d[\"{marker}\"] !== \"undefined\";\n\n  \
         const {type_var} = {{\n    ...(({defaults} as unknown) as {responses_type_applied}),\n    \
         ...(isDecoder(overrideTypes) ? {{ {success_status}: overrideTypes }} : overrideTypes)\n  }};\n\n\
         {bindings}{composed}\n}}",
        marker = DECODER_MARKER_FIELD,
        type_var = TYPE_MAP_VAR,
        defaults = names.default_responses,
        success_status = success.status_code,
        bindings = binding_code.join("\n"),
    )
}

/// Synthesizes the decoder declarations for an operation.
///
/// Returns `None` when no response has a 3-character status starting with `2`.
pub fn synthesize_decoders(operation_id: &str, responses: &[ResponseSpec]) -> Option<DecoderBlock> {
    let success = responses.iter().find(|r| r.is_success())?;
    let names = DecoderNames::for_operation(operation_id);

    let default_responses = render_default_responses(&names, responses);
    let responses_type = render_responses_type(&names, responses);
    let decoder_function = render_decoder_function(&names, responses, success);
    let default_decoder = format!(
        "export const {} = () => {}();",
        names.default_decoder, names.decoder
    );

    Some(DecoderBlock {
        success_status: success.status_code.clone(),
        names,
        default_responses,
        responses_type,
        decoder_function,
        default_decoder,
    })
}

/// Renders the decoder block text, empty when the operation has no success response
pub fn render_decoder_code(operation_id: &str, responses: &[ResponseSpec]) -> String {
    match synthesize_decoders(operation_id, responses) {
        Some(block) => block.render(),
        None => {
            tracing::debug!(
                operation_id = %operation_id,
                "No 2xx response found, skipping decoder generation"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn get_thing_responses() -> Vec<ResponseSpec> {
        vec![
            ResponseSpec::new("200", "Thing", &[]),
            ResponseSpec::new("404", "undefined", &[]),
        ]
    }

    #[test]
    fn test_names_derived_from_operation_id() {
        let names = DecoderNames::for_operation("getThing");
        assert_eq!(names.responses_type, "GetThingResponsesT");
        assert_eq!(names.decoder, "getThingDecoder");
        assert_eq!(names.default_decoder, "getThingDefaultDecoder");
        assert_eq!(names.default_responses, "getThingDefaultResponses");
    }

    #[test]
    fn test_no_success_response_yields_empty_block() {
        let responses = vec![ResponseSpec::new("500", "Error", &[])];
        assert!(synthesize_decoders("getThing", &responses).is_none());
        assert_eq!(render_decoder_code("getThing", &responses), "");
        assert_eq!(render_decoder_code("getThing", &[]), "");
    }

    #[test]
    fn test_long_2xx_status_is_not_success() {
        let responses = vec![
            ResponseSpec::new("2000", "Thing", &[]),
            ResponseSpec::new("404", "undefined", &[]),
        ];
        assert_eq!(render_decoder_code("getThing", &responses), "");
    }

    #[test]
    fn test_default_responses_map() {
        let block = synthesize_decoders("getThing", &get_thing_responses()).unwrap();
        assert_eq!(
            block.default_responses,
            "export const getThingDefaultResponses = {\n  200: Thing,\n  404: t.undefined\n};"
        );
    }

    #[test]
    fn test_responses_type_defaults_to_declared_types() {
        let block = synthesize_decoders("getThing", &get_thing_responses()).unwrap();
        assert_eq!(
            block.responses_type,
            "export type GetThingResponsesT<A200 = Thing, C200 = Thing, A404 = undefined, C404 = undefined> = {\n  \
             200: t.Type<A200, C200>;\n  \
             404: t.Type<A404, C404>;\n};"
        );
    }

    #[test]
    fn test_first_success_in_input_order_gets_override_shortcut() {
        let responses = vec![
            ResponseSpec::new("404", "undefined", &[]),
            ResponseSpec::new("201", "Created", &[]),
            ResponseSpec::new("200", "Thing", &[]),
        ];
        let block = synthesize_decoders("putThing", &responses).unwrap();
        assert_eq!(block.success_status, "201");
        assert!(block
            .decoder_function
            .contains("isDecoder(overrideTypes) ? { 201: overrideTypes } : overrideTypes"));
        assert!(block
            .decoder_function
            .contains("const isDecoder = (d: any): d is t.Type<A201, C201> =>"));
    }

    #[test]
    fn test_decoder_function_merges_and_composes_in_order() {
        let responses = vec![
            ResponseSpec::new("200", "Thing", &[]),
            ResponseSpec::new("404", "undefined", &[]),
            ResponseSpec::new("500", "Error", &[]),
        ];
        let block = synthesize_decoders("getThing", &responses).unwrap();
        let f = &block.decoder_function;

        assert!(f.starts_with(
            "export function getThingDecoder<A200 = Thing, C200 = Thing, A404 = undefined, C404 = undefined, A500 = Error, C500 = Error>("
        ));
        assert!(f.contains("| Partial<GetThingResponsesT<A200, C200, A404, C404, A500, C500>>"));
        assert!(f.contains("typeof d[\"_A\"] !== \"undefined\""));
        assert!(f.contains(
            "...((getThingDefaultResponses as unknown) as GetThingResponsesT<A200, C200, A404, C404, A500, C500>),"
        ));
        assert!(f.contains("const d500 = r.basicErrorResponseDecoder<500>(500);"));
        assert!(f.contains(
            "return r.composeResponseDecoders(r.composeResponseDecoders(d200, d404), d500);"
        ));

        let d200 = f.find("const d200").unwrap();
        let d404 = f.find("const d404").unwrap();
        let d500 = f.find("const d500").unwrap();
        assert!(d200 < d404 && d404 < d500);
    }

    #[test]
    fn test_single_response_returns_binding_directly() {
        let responses = vec![ResponseSpec::new("204", "undefined", &[])];
        let block = synthesize_decoders("deleteThing", &responses).unwrap();
        assert!(block.decoder_function.contains("return d204;"));
        assert!(!block.decoder_function.contains("composeResponseDecoders"));
    }

    #[test]
    fn test_compose_bindings_fold() {
        assert_eq!(compose_bindings(Vec::<&str>::new()), None);
        assert_eq!(compose_bindings(["d200"]).as_deref(), Some("d200"));
        assert_eq!(
            compose_bindings(["d200", "d404", "d500"]).as_deref(),
            Some("r.composeResponseDecoders(r.composeResponseDecoders(d200, d404), d500)")
        );
    }

    #[test]
    fn test_return_type_carries_headers() {
        let responses = vec![ResponseSpec::new("201", "Thing", &["Location"])];
        let block = synthesize_decoders("createThing", &responses).unwrap();
        assert!(block.decoder_function.contains(
            "): r.ResponseDecoder<r.IResponseType<201, A201, \"Location\">> {"
        ));
    }

    #[test]
    fn test_default_decoder_wrapper() {
        let block = synthesize_decoders("getThing", &get_thing_responses()).unwrap();
        assert_eq!(
            block.default_decoder,
            "export const getThingDefaultDecoder = () => getThingDecoder();"
        );
        assert!(block.render().ends_with(&block.default_decoder));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = render_decoder_code("getThing", &get_thing_responses());
        let second = render_decoder_code("getThing", &get_thing_responses());
        assert_eq!(first, second);
    }
}
