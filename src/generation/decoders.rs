//! Per-response decoder expressions
//!
//! Each response of an operation becomes one decoder expression in the generated
//! code. The basic error shape is decoded by a dedicated runtime constructor;
//! everything else is resolved at the generated code's own runtime, because the
//! type bound to a status may be overridden by the caller of the decoder.

use crate::generation::ResponseSpec;
use crate::generation::utils::{to_union_of_literals, with_generics};

/// How a single response gets decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderStrategy {
    /// `r.basicErrorResponseDecoder`, no runtime type inspection
    BasicError,
    /// Runtime choice between the constant `undefined` decoder and the `io-ts` decoder
    RuntimeSelected,
}

impl DecoderStrategy {
    pub fn for_response(response: &ResponseSpec) -> Self {
        if response.is_basic_error() {
            DecoderStrategy::BasicError
        } else {
            DecoderStrategy::RuntimeSelected
        }
    }
}

/// Expression reading the type bound to `status` from the live type map
pub fn type_lookup(type_var: &str, status: &str) -> String {
    format!("{type_var}[\"{status}\"]")
}

/// Builds the decoder expression for one response.
///
/// `type_var` names the variable holding the merged default and override types.
pub fn response_decoder_expr(response: &ResponseSpec, type_var: &str) -> String {
    let status = response.status_code.as_str();
    match DecoderStrategy::for_response(response) {
        DecoderStrategy::BasicError => {
            format!(
                "{}({status})",
                with_generics("r.basicErrorResponseDecoder", &[status])
            )
        }
        DecoderStrategy::RuntimeSelected => {
            let headers = to_union_of_literals(&response.header_names);
            let live = type_lookup(type_var, status);
            let constant = with_generics(
                "r.constantResponseDecoder",
                &["undefined", status, headers.as_str()],
            );
            let decoded = format!("(typeof {live})[\"_A\"]");
            let encoded = format!("(typeof {live})[\"_O\"]");
            let io = with_generics(
                "r.ioResponseDecoder",
                &[status, decoded.as_str(), encoded.as_str(), headers.as_str()],
            );
            format!(
                "{live}.name === \"undefined\"\n    ? {constant}({status}, undefined)\n    : {io}({status}, {live})"
            )
        }
    }
}
