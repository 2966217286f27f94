//! Generation domain module - synthesizes request types and response decoders
//!
//! Leaf-first: `utils` provides naming helpers, `decoders` builds the decoder
//! expression of a single response, `composition` turns the ordered responses of
//! an operation into the decoder declarations, `operation` adds the request type,
//! and `operation_set` concatenates operations behind their deduplicated imports.

pub mod composition;
pub mod context;
pub mod decoders;
pub mod errors;
pub mod operation;
pub mod operation_set;
pub mod orchestrator;
pub mod rules;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
