//! respgen library
//!
//! Synthesizes TypeScript request-type declarations and composable `io-ts`
//! response decoders from a list of API operation descriptions.
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod generation;
pub mod infrastructure;

pub use config::GeneratorConfig;
pub use generation::{GenerationError, OperationInfo, ParameterInfo, ResponseSpec};
