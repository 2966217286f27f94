//! Infrastructure layer - concrete implementations of domain ports

pub mod formatting;
pub mod operations;
pub mod output;
pub mod shell;
pub mod templates;

pub use formatting::*;
pub use operations::*;
pub use output::*;
pub use shell::*;
pub use templates::*;
