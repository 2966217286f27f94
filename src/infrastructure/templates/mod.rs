//! Module layout templates

pub mod module_renderer;

pub use module_renderer::*;
