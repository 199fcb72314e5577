//! tmplc_core: Core utilities for the tmplc template compiler.
//!
//! Provides source locations and the arena used to allocate template ASTs.

pub mod arena;
pub mod text;

// Re-export commonly used types
pub use arena::TemplateArena;
pub use text::{SourceLocation, SourcePosition};
