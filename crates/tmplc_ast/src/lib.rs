//! tmplc_ast: Abstract Syntax Tree definitions for templates.
//!
//! Defines the arena-allocated template AST, a fallible visitor with
//! exhaustive `walk_*` drivers, and builders for constructing trees.

pub mod builders;
pub mod node;
pub mod visitor;

// Re-export key types
pub use builders::TemplateBuilder;
pub use node::*;
pub use visitor::Visitor;
