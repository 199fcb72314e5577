//! tmplc_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Diagnostics carry a message from the catalogue in [`messages`], the module
//! they were reported against and the location of the offending node.

mod location;

pub use location::{LocationFormatter, ModuleLocationDisplay};

use std::fmt;
use tmplc_core::text::SourceLocation;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic error code.
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The module this diagnostic was reported against, if known.
    pub module_name: Option<String>,
    /// The location of the offending node, if any.
    pub loc: Option<SourceLocation>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic error code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic with module and location info.
    pub fn with_location(
        module_name: Option<String>,
        loc: SourceLocation,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            module_name,
            loc: Some(loc),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref module_name) = self.module_name {
            write!(f, "{}", module_name)?;
            if let Some(loc) = self.loc.filter(|l| !l.is_synthetic()) {
                write!(f, "({})", loc.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} TPL{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during compilation.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by module and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.module_name
                .cmp(&b.module_name)
                .then_with(|| a.loc.map(|l| l.start).cmp(&b.loc.map(|l| l.start)))
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
    }

    // ========================================================================
    // Template validation errors (4000-4099)
    // ========================================================================
    pub const CANNOT_INVOKE_SHADOWED_0_1: DiagnosticMessage = diag!(4001, Error, "Cannot invoke the `{0}` {1} because it was shadowed by a local variable (i.e. a block param) with the same name. Please rename the local variable to resolve the conflict.");
}
