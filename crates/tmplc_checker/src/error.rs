//! Errors reported by the shadowing check.

use crate::env::PassEnvironment;
use std::fmt;
use tmplc_core::text::SourceLocation;
use tmplc_diagnostics::{format_message, messages, Diagnostic};

/// What an implicit invocation calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvocationRole {
    Helper,
    Modifier,
}

impl InvocationRole {
    pub fn as_str(self) -> &'static str {
        match self {
            InvocationRole::Helper => "helper",
            InvocationRole::Modifier => "modifier",
        }
    }
}

impl fmt::Display for InvocationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A helper or modifier invocation whose name is also a block param in scope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render_message(.name, .role, .location))]
pub struct ShadowedInvocationConflict {
    /// The shadowed name.
    pub name: String,
    pub role: InvocationRole,
    /// Location of the invocation node.
    pub loc: SourceLocation,
    pub module_name: Option<String>,
    /// `loc` as rendered by the environment's location formatter.
    pub location: String,
}

impl ShadowedInvocationConflict {
    pub fn new(name: &str, role: InvocationRole, loc: SourceLocation, env: &PassEnvironment<'_>) -> Self {
        Self {
            name: name.to_string(),
            role,
            loc,
            module_name: env.module_name.map(str::to_string),
            location: env.locations.format(env.module_name, &loc),
        }
    }

    /// The conflict as a located compiler diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::with_location(
            self.module_name.clone(),
            self.loc,
            &messages::CANNOT_INVOKE_SHADOWED_0_1,
            &[&self.name, self.role.as_str()],
        )
    }
}

impl miette::Diagnostic for ShadowedInvocationConflict {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("tmplc::shadowed_invocation"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "rename the block param `{}` so it no longer hides the {} of the same name",
            self.name, self.role
        )))
    }
}

fn render_message(name: &str, role: &InvocationRole, location: &str) -> String {
    let message = format_message(messages::CANNOT_INVOKE_SHADOWED_0_1.message, &[name, role.as_str()]);
    if location.is_empty() {
        message
    } else {
        format!("{} {}", message, location)
    }
}
