//! Rendering node locations for diagnostic messages.

use tmplc_core::text::SourceLocation;

/// Renders a node location, optionally qualified by the module it came from.
///
/// Implementations are shared between compilations running on different
/// threads, hence the `Send + Sync` bound.
pub trait LocationFormatter: Send + Sync {
    fn format(&self, module_name: Option<&str>, loc: &SourceLocation) -> String;
}

/// The default formatter: `('<module>' @ L<line>:C<column>)`.
///
/// Either half is dropped when unknown; when both are unknown the result is
/// the empty string. The result never has leading or trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleLocationDisplay;

impl LocationFormatter for ModuleLocationDisplay {
    fn format(&self, module_name: Option<&str>, loc: &SourceLocation) -> String {
        let mut info = String::new();
        if let Some(module_name) = module_name.filter(|m| !m.is_empty()) {
            info.push_str(&format!("'{}'", module_name));
        }
        if !loc.is_synthetic() {
            if !info.is_empty() {
                info.push_str(" @ ");
            }
            info.push_str(&loc.start.to_string());
        }
        if info.is_empty() {
            info
        } else {
            format!("({})", info)
        }
    }
}
