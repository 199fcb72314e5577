//! The per-compilation environment handed to validation passes.

use std::fmt;
use tmplc_diagnostics::LocationFormatter;
use tmplc_options::CompileOptions;

/// What a pass knows about the template it is checking.
#[derive(Clone, Copy)]
pub struct PassEnvironment<'e> {
    /// Qualifies diagnostic locations.
    pub module_name: Option<&'e str>,
    /// Disables passes that only guard against implicit invocation.
    pub strict_mode: bool,
    /// Renders node locations into diagnostic messages.
    pub locations: &'e dyn LocationFormatter,
}

impl<'e> PassEnvironment<'e> {
    pub fn new(options: &'e CompileOptions, locations: &'e dyn LocationFormatter) -> Self {
        Self {
            module_name: options.module_name.as_deref(),
            strict_mode: options.strict_mode,
            locations,
        }
    }
}

impl fmt::Debug for PassEnvironment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassEnvironment")
            .field("module_name", &self.module_name)
            .field("strict_mode", &self.strict_mode)
            .finish_non_exhaustive()
    }
}
