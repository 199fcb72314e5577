//! tmplc_compiler: Compiler orchestration.
//!
//! Runs the validation passes over parsed templates before code generation,
//! either one template at a time or for a whole batch in parallel.

use rayon::prelude::*;
use tmplc_ast::node::Template;
use tmplc_checker::{check_shadowed_invocations, PassEnvironment, ShadowedInvocationConflict};
use tmplc_diagnostics::{DiagnosticCollection, LocationFormatter, ModuleLocationDisplay};
use tmplc_options::CompileOptions;
use tracing::{debug, info};

/// One template of a batch, with its own options.
#[derive(Debug)]
pub struct TemplateUnit<'a> {
    pub options: CompileOptions,
    pub template: &'a Template<'a>,
}

impl<'a> TemplateUnit<'a> {
    pub fn new(options: CompileOptions, template: &'a Template<'a>) -> Self {
        Self { options, template }
    }
}

/// Validates templates before code generation.
pub struct Compiler {
    /// Renders locations in conflict messages.
    locations: Box<dyn LocationFormatter>,
}

impl Compiler {
    /// Create a compiler that renders locations as `('<module>' @ L1:C0)`.
    pub fn new() -> Self {
        Self::with_formatter(ModuleLocationDisplay)
    }

    /// Create a compiler with a custom location formatter.
    pub fn with_formatter(locations: impl LocationFormatter + 'static) -> Self {
        Self {
            locations: Box::new(locations),
        }
    }

    /// Validate a single template.
    ///
    /// An error means compilation of this template must stop.
    pub fn validate<'a>(
        &self,
        template: &'a Template<'a>,
        options: &CompileOptions,
    ) -> Result<(), ShadowedInvocationConflict> {
        let env = PassEnvironment::new(options, self.locations.as_ref());
        let result = check_shadowed_invocations(template, &env);
        if let Err(ref err) = result {
            debug!(module = ?options.module_name, name = %err.name, role = %err.role, "template rejected");
        }
        result
    }

    /// Validate a single template, reporting failures as diagnostics.
    pub fn diagnose<'a>(&self, template: &'a Template<'a>, options: &CompileOptions) -> DiagnosticCollection {
        let mut diagnostics = DiagnosticCollection::new();
        if let Err(err) = self.validate(template, options) {
            diagnostics.add(err.to_diagnostic());
        }
        diagnostics
    }

    /// Validate independent templates in parallel.
    ///
    /// Results are in the same order as `units`.
    pub fn validate_all(&self, units: &[TemplateUnit<'_>]) -> Vec<Result<(), ShadowedInvocationConflict>> {
        info!(templates = units.len(), "validating templates");
        units
            .par_iter()
            .map(|unit| self.validate(unit.template, &unit.options))
            .collect()
    }

    /// Validate independent templates in parallel, collecting every rejection
    /// as a diagnostic sorted by module and position.
    pub fn diagnose_all(&self, units: &[TemplateUnit<'_>]) -> DiagnosticCollection {
        let mut all_diagnostics = DiagnosticCollection::new();
        for err in self.validate_all(units).into_iter().filter_map(Result::err) {
            all_diagnostics.add(err.to_diagnostic());
        }
        all_diagnostics.sort();
        all_diagnostics
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
