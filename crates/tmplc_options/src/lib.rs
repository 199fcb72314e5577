//! tmplc_options: Per-template compile options.
//!
//! Options are usually handed over by the build tool as JSON, e.g.
//! `{ "moduleName": "app/templates/index", "strictMode": false }`.

use serde::{Deserialize, Serialize};

/// Options for compiling a single template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// The module the template belongs to. Only used to qualify diagnostics.
    pub module_name: Option<String>,
    /// Strict-mode templates cannot invoke helpers implicitly at all, which
    /// makes the block-param shadowing check unnecessary.
    pub strict_mode: bool,
}

impl CompileOptions {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: Some(module_name.into()),
            strict_mode: false,
        }
    }

    pub fn strict(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }
}

/// Parse compile options from a JSON string.
pub fn parse_options(content: &str) -> Result<CompileOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse compile options from a JSON file.
pub fn parse_options_file(path: &str) -> Result<CompileOptions, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let options = parse_options(&content)?;
    Ok(options)
}
