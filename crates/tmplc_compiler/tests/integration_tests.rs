//! Compiler integration tests.
//!
//! End-to-end tests for template validation: build -> validate -> diagnose.

use tmplc_ast::{Statement, Template, TemplateBuilder};
use tmplc_compiler::{Compiler, TemplateUnit};
use tmplc_core::{SourceLocation, TemplateArena};
use tmplc_diagnostics::LocationFormatter;
use tmplc_options::{parse_options, CompileOptions};

/// `<Foo as |foo|>{{foo bar}}</Foo>`, with the mustache at line 1, column 14.
fn shadowed_helper<'a>(b: &TemplateBuilder<'a>) -> Template<'a> {
    b.template(vec![b
        .element("Foo")
        .block_params(&["foo"])
        .child(b.at_coords(1, 14, 1, 25).mustache(b.path("foo"), vec![b.path("bar")], b.hash(vec![])))
        .build()])
}

/// `<Foo as |foo|>{{foo}}</Foo>`
fn value_read<'a>(b: &TemplateBuilder<'a>) -> Template<'a> {
    b.template(vec![b
        .element("Foo")
        .block_params(&["foo"])
        .child(b.mustache(b.path("foo"), vec![], b.hash(vec![])))
        .build()])
}

/// `<Foo as |x|><div {{x}}></div></Foo>`, with the modifier at `line`.
fn shadowed_modifier<'a>(b: &TemplateBuilder<'a>, line: u32) -> Template<'a> {
    let div: Statement<'a> = b
        .element("div")
        .modifier(b.at_coords(line, 5, line, 10).modifier(b.path("x"), vec![], b.hash(vec![])))
        .build();
    b.template(vec![b.element("Foo").block_params(&["x"]).child(div).build()])
}

// ============================================================================
// Single templates
// ============================================================================

#[test]
fn test_validate_clean_template() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = value_read(&b);
    let compiler = Compiler::new();
    assert!(compiler.validate(&template, &CompileOptions::new("app/templates/index")).is_ok());
}

#[test]
fn test_validate_rejects_shadowed_helper() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = shadowed_helper(&b);
    let compiler = Compiler::new();
    let err = compiler
        .validate(&template, &CompileOptions::new("app/templates/index"))
        .unwrap_err();
    assert_eq!(err.name, "foo");
    assert!(err.to_string().ends_with("('app/templates/index' @ L1:C14)"));
}

#[test]
fn test_strict_mode_from_json_options() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = shadowed_helper(&b);
    let options = parse_options(r#"{ "moduleName": "app/templates/index", "strictMode": true }"#).unwrap();
    assert!(Compiler::new().validate(&template, &options).is_ok());
}

#[test]
fn test_diagnose_reports_one_error() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = shadowed_helper(&b);
    let diagnostics = Compiler::new().diagnose(&template, &CompileOptions::new("app/templates/index"));
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    let display = diagnostics.diagnostics()[0].to_string();
    assert!(display.starts_with("app/templates/index(L1:C14): error TPL4001: Cannot invoke the `foo` helper"));
}

#[test]
fn test_diagnose_clean_template_is_empty() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = value_read(&b);
    assert!(Compiler::default().diagnose(&template, &CompileOptions::default()).is_empty());
}

#[test]
fn test_custom_location_formatter() {
    struct LineOnly;

    impl LocationFormatter for LineOnly {
        fn format(&self, module_name: Option<&str>, loc: &SourceLocation) -> String {
            format!("[{}:{}]", module_name.unwrap_or("?"), loc.start.line)
        }
    }

    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let template = shadowed_helper(&b);
    let err = Compiler::with_formatter(LineOnly)
        .validate(&template, &CompileOptions::default())
        .unwrap_err();
    assert_eq!(err.location, "[?:1]");
    assert!(err.to_string().ends_with("conflict. [?:1]"));
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_validate_all_preserves_input_order() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let clean = value_read(&b);
    let helper = shadowed_helper(&b);
    let modifier = shadowed_modifier(&b, 3);

    let units = vec![
        TemplateUnit::new(CompileOptions::new("a"), &clean),
        TemplateUnit::new(CompileOptions::new("b"), &helper),
        TemplateUnit::new(CompileOptions::new("c"), &modifier),
        TemplateUnit::new(CompileOptions::new("d").strict(true), &helper),
    ];
    let results = Compiler::new().validate_all(&units);
    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().module_name.as_deref(), Some("b"));
    assert_eq!(results[2].as_ref().unwrap_err().name, "x");
    assert!(results[3].is_ok());
}

#[test]
fn test_diagnose_all_sorted() {
    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let late = shadowed_modifier(&b, 9);
    let early = shadowed_modifier(&b, 2);
    let helper = shadowed_helper(&b);

    let units = vec![
        TemplateUnit::new(CompileOptions::new("z"), &helper),
        TemplateUnit::new(CompileOptions::new("m"), &late),
        TemplateUnit::new(CompileOptions::new("m"), &early),
    ];
    let diagnostics = Compiler::new().diagnose_all(&units);
    let order: Vec<(Option<&str>, Option<u32>)> = diagnostics
        .diagnostics()
        .iter()
        .map(|d| (d.module_name.as_deref(), d.loc.map(|l| l.start.line)))
        .collect();
    assert_eq!(order, vec![(Some("m"), Some(2)), (Some("m"), Some(9)), (Some("z"), Some(1))]);
}

#[test]
fn test_validate_all_empty_batch() {
    assert!(Compiler::new().validate_all(&[]).is_empty());
}
