//! Benchmark harness for template validation.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p tmplc_compiler

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tmplc_ast::{Statement, Template, TemplateBuilder};
use tmplc_compiler::{Compiler, TemplateUnit};
use tmplc_core::TemplateArena;
use tmplc_options::CompileOptions;

/// Generate `depth` nested `<Item as |itemN|>` elements, each containing
/// `width` helper calls, modifiers and value reads that never conflict.
fn generate_template<'a>(b: &TemplateBuilder<'a>, depth: usize, width: usize) -> Template<'a> {
    let mut body: Vec<Statement<'a>> = Vec::new();
    for level in (0..depth).rev() {
        let param = format!("item{level}");
        let mut children = std::mem::take(&mut body);
        for i in 0..width {
            children.push(b.mustache(
                b.path(&format!("format{i}")),
                vec![b.path(&param), b.sub_expr(b.path("concat"), vec![b.string("x")], b.hash(vec![]))],
                b.hash(vec![("key", b.path(&format!("this.{param}")))]),
            ));
            children.push(b.mustache(b.path(&param), vec![], b.hash(vec![])));
            children.push(
                b.element("div")
                    .modifier(b.modifier(b.path("on"), vec![b.string("click")], b.hash(vec![])))
                    .build(),
            );
        }
        body.push(b.element("Item").block_params(&[param.as_str()]).children(children).build());
    }
    b.template(body)
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let compiler = Compiler::new();
    let options = CompileOptions::new("bench/template");

    for (depth, width) in [(4, 4), (16, 16), (64, 32)] {
        let arena = TemplateArena::new();
        let b = TemplateBuilder::new(&arena);
        let template = generate_template(&b, depth, width);
        group.bench_with_input(
            BenchmarkId::new("single", format!("{depth}x{width}")),
            &template,
            |bench, template| {
                bench.iter(|| compiler.validate(black_box(template), &options));
            },
        );
    }

    group.finish();
}

fn bench_validate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_all");
    let compiler = Compiler::new();

    let arena = TemplateArena::new();
    let b = TemplateBuilder::new(&arena);
    let templates: Vec<Template<'_>> = (0..64).map(|_| generate_template(&b, 16, 16)).collect();
    let units: Vec<TemplateUnit<'_>> = templates
        .iter()
        .enumerate()
        .map(|(i, template)| TemplateUnit::new(CompileOptions::new(format!("bench/template{i}")), template))
        .collect();

    group.bench_function("64_templates", |bench| {
        bench.iter(|| compiler.validate_all(black_box(&units)));
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_validate_all);
criterion_main!(benches);
