use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lispc::{CompileOptions, CWriter, Parser, tokenize, transform};

/// A wide program of mixed forms and a single deeply nested one.
fn workloads() -> Vec<(&'static str, String)> {
    let forms = [
        "(+ ident (/ 3 2))",
        "(defvar x (+ ident (* 50 100)))",
        "(if (= 10 10) (/ (* 5 2) 10) 20)",
        "(max (+ 1 2) (min 3 4))",
    ];
    let wide = forms.iter().cycle().take(2_000).copied().collect::<Vec<_>>().join("\n");
    let deep = format!("{}1{}", "(+ 2 ".repeat(200), ")".repeat(200));
    vec![("wide", wide), ("deep", deep)]
}

fn bench_pipeline(c: &mut Criterion) {
    let options = CompileOptions::default();

    for (label, source) in workloads() {
        let tokens = tokenize(&source).expect("tokenize");
        let ast = Parser::new(&tokens).parse_program().expect("parse");
        let target = transform(&ast);

        c.bench_function(&format!("tokenize_{label}"), |b| {
            b.iter(|| black_box(tokenize(black_box(&source)).expect("tokenize")))
        });

        c.bench_function(&format!("parse_{label}"), |b| {
            b.iter(|| black_box(Parser::new(black_box(&tokens)).parse_program().expect("parse")))
        });

        c.bench_function(&format!("transform_{label}"), |b| {
            b.iter(|| black_box(transform(black_box(&ast))))
        });

        c.bench_function(&format!("emit_{label}"), |b| {
            b.iter(|| black_box(CWriter::emit(black_box(&target)).expect("emit")))
        });

        c.bench_function(&format!("compile_{label}"), |b| {
            b.iter(|| black_box(lispc::compile(black_box(&source), &options).expect("compile")))
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
