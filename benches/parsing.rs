use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynjson::{parse, to_string};

fn document(entries: usize) -> String {
    let mut text = String::from("{ ");
    for i in 0..entries {
        if i > 0 {
            text.push_str(" , ");
        }
        text.push_str(&format!(
            r#""user{i}":{{ "id":{i} , "score":{}.5 , "active":{} , "tags":["a","b","c"] }}"#,
            i * 3,
            i % 2 == 0,
        ));
    }
    text.push_str(" }");
    text
}

fn benchmark_parse_scalars(c: &mut Criterion) {
    c.bench_function("parse_number", |b| b.iter(|| parse(black_box("123.125"))));
    c.bench_function("parse_string", |b| {
        b.iter(|| parse(black_box(r#""a medium length string value""#)))
    });
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 50, 100, 500].iter() {
        let text = document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for size in [10, 50, 100, 500].iter() {
        let tree = parse(&document(*size)).value;

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = document(50);

    c.bench_function("roundtrip_document", |b| {
        b.iter(|| {
            let parsed = parse(black_box(&text));
            to_string(black_box(&parsed.value))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_scalars,
    benchmark_parse_document,
    benchmark_render_document,
    benchmark_roundtrip
);
criterion_main!(benches);
