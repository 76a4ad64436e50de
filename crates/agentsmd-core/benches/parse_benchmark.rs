//! Benchmarks comparing AGENTS.md section parsing vs a full pulldown-cmark pass
//!
//! Run with: cargo bench -p agentsmd-core

use agentsmd_core::{generate, parse, validate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulldown_cmark::{Options, Parser as MdParser};

/// A realistic AGENTS.md file with every canonical section and a few extras.
const AGENTS_SAMPLE: &str = r#"# Payments Service

Handles card authorisation and settlement for the storefront.
Owned by the payments team.

## Project Context

The service exposes a gRPC API consumed by checkout and a batch job that
reconciles settlements nightly. Latency budgets are tight on the
authorisation path.

## Capabilities

- Read and modify code under `src/` and `tests/`
- Run the unit test suite and linters
- Draft migration scripts for review
- Update API documentation

## Constraints

- Never commit secrets or card data
- Do not change the public protobuf schema without approval
- Keep authorisation latency under 50ms p99

## Scope

- In scope: authorisation, capture, refunds
- Out of scope: fraud scoring, payouts

## Workflow

1. Write failing test
2. Implement feature
3. Run linters
4. Open pull request
5. Squash-merge after approval

## Security Contact

Report vulnerabilities to security@example.com.
Do not open public issues for security problems.

## Glossary

PAN: primary account number.
BIN: bank identification number.
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.throughput(Throughput::Bytes(AGENTS_SAMPLE.len() as u64));

    group.bench_function("agentsmd", |b| {
        b.iter(|| {
            let doc = parse(black_box(AGENTS_SAMPLE));
            black_box(doc.capabilities().len())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(AGENTS_SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    // Repeated headings merge into the same fields, so the document grows
    // with the input.
    for size in [1, 5, 10, 20].iter() {
        let content: String = AGENTS_SAMPLE.repeat(*size);

        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("agentsmd", size), &content, |b, content| {
            b.iter(|| {
                let doc = parse(black_box(content));
                black_box(doc.capabilities().len())
            })
        });

        group.bench_with_input(BenchmarkId::new("markdown", size), &content, |b, content| {
            b.iter(|| {
                let parser = MdParser::new_ext(black_box(content), Options::all());
                let events: Vec<_> = parser.collect();
                black_box(events.len())
            })
        });
    }

    group.finish();
}

fn bench_generate_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let doc = parse(AGENTS_SAMPLE);

    group.bench_function("generate", |b| {
        b.iter(|| black_box(generate(black_box(&doc))).len())
    });

    group.bench_function("validate", |b| {
        b.iter(|| black_box(validate(black_box(&doc))).is_valid())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_scaling,
    bench_generate_and_validate
);
criterion_main!(benches);
