//! Performance benchmarks for playground URL handling
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! These benchmarks measure option layering from query strings and shareable URL
//! building for different source sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use playground_sandbox::{
    build_shareable_url, extract_from_params, resolve_defaults, Base64Codec, Configuration,
    QueryParams, SelectionRange, ShareRequest,
};

/// Generate source text with the given number of lines
fn generate_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("export const value_{i}: number = {i} * 2; // línea {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A query that overrides every other default
fn generate_query(defaults: &Configuration) -> String {
    defaults
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, (key, value))| match value.as_bool() {
            Some(b) => format!("{key}={}", !b),
            None => format!("{key}=1"),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Benchmark reading compiler options out of a query string
fn benchmark_extract_from_params(c: &mut Criterion) {
    let defaults = resolve_defaults(false, &Configuration::new());
    let query = generate_query(&defaults);

    c.bench_function("extract_from_params", |b| {
        b.iter(|| {
            let params = QueryParams::parse(black_box(&query));
            black_box(extract_from_params(&defaults, &params))
        });
    });
}

/// Benchmark shareable URL building for different source sizes
fn benchmark_build_shareable_url(c: &mut Criterion) {
    let line_counts = vec![10, 100, 1000];

    let defaults = resolve_defaults(false, &Configuration::new());
    let params = QueryParams::parse(&generate_query(&defaults));
    let mut current = defaults.clone();
    current.merge(&extract_from_params(&defaults, &params));
    let ambient = QueryParams::parse("ts=Nightly");

    let mut group = c.benchmark_group("build_shareable_url");
    group.sample_size(20);

    for count in line_counts {
        let source = generate_source(count);

        group.bench_with_input(BenchmarkId::new("lines", count), &source, |b, source| {
            b.iter(|| {
                let request = ShareRequest::new(&current, &defaults, black_box(source))
                    .with_selection(Some(SelectionRange::new(1, 1, 3, 10)))
                    .with_ambient_query(&ambient, "5.4.0");
                black_box(build_shareable_url(&request, &Base64Codec))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extract_from_params,
    benchmark_build_shareable_url
);
criterion_main!(benches);
