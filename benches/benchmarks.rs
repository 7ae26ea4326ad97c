// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rdoc_counters::{CounterDocument, counter_entry, parse_metric_names, render_document, strhash};

fn metric_list(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!("sm__inst_executed_pipe_{i}.sum\n\n"));
    }
    text
}

fn benchmark_strhash(c: &mut Criterion) {
    c.bench_function("strhash_metric_name", |b| {
        b.iter(|| strhash(black_box("l1tex__t_sector_hit_rate.avg.pct")))
    });
}

fn benchmark_parse_names(c: &mut Criterion) {
    let text = metric_list(1000);

    c.bench_function("parse_1000_metric_names", |b| {
        b.iter(|| parse_metric_names(black_box(&text)))
    });
}

fn benchmark_render_document(c: &mut Criterion) {
    let names = parse_metric_names(&metric_list(1000));
    let document: CounterDocument = names.iter().map(|name| counter_entry(name)).collect();

    c.bench_function("render_1000_counters", |b| {
        b.iter(|| render_document(black_box(&document)))
    });
}

criterion_group!(
    benches,
    benchmark_strhash,
    benchmark_parse_names,
    benchmark_render_document
);
criterion_main!(benches);
