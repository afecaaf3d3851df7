use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowsift_core::{ColumnSpec, Table};
use rowsift_filters::{
    dedupe, filter_rows_batched, match_rows, split_by_tags, BatchConfig, MatchMode, SplitOptions,
    WordQuery,
};
use std::time::Duration;

fn sample_table(rows: usize) -> Table {
    let cities = ["London", "Paris", "New York", "Berlin", "Lisbon"];
    Table::from_data(
        (0..rows)
            .map(|i| {
                vec![
                    format!("Person {}", i % 997),
                    format!("person{}@example.com", i % 997),
                    cities[i % cities.len()].to_string(),
                ]
            })
            .collect(),
    )
}

fn bench_match_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_rows");
    let contains = WordQuery::new(["paris", "berlin"]);
    let exact = WordQuery::new(["paris", "person1"])
        .with_mode(MatchMode::All)
        .with_exact(true);

    for size in [100, 1000, 10000].iter() {
        let table = sample_table(*size);

        group.bench_with_input(BenchmarkId::new("contains", size), size, |b, _| {
            b.iter(|| match_rows(black_box(&table), black_box(&contains)))
        });

        group.bench_with_input(BenchmarkId::new("exact_all", size), size, |b, _| {
            b.iter(|| match_rows(black_box(&table), black_box(&exact)))
        });
    }

    group.finish();
}

fn bench_batched(c: &mut Criterion) {
    let mut group = c.benchmark_group("batched");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let query = WordQuery::new(["paris", "berlin"]);
    let config = BatchConfig::default().with_yield_delay(Duration::ZERO);

    for size in [1000, 10000].iter() {
        let table = sample_table(*size);
        group.bench_with_input(BenchmarkId::new("yield_only", size), size, |b, _| {
            b.iter(|| {
                runtime.block_on(filter_rows_batched(
                    black_box(table.clone()),
                    &query,
                    true,
                    &config,
                ))
            })
        });
    }

    group.finish();
}

fn bench_restructure(c: &mut Criterion) {
    let mut group = c.benchmark_group("restructure");

    for size in [100, 1000, 10000].iter() {
        let table = sample_table(*size);
        group.bench_with_input(BenchmarkId::new("dedupe_key_a", size), size, |b, _| {
            b.iter(|| dedupe(black_box(table.clone()), &ColumnSpec::parse("A")))
        });
    }

    let html = Table::from_data(
        (0..1000)
            .map(|i| vec![format!("<ul><li>{}</li><li><b>x</b>{}</li></ul><br>tail", i, i)])
            .collect(),
    );
    let options = SplitOptions::new(["li"]).with_exclude_other_tags(true);
    group.bench_function("split_by_tags_1000", |b| {
        b.iter(|| split_by_tags(black_box(html.clone()), &options))
    });

    group.finish();
}

criterion_group!(benches, bench_match_rows, bench_batched, bench_restructure);
criterion_main!(benches);
