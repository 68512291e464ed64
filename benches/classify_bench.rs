use backup_seeds::config::ParallelConfig;
use backup_seeds::{classify_table, classify_table_with, Seed};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const FAMILIES: [&str; 6] = [
    "SingleMu",
    "DoubleMu",
    "SingleEG",
    "SingleIsoEG",
    "DoubleMu_",
    "QuadJet_",
];
const SUFFIXES: [&str; 6] = ["", "er2p1", "_OQ", "_SQ_OS_dR_Max1p4", "_OS_Mass8to14", "_er1p5"];

fn create_menu(rows: usize) -> Vec<Seed> {
    (0..rows)
        .map(|row| {
            let family = FAMILIES[row % FAMILIES.len()];
            let suffix = SUFFIXES[(row / FAMILIES.len()) % SUFFIXES.len()];
            let threshold = 3 + row % 17;
            let name = if family.ends_with('_') {
                format!("L1_{family}{}_{}{suffix}", threshold + 5, threshold)
            } else {
                format!("L1_{family}{threshold}{suffix}")
            };
            Seed::new(row, name, (row % 3) as u64)
        })
        .collect()
}

fn benchmark_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_classification");

    for rows in [50, 200, 500] {
        let menu = create_menu(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &menu, |b, menu| {
            b.iter(|| classify_table(black_box(menu)))
        });
    }

    group.finish();
}

fn benchmark_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_classification");
    let menu = create_menu(500);

    for workers in [2, 4, 8] {
        let config = ParallelConfig {
            enabled: true,
            max_concurrency: Some(workers),
        };
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, config| {
            b.iter(|| classify_table_with(black_box(&menu), config))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sequential, benchmark_parallel);
criterion_main!(benches);
