use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use towercalc::attachment::recalculate;
use towercalc::layer::{Layer, Position, QuoteOption};
use towercalc::naming::name_of;
use towercalc::quota_share::band_status;

/// Alternating plain layers and three-member quota-share bands, home
/// carrier near the top — the worst realistic shape for the band walks.
fn build_tower(layers: usize) -> Vec<Layer> {
    let mut tower: Vec<Layer> = (0..layers.saturating_sub(1))
        .map(|i| Layer {
            carrier: format!("Carrier {i}"),
            limit: 5_000_000.0,
            quota_share: if i % 4 < 3 {
                Some(((i / 4) as f64 + 1.0) * 15_000_000.0)
            } else {
                None
            },
            retention: None,
            premium: Some(250_000.0),
            attachment: 0.0,
        })
        .collect();
    tower.push(Layer {
        carrier: "CMAI Specialty".to_string(),
        limit: 5_000_000.0,
        quota_share: None,
        retention: None,
        premium: Some(400_000.0),
        attachment: 0.0,
    });
    tower
}

// ── Group 1: recalculate — tower size scaling ────────────────────────────────

fn bench_recalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("recalculate");
    for &layers in &[5usize, 25, 100, 500] {
        group.throughput(Throughput::Elements(layers as u64));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, &n| {
            b.iter_batched(|| build_tower(n), |tower| recalculate(&tower), BatchSize::SmallInput)
        });
    }
    group.finish();
}

// ── Group 2: band_status — full-tower scan ───────────────────────────────────

fn bench_band_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_status_scan");
    for &layers in &[25usize, 100, 500] {
        group.throughput(Throughput::Elements(layers as u64));
        let tower = build_tower(layers);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &tower, |b, tower| {
            b.iter(|| {
                (0..tower.len())
                    .filter_map(|i| band_status(tower, i))
                    .count()
            })
        });
    }
    group.finish();
}

// ── Group 3: name_of — single-quote cost ─────────────────────────────────────

fn bench_name_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_of");
    for &layers in &[5usize, 100] {
        let quote = QuoteOption {
            tower: build_tower(layers),
            position: Position::Excess,
            primary_retention: None,
        };
        group.bench_with_input(BenchmarkId::from_parameter(layers), &quote, |b, quote| {
            b.iter(|| name_of(quote))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recalculate, bench_band_status, bench_name_of);
criterion_main!(benches);
