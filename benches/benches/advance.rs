//! Benchmark suite for per-tick animation advancement
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fryline_anim::resolver::Resolver;
use fryline_benches::{factory_catalog, random_grid, random_signals};
use fryline_types::parity::GridPos;

/// Full grid ticks at a 60Hz frame time
fn bench_grid_tick(c: &mut Criterion) {
	let catalog = factory_catalog();
	let mut group = c.benchmark_group("grid_tick");

	for side in [16, 64, 256] {
		let (mut grid, ids) = random_grid(&catalog, side, 42);
		let signals = random_signals(&ids, 0.05, 7);

		group.throughput(Throughput::Elements(ids.len() as u64));
		group.bench_with_input(BenchmarkId::new("quiet", side), &side, |b, _| {
			b.iter(|| black_box(grid.tick(&catalog, Duration::from_micros(16_667), [])));
		});
		group.bench_with_input(BenchmarkId::new("signalled", side), &side, |b, _| {
			b.iter(|| black_box(grid.tick(&catalog, Duration::from_micros(16_667), signals.iter().copied())));
		});
	}

	group.finish();
}

/// Single instance advanced by very large time steps
fn bench_large_dt(c: &mut Criterion) {
	let catalog = factory_catalog();
	let resolver = Resolver::new(&catalog);
	let Some(key) = catalog.key("Frier") else {
		eprintln!("Warning: benchmark catalog has no Frier");
		return;
	};

	let mut group = c.benchmark_group("large_dt");
	for hours in [1u64, 24, 24 * 365] {
		let dt = Duration::from_secs(hours * 3_600);
		group.bench_with_input(BenchmarkId::new("advance", hours), &dt, |b, &dt| {
			b.iter(|| {
				let Some(mut tile) = resolver.place(key, GridPos::new(0, 0), false) else {
					return;
				};
				resolver.advance(&mut tile, black_box(dt), Some(true));
				black_box(tile.current_frame());
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_grid_tick, bench_large_dt);
criterion_main!(benches);
