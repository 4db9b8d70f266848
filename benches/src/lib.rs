//! Benchmark helper utilities for fryline-rs
//!
//! This module provides synthetic catalogs and populated grids so that the
//! benchmarks do not depend on the bundled demo data.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use fryline_anim::grid::{InstanceId, TileGrid};
use fryline_types::{
	anim::{AnimationSpec, Frame, Sequence, StateMachine},
	catalog::Catalog,
	config::BuildConfig,
	parity::{GridPos, ParityClass},
	tile::{ParityVariant, TileTypeDefinition},
};

/// Tile type names of [`factory_catalog`]
pub const TYPE_IDS: [&str; 4] = ["Floor", "Conveyor", "Frier", "Spinner"];

fn sequence(frames: &[(u32, u64)], looping: bool) -> Sequence {
	let frames = frames.iter().map(|&(frame_id, duration_ms)| Frame::new(frame_id, duration_ms)).collect();
	Sequence::new(frames, looping).expect("benchmark sequences are valid")
}

/// Catalog with one tile type of every animation kind
pub fn factory_catalog() -> Catalog {
	let frier = StateMachine {
		on_transition: Some(sequence(&[(16, 125), (17, 125), (18, 125), (19, 125)], false)),
		off_transition: Some(sequence(&[(19, 125), (17, 125), (18, 125), (16, 125)], false)),
		on_anim: Some(sequence(&[(20, 125), (21, 50), (22, 200), (23, 50), (19, 125)], true)),
		off_anim: Some(sequence(&[(16, 200)], true)),
	};

	let definitions = [
		TileTypeDefinition::new("Floor", 5).with_variant(
			ParityClass::Odd,
			ParityVariant {
				base_frame: Some(6),
				..ParityVariant::default()
			},
		),
		TileTypeDefinition::new("Conveyor", 12).with_animation(AnimationSpec::Pausable(sequence(
			&[(12, 125), (13, 125), (14, 125), (15, 125)],
			true,
		))),
		TileTypeDefinition::new("Frier", 16)
			.with_animation(AnimationSpec::StateMachine(frier))
			.with_variant(ParityClass::Odd, ParityVariant::offset(std::time::Duration::from_millis(250))),
		TileTypeDefinition::new("Spinner", 24).with_animation(AnimationSpec::Loop(sequence(
			&[(24, 100), (25, 100), (26, 100), (27, 100)],
			true,
		))),
	];

	Catalog::from_definitions(0..=31, definitions, &BuildConfig::default()).expect("benchmark catalog is valid")
}

/// Fills a `side` x `side` grid with randomly chosen tile types
pub fn random_grid(catalog: &Catalog, side: i32, seed: u64) -> (TileGrid, Vec<InstanceId>) {
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut grid = TileGrid::new();
	let mut ids = Vec::new();

	for y in 0..side {
		for x in 0..side {
			let type_id = TYPE_IDS[rng.random_range(0..TYPE_IDS.len())];
			if let Ok(id) = grid.place(catalog, type_id, GridPos::new(x, y), rng.random_bool(0.5)) {
				ids.push(id);
			}
		}
	}

	(grid, ids)
}

/// Picks roughly `ratio` of `ids` and assigns each a random signal
pub fn random_signals(ids: &[InstanceId], ratio: f64, seed: u64) -> Vec<(InstanceId, bool)> {
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut signals = Vec::new();
	for &id in ids {
		if rng.random_bool(ratio) {
			signals.push((id, rng.random_bool(0.5)));
		}
	}
	signals
}
