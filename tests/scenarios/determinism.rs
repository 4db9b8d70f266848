//! Replaying the same input gives the same output

use fryline_rs::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{bundled_catalog, ms};

const TYPES: [&str; 7] = ["Floor", "Start", "Exit", "Conveyor", "Frier", "Spinner", "Screen"];

fn replay(catalog: &Catalog, seed: u64) -> Vec<Vec<(InstanceId, GridPos, FrameId)>> {
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut grid = TileGrid::new();
	let mut ids = Vec::new();

	for y in -3..3 {
		for x in -3..3 {
			let type_id = TYPES[rng.random_range(0..TYPES.len())];
			ids.push(grid.place(catalog, type_id, GridPos::new(x, y), rng.random_bool(0.5)).unwrap());
		}
	}

	let mut history = Vec::new();
	for _ in 0..200 {
		let mut signals = Vec::new();
		for &id in &ids {
			if rng.random_bool(0.1) {
				signals.push((id, rng.random_bool(0.5)));
			}
		}
		grid.tick(catalog, ms(rng.random_range(0..120)), signals);
		history.push(grid.frames().collect());
	}
	history
}

#[test]
fn test_replay_is_deterministic() {
	let catalog = bundled_catalog();
	assert_eq!(replay(&catalog, 7), replay(&catalog, 7));
}

#[test]
fn test_frames_stay_inside_tileset() {
	let catalog = bundled_catalog();
	for seed in 0..4 {
		for frame in replay(&catalog, seed).iter().flatten() {
			assert!(catalog.contains_frame(frame.2));
		}
	}
}
