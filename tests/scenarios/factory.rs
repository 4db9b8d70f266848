//! Factory floor scenarios on the bundled tileset

use fryline_rs::prelude::*;

use super::{bundled_catalog, ms};

#[test_log::test]
fn test_frier_switches_on_and_off() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let frier = grid.place(&catalog, "Frier", GridPos::new(0, 0), false).unwrap();
	assert_eq!(grid.current_frame(frier), Some(16));

	let mut observed = Vec::new();
	grid.tick(&catalog, ms(0), [(frier, true)]);
	observed.push(grid.current_frame(frier).unwrap());
	for _ in 0..4 {
		grid.tick(&catalog, ms(125), []);
		observed.push(grid.current_frame(frier).unwrap());
	}
	assert_eq!(observed, [16, 17, 18, 19, 20]);
	assert_eq!(grid.get(frier).unwrap().phase(), Phase::OnSteady);

	grid.tick(&catalog, ms(300), [(frier, false)]);
	assert_eq!(grid.get(frier).unwrap().phase(), Phase::OffTransition);
	assert_eq!(grid.current_frame(frier), Some(18));

	grid.tick(&catalog, ms(200), []);
	assert_eq!(grid.get(frier).unwrap().phase(), Phase::OffSteady);
	assert_eq!(grid.current_frame(frier), Some(16));
}

#[test]
fn test_neighbouring_friers_are_out_of_phase() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let even = grid.place(&catalog, "Frier", GridPos::new(0, 0), true).unwrap();
	let odd = grid.place(&catalog, "Frier", GridPos::new(1, 0), true).unwrap();

	assert_eq!(grid.get(even).unwrap().parity(), ParityClass::Even);
	assert_eq!(grid.get(odd).unwrap().parity(), ParityClass::Odd);
	assert_eq!(grid.current_frame(even), Some(20));
	assert_eq!(grid.current_frame(odd), Some(22));
}

#[test]
fn test_floor_checkerboard() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let even = grid.place(&catalog, "Floor", GridPos::new(2, 0), false).unwrap();
	let odd = grid.place(&catalog, "Floor", GridPos::new(-1, 0), false).unwrap();

	for step in 0..10 {
		grid.tick(&catalog, ms(40), [(even, step % 2 == 0), (odd, step % 3 == 0)]);
		assert_eq!(grid.current_frame(even), Some(5));
		assert_eq!(grid.current_frame(odd), Some(6));
	}
}

#[test]
fn test_conveyor_runs_only_while_powered() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let belt = grid.place(&catalog, "Conveyor", GridPos::new(0, 0), false).unwrap();

	grid.tick(&catalog, ms(500), []);
	assert_eq!(grid.current_frame(belt), Some(12));

	grid.tick(&catalog, ms(250), [(belt, true)]);
	assert_eq!(grid.current_frame(belt), Some(14));

	grid.tick(&catalog, ms(125), [(belt, false)]);
	grid.tick(&catalog, ms(1_000), []);
	assert_eq!(grid.current_frame(belt), Some(14));
}

#[test]
fn test_screen_holds_last_frame() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let screen = grid.place(&catalog, "Screen", GridPos::new(3, 3), false).unwrap();
	assert_eq!(grid.current_frame(screen), Some(28));

	grid.tick(&catalog, ms(0), [(screen, true)]);
	assert_eq!(grid.get(screen).unwrap().phase(), Phase::OnSteady);
	assert_eq!(grid.current_frame(screen), Some(29));

	for _ in 0..20 {
		grid.tick(&catalog, ms(100), []);
	}
	assert_eq!(grid.current_frame(screen), Some(31));
}

#[test]
fn test_spinner_runs_while_powered() {
	let catalog = bundled_catalog();
	let mut grid = TileGrid::new();
	let spinner = grid.place(&catalog, "Spinner", GridPos::new(0, 0), false).unwrap();

	let mut frames = Vec::new();
	for step in 0..8 {
		grid.tick(&catalog, ms(100), [(spinner, step % 2 == 0)]);
		frames.push(grid.current_frame(spinner).unwrap());
	}
	assert_eq!(frames, [25, 25, 26, 26, 27, 27, 24, 24]);
	assert!(!grid.get(spinner).unwrap().logical_state());
}
