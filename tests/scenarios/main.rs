//! Scenario tests for `fryline-rs` against the bundled tileset

mod determinism;
mod factory;
mod loading;

use fryline_rs::prelude::*;

pub(crate) const TILESET_JSON: &str = include_str!("../../demos/data/fryline_tiles.json");

pub(crate) fn bundled_catalog() -> Catalog {
	let tileset: RawTileset = serde_json::from_str(TILESET_JSON).unwrap();
	Catalog::build(&tileset).unwrap()
}

pub(crate) fn ms(value: u64) -> std::time::Duration {
	std::time::Duration::from_millis(value)
}
