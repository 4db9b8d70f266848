#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `fryline-rs` animates the tiles of a grid-based factory puzzle game.
//!
//! Tile types are loaded once into an immutable [`Catalog`]; each placed tile
//! gets its own animation state inside a [`TileGrid`], which turns per-tick
//! logical signals into the frame id to render.
//!
pub use fryline_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use fryline_dylib;
