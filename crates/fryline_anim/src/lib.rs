//! This crate provides the per-tile animation runtime for the `fryline-rs` project.
//!
//! # Modules
//!
//! - **instance**: the mutable animation record of one placed tile
//! - **resolver**: advances instances through their [`AnimationSpec`](fryline_types::anim::AnimationSpec)
//! - **grid**: the arena that owns instances and routes per-tick signals
//!
//! # Examples
//!
//! ```
//! use fryline_anim::prelude::*;
//! use fryline_types::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let blink = Sequence::cyclic(vec![Frame::new(9, 100), Frame::new(10, 100)])?;
//! let lamp = TileTypeDefinition::new("Lamp", 9).with_animation(AnimationSpec::Loop(blink));
//! let catalog = Catalog::from_definitions(9..=10, [lamp], &BuildConfig::default())?;
//!
//! let mut grid = TileGrid::new();
//! let id = grid.place(&catalog, "Lamp", GridPos::new(0, 0), false)?;
//! grid.tick(&catalog, Duration::from_millis(150), []);
//! assert_eq!(grid.current_frame(id), Some(10));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod grid;
pub mod instance;
pub mod resolver;

/// `use fryline_anim::prelude::*;` to import commonly used items.
pub mod prelude;
