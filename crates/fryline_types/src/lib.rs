//! This crate provides the data model and tile type catalog for the `fryline-rs` project.
//!
//! # Modules
//!
//! - **anim**: frames, sequences and the closed [`AnimationSpec`](anim::AnimationSpec) union
//! - **tile**: tile type definitions and their parity variants
//! - **parity**: grid coordinates and positional parity classification
//! - **raw**: the record schema delivered by the tileset loader
//! - **catalog**: the validated, immutable registry built from raw records
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use fryline_types::prelude::*;
//!
//! let spin = Sequence::cyclic(vec![Frame::new(24, 100), Frame::new(25, 100)]).unwrap();
//! let spinner = TileTypeDefinition::new("Spinner", 24).with_animation(AnimationSpec::Loop(spin));
//!
//! let catalog = Catalog::from_definitions(24..=27, [spinner], &BuildConfig::default()).unwrap();
//! assert_eq!(catalog.lookup("Spinner", ParityClass::None).unwrap().base_frame(), 24);
//! ```

pub mod anim;
pub mod catalog;
pub mod config;
pub mod error;
pub mod parity;
pub mod raw;
pub mod tile;

/// `use fryline_types::prelude::*;` to import commonly used items.
pub mod prelude;
