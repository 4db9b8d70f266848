//! This module is separated into its own crate to enable simple dynamic linking for `fryline`, and should not be used directly.

/// `use fryline::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use fryline_anim;
pub use fryline_types;

// Re-export commonly used types at crate root
pub use fryline_anim::{grid::TileGrid, resolver::Resolver};
pub use fryline_types::{catalog::Catalog, config::BuildConfig, raw::RawTileset};
