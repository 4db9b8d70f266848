//! Prelude module for `fryline_internal`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```rust
//! use fryline_internal::prelude::*;
//!
//! let grid = TileGrid::new();
//! assert!(grid.is_empty());
//! assert_eq!(classify(GridPos::new(1, 0), ParityRule::Checkerboard), ParityClass::Odd);
//! ```

// Re-export everything from the member preludes
#[doc(inline)]
pub use fryline_anim::prelude::*;

#[doc(inline)]
pub use fryline_types::prelude::*;
