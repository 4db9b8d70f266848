//! Prelude module for `fryline_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use fryline_types::prelude::*;
//!
//! let position = GridPos::new(2, 3);
//! assert_eq!(classify(position, ParityRule::Checkerboard), ParityClass::Odd);
//! ```

#[doc(inline)]
pub use crate::anim::{AnimationSpec, Frame, FrameId, Sequence, SequenceRole, StateMachine};

#[doc(inline)]
pub use crate::catalog::{Catalog, Diagnostic, DiagnosticKind, TileTypeKey};

#[doc(inline)]
pub use crate::config::BuildConfig;

#[doc(inline)]
pub use crate::error::{AnimationSpecError, CatalogError, SequenceError};

#[doc(inline)]
pub use crate::parity::{GridPos, ParityClass, ParityRule, classify};

#[doc(inline)]
pub use crate::raw::{RawAnimation, RawFrame, RawParityVariant, RawSequence, RawTileRecord, RawTileset};

#[doc(inline)]
pub use crate::tile::{ParityVariant, TileTypeDefinition, TileTypeId};
