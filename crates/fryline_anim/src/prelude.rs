//! Prelude module for `fryline_anim`.

#[doc(inline)]
pub use crate::error::GridError;

#[doc(inline)]
pub use crate::grid::{InstanceId, TickReport, TileGrid};

#[doc(inline)]
pub use crate::instance::{Phase, TileInstance};

#[doc(inline)]
pub use crate::resolver::{Resolver, current_frame};
