//! Error types for the tile grid.

use thiserror::Error;

use fryline_types::tile::TileTypeId;

/// Errors produced by [`TileGrid`](crate::grid::TileGrid) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
	/// The tile type is not part of the catalog
	#[error("Unknown tile type \"{0}\"")]
	UnknownTileType(TileTypeId),
}
