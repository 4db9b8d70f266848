//! Error types for animation payload parsing and catalog building.

use thiserror::Error;

use crate::{
	anim::{FrameId, SequenceRole},
	tile::TileTypeId,
};

/// Errors produced when validating a list of frames
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
	/// Sequence has no frames
	#[error("Sequence has no frames")]
	Empty,

	/// A frame has zero duration
	#[error("Frame {index} has zero duration")]
	ZeroDuration {
		/// Index of the offending frame
		index: usize,
	},
}

/// Malformed animation payload.
///
/// These errors never abort a catalog build on their own: the affected tile
/// type falls back to a static frame and the error is kept as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationSpecError {
	/// Payload is present but names no sequence
	#[error("Animation payload is empty")]
	EmptyPayload,

	/// Payload names a sequence the engine does not know
	#[error("Unknown sequence name \"{name}\"")]
	UnknownSequence {
		/// Name found in the payload
		name: String,
	},

	/// Payload mixes `loop`/`pausable` with state machine sequences, or both together
	#[error("Sequence \"{role}\" cannot be combined with \"{other}\"")]
	MixedKinds {
		/// First role found
		role: SequenceRole,
		/// Conflicting role
		other: SequenceRole,
	},

	/// `loop` or `pausable` sequence declared as non-looping
	#[error("Sequence \"{role}\" must be cyclic")]
	FiniteLoop {
		/// Offending role
		role: SequenceRole,
	},

	/// Duration is zero or negative
	#[error("Sequence \"{role}\" frame {index}: duration must be positive, got {value}")]
	NonPositiveDuration {
		/// Sequence containing the frame
		role: SequenceRole,
		/// Index of the frame
		index: usize,
		/// Raw duration value
		value: i64,
	},

	/// Frame id does not fit a [`FrameId`]
	#[error("Sequence \"{role}\" frame {index}: invalid frame id {value}")]
	InvalidFrameId {
		/// Sequence containing the frame
		role: SequenceRole,
		/// Index of the frame
		index: usize,
		/// Raw frame id
		value: i64,
	},

	/// Parity start offset is negative
	#[error("Start offset must not be negative, got {value}ms")]
	NegativeStartOffset {
		/// Raw offset in milliseconds
		value: i64,
	},

	/// Playback speed is zero, negative or too large
	#[error("Speed must be a positive percentage, got {value}%")]
	InvalidSpeed {
		/// Raw speed in percent
		value: i64,
	},

	/// Parity class key is not `odd`, `even` or `none`
	#[error("Unknown parity class \"{name}\"")]
	UnknownParity {
		/// Key found in the payload
		name: String,
	},

	/// Sequence failed validation
	#[error("Sequence \"{role}\": {source}")]
	InvalidSequence {
		/// Sequence that failed
		role: SequenceRole,
		/// Underlying validation error
		#[source]
		source: SequenceError,
	},
}

/// Errors that abort a catalog build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// A frame id referenced by a tile type is not part of the tileset
	#[error("Tile type \"{type_id}\" references unknown frame {frame_id} at {location}")]
	DanglingFrameReference {
		/// Tile type holding the reference
		type_id: TileTypeId,
		/// Missing frame
		frame_id: FrameId,
		/// Where the reference was found, e.g. `odd.on_anim[2]`
		location: String,
	},

	/// Malformed payload escalated by a strict build configuration
	#[error("Tile type \"{type_id}\" has a malformed animation: {source}")]
	Malformed {
		/// Tile type holding the payload
		type_id: TileTypeId,
		/// Underlying payload error
		#[source]
		source: AnimationSpecError,
	},
}
