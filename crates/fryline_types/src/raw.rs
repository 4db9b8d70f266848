//! Raw tile records as delivered by the tileset loader.
//!
//! The loader that reads the level editor's tileset files hands over a flat
//! list of records. Each record may carry an animation payload: a mapping of
//! sequence name to a list of `{frame_id, duration_ms}` objects.
//!
//! ```json
//! {
//!   "frames": [16, 17, 18, 19, 20],
//!   "types": [
//!     {
//!       "type_id": "Frier",
//!       "base_frame": 16,
//!       "parity_variants": { "odd": { "start_offset_ms": 250 } },
//!       "animation": {
//!         "on_transition": [{ "frame_id": 16, "duration_ms": 125 }, { "frame_id": 17, "duration_ms": 125 }],
//!         "on_anim": { "frames": [{ "frame_id": 20, "duration_ms": 125 }], "looping": true },
//!         "off_anim": [{ "frame_id": 16, "duration_ms": 200 }]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Raw integers are signed so that zero or negative values reach the
//! validator instead of failing deserialization.

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
	anim::{AnimationSpec, Frame, FrameId, Sequence, SequenceRole, StateMachine},
	error::AnimationSpecError,
	parity::ParityClass,
	tile::{ParityVariant, TileTypeDefinition},
};

/// Animation payload: sequence name to sequence.
pub type RawAnimation = BTreeMap<String, RawSequence>;

/// Complete tileset handed over by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTileset {
	/// Every renderable frame id of the tileset
	#[serde(default)]
	pub frames: Vec<FrameId>,
	/// Tile type records
	#[serde(default)]
	pub types: Vec<RawTileRecord>,
}

/// One tile type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTileRecord {
	/// Tile type identifier
	pub type_id: String,
	/// Frame shown when no animation is active
	pub base_frame: FrameId,
	/// Overrides keyed by `odd`, `even` or `none`
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub parity_variants: BTreeMap<String, RawParityVariant>,
	/// Animation payload
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub animation: Option<RawAnimation>,
	/// Playback speed in percent, 100 when absent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub anim_speed_percent: Option<i64>,
}

/// Parity override as written in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawParityVariant {
	/// Replacement base frame
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base_frame: Option<FrameId>,
	/// Replacement animation
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub animation: Option<RawAnimation>,
	/// Start offset in milliseconds
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start_offset_ms: Option<i64>,
	/// Replacement playback speed in percent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub anim_speed_percent: Option<i64>,
}

/// A sequence, either as a bare frame list or with an explicit looping flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSequence {
	/// Bare list; steady sequences default to cyclic
	Frames(Vec<RawFrame>),
	/// List with an explicit looping flag
	Detailed {
		/// Frames of the sequence
		frames: Vec<RawFrame>,
		/// `false` holds the last frame
		#[serde(default)]
		looping: Option<bool>,
	},
}

impl RawSequence {
	fn parts(&self) -> (&[RawFrame], Option<bool>) {
		match self {
			Self::Frames(frames) => (frames.as_slice(), None),
			Self::Detailed {
				frames,
				looping,
			} => (frames.as_slice(), *looping),
		}
	}
}

/// One frame as written in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrame {
	/// Frame id
	pub frame_id: i64,
	/// Duration in milliseconds
	pub duration_ms: i64,
}

impl RawFrame {
	fn to_frame(self, role: SequenceRole, index: usize) -> Result<Frame, AnimationSpecError> {
		let Ok(frame_id) = FrameId::try_from(self.frame_id) else {
			return Err(AnimationSpecError::InvalidFrameId {
				role,
				index,
				value: self.frame_id,
			});
		};

		let duration_ms = match u64::try_from(self.duration_ms) {
			Ok(ms) if ms > 0 => ms,
			_ => {
				return Err(AnimationSpecError::NonPositiveDuration {
					role,
					index,
					value: self.duration_ms,
				});
			}
		};

		Ok(Frame::new(frame_id, duration_ms))
	}
}

/// A payload problem found while parsing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadIssue {
	/// Variant the problem belongs to, `None` for the record itself
	pub parity: Option<ParityClass>,
	/// The problem
	pub error: AnimationSpecError,
}

/// Parses an animation payload into an [`AnimationSpec`].
///
/// # Errors
///
/// Returns an [`AnimationSpecError`] if the payload is empty, names an unknown
/// sequence, mixes loop kinds with state machine sequences, or contains an
/// empty sequence, a non-positive duration or an out-of-range frame id.
///
/// # Examples
///
/// ```
/// use fryline_types::anim::AnimationSpec;
/// use fryline_types::raw::{RawAnimation, RawFrame, RawSequence, parse_animation};
///
/// let mut payload = RawAnimation::new();
/// payload.insert(
///     "loop".to_string(),
///     RawSequence::Frames(vec![RawFrame { frame_id: 24, duration_ms: 100 }]),
/// );
///
/// let spec = parse_animation(&payload)?;
/// assert!(matches!(spec, AnimationSpec::Loop(_)));
/// # Ok::<(), fryline_types::error::AnimationSpecError>(())
/// ```
pub fn parse_animation(raw: &RawAnimation) -> Result<AnimationSpec, AnimationSpecError> {
	let mut entries = Vec::with_capacity(raw.len());
	for (name, sequence) in raw {
		entries.push((name.parse::<SequenceRole>()?, sequence));
	}

	let Some(&(first, first_raw)) = entries.first() else {
		return Err(AnimationSpecError::EmptyPayload);
	};

	for &(role, _) in &entries[1..] {
		if !first.is_state_machine() || !role.is_state_machine() {
			return Err(AnimationSpecError::MixedKinds {
				role: first,
				other: role,
			});
		}
	}

	match first {
		SequenceRole::Loop => Ok(AnimationSpec::Loop(parse_sequence(first, first_raw)?)),
		SequenceRole::Pausable => Ok(AnimationSpec::Pausable(parse_sequence(first, first_raw)?)),
		_ => {
			let mut machine = StateMachine::default();
			for (role, sequence) in entries {
				let parsed = parse_sequence(role, sequence)?;
				if let Some(slot) = machine.slot_mut(role) {
					*slot = Some(parsed);
				}
			}
			Ok(AnimationSpec::StateMachine(machine))
		}
	}
}

fn parse_sequence(role: SequenceRole, raw: &RawSequence) -> Result<Sequence, AnimationSpecError> {
	let (raw_frames, looping) = raw.parts();

	let looping = match (role, looping) {
		(SequenceRole::Loop | SequenceRole::Pausable, Some(false)) => {
			return Err(AnimationSpecError::FiniteLoop {
				role,
			});
		}
		(role, _) if role.is_transition() => false,
		(_, explicit) => explicit.unwrap_or(true),
	};

	let frames = raw_frames
		.iter()
		.enumerate()
		.map(|(index, frame)| frame.to_frame(role, index))
		.collect::<Result<Vec<_>, _>>()?;

	Sequence::new(frames, looping).map_err(|source| AnimationSpecError::InvalidSequence {
		role,
		source,
	})
}

fn parse_speed(value: i64) -> Result<u32, AnimationSpecError> {
	u32::try_from(value)
		.ok()
		.filter(|&speed| speed > 0)
		.ok_or(AnimationSpecError::InvalidSpeed {
			value,
		})
}

/// Parses a record into a definition, degrading malformed parts.
///
/// A malformed animation payload becomes [`AnimationSpec::None`], an invalid
/// start offset becomes zero, an invalid speed falls back to the default and
/// an unknown parity key is dropped. Every such degradation is returned as a
/// [`PayloadIssue`].
pub fn parse_record(record: &RawTileRecord) -> (TileTypeDefinition, Vec<PayloadIssue>) {
	let mut issues = Vec::new();
	let mut definition = TileTypeDefinition::new(record.type_id.as_str(), record.base_frame);

	if let Some(payload) = &record.animation {
		match parse_animation(payload) {
			Ok(spec) => definition = definition.with_animation(spec),
			Err(error) => issues.push(PayloadIssue {
				parity: None,
				error,
			}),
		}
	}

	if let Some(value) = record.anim_speed_percent {
		match parse_speed(value) {
			Ok(speed) => definition = definition.with_speed_percent(speed),
			Err(error) => issues.push(PayloadIssue {
				parity: None,
				error,
			}),
		}
	}

	for (key, raw_variant) in &record.parity_variants {
		let parity = match key.parse::<ParityClass>() {
			Ok(parity) => parity,
			Err(error) => {
				issues.push(PayloadIssue {
					parity: None,
					error,
				});
				continue;
			}
		};

		let mut variant = ParityVariant {
			base_frame: raw_variant.base_frame,
			..ParityVariant::default()
		};

		if let Some(payload) = &raw_variant.animation {
			variant.animation = Some(parse_animation(payload).unwrap_or_else(|error| {
				issues.push(PayloadIssue {
					parity: Some(parity),
					error,
				});
				AnimationSpec::None
			}));
		}

		if let Some(offset) = raw_variant.start_offset_ms {
			match u64::try_from(offset) {
				Ok(ms) => variant.start_offset = Duration::from_millis(ms),
				Err(_) => issues.push(PayloadIssue {
					parity: Some(parity),
					error: AnimationSpecError::NegativeStartOffset {
						value: offset,
					},
				}),
			}
		}

		if let Some(value) = raw_variant.anim_speed_percent {
			match parse_speed(value) {
				Ok(speed) => variant.speed_percent = Some(speed),
				Err(error) => issues.push(PayloadIssue {
					parity: Some(parity),
					error,
				}),
			}
		}

		definition = definition.with_variant(parity, variant);
	}

	(definition, issues)
}
