//! Tile type definitions.

use std::{borrow::Borrow, collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
	anim::{AnimationSpec, FrameId},
	parity::{GridPos, ParityClass, ParityRule, classify},
};

/// Stable identifier of a tile type, e.g. `Conveyor` or `Frier`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileTypeId(String);

impl TileTypeId {
	/// Creates an identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for TileTypeId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for TileTypeId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for TileTypeId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl std::fmt::Display for TileTypeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.pad(&self.0)
	}
}

/// Per-parity overrides of a tile type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParityVariant {
	/// Replaces the base frame
	pub base_frame: Option<FrameId>,
	/// Replaces the animation
	pub animation: Option<AnimationSpec>,
	/// Simulated time consumed once at placement
	pub start_offset: Duration,
	/// Replaces the playback speed, in percent
	pub speed_percent: Option<u32>,
}

impl ParityVariant {
	/// Variant that only shifts the animation start.
	pub fn offset(start_offset: Duration) -> Self {
		Self {
			start_offset,
			..Self::default()
		}
	}
}

/// Immutable description of a tile type.
///
/// Definitions handed out by the catalog already have the parity variant of
/// the requested class applied, so `base_frame`, `animation` and
/// `start_offset` are the values to render with.
///
/// # Examples
///
/// ```
/// use fryline_types::parity::{GridPos, ParityClass, ParityRule};
/// use fryline_types::tile::{ParityVariant, TileTypeDefinition};
/// use std::time::Duration;
///
/// let floor = TileTypeDefinition::new("Floor", 5);
/// assert_eq!(floor.classify(GridPos::new(1, 0), ParityRule::Checkerboard), ParityClass::None);
///
/// let frier = TileTypeDefinition::new("Frier", 16)
///     .with_variant(ParityClass::Odd, ParityVariant::offset(Duration::from_millis(100)));
/// assert_eq!(frier.classify(GridPos::new(1, 0), ParityRule::Checkerboard), ParityClass::Odd);
/// assert_eq!(frier.resolve(ParityClass::Odd).start_offset(), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTypeDefinition {
	type_id: TileTypeId,
	base_frame: FrameId,
	parity_variants: BTreeMap<ParityClass, ParityVariant>,
	animation: AnimationSpec,
	start_offset: Duration,
	speed_percent: u32,
}

/// Playback speed of a tile type that does not set one.
pub const DEFAULT_SPEED_PERCENT: u32 = 100;

impl TileTypeDefinition {
	/// Creates a static tile type.
	pub fn new(type_id: impl Into<TileTypeId>, base_frame: FrameId) -> Self {
		Self {
			type_id: type_id.into(),
			base_frame,
			parity_variants: BTreeMap::new(),
			animation: AnimationSpec::None,
			start_offset: Duration::ZERO,
			speed_percent: DEFAULT_SPEED_PERCENT,
		}
	}

	/// Sets the animation.
	#[must_use]
	pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
		self.animation = animation;
		self
	}

	/// Sets the playback speed in percent; `0` is treated as `100`.
	#[must_use]
	pub fn with_speed_percent(mut self, speed_percent: u32) -> Self {
		self.speed_percent = if speed_percent == 0 {
			DEFAULT_SPEED_PERCENT
		} else {
			speed_percent
		};
		self
	}

	/// Adds or replaces the variant for `parity`.
	#[must_use]
	pub fn with_variant(mut self, parity: ParityClass, variant: ParityVariant) -> Self {
		self.parity_variants.insert(parity, variant);
		self
	}

	/// Identifier of the type.
	pub fn type_id(&self) -> &TileTypeId {
		&self.type_id
	}

	/// Frame shown when no sequence is active.
	pub fn base_frame(&self) -> FrameId {
		self.base_frame
	}

	/// Animation of the type.
	pub fn animation(&self) -> &AnimationSpec {
		&self.animation
	}

	/// Start offset consumed at placement.
	pub fn start_offset(&self) -> Duration {
		self.start_offset
	}

	/// Playback speed in percent of simulated time.
	pub fn speed_percent(&self) -> u32 {
		self.speed_percent
	}

	/// Declared parity variants.
	pub fn parity_variants(&self) -> &BTreeMap<ParityClass, ParityVariant> {
		&self.parity_variants
	}

	/// Returns `true` if the type renders differently depending on position.
	///
	/// Only `odd` and `even` variants depend on position; a `none` variant
	/// alone overrides every instance.
	pub fn uses_parity(&self) -> bool {
		self.parity_variants.contains_key(&ParityClass::Odd) || self.parity_variants.contains_key(&ParityClass::Even)
	}

	/// Parity class of an instance of this type placed at `position`.
	///
	/// Types without an `odd` or `even` variant always resolve to
	/// [`ParityClass::None`].
	pub fn classify(&self, position: GridPos, rule: ParityRule) -> ParityClass {
		if self.uses_parity() {
			classify(position, rule)
		} else {
			ParityClass::None
		}
	}

	/// Returns a copy with the variant for `parity` applied.
	pub fn resolve(&self, parity: ParityClass) -> TileTypeDefinition {
		let mut resolved = self.clone();
		if let Some(variant) = self.parity_variants.get(&parity) {
			if let Some(frame) = variant.base_frame {
				resolved.base_frame = frame;
			}
			if let Some(animation) = &variant.animation {
				resolved.animation = animation.clone();
			}
			resolved.start_offset = variant.start_offset;
			if let Some(speed) = variant.speed_percent.filter(|&speed| speed > 0) {
				resolved.speed_percent = speed;
			}
		}
		resolved
	}

	/// Every frame id the type can display, with a readable location.
	pub fn frame_references(&self) -> Vec<(FrameId, String)> {
		let mut refs = vec![(self.base_frame, "base_frame".to_string())];
		push_animation_refs(&mut refs, "", &self.animation);

		for (parity, variant) in &self.parity_variants {
			if let Some(frame) = variant.base_frame {
				refs.push((frame, format!("{parity}.base_frame")));
			}
			if let Some(animation) = &variant.animation {
				push_animation_refs(&mut refs, &format!("{parity}."), animation);
			}
		}

		refs
	}
}

fn push_animation_refs(refs: &mut Vec<(FrameId, String)>, prefix: &str, animation: &AnimationSpec) {
	for (role, sequence) in animation.sequences() {
		for (index, frame_id) in sequence.frame_ids().enumerate() {
			refs.push((frame_id, format!("{prefix}{role}[{index}]")));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::anim::{Frame, Sequence};

	fn spinner() -> AnimationSpec {
		AnimationSpec::Loop(
			Sequence::cyclic(vec![Frame::new(24, 100), Frame::new(25, 100)]).unwrap(),
		)
	}

	#[test]
	fn test_resolve_without_variant_is_identity() {
		let def = TileTypeDefinition::new("Spinner", 24).with_animation(spinner());
		assert_eq!(def.resolve(ParityClass::Odd), def);
	}

	#[test]
	fn test_resolve_applies_overrides() {
		let def = TileTypeDefinition::new("Floor", 5).with_variant(
			ParityClass::Odd,
			ParityVariant {
				base_frame: Some(6),
				..ParityVariant::default()
			},
		);

		assert_eq!(def.resolve(ParityClass::Odd).base_frame(), 6);
		assert_eq!(def.resolve(ParityClass::Even).base_frame(), 5);
	}

	#[test]
	fn test_none_variant_applies_everywhere() {
		let def = TileTypeDefinition::new("Floor", 5).with_variant(
			ParityClass::None,
			ParityVariant {
				base_frame: Some(6),
				..ParityVariant::default()
			},
		);

		assert!(!def.uses_parity());
		for position in [GridPos::new(0, 0), GridPos::new(1, 0), GridPos::new(-3, 8)] {
			let parity = def.classify(position, ParityRule::Checkerboard);
			assert_eq!(parity, ParityClass::None);
			assert_eq!(def.resolve(parity).base_frame(), 6);
		}
	}

	#[test]
	fn test_speed_override() {
		let def = TileTypeDefinition::new("Conveyor", 12)
			.with_speed_percent(200)
			.with_variant(
				ParityClass::Odd,
				ParityVariant {
					speed_percent: Some(50),
					..ParityVariant::default()
				},
			)
			.with_variant(ParityClass::Even, ParityVariant::default());

		assert_eq!(def.resolve(ParityClass::Odd).speed_percent(), 50);
		assert_eq!(def.resolve(ParityClass::Even).speed_percent(), 200);
		assert_eq!(TileTypeDefinition::new("Floor", 5).with_speed_percent(0).speed_percent(), 100);
	}

	#[test]
	fn test_frame_references_include_variants() {
		let def = TileTypeDefinition::new("Spinner", 24).with_animation(spinner()).with_variant(
			ParityClass::Even,
			ParityVariant {
				base_frame: Some(26),
				..ParityVariant::default()
			},
		);

		let refs = def.frame_references();
		assert_eq!(
			refs,
			vec![
				(24, "base_frame".to_string()),
				(24, "loop[0]".to_string()),
				(25, "loop[1]".to_string()),
				(26, "even.base_frame".to_string()),
			]
		);
	}
}
