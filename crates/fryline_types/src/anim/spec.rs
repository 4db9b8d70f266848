//! The closed animation model of a tile type.

use std::str::FromStr;

use crate::error::AnimationSpecError;

use super::{frame::FrameId, sequence::Sequence};

/// Name of a sequence slot inside an animation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceRole {
	/// Single cyclic sequence of an [`AnimationSpec::Loop`]
	Loop,
	/// Single cyclic sequence of an [`AnimationSpec::Pausable`]
	Pausable,
	/// Played once on a rising edge
	OnTransition,
	/// Played once on a falling edge
	OffTransition,
	/// Steady sequence while on
	OnAnim,
	/// Steady sequence while off
	OffAnim,
}

impl SequenceRole {
	/// All roles, in payload order.
	pub const ALL: [SequenceRole; 6] = [
		Self::Loop,
		Self::Pausable,
		Self::OnTransition,
		Self::OffTransition,
		Self::OnAnim,
		Self::OffAnim,
	];

	/// Returns the payload key of this role.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Loop => "loop",
			Self::Pausable => "pausable",
			Self::OnTransition => "on_transition",
			Self::OffTransition => "off_transition",
			Self::OnAnim => "on_anim",
			Self::OffAnim => "off_anim",
		}
	}

	/// Returns `true` for the four state machine slots.
	pub fn is_state_machine(self) -> bool {
		!matches!(self, Self::Loop | Self::Pausable)
	}

	/// Returns `true` for the once-through slots.
	pub fn is_transition(self) -> bool {
		matches!(self, Self::OnTransition | Self::OffTransition)
	}
}

impl FromStr for SequenceRole {
	type Err = AnimationSpecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|role| role.as_str() == s).ok_or_else(|| {
			AnimationSpecError::UnknownSequence {
				name: s.to_string(),
			}
		})
	}
}

impl std::fmt::Display for SequenceRole {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Four-phase on/off animation.
///
/// Every slot is optional. A missing transition switches straight to the
/// steady phase; a missing steady sequence shows the tile's base frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateMachine {
	/// Played once after a rising edge
	pub on_transition: Option<Sequence>,
	/// Played once after a falling edge
	pub off_transition: Option<Sequence>,
	/// Steady sequence while on
	pub on_anim: Option<Sequence>,
	/// Steady sequence while off
	pub off_anim: Option<Sequence>,
}

impl StateMachine {
	/// Returns the sequence stored in `role`.
	pub fn sequence(&self, role: SequenceRole) -> Option<&Sequence> {
		match role {
			SequenceRole::OnTransition => self.on_transition.as_ref(),
			SequenceRole::OffTransition => self.off_transition.as_ref(),
			SequenceRole::OnAnim => self.on_anim.as_ref(),
			SequenceRole::OffAnim => self.off_anim.as_ref(),
			SequenceRole::Loop | SequenceRole::Pausable => None,
		}
	}

	/// Mutable slot for `role`, `None` for roles outside the state machine.
	pub fn slot_mut(&mut self, role: SequenceRole) -> Option<&mut Option<Sequence>> {
		match role {
			SequenceRole::OnTransition => Some(&mut self.on_transition),
			SequenceRole::OffTransition => Some(&mut self.off_transition),
			SequenceRole::OnAnim => Some(&mut self.on_anim),
			SequenceRole::OffAnim => Some(&mut self.off_anim),
			SequenceRole::Loop | SequenceRole::Pausable => None,
		}
	}
}

/// Animation behaviour of a tile type.
///
/// # Examples
///
/// ```
/// use fryline_types::anim::{AnimationSpec, Frame, Sequence};
///
/// let spin = Sequence::cyclic(vec![Frame::new(24, 100), Frame::new(25, 100)])?;
/// let spec = AnimationSpec::Loop(spin);
/// assert!(!spec.is_static());
/// assert_eq!(spec.frame_ids().collect::<Vec<_>>(), vec![24, 25]);
/// # Ok::<(), fryline_types::error::SequenceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnimationSpec {
	/// Always shows the base frame
	#[default]
	None,
	/// Cyclic sequence, ignores the logical signal
	Loop(Sequence),
	/// Cyclic sequence that only advances while the signal is on
	Pausable(Sequence),
	/// Signal-driven four-phase animation
	StateMachine(StateMachine),
}

impl AnimationSpec {
	/// Returns `true` for [`AnimationSpec::None`].
	pub fn is_static(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Returns the state machine, if this spec is one.
	pub fn state_machine(&self) -> Option<&StateMachine> {
		match self {
			Self::StateMachine(machine) => Some(machine),
			_ => None,
		}
	}

	/// Lists every present sequence together with its role.
	pub fn sequences(&self) -> Vec<(SequenceRole, &Sequence)> {
		match self {
			Self::None => Vec::new(),
			Self::Loop(seq) => vec![(SequenceRole::Loop, seq)],
			Self::Pausable(seq) => vec![(SequenceRole::Pausable, seq)],
			Self::StateMachine(machine) => [
				SequenceRole::OnTransition,
				SequenceRole::OffTransition,
				SequenceRole::OnAnim,
				SequenceRole::OffAnim,
			]
			.into_iter()
			.filter_map(|role| machine.sequence(role).map(|seq| (role, seq)))
			.collect(),
		}
	}

	/// Iterates over every frame id referenced by the animation.
	pub fn frame_ids(&self) -> impl Iterator<Item = FrameId> + '_ {
		self.sequences().into_iter().flat_map(|(_, seq)| seq.frame_ids())
	}

	/// Short name of the variant, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Loop(_) => "loop",
			Self::Pausable(_) => "pausable",
			Self::StateMachine(_) => "state_machine",
		}
	}
}
