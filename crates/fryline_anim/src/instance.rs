//! Per-instance animation state.

use std::time::Duration;

use fryline_types::{
	anim::{AnimationSpec, FrameId, Sequence, SequenceRole},
	catalog::TileTypeKey,
	parity::{GridPos, ParityClass},
};

/// Animation phase of a tile instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	/// Single-phase animation (`None`, `Loop` or `Pausable`)
	Idle,
	/// Playing `on_transition` once
	OnTransition,
	/// Showing `on_anim`
	OnSteady,
	/// Playing `off_transition` once
	OffTransition,
	/// Showing `off_anim`
	OffSteady,
}

impl Phase {
	/// Steady phase for a logical state.
	pub fn steady(on: bool) -> Self {
		if on {
			Self::OnSteady
		} else {
			Self::OffSteady
		}
	}

	/// Transition phase entered when the logical state becomes `on`.
	pub fn transition(on: bool) -> Self {
		if on {
			Self::OnTransition
		} else {
			Self::OffTransition
		}
	}

	/// Returns `true` for the once-through phases.
	pub fn is_transition(self) -> bool {
		matches!(self, Self::OnTransition | Self::OffTransition)
	}

	/// Phase that follows once a transition has been played.
	pub fn after_transition(self) -> Self {
		match self {
			Self::OnTransition => Self::OnSteady,
			Self::OffTransition => Self::OffSteady,
			other => other,
		}
	}

	/// Sequence slot displayed in this phase, for a state machine.
	pub fn role(self) -> Option<SequenceRole> {
		match self {
			Self::Idle => None,
			Self::OnTransition => Some(SequenceRole::OnTransition),
			Self::OnSteady => Some(SequenceRole::OnAnim),
			Self::OffTransition => Some(SequenceRole::OffTransition),
			Self::OffSteady => Some(SequenceRole::OffAnim),
		}
	}

	/// Sequence of `spec` that plays in this phase.
	pub fn sequence(self, spec: &AnimationSpec) -> Option<&Sequence> {
		match (self, spec) {
			(Self::Idle, AnimationSpec::Loop(seq) | AnimationSpec::Pausable(seq)) => Some(seq),
			(phase, AnimationSpec::StateMachine(machine)) => phase.role().and_then(|role| machine.sequence(role)),
			_ => None,
		}
	}
}

impl std::fmt::Display for Phase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Idle => "idle",
			Self::OnTransition => "on-transition",
			Self::OnSteady => "on",
			Self::OffTransition => "off-transition",
			Self::OffSteady => "off",
		};
		f.pad(name)
	}
}

/// Mutable animation record of one placed tile.
///
/// Instances are created by [`Resolver::place`](crate::resolver::Resolver::place)
/// and only ever mutated by [`Resolver::advance`](crate::resolver::Resolver::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInstance {
	pub(crate) position: GridPos,
	pub(crate) type_ref: TileTypeKey,
	pub(crate) parity: ParityClass,
	pub(crate) logical_state: bool,
	pub(crate) phase: Phase,
	pub(crate) cursor: usize,
	pub(crate) elapsed_in_frame: Duration,
	pub(crate) current_frame: FrameId,
}

impl TileInstance {
	/// Grid position.
	pub fn position(&self) -> GridPos {
		self.position
	}

	/// Catalog key of the tile type.
	pub fn type_ref(&self) -> TileTypeKey {
		self.type_ref
	}

	/// Parity class fixed at placement.
	pub fn parity(&self) -> ParityClass {
		self.parity
	}

	/// Last logical signal applied.
	pub fn logical_state(&self) -> bool {
		self.logical_state
	}

	/// Current animation phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Index into the active sequence.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Time spent on the current frame.
	pub fn elapsed_in_frame(&self) -> Duration {
		self.elapsed_in_frame
	}

	/// Frame to render, stable until the next advance.
	pub fn current_frame(&self) -> FrameId {
		self.current_frame
	}
}
