//! Animation resolver.
//!
//! The resolver turns a tile type's [`AnimationSpec`] into the frame to render
//! for one instance. Each call to [`Resolver::advance`]:
//!
//! 1. Applies the logical signal. A real change restarts a state machine in the
//!    matching transition at its first frame, discarding any in-flight
//!    transition. An unchanged signal is ignored.
//! 2. Adds `dt`, scaled by the type's speed percentage, to the time spent on
//!    the current frame. `Pausable` specs only accumulate time while the
//!    signal is on.
//! 3. Consumes every frame boundary crossed inside `dt`. Finished transitions
//!    move to their steady phase, cyclic sequences wrap, finite steady
//!    sequences hold their last frame.
//! 4. Caches the resulting frame id on the instance.
//!
//! All arithmetic is integer [`Duration`] math, so identical inputs give
//! identical outputs.

use std::time::Duration;

use log::{trace, warn};

use fryline_types::{
	anim::{AnimationSpec, FrameId},
	catalog::{Catalog, TileTypeKey},
	parity::GridPos,
	tile::{DEFAULT_SPEED_PERCENT, TileTypeDefinition},
};

use crate::instance::{Phase, TileInstance};

/// Advances tile instances against a shared catalog.
///
/// The resolver keeps no per-instance state; it borrows the catalog and takes
/// each instance by mutable reference for the duration of a call.
///
/// # Examples
///
/// ```
/// use fryline_anim::resolver::Resolver;
/// use fryline_types::prelude::*;
/// use std::time::Duration;
///
/// let spin = Sequence::cyclic(vec![Frame::new(24, 100), Frame::new(25, 100)]).unwrap();
/// let spinner = TileTypeDefinition::new("Spinner", 24).with_animation(AnimationSpec::Loop(spin));
/// let catalog = Catalog::from_definitions(24..=25, [spinner], &BuildConfig::default()).unwrap();
///
/// let resolver = Resolver::new(&catalog);
/// let key = catalog.key("Spinner").unwrap();
/// let mut tile = resolver.place(key, GridPos::new(0, 0), false).unwrap();
/// assert_eq!(tile.current_frame(), 24);
///
/// resolver.advance(&mut tile, Duration::from_millis(100), None);
/// assert_eq!(tile.current_frame(), 25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
	catalog: &'c Catalog,
}

impl<'c> Resolver<'c> {
	/// Creates a resolver over `catalog`.
	pub fn new(catalog: &'c Catalog) -> Self {
		Self {
			catalog,
		}
	}

	/// Creates the instance of a tile placed at `position`.
	///
	/// The parity class is computed here and never again. State machines start
	/// in the steady phase matching `logical_state`; other specs start `Idle`.
	/// The definition's start offset is then played, including for paused tiles.
	///
	/// Returns `None` if `type_ref` does not belong to this catalog.
	pub fn place(&self, type_ref: TileTypeKey, position: GridPos, logical_state: bool) -> Option<TileInstance> {
		let parity = self.catalog.classify(type_ref, position)?;
		let definition = self.catalog.definition(type_ref, parity)?;

		let phase = match definition.animation() {
			AnimationSpec::StateMachine(_) => Phase::steady(logical_state),
			_ => Phase::Idle,
		};

		let mut instance = TileInstance {
			position,
			type_ref,
			parity,
			logical_state,
			phase,
			cursor: 0,
			elapsed_in_frame: Duration::ZERO,
			current_frame: definition.base_frame(),
		};

		let offset = definition.start_offset();
		if !offset.is_zero() {
			instance.elapsed_in_frame = offset;
			consume_elapsed(definition.animation(), &mut instance);
		}
		instance.current_frame = frame_of(definition, &instance);

		trace!(
			"Placed {} at {} ({}, {}, frame {})",
			definition.type_id(),
			position,
			parity,
			instance.phase,
			instance.current_frame
		);
		Some(instance)
	}

	/// Advances `instance` by `dt`, applying `signal` first.
	///
	/// A zero `dt` only applies the signal. Instances whose type is not part of
	/// this catalog are left untouched.
	///
	/// Scaling by the speed percentage is exact whenever `dt` is a whole number
	/// of microseconds, so splitting a step into smaller ticks gives the same
	/// result.
	pub fn advance(&self, instance: &mut TileInstance, dt: Duration, signal: Option<bool>) {
		let Some(definition) = self.catalog.definition(instance.type_ref, instance.parity) else {
			warn!("Tile at {} refers to a type outside this catalog", instance.position);
			return;
		};
		let spec = definition.animation();

		if let Some(on) = signal {
			apply_signal(spec, instance, on);
		}

		if !dt.is_zero() && is_running(spec, instance) {
			let dt = scale(dt, definition.speed_percent());
			instance.elapsed_in_frame = instance.elapsed_in_frame.saturating_add(dt);
			consume_elapsed(spec, instance);
		}

		instance.current_frame = frame_of(definition, instance);
	}
}

/// Frame to render for `instance`, stable until its next advance.
pub fn current_frame(instance: &TileInstance) -> FrameId {
	instance.current_frame
}

fn is_running(spec: &AnimationSpec, instance: &TileInstance) -> bool {
	!matches!(spec, AnimationSpec::Pausable(_)) || instance.logical_state
}

fn apply_signal(spec: &AnimationSpec, instance: &mut TileInstance, on: bool) {
	if instance.logical_state == on {
		return;
	}
	instance.logical_state = on;

	if !matches!(spec, AnimationSpec::StateMachine(_)) {
		return;
	}

	let mut phase = Phase::transition(on);
	if phase.sequence(spec).is_none() {
		phase = phase.after_transition();
	}

	trace!("Tile at {}: {} -> {}", instance.position, instance.phase, phase);
	instance.phase = phase;
	instance.cursor = 0;
	instance.elapsed_in_frame = Duration::ZERO;
}

fn consume_elapsed(spec: &AnimationSpec, instance: &mut TileInstance) {
	loop {
		let Some(sequence) = instance.phase.sequence(spec) else {
			instance.cursor = 0;
			instance.elapsed_in_frame = Duration::ZERO;
			return;
		};

		let steady = !instance.phase.is_transition();
		instance.cursor = instance.cursor.min(sequence.last_index());

		// a whole period of a cyclic sequence lands on the same cursor and offset
		if steady && sequence.is_looping() && instance.elapsed_in_frame >= sequence.period() {
			instance.elapsed_in_frame = remainder(instance.elapsed_in_frame, sequence.period());
		}

		let duration = sequence.frames()[instance.cursor].duration;
		if instance.elapsed_in_frame < duration {
			return;
		}

		if steady && !sequence.is_looping() && instance.cursor == sequence.last_index() {
			instance.elapsed_in_frame = Duration::ZERO;
			return;
		}

		instance.elapsed_in_frame -= duration;
		instance.cursor += 1;

		if instance.cursor == sequence.len() {
			instance.cursor = 0;
			if instance.phase.is_transition() {
				let next = instance.phase.after_transition();
				trace!("Tile at {}: {} -> {}", instance.position, instance.phase, next);
				instance.phase = next;
			}
		}
	}
}

fn remainder(elapsed: Duration, period: Duration) -> Duration {
	from_nanos(elapsed.as_nanos() % period.as_nanos())
}

fn scale(dt: Duration, speed_percent: u32) -> Duration {
	if speed_percent == DEFAULT_SPEED_PERCENT {
		return dt;
	}
	from_nanos(dt.as_nanos() * u128::from(speed_percent) / u128::from(DEFAULT_SPEED_PERCENT))
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

// saturates at Duration::MAX
fn from_nanos(nanos: u128) -> Duration {
	let subsec = (nanos % NANOS_PER_SEC) as u32;
	u64::try_from(nanos / NANOS_PER_SEC).map_or(Duration::MAX, |secs| Duration::new(secs, subsec))
}

fn frame_of(definition: &TileTypeDefinition, instance: &TileInstance) -> FrameId {
	instance
		.phase
		.sequence(definition.animation())
		.and_then(|sequence| sequence.frame(instance.cursor))
		.map_or(definition.base_frame(), |frame| frame.frame_id)
}
