//! Ordered frame sequences.
//!
//! A [`Sequence`] is the unit every animation is built from: a non-empty list of
//! frames with strictly positive durations, played either cyclically or once and
//! then held on the last frame.

use std::time::Duration;

use crate::error::SequenceError;

use super::frame::{Frame, FrameId};

/// A validated, non-empty list of frames.
///
/// # Examples
///
/// ```
/// use fryline_types::anim::{Frame, Sequence};
/// use std::time::Duration;
///
/// let seq = Sequence::cyclic(vec![Frame::new(24, 100), Frame::new(25, 100)])?;
/// assert_eq!(seq.len(), 2);
/// assert!(seq.is_looping());
/// assert_eq!(seq.period(), Duration::from_millis(200));
/// # Ok::<(), fryline_types::error::SequenceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
	frames: Vec<Frame>,
	looping: bool,
	period: Duration,
}

impl Sequence {
	/// Creates a sequence, rejecting empty lists and zero-length frames.
	///
	/// # Errors
	///
	/// Returns [`SequenceError::Empty`] when `frames` is empty and
	/// [`SequenceError::ZeroDuration`] when any frame has no duration.
	pub fn new(frames: Vec<Frame>, looping: bool) -> Result<Self, SequenceError> {
		if frames.is_empty() {
			return Err(SequenceError::Empty);
		}

		if let Some(index) = frames.iter().position(|frame| frame.duration.is_zero()) {
			return Err(SequenceError::ZeroDuration {
				index,
			});
		}

		let period = frames.iter().map(|frame| frame.duration).sum();
		Ok(Self {
			frames,
			looping,
			period,
		})
	}

	/// Creates a sequence that wraps back to its first frame.
	///
	/// # Errors
	///
	/// See [`Sequence::new`].
	pub fn cyclic(frames: Vec<Frame>) -> Result<Self, SequenceError> {
		Self::new(frames, true)
	}

	/// Creates a sequence that holds its last frame once played.
	///
	/// # Errors
	///
	/// See [`Sequence::new`].
	pub fn finite(frames: Vec<Frame>) -> Result<Self, SequenceError> {
		Self::new(frames, false)
	}

	/// Returns the frames of the sequence.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the frame at `index`, if any.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns the number of frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Always `false`; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Index of the last frame.
	pub fn last_index(&self) -> usize {
		self.frames.len() - 1
	}

	/// Returns `true` if the sequence wraps instead of holding.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// Total duration of one pass over the sequence.
	pub fn period(&self) -> Duration {
		self.period
	}

	/// Iterates over every frame id the sequence displays.
	pub fn frame_ids(&self) -> impl Iterator<Item = FrameId> + '_ {
		self.frames.iter().map(|frame| frame.frame_id)
	}
}

impl std::fmt::Display for Sequence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mode = if self.looping {
			"cyclic"
		} else {
			"hold"
		};
		write!(f, "Sequence({} frames, {}ms, {})", self.frames.len(), self.period.as_millis(), mode)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_sequence_rejected() {
		assert_eq!(Sequence::cyclic(Vec::new()), Err(SequenceError::Empty));
	}

	#[test]
	fn test_zero_duration_rejected() {
		let frames = vec![Frame::new(1, 10), Frame::new(2, 0)];
		assert_eq!(
			Sequence::finite(frames),
			Err(SequenceError::ZeroDuration {
				index: 1
			})
		);
	}

	#[test]
	fn test_period_sums_durations() {
		let seq = Sequence::cyclic(vec![
			Frame::new(20, 125),
			Frame::new(21, 50),
			Frame::new(22, 200),
			Frame::new(23, 50),
			Frame::new(19, 125),
		])
		.unwrap();

		assert_eq!(seq.period(), Duration::from_millis(550));
		assert_eq!(seq.last_index(), 4);
		assert_eq!(seq.frame_ids().collect::<Vec<_>>(), vec![20, 21, 22, 23, 19]);
	}
}
