//! Frame types shared by every animation sequence.

use std::time::Duration;

/// Identifier of a single renderable frame in the tileset.
pub type FrameId = u32;

/// One step of an animation sequence.
///
/// # Examples
///
/// ```
/// use fryline_types::anim::Frame;
///
/// let frame = Frame::new(16, 125);
/// assert_eq!(frame.frame_id, 16);
/// assert_eq!(frame.duration_ms(), 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
	/// Frame to display
	pub frame_id: FrameId,
	/// How long the frame stays on screen
	pub duration: Duration,
}

impl Frame {
	/// Creates a frame shown for `duration_ms` milliseconds.
	pub fn new(frame_id: FrameId, duration_ms: u64) -> Self {
		Self {
			frame_id,
			duration: Duration::from_millis(duration_ms),
		}
	}

	/// Returns the duration in whole milliseconds.
	pub fn duration_ms(&self) -> u128 {
		self.duration.as_millis()
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Frame(id={}, dur={}ms)", self.frame_id, self.duration_ms())
	}
}
