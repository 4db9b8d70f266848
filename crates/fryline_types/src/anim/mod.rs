//! Animation data model for tile types.
//!
//! Every tile type carries one [`AnimationSpec`], a closed tagged union:
//!
//! - **None**: the tile always shows its base frame
//! - **Loop**: one cyclic [`Sequence`] that ignores the logical signal
//! - **Pausable**: one cyclic [`Sequence`] that only runs while the signal is on
//!   (conveyors and spinners stop in place when unpowered)
//! - **`StateMachine`**: up to four sequences driven by the on/off signal
//!
//! # State machine layout
//!
//! ```text
//!              rising edge                      on_transition done
//!  OffSteady  ------------->  OnTransition  ------------------------>  OnSteady
//!  (off_anim)                                                          (on_anim)
//!      ^                                                                   |
//!      |       off_transition done                  falling edge          |
//!      +----------------------------  OffTransition  <--------------------+
//! ```
//!
//! Transitions are played once. Steady sequences either wrap (`looping`) or
//! hold their last frame. An edge received during a transition restarts the
//! opposite transition from its first frame.
//!
//! Specs are produced once when the catalog is built (see
//! [`crate::raw::parse_animation`]) and are never re-parsed at tick time.

pub mod frame;
pub mod sequence;
pub mod spec;

pub use self::frame::{Frame, FrameId};
pub use self::sequence::Sequence;
pub use self::spec::{AnimationSpec, SequenceRole, StateMachine};
