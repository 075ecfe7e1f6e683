//! Input dispatch: keyboard and mouse state mapped onto transform operations.
//!
//! # Invariants
//! - Held keys are level-triggered: each active binding yields one operation per tick.
//! - Dispatch order is camera bindings, then object bindings, then mouse dolly.
//! - Lighting and close actions are edge-triggered, once per key press.
//! - No windowing backend types appear here; apps map their key codes onto [`Key`].

pub mod action;
pub mod bindings;
pub mod clock;
pub mod key;
pub mod state;

pub use action::{Action, key_action};
pub use bindings::{CAMERA_BINDINGS, OBJECT_BINDINGS, frame_operations};
pub use clock::{FrameClock, MAX_TICKS_PER_FRAME};
pub use key::Key;
pub use state::{InputState, VerticalMotion};
