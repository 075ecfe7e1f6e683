//! Transform core: Model/View/Projection state and discrete transform operations.
//!
//! # Invariants
//! - Every operation is a total, deterministic matrix computation.
//! - Increments are right-multiplied onto the current matrix; order matters.
//! - The combined transform is recomputed after every mutation, never cached stale.
//! - No windowing or GPU dependency: everything here is plain data.

pub mod operation;
pub mod scene;

pub use operation::{Operation, Target, UnknownOperation};
pub use scene::{
    Axis, SceneTransform, TransformUpdate, apply_operation, combine, look_at, perspective,
};
