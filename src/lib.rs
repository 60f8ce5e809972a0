//! Drag-and-drop interaction controller for windowed GUI applications.
//!
//! This crate implements the interaction logic of drag-and-drop - picking up
//! a view under a pointer gesture, moving it with the gesture (optionally
//! restricted to one axis), detecting which of several drop regions it
//! overlaps, and notifying an observer of drop, hover, and cancellation
//! events. On release the element either stays at the drop location or
//! animates back to a remembered starting position.
//!
//! ## Architecture
//!
//! The crate is host-framework-agnostic: everything that touches a real UI
//! toolkit is a trait the host implements.
//!
//! - [`DragController`] - one per draggable element; owns the drag mode,
//!   the drop-region set, the observer, and the session state machine.
//! - [`Draggable`] - the element boundary (origin get/set, size). The host
//!   owns the view and lends it into each event call.
//! - [`DragObserver`] - lifecycle notifications; only the drop notification
//!   is required, everything else defaults to a no-op.
//! - [`ReturnAnimator`] - the animation boundary ("animate to B over D
//!   seconds, then report completion"); the crate never interpolates.
//!
//! The host wires its pointer stream into the controller's
//! `pointer_down` / `pointer_move` / `pointer_up` / `pointer_cancel`
//! handlers; all processing is synchronous on the calling thread.

pub mod animation;
pub mod constants;
pub mod controller;
pub mod element;
pub mod error;
pub mod geometry;
pub mod observer;
pub mod perf;
pub mod region_index;
pub mod types;

pub use animation::{AnimationTicket, ReturnAnimator};
pub use controller::{DragController, DragPhase};
pub use element::Draggable;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Point, Rect, Size};
pub use observer::DragObserver;
pub use region_index::RegionIndex;
pub use types::{DragConfig, DragMode, DropRegion};
