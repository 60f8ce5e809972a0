//! Drag session state machine.
//!
//! A single explicit enum tracks the controller's interaction phase, making
//! impossible states unrepresentable (no drifting boolean flags).
//!
//! ## State Transitions
//!
//! ```text
//! Idle      -> Dragging   (pointer down; grab offset captured)
//! Dragging  -> Dragging   (pointer move; masked delta applied, hover updated)
//! Dragging  -> Returning  (release with a saved start and a true veto)
//! Dragging  -> Idle       (release without a return; disable; cancel)
//! Returning -> Idle       (animation completion ticket delivered; disable)
//! Idle      -> Returning  (explicit move_to_starting_position)
//! ```

use crate::animation::AnimationTicket;
use crate::geometry::Point;

/// Interaction phase of one [`DragController`].
///
/// The `Dragging` variant is the live session: it exists only between
/// pointer-down and pointer-up/cancel and carries everything the move ticks
/// need.
///
/// [`DragController`]: crate::DragController
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// No active session.
    Idle,

    /// A pointer gesture is moving the element.
    Dragging {
        /// Pointer position minus element origin, captured at pickup; keeps
        /// the element from snapping its corner to the pointer.
        grab_offset: Point,
        /// Pointer position at pickup, for threshold measurement.
        pickup_pointer: Point,
        /// Id of the drop region the element currently overlaps, if any.
        /// At most one region is hovered at a time.
        hovered: Option<u64>,
        /// Whether pointer travel has exceeded the pickup threshold at some
        /// point during this session. Latches on.
        past_threshold: bool,
    },

    /// A return-to-start animation is in flight.
    Returning {
        /// Ticket identifying the scheduled animation; stale completions
        /// are ignored.
        ticket: AnimationTicket,
        /// The remembered starting position being returned to.
        target: Point,
    },
}

impl Default for DragPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragPhase {
    /// Returns true if no session or animation is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a pointer gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if a return animation is in flight.
    pub fn is_returning(&self) -> bool {
        matches!(self, Self::Returning { .. })
    }

    /// Id of the currently hovered drop region, if dragging over one.
    pub fn hovered_region(&self) -> Option<u64> {
        match self {
            Self::Dragging { hovered, .. } => *hovered,
            _ => None,
        }
    }

    /// Whether this session's pointer travel has exceeded the pickup
    /// threshold.
    pub fn past_threshold(&self) -> bool {
        matches!(self, Self::Dragging { past_threshold: true, .. })
    }

    /// The in-flight return animation ticket, if any.
    pub fn return_ticket(&self) -> Option<AnimationTicket> {
        match self {
            Self::Returning { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Start a session at pointer-down.
    pub fn start_dragging(&mut self, grab_offset: Point, pickup_pointer: Point) {
        *self = Self::Dragging {
            grab_offset,
            pickup_pointer,
            hovered: None,
            past_threshold: false,
        };
    }

    /// Update the hovered region during a session.
    pub fn set_hovered(&mut self, region: Option<u64>) {
        if let Self::Dragging { hovered, .. } = self {
            *hovered = region;
        }
    }

    /// Latch the pickup threshold flag.
    pub fn mark_past_threshold(&mut self) {
        if let Self::Dragging { past_threshold, .. } = self {
            *past_threshold = true;
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
