//! The observer boundary.
//!
//! Hosts implement [`DragObserver`] to be informed of session lifecycle
//! transitions. Only the drop notification is required; every other member
//! has a default no-op implementation, mirroring a required/optional
//! capability split. All notifications are delivered synchronously on the
//! thread driving the gesture, in state-machine order, never batched.

use crate::element::Draggable;
use crate::types::DropRegion;

/// Receives drag-session lifecycle notifications from a [`DragController`].
///
/// Sequencing guarantees per session:
/// - [`dragging_did_begin`] fires exactly once, at pointer-down;
/// - [`did_hover_over_region`] / [`did_unhover_over_region`] strictly
///   alternate per region, starting with hover; a terminal drop or cancel
///   may close an open hover without an unhover;
/// - exactly one of [`was_dropped_on_region`] /
///   [`dragging_did_end_outside`] fires per completed session;
/// - [`should_return_to_starting_position`] is consulted at most once, at
///   release, after the terminal notification; the answer is final even if
///   the observer is replaced before the animation starts;
/// - [`did_return_to_starting_position`] fires once when a return animation
///   (or instantaneous repositioning) completes, and never after the
///   controller was disabled mid-flight.
///
/// [`dragging_did_begin`]: DragObserver::dragging_did_begin
/// [`did_hover_over_region`]: DragObserver::did_hover_over_region
/// [`did_unhover_over_region`]: DragObserver::did_unhover_over_region
/// [`was_dropped_on_region`]: DragObserver::was_dropped_on_region
/// [`dragging_did_end_outside`]: DragObserver::dragging_did_end_outside
/// [`should_return_to_starting_position`]: DragObserver::should_return_to_starting_position
/// [`did_return_to_starting_position`]: DragObserver::did_return_to_starting_position
/// [`DragController`]: crate::DragController
pub trait DragObserver {
    /// The element was released while hovering over `region`. Required.
    fn was_dropped_on_region(&mut self, element: &dyn Draggable, region: &DropRegion);

    /// Whether the element should animate back to its remembered starting
    /// position after this session. Defaults to `true`. A `true` answer
    /// with no saved starting position leaves the element where it is.
    fn should_return_to_starting_position(&mut self, _element: &dyn Draggable) -> bool {
        true
    }

    /// The return animation (or instantaneous repositioning) finished and
    /// the element is back at its starting position.
    fn did_return_to_starting_position(&mut self) {}

    /// A drag session started (pointer down on the element).
    fn dragging_did_begin(&mut self, _element: &dyn Draggable) {}

    /// The element was released without hovering over any drop region.
    fn dragging_did_end_outside(&mut self, _element: &dyn Draggable) {}

    /// The element started overlapping `region` (the exclusive hover moved
    /// onto it).
    fn did_hover_over_region(&mut self, _element: &dyn Draggable, _region: &DropRegion) {}

    /// The element stopped overlapping `region` while the drag continues.
    fn did_unhover_over_region(&mut self, _element: &dyn Draggable, _region: &DropRegion) {}
}
