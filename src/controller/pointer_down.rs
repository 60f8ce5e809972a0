//! Pointer down handling - session start.

use crate::controller::DragController;
use crate::element::Draggable;
use crate::geometry::Point;
use crate::profile_scope;
use tracing::debug;

impl DragController {
    /// Start a drag session at `position`.
    ///
    /// Ignored while disabled, while a session is already running, or while
    /// a return animation is in flight (the gesture does not steal the
    /// element back mid-return).
    pub fn pointer_down(&mut self, element: &mut dyn Draggable, position: Point) {
        profile_scope!("pointer_down");

        if !self.enabled || !self.phase.is_idle() {
            return;
        }

        // The element follows the pointer relative to where it was grabbed,
        // not corner-snapped to the pointer position.
        let grab_offset = position - element.origin();
        self.phase.start_dragging(grab_offset, position);

        debug!(x = position.x, y = position.y, "drag session started");
        self.notify_began(element);
    }
}
