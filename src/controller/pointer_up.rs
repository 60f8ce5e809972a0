//! Pointer up and cancel handling - drop decision and return scheduling.

use crate::controller::DragController;
use crate::element::Draggable;
use crate::geometry::Point;
use crate::profile_scope;
use tracing::debug;

impl DragController {
    /// End the drag session at `position`.
    ///
    /// Fires exactly one terminal notification - the drop notification when
    /// a region is hovered at release, otherwise the ended-outside one -
    /// then consults the return veto and, if a starting position is
    /// remembered, schedules the return animation.
    pub fn pointer_up(&mut self, element: &mut dyn Draggable, position: Point) {
        profile_scope!("pointer_up");

        if !self.enabled || !self.phase.is_dragging() {
            return;
        }

        debug!(x = position.x, y = position.y, "drag session released");
        let hovered = self.phase.hovered_region();
        self.finish_session(element, hovered);
    }

    /// The platform revoked the gesture (touch cancelled, window lost
    /// focus). Treated as a release outside all regions.
    pub fn pointer_cancel(&mut self, element: &mut dyn Draggable) {
        if !self.enabled || !self.phase.is_dragging() {
            return;
        }

        debug!("drag session cancelled by platform");
        self.finish_session(element, None);
    }

    /// Shared release path: terminal notification, veto, return decision.
    fn finish_session(&mut self, element: &mut dyn Draggable, dropped_on: Option<u64>) {
        let region = dropped_on.and_then(|id| self.regions.get(id));
        self.phase.reset();

        match region {
            Some(region) => {
                debug!(region = region.id, "dropped on region");
                self.notify_dropped(element, region);
            }
            None => {
                debug!("released outside all regions");
                self.notify_ended_outside(element);
            }
        }

        // The veto answer captured here is final; replacing the observer
        // before the animation starts does not re-query it.
        if self.should_return(element) {
            if let Some(target) = self.start {
                self.begin_return(element, target);
            }
        }
    }
}
