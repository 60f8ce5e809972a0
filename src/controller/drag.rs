//! Pointer move handling - movement deltas and hover detection.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently during a drag (potentially 60+
//! times per second). Key properties of this path:
//! - Early exit outside an active session
//! - O(log n) overlap query via the R-tree region index
//! - At most one hover transition pair per tick
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::PICKUP_THRESHOLD;
use crate::controller::{DragController, DragPhase};
use crate::element::Draggable;
use crate::geometry::Point;
use crate::profile_scope;
use crate::types::DragMode;
use tracing::trace;

impl DragController {
    /// Apply one pointer movement tick: move the element by the
    /// mode-masked delta and update the hovered drop region.
    pub fn pointer_move(&mut self, element: &mut dyn Draggable, position: Point) {
        profile_scope!("pointer_move");

        if !self.enabled {
            return;
        }
        let DragPhase::Dragging {
            grab_offset,
            pickup_pointer,
            hovered,
            past_threshold,
        } = self.phase
        else {
            return;
        };

        if !past_threshold && position.distance(pickup_pointer) > PICKUP_THRESHOLD {
            self.phase.mark_past_threshold();
        }

        // Candidate position = where the grab point tracks the pointer.
        // The mode masks the delta, so a restricted axis stays frozen even
        // if the mode changed mid-session: masking never revisits movement
        // that was already applied.
        let origin = element.origin();
        let delta = (position - grab_offset) - origin;
        let masked = match self.mode {
            DragMode::Normal => delta,
            DragMode::RestrictX => Point::new(0.0, delta.y),
            DragMode::RestrictY => Point::new(delta.x, 0.0),
        };
        element.set_origin(origin + masked);

        self.update_hover(element, hovered);
    }

    /// Recompute the exclusive hover from the element's current bounds and
    /// fire the enter/exit delta against the previous tick.
    fn update_hover(&mut self, element: &dyn Draggable, previous: Option<u64>) {
        profile_scope!("hit_test_regions");

        let hit = self.regions.hit_test(&element.frame());
        let current = hit.map(|region| region.id);
        if current == previous {
            return;
        }

        if let Some(old_id) = previous {
            if let Some(old) = self.regions.get(old_id) {
                trace!(region = old_id, "hover exit");
                self.notify_unhover(element, old);
            }
        }
        if let Some(region) = hit {
            trace!(region = region.id, "hover enter");
            self.notify_hover(element, region);
        }
        self.phase.set_hovered(current);
    }
}
