//! The animation boundary.
//!
//! The controller never interpolates positions itself. When a return
//! animation is needed it hands the host's [`ReturnAnimator`] a target, a
//! duration, and an opaque [`AnimationTicket`]; the host runs the animation
//! with whatever engine it has and reports completion by passing the ticket
//! back to [`DragController::on_return_complete`].
//!
//! Tickets are generation tokens. Disabling the controller (or starting a
//! newer return) invalidates the outstanding ticket, so a completion that
//! arrives late is ignored instead of firing notifications for a session
//! that no longer exists.
//!
//! [`DragController::on_return_complete`]: crate::DragController::on_return_complete

use crate::element::Draggable;
use crate::geometry::Point;

/// Opaque handle identifying one scheduled return animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTicket(pub(crate) u64);

/// Host-supplied "animate position from A to B over duration D, then report
/// completion" primitive.
pub trait ReturnAnimator {
    /// Animate the element from its current origin to `target` over
    /// `duration` seconds, then call
    /// [`DragController::on_return_complete`] with `ticket`.
    ///
    /// Not called for zero durations; the controller repositions
    /// instantaneously in that case.
    ///
    /// [`DragController::on_return_complete`]: crate::DragController::on_return_complete
    fn animate_to(
        &mut self,
        element: &mut dyn Draggable,
        target: Point,
        duration: f32,
        ticket: AnimationTicket,
    );

    /// Stop a scheduled animation early. The element keeps whatever position
    /// it reached; the completion callback for `ticket` must not be
    /// delivered afterwards (a late delivery is tolerated but ignored).
    fn cancel(&mut self, _ticket: AnimationTicket) {}
}
