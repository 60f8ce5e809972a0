//! The element boundary.
//!
//! The host owns the view being dragged and lends it to the controller for
//! the duration of each event call. The controller only needs to read and
//! write the element's origin and read its size; everything else about the
//! view (rendering, hierarchy, identity) stays on the host side.

use crate::geometry::{Point, Rect, Size};

/// A view that a [`DragController`] can move around.
///
/// [`DragController`]: crate::DragController
pub trait Draggable {
    /// Current top-left corner in the shared coordinate space.
    fn origin(&self) -> Point;

    /// Reposition the element. Called on every applied movement delta and
    /// when a return animation completes.
    fn set_origin(&mut self, origin: Point);

    /// Current size, used for overlap tests against drop regions.
    fn size(&self) -> Size;

    /// Current bounds, derived from origin and size.
    fn frame(&self) -> Rect {
        Rect {
            origin: self.origin(),
            size: self.size(),
        }
    }
}
