//! The drag controller and its gesture handlers.
//!
//! This module implements the interaction logic: translating a pointer
//! gesture into element movement, tracking drop-region overlap, and emitting
//! observer notifications in state-machine order.
//!
//! ## Architecture
//!
//! The controller uses an explicit state machine ([`DragPhase`]) to track
//! the current interaction phase. Gesture handling is split one file per
//! event kind:
//!
//! - `state` - drag phase enum and helper methods
//! - `pointer_down` - session start (grab offset capture, begin notification)
//! - `drag` - pointer move handling (mode masking, hover detection)
//! - `pointer_up` - release and cancel (drop decision, return scheduling)

mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::DragPhase;

use crate::animation::{AnimationTicket, ReturnAnimator};
use crate::element::Draggable;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Point;
use crate::observer::DragObserver;
use crate::region_index::RegionIndex;
use crate::types::{DragConfig, DragMode, DropRegion};
use tracing::debug;

/// Drives drag-and-drop behavior for exactly one element.
///
/// The controller owns the drag mode, the remembered starting position, the
/// ordered drop-region set, and the observer; the host owns the element and
/// lends it into each call. Construct one controller per draggable element
/// and feed it the platform's pointer stream:
///
/// ```ignore
/// let mut controller = DragController::new(Box::new(MyAnimator));
/// controller.enable_with(regions, Box::new(MyObserver));
///
/// // in the host's event loop:
/// controller.pointer_down(&mut element, pos);
/// controller.pointer_move(&mut element, pos);
/// controller.pointer_up(&mut element, pos);
/// ```
pub struct DragController {
    enabled: bool,
    mode: DragMode,
    return_duration: f32,
    start: Option<Point>,
    regions: RegionIndex,
    observer: Option<Box<dyn DragObserver>>,
    animator: Box<dyn ReturnAnimator>,
    phase: DragPhase,
    next_ticket: u64,
}

impl DragController {
    /// Create a controller with the default configuration. Dragging stays
    /// inert until [`enable`](Self::enable) or
    /// [`enable_with`](Self::enable_with) is called.
    pub fn new(animator: Box<dyn ReturnAnimator>) -> Self {
        Self::with_config(DragConfig::default(), animator)
    }

    /// Create a controller with an explicit configuration.
    pub fn with_config(config: DragConfig, animator: Box<dyn ReturnAnimator>) -> Self {
        Self {
            enabled: false,
            mode: config.mode,
            return_duration: config.return_duration.max(0.0),
            start: None,
            regions: RegionIndex::new(),
            observer: None,
            animator,
            phase: DragPhase::Idle,
            next_ticket: 0,
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Enable dragging with no drop regions and no observer. Every release
    /// is treated as "dropped nowhere". Replaces any prior registration.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.regions.clear();
        self.observer = None;
        // Registration has no side effects: an in-flight session keeps
        // running, but its hover cannot survive an empty region set.
        self.phase.set_hovered(None);
    }

    /// Enable dragging with candidate drop regions and an observer.
    /// Idempotent: calling again replaces the prior registration.
    pub fn enable_with(&mut self, regions: Vec<DropRegion>, observer: Box<dyn DragObserver>) {
        self.enabled = true;
        if let Some(hovered) = self.phase.hovered_region() {
            if !regions.iter().any(|region| region.id == hovered) {
                self.phase.set_hovered(None);
            }
        }
        self.regions.replace(regions);
        self.observer = Some(observer);
    }

    /// Detach gesture handling. An in-flight drag session is cancelled as if
    /// the pointer was released outside all regions (one terminal
    /// notification, no return animation); an in-flight return animation is
    /// cancelled without its completion notification. No-op when already
    /// disabled.
    pub fn disable(&mut self, element: &mut dyn Draggable) {
        if !self.enabled {
            return;
        }

        match self.phase {
            DragPhase::Dragging { .. } => {
                debug!("drag session cancelled by disable");
                self.phase.reset();
                self.notify_ended_outside(element);
            }
            DragPhase::Returning { ticket, .. } => {
                debug!("return animation cancelled by disable");
                self.phase.reset();
                self.animator.cancel(ticket);
            }
            DragPhase::Idle => {}
        }

        self.enabled = false;
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the observer. Notifications already delivered this session
    /// are unaffected; subsequent ones go to the new observer.
    pub fn set_observer(&mut self, observer: Box<dyn DragObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the observer. Subsequent sessions run without notifications.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Change the axis restriction. Takes effect for the next movement
    /// delta; movement already applied this session is not revisited.
    pub fn set_mode(&mut self, mode: DragMode) {
        self.mode = mode;
    }

    /// Replace the candidate drop-region set. If a session is active and the
    /// currently hovered region is absent from the new set, its exit
    /// notification fires before the replacement takes effect.
    pub fn set_drop_regions(&mut self, element: &dyn Draggable, regions: Vec<DropRegion>) {
        if let Some(hovered) = self.phase.hovered_region() {
            if !regions.iter().any(|region| region.id == hovered) {
                if let Some(old) = self.regions.get(hovered) {
                    self.notify_unhover(element, old);
                }
                self.phase.set_hovered(None);
            }
        }
        self.regions.replace(regions);
    }

    /// Set the return animation duration in seconds.
    ///
    /// Zero means instantaneous repositioning (the completion notification
    /// still fires). Negative or non-finite values are rejected and leave
    /// the configuration unchanged.
    pub fn set_animation_duration(&mut self, seconds: f32) -> ConfigResult<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::InvalidAnimationDuration(seconds));
        }
        self.return_duration = seconds;
        Ok(())
    }

    /// When `true`, remember the element's current origin as the starting
    /// position; when `false`, forget any remembered start.
    pub fn save_starting_position(&mut self, element: &dyn Draggable, flag: bool) {
        self.start = if flag { Some(element.origin()) } else { None };
    }

    // ========================================================================
    // Return-to-start
    // ========================================================================

    /// Animate the element back to the remembered starting position, firing
    /// the completion notification on arrival. Silent no-op when no start
    /// was saved or while a drag session is active.
    pub fn move_to_starting_position(&mut self, element: &mut dyn Draggable) {
        if self.phase.is_dragging() {
            return;
        }
        let Some(target) = self.start else {
            return;
        };
        if let Some(stale) = self.phase.return_ticket() {
            self.animator.cancel(stale);
        }
        self.begin_return(element, target);
    }

    /// Deliver a return-animation completion. Called by the host's animation
    /// engine with the ticket it was handed in
    /// [`ReturnAnimator::animate_to`]. Stale tickets (cancelled or
    /// superseded animations) are ignored.
    pub fn on_return_complete(&mut self, element: &mut dyn Draggable, ticket: AnimationTicket) {
        let DragPhase::Returning { ticket: current, target } = self.phase else {
            return;
        };
        if current != ticket {
            return;
        }

        element.set_origin(target);
        self.phase.reset();
        debug!(x = target.x, y = target.y, "element returned to starting position");
        self.notify_returned();
    }

    /// Transition into the return phase, or reposition instantaneously for a
    /// zero duration.
    pub(crate) fn begin_return(&mut self, element: &mut dyn Draggable, target: Point) {
        if self.return_duration == 0.0 {
            element.set_origin(target);
            self.phase.reset();
            self.notify_returned();
            return;
        }

        self.next_ticket += 1;
        let ticket = AnimationTicket(self.next_ticket);
        self.phase = DragPhase::Returning { ticket, target };
        debug!(
            duration = self.return_duration,
            "return animation scheduled"
        );
        self.animator
            .animate_to(element, target, self.return_duration, ticket);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current interaction phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn return_duration(&self) -> f32 {
        self.return_duration
    }

    /// The remembered starting position, if one was saved.
    pub fn starting_position(&self) -> Option<Point> {
        self.start
    }

    /// The candidate drop regions in sequence order.
    pub fn drop_regions(&self) -> &[DropRegion] {
        self.regions.regions()
    }

    // ========================================================================
    // Observer dispatch
    // ========================================================================

    pub(crate) fn notify_began(&mut self, element: &dyn Draggable) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.dragging_did_begin(element);
        }
    }

    pub(crate) fn notify_hover(&mut self, element: &dyn Draggable, region: DropRegion) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.did_hover_over_region(element, &region);
        }
    }

    pub(crate) fn notify_unhover(&mut self, element: &dyn Draggable, region: DropRegion) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.did_unhover_over_region(element, &region);
        }
    }

    pub(crate) fn notify_dropped(&mut self, element: &dyn Draggable, region: DropRegion) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.was_dropped_on_region(element, &region);
        }
    }

    pub(crate) fn notify_ended_outside(&mut self, element: &dyn Draggable) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.dragging_did_end_outside(element);
        }
    }

    pub(crate) fn notify_returned(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.did_return_to_starting_position();
        }
    }

    /// Consult the return veto. Defaults to `true` without an observer,
    /// matching the optional capability's default.
    pub(crate) fn should_return(&mut self, element: &dyn Draggable) -> bool {
        match self.observer.as_deref_mut() {
            Some(observer) => observer.should_return_to_starting_position(element),
            None => true,
        }
    }
}
