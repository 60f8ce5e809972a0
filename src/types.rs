//! Core types for the drag-and-drop controller.
//!
//! This module defines the public data model: the axis-restriction mode, the
//! drop-region descriptor, and the construction-time configuration.

use crate::constants::DEFAULT_RETURN_DURATION;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

// ============================================================================
// Drag Mode
// ============================================================================

/// Axis restriction applied to movement deltas during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    /// Both axes follow the pointer.
    #[default]
    Normal,
    /// The horizontal component of movement is frozen.
    RestrictX,
    /// The vertical component of movement is frozen.
    RestrictY,
}

// ============================================================================
// Drop Regions
// ============================================================================

/// One candidate drop target: an identity plus axis-aligned bounds in the
/// shared coordinate space.
///
/// Regions are kept in an ordered sequence; when an element overlaps several
/// at once, the first one in sequence order wins. Duplicate ids are not
/// checked and produce unspecified hover pairing - give every region its own
/// id.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropRegion {
    /// Host-assigned identity, reported back through observer notifications.
    pub id: u64,
    /// Region bounds in the shared coordinate space.
    pub bounds: Rect,
}

impl DropRegion {
    pub fn new(id: u64, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Construction-time configuration for a [`DragController`].
///
/// Every field is also mutable through a controller setter between (or
/// during) sessions.
///
/// [`DragController`]: crate::DragController
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Axis restriction applied to movement deltas.
    pub mode: DragMode,
    /// Duration of the return-to-start animation in seconds. Zero means
    /// instantaneous repositioning (the completion notification still
    /// fires).
    pub return_duration: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            mode: DragMode::Normal,
            return_duration: DEFAULT_RETURN_DURATION,
        }
    }
}
