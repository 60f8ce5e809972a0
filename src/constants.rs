//! Crate-wide constants.
//!
//! Centralizes magic numbers to make the interaction behavior
//! self-documenting and easy to tune.

// ============================================================================
// Gesture Tuning
// ============================================================================

/// Pointer travel (in coordinate units, from the pickup point) past which a
/// session counts as a real drag rather than a click.
pub const PICKUP_THRESHOLD: f32 = 5.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Default duration of the return-to-start animation in seconds.
pub const DEFAULT_RETURN_DURATION: f32 = 0.25;
