//! Error types for controller configuration.
//!
//! The error taxonomy is deliberately narrow: gesture-driven transitions are
//! total functions of (state, event, configuration) and cannot fail, so the
//! only rejected input is a misconfiguration, reported synchronously at the
//! call that caused it. Everything else in the misuse space (double disable,
//! returning with no saved start, replacing regions mid-session) is a
//! documented silent no-op.

use thiserror::Error;

/// Errors that can occur while configuring a [`DragController`].
///
/// [`DragController`]: crate::DragController
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The return animation duration must be a finite, non-negative number
    /// of seconds.
    #[error("invalid animation duration: {0} (must be finite and >= 0)")]
    InvalidAnimationDuration(f32),
}

/// Result type alias for configuration calls.
pub type ConfigResult<T> = Result<T, ConfigError>;
