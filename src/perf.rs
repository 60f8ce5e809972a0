//! Lightweight timing instrumentation for the gesture hot path.
//!
//! Pointer-move is called very frequently during a drag (60+ times per
//! second), so the handlers time themselves with [`profile_scope!`] when the
//! `profiling` cargo feature is enabled. Without the feature the macro
//! compiles to nothing.
//!
//! # Usage
//! ```ignore
//! use dragdrop::profile_scope;
//!
//! fn pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Threshold above which a scope logs a warning rather than a trace line.
/// One frame at 60 FPS.
pub const SLOW_SCOPE_MS: f64 = 16.67;

/// Time a scope with a warning threshold. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Times a scope from construction to drop.
///
/// Scopes that finish under the threshold log at `trace` level (profiling
/// builds only); scopes over it always log a warning.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        if elapsed_ms > self.threshold_ms {
            warn!(
                "[PERF] {} took {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed_ms, self.threshold_ms
            );
        } else {
            #[cfg(feature = "profiling")]
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
