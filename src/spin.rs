//! CPU-bound busy-wait delays with a wall-clock deadline.
//!
//! The delay is active computation, not a sleep: each pass sums
//! `sin(i) * cos(i)` over a fixed inner range, and passes repeat until
//! `Instant::now()` reaches the deadline. The accumulator is routed through
//! [`black_box`] after every pass so the optimizer cannot prove the work dead
//! and delete the loop. There is no yield, sleep, or blocking primitive
//! anywhere on the path; the calling thread keeps one core loaded for the
//! whole delay.
//!
//! The deadline is a real monotonic-clock comparison, never an iteration
//! count, so elapsed time tracks the requested duration regardless of how
//! fast the machine grinds through passes.

use std::hint::black_box as std_black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Iterations per inner pass. One pass is the granularity at which the
/// deadline is re-checked; on current hardware it costs a few milliseconds,
/// so actual delays overshoot the deadline by at most that much.
pub const PASS_ITERATIONS: u32 = 1_000_000;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// The spin loop's accumulator and the fixture's watched variables are routed
/// through this so they stay live and addressable instead of being folded
/// away as unused constants.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// What a completed delay actually did.
///
/// The trigonometric accumulator itself is discarded (its numeric value is
/// irrelevant to correctness); this report carries the observable facts a
/// harness might want to log or assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinReport {
    /// Duration the caller asked for.
    pub requested: Duration,
    /// Wall-clock time the delay actually took. Always at least `requested`;
    /// the overshoot is bounded by the cost of one inner pass.
    pub elapsed: Duration,
    /// Number of completed inner passes. Zero for an already-expired
    /// deadline, at least one otherwise.
    pub passes: u64,
}

/// Burn CPU on the calling thread for `duration` of wall-clock time.
///
/// Blocks without yielding. A zero duration returns almost immediately with
/// zero passes.
pub fn spin_for(duration: Duration) -> SpinReport {
    let start = Instant::now();
    let passes = burn(start + duration);
    SpinReport {
        requested: duration,
        elapsed: start.elapsed(),
        passes,
    }
}

/// Burn CPU on the calling thread until `deadline`.
///
/// A deadline at or before the current instant returns almost immediately
/// with zero passes and a zero `requested` duration.
pub fn spin_until(deadline: Instant) -> SpinReport {
    let start = Instant::now();
    let requested = deadline.saturating_duration_since(start);
    let passes = burn(deadline);
    SpinReport {
        requested,
        elapsed: start.elapsed(),
        passes,
    }
}

/// The spin loop itself: trig passes until the deadline, accumulator kept
/// live via `black_box`.
fn burn(deadline: Instant) -> u64 {
    let mut passes = 0u64;
    while Instant::now() < deadline {
        let mut acc = 0.0f64;
        for i in 1..PASS_ITERATIONS {
            let arg = f64::from(i);
            acc += arg.sin() * arg.cos();
        }
        black_box(acc);
        passes += 1;
    }
    passes
}
