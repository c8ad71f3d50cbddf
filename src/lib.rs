//! # debuggee
//!
//! A deterministic, CPU-bound fixture program for exercising debuggers,
//! profilers, and process-monitoring harnesses.
//!
//! The fixture prints four status markers to standard output with roughly one
//! second of busy-wait delay between consecutive lines, then exits 0. The
//! delays are active computation rather than sleeps, so CPU-usage-based
//! monitors observe a loaded core while the process runs. Two local variables
//! (`x` and `y`) are kept addressable across the run so a debugger can set
//! watchpoints on them.
//!
//! ## Observable contract
//!
//! - stdout is exactly [`EXPECTED_TRANSCRIPT`], each line flushed as it is
//!   written (a harness reading through a pipe sees the lines arrive paced,
//!   not batched at exit);
//! - ~1 second of wall-clock time separates consecutive lines;
//! - nothing is written to standard error;
//! - exit status is 0.
//!
//! ## Quick Start
//!
//! Run the binary and watch the pacing:
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Or drive the script in-process from a harness:
//!
//! ```ignore
//! let mut captured = Vec::new();
//! debuggee::run(&mut captured)?;
//! assert_eq!(captured, debuggee::EXPECTED_TRANSCRIPT.as_bytes());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fixture;
pub mod spin;

// Re-exports for public API
pub use fixture::{run, run_paced, EXPECTED_TRANSCRIPT, STEP_DELAY};
pub use spin::{black_box, spin_for, spin_until, SpinReport};
