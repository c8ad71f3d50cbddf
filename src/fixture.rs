//! The scripted fixture run: four markers, three delays, two watched locals.
//!
//! The script is a fixed linear sequence with no branching:
//!
//! ```text
//! print line 1 -> delay -> x = 5, print line 2 -> delay
//!   -> y = 10, print line 3 -> x = x + y -> delay -> print line 4
//! ```
//!
//! Every line is flushed as soon as it is written. Pipes to a harness are
//! block-buffered, so without the flush an observer would see all four lines
//! at process exit instead of paced ~1 second apart.
//!
//! `x` and `y` exist so an attached debugger has something to watch: they
//! pass through [`black_box`] at initialization and their addresses are
//! exposed before use, keeping them as real stack slots rather than constants
//! folded into the format strings.

use std::io::{self, Write};
use std::time::Duration;

use crate::spin::{black_box, spin_for};

/// Wall-clock delay between consecutive output lines in the canonical run.
pub const STEP_DELAY: Duration = Duration::from_secs(1);

/// The exact bytes the fixture writes to standard output, for harnesses and
/// tests to compare against.
pub const EXPECTED_TRANSCRIPT: &str = "\
******Starting program...
******Initial value of X: 5
******Initial value of Y: 10
******Result: 15
";

/// Run the canonical fixture script with [`STEP_DELAY`] between lines.
///
/// Writes the four marker lines to `out`, flushing after each one, and burns
/// one CPU core during each delay. Write or flush failures propagate; no
/// other error path exists.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    run_paced(out, STEP_DELAY)
}

/// Run the fixture script with a caller-chosen inter-line delay.
///
/// The binary always uses [`STEP_DELAY`]; this seam exists so in-process
/// harness tests can exercise the full script without waiting three seconds.
/// The transcript is identical regardless of pacing.
pub fn run_paced<W: Write>(out: &mut W, step_delay: Duration) -> io::Result<()> {
    writeln!(out, "******Starting program...")?;
    out.flush()?;
    spin_for(step_delay);

    let mut x: i32 = black_box(5);
    writeln!(out, "******Initial value of X: {}", x)?;
    out.flush()?;
    spin_for(step_delay);

    let y: i32 = black_box(10);
    writeln!(out, "******Initial value of Y: {}", y)?;
    out.flush()?;

    // Keep both locals addressable for watchpoints before the update.
    black_box(&x);
    black_box(&y);
    x += y;
    spin_for(step_delay);

    writeln!(out, "******Result: {}", x)?;
    out.flush()
}
