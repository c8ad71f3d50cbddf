//! Fixture binary: no arguments, no configuration, one linear script.
//!
//! A failed stdout write is the only way out other than success; it surfaces
//! as a nonzero exit, matching the absence of any recovery logic in the
//! script itself.

use std::io;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    debuggee::run(&mut out)
}
