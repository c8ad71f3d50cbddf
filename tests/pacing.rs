//! Verifies the wall-clock pacing a harness observes between stdout lines.
//!
//! The fixture flushes each line as it is written, so reading the pipe
//! line-by-line with timestamps measures the delay phases directly.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Each pair of consecutive lines must be separated by at least ~1 second of
/// wall-clock time. The lower bound (0.9s) is the real property; the upper
/// bound only guards against a wedged run on a badly overloaded machine.
#[test]
fn lines_arrive_about_one_second_apart() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_debuggee"))
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn fixture binary");

    let stdout = child.stdout.take().expect("child stdout is piped");
    let reader = BufReader::new(stdout);

    let mut arrivals = Vec::new();
    for line in reader.lines() {
        let line = line.expect("fixture emits valid UTF-8 lines");
        arrivals.push((Instant::now(), line));
    }

    let status = child.wait().expect("fixture did not exit");
    assert!(status.success(), "exit status: {}", status);
    assert_eq!(arrivals.len(), 4, "expected exactly four lines");

    for pair in arrivals.windows(2) {
        let (earlier, before) = &pair[0];
        let (later, after) = &pair[1];
        let gap = later.duration_since(*earlier).as_secs_f64();
        assert!(
            (0.9..=10.0).contains(&gap),
            "gap of {:.2}s between {:?} and {:?}",
            gap,
            before,
            after
        );
    }
}
