//! Test helpers: fixture assembly and tree outlines.
//!
//! Use [`join_lines`] to write multi-line CSS fixtures one line per array
//! element, and [`outline`] to capture a built tree as plain text for
//! snapshot-style assertions.

pub mod snapshot;

pub use snapshot::outline;

/// Join fixture lines with `'\n'`, without a trailing newline.
pub fn join_lines(lines: &[&str]) -> String {
    lines.join("\n")
}
