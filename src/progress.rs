//! Fixed-width console progress bar.
//!
//! `format_progress` is the pure formatting half; `render_progress` writes
//! the line to stdout behind a carriage return so successive calls overwrite
//! the previous display in place. Out-of-range and non-finite inputs are
//! clamped and annotated rather than rejected, so a bad fraction never
//! interrupts a running batch.

use std::io::Write;

const BAR_LENGTH: usize = 20;

/// Render `progress` (a fraction in `[0, 1]`) as a fixed-width bar line.
///
/// Inputs are coerced in order: non-finite values clamp to `0.0` with an
/// error status, negatives clamp to `0.0` with `Halt...`, and values at or
/// above `1.0` clamp to `1.0` with `Done...`. The percentage is truncated
/// to one decimal place, not rounded.
pub fn format_progress(progress: f64) -> String {
    let (progress, status) = if !progress.is_finite() {
        (0.0, "error: progress var must be float")
    } else if progress < 0.0 {
        (0.0, "Halt...")
    } else if progress >= 1.0 {
        (1.0, "Done...")
    } else {
        (progress, "")
    };

    let filled = (BAR_LENGTH as f64 * progress).round() as usize;
    let bar = "#".repeat(filled) + &"-".repeat(BAR_LENGTH - filled);
    let percent = (progress * 1000.0).floor() / 10.0;

    format!("Percent: [{bar}] {percent:.1}% {status}")
}

/// Write the progress line to stdout, overwriting the previous one.
///
/// No trailing newline is emitted; the leading `\r` returns the cursor so
/// the next call replaces this display. Write failures on stdout are
/// ignored, display is best-effort.
pub fn render_progress(progress: f64) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "\r{}", format_progress(progress));
    let _ = stdout.flush();
}
