//! Schedule Module - Pure timing math for the typing sequence.
//!
//! Converts a line list plus timing parameters into the two derived tables
//! everything downstream consumes:
//!
//! - [`delays`] - per-line absolute typing start times
//! - [`timeline`] - per-line cursor show/hide windows
//!
//! All times are integer milliseconds measured from a shared animation start
//! (t = 0). The whole schedule is computed once per configuration; only the
//! runtime ([`crate::state::scheduler`]) deals with wall-clock time.

mod delays;
mod timeline;

pub use delays::{compute_line_delays, TimingConfig};
pub use timeline::{compute_cursor_timings, CursorOptions, CursorWindow};

use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Errors
// =============================================================================

/// Configuration rejected before any schedule is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The line list was empty. A sequence needs at least one line.
    #[error("a typing sequence requires at least one line")]
    NoLines,
}

// =============================================================================
// Line Length
// =============================================================================

/// Typed length of a line: one keystroke per grapheme cluster.
///
/// Grapheme-based so a multibyte cluster ("é", a flag emoji) costs one
/// keystroke and is never revealed half-way.
pub fn line_len(text: &str) -> u64 {
    text.graphemes(true).count() as u64
}

// =============================================================================
// Sequence Timings
// =============================================================================

/// The complete derived schedule for one configuration.
///
/// Produced by [`SequenceTimings::compute`], the single validated
/// configuration step. Recomputing with identical inputs yields identical
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTimings {
    delays: Vec<u64>,
    windows: Option<Vec<CursorWindow>>,
    completion: u64,
}

impl SequenceTimings {
    /// Validate a configuration and compute its schedule.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoLines`] if `lines` is empty. No partial schedule is
    /// produced on error.
    pub fn compute(
        lines: &[String],
        timing: TimingConfig,
        cursor: Option<CursorOptions>,
    ) -> Result<Self, ConfigError> {
        if lines.is_empty() {
            return Err(ConfigError::NoLines);
        }

        let delays = compute_line_delays(lines, timing);
        let windows =
            cursor.map(|opts| compute_cursor_timings(lines, &delays, timing, opts));

        // The instant the final line finishes typing.
        let last = delays.len() - 1;
        let completion = delays[last] + line_len(&lines[last]) * timing.keystroke_duration;

        Ok(Self {
            delays,
            windows,
            completion,
        })
    }

    /// Per-line absolute typing start times.
    pub fn delays(&self) -> &[u64] {
        &self.delays
    }

    /// Per-line cursor windows, or None when the cursor is disabled.
    pub fn windows(&self) -> Option<&[CursorWindow]> {
        self.windows.as_deref()
    }

    /// The instant the last line finishes typing.
    ///
    /// Callers chain follow-on animations off this value.
    pub fn completion_time(&self) -> u64 {
        self.completion
    }
}

// =============================================================================
// Tests
// =============================================================================
