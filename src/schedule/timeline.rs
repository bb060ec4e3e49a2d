//! Cursor Timeline Builder - per-line show/hide windows.
//!
//! Given the delay schedule, computes when the single traveling cursor
//! appears on and leaves each line. Non-last lines retain the cursor for
//! `text_gap / 2` after typing, and every line after the first shows it
//! `text_gap / 2` early - the handoff happens at the midpoint of the gap.
//!
//! A simultaneous hide-then-show at the identical instant would be
//! indistinguishable from "never hid", and same-timestamp timer order is
//! unspecified. When a line's show time lands exactly on the previous
//! line's hide time, the show is nudged 1 ms later. The tie condition is
//! strict equality only.

use super::{line_len, TimingConfig};

// =============================================================================
// Cursor Configuration
// =============================================================================

/// Cursor behavior for a typing sequence.
///
/// Passing `None` where a `CursorOptions` is expected disables the cursor
/// entirely - no windows are computed and no timers are armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorOptions {
    /// Show the cursor at t = 0 instead of waiting for the first line's
    /// typing start. Only affects the first line.
    pub show_immediately: bool,
    /// How long the cursor persists after the last line finishes typing.
    /// `None` means forever - the cursor is never hidden.
    pub persistence_duration: Option<u64>,
}

// =============================================================================
// Cursor Window
// =============================================================================

/// One line's cursor ownership window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorWindow {
    /// When the cursor appears on this line.
    pub show_at: u64,
    /// When the cursor leaves this line. `None` only on the last line with
    /// infinite persistence.
    pub hide_at: Option<u64>,
}

// =============================================================================
// Timeline Computation
// =============================================================================

/// Compute the cursor show/hide window of every line.
///
/// `delays` must be the output of
/// [`compute_line_delays`](super::compute_line_delays) for the same `lines`
/// and `timing`.
pub fn compute_cursor_timings(
    lines: &[String],
    delays: &[u64],
    timing: TimingConfig,
    opts: CursorOptions,
) -> Vec<CursorWindow> {
    let last = lines.len().saturating_sub(1);
    let half_gap = timing.text_gap / 2;

    let mut windows: Vec<CursorWindow> = lines
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let typing_start = delays[index];
            let line_duration = line_len(text) * timing.keystroke_duration;

            let mut show_at = typing_start;
            if index > 0 && timing.text_gap > 0 {
                // Anticipatory early show during the gap. Cannot underflow:
                // typing_start already includes the full gap.
                show_at -= half_gap;
            }
            if index == 0 && opts.show_immediately {
                show_at = 0;
            }

            let typing_end = typing_start + line_duration;
            let hide_at = if index == last {
                opts.persistence_duration.map(|p| typing_end + p)
            } else {
                Some(typing_end + half_gap)
            };

            CursorWindow { show_at, hide_at }
        })
        .collect();

    // Collision adjustment: an exact hide/show tie gets a 1 ms nudge so the
    // handoff is observable and same-instant timer order never matters.
    for i in 1..windows.len() {
        if windows[i - 1].hide_at == Some(windows[i].show_at) {
            windows[i].show_at += 1;
        }
    }

    windows
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::compute_line_delays;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn timings(
        texts: &[&str],
        timing: TimingConfig,
        opts: CursorOptions,
    ) -> Vec<CursorWindow> {
        let texts = lines(texts);
        let delays = compute_line_delays(&texts, timing);
        compute_cursor_timings(&texts, &delays, timing, opts)
    }

    #[test]
    fn test_single_line_finite_persistence() {
        let windows = timings(
            &["Test"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 100,
                text_gap: 0,
            },
            CursorOptions {
                show_immediately: false,
                persistence_duration: Some(500),
            },
        );

        // Shows at typing start; hides 500ms after the 40ms of typing.
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].show_at, 100);
        assert_eq!(windows[0].hide_at, Some(640));
    }

    #[test]
    fn test_single_line_infinite_persistence() {
        let windows = timings(
            &["Test"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 100,
                text_gap: 0,
            },
            CursorOptions {
                show_immediately: false,
                persistence_duration: None,
            },
        );

        assert_eq!(windows[0].show_at, 100);
        assert_eq!(windows[0].hide_at, None);
    }

    #[test]
    fn test_gap_split_between_lines() {
        let windows = timings(
            &["AA", "BB"],
            TimingConfig {
                keystroke_duration: 100,
                delay_offset: 0,
                text_gap: 400,
            },
            CursorOptions {
                show_immediately: true,
                persistence_duration: None,
            },
        );

        // Line 0: visible at t=0 (show_immediately), typing ends at 200,
        // retained until 200 + 200 = 400.
        assert_eq!(windows[0].show_at, 0);
        assert_eq!(windows[0].hide_at, Some(400));

        // Line 1: typing starts at 600, anticipated at 600 - 200 = 400,
        // which collides exactly with line 0's hide - nudged to 401.
        assert_eq!(windows[1].show_at, 401);
        assert_eq!(windows[1].hide_at, None);
    }

    #[test]
    fn test_collision_requires_exact_equality() {
        // Gap of 0 means no anticipation/retention shift; line 1 shows at
        // its typing start which equals line 0's hide - collision.
        let exact = timings(
            &["AB", "CD"],
            TimingConfig {
                keystroke_duration: 50,
                delay_offset: 0,
                text_gap: 0,
            },
            CursorOptions::default(),
        );
        assert_eq!(exact[0].hide_at, Some(100));
        assert_eq!(exact[1].show_at, 101);

        // An odd gap leaves a 1ms natural opening (integer halving), so the
        // nudge must not fire.
        let near = timings(
            &["AB", "CD"],
            TimingConfig {
                keystroke_duration: 50,
                delay_offset: 0,
                text_gap: 5,
            },
            CursorOptions::default(),
        );
        // hide = 100 + 2, show = 105 - 2: off by one, untouched.
        assert_eq!(near[0].hide_at, Some(102));
        assert_eq!(near[1].show_at, 103);
    }

    #[test]
    fn test_show_immediately_only_first_line() {
        let windows = timings(
            &["One", "Two"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 300,
                text_gap: 100,
            },
            CursorOptions {
                show_immediately: true,
                persistence_duration: Some(0),
            },
        );

        assert_eq!(windows[0].show_at, 0);
        // Line 1 anticipates normally: 430 - 50 = 380, which lands exactly
        // on line 0's hide (330 + 50) and picks up the 1ms nudge.
        assert_eq!(windows[0].hide_at, Some(380));
        assert_eq!(windows[1].show_at, 381);
    }

    #[test]
    fn test_zero_persistence_hides_at_completion() {
        let windows = timings(
            &["Quick"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 0,
                text_gap: 0,
            },
            CursorOptions {
                show_immediately: true,
                persistence_duration: Some(0),
            },
        );

        assert_eq!(windows[0].hide_at, Some(50));
    }

    #[test]
    fn test_production_haiku_shape() {
        // The landing page's real constants, from the original suite.
        let windows = timings(
            &["Product · Development", "Intelligent Guidance"],
            TimingConfig {
                keystroke_duration: 24,
                delay_offset: 1000,
                text_gap: 2000,
            },
            CursorOptions {
                show_immediately: false,
                persistence_duration: Some(3000),
            },
        );

        // Line 0: 21 graphemes -> typing 1000..1504, retained to 2504.
        assert_eq!(windows[0].show_at, 1000);
        assert_eq!(windows[0].hide_at, Some(2504));

        // Line 1 starts at 3504, anticipated at 2504 - exact collision,
        // nudged to 2505. Ends at 3504 + 480, persists 3000 more.
        assert_eq!(windows[1].show_at, 2505);
        assert_eq!(windows[1].hide_at, Some(6984));
    }

    #[test]
    fn test_at_most_one_open_window() {
        // Windows never overlap: each hide is <= the next show.
        let windows = timings(
            &["alpha", "beta", "gamma"],
            TimingConfig {
                keystroke_duration: 17,
                delay_offset: 40,
                text_gap: 90,
            },
            CursorOptions::default(),
        );

        for i in 1..windows.len() {
            let hide = windows[i - 1].hide_at.unwrap();
            assert!(hide < windows[i].show_at);
        }
    }
}
