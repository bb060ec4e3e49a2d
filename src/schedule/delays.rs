//! Delay Scheduler - per-line typing start times.
//!
//! Each line starts exactly when the previous line's typing completes, plus
//! one full `text_gap`. The first line starts at `delay_offset`.

use super::line_len;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Timing parameters for a typing sequence, in milliseconds.
///
/// All fields are unsigned: negative durations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Time per grapheme, uniform across all lines.
    pub keystroke_duration: u64,
    /// Delay before the first line begins typing, measured from t = 0.
    pub delay_offset: u64,
    /// Gap between the end of one line's typing and the start of the next.
    ///
    /// Split in half for the cursor handoff: the finishing line keeps the
    /// cursor for the first half, the next line anticipates it for the
    /// second half.
    pub text_gap: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            keystroke_duration: 20,
            delay_offset: 500,
            text_gap: 0,
        }
    }
}

// =============================================================================
// Delay Computation
// =============================================================================

/// Compute the absolute typing start time of every line.
///
/// `delay[0] == delay_offset`; for `i > 0`,
/// `delay[i] == delay[i-1] + len(lines[i-1]) * keystroke_duration + text_gap`.
pub fn compute_line_delays(lines: &[String], timing: TimingConfig) -> Vec<u64> {
    let mut cumulative = timing.delay_offset;

    lines
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let delay = cumulative + if index > 0 { timing.text_gap } else { 0 };
            cumulative = delay + line_len(text) * timing.keystroke_duration;
            delay
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_two_lines_no_gap() {
        let delays = compute_line_delays(
            &lines(&["Hello", "World"]),
            TimingConfig {
                keystroke_duration: 100,
                delay_offset: 500,
                text_gap: 0,
            },
        );

        // First line starts at the offset; second when it finishes.
        assert_eq!(delays, vec![500, 1000]);
    }

    #[test]
    fn test_gap_added_once_per_transition() {
        let delays = compute_line_delays(
            &lines(&["Hi", "Bye"]),
            TimingConfig {
                keystroke_duration: 50,
                delay_offset: 0,
                text_gap: 1000,
            },
        );

        // 0 + (2 * 50) + 1000 = 1100
        assert_eq!(delays, vec![0, 1100]);
    }

    #[test]
    fn test_three_lines() {
        let delays = compute_line_delays(
            &lines(&["A", "BB", "CCC"]),
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 100,
                text_gap: 50,
            },
        );

        // 100, 100 + 10 + 50, 160 + 20 + 50
        assert_eq!(delays, vec![100, 160, 230]);
    }

    #[test]
    fn test_first_line_ignores_gap() {
        let delays = compute_line_delays(
            &lines(&["Solo"]),
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 250,
                text_gap: 5000,
            },
        );

        assert_eq!(delays, vec![250]);
    }

    #[test]
    fn test_empty_line_is_zero_duration() {
        let delays = compute_line_delays(
            &lines(&["", "Content"]),
            TimingConfig {
                keystroke_duration: 40,
                delay_offset: 100,
                text_gap: 60,
            },
        );

        // The empty line contributes nothing but the gap still applies.
        assert_eq!(delays, vec![100, 160]);
    }

    #[test]
    fn test_zero_keystroke_duration() {
        let delays = compute_line_delays(
            &lines(&["Fast", "Faster"]),
            TimingConfig {
                keystroke_duration: 0,
                delay_offset: 100,
                text_gap: 0,
            },
        );

        assert_eq!(delays, vec![100, 100]);
    }

    #[test]
    fn test_monotonicity_with_exact_gap() {
        let texts = lines(&["alpha", "beta", "gamma", ""]);
        let timing = TimingConfig {
            keystroke_duration: 7,
            delay_offset: 13,
            text_gap: 29,
        };
        let delays = compute_line_delays(&texts, timing);

        for i in 1..delays.len() {
            let prev_end = delays[i - 1] + super::line_len(&texts[i - 1]) * 7;
            assert_eq!(delays[i], prev_end + 29);
        }
        assert_eq!(delays[0], 13);
    }
}
