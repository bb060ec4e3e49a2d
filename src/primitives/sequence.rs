//! Sequenced Typing Text - the composed multi-line component.
//!
//! Wires the pure schedule ([`SequenceTimings`]) to the runtime pieces: one
//! [`TypingLine`] per line of text and, when a cursor is configured, one
//! [`CursorScheduler`]. Everything advances from a single `tick` so the
//! reveal and the cursor can never drift apart.
//!
//! Only one cursor exists at a time, traveling from line to line as each
//! finishes typing.
//!
//! # Example
//!
//! ```ignore
//! use zendient_tui::primitives::{SequenceProps, SequencedTypingText};
//! use zendient_tui::schedule::{CursorOptions, TimingConfig};
//!
//! let seq = SequencedTypingText::new(SequenceProps {
//!     lines: vec!["First light".into(), "on still water".into()],
//!     timing: TimingConfig::default(),
//!     cursor: Some(CursorOptions::default()),
//!     reserve_space: true,
//! })?;
//!
//! // In the event loop:
//! seq.tick(clock.elapsed_ms());
//! let owner = seq.cursor_line();
//! ```

use crate::schedule::{ConfigError, CursorOptions, SequenceTimings, TimingConfig};
use crate::state::CursorScheduler;

use super::typing_text::TypingLine;

// =============================================================================
// Props
// =============================================================================

/// Configuration for a [`SequencedTypingText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceProps {
    /// The lines to type, in display order. Must not be empty.
    pub lines: Vec<String>,
    /// Timing parameters shared by all lines.
    pub timing: TimingConfig,
    /// Cursor behavior; `None` disables the cursor entirely.
    pub cursor: Option<CursorOptions>,
    /// Layout hint: reserve vertical space for all lines up front to
    /// prevent the page shifting as lines appear. Purely presentational.
    pub reserve_space: bool,
}

impl Default for SequenceProps {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            timing: TimingConfig::default(),
            cursor: None,
            reserve_space: false,
        }
    }
}

// =============================================================================
// Sequenced Typing Text
// =============================================================================

/// A sequence of typing lines with one traveling cursor.
pub struct SequencedTypingText {
    lines: Vec<TypingLine>,
    scheduler: Option<CursorScheduler>,
    timings: SequenceTimings,
    reserve_space: bool,
}

impl SequencedTypingText {
    /// Validate `props` and build the component with its schedule armed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoLines`] if `props.lines` is empty; nothing is armed
    /// on error.
    pub fn new(props: SequenceProps) -> Result<Self, ConfigError> {
        let timings = SequenceTimings::compute(&props.lines, props.timing, props.cursor)?;

        let lines = Self::build_lines(&props, &timings);
        let scheduler = timings.windows().map(|windows| {
            let scheduler = CursorScheduler::new();
            scheduler.arm(windows);
            scheduler
        });

        Ok(Self {
            lines,
            scheduler,
            timings,
            reserve_space: props.reserve_space,
        })
    }

    fn build_lines(props: &SequenceProps, timings: &SequenceTimings) -> Vec<TypingLine> {
        props
            .lines
            .iter()
            .zip(timings.delays())
            .map(|(text, &delay)| {
                TypingLine::new(text.clone(), delay, props.timing.keystroke_duration)
            })
            .collect()
    }

    /// Replace the configuration.
    ///
    /// Validates first - on error the existing schedule keeps running
    /// untouched. On success every pending cursor timer is cancelled and
    /// the whole animation restarts from t = 0 with fresh timings.
    pub fn configure(&mut self, props: SequenceProps) -> Result<(), ConfigError> {
        let timings = SequenceTimings::compute(&props.lines, props.timing, props.cursor)?;

        self.lines = Self::build_lines(&props, &timings);
        match timings.windows() {
            Some(windows) => {
                if let Some(scheduler) = &self.scheduler {
                    scheduler.arm(windows);
                } else {
                    let scheduler = CursorScheduler::new();
                    scheduler.arm(windows);
                    self.scheduler = Some(scheduler);
                }
            }
            // Cursor removed: dropping the scheduler cancels its timers.
            None => self.scheduler = None,
        }
        self.timings = timings;
        self.reserve_space = props.reserve_space;
        Ok(())
    }

    /// Advance every line and the cursor to `now` (ms since animation
    /// start).
    pub fn tick(&self, now: u64) {
        for line in &self.lines {
            line.tick(now);
        }
        if let Some(scheduler) = &self.scheduler {
            scheduler.tick(now);
        }
    }

    /// The line currently displaying the cursor, if any.
    pub fn cursor_line(&self) -> Option<usize> {
        self.scheduler.as_ref().and_then(CursorScheduler::owner)
    }

    /// The lines, in display order.
    pub fn lines(&self) -> &[TypingLine] {
        &self.lines
    }

    /// One line by index.
    pub fn line(&self, index: usize) -> &TypingLine {
        &self.lines[index]
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The derived schedule for this configuration.
    pub fn timings(&self) -> &SequenceTimings {
        &self.timings
    }

    /// The instant the last line finishes typing. Follow-on animations
    /// chain off this.
    pub fn completion_time(&self) -> u64 {
        self.timings.completion_time()
    }

    /// Rows to reserve up front, if the layout hint is set.
    pub fn reserved_height(&self) -> Option<usize> {
        self.reserve_space.then_some(self.lines.len())
    }

    /// Tear down, cancelling all pending cursor timers.
    pub fn dispose(mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.dispose();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn props(texts: &[&str], timing: TimingConfig, cursor: Option<CursorOptions>) -> SequenceProps {
        SequenceProps {
            lines: texts.iter().map(|t| t.to_string()).collect(),
            timing,
            cursor,
            reserve_space: false,
        }
    }

    #[test]
    fn test_empty_lines_rejected() {
        let result = SequencedTypingText::new(SequenceProps::default());
        assert_eq!(result.err(), Some(ConfigError::NoLines));
    }

    #[test]
    fn test_lines_inherit_schedule_delays() {
        let seq = SequencedTypingText::new(props(
            &["Hello", "World"],
            TimingConfig {
                keystroke_duration: 100,
                delay_offset: 500,
                text_gap: 0,
            },
            None,
        ))
        .unwrap();

        assert_eq!(seq.timings().delays(), &[500, 1000]);

        // Nothing revealed before the offset.
        seq.tick(499);
        assert_eq!(seq.line(0).displayed().get(), "");

        // Line 0 types over 500..1000; line 1 starts as it ends.
        seq.tick(999);
        assert_eq!(seq.line(0).displayed().get(), "Hello");
        assert_eq!(seq.line(1).displayed().get(), "");
        seq.tick(1000);
        assert_eq!(seq.line(1).displayed().get(), "W");
    }

    #[test]
    fn test_no_cursor_without_config() {
        let seq = SequencedTypingText::new(props(
            &["Hello"],
            TimingConfig::default(),
            None,
        ))
        .unwrap();

        seq.tick(100_000);
        assert_eq!(seq.cursor_line(), None);
    }

    #[test]
    fn test_cursor_travels_with_typing() {
        let seq = SequencedTypingText::new(props(
            &["AAA", "BBB"],
            TimingConfig {
                keystroke_duration: 100,
                delay_offset: 500,
                text_gap: 200,
            },
            Some(CursorOptions {
                show_immediately: false,
                persistence_duration: None,
            }),
        ))
        .unwrap();

        // Before the offset: no cursor, nothing typed.
        seq.tick(499);
        assert_eq!(seq.cursor_line(), None);

        // 500: line 0 owns the cursor and starts typing.
        seq.tick(500);
        assert_eq!(seq.cursor_line(), Some(0));
        assert!(seq.line(0).is_typing().get());

        // 900: mid-gap handoff point - cursor released.
        seq.tick(900);
        assert_eq!(seq.cursor_line(), None);

        // 901: line 1 picks it up (collision-nudged) and keeps it forever.
        seq.tick(901);
        assert_eq!(seq.cursor_line(), Some(1));
        seq.tick(60_000);
        assert_eq!(seq.cursor_line(), Some(1));
    }

    #[test]
    fn test_completion_time() {
        let seq = SequencedTypingText::new(props(
            &["Hi", "Bye"],
            TimingConfig {
                keystroke_duration: 50,
                delay_offset: 0,
                text_gap: 1000,
            },
            None,
        ))
        .unwrap();

        assert_eq!(seq.completion_time(), 1250);
    }

    #[test]
    fn test_reserved_height_is_a_pure_hint() {
        let mut p = props(&["a", "b", "c"], TimingConfig::default(), None);
        p.reserve_space = true;
        let seq = SequencedTypingText::new(p).unwrap();
        assert_eq!(seq.reserved_height(), Some(3));

        let seq = SequencedTypingText::new(props(&["a"], TimingConfig::default(), None)).unwrap();
        assert_eq!(seq.reserved_height(), None);
    }

    #[test]
    fn test_configure_restarts_cleanly() {
        let mut seq = SequencedTypingText::new(props(
            &["Hello", "World"],
            TimingConfig {
                keystroke_duration: 100,
                delay_offset: 500,
                text_gap: 0,
            },
            Some(CursorOptions::default()),
        ))
        .unwrap();

        seq.tick(600);
        assert_eq!(seq.cursor_line(), Some(0));
        assert_eq!(seq.line(0).displayed().get(), "He");

        seq.configure(props(
            &["Fresh"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 50,
                text_gap: 0,
            },
            Some(CursorOptions {
                show_immediately: true,
                persistence_duration: Some(100),
            }),
        ))
        .unwrap();

        // Restarted: cursor shown immediately, new line blank until 50.
        assert_eq!(seq.cursor_line(), Some(0));
        assert_eq!(seq.line(0).displayed().get(), "");
        assert_eq!(seq.line_count(), 1);

        seq.tick(90);
        assert_eq!(seq.line(0).displayed().get(), "Fresh");
        // Typing ends at 100; cursor persists to 200 then latches hidden.
        seq.tick(199);
        assert_eq!(seq.cursor_line(), Some(0));
        seq.tick(200);
        assert_eq!(seq.cursor_line(), None);
    }

    #[test]
    fn test_configure_error_leaves_state_untouched() {
        let mut seq = SequencedTypingText::new(props(
            &["Keep"],
            TimingConfig {
                keystroke_duration: 10,
                delay_offset: 0,
                text_gap: 0,
            },
            Some(CursorOptions::default()),
        ))
        .unwrap();
        seq.tick(20);
        let before = seq.line(0).displayed().get();

        let result = seq.configure(SequenceProps::default());
        assert_eq!(result, Err(ConfigError::NoLines));

        // The running schedule was not disturbed.
        assert_eq!(seq.line_count(), 1);
        assert_eq!(seq.line(0).displayed().get(), before);
    }

    #[test]
    fn test_cursor_removed_by_reconfigure() {
        let mut seq = SequencedTypingText::new(props(
            &["Text"],
            TimingConfig::default(),
            Some(CursorOptions {
                show_immediately: true,
                persistence_duration: None,
            }),
        ))
        .unwrap();
        assert_eq!(seq.cursor_line(), Some(0));

        seq.configure(props(&["Text"], TimingConfig::default(), None)).unwrap();
        seq.tick(100_000);
        assert_eq!(seq.cursor_line(), None);
    }
}
