//! Typing Text Primitive - progressive character reveal for one line.
//!
//! A [`TypingLine`] reveals its text one grapheme at a time: grapheme `k`
//! becomes visible at `delay + k * duration`. The revealed prefix and a
//! "currently typing" flag are published as signals so renders update
//! automatically, the same way text content binds reactively elsewhere in
//! the crate.
//!
//! The line does no timing of its own - it is advanced by
//! [`tick`](TypingLine::tick) from the shared animation clock.
//!
//! # Example
//!
//! ```ignore
//! use zendient_tui::primitives::TypingLine;
//!
//! let line = TypingLine::new("Hello".to_string(), 500, 100);
//!
//! line.tick(500);
//! assert_eq!(line.displayed().get(), "H");
//!
//! line.tick(900);
//! assert_eq!(line.displayed().get(), "Hello");
//! ```

use std::cell::Cell;

use spark_signals::{signal, Signal};
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Typing Line
// =============================================================================

/// One line of text revealed grapheme by grapheme.
pub struct TypingLine {
    text: String,
    /// Byte offset of the end of each grapheme, so a revealed prefix is
    /// always a valid slice.
    grapheme_ends: Vec<usize>,
    delay: u64,
    duration: u64,
    /// The revealed prefix of `text`.
    displayed: Signal<String>,
    /// True from typing start until the last grapheme is revealed.
    is_typing: Signal<bool>,
    revealed: Cell<usize>,
}

impl TypingLine {
    /// Create a line that starts revealing at `delay` and spends
    /// `duration` milliseconds per grapheme.
    ///
    /// A `duration` of 0 reveals the whole line at `delay`.
    pub fn new(text: String, delay: u64, duration: u64) -> Self {
        let grapheme_ends = text
            .grapheme_indices(true)
            .map(|(offset, grapheme)| offset + grapheme.len())
            .collect();

        Self {
            text,
            grapheme_ends,
            delay,
            duration,
            displayed: signal(String::new()),
            is_typing: signal(false),
            revealed: Cell::new(0),
        }
    }

    /// Number of graphemes revealed at `now`.
    ///
    /// Grapheme `k` (0-indexed) appears at `delay + k * duration`.
    fn revealed_at(&self, now: u64) -> usize {
        let total = self.grapheme_ends.len();
        if total == 0 || now < self.delay {
            return 0;
        }
        if self.duration == 0 {
            return total;
        }
        (((now - self.delay) / self.duration) as usize + 1).min(total)
    }

    /// Advance the reveal to `now`, updating the signals if anything
    /// changed.
    pub fn tick(&self, now: u64) {
        let target = self.revealed_at(now);
        if target != self.revealed.get() {
            self.revealed.set(target);
            let prefix = match target {
                0 => String::new(),
                n => self.text[..self.grapheme_ends[n - 1]].to_string(),
            };
            self.displayed.set(prefix);
        }

        let typing = now >= self.delay && target < self.grapheme_ends.len();
        if typing != self.is_typing.get() {
            self.is_typing.set(typing);
        }
    }

    /// The revealed-prefix signal.
    pub fn displayed(&self) -> Signal<String> {
        self.displayed.clone()
    }

    /// The "currently typing" signal.
    pub fn is_typing(&self) -> Signal<bool> {
        self.is_typing.clone()
    }

    /// The full text this line will eventually display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Grapheme count of the full text.
    pub fn len(&self) -> usize {
        self.grapheme_ends.len()
    }

    /// Whether the full text is zero graphemes long.
    pub fn is_empty(&self) -> bool {
        self.grapheme_ends.is_empty()
    }

    /// The instant this line finishes typing.
    pub fn complete_at(&self) -> u64 {
        self.delay + self.grapheme_ends.len() as u64 * self.duration
    }
}

// =============================================================================
// Tests
// =============================================================================
