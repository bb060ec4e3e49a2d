//! # zendient-tui
//!
//! The Zendient Labs landing page, for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity. The reusable core is a **sequenced typewriter
//! engine**: multiple lines of text typed one after another with a single
//! cursor traveling between them, handing off at the midpoint of the
//! configured gap.
//!
//! ## Architecture
//!
//! Data flows one way; the whole schedule is precomputed per configuration
//! and only timer firings mutate runtime state:
//!
//! ```text
//! configuration → delay schedule → cursor timeline → armed timers
//!              → cursor-owner signal → rendered output
//! ```
//!
//! - [`schedule`] - pure timing math (per-line delays, cursor windows)
//! - [`state`] - the cursor scheduling runtime (armed timers, latch)
//! - [`primitives`] - TypingLine, CursorGlyph, SequencedTypingText
//! - [`content`] - elemental themes, the haiku library, seedable selection
//! - [`renderer`] - inline terminal repaint
//! - [`util`] - roman numerals and friends
//!
//! Everything is single-threaded and cooperative: the host loop calls
//! `tick(now_ms)` and reads signals; there are no background timers.

pub mod content;
pub mod primitives;
pub mod renderer;
pub mod schedule;
pub mod state;
pub mod types;
pub mod util;

// Re-export commonly used items
pub use types::*;

pub use schedule::{
    compute_cursor_timings, compute_line_delays, ConfigError, CursorOptions, CursorWindow,
    SequenceTimings, TimingConfig,
};

pub use state::{CursorPhase, CursorScheduler};

pub use primitives::{
    blink_phase, CursorGlyph, SequenceProps, SequencedTypingText, TypingLine,
};

pub use content::{
    haikus_for, pick_haiku, weighted_random_element, ElementalTheme, Haiku, Xorshift32,
};

pub use renderer::{InlineRenderer, StyledLine};

pub use util::year_to_roman;
