//! Primitives Module - The building blocks of the typed page.
//!
//! - **TypingLine** - progressive grapheme reveal for one line of text
//! - **CursorGlyph** - the single traveling cursor character
//! - **SequencedTypingText** - the composed multi-line component

mod cursor;
mod sequence;
mod typing_text;

pub use cursor::{blink_phase, CursorGlyph};
pub use sequence::{SequenceProps, SequencedTypingText};
pub use typing_text::TypingLine;
