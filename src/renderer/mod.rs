//! Renderer Module - terminal output.
//!
//! One renderer: inline (normal terminal buffer, scrollback preserved).
//! The landing page repaints a block of styled lines in place each frame.

mod inline;

pub use inline::{InlineRenderer, StyledLine};
