//! Inline renderer for normal terminal mode.
//!
//! Writes to the normal terminal buffer rather than the alternate screen:
//!
//! - Erases the previous frame by moving up and clearing down
//! - Rewrites the whole block of lines each frame
//! - Respects terminal scrollback, so the final frame stays visible after
//!   the program exits
//!
//! Frames are bracketed in a synchronized update so a repaint never tears.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use unicode_width::UnicodeWidthStr;

use crate::types::{Attr, Rgba, TextAlign};

// =============================================================================
// Styled Line
// =============================================================================

/// One renderable line of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub text: String,
    pub attrs: Attr,
    /// Foreground color; None = terminal default.
    pub fg: Option<Rgba>,
    pub align: TextAlign,
}

impl StyledLine {
    /// An unstyled, left-aligned line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// A centered line with attributes.
    pub fn centered(text: impl Into<String>, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            attrs,
            fg: None,
            align: TextAlign::Center,
        }
    }

    pub fn with_fg(mut self, fg: Rgba) -> Self {
        self.fg = Some(fg);
        self
    }
}

// =============================================================================
// Inline Renderer
// =============================================================================

/// Inline renderer for normal terminal mode.
///
/// Each render erases the previously painted block and writes the new one.
pub struct InlineRenderer {
    previous_height: u16,
}

impl InlineRenderer {
    /// Create a new inline renderer.
    pub fn new() -> Self {
        Self { previous_height: 0 }
    }

    /// Render a frame inline, erasing the previous one.
    pub fn render(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        let width = terminal::size().map(|(w, _)| w).unwrap_or(80);
        let mut out = io::stdout().lock();

        queue!(out, BeginSynchronizedUpdate)?;

        // Erase previous content by moving up and clearing.
        if self.previous_height > 0 {
            queue!(
                out,
                MoveUp(self.previous_height),
                MoveToColumn(0),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        for line in lines {
            let pad = match line.align {
                TextAlign::Left => 0,
                TextAlign::Center => {
                    let text_width = line.text.width() as u16;
                    width.saturating_sub(text_width) / 2
                }
            };
            if pad > 0 {
                queue!(out, Print(" ".repeat(pad as usize)))?;
            }

            for attribute in attributes_for(line.attrs) {
                queue!(out, SetAttribute(attribute))?;
            }
            if let Some(fg) = line.fg {
                queue!(
                    out,
                    SetForegroundColor(Color::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b,
                    })
                )?;
            }

            queue!(
                out,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\r\n")
            )?;
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        self.previous_height = lines.len() as u16;
        Ok(())
    }

    /// Erase any rendered content and reset state.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.previous_height > 0 {
            let mut out = io::stdout().lock();
            queue!(
                out,
                MoveUp(self.previous_height),
                MoveToColumn(0),
                Clear(ClearType::FromCursorDown)
            )?;
            out.flush()?;
            self.previous_height = 0;
        }
        Ok(())
    }

    /// Height of the previously rendered block.
    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an [`Attr`] bitfield to the terminal attributes it implies.
fn attributes_for(attrs: Attr) -> impl Iterator<Item = Attribute> {
    [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
    ]
    .into_iter()
    .filter(move |(flag, _)| attrs.contains(*flag))
    .map(|(_, attribute)| attribute)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_starts_empty() {
        let renderer = InlineRenderer::new();
        assert_eq!(renderer.previous_height(), 0);
    }

    #[test]
    fn test_styled_line_builders() {
        let line = StyledLine::centered("Title", Attr::BOLD).with_fg(Rgba::WHITE);
        assert_eq!(line.align, TextAlign::Center);
        assert_eq!(line.attrs, Attr::BOLD);
        assert_eq!(line.fg, Some(Rgba::WHITE));

        let plain = StyledLine::plain("x");
        assert_eq!(plain.align, TextAlign::Left);
        assert_eq!(plain.attrs, Attr::NONE);
        assert_eq!(plain.fg, None);
    }

    #[test]
    fn test_attribute_mapping() {
        let mapped: Vec<_> = attributes_for(Attr::BOLD | Attr::DIM).collect();
        assert_eq!(mapped, vec![Attribute::Bold, Attribute::Dim]);

        assert_eq!(attributes_for(Attr::NONE).count(), 0);
    }
}
