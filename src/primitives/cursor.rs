//! Cursor Glyph - the single traveling cursor character.
//!
//! The glyph itself is stateless: which line hosts it is decided by the
//! [`CursorScheduler`](crate::state::CursorScheduler), and whether it is
//! drawn solid or blinking is a pure function of the animation clock and
//! the owning line's typing state - solid while typing, blinking while
//! waiting. 2 FPS is the standard cursor blink rate (500 ms on/off).

use crate::types::CursorStyle;

// =============================================================================
// Blink Phase
// =============================================================================

/// Blink visibility at `now` for the given FPS.
///
/// The half-period is `1000 / fps / 2` ms, so 2 FPS toggles every 250 ms
/// for a 500 ms full cycle, starting visible at t = 0. An FPS of 0
/// disables blinking (always visible).
pub fn blink_phase(now: u64, fps: u8) -> bool {
    if fps == 0 {
        return true;
    }
    let half_period = 1000 / u64::from(fps) / 2;
    (now / half_period) % 2 == 0
}

// =============================================================================
// Cursor Glyph
// =============================================================================

/// Configuration of the rendered cursor character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorGlyph {
    /// Shape preset (default: Bar).
    pub style: CursorStyle,
    /// Custom character (overrides the style preset if Some).
    pub ch: Option<char>,
    /// Blink frequency. 0 = never blink.
    pub fps: u8,
}

impl Default for CursorGlyph {
    fn default() -> Self {
        Self {
            style: CursorStyle::default(),
            ch: None,
            fps: 2,
        }
    }
}

impl CursorGlyph {
    /// The character to draw.
    pub fn glyph(&self) -> char {
        self.ch.unwrap_or_else(|| self.style.glyph())
    }

    /// Whether the glyph is drawn at `now`.
    ///
    /// Solid while the owning line is typing; blinking otherwise.
    pub fn is_visible(&self, now: u64, is_typing: bool) -> bool {
        if is_typing {
            return true;
        }
        blink_phase(now, self.fps)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_phase_half_periods() {
        // 2 FPS: 250ms half-period, starts visible.
        assert!(blink_phase(0, 2));
        assert!(blink_phase(249, 2));
        assert!(!blink_phase(250, 2));
        assert!(!blink_phase(499, 2));
        assert!(blink_phase(500, 2));
    }

    #[test]
    fn test_zero_fps_always_visible() {
        assert!(blink_phase(0, 0));
        assert!(blink_phase(123_456, 0));
    }

    #[test]
    fn test_solid_while_typing() {
        let glyph = CursorGlyph::default();
        // 300ms is an "off" phase at 2 FPS, but typing overrides it.
        assert!(!glyph.is_visible(300, false));
        assert!(glyph.is_visible(300, true));
    }

    #[test]
    fn test_custom_char_overrides_style() {
        let glyph = CursorGlyph {
            ch: Some('_'),
            ..Default::default()
        };
        assert_eq!(glyph.glyph(), '_');

        let preset = CursorGlyph::default();
        assert_eq!(preset.glyph(), '│');
    }
}
