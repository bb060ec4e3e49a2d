//! Elemental Themes - the four elements the page dresses itself in.
//!
//! Each element carries a selection weight, a zen description (after the
//! Timaeus), a trigram icon, and an accent color. One element is chosen per
//! page load by weighted random selection over an injected PRNG.

use crate::types::Rgba;

use super::rng::Xorshift32;

// =============================================================================
// Elemental Theme
// =============================================================================

/// The elemental theme of a page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementalTheme {
    Water,
    Air,
    Earth,
    Fire,
}

impl ElementalTheme {
    /// All elements, in weight order.
    pub const ALL: [Self; 4] = [Self::Water, Self::Air, Self::Earth, Self::Fire];

    /// Selection weight - water is the house favorite.
    pub const fn weight(self) -> f32 {
        match self {
            Self::Water => 1.0,
            Self::Air => 0.8,
            Self::Earth => 0.6,
            Self::Fire => 0.5,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Air => "air",
            Self::Earth => "earth",
            Self::Fire => "fire",
        }
    }

    /// Trigram icon rendered above the haiku.
    pub const fn icon(self) -> char {
        match self {
            Self::Water => '\u{2635}', // ☵
            Self::Air => '\u{2634}',   // ☴ (wind)
            Self::Earth => '\u{2637}', // ☷
            Self::Fire => '\u{2632}',  // ☲
        }
    }

    /// Accent color for the icon and cursor.
    pub const fn accent(self) -> Rgba {
        match self {
            Self::Water => Rgba::rgb(94, 138, 168),
            Self::Air => Rgba::rgb(168, 176, 184),
            Self::Earth => Rgba::rgb(142, 120, 92),
            Self::Fire => Rgba::rgb(188, 108, 76),
        }
    }

    /// Zen description, following the narrative arc of the Timaeus.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Water => {
                "Of the kinds of water, there is first the division into the liquid \
                 and the fusible. The liquid kind is soft and fluid; the fusible kind \
                 is composed of large and uniform grains, and is more stable than the \
                 other."
            }
            Self::Air => {
                "So it is with air: there is the brightest variety which we call \
                 aether, the muddiest which we call mist and darkness, and other kinds \
                 for which we have no name."
            }
            Self::Earth => {
                "There are also many kinds of earth: there is stone, which the water \
                 mixed with earth does not dissolve; there is the earthenware kind; \
                 and there is also salt, a body dear to the gods."
            }
            Self::Fire => {
                "Of fire, there are many kinds: flame; that which issues from flame, \
                 which does not burn but provides light to the eyes; and that which is \
                 left in the embers when the flame is quenched."
            }
        }
    }
}

impl std::fmt::Display for ElementalTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Weighted Selection
// =============================================================================

/// Select an element by weighted probability.
///
/// Walks the weight table subtracting from a uniform draw over the total
/// weight; heavier elements claim a proportionally larger slice.
pub fn weighted_random_element(rng: &mut Xorshift32) -> ElementalTheme {
    let total: f32 = ElementalTheme::ALL.iter().map(|e| e.weight()).sum();
    let mut draw = rng.unit_f32() * total;

    for &element in &ElementalTheme::ALL {
        draw -= element.weight();
        if draw <= 0.0 {
            return element;
        }
    }
    ElementalTheme::ALL[0]
}

// =============================================================================
// Tests
// =============================================================================
