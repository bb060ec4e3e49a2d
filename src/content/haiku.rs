//! Haiku Library - the page's typed centerpiece.
//!
//! A static collection of haikus grouped by element. One is picked per page
//! load: weighted element choice first, then a uniform draw within the
//! element. The timing constants the landing page types with live here too.

use super::element::{weighted_random_element, ElementalTheme};
use super::rng::Xorshift32;

// =============================================================================
// Production Timing
// =============================================================================

/// Milliseconds per typed grapheme on the landing page.
pub const KEYSTROKE_DURATION: u64 = 24;
/// Delay before the first haiku line begins, leaving room for the page
/// fade-in.
pub const DELAY_OFFSET: u64 = 1000;
/// Breathing room between haiku lines.
pub const TEXT_GAP: u64 = 2000;
/// How long the cursor lingers after the last line.
pub const PERSISTENCE_DURATION: u64 = 3000;

// =============================================================================
// Haiku
// =============================================================================

/// One haiku: a title and exactly three lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Haiku {
    pub title: &'static str,
    pub lines: [&'static str; 3],
    pub element: ElementalTheme,
}

impl Haiku {
    /// The lines as owned strings, ready for a typing sequence.
    pub fn lines_vec(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }
}

// =============================================================================
// Collection
// =============================================================================

const WATER_HAIKUS: &[Haiku] = &[
    Haiku {
        title: "Still Pond",
        lines: [
            "First light on the pond",
            "a ripple remembers rain",
            "then forgets again",
        ],
        element: ElementalTheme::Water,
    },
    Haiku {
        title: "River Mind",
        lines: [
            "The river answers",
            "every stone it passes by",
            "with the same soft yes",
        ],
        element: ElementalTheme::Water,
    },
    Haiku {
        title: "Low Tide",
        lines: [
            "Tide slides from the shore",
            "leaving small mirrors of sky",
            "in the dark wet sand",
        ],
        element: ElementalTheme::Water,
    },
];

const AIR_HAIKUS: &[Haiku] = &[
    Haiku {
        title: "Aether",
        lines: [
            "Wind combs the tall grass",
            "carrying nothing at all",
            "carefully, for miles",
        ],
        element: ElementalTheme::Air,
    },
    Haiku {
        title: "Morning Mist",
        lines: [
            "Mist between the pines",
            "the mountain breathes out slowly",
            "and the path is gone",
        ],
        element: ElementalTheme::Air,
    },
    Haiku {
        title: "Kites",
        lines: [
            "A kite leans on air",
            "trusting what it cannot see",
            "the string trusts the hand",
        ],
        element: ElementalTheme::Air,
    },
];

const EARTH_HAIKUS: &[Haiku] = &[
    Haiku {
        title: "Old Stone",
        lines: [
            "The stone in the field",
            "has opinions about time",
            "it keeps to itself",
        ],
        element: ElementalTheme::Earth,
    },
    Haiku {
        title: "Salt",
        lines: [
            "Salt dear to the gods",
            "white harvest of patient seas",
            "seasons the plain bread",
        ],
        element: ElementalTheme::Earth,
    },
    Haiku {
        title: "Roots",
        lines: [
            "Under the orchard",
            "roots are writing slow letters",
            "no one will unearth",
        ],
        element: ElementalTheme::Earth,
    },
];

const FIRE_HAIKUS: &[Haiku] = &[
    Haiku {
        title: "Embers",
        lines: [
            "When the flame is quenched",
            "something stays in the embers",
            "that still knows the light",
        ],
        element: ElementalTheme::Fire,
    },
    Haiku {
        title: "Lantern",
        lines: [
            "A lantern's small work",
            "not to burn, only to show",
            "the shape of the dark",
        ],
        element: ElementalTheme::Fire,
    },
    Haiku {
        title: "Struck Match",
        lines: [
            "One struck match flaring",
            "a brief opinion of sun",
            "held between two hands",
        ],
        element: ElementalTheme::Fire,
    },
];

/// The haikus belonging to an element.
pub fn haikus_for(element: ElementalTheme) -> &'static [Haiku] {
    match element {
        ElementalTheme::Water => WATER_HAIKUS,
        ElementalTheme::Air => AIR_HAIKUS,
        ElementalTheme::Earth => EARTH_HAIKUS,
        ElementalTheme::Fire => FIRE_HAIKUS,
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Pick the page's haiku: weighted element first, uniform haiku second.
///
/// Called once at startup with an explicit seed-carrying generator; the
/// result is injected into the page rather than read from shared state.
pub fn pick_haiku(rng: &mut Xorshift32) -> &'static Haiku {
    let element = weighted_random_element(rng);
    let haikus = haikus_for(element);
    &haikus[rng.pick_index(haikus.len())]
}

// =============================================================================
// Tests
// =============================================================================
