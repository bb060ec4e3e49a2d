//! Content Module - The landing page's themed material.
//!
//! - **rng** - minimal deterministic PRNG for seedable selection
//! - **element** - the four elemental themes with weights and descriptions
//! - **haiku** - the haiku library and the page's production timing

mod element;
mod haiku;
mod rng;

pub use element::{weighted_random_element, ElementalTheme};
pub use haiku::{
    haikus_for, pick_haiku, Haiku, DELAY_OFFSET, KEYSTROKE_DURATION, PERSISTENCE_DURATION,
    TEXT_GAP,
};
pub use rng::Xorshift32;
