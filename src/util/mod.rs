//! Utility Module - small leaf helpers.

mod roman;

pub use roman::year_to_roman;
