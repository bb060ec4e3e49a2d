//! State Module - Runtime state for the typing animation.
//!
//! - **Scheduler** - the cursor scheduling runtime: armed timers, the
//!   cursor-owner state machine, and the terminal latch.

mod scheduler;

pub use scheduler::{CursorPhase, CursorScheduler};
