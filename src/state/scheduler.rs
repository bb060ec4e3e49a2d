//! Cursor Scheduling Runtime - drives cursor ownership over time.
//!
//! The [`CursorScheduler`] owns one logical timer per show/hide event of the
//! cursor timeline and a single piece of observable state: which line
//! currently displays the cursor. Timers fire from a cooperative
//! [`tick`](CursorScheduler::tick) driver in non-decreasing time order -
//! single-threaded, event-loop style, no locks.
//!
//! # State machine
//!
//! - `Idle` - no cursor shown (pre-start, or mid-handoff gap)
//! - `Owned(i)` - the cursor is visible on line `i`
//! - `Latched(i | None)` - terminal; the owner is frozen and every pending
//!   timer has been cancelled
//!
//! The last line latches: a finite persistence hides the cursor forever
//! (`Latched(None)`), infinite persistence freezes it shown
//! (`Latched(last)`). Re-arming cancels all pending timers first, so no
//! stale callback can mutate state after a newer configuration is in
//! effect.
//!
//! # Example
//!
//! ```ignore
//! use zendient_tui::state::CursorScheduler;
//!
//! let scheduler = CursorScheduler::new();
//! scheduler.arm(timings.windows().unwrap());
//!
//! // In the event loop:
//! scheduler.tick(clock.elapsed_ms());
//! if let Some(line) = scheduler.owner() {
//!     // draw the cursor on `line`
//! }
//! ```

use std::cell::{Cell, RefCell};

use spark_signals::{signal, Signal};

use crate::schedule::CursorWindow;

// =============================================================================
// Cursor Phase
// =============================================================================

/// The cursor-owner state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    /// No line owns the cursor.
    Idle,
    /// The cursor is visible on this line.
    Owned(usize),
    /// Terminal state - the owner is frozen and timers no longer act.
    Latched(Option<usize>),
}

impl CursorPhase {
    /// The line currently displaying the cursor, if any.
    pub fn owner(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Owned(line) => Some(line),
            Self::Latched(owner) => owner,
        }
    }

    /// Whether the terminal state has been reached.
    pub fn is_latched(self) -> bool {
        matches!(self, Self::Latched(_))
    }
}

// =============================================================================
// Armed Timers
// =============================================================================

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    /// `* -> Owned(line)`.
    Show(usize),
    /// `Owned(line) -> Idle`.
    Hide(usize),
    /// Last line, infinite persistence: `* -> Latched(line)`.
    ShowAndLatch(usize),
    /// Last line, finite persistence: `Owned(last) -> Latched(None)`.
    HideAndLatch(usize),
}

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    at: u64,
    action: TimerAction,
}

// =============================================================================
// Cursor Scheduler
// =============================================================================

/// The stateful driver for cursor ownership.
///
/// Owns its timers exclusively: they exist only inside this instance, are
/// cancelled wholesale on re-[`arm`](Self::arm), [`cancel_all`](Self::cancel_all)
/// and [`dispose`](Self::dispose), and cannot fire after teardown.
pub struct CursorScheduler {
    phase: Signal<CursorPhase>,
    /// Pending timers, sorted by deadline; ties keep arm order.
    timers: RefCell<Vec<ArmedTimer>>,
    /// Last tick instant. Timers fire at-or-after their deadline, never
    /// before.
    now: Cell<u64>,
}

impl CursorScheduler {
    /// Create an idle scheduler with no timers armed.
    pub fn new() -> Self {
        Self {
            phase: signal(CursorPhase::Idle),
            timers: RefCell::new(Vec::new()),
            now: Cell::new(0),
        }
    }

    /// Arm one timer per show/hide event of `windows`.
    ///
    /// Cancels every previously armed timer first and restarts the state
    /// machine from `Idle` at t = 0. Events scheduled at t = 0 (a
    /// `show_immediately` first line) fire synchronously before this
    /// returns - the initial state visible to the caller is already
    /// `Owned(0)` in that case.
    pub fn arm(&self, windows: &[CursorWindow]) {
        self.cancel_all();
        self.now.set(0);
        self.phase.set(CursorPhase::Idle);

        if windows.is_empty() {
            return;
        }
        let last = windows.len() - 1;

        {
            let mut timers = self.timers.borrow_mut();
            for (line, window) in windows.iter().enumerate() {
                match window.hide_at {
                    // Last line that never hides: the show event latches.
                    None if line == last => timers.push(ArmedTimer {
                        at: window.show_at,
                        action: TimerAction::ShowAndLatch(line),
                    }),
                    // No hide mid-sequence: the next line's show takes over.
                    None => timers.push(ArmedTimer {
                        at: window.show_at,
                        action: TimerAction::Show(line),
                    }),
                    Some(hide_at) => {
                        timers.push(ArmedTimer {
                            at: window.show_at,
                            action: TimerAction::Show(line),
                        });
                        timers.push(ArmedTimer {
                            at: hide_at,
                            action: if line == last {
                                TimerAction::HideAndLatch(line)
                            } else {
                                TimerAction::Hide(line)
                            },
                        });
                    }
                }
            }
            // Stable: equal deadlines fire in arm order (line order, show
            // before hide within a line), matching insertion-order timers.
            timers.sort_by_key(|timer| timer.at);
        }

        // Immediate-show rule: t = 0 events run synchronously, no timer hop.
        self.tick(0);
    }

    /// Fire every due timer, in deadline order, up to and including `now`.
    ///
    /// `now` is milliseconds since the matching [`arm`](Self::arm). Ticking
    /// backwards is a no-op for already-fired events; ticking a latched
    /// scheduler is a no-op entirely.
    pub fn tick(&self, now: u64) {
        self.now.set(now);

        loop {
            if self.phase.get().is_latched() {
                // Latched mid-drain: everything still pending is inert.
                self.cancel_all();
                return;
            }

            let due = {
                let mut timers = self.timers.borrow_mut();
                if timers.first().is_some_and(|timer| timer.at <= now) {
                    Some(timers.remove(0))
                } else {
                    None
                }
            };

            let Some(timer) = due else { return };
            self.fire(timer.action);
        }
    }

    fn fire(&self, action: TimerAction) {
        let phase = self.phase.get();
        match action {
            TimerAction::Show(line) => {
                self.phase.set(CursorPhase::Owned(line));
            }
            TimerAction::ShowAndLatch(line) => {
                self.phase.set(CursorPhase::Latched(Some(line)));
            }
            TimerAction::Hide(line) => {
                // Only the current owner's hide releases the cursor; a
                // superseded hide (the next show already fired) is a no-op.
                if phase == CursorPhase::Owned(line) {
                    self.phase.set(CursorPhase::Idle);
                }
            }
            TimerAction::HideAndLatch(line) => {
                if phase == CursorPhase::Owned(line) {
                    self.phase.set(CursorPhase::Latched(None));
                }
            }
        }
    }

    /// Cancel every pending timer. The current phase is left untouched.
    pub fn cancel_all(&self) {
        self.timers.borrow_mut().clear();
    }

    /// Tear down: cancel all timers. No callback can fire afterwards.
    pub fn dispose(self) {
        self.cancel_all();
    }

    /// The line currently displaying the cursor, if any.
    pub fn owner(&self) -> Option<usize> {
        self.phase.get().owner()
    }

    /// Current state-machine phase.
    pub fn phase(&self) -> CursorPhase {
        self.phase.get()
    }

    /// The phase signal, for reactive observers.
    pub fn phase_signal(&self) -> Signal<CursorPhase> {
        self.phase.clone()
    }

    /// Whether the terminal state has been reached.
    pub fn is_latched(&self) -> bool {
        self.phase.get().is_latched()
    }

    /// Number of timers still pending (for testing).
    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Default for CursorScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
