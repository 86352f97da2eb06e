//! # Reveal Timer
//!
//! The reveal cascade is driven by a single timer the controller owns.
//! Each armed timer carries a `Reveal`: the stage to apply and the
//! generation it belongs to. The controller bumps the generation on every
//! open and reset, so a timer that fires late is recognised and dropped.
//!
//! ```text
//! open() ──arm(message_delay)──▶ Message ──arm(actions_delay)──▶ Actions
//!   │                                │
//!   └── generation N                 └── armed only once Message is applied
//! ```
//!
//! Implementations:
//! - `VirtualClock` (here): deterministic, advanced explicitly. Used by tests.
//! - `TokioRevealTimer` (tui): tokio sleep + channel back to the event loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::controller::CookieController;
use crate::core::state::InteractionState;

pub const DEFAULT_MESSAGE_DELAY_MS: u64 = 800;
pub const DEFAULT_ACTIONS_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Message,
    Actions,
}

/// A pending stage of the cascade, tagged with the open it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub stage: RevealStage,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelays {
    /// From open to the fortune becoming visible.
    pub message: Duration,
    /// From the fortune becoming visible to the actions becoming visible.
    pub actions: Duration,
}

impl Default for RevealDelays {
    fn default() -> Self {
        Self {
            message: Duration::from_millis(DEFAULT_MESSAGE_DELAY_MS),
            actions: Duration::from_millis(DEFAULT_ACTIONS_DELAY_MS),
        }
    }
}

impl RevealDelays {
    pub fn from_millis(message_ms: u64, actions_ms: u64) -> Self {
        Self {
            message: Duration::from_millis(message_ms),
            actions: Duration::from_millis(actions_ms),
        }
    }

    /// Time from open until the cascade completes.
    pub fn total(&self) -> Duration {
        self.message + self.actions
    }
}

/// Schedules a single deferred `Reveal` back to the controller.
pub trait RevealTimer {
    /// Arms the timer. Any previously armed reveal may be dropped.
    fn arm(&mut self, delay: Duration, reveal: Reveal);

    /// Disarms the timer. Best effort: callers still guard by generation.
    fn cancel(&mut self);
}

// ============================================================================
// Virtual clock
// ============================================================================

#[derive(Debug, Default)]
struct VirtualInner {
    now: Duration,
    pending: Vec<(Duration, Reveal)>,
    honor_cancel: bool,
    armed: usize,
    cancelled: usize,
}

/// A manually advanced clock. `timer()` hands out a `RevealTimer` sharing
/// this clock; `advance()` moves time forward one millisecond at a time and
/// delivers due reveals to the controller.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    inner: Rc<RefCell<VirtualInner>>,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    pub const TICK: Duration = Duration::from_millis(1);

    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VirtualInner {
                honor_cancel: true,
                ..Default::default()
            })),
        }
    }

    /// A clock whose timers ignore `cancel()`, so stale reveals still fire.
    /// Exercises the generation guard on its own.
    pub fn without_cancellation() -> Self {
        let clock = Self::new();
        clock.inner.borrow_mut().honor_cancel = false;
        clock
    }

    pub fn timer(&self) -> VirtualTimer {
        VirtualTimer {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn armed_count(&self) -> usize {
        self.inner.borrow().armed
    }

    pub fn cancelled_count(&self) -> usize {
        self.inner.borrow().cancelled
    }

    /// Advances by `by`, firing due reveals at each tick.
    pub fn advance(&self, controller: &mut CookieController, by: Duration) {
        self.advance_sampled(controller, by, |_| {});
    }

    /// Like `advance`, calling `sample` with the state after every tick.
    pub fn advance_sampled<F>(&self, controller: &mut CookieController, by: Duration, mut sample: F)
    where
        F: FnMut(&InteractionState),
    {
        let target = self.now() + by;
        while self.now() < target {
            self.inner.borrow_mut().now += Self::TICK;
            self.fire_due(controller);
            sample(controller.state());
        }
    }

    /// Delivers every reveal due at the current time. A reveal armed while
    /// delivering (zero delay) is delivered in the same call.
    pub fn fire_due(&self, controller: &mut CookieController) {
        while let Some(reveal) = self.pop_due() {
            controller.on_reveal(reveal);
        }
    }

    fn pop_due(&self) -> Option<Reveal> {
        let mut inner = self.inner.borrow_mut();
        let now = inner.now;
        let pos = inner
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= now)
            .min_by_key(|(_, (due, _))| *due)
            .map(|(i, _)| i)?;
        Some(inner.pending.remove(pos).1)
    }
}

/// The `RevealTimer` half of a `VirtualClock`.
#[derive(Debug)]
pub struct VirtualTimer {
    inner: Rc<RefCell<VirtualInner>>,
}

impl RevealTimer for VirtualTimer {
    fn arm(&mut self, delay: Duration, reveal: Reveal) {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        inner.pending.push((due, reveal));
        inner.armed += 1;
    }

    fn cancel(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancelled += 1;
        if inner.honor_cancel {
            inner.pending.clear();
        }
    }
}
