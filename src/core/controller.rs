//! # Cookie Controller
//!
//! Owns the cookie's `InteractionState` and the collaborators that act on
//! it: the catalog, the random source, the reveal timer, and the share
//! target. `open`, `reset`, and `share` are the only mutators the renderer
//! gets; `on_reveal` is the entry point for the timer.
//!
//! ```text
//! Closed ──open()──▶ Open ──reset()──▶ Closed
//!                     │
//!                     ├─ +message_delay  message_visible = true, arm actions
//!                     └─ +actions_delay  actions_visible = true
//! ```

use log::{debug, info};

use crate::core::catalog::FortuneCatalog;
use crate::core::random::RandomIndex;
use crate::core::state::InteractionState;
use crate::core::timer::{Reveal, RevealDelays, RevealStage, RevealTimer};
use crate::share::{ShareError, ShareOutcome, ShareTarget};

pub struct CookieController {
    state: InteractionState,
    catalog: FortuneCatalog,
    random: Box<dyn RandomIndex>,
    timer: Box<dyn RevealTimer>,
    share: Box<dyn ShareTarget>,
    delays: RevealDelays,
    /// Bumped on every open and reset. Reveals from older generations are stale.
    generation: u64,
}

impl CookieController {
    pub fn new(
        catalog: FortuneCatalog,
        random: Box<dyn RandomIndex>,
        timer: Box<dyn RevealTimer>,
        share: Box<dyn ShareTarget>,
        delays: RevealDelays,
    ) -> Self {
        Self {
            state: InteractionState::closed(),
            catalog,
            random,
            timer,
            share,
            delays,
            generation: 0,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn catalog(&self) -> &FortuneCatalog {
        &self.catalog
    }

    pub fn delays(&self) -> RevealDelays {
        self.delays
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn share_target_name(&self) -> &str {
        self.share.name()
    }

    /// Cracks the cookie open. Returns `false` (and does nothing) if it is
    /// already open.
    pub fn open(&mut self) -> bool {
        if self.state.is_open() {
            debug!("open() ignored: cookie already open");
            return false;
        }

        let (index, fortune) = self.catalog.draw(self.random.as_mut());
        let fortune = fortune.to_string();

        self.generation += 1;
        self.state.open_with(fortune);
        info!("Cookie opened (fortune #{}, generation {})", index, self.generation);

        self.timer.arm(
            self.delays.message,
            Reveal {
                stage: RevealStage::Message,
                generation: self.generation,
            },
        );
        true
    }

    /// Closes the cookie and invalidates any reveal still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.timer.cancel();
        self.state.close();
        info!("Cookie reset (generation {})", self.generation);
    }

    /// Hands the current fortune to the share target. Never changes state.
    pub fn share(&self) -> Result<ShareOutcome, ShareError> {
        if !self.state.is_open() {
            return Err(ShareError::NothingToShare);
        }
        debug!("Sharing fortune via {}", self.share.name());
        self.share.share(self.state.selected_fortune())
    }

    /// Applies a fired reveal. Returns `false` for stale or redundant reveals.
    pub fn on_reveal(&mut self, reveal: Reveal) -> bool {
        if reveal.generation != self.generation {
            debug!(
                "Dropping stale {:?} reveal (generation {}, current {})",
                reveal.stage, reveal.generation, self.generation
            );
            return false;
        }

        let applied = match reveal.stage {
            RevealStage::Message => {
                let shown = self.state.show_message();
                if shown {
                    // Chained: the actions stage only exists once the message is up.
                    self.timer.arm(
                        self.delays.actions,
                        Reveal {
                            stage: RevealStage::Actions,
                            generation: self.generation,
                        },
                    );
                }
                shown
            }
            RevealStage::Actions => self.state.show_actions(),
        };

        if applied {
            debug!("Applied {:?} reveal (generation {})", reveal.stage, reveal.generation);
        }
        debug_assert!(self.state.is_consistent());
        applied
    }
}
