//! Tokio-backed `RevealTimer`.
//!
//! Arming spawns a task that sleeps and then sends `Action::Reveal` over the
//! event loop's channel. The loop drains that channel on the UI thread, so
//! the controller is never touched from the task itself.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::timer::{Reveal, RevealTimer};

pub struct TokioRevealTimer {
    tx: mpsc::Sender<Action>,
    pending: Option<tokio::task::AbortHandle>,
}

impl TokioRevealTimer {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx, pending: None }
    }
}

impl RevealTimer for TokioRevealTimer {
    fn arm(&mut self, delay: Duration, reveal: Reveal) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        debug!("Arming {:?} reveal in {:?}", reveal.stage, delay);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::Reveal(reveal)).is_err() {
                warn!("Failed to deliver {:?} reveal: receiver dropped", reveal.stage);
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioRevealTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
