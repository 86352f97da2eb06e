//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::core::catalog::FortuneCatalog;
use crate::core::controller::CookieController;
use crate::core::random::{FixedIndex, RandomIndex};
use crate::core::state::App;
use crate::core::timer::{RevealDelays, VirtualClock};
use crate::share::{ShareError, ShareOutcome, ShareTarget};

/// Records every fortune it is asked to share.
#[derive(Default)]
pub struct RecordingShare {
    calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingShare {
    /// A handle to the call log that outlives moving the target into a controller.
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }
}

impl ShareTarget for RecordingShare {
    fn name(&self) -> &str {
        "recorder"
    }

    fn share(&self, fortune: &str) -> Result<ShareOutcome, ShareError> {
        self.calls.borrow_mut().push(fortune.to_string());
        Ok(ShareOutcome::LinkOnly {
            url: format!("recorded:{fortune}"),
        })
    }
}

/// Fails every share the way a blocked browser launch would.
pub struct FailingShare;

impl ShareTarget for FailingShare {
    fn name(&self) -> &str {
        "failing"
    }

    fn share(&self, fortune: &str) -> Result<ShareOutcome, ShareError> {
        Err(ShareError::Launch {
            url: format!("failing:{fortune}"),
            source: io::Error::other("popup blocked"),
        })
    }
}

/// Builds a controller over `fortunes` driven by `clock`, with default delays.
pub fn controller_with(
    fortunes: &[&str],
    random: Box<dyn RandomIndex>,
    clock: &VirtualClock,
    share: Box<dyn ShareTarget>,
) -> CookieController {
    let catalog = FortuneCatalog::new(fortunes.iter().copied()).expect("test catalog is non-empty");
    CookieController::new(
        catalog,
        random,
        Box::new(clock.timer()),
        share,
        RevealDelays::default(),
    )
}

/// Creates a test App over `["A", "B"]` that always draws "A".
pub fn test_app() -> App {
    test_app_with_clock(&VirtualClock::new(), Box::new(RecordingShare::default()))
}

pub fn test_app_with_clock(clock: &VirtualClock, share: Box<dyn ShareTarget>) -> App {
    App::new(controller_with(&["A", "B"], Box::new(FixedIndex(0)), clock, share))
}
