//! # Actions
//!
//! Everything that can happen in Fortune Caster becomes an `Action`.
//! User presses Enter on a closed cookie? That's `Action::Open`.
//! A reveal timer fires? That's `Action::Reveal(reveal)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what to do next. Timers and sharing go through the
//! controller's injected collaborators, so this stays free of terminal I/O.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::App;
use crate::core::timer::Reveal;
use crate::share::{ShareError, ShareOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open,
    Reset,
    Share,
    Reveal(Reveal),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// State changed; redraw.
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Open => {
            if app.controller.open() {
                app.status_message = String::from("Cracking the cookie...");
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Reset => {
            app.controller.reset();
            app.status_message = String::from("Baking a fresh cookie...");
            Effect::Redraw
        }
        Action::Share => {
            let status = match app.controller.share() {
                Ok(ShareOutcome::Opened { .. }) => {
                    app.shares += 1;
                    format!("Opened {} in your browser", app.controller.share_target_name())
                }
                Ok(ShareOutcome::LinkOnly { url }) => {
                    app.shares += 1;
                    format!("Share link: {url}")
                }
                Err(ShareError::NothingToShare) => return Effect::None,
                Err(e) => {
                    warn!("Share failed: {}", e);
                    format!("Share failed: {e}")
                }
            };
            app.status_message = status;
            Effect::Redraw
        }
        Action::Reveal(reveal) => {
            if !app.controller.on_reveal(reveal) {
                return Effect::None;
            }
            if app.state().actions_visible() {
                app.status_message = String::from("Your fortune awaits");
            }
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}
