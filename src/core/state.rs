//! # Application State
//!
//! Core state for Fortune Caster. Domain only, no TUI types. Presentation
//! state (restock cooldown, wobble animation) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── controller: CookieController   // owns InteractionState + collaborators
//! │   └── state: InteractionState
//! │       ├── phase: Phase           // Closed | Open
//! │       ├── selected_fortune       // "" while closed
//! │       ├── message_visible        // delayed from open
//! │       └── actions_visible        // delayed from message_visible
//! ├── status_message: String         // status bar text
//! └── shares: usize                  // successful shares this run
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! which routes to the controller's operations.

use crate::core::controller::CookieController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

/// The cookie as the renderer sees it.
///
/// Fields are private: the setters below are crate-internal and each one
/// keeps `actions_visible ⇒ message_visible ⇒ phase == Open`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    phase: Phase,
    selected_fortune: String,
    message_visible: bool,
    actions_visible: bool,
}

impl InteractionState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_fortune(&self) -> &str {
        &self.selected_fortune
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn actions_visible(&self) -> bool {
        self.actions_visible
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Open, but the cascade has not finished yet.
    pub fn is_revealing(&self) -> bool {
        self.is_open() && !self.actions_visible
    }

    /// Checks the state invariants. Used by tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        let flags_ok = (!self.actions_visible || self.message_visible)
            && (!self.message_visible || self.phase == Phase::Open);
        let fortune_ok = (self.phase == Phase::Open) == !self.selected_fortune.is_empty();
        flags_ok && fortune_ok
    }

    pub(crate) fn open_with(&mut self, fortune: String) {
        self.phase = Phase::Open;
        self.selected_fortune = fortune;
        self.message_visible = false;
        self.actions_visible = false;
    }

    pub(crate) fn show_message(&mut self) -> bool {
        if self.phase != Phase::Open || self.message_visible {
            return false;
        }
        self.message_visible = true;
        true
    }

    pub(crate) fn show_actions(&mut self) -> bool {
        if !self.message_visible || self.actions_visible {
            return false;
        }
        self.actions_visible = true;
        true
    }

    pub(crate) fn close(&mut self) {
        *self = Self::closed();
    }
}

pub struct App {
    pub controller: CookieController,
    pub status_message: String,
    pub shares: usize,
}

impl App {
    pub fn new(controller: CookieController) -> Self {
        Self {
            controller,
            status_message: String::from("Press Enter to crack open your cookie"),
            shares: 0,
        }
    }

    pub fn state(&self) -> &InteractionState {
        self.controller.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Press Enter to crack open your cookie");
        assert_eq!(app.shares, 0);
        assert_eq!(app.state(), &InteractionState::closed());
    }

    #[test]
    fn test_closed_is_consistent() {
        let state = InteractionState::closed();
        assert_eq!(state.phase(), Phase::Closed);
        assert!(state.selected_fortune().is_empty());
        assert!(!state.message_visible());
        assert!(!state.actions_visible());
        assert!(state.is_consistent());
        assert!(!state.is_revealing());
    }

    #[test]
    fn test_flags_follow_cascade_order() {
        let mut state = InteractionState::closed();
        assert!(!state.show_message(), "closed cookie has no message");
        assert!(!state.show_actions(), "actions need a visible message");

        state.open_with("A".to_string());
        assert!(state.is_revealing());
        assert!(!state.show_actions());
        assert!(state.show_message());
        assert!(!state.show_message(), "second reveal is a no-op");
        assert!(state.show_actions());
        assert!(!state.is_revealing());
        assert!(state.is_consistent());

        state.close();
        assert_eq!(state, InteractionState::closed());
    }

    #[test]
    fn test_inconsistent_states_are_detected() {
        let bad = InteractionState {
            phase: Phase::Closed,
            selected_fortune: String::new(),
            message_visible: true,
            actions_visible: false,
        };
        assert!(!bad.is_consistent());

        let bad = InteractionState {
            phase: Phase::Open,
            selected_fortune: String::new(),
            message_visible: false,
            actions_visible: false,
        };
        assert!(!bad.is_consistent());
    }
}
