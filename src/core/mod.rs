//! # Core Application Logic
//!
//! This module contains Fortune Caster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • CookieController     │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  --once    │      │   Tests    │
//!     │  Adapter   │      │   (CLI)    │      │ (virtual   │
//!     │ (ratatui)  │      │            │      │   clock)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `InteractionState` and the `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`controller`]: open / reset / share and the reveal cascade
//! - [`timer`]: The `RevealTimer` seam and the `VirtualClock`
//! - [`catalog`]: The fortunes
//! - [`random`]: Injected index selection
//! - [`config`]: TOML + env + CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod random;
pub mod state;
pub mod timer;
