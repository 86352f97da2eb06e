//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Every component here is stateless: it is built each frame from `App`
//! and `TuiState` props and rendered into the area `ui.rs` hands it.
//! Persistent presentation state (restock cooldown, animation clock)
//! lives in `TuiState`, never inside a component.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── cookie.rs        (Whole / cracked cookie art)
//! ├── fortune_slip.rs  (Wrapped fortune on a paper slip)
//! └── action_bar.rs    (Share / New Fortune buttons + hit testing)
//! ```

pub mod action_bar;
pub mod cookie;
pub mod fortune_slip;
mod title_bar;

pub use action_bar::{ActionBar, Button};
pub use cookie::{Cookie, CookieShape};
pub use fortune_slip::FortuneSlip;
pub use title_bar::TitleBar;
