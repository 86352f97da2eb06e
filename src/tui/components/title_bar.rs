//! # TitleBar Component
//!
//! Top status bar showing the app name and the latest status message.
//!
//! ## Responsibilities
//!
//! - Display the app name (always)
//! - Display the status message ("Cracking the cookie...", "Share link: ...")
//! - Show a share counter once something has been shared this run
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.shares);
//! title_bar.render(frame, title_area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Shares**: `"🥠 Fortune Caster | Share link: ... | shared 2×"`
//! 2. **Status message**: `"🥠 Fortune Caster | Your fortune awaits"`
//! 3. **Default**: `"🥠 Fortune Caster"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const APP_TITLE: &str = "🥠 Fortune Caster";

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g., "Cracking the cookie...")
    pub status_message: String,
    /// Successful shares this run
    pub shares: usize,
}

impl TitleBar {
    pub fn new(status_message: String, shares: usize) -> Self {
        Self {
            status_message,
            shares,
        }
    }

    fn text(&self) -> String {
        let mut text = APP_TITLE.to_string();
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.shares > 0 {
            text.push_str(&format!(" | shared {}×", self.shares));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
