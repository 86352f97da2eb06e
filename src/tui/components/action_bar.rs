//! # Action Bar Component
//!
//! The two buttons under the slip: share and new fortune. Rendered only
//! once the reveal cascade has finished; before that the row stays blank
//! so the layout does not jump.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Width of each button, borders included.
pub const BUTTON_WIDTH: u16 = 26;
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Share,
    NewFortune,
}

pub struct ActionBar<'a> {
    pub visible: bool,
    /// Where sharing goes, e.g. "Farcaster".
    pub share_target: &'a str,
}

impl<'a> ActionBar<'a> {
    pub fn new(visible: bool, share_target: &'a str) -> Self {
        Self {
            visible,
            share_target,
        }
    }

    /// Areas of the share and new-fortune buttons within `area`.
    pub fn button_areas(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Length(BUTTON_WIDTH)])
            .spacing(BUTTON_GAP)
            .flex(Flex::Center)
            .areas(area)
    }

    /// Which button, if any, sits at (`col`, `row`).
    pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<Button> {
        let [share, new_fortune] = Self::button_areas(area);
        let pos = ratatui::layout::Position::new(col, row);
        if share.contains(pos) {
            Some(Button::Share)
        } else if new_fortune.contains(pos) {
            Some(Button::NewFortune)
        } else {
            None
        }
    }

    fn button(label: String, color: Color) -> Paragraph<'static> {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
    }
}

impl Component for ActionBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }
        let [share, new_fortune] = Self::button_areas(area);
        frame.render_widget(
            Self::button(format!("[s] Share on {}", self.share_target), Color::Magenta),
            share,
        );
        frame.render_widget(
            Self::button("[n] New Fortune".to_string(), Color::Yellow),
            new_fortune,
        );
    }
}
