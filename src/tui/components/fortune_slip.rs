//! # Fortune Slip Component
//!
//! The paper slip that holds the fortune. Text is wrapped with `textwrap`
//! and the slip is sized to its widest line so short fortunes get a small
//! slip instead of a full-width box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Widest the text inside a slip may get, in columns.
const MAX_TEXT_WIDTH: u16 = 48;
/// Borders (2) + horizontal padding (2 per side).
const HORIZONTAL_OVERHEAD: u16 = 2 + 2 * 2;
/// Borders (top + bottom).
const VERTICAL_OVERHEAD: u16 = 2;

pub struct FortuneSlip<'a> {
    pub fortune: &'a str,
}

impl<'a> FortuneSlip<'a> {
    pub fn new(fortune: &'a str) -> Self {
        Self { fortune }
    }

    /// Wraps the fortune for an area `available` columns wide.
    pub fn wrapped_lines(&self, available: u16) -> Vec<String> {
        let text_width = available
            .saturating_sub(HORIZONTAL_OVERHEAD)
            .clamp(1, MAX_TEXT_WIDTH);
        textwrap::wrap(self.fortune, text_width as usize)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Outer size (width, height) of the slip within `available` columns.
    pub fn size(&self, available: u16) -> (u16, u16) {
        let lines = self.wrapped_lines(available);
        let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let width = (widest + HORIZONTAL_OVERHEAD).min(available);
        let height = lines.len() as u16 + VERTICAL_OVERHEAD;
        (width, height)
    }
}

impl Component for FortuneSlip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.size(area.width);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [slip_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let text = self.wrapped_lines(area.width).join("\n");
        let slip = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .padding(Padding::horizontal(2)),
            );
        frame.render_widget(slip, slip_area);
    }
}
