//! # Cookie Component
//!
//! The cookie itself: whole and gently wobbling while closed, cracked in
//! two once opened.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const WHOLE: &[&str] = &[
    "      _.-------._      ",
    "   .-'  .  '  .  '-.   ",
    "  /   '   .   '   .  \\ ",
    " |  .   '   .   '     |",
    "  \\    .   '   .     / ",
    "   '-._  '   .  _.-'   ",
    "       '-------'       ",
];

const CRACKED: &[&str] = &[
    "   _.---._          _.---._   ",
    " .'  .  ' )        ( '  .  '. ",
    "(  '  . .'          '. .  '  )",
    " '-.__.-'            '-.__.-' ",
];

/// Pulse intensity above which the whole cookie is drawn bold.
const PULSE_BOLD_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieShape {
    Whole,
    Cracked,
}

pub struct Cookie {
    pub shape: CookieShape,
    /// Horizontal sway in columns: -1, 0 or 1.
    pub wobble: i8,
    /// 0.0 to 1.0, drives the hover-style glow.
    pub pulse: f32,
}

impl Cookie {
    pub fn new(shape: CookieShape, wobble: i8, pulse: f32) -> Self {
        Self { shape, wobble, pulse }
    }

    pub fn required_height(shape: CookieShape) -> u16 {
        Self::art(shape).len() as u16
    }

    fn art(shape: CookieShape) -> &'static [&'static str] {
        match shape {
            CookieShape::Whole => WHOLE,
            CookieShape::Cracked => CRACKED,
        }
    }

    /// Shifts a centered line by padding the opposite side.
    fn sway(line: &str, wobble: i8) -> String {
        match wobble.signum() {
            1 => format!("  {line}"),
            -1 => format!("{line}  "),
            _ => line.to_string(),
        }
    }
}

impl Component for Cookie {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = Style::default().fg(Color::Yellow);
        if self.shape == CookieShape::Whole && self.pulse > PULSE_BOLD_THRESHOLD {
            style = style.add_modifier(Modifier::BOLD);
        }

        let wobble = match self.shape {
            CookieShape::Whole => self.wobble,
            CookieShape::Cracked => 0,
        };
        let lines: Vec<Line> = Self::art(self.shape)
            .iter()
            .map(|l| Line::styled(Self::sway(l, wobble), style))
            .collect();

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
