use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, InteractionState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActionBar, Button, Cookie, CookieShape, FortuneSlip, TitleBar};

/// Screen regions, top to bottom.
pub struct UiAreas {
    pub title: Rect,
    pub stage: Rect,
    pub actions: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> UiAreas {
    use Constraint::{Length, Min};
    let [title, stage, actions, footer] =
        Layout::vertical([Length(1), Min(0), Length(3), Length(1)]).areas(area);
    UiAreas {
        title,
        stage,
        actions,
        footer,
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cookie,
    Button(Button),
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let areas = layout(frame.area());
    let state = app.state();

    TitleBar::new(app.status_message.clone(), app.shares).render(frame, areas.title);
    draw_stage(frame, areas.stage, state, tui);
    ActionBar::new(state.actions_visible(), app.controller.share_target_name())
        .render(frame, areas.actions);

    let hint = Paragraph::new(Line::styled(
        footer_hint(state, tui.is_restocking()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, areas.footer);
}

fn draw_stage(frame: &mut Frame, area: Rect, state: &InteractionState, tui: &TuiState) {
    if !state.is_open() {
        if tui.is_restocking() {
            let baking = Paragraph::new(Line::styled(
                "baking a fresh cookie...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            frame.render_widget(baking, row);
        } else {
            let [cookie_area] = Layout::vertical([Constraint::Length(Cookie::required_height(
                CookieShape::Whole,
            ))])
            .flex(Flex::Center)
            .areas(area);
            Cookie::new(CookieShape::Whole, tui.wobble, tui.pulse_value).render(frame, cookie_area);
        }
        return;
    }

    let slip = FortuneSlip::new(state.selected_fortune());
    let slip_height = if state.message_visible() {
        slip.size(area.width).1
    } else {
        1
    };
    let [cookie_area, _gap, slip_area] = Layout::vertical([
        Constraint::Length(Cookie::required_height(CookieShape::Cracked)),
        Constraint::Length(1),
        Constraint::Length(slip_height),
    ])
    .flex(Flex::Center)
    .areas(area);

    Cookie::new(CookieShape::Cracked, 0, 0.0).render(frame, cookie_area);

    if state.message_visible() {
        let mut slip = slip;
        slip.render(frame, slip_area);
    } else {
        let unfolding = Paragraph::new(Line::styled(
            "✨ ✨ ✨",
            Style::default().fg(Color::Magenta),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(unfolding, slip_area);
    }
}

fn footer_hint(state: &InteractionState, restocking: bool) -> &'static str {
    if state.actions_visible() {
        "s share · n / enter new fortune · q quit"
    } else if state.is_open() {
        "q quit"
    } else if restocking {
        "please wait · q quit"
    } else {
        "enter / space / click to crack the cookie · q quit"
    }
}

/// Hit test: given a click position, find what (if anything) was clicked.
pub fn hit_test(
    col: u16,
    row: u16,
    frame_area: Rect,
    state: &InteractionState,
    restocking: bool,
) -> Option<Hit> {
    let areas = layout(frame_area);

    if !state.is_open() {
        let clickable = !restocking && areas.stage.contains(Position::new(col, row));
        return clickable.then_some(Hit::Cookie);
    }

    if state.actions_visible() {
        return ActionBar::hit_test(areas.actions, col, row).map(Hit::Button);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::timer::{Reveal, RevealStage};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn reveal_all(app: &mut App) {
        for stage in [RevealStage::Message, RevealStage::Actions] {
            let generation = app.controller.generation();
            update(app, Action::Reveal(Reveal { stage, generation }));
        }
    }

    #[test]
    fn test_layout_splits_screen() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.actions.height, 3);
        assert_eq!(areas.footer.y, 23);
        assert_eq!(areas.stage.height, 24 - 1 - 3 - 1);
    }

    #[test]
    fn test_draw_closed_cookie() {
        let app = test_app();
        let text = screen(&app, &TuiState::new());
        assert!(text.contains("Fortune Caster"));
        assert!(text.contains("'-------'"));
        assert!(text.contains("crack the cookie"));
        assert!(!text.contains("New Fortune"));
    }

    #[test]
    fn test_draw_hides_fortune_until_revealed() {
        let mut app = test_app();
        update(&mut app, Action::Open);
        let text = screen(&app, &TuiState::new());
        assert!(text.contains("'-.__.-'"));
        assert!(!text.contains(" A "));
        assert!(!text.contains("Share on"));
    }

    #[test]
    fn test_draw_fully_revealed() {
        let mut app = test_app();
        update(&mut app, Action::Open);
        reveal_all(&mut app);
        let text = screen(&app, &TuiState::new());
        assert!(text.contains("Share on recorder"));
        assert!(text.contains("[n] New Fortune"));
        assert!(text.contains("new fortune"));
    }

    #[test]
    fn test_draw_restocking() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.start_restock(std::time::Instant::now());
        let text = screen(&app, &tui);
        assert!(text.contains("baking a fresh cookie"));
        assert!(!text.contains("'-------'"));
    }

    #[test]
    fn test_hit_test_closed_cookie() {
        let frame = Rect::new(0, 0, 80, 24);
        let state = InteractionState::closed();
        assert_eq!(hit_test(40, 10, frame, &state, false), Some(Hit::Cookie));
        assert_eq!(hit_test(40, 10, frame, &state, true), None);
        assert_eq!(hit_test(40, 0, frame, &state, false), None, "title bar");
    }

    #[test]
    fn test_hit_test_buttons_only_when_visible() {
        let frame = Rect::new(0, 0, 80, 24);
        let mut app = test_app();
        update(&mut app, Action::Open);

        let areas = layout(frame);
        let [share, _] = ActionBar::button_areas(areas.actions);
        assert_eq!(hit_test(share.x + 1, share.y + 1, frame, app.state(), false), None);

        reveal_all(&mut app);
        assert_eq!(
            hit_test(share.x + 1, share.y + 1, frame, app.state(), false),
            Some(Hit::Button(Button::Share))
        );
        assert_eq!(hit_test(40, 10, frame, app.state(), false), None);
    }
}
