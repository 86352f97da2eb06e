use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    /// Enter or Space: open a closed cookie, or take a new one when open.
    Activate,
    Share,
    NewFortune,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => map_event(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events arrive when the keyboard enhancement protocol is on
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Activate),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Share),
        (_, KeyCode::Char('n')) => Some(TuiEvent::NewFortune),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_event(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Activate));
        assert_eq!(map_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(TuiEvent::Activate));
        assert_eq!(map_event(key(KeyCode::Char('s'), KeyModifiers::NONE)), Some(TuiEvent::Share));
        assert_eq!(map_event(key(KeyCode::Char('n'), KeyModifiers::NONE)), Some(TuiEvent::NewFortune));
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(TuiEvent::ForceQuit));
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release), None);
    }

    #[test]
    fn test_left_click_mapping() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click), Some(TuiEvent::MouseClick(4, 7)));
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
