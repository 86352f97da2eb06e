//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (closed cookie wobbling, reveal in progress, restocking):
//!   draws every ~80ms.
//! - **Idle** (fortune fully revealed): sleeps up to 500ms and only redraws
//!   on events, fired reveals, or terminal resize.
//!
//! Reveal timers are tokio tasks that report back through the same mpsc
//! channel the loop drains every iteration, so all state changes happen on
//! this thread.

pub mod component;
pub mod components;
pub mod event;
pub mod reveal_timer;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::FortuneCatalog;
use crate::core::config::ResolvedConfig;
use crate::core::controller::CookieController;
use crate::core::random;
use crate::core::state::{App, InteractionState};
use crate::share::WarpcastShare;
use crate::tui::components::Button;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::reveal_timer::TokioRevealTimer;
use crate::tui::ui::Hit;

/// How long the cookie stays away after a reset before a new one can be cracked.
pub const RESTOCK_DELAY: Duration = Duration::from_millis(500);

const ANIMATING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Set after a reset; the closed cookie is hidden until then.
    pub restock_until: Option<Instant>,
    // Animation state
    pub wobble: i8,
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            restock_until: None,
            wobble: 0,
            pulse_value: 0.0,
        }
    }

    pub fn is_restocking(&self) -> bool {
        self.restock_until.is_some()
    }

    pub fn start_restock(&mut self, now: Instant) {
        self.restock_until = Some(now + RESTOCK_DELAY);
    }

    /// Ends the restock cooldown once it has elapsed. Returns `true` if it just ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.restock_until {
            Some(until) if now >= until => {
                self.restock_until = None;
                true
            }
            _ => false,
        }
    }

    /// Updates wobble and pulse from seconds since startup.
    pub fn animate(&mut self, elapsed: f32) {
        self.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
        self.wobble = ((elapsed * 2.0).sin() * 1.5).round().clamp(-1.0, 1.0) as i8;
    }

    pub fn is_animating(&self, state: &InteractionState) -> bool {
        !state.is_open() || state.is_revealing() || self.is_restocking()
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Runs `on_drop` when it goes out of scope. `run` uses it so the terminal
/// is restored on every exit, including `?` returns.
struct RestoreGuard<F: FnOnce()> {
    on_drop: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(on_drop: F) -> Self {
        Self {
            on_drop: Some(on_drop),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(on_drop) = self.on_drop.take() {
            on_drop();
        }
    }
}

/// Translates one input event into controller actions.
///
/// Share and new-fortune only exist once the actions are visible; cracking
/// only works on a closed cookie that is not restocking.
pub fn dispatch(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    frame_area: Rect,
    now: Instant,
) -> Effect {
    let actions_visible = app.state().actions_visible();
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::Redraw,
        TuiEvent::Activate => {
            if !app.state().is_open() {
                crack(app, tui)
            } else if actions_visible {
                new_fortune(app, tui, now)
            } else {
                Effect::None
            }
        }
        TuiEvent::NewFortune if actions_visible => new_fortune(app, tui, now),
        TuiEvent::Share if actions_visible => update(app, Action::Share),
        TuiEvent::NewFortune | TuiEvent::Share => Effect::None,
        TuiEvent::MouseClick(col, row) => {
            match ui::hit_test(col, row, frame_area, app.state(), tui.is_restocking()) {
                Some(Hit::Cookie) => crack(app, tui),
                Some(Hit::Button(Button::Share)) => update(app, Action::Share),
                Some(Hit::Button(Button::NewFortune)) => new_fortune(app, tui, now),
                None => Effect::None,
            }
        }
    }
}

fn crack(app: &mut App, tui: &TuiState) -> Effect {
    if tui.is_restocking() {
        debug!("Ignoring crack: still restocking");
        return Effect::None;
    }
    update(app, Action::Open)
}

fn new_fortune(app: &mut App, tui: &mut TuiState, now: Instant) -> Effect {
    tui.start_restock(now);
    update(app, Action::Reset)
}

pub fn run(config: ResolvedConfig, catalog: FortuneCatalog) -> std::io::Result<()> {
    // Channel for actions from background tasks (reveal timers)
    let (tx, rx) = mpsc::channel();

    let share = WarpcastShare::new(
        config.compose_url.clone(),
        config.app_url.clone(),
        config.open_browser,
    );
    let controller = CookieController::new(
        catalog,
        random::from_seed(config.seed),
        Box::new(TokioRevealTimer::new(tx)),
        Box::new(share),
        config.delays,
    );
    let mut app = App::new(controller);
    let mut tui = TuiState::new();

    info!(
        "Starting event loop (full reveal takes {:?})",
        app.controller.delays().total()
    );

    let mut terminal = ratatui::init();
    let _restore_guard = RestoreGuard::new(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if tui.tick(Instant::now()) {
            app.status_message = String::from("Press Enter to crack open your cookie");
            needs_redraw = true;
        }

        let animating = tui.is_animating(app.state());
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.animate(start_time.elapsed().as_secs_f32());
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch(event, &mut app, &mut tui, frame_area, Instant::now()) {
                Effect::Quit => break 'event_loop,
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
        }

        // Fired reveals
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Redraw {
                needs_redraw = true;
            }
        }
    }

    info!("Shutting down after {} share(s)", app.shares);
    Ok(())
}
