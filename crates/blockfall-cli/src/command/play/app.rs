use std::time::Duration;

use blockfall_engine::{Command, GameSession, RandomPieceSource, Status, TickDriver};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use ratatui_runtime::{App, RenderMode, Runtime};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Game(Command),
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent, status: Status) -> Option<Self> {
        let can_start = matches!(status, Status::NotStarted | Status::GameOver);
        match event.code {
            KeyCode::Left => Some(Self::Game(Command::ShiftLeft)),
            KeyCode::Right => Some(Self::Game(Command::ShiftRight)),
            KeyCode::Down => Some(Self::Game(Command::Descend)),
            KeyCode::Char(' ') => Some(Self::Game(Command::TogglePause)),
            KeyCode::Enter | KeyCode::Char('s') if can_start => Some(Self::Game(Command::Start)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings(status: Status) -> &'static [KeyBinding<'static>] {
        match status {
            Status::NotStarted | Status::GameOver => {
                &[(&["Enter", "s"], "Start"), (&["q", "Esc"], "Quit")]
            }
            Status::Running => &[
                (&["←", "→"], "Move"),
                (&["↓"], "Drop"),
                (&["Space"], "Pause"),
                (&["q", "Esc"], "Quit"),
            ],
            Status::Paused => &[(&["Space"], "Resume"), (&["q", "Esc"], "Quit")],
        }
    }
}

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession<RandomPieceSource>,
    ticks: TickDriver,
    fps: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession<RandomPieceSource>, ticks: TickDriver, fps: f64) -> Self {
        Self {
            session,
            ticks,
            fps,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession<RandomPieceSource> {
        &self.session
    }

    /// Holds the runtime's tick interval exactly while the game is running.
    fn sync_tick_interval(&mut self, runtime: &mut Runtime) {
        self.ticks.sync(&self.session);
        let interval = self.session.is_running().then(|| self.ticks.interval());
        runtime.set_tick_interval(interval);
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.fps));
        self.sync_tick_interval(runtime);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let status = self.session.state().status();
        if let Some(event) = event.as_key_event()
            && let Some(action) = Action::from_key_event(&event, status)
        {
            match action {
                Action::Game(command) => _ = self.session.apply(command),
                Action::Quit => self.is_exiting = true,
            }
            self.sync_tick_interval(runtime);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let status = self.session.state().status();
        let session_display = SessionDisplay::new(&self.session);
        let help = KeyBindingDisplay::new(Action::bindings(status));

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(session_display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help, help_area);
    }

    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration) {
        self.ticks.advance(&mut self.session, elapsed);
        self.sync_tick_interval(runtime);
    }
}
