// src/tui/app.rs - Dashboard event loop, terminal session, and rendering.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::infra::config::Config;
use crate::infra::errors::BrightsideError;
use crate::infra::logger::StderrPause;

use super::keys::KeyBindings;
use super::state::{DashboardState, MenuKey, Notice, Transition, BLANK_MARKER, INSTRUCTIONS, MARKER};
use super::theme::Theme;

// ── Select hook ──────────────────────────────────────────────────

/// Called with the label of the option the user selected.
///
/// An `Err` is an action failure: it is shown in the status line and the
/// dashboard keeps running.
pub trait SelectHandler {
    fn on_select(&mut self, label: &str) -> Result<(), BrightsideError>;
}

/// Acknowledges the selection without running anything.
pub struct Acknowledge;

impl SelectHandler for Acknowledge {
    fn on_select(&mut self, label: &str) -> Result<(), BrightsideError> {
        tracing::info!(option = label, "menu option selected");
        Ok(())
    }
}

// ── Controller ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

pub struct Dashboard<H> {
    state: DashboardState,
    bindings: KeyBindings,
    handler: H,
    status: Option<StatusLine>,
}

impl<H: SelectHandler> Dashboard<H> {
    pub fn new(state: DashboardState, bindings: KeyBindings, handler: H) -> Self {
        Self {
            state,
            bindings,
            handler,
            status: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// One input step: update state, run the select hook, record the notice.
    pub fn step(&mut self, key: MenuKey) -> Transition {
        let transition = self.state.handle_input(key);
        tracing::debug!(?key, selected = self.state.selected(), "handled key");

        match &transition.notice {
            Some(notice @ Notice::Executing(label)) => {
                self.status = Some(match self.handler.on_select(label) {
                    Ok(()) => StatusLine::Info(notice.message()),
                    Err(e) => {
                        tracing::warn!(option = %label, error = %e, "menu action failed");
                        StatusLine::Error(format!("❌ {e}"))
                    }
                });
            }
            Some(notice @ Notice::Farewell) => {
                self.status = Some(StatusLine::Info(notice.message()));
            }
            None => {}
        }

        transition
    }
}

/// Run the loop until quit: draw, block on the next event, handle, redraw.
///
/// Generic over the event source and the draw call so it can be driven
/// without a terminal.
pub fn drive<H, E, D>(
    dashboard: &mut Dashboard<H>,
    mut next_event: E,
    mut draw: D,
) -> Result<(), BrightsideError>
where
    H: SelectHandler,
    E: FnMut() -> Result<Event, BrightsideError>,
    D: FnMut(&Dashboard<H>) -> Result<(), BrightsideError>,
{
    draw(dashboard)?;

    while dashboard.is_running() {
        match next_event()? {
            // Release/repeat events would double-step on platforms that report them.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let menu_key = dashboard.bindings.resolve(&key);
                if dashboard.step(menu_key).terminate {
                    break;
                }
                draw(dashboard)?;
            }
            Event::Resize(_, _) => draw(dashboard)?,
            _ => {}
        }
    }

    Ok(())
}

// ── Terminal session ─────────────────────────────────────────────

/// Raw mode plus alternate screen, restored on drop. Log output is
/// discarded for the session's lifetime.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _log_pause: StderrPause,
}

impl TerminalSession {
    fn acquire() -> Result<Self, BrightsideError> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(BrightsideError::TerminalInit(
                "stdin/stdout is not an interactive terminal".into(),
            ));
        }

        enable_raw_mode().map_err(|e| BrightsideError::TerminalInit(e.to_string()))?;

        match Self::enter() {
            Ok(terminal) => Ok(Self {
                terminal,
                _log_pause: StderrPause::new(),
            }),
            Err(e) => {
                restore_terminal();
                Err(BrightsideError::TerminalInit(e.to_string()))
            }
        }
    }

    fn enter() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        Ok(terminal)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the dashboard. Blocks until the user quits.
pub fn run_dashboard(config: &Config) -> Result<(), BrightsideError> {
    let bindings = KeyBindings::from_config(&config.dashboard.keys)?;
    let mut dashboard = Dashboard::new(DashboardState::jack(), bindings, Acknowledge);

    let mut session = TerminalSession::acquire()?;
    let result = drive(
        &mut dashboard,
        || event::read().map_err(BrightsideError::from),
        |d| {
            session.terminal.draw(|f| render(f, d))?;
            Ok(())
        },
    );
    drop(session);
    result?;

    if let Some(StatusLine::Info(farewell)) = dashboard.status() {
        println!("\n{farewell}");
    }
    Ok(())
}

// ── Rendering ────────────────────────────────────────────────────

/// Draw the menu text from `DashboardState::render` with styling, plus a
/// one-line status footer.
pub fn render<H>(f: &mut Frame, dashboard: &Dashboard<H>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    let state = &dashboard.state;
    let mut lines = vec![
        Line::from(Span::styled(state.title_line(), Theme::header())),
        Line::from(""),
        Line::from(Span::styled(INSTRUCTIONS, Theme::text_dim())),
        Line::from(""),
    ];
    lines.extend(state.option_lines().into_iter().map(|line| {
        if line.starts_with(MARKER) {
            Line::from(Span::styled(line, Theme::selected()))
        } else {
            debug_assert!(line.starts_with(BLANK_MARKER));
            Line::from(Span::styled(line, Theme::text()))
        }
    }));
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = match &dashboard.status {
        Some(StatusLine::Info(msg)) => Line::from(Span::styled(msg.as_str(), Theme::success())),
        Some(StatusLine::Error(msg)) => Line::from(Span::styled(msg.as_str(), Theme::error())),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(footer), chunks[1]);
}
