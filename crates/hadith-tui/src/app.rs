//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The loop is synchronous;
//! it must run inside an entered tokio runtime so the session can spawn its
//! requests and timers, and it drains their outcomes on every tick.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::DetailPopup,
        filter_bar::FilterBar,
        header::Header,
        help::HelpPopup,
        pager::Pager,
        query_bar::{QueryBar, QueryBarState},
        results_list::{ResultsList, ResultsListState, Truncation},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hadith_client::{SearchApi, Session};
use hadith_core::config::UiConfig;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Book,
    PageSize,
    Results,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Book,
            Focus::Book => Focus::PageSize,
            Focus::PageSize => Focus::Results,
            Focus::Results | Focus::Command => Focus::Query,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Query | Focus::Command => Focus::Results,
            Focus::Book => Focus::Query,
            Focus::PageSize => Focus::Book,
            Focus::Results => Focus::PageSize,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState<A> {
    pub session: Session<A>,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub query: QueryBarState,
    pub results: ResultsListState,
    pub truncation: Truncation,
    pub theme: Theme,
    pub show_help: bool,
    /// Detail popup for the item under the results cursor.
    pub show_detail: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<A> {
    state: AppState<A>,
}

impl<A: SearchApi> App<A> {
    pub fn new(session: Session<A>, ui: &UiConfig, theme: Theme) -> Self {
        let state = AppState {
            session,
            focus: Focus::Query,
            prev_focus: Focus::Query,
            query: QueryBarState::default(),
            results: ResultsListState::default(),
            truncation: Truncation {
                width: ui.truncate_width.max(1),
                full: ui.show_full,
            },
            theme,
            show_help: false,
            show_detail: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState<A> {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.tick();
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Fold finished background work into the state.
    pub fn tick(&mut self) {
        let s = &mut self.state;
        s.session.pump();
        if s.results.sync(s.session.controller().revision()) {
            s.show_detail = false;
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        if s.show_detail {
            if matches!(
                event,
                AppEvent::Enter | AppEvent::Escape | AppEvent::Quit | AppEvent::Char('q')
            ) {
                tracing::debug!("detail popup closed");
                s.show_detail = false;
            }
            return;
        }

        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    let outcome = Command::parse(&input).and_then(|cmd| {
                        tracing::debug!(command = ?cmd, "executing command");
                        execute_command(s, cmd)
                    });
                    match outcome {
                        Err(msg) if !msg.is_empty() => s.command_bar.error = Some(msg),
                        _ => {
                            s.command_bar.clear();
                            if s.focus == Focus::Command {
                                s.focus = s.prev_focus;
                            }
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::Query => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::Query => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape if s.focus == Focus::Query => {
                s.focus = Focus::Results;
            }

            AppEvent::FocusNext => s.focus = s.focus.next(),
            AppEvent::FocusPrev => s.focus = s.focus.prev(),
            AppEvent::QueryFocus => s.focus = Focus::Query,

            AppEvent::PrevPage => s.session.prev_page(),
            AppEvent::NextPage => s.session.next_page(),

            // ratatui picks up the new size on the next draw
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Alphabetic keys type text instead of triggering shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Query | Focus::Command)
}

/// Route an event to whatever owns the current focus.
fn dispatch_to_focused<A: SearchApi>(s: &mut AppState<A>, event: AppEvent) {
    match s.focus {
        Focus::Query => {
            if event == AppEvent::Enter {
                s.session.submit();
            } else if s.query.handle(&event) {
                s.session.query_changed(s.query.text.clone());
            }
        }
        Focus::Book => {
            if let AppEvent::Nav(dir @ (Direction::Left | Direction::Right)) = event {
                let controller = s.session.controller();
                let next = controller
                    .catalog()
                    .neighbor(controller.query().filter(), dir == Direction::Right);
                s.session.filter_changed(next);
            }
        }
        Focus::PageSize => {
            let size = s.session.controller().query().page_size();
            match event {
                AppEvent::Nav(Direction::Left) => s.session.page_size_changed(size.prev()),
                AppEvent::Nav(Direction::Right) => s.session.page_size_changed(size.next()),
                _ => {}
            }
        }
        Focus::Results => {
            let len = s.session.controller().results().items.len();
            match event {
                AppEvent::Nav(Direction::Left) => s.session.prev_page(),
                AppEvent::Nav(Direction::Right) => s.session.next_page(),
                AppEvent::Enter if s.results.cursor < len => {
                    tracing::debug!(cursor = s.results.cursor, "detail popup opened");
                    s.show_detail = true;
                }
                other => s.results.handle(&other, len),
            }
        }
        Focus::Command => {} // handled before dispatch
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw<A: SearchApi>(frame: &mut Frame, state: &AppState<A>) {
    let area = frame.area();
    let controller = state.session.controller();
    let view = controller.view();
    let theme = &state.theme;

    // header | query | filters | results | pager
    let [header, query, filters, results, pager] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Header::new(controller.catalog(), theme), header);
    frame.render_widget(
        QueryBar::new(
            &state.query,
            state.focus == Focus::Query,
            !state.session.is_idle(),
            theme,
        ),
        query,
    );
    frame.render_widget(
        FilterBar::new(
            controller.query().filter(),
            controller.query().page_size(),
            state.focus == Focus::Book,
            state.focus == Focus::PageSize,
            theme,
        ),
        filters,
    );
    frame.render_widget(
        ResultsList::new(
            &view,
            &state.results,
            state.focus == Focus::Results,
            state.truncation,
            theme,
        ),
        results,
    );
    frame.render_widget(Pager::new(&view, theme), pager);

    if state.show_detail {
        if let Some(item) = view.items.get(state.results.cursor) {
            frame.render_widget(DetailPopup::new(item, theme), area);
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        frame.set_cursor_position((state.command_bar.cursor_col(cmd_area), cmd_area.y));
        return;
    }

    if state.focus == Focus::Query {
        let qb = QueryBar::new(&state.query, true, false, theme);
        frame.set_cursor_position(qb.cursor_position(query));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
