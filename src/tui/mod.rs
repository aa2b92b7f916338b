//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the view tree,
//! and translates keyboard and mouse events into core actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread applies every action, one at a time, through
//! `core::runtime::Runtime`. Fetch effects run as tokio tasks and send
//! their completion action back over an mpsc channel; the loop drains it
//! between input batches. In-flight fetches are never cancelled, so when
//! two bio requests race the later response wins.
//!
//! Clicks are hit-tested against the tree that was last drawn, then
//! bubbled through it with `core::vdom::bubble`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::Demo;
use crate::api::{self, HttpFetcher, JsonFetcher};
use crate::core::action::{Action, Effect, FetchJson};
use crate::core::config::ResolvedConfig;
use crate::core::runtime::Runtime;
use crate::core::vdom::bubble;
use crate::core::view::hello_view;
use crate::tui::components::{StatusBar, TreeViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Idle poll timeout; completions from fetch tasks are picked up at least this often.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub tree_view: TreeViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            tree_view: TreeViewState::new(),
        }
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
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = match config.demo {
        Demo::People => run_people(&mut terminal, &config),
        Demo::Hello => run_hello(&mut terminal),
    };

    ratatui::restore();
    result
}

fn run_hello(terminal: &mut DefaultTerminal) -> std::io::Result<()> {
    let tree = hello_view();
    let mut tui = TuiState::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let mut status = StatusBar::new("Hello", "", false);
            terminal.draw(|f| ui::draw_ui(f, &tree, &mut status, ui::HELLO_HELP, &mut tui))?;
            needs_redraw = false;
        }
        match poll_event_timeout(POLL_TIMEOUT) {
            Some(TuiEvent::Quit | TuiEvent::ForceQuit) => break,
            Some(_) => needs_redraw = true,
            None => {}
        }
    }
    Ok(())
}

fn run_people(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> std::io::Result<()> {
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(HttpFetcher::new());

    // Channel for completion actions from fetch tasks
    let (tx, rx) = mpsc::channel::<Action>();

    let (mut runtime, init_effects) = Runtime::init(&config.base_url);
    let mut should_quit = run_effects(init_effects, &fetcher, &tx);

    let mut tui = TuiState::new();
    let mut drawn_tree = runtime.view();
    let mut needs_redraw = true;

    while !should_quit {
        if needs_redraw {
            drawn_tree = runtime.view();
            let mut status = ui::people_status(runtime.state());
            terminal.draw(|f| {
                ui::draw_ui(f, &drawn_tree, &mut status, ui::PEOPLE_HELP, &mut tui)
            })?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effects = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => runtime.dispatch(Action::Quit),
                TuiEvent::KeyDown(key) => runtime.key_down(key),
                TuiEvent::InputChar(' ') => match runtime.state().selected {
                    Some(index) => runtime.dispatch(Action::ToggleHighlight(index)),
                    None => Vec::new(),
                },
                TuiEvent::InputChar(c) => match c.to_digit(10) {
                    Some(d) if d >= 1 => runtime.dispatch(Action::Select(d as usize - 1)),
                    _ => Vec::new(),
                },
                TuiEvent::MouseClick(col, row) => match tui.tree_view.hit_test(col, row) {
                    Some(path) => {
                        debug!("Click at ({}, {}) hit {:?}", col, row, path);
                        bubble(&drawn_tree, &path)
                            .into_iter()
                            .flat_map(|action| runtime.dispatch(action))
                            .collect()
                    }
                    None => Vec::new(),
                },
            };
            if run_effects(effects, &fetcher, &tx) {
                should_quit = true;
                break;
            }
        }

        // Handle completion actions from fetch tasks
        while !should_quit && let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = runtime.dispatch(action);
            should_quit = run_effects(effects, &fetcher, &tx);
        }
    }

    info!("Leaving people demo");
    Ok(())
}

/// Start every fetch effect; returns true if a quit was requested.
fn run_effects(effects: Vec<Effect>, fetcher: &Arc<dyn JsonFetcher>, tx: &mpsc::Sender<Action>) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::FetchJson(request) => spawn_fetch(request, fetcher.clone(), tx.clone()),
            Effect::Quit => quit = true,
        }
    }
    quit
}

fn spawn_fetch(request: FetchJson, fetcher: Arc<dyn JsonFetcher>, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {} -> {}", request.url, request.action);
    tokio::spawn(async move {
        let action = api::fetch_json(fetcher.as_ref(), &request).await;
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver {} result for {}: receiver dropped",
                request.action, request.url
            );
        }
    });
}
