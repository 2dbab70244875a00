// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Pizzeria storefront TUI.
//!
//! A terminal-based menu for a pizza shop: a header with the shop name, a
//! searchable menu with per-item favourites, and a footer that reflects the
//! shop's opening hours.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle, and renders the UI after every event.
//! * An **Input Thread** forwards key presses as application events.
//! * A **Tick Thread** sends a periodic event so the open/closed state follows
//!   the clock without user input.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the event loop fails. Communication
//! between the helper threads and the main thread is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod commander;
mod components;
mod config;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{debug, info, warn};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::MenuView,
    config::AppConfig,
    model::{catalog::Catalog, view_state::ViewState},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) catalog: Catalog,
    pub(crate) view_state: ViewState,

    pub(crate) menu_view: MenuView,
    pub(crate) commander: Commander,
    pub(crate) status: Option<String>,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,
}

impl App {
    /// Create a new instance of application state around a fixed catalog.
    pub(crate) fn new(config: AppConfig, catalog: Catalog) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut menu_view = MenuView::new();
        menu_view.clamp_selection(catalog.len());

        Self {
            config,
            theme: Theme::default(),
            catalog,
            view_state: ViewState::new(),
            menu_view,
            commander: Commander::new(),
            status: None,
            event_tx,
            event_rx,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, builds the catalog, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {:#}", e);
    }

    config.validate().context("Invalid configuration")?;

    let catalog = Catalog::standard().context("Failed to build menu catalog")?;

    info!(config_version = config.version, items = catalog.len(), "starting storefront");
    for item in catalog.items() {
        debug!(
            name = %item.name,
            price = item.price,
            image = %item.image_ref,
            available = item.available,
            "menu item"
        );
    }

    let mut app = App::new(config, catalog);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("storefront closed");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            warn!(error = %e, "failed to set terminal background");
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the helper threads and enters the main event loop.
///
/// * An input thread to read keyboard events.
/// * A tick thread to re-render as the clock moves on.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(..)) => {
                    if tx_keys.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                    // Without input the user can no longer quit, end the event loop.
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Failed to read terminal input: {}", e)));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, so the
    // open/closed state is refreshed even when the user is idle.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
