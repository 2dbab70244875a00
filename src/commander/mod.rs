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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when a command is submitted.
//!
//! # Commands
//!
//! * `q` / `quit` - exit the application.
//! * `search <text>` - replace the menu search text.
//! * `clear` - clear the menu search text.
//! * `fav <name>` - toggle the favourite status of the named item.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::{debug, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                if !buffer.trim().is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        warn!(command = %buffer, error = %e, "failed to dispatch command");
                    }
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        debug!(command = %buffer, "running command");

        let buffer = buffer.trim_start();

        // Search text is passed on exactly as typed after the separator.
        if let Some(text) = buffer.strip_prefix("search ") {
            event_tx.send(AppEvent::SetSearchText(text.to_string()))?;
            return Ok(());
        }

        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

            ["clear"] | ["search"] => event_tx.send(AppEvent::SetSearchText(String::new()))?,

            ["fav", name_parts @ ..] if !name_parts.is_empty() => {
                event_tx.send(AppEvent::ToggleFavourite(name_parts.join(" ")))?
            }

            ["fav"] => event_tx.send(AppEvent::Status("Usage: fav <name>".to_string()))?,

            [] => {}

            [cmd, ..] => event_tx.send(AppEvent::Status(format!("Unknown command: {}", cmd)))?,
        }

        Ok(())
    }
}
