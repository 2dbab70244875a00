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

//! Shop opening hours.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

const DEFAULT_OPEN_HOUR: u32 = 10;
const DEFAULT_CLOSE_HOUR: u32 = 22;

/// The half-open range of hours `[open, close)` during which the shop takes
/// orders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpeningHours {
    pub(crate) open: u32,
    pub(crate) close: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_HOUR,
            close: DEFAULT_CLOSE_HOUR,
        }
    }
}

impl OpeningHours {
    /// Whether the shop is open at `hour` (0-23).
    pub(crate) fn is_open(&self, hour: u32) -> bool {
        self.open <= hour && hour < self.close
    }
}

/// The current local hour of the day.
pub(crate) fn current_hour() -> u32 {
    Local::now().hour()
}
