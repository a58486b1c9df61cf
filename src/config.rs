/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Quizboard.

Quizboard is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Quizboard is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Quizboard. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build and runtime configuration.
//!
//! Default values can be overridden with the `QUIZBOARD_ARCHIVE`, `QUIZBOARD_BOARDS_DIR`, and
//! `QUIZBOARD_PORT` environment variables. Command-line options take precedence over both.

use std::env;
use std::path::PathBuf;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Archive of historical questions.
pub const DEFAULT_ARCHIVE: &str = "jeopardy_questions_archive.json";

/// File written by the command-line generator.
pub const DEFAULT_OUTPUT: &str = "boards/board_random.json";

/// Directory where the editor saves boards.
pub const DEFAULT_BOARDS_DIR: &str = "boards";

/// Address the HTTP service listens on.
pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8000;

fn env_path(name: &str, default: &str) -> PathBuf {
    env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Read `QUIZBOARD_ARCHIVE` (default [`DEFAULT_ARCHIVE`]).
pub fn archive_path() -> PathBuf {
    env_path("QUIZBOARD_ARCHIVE", DEFAULT_ARCHIVE)
}

/// Read `QUIZBOARD_BOARDS_DIR` (default [`DEFAULT_BOARDS_DIR`]).
pub fn boards_dir() -> PathBuf {
    env_path("QUIZBOARD_BOARDS_DIR", DEFAULT_BOARDS_DIR)
}

/// Read `QUIZBOARD_PORT` (default [`DEFAULT_PORT`]). Unparsable values are ignored.
pub fn server_port() -> u16 {
    env::var("QUIZBOARD_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
