/*
board.rs

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

//! Save and restore boards.
//!
//! Boards are saved under a name that the user chooses, as `<name>.json` files in the boards
//! directory.
//! The saved object is a serialization of the [`Board`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::board::Board;

/// Name used when the user does not provide a usable one.
pub const DEFAULT_BOARD_NAME: &str = "board_custom";

/// Write the board to the provided file, creating the parent directories if need be.
pub fn write_board(path: &Path, board: &Board) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, board)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Object to save and restore boards.
pub struct SaverBoard {
    /// Directory where the boards are saved.
    boards_dir: PathBuf,
}

impl SaverBoard {
    /// Create a [`SaverBoard`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the boards must be saved.
    /// The directory is created when the first board is saved.
    pub fn new(boards_dir: PathBuf) -> Self {
        debug!("Boards directory: {boards_dir:?}");
        Self { boards_dir }
    }

    /// Turn a user provided name into a file name.
    ///
    /// Only the last path component is kept, so that a name cannot point outside the boards
    /// directory, and the `.json` extension is removed.
    pub fn sanitize_name(name: &str) -> String {
        let base: &str = Path::new(name.trim())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let base: &str = base.strip_suffix(".json").unwrap_or(base);
        if base.is_empty() {
            DEFAULT_BOARD_NAME.to_string()
        } else {
            base.to_string()
        }
    }

    /// Return the path of the file for the given board name.
    pub fn board_path(&self, name: &str) -> PathBuf {
        self.boards_dir
            .join(format!("{}.json", Self::sanitize_name(name)))
    }

    /// Save the provided [`Board`] object and return the path of the file.
    pub fn save_board(&self, name: &str, board: &Board) -> Result<PathBuf, Box<dyn Error>> {
        let path: PathBuf = self.board_path(name);
        write_board(&path, board)?;
        debug!("Saved board to {path:?}");
        Ok(path)
    }

    /// Retrieve a saved [`Board`] object.
    ///
    /// Return the [`Board`] object or None if there is no board with that name.
    pub fn get_board(&self, name: &str) -> Result<Option<Board>, Box<dyn Error>> {
        let file: File;
        match File::open(self.board_path(name)) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let board: Board = serde_json::from_reader(reader)?;
        Ok(Some(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardCell, Category};

    #[test]
    fn names_are_sanitized() {
        assert_eq!(SaverBoard::sanitize_name("my_board"), "my_board");
        assert_eq!(SaverBoard::sanitize_name("my_board.json"), "my_board");
        assert_eq!(SaverBoard::sanitize_name("../../etc/passwd"), "passwd");
        assert_eq!(SaverBoard::sanitize_name("/tmp/x/holiday.json"), "holiday");
        assert_eq!(SaverBoard::sanitize_name(""), DEFAULT_BOARD_NAME);
        assert_eq!(SaverBoard::sanitize_name(".json"), DEFAULT_BOARD_NAME);
        assert_eq!(SaverBoard::sanitize_name(".."), DEFAULT_BOARD_NAME);
    }

    #[test]
    fn saved_board_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let saver = SaverBoard::new(dir.path().join("boards"));

        let mut board = Board::new();
        let mut category = Category::new("POETS");
        category
            .questions
            .push(BoardCell::new(200, "HE WROTE HOWL", "Who is Ginsberg?"));
        board.round_a.push(category);

        let path = saver.save_board("../poets.json", &board).expect("save");
        assert_eq!(path, dir.path().join("boards").join("poets.json"));
        assert_eq!(saver.get_board("poets").expect("read"), Some(board));
        assert_eq!(saver.get_board("sonnets").expect("read"), None);
    }

    #[test]
    fn corrupted_board_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let saver = SaverBoard::new(dir.path().to_path_buf());
        fs::write(saver.board_path("broken"), "{ not json").expect("write");
        assert!(saver.get_board("broken").is_err());
    }
}
