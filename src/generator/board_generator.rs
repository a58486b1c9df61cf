/*
board_generator.rs

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

//! Generate a complete random board.

use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::category_index::CategoryIndex;
use super::daily_double;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::final_question;
use super::round_assembler;
use crate::archive::{Archive, ArchiveCache, ArchiveError, Round};
use crate::board::Board;

/// Number of daily doubles in the first round.
pub const ROUND_A_DAILY_DOUBLES: usize = 1;

/// Number of daily doubles in the second round.
pub const ROUND_B_DAILY_DOUBLES: usize = 2;

/// Type of errors.
#[derive(Debug)]
pub enum BoardError {
    /// The difficulty label is not one of the known levels.
    InvalidDifficulty(String),

    /// The archive cannot be loaded.
    Archive(ArchiveError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::InvalidDifficulty(label) => {
                let known: Vec<String> = Difficulty::all().map(|d| d.to_string()).collect();
                write!(
                    f,
                    "invalid difficulty {label:?}, choose from: {}",
                    known.join(", ")
                )
            }
            BoardError::Archive(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoardError::InvalidDifficulty(_) => None,
            BoardError::Archive(e) => Some(e),
        }
    }
}

impl From<ArchiveError> for BoardError {
    fn from(e: ArchiveError) -> Self {
        BoardError::Archive(e)
    }
}

/// Generate a board for the given difficulty label.
///
/// # Errors
///
/// The function returns an error if the label is not a known difficulty level. Missing data
/// in the archive never fails: the board gets fewer categories or the placeholder final
/// question.
pub fn generate_board<R: Rng + ?Sized>(
    archive: &Archive,
    difficulty: &str,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(generate_board_for(archive, difficulty, rng))
}

/// Generate a board for the given difficulty label from the cached archive.
///
/// The label is validated before the archive is loaded.
pub fn generate_board_from_cache<R: Rng + ?Sized>(
    cache: &ArchiveCache,
    difficulty: &str,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let difficulty: Difficulty = difficulty.parse()?;
    let archive = cache.get()?;
    Ok(generate_board_for(&archive, difficulty, rng))
}

/// Generate a board for the given difficulty level.
pub fn generate_board_for<R: Rng + ?Sized>(
    archive: &Archive,
    difficulty: Difficulty,
    rng: &mut R,
) -> Board {
    let start: Instant = Instant::now();
    let profile: DifficultyProfile = difficulty.profile();
    debug!(
        "Generating {difficulty} board: {}",
        profile.description
    );

    let index: CategoryIndex = CategoryIndex::build(archive);

    let mut round_a = round_assembler::select_categories_for_round(
        &index,
        Round::RoundA,
        profile.target_values(Round::RoundA),
        round_assembler::NUM_CATEGORIES,
        rng,
    );
    daily_double::add_daily_doubles(
        &mut round_a,
        ROUND_A_DAILY_DOUBLES,
        daily_double::MIN_VALUE_INDEX,
        rng,
    );

    let mut round_b = round_assembler::select_categories_for_round(
        &index,
        Round::RoundB,
        profile.target_values(Round::RoundB),
        round_assembler::NUM_CATEGORIES,
        rng,
    );
    daily_double::add_daily_doubles(
        &mut round_b,
        ROUND_B_DAILY_DOUBLES,
        daily_double::MIN_VALUE_INDEX,
        rng,
    );

    let final_question = final_question::select_final_question(archive, rng);

    info!(
        "Generated {difficulty} board: {} + {} categories, final in {:?} ({:.3}s)",
        round_a.len(),
        round_b.len(),
        final_question.category,
        start.elapsed().as_secs_f32()
    );
    Board {
        round_a,
        round_b,
        final_question,
    }
}
