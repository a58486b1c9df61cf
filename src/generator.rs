/*
generator.rs

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

//! Generate random boards from the archive.
//!
//! A board is generated for a [`difficulty::Difficulty`] level.
//! Each level provides, through its [`difficulty::DifficultyProfile`], the point values of the
//! cells of the two rounds.
//!
//! Generating a board goes through the following steps:
//!
//! * The archive questions are grouped by category and round into a
//!   [`category_index::CategoryIndex`] object.
//!   Incomplete archive entries are dropped at this step.
//!
//! * For each round, [`round_assembler::select_categories_for_round`] picks up to six random
//!   categories that have enough distinct questions.
//!   For each category, [`question_select::select_unique_questions`] selects one question per
//!   point value.
//!   A category that runs out of questions is dropped, and the round gets fewer columns.
//!
//! * [`daily_double::add_daily_doubles`] marks random cells as daily doubles: one in the first
//!   round and two in the second round, never in the first two rows.
//!
//! * [`final_question::select_final_question`] picks the final question.
//!   If the archive has none, then a placeholder question is used.
//!
//! All the randomized functions take the random number generator as a parameter.
//! Passing a seeded generator produces the same board for the same archive.

pub mod board_generator;
pub mod category_index;
pub mod daily_double;
pub mod difficulty;
pub mod final_question;
pub mod question_select;
pub mod round_assembler;
