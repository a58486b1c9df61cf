/*
round_assembler.rs

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

//! Select the categories of a round and fill their cells.

use log::{Level, debug, log_enabled, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use super::category_index::CategoryIndex;
use super::question_select;
use crate::archive::{QuestionRecord, Round};
use crate::board::{BoardCell, Category};

/// Maximum number of categories per round.
pub const NUM_CATEGORIES: usize = 6;

/// Minimum number of distinct question texts for a category to be used in a round.
pub const MIN_UNIQUE_QUESTIONS: usize = 5;

/// Whether the category questions can fill a column of `num_values` cells.
pub fn is_viable(questions: &[QuestionRecord], num_values: usize) -> bool {
    let unique: usize = questions
        .iter()
        .map(|q| q.question.as_str())
        .collect::<HashSet<&str>>()
        .len();
    unique >= MIN_UNIQUE_QUESTIONS && questions.len() >= num_values
}

/// Return the names of the viable categories for the round, in index order.
pub fn viable_categories(index: &CategoryIndex, round: Round, num_values: usize) -> Vec<&str> {
    index
        .categories(round)
        .filter(|(_, questions)| is_viable(questions, num_values))
        .map(|(name, _)| name)
        .collect()
}

/// Build a board column from the selected questions.
///
/// The cell value comes from the target value at the same position, not from the archive.
/// Category and question texts are uppercased, answers are kept as is.
fn build_category(name: &str, selected: &[&QuestionRecord], target_values: &[u32]) -> Category {
    Category {
        name: name.trim().to_uppercase(),
        questions: selected
            .iter()
            .zip(target_values)
            .map(|(q, value)| BoardCell {
                value: *value,
                question: q.question.trim().to_uppercase(),
                answer: q.answer.trim().to_string(),
                image: q.image.clone(),
                ..Default::default()
            })
            .collect(),
    }
}

/// Select up to `num_categories` random viable categories for the round.
///
/// When fewer categories are viable, the round gets fewer columns.
/// A selected category that runs out of questions is dropped from the round.
pub fn select_categories_for_round<R: Rng + ?Sized>(
    index: &CategoryIndex,
    round: Round,
    target_values: &[u32],
    num_categories: usize,
    rng: &mut R,
) -> Vec<Category> {
    let mut viable: Vec<&str> = viable_categories(index, round, target_values.len());
    if viable.len() < num_categories {
        warn!(
            "Only {} viable categories available for the {round} round",
            viable.len()
        );
    }
    viable.shuffle(rng);
    viable.truncate(num_categories);

    if log_enabled!(Level::Debug) {
        debug!("Categories for the {round} round");
        debug!("    target values = {target_values:?}");
        debug!("       categories = {viable:?}");
    }

    let mut round_data: Vec<Category> = Vec::with_capacity(viable.len());
    for name in viable {
        let questions: &[QuestionRecord] = match index.questions(name, round) {
            Some(q) => q,
            None => continue,
        };
        match question_select::select_unique_questions(questions, target_values, rng) {
            Some(selected) => round_data.push(build_category(name, &selected, target_values)),
            None => debug!("    Dropping category {name:?}: not enough unique questions"),
        }
    }
    round_data
}
