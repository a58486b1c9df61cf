/*
question_select.rs

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

//! Select the questions of a category.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use crate::archive::QuestionRecord;

/// Select one question per target value.
///
/// For each target value, a random unused question with that exact value is selected.
/// If there is none, the unused question with the closest value is taken instead (the first
/// one in the list when several are equally close).
/// A question is never used twice: two records with the same question text count as the same
/// question.
///
/// Return None when the category runs out of unused questions. In that case no partial
/// selection is returned.
pub fn select_unique_questions<'a, R: Rng + ?Sized>(
    questions: &'a [QuestionRecord],
    target_values: &[u32],
    rng: &mut R,
) -> Option<Vec<&'a QuestionRecord>> {
    let mut selected: Vec<&QuestionRecord> = Vec::with_capacity(target_values.len());
    let mut used: HashSet<&str> = HashSet::with_capacity(target_values.len());

    for &target in target_values {
        let matching: Vec<&QuestionRecord> = questions
            .iter()
            .filter(|q| q.numeric_value() == target && !used.contains(q.question.as_str()))
            .collect();

        let chosen: &QuestionRecord = match matching.choose(rng) {
            Some(q) => *q,
            None => {
                let closest: Option<&QuestionRecord> = questions
                    .iter()
                    .filter(|q| !used.contains(q.question.as_str()))
                    .min_by_key(|q| q.numeric_value().abs_diff(target));
                match closest {
                    Some(q) => {
                        debug!(
                            "    No {target} question in {:?}, using {} instead",
                            q.category, q.value
                        );
                        q
                    }
                    None => {
                        debug!(
                            "    Not enough unique questions for the {target} value ({} selected)",
                            selected.len()
                        );
                        return None;
                    }
                }
            }
        };
        used.insert(chosen.question.as_str());
        selected.push(chosen);
    }
    Some(selected)
}
