/*
daily_double.rs

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

//! Place the daily doubles.
//!
//! Daily doubles are never placed in the first rows of the board, which hold the lowest values.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Category;

/// Default first row (zero-based) that can hold a daily double.
pub const MIN_VALUE_INDEX: usize = 2;

/// Mark `count` random cells of the round as daily doubles and return the number of marked
/// cells.
///
/// Only the cells at row `min_value_index` or below are eligible. When there are fewer eligible
/// cells than `count`, all of them are marked.
/// Nothing prevents two daily doubles from landing in the same category.
pub fn add_daily_doubles<R: Rng + ?Sized>(
    round: &mut [Category],
    count: usize,
    min_value_index: usize,
    rng: &mut R,
) -> usize {
    let mut positions: Vec<(usize, usize)> = round
        .iter()
        .enumerate()
        .flat_map(|(cat_idx, category)| {
            (min_value_index..category.questions.len()).map(move |q_idx| (cat_idx, q_idx))
        })
        .collect();
    positions.shuffle(rng);
    positions.truncate(count);

    for (cat_idx, q_idx) in &positions {
        debug!("Daily double in category {cat_idx}, row {q_idx}");
        round[*cat_idx].questions[*q_idx].daily_double = true;
    }
    positions.len()
}
