/*
final_question.rs

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

//! Select the final question.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::archive::{Archive, RawRecord, populated};
use crate::board::FinalQuestion;

/// Select a random final question from the archive.
///
/// Only the final round entries with a category, a question, and an answer are eligible.
/// When there are none, the placeholder question is returned.
pub fn select_final_question<R: Rng + ?Sized>(archive: &Archive, rng: &mut R) -> FinalQuestion {
    let candidates: Vec<&RawRecord> = archive
        .records()
        .iter()
        .filter(|r| {
            r.is_final()
                && populated(&r.category).is_some()
                && populated(&r.question).is_some()
                && populated(&r.answer).is_some()
        })
        .collect();
    debug!("{} final questions available", candidates.len());

    let selected: &RawRecord = match candidates.choose(rng) {
        Some(r) => *r,
        None => {
            warn!("No final question in the archive, using the placeholder");
            return FinalQuestion::placeholder();
        }
    };
    FinalQuestion {
        category: selected
            .category
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_uppercase(),
        question: selected
            .question
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_uppercase(),
        answer: selected
            .answer
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        image: populated(&selected.image).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn placeholder_when_no_final_record() {
        let archive = Archive::from_records(vec![RawRecord::new(
            "POETS",
            "Jeopardy!",
            "$200",
            "Q",
            "A",
        )]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_final_question(&archive, &mut rng).is_placeholder());
    }

    #[test]
    fn final_record_is_normalized() {
        let mut incomplete = RawRecord::new("EMPTY", "Final Jeopardy!", "", "", "answer");
        incomplete.value = None;
        let mut complete = RawRecord::new(
            "Military men",
            "Final Jeopardy!",
            "",
            "He said the eyes of the world are upon you",
            "Eisenhower",
        );
        complete.value = None;
        let archive = Archive::from_records(vec![incomplete, complete]);

        let mut rng = StdRng::seed_from_u64(0);
        let selected = select_final_question(&archive, &mut rng);
        assert_eq!(selected.category, "MILITARY MEN");
        assert_eq!(
            selected.question,
            "HE SAID THE EYES OF THE WORLD ARE UPON YOU"
        );
        assert_eq!(selected.answer, "Eisenhower");
    }
}
