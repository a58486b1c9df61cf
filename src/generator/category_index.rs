/*
category_index.rs

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

//! Group the archive questions by category and round.

use log::debug;
use std::collections::BTreeMap;

use crate::archive::{Archive, QuestionRecord, RawRecord, Round};

/// Questions of the two main rounds, indexed by category name and then by round.
///
/// Categories are kept sorted by name so that a seeded random source always walks them in the
/// same order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: BTreeMap<String, BTreeMap<Round, Vec<QuestionRecord>>>,
}

impl CategoryIndex {
    /// Build the index from the archive.
    pub fn build(archive: &Archive) -> Self {
        Self::from_records(archive.records())
    }

    /// Build the index from a list of archive entries.
    ///
    /// Entries with a missing field, an unknown round, or belonging to the final round are
    /// skipped. Category names are compared as is (case-sensitive).
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut categories: BTreeMap<String, BTreeMap<Round, Vec<QuestionRecord>>> =
            BTreeMap::new();
        let mut skipped: usize = 0;

        for raw in records {
            let record: QuestionRecord = match QuestionRecord::from_raw(raw) {
                Some(r) if r.round != Round::Final => r,
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            categories
                .entry(record.category.clone())
                .or_default()
                .entry(record.round)
                .or_default()
                .push(record);
        }
        debug!(
            "Indexed {} categories ({skipped} entries skipped)",
            categories.len()
        );
        Self { categories }
    }

    /// Return the questions of a category for the given round.
    pub fn questions(&self, category: &str, round: Round) -> Option<&[QuestionRecord]> {
        self.categories
            .get(category)
            .and_then(|rounds| rounds.get(&round))
            .map(Vec::as_slice)
    }

    /// Iterate over the categories that have questions in the given round.
    pub fn categories(&self, round: Round) -> impl Iterator<Item = (&str, &[QuestionRecord])> {
        self.categories.iter().filter_map(move |(name, rounds)| {
            rounds
                .get(&round)
                .map(|questions| (name.as_str(), questions.as_slice()))
        })
    }

    /// Number of categories in the index.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_category_and_round() {
        let records = vec![
            RawRecord::new("POETS", "Jeopardy!", "$200", "Q1", "A1"),
            RawRecord::new("POETS", "Jeopardy!", "$400", "Q2", "A2"),
            RawRecord::new("POETS", "Double Jeopardy!", "$800", "Q3", "A3"),
            RawRecord::new("poets", "Jeopardy!", "$200", "Q4", "A4"),
            RawRecord::new("WAR", "Final Jeopardy!", "$0", "Q5", "A5"),
            RawRecord::new("MUSIC", "Tiebreaker", "$0", "Q6", "A6"),
        ];
        let index = CategoryIndex::from_records(&records);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.questions("POETS", Round::RoundA).map(|q| q.len()),
            Some(2)
        );
        assert_eq!(
            index.questions("POETS", Round::RoundB).map(|q| q.len()),
            Some(1)
        );
        assert_eq!(
            index.questions("poets", Round::RoundA).map(|q| q.len()),
            Some(1)
        );
        assert!(index.questions("WAR", Round::Final).is_none());
        assert_eq!(index.categories(Round::RoundB).count(), 1);
    }

    #[test]
    fn incomplete_records_are_skipped() {
        let mut no_value = RawRecord::new("POETS", "Jeopardy!", "$200", "Q1", "A1");
        no_value.value = None;
        let mut empty_question = RawRecord::new("POETS", "Jeopardy!", "$200", "Q2", "A2");
        empty_question.question = Some(String::new());

        let index = CategoryIndex::from_records(&[no_value, empty_question]);
        assert!(index.is_empty());
    }
}
