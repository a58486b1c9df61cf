/*
search.rs

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

//! Search the archive categories by name.
//!
//! The editor imports the categories it finds into its board.
//! See [`crate::editor`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::archive::Round;
use crate::board::BoardCell;
use crate::generator::category_index::CategoryIndex;

/// Default maximum number of results.
pub const DEFAULT_TOP_K: usize = 20;

/// Number of questions returned with each result.
const PREVIEW_QUESTIONS: usize = 5;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SearchError {
    /// The query is empty.
    EmptyQuery,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "query parameter \"q\" is required"),
        }
    }
}

impl Error for SearchError {}

/// Category found by a search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Category name as written in the archive.
    pub name: String,

    pub round: Round,

    /// First questions of the category.
    pub questions: Vec<BoardCell>,

    /// Number of questions of the category in the round.
    pub total_questions: usize,

    /// Relevance between 0 and 1: the share of the category name that the query covers.
    pub similarity: f32,
}

/// Return the categories whose name contains the query, ignoring case.
///
/// Results are sorted by relevance, then by name, and at most `top_k` are returned.
pub fn search_categories(
    index: &CategoryIndex,
    query: &str,
    top_k: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let query: String = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let query_len: usize = query.chars().count();

    let mut results: Vec<SearchResult> = Vec::new();
    for round in [Round::RoundA, Round::RoundB] {
        for (name, questions) in index.categories(round) {
            let lower_name: String = name.to_lowercase();
            if !lower_name.contains(&query) {
                continue;
            }
            results.push(SearchResult {
                name: name.to_string(),
                round,
                questions: questions
                    .iter()
                    .take(PREVIEW_QUESTIONS)
                    .map(|q| BoardCell {
                        image: q.image.clone(),
                        ..BoardCell::new(q.numeric_value(), &q.question, &q.answer)
                    })
                    .collect(),
                total_questions: questions.len(),
                similarity: query_len as f32 / lower_name.chars().count() as f32,
            });
        }
    }
    results.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.round.cmp(&b.round))
    });
    results.truncate(top_k);
    debug!("Search {query:?}: {} results", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::RawRecord;

    fn index() -> CategoryIndex {
        let mut records: Vec<RawRecord> = Vec::new();
        for (name, round) in [
            ("HOLIDAYS", "Jeopardy!"),
            ("HOLIDAYS", "Double Jeopardy!"),
            ("WORLD HOLIDAYS & FESTIVALS", "Jeopardy!"),
            ("GEOGRAPHY", "Jeopardy!"),
        ] {
            for i in 1..=7 {
                records.push(RawRecord::new(
                    name,
                    round,
                    &format!("${}", i * 200),
                    &format!("{name} {i}"),
                    "answer",
                ));
            }
        }
        CategoryIndex::from_records(&records)
    }

    #[test]
    fn substring_search_ignores_case() {
        let results = search_categories(&index(), "  Holiday ", DEFAULT_TOP_K).expect("query");
        let found: Vec<(&str, Round)> = results
            .iter()
            .map(|r| (r.name.as_str(), r.round))
            .collect();
        assert_eq!(
            found,
            [
                ("HOLIDAYS", Round::RoundA),
                ("HOLIDAYS", Round::RoundB),
                ("WORLD HOLIDAYS & FESTIVALS", Round::RoundA),
            ]
        );
        assert_eq!(results[0].questions.len(), PREVIEW_QUESTIONS);
        assert_eq!(results[0].total_questions, 7);
        assert_eq!(results[0].questions[1].value, 400);
        assert!(results[0].similarity > results[2].similarity);
    }

    #[test]
    fn results_are_truncated() {
        let results = search_categories(&index(), "o", 2).expect("query");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(
            search_categories(&index(), "   ", DEFAULT_TOP_K),
            Err(SearchError::EmptyQuery)
        );
    }
}
