/*
mod.rs

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

//! Synthetic question archive shared by the integration tests.

#![allow(dead_code)]

use quizboard::archive::{Archive, RawRecord};

/// Number of categories in each grid round of the synthetic archive.
pub const CATEGORIES_PER_ROUND: usize = 8;

/// Number of questions in each category of the synthetic archive.
pub const QUESTIONS_PER_CATEGORY: u32 = 10;

pub const ROUND_A_NAMES: [&str; CATEGORIES_PER_ROUND] = [
    "World History",
    "Science",
    "Potent Potables",
    "Rivers",
    "Opera",
    "Word Play",
    "Sports",
    "Famous Painters",
];

pub const ROUND_B_NAMES: [&str; CATEGORIES_PER_ROUND] = [
    "American History",
    "Chemistry",
    "Before & After",
    "Mountains",
    "Ballet",
    "Rhyme Time",
    "Olympics",
    "Sculptors",
];

/// Return the records of one category, valued `step`, `2 * step`, and so on.
pub fn category_records(name: &str, round: &str, step: u32, count: u32) -> Vec<RawRecord> {
    (1..=count)
        .map(|i| {
            RawRecord::new(
                name,
                round,
                &format!("${}", format_thousands(i * step)),
                &format!("{name} clue number {i} for {round}"),
                &format!("What is answer {i} of {name}?"),
            )
        })
        .collect()
}

fn format_thousands(value: u32) -> String {
    if value >= 1000 {
        format!("{},{:03}", value / 1000, value % 1000)
    } else {
        value.to_string()
    }
}

pub fn final_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(
            "Authors",
            "Final Jeopardy!",
            "",
            "He wrote Moby-Dick",
            "Who is Herman Melville?",
        ),
        RawRecord::new(
            "Geography",
            "Final Jeopardy!",
            "",
            "It is the longest river in Africa",
            "What is the Nile?",
        ),
    ]
}

/// Archive with enough material for full boards at every difficulty level.
pub fn full_archive() -> Archive {
    let mut records: Vec<RawRecord> = Vec::new();
    for name in ROUND_A_NAMES {
        records.extend(category_records(
            name,
            "Jeopardy!",
            100,
            QUESTIONS_PER_CATEGORY,
        ));
    }
    for name in ROUND_B_NAMES {
        records.extend(category_records(
            name,
            "Double Jeopardy!",
            200,
            QUESTIONS_PER_CATEGORY,
        ));
    }
    records.extend(final_records());

    // Noise that the generator must ignore
    records.push(RawRecord {
        answer: None,
        ..RawRecord::new("Incomplete", "Jeopardy!", "$200", "No answer", "")
    });
    records.push(RawRecord::new(
        "Tiebreakers",
        "Tiebreaker",
        "$0",
        "Unknown round",
        "What is nothing?",
    ));
    Archive::from_records(records)
}
