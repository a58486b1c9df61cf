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

//! Game board representation.
//!
//! A [`Board`] is composed of two rounds of categories and a final question.
//! The JSON representation uses the keys that the game front-end expects: `jeopardy`,
//! `double-jeopardy`, `final-jeopardy`, and `daily-double` for the bonus flag.

use serde::{Deserialize, Serialize};

use crate::archive::Round;

/// Category of the placeholder final question.
pub const PLACEHOLDER_FINAL_CATEGORY: &str = "RANDOM TRIVIA";

/// Question of the placeholder final question.
pub const PLACEHOLDER_FINAL_QUESTION: &str = "THIS IS A PLACEHOLDER FINAL JEOPARDY QUESTION";

/// Answer of the placeholder final question.
pub const PLACEHOLDER_FINAL_ANSWER: &str = "What is a placeholder answer?";

/// Serialize and deserialize the daily double flag.
///
/// Boards written by the editor front-end store the flag as the `"true"` string.
pub mod daily_double_flag {
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Serialize, Serializer};
    use std::fmt;

    /// Serialize the flag as a JSON boolean.
    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        flag.serialize(serializer)
    }

    /// Deserialize the flag from a boolean or from a `"true"`/`"false"` string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or the \"true\" or \"false\" string")
            }

            fn visit_bool<E>(self, value: bool) -> Result<bool, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<bool, E>
            where
                E: de::Error,
            {
                match value {
                    "true" => Ok(true),
                    "false" | "" => Ok(false),
                    _ => Err(de::Error::invalid_value(de::Unexpected::Str(value), &self)),
                }
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Question cell on the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BoardCell {
    /// Point value displayed on the board.
    pub value: u32,

    pub question: String,
    pub answer: String,

    /// Whether the cell is a daily double.
    #[serde(
        rename = "daily-double",
        default,
        skip_serializing_if = "is_false",
        with = "daily_double_flag"
    )]
    pub daily_double: bool,

    /// Optional image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Optional video reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl BoardCell {
    /// Create a [`BoardCell`] object.
    pub fn new(value: u32, question: &str, answer: &str) -> Self {
        Self {
            value,
            question: question.to_string(),
            answer: answer.to_string(),
            ..Default::default()
        }
    }
}

/// Category column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Category {
    pub name: String,

    /// Cells, from the lowest to the highest value.
    pub questions: Vec<BoardCell>,
}

impl Category {
    /// Create an empty [`Category`] object.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            questions: Vec::new(),
        }
    }

    /// Number of daily doubles in the category.
    pub fn daily_doubles(&self) -> usize {
        self.questions.iter().filter(|q| q.daily_double).count()
    }
}

/// Final question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FinalQuestion {
    pub category: String,
    pub question: String,
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for FinalQuestion {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl FinalQuestion {
    /// Return the question used when the archive has no final question.
    pub fn placeholder() -> Self {
        Self {
            category: PLACEHOLDER_FINAL_CATEGORY.to_string(),
            question: PLACEHOLDER_FINAL_QUESTION.to_string(),
            answer: PLACEHOLDER_FINAL_ANSWER.to_string(),
            image: None,
        }
    }

    /// Whether this is the placeholder question.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

/// Complete game board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Board {
    #[serde(rename = "jeopardy", default)]
    pub round_a: Vec<Category>,

    #[serde(rename = "double-jeopardy", default)]
    pub round_b: Vec<Category>,

    #[serde(rename = "final-jeopardy", default)]
    pub final_question: FinalQuestion,
}

impl Board {
    /// Create an empty [`Board`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the categories of the given round.
    ///
    /// The final round has no categories and returns an empty list.
    pub fn round(&self, round: Round) -> &[Category] {
        match round {
            Round::RoundA => &self.round_a,
            Round::RoundB => &self.round_b,
            Round::Final => &[],
        }
    }

    /// Return the mutable list of categories of the given round, or None for the final round.
    pub fn round_mut(&mut self, round: Round) -> Option<&mut Vec<Category>> {
        match round {
            Round::RoundA => Some(&mut self.round_a),
            Round::RoundB => Some(&mut self.round_b),
            Round::Final => None,
        }
    }

    /// Number of daily doubles in the given round.
    pub fn daily_doubles(&self, round: Round) -> usize {
        self.round(round).iter().map(Category::daily_doubles).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_uses_front_end_keys() {
        let mut board = Board::new();
        let mut category = Category::new("POETS");
        let mut cell = BoardCell::new(200, "HE WROTE HOWL", "Who is Ginsberg?");
        cell.daily_double = true;
        category.questions.push(cell);
        category
            .questions
            .push(BoardCell::new(400, "SHE WROTE ARIEL", "Who is Plath?"));
        board.round_a.push(category);

        let json: serde_json::Value = serde_json::to_value(&board).expect("serialize");
        assert_eq!(json["jeopardy"][0]["name"], "POETS");
        assert_eq!(json["jeopardy"][0]["questions"][0]["daily-double"], true);
        assert!(json["jeopardy"][0]["questions"][1].get("daily-double").is_none());
        assert!(json["jeopardy"][0]["questions"][1].get("image").is_none());
        assert_eq!(json["double-jeopardy"], serde_json::json!([]));
        assert_eq!(json["final-jeopardy"]["category"], PLACEHOLDER_FINAL_CATEGORY);
    }

    #[test]
    fn daily_double_flag_accepts_editor_strings() {
        let json = r#"{"value": 600, "question": "Q", "answer": "A", "daily-double": "true"}"#;
        let cell: BoardCell = serde_json::from_str(json).expect("string flag");
        assert!(cell.daily_double);

        let json = r#"{"value": 600, "question": "Q", "answer": "A", "daily-double": false}"#;
        let cell: BoardCell = serde_json::from_str(json).expect("boolean flag");
        assert!(!cell.daily_double);

        let json = r#"{"value": 600, "question": "Q", "answer": "A", "daily-double": "maybe"}"#;
        assert!(serde_json::from_str::<BoardCell>(json).is_err());
    }

    #[test]
    fn final_round_has_no_categories() {
        let mut board = Board::new();
        assert!(board.round(Round::Final).is_empty());
        assert!(board.round_mut(Round::Final).is_none());
        assert!(board.final_question.is_placeholder());
    }
}
