/*
editor.rs

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

//! Edit a board.
//!
//! These operations back the board editor: adding and removing categories and questions,
//! attaching media to a cell, and importing a category found with [`crate::search`].

use log::debug;
use std::error::Error;
use std::fmt;

use crate::archive::Round;
use crate::board::{Board, BoardCell, Category};
use crate::generator::round_assembler::NUM_CATEGORIES;
use crate::search::SearchResult;

/// Name of the category added by [`Board::add_category`].
pub const NEW_CATEGORY_NAME: &str = "AN ALBUM COVER";

/// Question of the cell added by [`Board::add_question`].
pub const NEW_QUESTION: &str = "THE BEATLES WHITE ALBUM IS THIS COLOR.";

/// Answer of the cell added by [`Board::add_question`].
pub const NEW_ANSWER: &str = "Who are the Beatles?";

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum EditError {
    /// The final round has no categories.
    NotAGridRound,

    /// The round already has the maximum number of categories.
    RoundFull { round: Round, max: usize },

    /// No category at this position.
    NoSuchCategory(usize),

    /// No question at this position in the category.
    NoSuchQuestion { category: usize, question: usize },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditError::NotAGridRound => write!(f, "the final round has no categories"),
            EditError::RoundFull { round, max } => {
                write!(f, "cannot add more than {max} categories to {round}")
            }
            EditError::NoSuchCategory(i) => write!(f, "no category at position {i}"),
            EditError::NoSuchQuestion { category, question } => {
                write!(f, "no question at position {question} in category {category}")
            }
        }
    }
}

impl Error for EditError {}

/// Media attached to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Image,
    Video,
}

impl Board {
    fn categories_mut(&mut self, round: Round) -> Result<&mut Vec<Category>, EditError> {
        self.round_mut(round).ok_or(EditError::NotAGridRound)
    }

    fn category_mut(&mut self, round: Round, index: usize) -> Result<&mut Category, EditError> {
        self.categories_mut(round)?
            .get_mut(index)
            .ok_or(EditError::NoSuchCategory(index))
    }

    fn cell_mut(
        &mut self,
        round: Round,
        category: usize,
        question: usize,
    ) -> Result<&mut BoardCell, EditError> {
        self.category_mut(round, category)?
            .questions
            .get_mut(question)
            .ok_or(EditError::NoSuchQuestion { category, question })
    }

    /// Append a placeholder category to the round and return its position.
    pub fn add_category(&mut self, round: Round) -> Result<usize, EditError> {
        let categories: &mut Vec<Category> = self.categories_mut(round)?;
        categories.push(Category::new(NEW_CATEGORY_NAME));
        Ok(categories.len() - 1)
    }

    /// Remove and return the category at the given position.
    pub fn remove_category(&mut self, round: Round, index: usize) -> Result<Category, EditError> {
        let categories: &mut Vec<Category> = self.categories_mut(round)?;
        if index >= categories.len() {
            return Err(EditError::NoSuchCategory(index));
        }
        Ok(categories.remove(index))
    }

    /// Append a placeholder question to the category and return its position.
    pub fn add_question(&mut self, round: Round, category: usize) -> Result<usize, EditError> {
        let category: &mut Category = self.category_mut(round, category)?;
        category
            .questions
            .push(BoardCell::new(0, NEW_QUESTION, NEW_ANSWER));
        Ok(category.questions.len() - 1)
    }

    /// Remove and return the question at the given position.
    pub fn remove_question(
        &mut self,
        round: Round,
        category: usize,
        question: usize,
    ) -> Result<BoardCell, EditError> {
        let questions: &mut Vec<BoardCell> = &mut self.category_mut(round, category)?.questions;
        if question >= questions.len() {
            return Err(EditError::NoSuchQuestion { category, question });
        }
        Ok(questions.remove(question))
    }

    /// Attach an image or a video reference to a cell, replacing any previous one.
    pub fn attach_media(
        &mut self,
        round: Round,
        category: usize,
        question: usize,
        media: Media,
        reference: &str,
    ) -> Result<(), EditError> {
        let cell: &mut BoardCell = self.cell_mut(round, category, question)?;
        match media {
            Media::Image => cell.image = Some(reference.to_string()),
            Media::Video => cell.youtube = Some(reference.to_string()),
        }
        Ok(())
    }

    /// Detach the image or the video reference from a cell and return it.
    pub fn detach_media(
        &mut self,
        round: Round,
        category: usize,
        question: usize,
        media: Media,
    ) -> Result<Option<String>, EditError> {
        let cell: &mut BoardCell = self.cell_mut(round, category, question)?;
        Ok(match media {
            Media::Image => cell.image.take(),
            Media::Video => cell.youtube.take(),
        })
    }

    /// Import a copy of a searched category into the round.
    ///
    /// # Errors
    ///
    /// The method returns an error if the round already has the maximum number of categories.
    /// The board is not modified in that case.
    pub fn import_category(
        &mut self,
        round: Round,
        category: &SearchResult,
    ) -> Result<usize, EditError> {
        let categories: &mut Vec<Category> = self.categories_mut(round)?;
        if categories.len() >= NUM_CATEGORIES {
            return Err(EditError::RoundFull {
                round,
                max: NUM_CATEGORIES,
            });
        }
        debug!("Importing category {:?} into {round}", category.name);
        categories.push(Category {
            name: category.name.clone(),
            questions: category.questions.clone(),
        });
        Ok(categories.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_result(name: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            round: Round::RoundA,
            questions: vec![
                BoardCell::new(200, "Q1", "A1"),
                BoardCell::new(400, "Q2", "A2"),
            ],
            total_questions: 2,
            similarity: 1.0,
        }
    }

    #[test]
    fn add_and_remove_categories_and_questions() {
        let mut board = Board::new();
        assert_eq!(board.add_category(Round::RoundB), Ok(0));
        assert_eq!(board.add_question(Round::RoundB, 0), Ok(0));
        assert_eq!(board.round_b[0].name, NEW_CATEGORY_NAME);
        assert_eq!(board.round_b[0].questions[0].answer, NEW_ANSWER);

        assert_eq!(
            board.remove_question(Round::RoundB, 0, 3),
            Err(EditError::NoSuchQuestion {
                category: 0,
                question: 3
            })
        );
        assert_eq!(
            board.remove_question(Round::RoundB, 0, 0).map(|c| c.value),
            Ok(0)
        );
        assert_eq!(
            board.remove_category(Round::RoundB, 1),
            Err(EditError::NoSuchCategory(1))
        );
        assert!(board.remove_category(Round::RoundB, 0).is_ok());
        assert!(board.round_b.is_empty());
        assert_eq!(
            board.add_category(Round::Final),
            Err(EditError::NotAGridRound)
        );
    }

    #[test]
    fn media_attach_and_detach() {
        let mut board = Board::new();
        board.add_category(Round::RoundA).expect("category");
        board.add_question(Round::RoundA, 0).expect("question");

        board
            .attach_media(Round::RoundA, 0, 0, Media::Image, "img/white.png")
            .expect("cell");
        board
            .attach_media(Round::RoundA, 0, 0, Media::Video, "dQw4w9WgXcQ")
            .expect("cell");
        assert_eq!(
            board.round_a[0].questions[0].image.as_deref(),
            Some("img/white.png")
        );

        assert_eq!(
            board.detach_media(Round::RoundA, 0, 0, Media::Video),
            Ok(Some("dQw4w9WgXcQ".to_string()))
        );
        assert_eq!(board.round_a[0].questions[0].youtube, None);
        assert!(board.attach_media(Round::RoundA, 0, 1, Media::Image, "x").is_err());
    }

    #[test]
    fn import_copies_the_questions() {
        let mut board = Board::new();
        let mut found = search_result("HOLIDAYS");
        assert_eq!(board.import_category(Round::RoundA, &found), Ok(0));

        found.questions[0].question = "CHANGED".to_string();
        assert_eq!(board.round_a[0].questions[0].question, "Q1");
    }

    #[test]
    fn import_into_a_full_round_is_rejected() {
        let mut board = Board::new();
        for i in 0..NUM_CATEGORIES {
            board
                .import_category(Round::RoundB, &search_result(&format!("C{i}")))
                .expect("room left");
        }
        let before = board.clone();
        assert_eq!(
            board.import_category(Round::RoundB, &search_result("ONE TOO MANY")),
            Err(EditError::RoundFull {
                round: Round::RoundB,
                max: NUM_CATEGORIES
            })
        );
        assert_eq!(board, before);
    }
}
