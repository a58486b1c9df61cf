/*
difficulty.rs

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

//! Difficulty levels and their point values.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use super::board_generator::BoardError;
use crate::archive::Round;

/// Board difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => f.pad("easy"),
            Difficulty::Medium => f.pad("medium"),
            Difficulty::Hard => f.pad("hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = BoardError;

    /// Parse a difficulty label. Unknown labels are rejected, not defaulted.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .find(|d| d.to_string() == label)
            .ok_or_else(|| BoardError::InvalidDifficulty(label.to_string()))
    }
}

impl Difficulty {
    /// Return all the difficulty levels, from the easiest.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (0..).map_while(Difficulty::from_repr)
    }

    /// Return the point values for this difficulty level.
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                difficulty: self,
                round_a: &[100, 200, 300, 400, 500],
                round_b: &[200, 400, 600, 800, 1000],
                description: "Easier questions from early rounds",
            },
            Difficulty::Medium => DifficultyProfile {
                difficulty: self,
                round_a: &[200, 400, 600, 800, 1000],
                round_b: &[400, 800, 1200, 1600, 2000],
                description: "Standard difficulty questions",
            },
            Difficulty::Hard => DifficultyProfile {
                difficulty: self,
                round_a: &[400, 600, 800, 1000, 1200],
                round_b: &[800, 1200, 1600, 2000],
                description: "Harder questions from later rounds",
            },
        }
    }
}

/// Target point values of each round for a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,

    /// Values of the first round cells, from top to bottom.
    pub round_a: &'static [u32],

    /// Values of the second round cells, from top to bottom.
    pub round_b: &'static [u32],

    pub description: &'static str,
}

impl DifficultyProfile {
    /// Return the target values for the given round. The final round has none.
    pub fn target_values(&self, round: Round) -> &'static [u32] {
        match round {
            Round::RoundA => self.round_a,
            Round::RoundB => self.round_b,
            Round::Final => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        let labels: Vec<String> = Difficulty::all().map(|d| d.to_string()).collect();
        assert_eq!(labels, ["easy", "medium", "hard"]);
        for d in Difficulty::all() {
            assert_eq!(d.to_string().parse::<Difficulty>().expect("known label"), d);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        match "extreme".parse::<Difficulty>() {
            Err(BoardError::InvalidDifficulty(label)) => assert_eq!(label, "extreme"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!("Easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn hard_second_round_has_four_values() {
        let profile = Difficulty::Hard.profile();
        assert_eq!(profile.target_values(Round::RoundB), &[800, 1200, 1600, 2000]);
        assert!(profile.target_values(Round::Final).is_empty());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
