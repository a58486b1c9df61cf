/*
lib.rs

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

//! Random board generator and board editor back-end for a trivia quiz game.
//!
//! Boards are built from an archive of aired questions (see [`archive`]) by the [`generator`]
//! module.
//! The [`editor`], [`search`], and [`saver`] modules support editing boards by hand, and the
//! [`server`] module exposes everything over HTTP.

pub mod archive;
pub mod board;
pub mod config;
pub mod editor;
pub mod generator;
pub mod saver;
pub mod search;
pub mod server;
