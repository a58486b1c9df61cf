/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Quizboard generates a random board and writes it to a JSON file that the game
//! front-end can load.
//! With `--serve`, it starts the HTTP service instead.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```
//! $ quizboard --ls
//! easy    jeopardy [100, 200, 300, 400, 500]  double-jeopardy [200, 400, 600, 800, 1000]
//! medium  jeopardy [200, 400, 600, 800, 1000]  double-jeopardy [400, 800, 1200, 1600, 2000]
//! hard    jeopardy [400, 600, 800, 1000, 1200]  double-jeopardy [800, 1200, 1600, 2000]
//! ```
//!
//! Generate the same hard board every time:
//!
//! ```
//! $ quizboard -f hard -s 42 -o boards/board_hard.json
//! ```

use clap::Parser;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use quizboard::archive::{Archive, ArchiveCache, Round};
use quizboard::board::Board;
use quizboard::config::{self, COPYRIGHT_NOTICE};
use quizboard::generator::board_generator;
use quizboard::generator::difficulty::Difficulty;
use quizboard::saver::board::{SaverBoard, write_board};
use quizboard::server::{self, AppContext};

/// Generate random trivia boards from the question archive.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the difficulty levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Difficulty level for the board
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// File to write the board to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Archive of questions (JSON)
    #[arg(short, long)]
    archive: Option<PathBuf>,

    /// Random seed for reproducible boards
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start the HTTP service
    #[arg(long, default_value_t = false)]
    serve: bool,

    /// Port for the HTTP service
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory where the HTTP service saves edited boards
    #[arg(short, long)]
    boards_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the difficulty levels
    //
    if args.ls {
        for difficulty in Difficulty::all() {
            let profile = difficulty.profile();
            println!(
                "{difficulty:<7} {} {:?}  {} {:?}",
                Round::RoundA,
                profile.round_a,
                Round::RoundB,
                profile.round_b
            );
        }
        return 0;
    }

    let archive_path: PathBuf = args.archive.clone().unwrap_or_else(config::archive_path);
    let ret: Result<(), Box<dyn Error>> = if args.serve {
        run_server(&args, archive_path)
    } else {
        run_generator(&args, archive_path)
    };
    match ret {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate one board and write it to the output file.
fn run_generator(args: &Args, archive_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => {
            info!("Using random seed {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::rng()),
    };

    let archive: Archive = Archive::load(&archive_path)?;
    let board: Board = board_generator::generate_board_for(&archive, args.difficulty, &mut *rng);

    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_OUTPUT));
    debug!("Writing board to {output:?}");
    write_board(&output, &board)?;

    println!("Generated {} board: {}", args.difficulty, output.display());
    println!(
        "  {} round: {} categories",
        Round::RoundA,
        board.round_a.len()
    );
    println!(
        "  {} round: {} categories",
        Round::RoundB,
        board.round_b.len()
    );
    println!("  Final question: {}", board.final_question.category);
    Ok(())
}

/// Start the HTTP service and wait for Ctrl+C.
///
/// The archive is loaded before listening, so that a missing or malformed archive stops the
/// service at startup.
fn run_server(args: &Args, archive_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let archive: ArchiveCache = ArchiveCache::new(archive_path);
    archive.get()?;

    let ctx = Arc::new(AppContext {
        archive,
        saver: SaverBoard::new(args.boards_dir.clone().unwrap_or_else(config::boards_dir)),
    });
    let port: u16 = args.port.unwrap_or_else(config::server_port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(ctx, config::DEFAULT_HOST, port))?;
    Ok(())
}
