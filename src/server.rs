/*
server.rs

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

//! HTTP service for the game and the board editor.
//!
//! | Method | Path                      | Description                           |
//! |--------|---------------------------|---------------------------------------|
//! | GET    | `/health`                 | Health check                          |
//! | GET    | `/api/generate-board`     | Random board (`difficulty` parameter) |
//! | GET    | `/api/search-categories`  | Category search (`q`, `top_k`)        |
//! | POST   | `/api/save-board`         | Save an edited board                  |
//!
//! Board generation and search read the archive, which is loaded on first use, and saving
//! writes a file, so all three run on the blocking thread pool.

use log::{info, warn};
use std::io;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::archive::ArchiveCache;
use crate::board::Board;
use crate::generator::board_generator::{self, BoardError};
use crate::generator::category_index::CategoryIndex;
use crate::generator::difficulty::Difficulty;
use crate::saver::board::{DEFAULT_BOARD_NAME, SaverBoard};
use crate::search::{self, DEFAULT_TOP_K, SearchError, SearchResult};

/// Shared state of the service.
pub struct AppContext {
    pub archive: ArchiveCache,
    pub saver: SaverBoard,
}

pub type AppState = Arc<AppContext>;

pub fn create_router(ctx: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/api/generate-board", get(handle_generate_board))
        .route("/api/search-categories", get(handle_search_categories))
        .route("/api/save-board", post(handle_save_board))
        .layer(cors)
        .with_state(ctx)
}

/// Serve the API until Ctrl+C is pressed.
pub async fn serve(ctx: AppState, host: &str, port: u16) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Listening on http://{host}:{port}");
    axum::serve(listener, create_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

#[derive(Deserialize)]
struct GenerateQuery {
    difficulty: Option<String>,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
    top_k: Option<usize>,
}

#[derive(Deserialize)]
struct SaveRequest {
    filename: Option<String>,
    board: Option<serde_json::Value>,
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "success": false, "error": msg }))).into_response()
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

async fn handle_generate_board(
    State(ctx): State<AppState>,
    Query(params): Query<GenerateQuery>,
) -> Response {
    let difficulty: String = params
        .difficulty
        .unwrap_or_else(|| Difficulty::default().to_string());

    let label: String = difficulty.clone();
    let result = tokio::task::spawn_blocking(move || {
        board_generator::generate_board_from_cache(&ctx.archive, &label, &mut rand::rng())
    })
    .await;

    match result {
        Ok(Ok(board)) => {
            info!("Generated {difficulty} board");
            (
                [(
                    header::CACHE_CONTROL,
                    "no-cache, no-store, must-revalidate",
                )],
                Json(json!({
                    "success": true,
                    "message": format!("Generated {difficulty} board"),
                    "board": board,
                })),
            )
                .into_response()
        }
        Ok(Err(e @ BoardError::InvalidDifficulty(_))) => {
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Ok(Err(e)) => {
            warn!("Error generating board: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

async fn handle_search_categories(
    State(ctx): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let query: String = params.q.unwrap_or_default();
    let top_k: usize = params.top_k.unwrap_or(DEFAULT_TOP_K);
    if query.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, &SearchError::EmptyQuery.to_string());
    }

    let q: String = query.clone();
    let result = tokio::task::spawn_blocking(move || -> Result<Vec<SearchResult>, String> {
        let archive = ctx.archive.get().map_err(|e| e.to_string())?;
        let index: CategoryIndex = CategoryIndex::build(&archive);
        search::search_categories(&index, &q, top_k).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(results)) => Json(json!({
            "success": true,
            "query": query,
            "count": results.len(),
            "results": results,
        }))
        .into_response(),
        Ok(Err(msg)) => {
            warn!("Error searching categories: {msg}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

async fn handle_save_board(
    State(ctx): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Response {
    // An empty object is as good as no board at all
    let board: Board = match req.board {
        Some(value) if value.as_object().is_none_or(|o| !o.is_empty()) => {
            match serde_json::from_value(value) {
                Ok(b) => b,
                Err(e) => {
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        &format!("Invalid board data: {e}"),
                    );
                }
            }
        }
        _ => return error_response(StatusCode::BAD_REQUEST, "Board data is required"),
    };
    let filename: String = req
        .filename
        .unwrap_or_else(|| DEFAULT_BOARD_NAME.to_string());

    let result = tokio::task::spawn_blocking(move || {
        ctx.saver
            .save_board(&filename, &board)
            .map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(path)) => {
            info!("Saved board to {path:?}");
            Json(json!({
                "success": true,
                "message": "Board saved successfully",
                "filepath": path.display().to_string(),
            }))
            .into_response()
        }
        Ok(Err(msg)) => {
            warn!("Error saving board: {msg}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}
