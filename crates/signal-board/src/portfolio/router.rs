use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::board::BoardSnapshot;
use super::domain::OutcomeFilter;
use super::drawer::{ArtifactTab, ClientDetail};
use super::service::{CutoffSelection, SignalBoard};
use super::timeline::TimelinePoint;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct BoardRequest {
    #[serde(default)]
    pub outcome: OutcomeFilter,
    #[serde(default)]
    pub point: Option<String>,
    #[serde(default)]
    pub cutoff: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClientDetailRequest {
    #[serde(default)]
    pub point: Option<String>,
    #[serde(default)]
    pub cutoff: Option<NaiveDate>,
    #[serde(default)]
    pub tab: Option<ArtifactTab>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub default_index: usize,
    pub points: Vec<TimelinePoint>,
}

/// Router builder exposing the board, timeline and client drawer endpoints.
pub fn portfolio_router(board: Arc<SignalBoard>) -> Router {
    Router::new()
        .route("/api/v1/portfolio/timeline", get(timeline_handler))
        .route("/api/v1/portfolio/board", post(board_handler))
        .route(
            "/api/v1/portfolio/clients/:client_id",
            post(client_detail_handler),
        )
        .with_state(board)
}

pub(crate) async fn timeline_handler(
    State(board): State<Arc<SignalBoard>>,
) -> Json<TimelineResponse> {
    let timeline = board.timeline();
    Json(TimelineResponse {
        default_index: timeline.default_index(),
        points: timeline.points().to_vec(),
    })
}

pub(crate) async fn board_handler(
    State(board): State<Arc<SignalBoard>>,
    Json(request): Json<BoardRequest>,
) -> Result<Json<BoardSnapshot>, AppError> {
    let selection = CutoffSelection::from_parts(request.point, request.cutoff);
    let snapshot = board.snapshot(request.outcome, &selection)?;
    Ok(Json(snapshot))
}

pub(crate) async fn client_detail_handler(
    State(board): State<Arc<SignalBoard>>,
    Path(client_id): Path<String>,
    Json(request): Json<ClientDetailRequest>,
) -> Result<Json<ClientDetail>, AppError> {
    let selection = CutoffSelection::from_parts(request.point, request.cutoff);
    let detail = board.client_detail(&client_id, &selection, request.tab)?;
    Ok(Json(detail))
}
