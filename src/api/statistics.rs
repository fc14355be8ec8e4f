//! `GET /statistics`

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::{error::ApiResult, AppState};
use crate::data::Statistics;

async fn get_statistics(State(state): State<Arc<AppState>>) -> ApiResult<Json<Statistics>> {
    let stats = state.launch_service.statistics().await?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/statistics", get(get_statistics))
}
