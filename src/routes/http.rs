//! HTTP endpoint handlers. Thin wrappers: load the pool, resolve parameters,
//! hand off to the selector.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use chrono::Local;
use tracing::{info, instrument};

use crate::domain::QuizResult;
use crate::pool::{load_pool, PoolError};
use crate::protocol::{ErrorOut, HealthOut, QuizQuery};
use crate::selector::{daily_seed, select};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state), fields(count = ?q.count, seed = ?q.seed))]
pub async fn http_get_quiz(
  State(state): State<Arc<AppState>>,
  Query(q): Query<QuizQuery>,
) -> Result<Json<QuizResult>, PoolError> {
  let pool = load_pool(&state.config.data_path).await?;

  let requested = q.requested_count(pool.len());
  let seed = match q.explicit_seed() {
    Some(s) => s.to_string(),
    None => daily_seed(Local::now().date_naive()),
  };

  let result = select(&pool, requested, &seed);
  info!(target: "quiz", %seed, requested, count = result.count, pool_size = pool.len(), "Quiz served");
  Ok(Json(result))
}

impl IntoResponse for PoolError {
  fn into_response(self) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
