use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

use super::{dto::CreateSolutionRequest, repo::Solution};

#[instrument(skip(state, payload))]
pub async fn create_solution(
    State(state): State<AppState>,
    Json(payload): Json<CreateSolutionRequest>,
) -> Result<(StatusCode, Json<Solution>), ApiError> {
    let solution = Solution::create(
        &state.db,
        &payload.image_url,
        &payload.location,
        payload.power,
        &payload.annual_saving,
    )
    .await?;

    info!(solution_id = %solution.id, location = %solution.location, "solution created");
    Ok((StatusCode::CREATED, Json(solution)))
}

#[instrument(skip(state))]
pub async fn list_solutions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Solution>>, ApiError> {
    let solutions = Solution::list_newest_first(&state.db).await?;
    Ok(Json(solutions))
}

#[instrument(skip(state))]
pub async fn delete_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Solution::delete(&state.db, id).await? {
        warn!(%id, "delete for unknown solution");
        return Err(ApiError::NotFound);
    }
    info!(%id, "solution deleted");
    Ok(StatusCode::NO_CONTENT)
}
