use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{app::api::AppContext, error::ApiError, models::player::Player};

#[utoipa::path(
    get,
    path = "/api/v1/player/{id}/",
    tag = "Player",
    params(
        ("id" = u64, Path, description = "Player identifier")
    ),
    responses(
        (status = 200, description = "Player record", body = Player),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player(
    State(context): State<AppContext>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let player = context
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;
    Ok((StatusCode::OK, Json(player)))
}
