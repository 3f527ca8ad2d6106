use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    app::api::AppContext,
    error::ApiError,
    models::catalog::{Equipment, Harvest, Minigame},
};

// Pass-through catalog reads: records are returned exactly as stored.

#[utoipa::path(
    get,
    path = "/api/v1/minigame/",
    tag = "Minigame",
    responses(
        (status = 200, description = "All catalog minigames", body = [Minigame])
    )
)]
pub async fn list_minigames(
    State(context): State<AppContext>,
) -> Result<impl IntoResponse, ApiError> {
    let minigames = context.catalog.minigames().await?;
    Ok((StatusCode::OK, Json(minigames)))
}

#[utoipa::path(
    get,
    path = "/api/v1/minigame/{id}/",
    tag = "Minigame",
    params(
        ("id" = u64, Path, description = "Minigame identifier")
    ),
    responses(
        (status = 200, description = "Minigame found", body = Minigame),
        (status = 404, description = "Minigame not found")
    )
)]
pub async fn get_minigame(
    State(context): State<AppContext>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let minigame = context
        .catalog
        .minigame(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Minigame not found".to_string()))?;
    Ok((StatusCode::OK, Json(minigame)))
}

#[utoipa::path(
    get,
    path = "/api/v1/equipment/",
    tag = "Equipment",
    responses(
        (status = 200, description = "All catalog equipment", body = [Equipment])
    )
)]
pub async fn list_equipment(
    State(context): State<AppContext>,
) -> Result<impl IntoResponse, ApiError> {
    let equipment = context.catalog.equipment().await?;
    Ok((StatusCode::OK, Json(equipment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/equipment/{id}/",
    tag = "Equipment",
    params(
        ("id" = u64, Path, description = "Equipment identifier")
    ),
    responses(
        (status = 200, description = "Equipment found", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(context): State<AppContext>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let item = context
        .catalog
        .equipment_item(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Equipment not found".to_string()))?;
    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/v1/harvest/",
    tag = "Harvest",
    responses(
        (status = 200, description = "All catalog harvests", body = [Harvest])
    )
)]
pub async fn list_harvests(
    State(context): State<AppContext>,
) -> Result<impl IntoResponse, ApiError> {
    let harvests = context.catalog.harvests().await?;
    Ok((StatusCode::OK, Json(harvests)))
}

#[utoipa::path(
    get,
    path = "/api/v1/harvest/{id}/",
    tag = "Harvest",
    params(
        ("id" = u64, Path, description = "Harvest identifier")
    ),
    responses(
        (status = 200, description = "Harvest found", body = Harvest),
        (status = 404, description = "Harvest not found")
    )
)]
pub async fn get_harvest(
    State(context): State<AppContext>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let harvest = context
        .catalog
        .harvest(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Harvest not found".to_string()))?;
    Ok((StatusCode::OK, Json(harvest)))
}
