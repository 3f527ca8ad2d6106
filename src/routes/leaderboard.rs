use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    app::api::AppContext,
    error::ApiError,
    models::responses::{BoardEntry, PlayerRanking},
};

/// The leaderboard id arrives as a raw path segment so a malformed value can
/// be rejected with 400 before any store read, instead of axum's default
/// path-rejection shape.
fn parse_player_id(raw: &str) -> Result<u64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::InvalidArgument("Player ID must be an integer".to_string()))?;

    if id < 1 {
        return Err(ApiError::InvalidArgument(
            "Player ID must be a positive integer".to_string(),
        ));
    }

    Ok(id as u64)
}

#[utoipa::path(
    get,
    path = "/api/v1/liderboard/",
    tag = "Liderboard",
    responses(
        (status = 200, description = "Top 100 players by top score, best first", body = [BoardEntry]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_board(State(context): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    let board = context.leaderboard.top_board().await?;
    Ok((StatusCode::OK, Json(board)))
}

#[utoipa::path(
    get,
    path = "/api/v1/liderboard/{id}/ranking/",
    tag = "Liderboard",
    params(
        ("id" = u64, Path, description = "Player identifier")
    ),
    responses(
        (status = 200, description = "Player's place in the standings plus the global top-100 board", body = PlayerRanking),
        (status = 400, description = "Malformed player id"),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn player_ranking(
    State(context): State<AppContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let player_id = parse_player_id(&id)?;
    let ranking = context.leaderboard.player_ranking(player_id).await?;
    Ok((StatusCode::OK, Json(ranking)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_player_id("42").unwrap(), 42);
        assert_eq!(parse_player_id("1").unwrap(), 1);
    }

    #[test]
    fn non_numeric_ids_rejected() {
        for raw in ["abc", "", "4.2", "1e3", " 7"] {
            assert!(matches!(
                parse_player_id(raw),
                Err(ApiError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn non_positive_ids_rejected() {
        for raw in ["0", "-5"] {
            assert!(matches!(
                parse_player_id(raw),
                Err(ApiError::InvalidArgument(_))
            ));
        }
    }
}
