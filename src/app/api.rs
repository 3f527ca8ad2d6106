use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    middleware::rate_limiter::rate_limit_middleware,
    routes::{
        catalog::{
            get_equipment, get_harvest, get_minigame, list_equipment, list_harvests,
            list_minigames,
        },
        health::health_check,
        leaderboard::{list_board, player_ranking},
        player::get_player,
    },
    services::leaderboard::LeaderboardService,
    store::{CatalogStore, PlayerStore},
    utils::rate_limiter::RateLimiter,
};

#[derive(Clone)]
pub struct AppContext {
    pub leaderboard: LeaderboardService,
    pub players: Arc<dyn PlayerStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub config: Config,
    pub rate_limiter: RateLimiter,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Farmstead Backend API", version = "1.0.0"),
    paths(
        crate::routes::health::health_check,
        crate::routes::leaderboard::list_board,
        crate::routes::leaderboard::player_ranking,
        crate::routes::player::get_player,
        crate::routes::catalog::list_minigames,
        crate::routes::catalog::get_minigame,
        crate::routes::catalog::list_equipment,
        crate::routes::catalog::get_equipment,
        crate::routes::catalog::list_harvests,
        crate::routes::catalog::get_harvest,
    ),
    components(schemas(
        crate::models::player::Player,
        crate::models::catalog::Minigame,
        crate::models::catalog::Equipment,
        crate::models::catalog::Harvest,
        crate::models::responses::BoardEntry,
        crate::models::responses::PlayerRanking,
        crate::models::responses::AchievementEntry,
    ))
)]
struct ApiDoc;

pub fn create_api_router(context: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            context
                .config
                .server
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::CACHE_CONTROL,
        ])
        .allow_credentials(true);

    Router::new()
        .route("/api/v1/liderboard/", get(list_board))
        .route("/api/v1/liderboard/{id}/ranking/", get(player_ranking))
        .route("/api/v1/player/{id}/", get(get_player))
        .route("/api/v1/minigame/", get(list_minigames))
        .route("/api/v1/minigame/{id}/", get(get_minigame))
        .route("/api/v1/equipment/", get(list_equipment))
        .route("/api/v1/equipment/{id}/", get(get_equipment))
        .route("/api/v1/harvest/", get(list_harvests))
        .route("/api/v1/harvest/{id}/", get(get_harvest))
        .route("/health", get(health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(rate_limit_middleware))
        .layer(axum::Extension(context.rate_limiter.clone()))
        .layer(cors)
        .with_state(context)
}
