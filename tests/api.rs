use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use farmstead_backend::{
    app::api::{create_api_router, AppContext},
    config::{Config, LeaderboardConfig, SeedConfig, ServerConfig},
    models::{catalog::Minigame, player::Player, progress::MinigameProgress},
    services::leaderboard::LeaderboardService,
    store::memory::MemoryStore,
    utils::rate_limiter::RateLimiter,
};

const GAMES: [&str; 5] = ["gameOne", "gameTwo", "gameThree", "gameFour", "gameFive"];

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
        },
        leaderboard: LeaderboardConfig {
            board_limit: 100,
            rate_limit_per_second: 100,
        },
        seed: SeedConfig { demo_players: 0 },
    }
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    for (i, name) in GAMES.iter().enumerate() {
        store
            .insert_minigame(Minigame {
                id: i as u64 + 1,
                name: (*name).to_string(),
                description: String::new(),
                achievement: String::new(),
            })
            .await;
    }
    store
}

fn router_for(store: MemoryStore) -> Router {
    router_with_limiter(store, RateLimiter::new(100))
}

fn router_with_limiter(store: MemoryStore, rate_limiter: RateLimiter) -> Router {
    let config = test_config();
    let players: Arc<MemoryStore> = Arc::new(store.clone());
    let leaderboard = LeaderboardService::new(
        players.clone(),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        config.leaderboard.board_limit,
    );

    create_api_router(AppContext {
        leaderboard,
        players,
        catalog: Arc::new(store),
        config,
        rate_limiter,
    })
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn board_lists_players_best_first() {
    let store = seeded_store().await;
    store
        .insert_player(Player::new(1, "Doom Guy").with_top_score(751))
        .await;
    store
        .insert_player(Player::new(2, "Top_player").with_top_score(800))
        .await;
    store.insert_player(Player::new(3, "idle")).await;
    let router = router_for(store);

    let (status, body) = get(&router, "/api/v1/liderboard/").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 2, "zero-score players stay off the board");
    assert_eq!(entries[0]["name"], "Top_player");
    assert_eq!(entries[0]["top_score"], 800);
    assert_eq!(entries[1]["name"], "Doom Guy");

    let achievement = entries[0]["achievement"].as_object().expect("map");
    assert_eq!(achievement.len(), GAMES.len());
    assert_eq!(achievement["gameOne"]["achievement"], false);
}

#[tokio::test]
async fn ranking_counts_full_population() {
    let store = seeded_store().await;
    store
        .insert_player(Player::new(1, "Top_player").with_top_score(800))
        .await;
    store.insert_player(Player::new(2, "newcomer")).await;
    for (i, name) in GAMES.iter().enumerate() {
        store
            .record_progress(MinigameProgress::new(2, *name).with_achievement(i < 2))
            .await;
    }
    let router = router_for(store);

    let (status, body) = get(&router, "/api/v1/liderboard/2/ranking/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player_id"], 2);
    assert_eq!(body["player_name"], "newcomer");
    assert_eq!(body["place"], 2);
    assert_eq!(body["total_players"], 2);
    assert_eq!(body["achievement_count"], 2);
    assert_eq!(body["top_score"], 0);
    assert_eq!(
        body["leaderboard"].as_array().expect("board").len(),
        1,
        "the attached board is the global top 100, not the player's neighborhood"
    );
}

#[tokio::test]
async fn unknown_player_ranking_is_404_with_error_body() {
    let router = router_for(seeded_store().await);

    let (status, body) = get(&router, "/api/v1/liderboard/9999/ranking/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player not found");
}

#[tokio::test]
async fn malformed_player_id_is_400() {
    let router = router_for(seeded_store().await);

    let (status, body) = get(&router, "/api/v1/liderboard/abc/ranking/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(&router, "/api/v1/liderboard/0/ranking/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn board_truncates_at_one_hundred() {
    let store = seeded_store().await;
    for id in 1..=130 {
        store
            .insert_player(Player::new(id, format!("farmer_{id}")).with_top_score(id as i64))
            .await;
    }
    let router = router_for(store);

    let (status, body) = get(&router, "/api/v1/liderboard/").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 100);
    assert_eq!(entries[0]["top_score"], 130);
    assert_eq!(entries[99]["top_score"], 31);
}

#[tokio::test]
async fn catalog_endpoints_pass_records_through() {
    let router = router_for(seeded_store().await);

    let (status, body) = get(&router, "/api/v1/minigame/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), GAMES.len());

    let (status, body) = get(&router, "/api/v1/minigame/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "gameOne");

    let (status, body) = get(&router, "/api/v1/minigame/99/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Minigame not found");
}

#[tokio::test]
async fn player_endpoint_returns_record_or_404() {
    let store = seeded_store().await;
    let mut player = Player::new(7, "Masha").with_top_score(300);
    player.own_coins = 12;
    store.insert_player(player).await;
    let router = router_for(store);

    let (status, body) = get(&router, "/api/v1/player/7/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Masha");
    assert_eq!(body["own_coins"], 12);

    let (status, _) = get(&router, "/api/v1/player/8/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn throttled_requests_get_429_with_error_body() {
    // A zero-rate limiter rejects the very first request.
    let router = router_with_limiter(seeded_store().await, RateLimiter::new(0));

    let (status, body) = get(&router, "/api/v1/liderboard/").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Too many requests");
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let router = router_for(seeded_store().await);

    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
