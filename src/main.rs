use std::sync::Arc;

use axum::Router;
use rand::Rng;
use tokio::net::TcpListener;

use farmstead_backend::{
    app::api::{create_api_router, AppContext},
    config::Config,
    models::{
        catalog::{Equipment, Harvest, Minigame},
        player::Player,
        progress::MinigameProgress,
    },
    services::leaderboard::LeaderboardService,
    store::memory::MemoryStore,
    utils::rate_limiter::RateLimiter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Farmstead Backend");

    let config = Config::from_env()?;
    let store = MemoryStore::new();

    seed_catalog(&store).await;
    if config.seed.demo_players > 0 {
        seed_demo_players(&store, config.seed.demo_players).await;
        tracing::info!("Seeded {} demo players", config.seed.demo_players);
    }

    let players: Arc<MemoryStore> = Arc::new(store.clone());
    let leaderboard = LeaderboardService::new(
        players.clone(),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        config.leaderboard.board_limit,
    );

    let context = AppContext {
        leaderboard,
        players,
        catalog: Arc::new(store),
        config: config.clone(),
        rate_limiter: RateLimiter::new(config.leaderboard.rate_limit_per_second),
    };

    let app: Router = create_api_router(context);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Farmstead Backend running on http://{}", addr);
    tracing::info!("Board limit: {}", config.leaderboard.board_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Static reference data; in production this comes from the catalog tables.
async fn seed_catalog(store: &MemoryStore) {
    let minigames = [
        ("gameOne", "Crossbreed plant genomes in Masha's lab", "Crossbreeding Master: mix every available test tube"),
        ("gameTwo", "Sort the harvest before the conveyor overflows", "Sorting Champion: finish a shift without a single miss"),
        ("gameThree", "Water the beds in the right order", "Green Thumb: keep every plant alive for a full season"),
        ("gameFour", "Repair the farm equipment against the clock", "Master Mechanic: restore every machine"),
        ("gameFive", "Trade the harvest at the market", "Shrewd Trader: double the starting capital"),
    ];
    for (i, (name, description, achievement)) in minigames.iter().enumerate() {
        store
            .insert_minigame(Minigame {
                id: i as u64 + 1,
                name: (*name).to_string(),
                description: (*description).to_string(),
                achievement: (*achievement).to_string(),
            })
            .await;
    }

    store
        .insert_equipment(Equipment {
            id: 1,
            name: "software".to_string(),
            description: "Collects and processes data on plants and soil".to_string(),
        })
        .await;

    store
        .insert_harvest(Harvest {
            id: 1,
            name: "tomatoes".to_string(),
            description: "Tomatoes".to_string(),
        })
        .await;
}

async fn seed_demo_players(store: &MemoryStore, count: u32) {
    let mut rng = rand::rng();

    for id in 1..=count as u64 {
        let top_score = rng.random_range(0..1000);
        let mut player = Player::new(id, format!("farmer_{id}")).with_top_score(top_score);
        player.own_coins = rng.random_range(0..500);
        player.own_money = rng.random_range(0..10_000);
        store.insert_player(player).await;

        if top_score > 500 {
            store
                .record_progress(MinigameProgress::new(id, "gameFive").with_achievement(true))
                .await;
        }
    }
}
