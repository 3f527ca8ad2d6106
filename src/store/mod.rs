pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    catalog::{Equipment, Harvest, Minigame},
    player::Player,
    progress::MinigameProgress,
};

/// Store reads fail as a whole or not at all; a missing row is `Ok(None)`,
/// never an error, so a lookup failure can't masquerade as "rank 0".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait PlayerStore: Send + Sync {
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Player>>;
    async fn list_all(&self) -> StoreResult<Vec<Player>>;
    async fn count_all(&self) -> StoreResult<u64>;
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn list_for_player(&self, player_id: u64) -> StoreResult<Vec<MinigameProgress>>;
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn minigames(&self) -> StoreResult<Vec<Minigame>>;
    async fn minigame(&self, id: u64) -> StoreResult<Option<Minigame>>;
    async fn equipment(&self) -> StoreResult<Vec<Equipment>>;
    async fn equipment_item(&self, id: u64) -> StoreResult<Option<Equipment>>;
    async fn harvests(&self) -> StoreResult<Vec<Harvest>>;
    async fn harvest(&self, id: u64) -> StoreResult<Option<Harvest>>;
}
