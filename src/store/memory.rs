use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{
    catalog::{Equipment, Harvest, Minigame},
    player::Player,
    progress::MinigameProgress,
};

use super::{CatalogStore, PlayerStore, ProgressStore, StoreResult};

/// In-memory store backing all three store traits. The write helpers exist
/// for seeding and tests; there is no HTTP write path.
#[derive(Clone)]
pub struct MemoryStore {
    players: Arc<RwLock<BTreeMap<u64, Player>>>,
    progress: Arc<RwLock<HashMap<u64, Vec<MinigameProgress>>>>,
    minigames: Arc<RwLock<BTreeMap<u64, Minigame>>>,
    equipment: Arc<RwLock<BTreeMap<u64, Equipment>>>,
    harvests: Arc<RwLock<BTreeMap<u64, Harvest>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(BTreeMap::new())),
            progress: Arc::new(RwLock::new(HashMap::new())),
            minigames: Arc::new(RwLock::new(BTreeMap::new())),
            equipment: Arc::new(RwLock::new(BTreeMap::new())),
            harvests: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    pub async fn insert_player(&self, player: Player) {
        self.players.write().await.insert(player.id, player);
    }

    /// Upserts the (player, minigame) progress record.
    pub async fn record_progress(&self, record: MinigameProgress) {
        let mut progress = self.progress.write().await;
        let records = progress.entry(record.player_id).or_default();

        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.minigame_name == record.minigame_name)
        {
            *existing = record;
        } else {
            records.push(record);
        }
    }

    pub async fn insert_minigame(&self, minigame: Minigame) {
        self.minigames.write().await.insert(minigame.id, minigame);
    }

    pub async fn insert_equipment(&self, item: Equipment) {
        self.equipment.write().await.insert(item.id, item);
    }

    pub async fn insert_harvest(&self, harvest: Harvest) {
        self.harvests.write().await.insert(harvest.id, harvest);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Player>> {
        Ok(self.players.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Player>> {
        Ok(self.players.read().await.values().cloned().collect())
    }

    async fn count_all(&self) -> StoreResult<u64> {
        Ok(self.players.read().await.len() as u64)
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn list_for_player(&self, player_id: u64) -> StoreResult<Vec<MinigameProgress>> {
        Ok(self
            .progress
            .read()
            .await
            .get(&player_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn minigames(&self) -> StoreResult<Vec<Minigame>> {
        Ok(self.minigames.read().await.values().cloned().collect())
    }

    async fn minigame(&self, id: u64) -> StoreResult<Option<Minigame>> {
        Ok(self.minigames.read().await.get(&id).cloned())
    }

    async fn equipment(&self) -> StoreResult<Vec<Equipment>> {
        Ok(self.equipment.read().await.values().cloned().collect())
    }

    async fn equipment_item(&self, id: u64) -> StoreResult<Option<Equipment>> {
        Ok(self.equipment.read().await.get(&id).cloned())
    }

    async fn harvests(&self) -> StoreResult<Vec<Harvest>> {
        Ok(self.harvests.read().await.values().cloned().collect())
    }

    async fn harvest(&self, id: u64) -> StoreResult<Option<Harvest>> {
        Ok(self.harvests.read().await.get(&id).cloned())
    }
}
