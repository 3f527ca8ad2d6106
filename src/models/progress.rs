use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-player progress on one minigame. One record per (player, minigame)
/// pair, created when the minigame becomes available to the player.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MinigameProgress {
    pub player_id: u64,
    pub minigame_name: String,
    pub available: bool,
    pub completed: bool,
    pub score: i64,
    pub achievement: bool,
}

impl MinigameProgress {
    pub fn new(player_id: u64, minigame_name: impl Into<String>) -> Self {
        Self {
            player_id,
            minigame_name: minigame_name.into(),
            available: true,
            completed: false,
            score: 0,
            achievement: false,
        }
    }

    pub fn with_achievement(mut self, unlocked: bool) -> Self {
        self.achievement = unlocked;
        self
    }
}
