use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One boolean per catalog minigame, keyed by minigame name. Every catalog
/// minigame gets an entry, defaulting to `false` when the player has no
/// progress record.
pub type AchievementMap = BTreeMap<String, AchievementEntry>;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AchievementEntry {
    pub achievement: bool,
}

/// One row of the top-100 board.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoardEntry {
    pub name: String,
    pub own_coins: i64,
    pub own_money: i64,
    pub top_score: i64,
    pub achievement: AchievementMap,
}

/// A single player's position in the standings, together with the global
/// top-100 board. `place` is 1-based over the full population, so it can
/// exceed 100 even though the attached board never does.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerRanking {
    pub player_id: u64,
    pub player_name: String,
    pub place: u64,
    pub achievement_count: u64,
    pub own_coins: i64,
    pub top_score: i64,
    pub total_players: u64,
    pub leaderboard: Vec<BoardEntry>,
}
