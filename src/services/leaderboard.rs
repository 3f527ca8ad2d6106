use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{
        catalog::Minigame,
        player::Player,
        responses::{AchievementEntry, AchievementMap, BoardEntry, PlayerRanking},
    },
    ranking,
    store::{CatalogStore, PlayerStore, ProgressStore},
};

/// Read-only shaping layer over the ranking engine and the stores. Both
/// operations re-read current data on every call; consecutive reads inside
/// one call are not snapshot-isolated, which is accepted behavior — a score
/// update landing mid-request shifts the numbers by at most one position.
#[derive(Clone)]
pub struct LeaderboardService {
    players: Arc<dyn PlayerStore>,
    progress: Arc<dyn ProgressStore>,
    catalog: Arc<dyn CatalogStore>,
    board_limit: usize,
}

impl LeaderboardService {
    pub fn new(
        players: Arc<dyn PlayerStore>,
        progress: Arc<dyn ProgressStore>,
        catalog: Arc<dyn CatalogStore>,
        board_limit: usize,
    ) -> Self {
        Self {
            players,
            progress,
            catalog,
            board_limit,
        }
    }

    /// The global board: top players by score, each with a full achievement
    /// map (one entry per catalog minigame, default false).
    pub async fn top_board(&self) -> Result<Vec<BoardEntry>, ApiError> {
        let population = self.players.list_all().await?;
        let catalog = self.catalog.minigames().await?;

        let mut board = Vec::new();
        for player in ranking::top_players(&population, self.board_limit) {
            let achievement = self.achievement_map(&player, &catalog).await?;
            board.push(BoardEntry {
                name: player.name,
                own_coins: player.own_coins,
                own_money: player.own_money,
                top_score: player.top_score,
                achievement,
            });
        }

        Ok(board)
    }

    /// Rank, achievement summary and surrounding board for one player. The
    /// attached board is always the global top 100, even when the player
    /// sits below 100th place.
    pub async fn player_ranking(&self, player_id: u64) -> Result<PlayerRanking, ApiError> {
        let player = self
            .players
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;

        let population = self.players.list_all().await?;
        let place = ranking::rank_of(&population, player_id)
            .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;
        let total_players = self.players.count_all().await?;

        let achievement_count = self
            .progress
            .list_for_player(player_id)
            .await?
            .iter()
            .filter(|record| record.achievement)
            .count() as u64;

        let leaderboard = self.top_board().await?;

        Ok(PlayerRanking {
            player_id: player.id,
            player_name: player.name,
            place,
            achievement_count,
            own_coins: player.own_coins,
            top_score: player.top_score,
            total_players,
            leaderboard,
        })
    }

    async fn achievement_map(
        &self,
        player: &Player,
        catalog: &[Minigame],
    ) -> Result<AchievementMap, ApiError> {
        let mut map: AchievementMap = catalog
            .iter()
            .map(|game| (game.name.clone(), AchievementEntry { achievement: false }))
            .collect();

        for record in self.progress.list_for_player(player.id).await? {
            if let Some(entry) = map.get_mut(&record.minigame_name) {
                entry.achievement = record.achievement;
            }
        }

        Ok(map)
    }
}
