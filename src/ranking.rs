use std::cmp::Reverse;

use crate::models::player::Player;

/// Board size served by the leaderboard endpoints.
pub const BOARD_LIMIT: usize = 100;

/// Total-order key over the population: `top_score` descending, then `id`
/// ascending. The id tie-break keeps repeated calls on an unchanged
/// snapshot from flickering between orderings.
fn ordering_key(player: &Player) -> (Reverse<i64>, u64) {
    (Reverse(player.top_score), player.id)
}

/// Players with `top_score > 0`, best first, truncated to `limit`. The
/// result is a prefix of the full descending ordering.
pub fn top_players(players: &[Player], limit: usize) -> Vec<Player> {
    let mut qualified: Vec<&Player> = players.iter().filter(|p| p.top_score > 0).collect();
    qualified.sort_by_key(|p| ordering_key(p));
    qualified.into_iter().take(limit).cloned().collect()
}

/// 1-based position of `player_id` within the full population (zero-score
/// players included), computed as 1 + the number of players ordering
/// strictly before the target. `None` when the id is absent.
pub fn rank_of(players: &[Player], player_id: u64) -> Option<u64> {
    let target = players.iter().find(|p| p.id == player_id)?;
    let key = ordering_key(target);
    let ahead = players.iter().filter(|p| ordering_key(p) < key).count();
    Some(ahead as u64 + 1)
}
