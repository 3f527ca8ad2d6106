use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered player. `top_score` is the highest score the player has
/// ever recorded and is the sole ranking key; rank itself is never stored.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub gender: String,
    pub own_money: i64,
    pub own_coins: i64,
    pub own_credits: i64,
    pub top_score: i64,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: String::new(),
            own_money: 0,
            own_coins: 0,
            own_credits: 0,
            top_score: 0,
        }
    }

    pub fn with_top_score(mut self, top_score: i64) -> Self {
        self.top_score = top_score;
        self
    }
}
