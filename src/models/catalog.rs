use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static minigame reference data. `achievement` is the human-readable
/// description of the minigame's unlockable achievement.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Minigame {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub achievement: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: u64,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Harvest {
    pub id: u64,
    pub name: String,
    pub description: String,
}
