pub mod catalog;
pub mod health;
pub mod leaderboard;
pub mod player;
