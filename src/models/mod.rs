pub mod catalog;
pub mod player;
pub mod progress;
pub mod responses;
