pub mod achievement;
pub mod gameserver;
pub mod item;
pub mod leaderboard;
pub mod player;
pub mod steam;
pub mod store;
pub mod ugc;
