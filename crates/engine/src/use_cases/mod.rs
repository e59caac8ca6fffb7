//! Use cases - panel request orchestration.
//!
//! Each module fetches raw records through the record source port and runs
//! them through the domain mapping layer.

pub mod account;
pub mod assets;
pub mod leaderboard;
pub mod roster;
