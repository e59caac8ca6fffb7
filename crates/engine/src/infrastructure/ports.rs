//! Port traits for infrastructure boundaries.
//!
//! The record source is the only abstraction in the engine: it hides the
//! legacy MySQL store behind opaque field-keyed records so the mapping
//! layer and use cases can be exercised against in-memory fixtures.

use async_trait::async_trait;
use ucp_domain::{AffiliationKind, RawRecord};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Not found")]
    NotFound,
    /// The deployment simply does not provision this table. Callers decide
    /// whether that means "empty" (optional tables) or a real failure.
    #[error("Table missing")]
    TableMissing,
    #[error("Database error: {0}")]
    Database(String),
}

/// Read-only access to the legacy store. Every query returns raw records;
/// all interpretation happens in the domain crate.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn player_by_name(&self, name: &str) -> Result<Option<RawRecord>, SourceError>;

    async fn player_by_id(&self, id: i64) -> Result<Option<RawRecord>, SourceError>;

    /// Houses flagged as owned by the player. `OwnerID` may reference
    /// either the player id or the player name depending on deployment,
    /// so both are matched.
    async fn houses_by_owner(&self, id: i64, name: &str) -> Result<Vec<RawRecord>, SourceError>;

    async fn vehicles_by_player(&self, id: i64) -> Result<Vec<RawRecord>, SourceError>;

    /// Players ordered by Money + Bank descending.
    async fn wealth_leaderboard(&self, limit: u32) -> Result<Vec<RawRecord>, SourceError>;

    /// Roster of one affiliation, ordered by rank then last login.
    async fn members_of(
        &self,
        kind: AffiliationKind,
        id: i64,
        limit: u32,
    ) -> Result<Vec<RawRecord>, SourceError>;
}
