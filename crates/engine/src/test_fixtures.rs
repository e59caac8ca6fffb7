//! Shared in-memory fixtures for use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use sha2::{Digest, Sha512};
use ucp_domain::{AffiliationKind, RawRecord};

use crate::app::App;
use crate::infrastructure::auth::AuthService;
use crate::infrastructure::ports::{RecordSource, SourceError};

/// State of an optional table in the fixture store.
pub enum TableFixture {
    Rows(Vec<RawRecord>),
    /// Deployment never provisioned the table.
    Missing,
    /// Any other database failure.
    Broken,
}

impl TableFixture {
    fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        match self {
            Self::Rows(rows) => Ok(rows.clone()),
            Self::Missing => Err(SourceError::TableMissing),
            Self::Broken => Err(SourceError::Database("connection reset".to_string())),
        }
    }
}

pub struct StubSource {
    pub players: Vec<RawRecord>,
    pub houses: TableFixture,
    pub vehicles: TableFixture,
    pub leaderboard: Vec<RawRecord>,
    pub roster: Vec<RawRecord>,
}

impl Default for StubSource {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            houses: TableFixture::Rows(Vec::new()),
            vehicles: TableFixture::Rows(Vec::new()),
            leaderboard: Vec::new(),
            roster: Vec::new(),
        }
    }
}

#[async_trait]
impl RecordSource for StubSource {
    async fn player_by_name(&self, name: &str) -> Result<Option<RawRecord>, SourceError> {
        Ok(self
            .players
            .iter()
            .find(|r| r.text("Name") == name)
            .cloned())
    }

    async fn player_by_id(&self, id: i64) -> Result<Option<RawRecord>, SourceError> {
        Ok(self.players.iter().find(|r| r.int("ID") == id).cloned())
    }

    async fn houses_by_owner(&self, _id: i64, _name: &str) -> Result<Vec<RawRecord>, SourceError> {
        self.houses.fetch()
    }

    async fn vehicles_by_player(&self, _id: i64) -> Result<Vec<RawRecord>, SourceError> {
        self.vehicles.fetch()
    }

    async fn wealth_leaderboard(&self, limit: u32) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self
            .leaderboard
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn members_of(
        &self,
        _kind: AffiliationKind,
        _id: i64,
        limit: u32,
    ) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.roster.iter().take(limit as usize).cloned().collect())
    }
}

/// A `players` row with a valid legacy password hash for `password`.
pub fn player(id: i64, name: &str, password: &str) -> RawRecord {
    let mut record = RawRecord::new();
    record.insert("ID", json!(id));
    record.insert("Name", json!(name));
    record.insert("Salt", json!("SALT"));
    record.insert(
        "BetterPassword",
        json!(hex::encode_upper(Sha512::digest(
            format!("{password}SALT").as_bytes()
        ))),
    );
    record
}

pub fn app_with(source: StubSource) -> App {
    App::new(Arc::new(source), AuthService::new("test-secret"))
}
