//! MySQL adapter for the legacy gamemode database.
//!
//! Queries deliberately `SELECT *` and convert rows column-by-column into
//! [`RawRecord`]s: the schema varies between deployments, so hardcoding
//! column lists here would defeat the alias-tolerant mapping layer.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{Column, Row};
use ucp_domain::{AffiliationKind, RawRecord};

use super::ports::{RecordSource, SourceError};

pub struct MySqlRecordSource {
    pool: MySqlPool,
}

impl MySqlRecordSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSource for MySqlRecordSource {
    async fn player_by_name(&self, name: &str) -> Result<Option<RawRecord>, SourceError> {
        let row = sqlx::query("SELECT * FROM players WHERE Name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.as_ref().map(row_to_record))
    }

    async fn player_by_id(&self, id: i64) -> Result<Option<RawRecord>, SourceError> {
        let row = sqlx::query("SELECT * FROM players WHERE ID = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.as_ref().map(row_to_record))
    }

    async fn houses_by_owner(&self, id: i64, name: &str) -> Result<Vec<RawRecord>, SourceError> {
        let rows =
            sqlx::query("SELECT * FROM houses WHERE OwnerID = ? OR CAST(OwnerID AS CHAR) = ? LIMIT 200")
                .bind(id)
                .bind(name)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn vehicles_by_player(&self, id: i64) -> Result<Vec<RawRecord>, SourceError> {
        let rows = sqlx::query("SELECT * FROM playervehicles WHERE pID = ? LIMIT 200")
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn wealth_leaderboard(&self, limit: u32) -> Result<Vec<RawRecord>, SourceError> {
        let rows = sqlx::query(
            "SELECT ID, Name, Money, Bank, avatar_image_url FROM players \
             ORDER BY (Money + Bank) DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn members_of(
        &self,
        kind: AffiliationKind,
        id: i64,
        limit: u32,
    ) -> Result<Vec<RawRecord>, SourceError> {
        // Column per membership system. Member/Group/Rank are reserved
        // words in MySQL 8.0+, hence the backticks.
        let (column, rank_column) = match kind {
            AffiliationKind::Faction => ("`Member`", "`Rank`"),
            AffiliationKind::Family => ("`FMember`", "`Rank`"),
            AffiliationKind::Group => ("`Group`", "`GroupRank`"),
            AffiliationKind::Agency => ("`Job`", "`CHits`"),
        };
        let query = format!(
            "SELECT ID, Name, {rank_column} AS RankId, LastLogin, avatar_image_url \
             FROM players WHERE {column} = ? \
             ORDER BY {rank_column} DESC, LastLogin DESC LIMIT ?"
        );
        let rows = sqlx::query(&query)
            .bind(id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.iter().map(row_to_record).collect())
    }
}

fn map_sqlx_error(e: sqlx::Error) -> SourceError {
    if let sqlx::Error::Database(db) = &e {
        // SQLSTATE 42S02: base table or view not found (MySQL 1146).
        if db.code().as_deref() == Some("42S02") {
            return SourceError::TableMissing;
        }
    }
    SourceError::Database(e.to_string())
}

fn row_to_record(row: &MySqlRow) -> RawRecord {
    let mut record = RawRecord::new();
    for (index, column) in row.columns().iter().enumerate() {
        record.insert(column.name().to_string(), decode_scalar(row, index));
    }
    record
}

/// Decode one column into a loose JSON scalar, trying the common legacy
/// column types in order. Anything undecodable becomes null, which the
/// coercers treat as absent.
fn decode_scalar(row: &MySqlRow, index: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return v
            .and_then(|f| serde_json::Number::from_f64(f).map(Value::Number))
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDateTime>, _>(index) {
        return v.map(|d| Value::from(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDate>, _>(index) {
        return v.map(|d| Value::from(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return v
            .map(|b| Value::from(String::from_utf8_lossy(&b).into_owned()))
            .unwrap_or(Value::Null);
    }
    Value::Null
}
