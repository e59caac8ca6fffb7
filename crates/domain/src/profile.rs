//! Player account profile derived from one `players` row.

use serde::{Deserialize, Serialize};

use crate::record::RawRecord;

/// Account standing, derived with precedence Banned > Jailed > Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Banned,
    Jailed,
}

/// Normalized account view of a raw player record.
///
/// Built fresh on every lookup and never persisted. Credential columns
/// (Password, Salt, BetterPassword, ...) are simply never read here, so
/// they cannot leak into a serialized profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: i64,
    pub username: String,
    pub level: i64,
    pub cash: i64,
    pub bank: i64,
    /// Lifetime playtime; the store counts minutes.
    pub hours_played: i64,
    pub vip_level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_expiration: Option<String>,
    pub admin_level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub joined_date: String,
    pub warnings: i64,
    pub status: AccountStatus,
}

impl PlayerProfile {
    pub fn from_record(record: &RawRecord) -> Self {
        let status = if record.bool01("Banned") {
            AccountStatus::Banned
        } else if record.bool01("AdminJailed") {
            AccountStatus::Jailed
        } else {
            AccountStatus::Active
        };

        let vip_expiration = non_empty(record.text("VIPExpDate"));
        let avatar_url = non_empty(record.text("avatar_image_url"));

        Self {
            id: record.int("ID"),
            username: record.text("Name"),
            level: record.int("Level"),
            cash: record.int("Money"),
            bank: record.int("Bank"),
            hours_played: record.int("ConnectedTime") / 60,
            vip_level: record.int("DonateRank"),
            vip_expiration,
            // Some schema revisions renamed AdminLvl to AdminLevel.
            admin_level: record.int_any(&["AdminLvl", "AdminLevel"]),
            avatar_url,
            joined_date: record.text("Registered"),
            warnings: record.int("Warnings"),
            status,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player_record() -> RawRecord {
        let mut r = RawRecord::new();
        r.insert("ID", json!(42));
        r.insert("Name", json!("Carl_Johnson"));
        r.insert("Level", json!(12));
        r.insert("Money", json!(5300));
        r.insert("Bank", json!(250000));
        r.insert("ConnectedTime", json!(125)); // minutes
        r.insert("DonateRank", json!(2));
        r.insert("VIPExpDate", json!("2026-01-01"));
        r.insert("AdminLvl", json!(0));
        r.insert("Registered", json!("2019-06-12"));
        r.insert("Warnings", json!(1));
        r
    }

    #[test]
    fn test_maps_core_fields() {
        let p = PlayerProfile::from_record(&player_record());
        assert_eq!(p.id, 42);
        assert_eq!(p.username, "Carl_Johnson");
        assert_eq!(p.cash, 5300);
        assert_eq!(p.bank, 250000);
        assert_eq!(p.vip_level, 2);
        assert_eq!(p.vip_expiration.as_deref(), Some("2026-01-01"));
        assert_eq!(p.warnings, 1);
        assert_eq!(p.status, AccountStatus::Active);
    }

    #[test]
    fn test_hours_played_floors_minutes() {
        let p = PlayerProfile::from_record(&player_record());
        assert_eq!(p.hours_played, 2);
    }

    #[test]
    fn test_status_precedence_banned_over_jailed() {
        let mut r = player_record();
        r.insert("AdminJailed", json!(1));
        assert_eq!(
            PlayerProfile::from_record(&r).status,
            AccountStatus::Jailed
        );
        r.insert("Banned", json!(1));
        assert_eq!(
            PlayerProfile::from_record(&r).status,
            AccountStatus::Banned
        );
    }

    #[test]
    fn test_empty_record_maps_to_defaults() {
        let p = PlayerProfile::from_record(&RawRecord::new());
        assert_eq!(p.id, 0);
        assert_eq!(p.username, "");
        assert_eq!(p.cash, 0);
        assert_eq!(p.hours_played, 0);
        assert_eq!(p.vip_expiration, None);
        assert_eq!(p.avatar_url, None);
        assert_eq!(p.status, AccountStatus::Active);
    }

    #[test]
    fn test_admin_level_alias() {
        let mut r = RawRecord::new();
        r.insert("AdminLevel", json!(4));
        assert_eq!(PlayerProfile::from_record(&r).admin_level, 4);
    }
}
