//! Affiliation rosters: the member list of one faction, family, group or
//! agency.

use serde::Serialize;
use ucp_domain::AffiliationKind;

use crate::app::App;
use crate::infrastructure::ports::SourceError;

pub const ROSTER_LIMIT: u32 = 100;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub id: i64,
    pub name: String,
    pub rank: i64,
    pub last_active: String,
    pub avatar_url: String,
}

pub async fn members(
    app: &App,
    kind: AffiliationKind,
    id: i64,
) -> Result<Vec<RosterMember>, SourceError> {
    let rows = app.records.members_of(kind, id, ROSTER_LIMIT).await?;

    Ok(rows
        .iter()
        .map(|row| {
            let name = row.text("Name");
            let avatar = row.text("avatar_image_url");
            RosterMember {
                id: row.int("ID"),
                name: name.clone(),
                // The source aliases the type-specific rank column to RankId.
                rank: row.int("RankId"),
                last_active: row.text("LastLogin"),
                avatar_url: if avatar.is_empty() {
                    format!("https://i.pravatar.cc/150?u={name}")
                } else {
                    avatar
                },
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{app_with, StubSource};
    use serde_json::json;
    use ucp_domain::RawRecord;

    #[tokio::test]
    async fn test_members_mapped_with_avatar_fallback() {
        let mut source = StubSource::default();
        let mut row = RawRecord::new();
        row.insert("ID", json!(4));
        row.insert("Name", json!("Sweet_Johnson"));
        row.insert("RankId", json!(6));
        row.insert("LastLogin", json!("2026-08-01 20:15:00"));
        source.roster = vec![row];

        let app = app_with(source);
        let members = members(&app, AffiliationKind::Faction, 1)
            .await
            .expect("roster");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, 4);
        assert_eq!(members[0].rank, 6);
        assert_eq!(
            members[0].avatar_url,
            "https://i.pravatar.cc/150?u=Sweet_Johnson"
        );
    }
}
