//! Organizational memberships derived from one `players` row.
//!
//! A single record can encode membership in four independent systems at
//! once: faction (`Member`/`Leader`), family (`FMember`), group (`Group`)
//! and the hitman agency (`Job`). Each system is resolved on its own and
//! the results are reconciled in one explicit merge step, so a record may
//! legitimately yield zero to four entries.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::record::{is_truthy, RawRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffiliationKind {
    Faction,
    Family,
    Group,
    Agency,
}

/// One membership entry as rendered by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AffiliationKind,
    pub rank: String,
    pub rank_id: i64,
    pub is_leader: bool,
    /// Sub-unit label, attached to Faction entries only (a merged group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

/// `Group` ids meaning "no group". 14 is the gamemode's unassigned bucket,
/// 255 its unsigned-byte null.
const NO_GROUP_SENTINELS: &[i64] = &[0, 14, 255];

/// Community Service: a punitive reassignment group that must never show
/// up as a faction division.
const PUNISHMENT_GROUP_ID: i64 = 5;

/// `Job` value for the contract-hitman job.
const HITMAN_JOB_ID: i64 = 8;

/// Rank thresholds implying leadership. Family structures are shallower
/// than faction ones, hence the lower cutoff.
const FACTION_LEADER_RANK: i64 = 6;
const FAMILY_LEADER_RANK: i64 = 5;
const GROUP_LEADER_RANK: i64 = 5;

struct GroupCandidate {
    id: i64,
    rank: i64,
    name: String,
}

fn resolve_group(record: &RawRecord, catalogs: &Catalogs) -> Option<GroupCandidate> {
    let id = record.int("Group");
    if id <= 0 || NO_GROUP_SENTINELS.contains(&id) {
        return None;
    }
    // Prefer the human-entered nickname unless it is the literal "None"
    // placeholder the gamemode writes for unnamed groups.
    let nick = if is_truthy(record.get("pGroupNick")) {
        record.text("pGroupNick")
    } else if is_truthy(record.get("GroupNick")) {
        record.text("GroupNick")
    } else {
        String::new()
    };
    let name = if !nick.is_empty() && nick != "None" {
        nick
    } else {
        catalogs.group_name(id)
    };
    Some(GroupCandidate {
        id,
        rank: record.int("GroupRank"),
        name,
    })
}

/// Derive the full affiliation list for one record.
///
/// Emit order is Faction (possibly carrying a merged division), Family,
/// standalone Group, Agency — stable, not sorted.
pub fn map_affiliations(record: &RawRecord, catalogs: &Catalogs) -> Vec<Affiliation> {
    let mut affiliations = Vec::new();

    let group = resolve_group(record, catalogs);

    // A leader id takes precedence over plain membership and implies
    // leadership on its own.
    let member_id = record.int("Member");
    let leader_id = record.int("Leader");
    let faction_id = if leader_id > 0 { leader_id } else { member_id };

    let merge_group = faction_id > 0
        && group
            .as_ref()
            .is_some_and(|g| g.id != PUNISHMENT_GROUP_ID);

    if faction_id > 0 {
        let rank = record.int("Rank");
        affiliations.push(Affiliation {
            id: faction_id,
            name: catalogs.faction_name(faction_id),
            kind: AffiliationKind::Faction,
            rank: format!("Rank {rank}"),
            rank_id: rank,
            is_leader: leader_id > 0 || rank >= FACTION_LEADER_RANK,
            division: if merge_group {
                group.as_ref().map(|g| g.name.clone())
            } else {
                None
            },
        });
    }

    let family_id = record.int("FMember");
    if family_id > 0 && family_id != 255 {
        let rank = record.int("Rank");
        affiliations.push(Affiliation {
            id: family_id,
            name: catalogs.family_name(family_id),
            kind: AffiliationKind::Family,
            rank: format!("Rank {rank}"),
            rank_id: rank,
            is_leader: record.int("HeadValue") > 0 || rank >= FAMILY_LEADER_RANK,
            division: None,
        });
    }

    if !merge_group {
        if let Some(g) = group {
            affiliations.push(Affiliation {
                id: g.id,
                name: g.name,
                kind: AffiliationKind::Group,
                rank: format!("Rank {}", g.rank),
                rank_id: g.rank,
                is_leader: g.rank >= GROUP_LEADER_RANK,
                division: None,
            });
        }
    }

    if record.int("Job") == HITMAN_JOB_ID {
        let hitman_rank = record.int("HitmanRank");
        let hits = record.int("CHits");
        let mut rank = if hitman_rank > 0 {
            format!("Rank {hitman_rank}")
        } else {
            "Agent".to_string()
        };
        if hits > 0 {
            rank.push_str(&format!(" ({hits} Hits)"));
        }
        affiliations.push(Affiliation {
            id: HITMAN_JOB_ID,
            name: "Hitman Agency".to_string(),
            kind: AffiliationKind::Agency,
            rank,
            rank_id: hitman_rank,
            is_leader: false,
            division: None,
        });
    }

    affiliations
}
