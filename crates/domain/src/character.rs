//! In-game character state derived from one `players` row: licenses,
//! inventory, drugs, weapon loadout and police badge.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::record::{is_truthy, RawRecord};

/// A held capability flag. Only active licenses are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub active: bool,
}

/// A countable possession (inventory item, drug, stored commodity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub amount: i64,
}

/// One occupied weapon slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSlot {
    pub id: i64,
    pub name: String,
    pub ammo: i64,
}

/// Police credentials, shown for explicit badge holders and for anyone in a
/// law-enforcement faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceBadge {
    pub active: bool,
    pub number: i64,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub licenses: Vec<License>,
    pub inventory: Vec<Item>,
    pub drugs: Vec<Item>,
    pub weapons: Vec<WeaponSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<PoliceBadge>,
}

/// License types with their raw column synonyms. Most have an old column
/// and a "New<X>Lic" variant from a later schema revision; either being set
/// makes the license active.
const LICENSE_SYNONYMS: &[(&str, &[&str])] = &[
    ("Driving", &["CarLic", "NewCarLic"]),
    ("Flying", &["FlyLic", "NewFlyLic"]),
    ("Boating", &["BoatLic", "NewBoatLic"]),
    ("Weapon", &["GunLic", "NewGunLic"]),
    ("Trucking", &["TruckLicense"]),
    ("Fishing", &["FishLic"]),
];

const DRUG_FIELDS: &[(&str, &str, &str)] = &[
    ("cannabis", "Cannabis", "Cannabis"),
    ("cocaine", "Cocaine", "Cocaine"),
    ("meth", "Meth", "Meth"),
    ("pot", "Pot", "Pot"),
    ("crack", "Crack", "Crack"),
    ("xanax", "Xanax", "Xanax"),
    ("painkillers", "Painkillers", "PainKillers"),
];

const INVENTORY_FIELDS: &[(&str, &str, &str)] = &[
    ("materials", "Materials", "Materials"),
    ("products", "Products", "Products"),
    ("seeds", "Seeds", "Seeds"),
];

/// Binary possessions carried as quantity-1 items.
const POSSESSION_FLAGS: &[(&str, &str, &str)] = &[
    ("radio", "Portable Radio", "Radio"),
    ("phonebook", "Phonebook", "Phonebook"),
    ("dice", "Dice", "Dice"),
];

/// Player weapon slots. Slot 0 holding weapon id 0 (Fist) is excluded by
/// the id > 0 guard.
const WEAPON_SLOTS: std::ops::RangeInclusive<i64> = 0..=12;

impl CharacterProfile {
    pub fn from_record(record: &RawRecord, catalogs: &Catalogs) -> Self {
        Self {
            licenses: map_licenses(record),
            inventory: map_inventory(record),
            drugs: collect_items(record, DRUG_FIELDS),
            weapons: map_weapons(record, catalogs),
            badge: map_badge(record, catalogs),
        }
    }
}

fn map_licenses(record: &RawRecord) -> Vec<License> {
    LICENSE_SYNONYMS
        .iter()
        .filter(|(_, columns)| columns.iter().any(|c| record.bool01(c)))
        .map(|(name, _)| License {
            name: (*name).to_string(),
            active: true,
        })
        .collect()
}

fn collect_items(record: &RawRecord, fields: &[(&str, &str, &str)]) -> Vec<Item> {
    let mut items = Vec::new();
    for (id, name, column) in fields {
        let amount = record.int(column);
        if amount > 0 {
            items.push(Item {
                id: (*id).to_string(),
                name: (*name).to_string(),
                amount,
            });
        }
    }
    items
}

fn map_inventory(record: &RawRecord) -> Vec<Item> {
    let mut items = collect_items(record, INVENTORY_FIELDS);
    for (id, name, column) in POSSESSION_FLAGS {
        if record.bool01(column) {
            items.push(Item {
                id: (*id).to_string(),
                name: (*name).to_string(),
                amount: 1,
            });
        }
    }
    items
}

fn map_weapons(record: &RawRecord, catalogs: &Catalogs) -> Vec<WeaponSlot> {
    let mut weapons = Vec::new();
    for i in WEAPON_SLOTS {
        let gun = format!("Gun{i}");
        let gun_lower = format!("gun{i}");
        let id = record.int_any(&[gun.as_str(), gun_lower.as_str()]);
        if id > 0 {
            let ammo_col = format!("Ammo{i}");
            let ammo_lower = format!("ammo{i}");
            let gun_ammo = format!("Gun{i}Ammo");
            let ammo =
                record.int_any(&[ammo_col.as_str(), ammo_lower.as_str(), gun_ammo.as_str()]);
            weapons.push(WeaponSlot {
                id,
                name: catalogs.weapon_name(id),
                ammo,
            });
        }
    }
    weapons
}

fn map_badge(record: &RawRecord, catalogs: &Catalogs) -> Option<PoliceBadge> {
    let member_id = record.int("Member");
    let number = record.int("BadgeNumber");
    let has_badge = record.bool01("Badge") || number > 0;

    if !has_badge && !catalogs.is_leo_faction(member_id) {
        return None;
    }

    // Rank/division labels are attached only when the columns carry data;
    // rank 0 means unranked in the source.
    let rank = is_truthy(record.get("Rank")).then(|| format!("Rank {}", record.text("Rank")));
    let division =
        is_truthy(record.get("Division")).then(|| format!("Div {}", record.text("Division")));

    Some(PoliceBadge {
        active: true,
        number,
        department: catalogs.department_name(member_id),
        rank,
        division,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalogs() -> Catalogs {
        Catalogs::default()
    }

    #[test]
    fn test_empty_record_yields_empty_profile() {
        let profile = CharacterProfile::from_record(&RawRecord::new(), &catalogs());
        assert_eq!(profile, CharacterProfile::default());
    }

    #[test]
    fn test_license_synonyms_or_together() {
        let mut r = RawRecord::new();
        r.insert("NewCarLic", json!(1)); // new variant only
        r.insert("GunLic", json!(1)); // old variant only
        r.insert("FishLic", json!(2)); // not a 0/1 sentinel -> inactive
        let profile = CharacterProfile::from_record(&r, &catalogs());
        let names: Vec<_> = profile.licenses.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Driving", "Weapon"]);
        assert!(profile.licenses.iter().all(|l| l.active));
    }

    #[test]
    fn test_inventory_and_drugs_only_positive_amounts() {
        let mut r = RawRecord::new();
        r.insert("Materials", json!(250));
        r.insert("Seeds", json!(0));
        r.insert("Cocaine", json!(12));
        r.insert("Radio", json!(1));
        let profile = CharacterProfile::from_record(&r, &catalogs());
        assert_eq!(
            profile.inventory,
            vec![
                Item {
                    id: "materials".into(),
                    name: "Materials".into(),
                    amount: 250
                },
                Item {
                    id: "radio".into(),
                    name: "Portable Radio".into(),
                    amount: 1
                },
            ]
        );
        assert_eq!(
            profile.drugs,
            vec![Item {
                id: "cocaine".into(),
                name: "Cocaine".into(),
                amount: 12
            }]
        );
    }

    #[test]
    fn test_weapon_scan_single_slot() {
        let mut r = RawRecord::new();
        r.insert("Gun3", json!(24));
        r.insert("Ammo3", json!(120));
        let profile = CharacterProfile::from_record(&r, &catalogs());
        assert_eq!(
            profile.weapons,
            vec![WeaponSlot {
                id: 24,
                name: "Desert Eagle".into(),
                ammo: 120
            }]
        );
    }

    #[test]
    fn test_weapon_ammo_fallback_names() {
        let mut r = RawRecord::new();
        r.insert("gun5", json!(30));
        r.insert("Gun5Ammo", json!(90));
        let profile = CharacterProfile::from_record(&r, &catalogs());
        assert_eq!(profile.weapons[0].id, 30);
        assert_eq!(profile.weapons[0].name, "AK-47");
        assert_eq!(profile.weapons[0].ammo, 90);
    }

    #[test]
    fn test_fist_slot_excluded() {
        let mut r = RawRecord::new();
        r.insert("Gun0", json!(0));
        r.insert("Ammo0", json!(1));
        let profile = CharacterProfile::from_record(&r, &catalogs());
        assert!(profile.weapons.is_empty());
    }

    #[test]
    fn test_badge_from_leo_membership_without_flag() {
        let mut r = RawRecord::new();
        r.insert("Member", json!(1));
        let badge = CharacterProfile::from_record(&r, &catalogs())
            .badge
            .expect("LEO member should carry a badge");
        assert!(badge.active);
        assert_eq!(badge.number, 0);
        assert_eq!(badge.department, "LSPD");
        assert_eq!(badge.rank, None);
        assert_eq!(badge.division, None);
    }

    #[test]
    fn test_badge_from_explicit_number_outside_leo() {
        let mut r = RawRecord::new();
        r.insert("Member", json!(10));
        r.insert("BadgeNumber", json!(4471));
        r.insert("Rank", json!(3));
        let badge = CharacterProfile::from_record(&r, &catalogs())
            .badge
            .expect("badge number should force a badge");
        assert_eq!(badge.number, 4471);
        assert_eq!(badge.department, "Law Enforcement");
        assert_eq!(badge.rank.as_deref(), Some("Rank 3"));
    }

    #[test]
    fn test_no_badge_for_civilian() {
        let mut r = RawRecord::new();
        r.insert("Member", json!(10));
        assert!(CharacterProfile::from_record(&r, &catalogs())
            .badge
            .is_none());
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let mut r = RawRecord::new();
        r.insert("Member", json!(2));
        r.insert("Gun1", json!(24));
        r.insert("Materials", json!(7));
        let a = CharacterProfile::from_record(&r, &catalogs());
        let b = CharacterProfile::from_record(&r, &catalogs());
        assert_eq!(a, b);
    }
}
