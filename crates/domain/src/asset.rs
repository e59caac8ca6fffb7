//! Owned assets (houses, businesses, vehicles) and their stored contents.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::character::{Item, WeaponSlot};
use crate::record::RawRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    House,
    Business,
    Vehicle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Active,
    Locked,
}

/// Contents stashed inside a property or vehicle trunk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Storage {
    pub money: i64,
    pub items: Vec<Item>,
    pub weapons: Vec<WeaponSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub value: i64,
    pub location: String,
    pub image_url: String,
    pub status: PropertyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub storage: Storage,
}

/// The `houses` table has no House/Business discriminator column; cheap
/// entries are businesses by convention. A heuristic, not ground truth.
const BUSINESS_VALUE_THRESHOLD: i64 = 200_000;

const HOUSE_IMAGE_URL: &str = "https://picsum.photos/id/10/400/300";
const BUSINESS_IMAGE_URL: &str = "https://picsum.photos/id/225/400/300";

/// Storage weapon slots per container type. These ranges start at 1 and
/// differ from the player loadout's 0..=12 because the storage tables use
/// their own layout.
const HOUSE_GUN_SLOTS: i64 = 10;
const VEHICLE_GUN_SLOTS: i64 = 3;

fn vehicle_image_url(model: i64) -> String {
    // open.mp hosts a thumbnail per GTA:SA model id.
    format!("https://assets.open.mp/assets/images/vehiclePictures/Vehicle_{model}.jpg")
}

/// Map one `houses` row.
pub fn map_house(record: &RawRecord, catalogs: &Catalogs) -> Property {
    let mut id = record.int_any(&["HouseID", "ID", "houseid"]);
    if id == 0 {
        id = record.int("ID");
    }
    let value = record.int("Value");
    let kind = if value > 0 && value < BUSINESS_VALUE_THRESHOLD {
        PropertyKind::Business
    } else {
        PropertyKind::House
    };
    let address = record.text("Address");

    let (label, image_url, details) = match kind {
        PropertyKind::House => ("House", HOUSE_IMAGE_URL, "Property"),
        _ => ("Business", BUSINESS_IMAGE_URL, "Business"),
    };

    Property {
        id,
        name: format!("{label} #{id}"),
        kind,
        value,
        location: if address.is_empty() {
            "Unknown Location".to_string()
        } else {
            address
        },
        image_url: image_url.to_string(),
        status: status_from(record),
        details: Some(details.to_string()),
        storage: parse_storage(record, kind, catalogs),
    }
}

/// Map one `playervehicles` row. The store does not price vehicles, so
/// value is always 0.
pub fn map_vehicle(record: &RawRecord, catalogs: &Catalogs) -> Property {
    let model = record.int("model");
    let plate = record.text("plate").trim().to_string();

    Property {
        id: record.int("ID"),
        name: catalogs.vehicle_name(model),
        kind: PropertyKind::Vehicle,
        value: 0,
        location: "Spawn Point".to_string(),
        image_url: vehicle_image_url(model),
        status: status_from(record),
        details: if plate.is_empty() {
            None
        } else {
            Some(format!("Plate: {plate}"))
        },
        storage: parse_storage(record, PropertyKind::Vehicle, catalogs),
    }
}

/// Map both asset collections into one flat property list, houses first.
pub fn map_assets(
    houses: &[RawRecord],
    vehicles: &[RawRecord],
    catalogs: &Catalogs,
) -> Vec<Property> {
    houses
        .iter()
        .map(|r| map_house(r, catalogs))
        .chain(vehicles.iter().map(|r| map_vehicle(r, catalogs)))
        .collect()
}

fn status_from(record: &RawRecord) -> PropertyStatus {
    if record.bool01("Locked") {
        PropertyStatus::Locked
    } else {
        PropertyStatus::Active
    }
}

const STORAGE_COMMODITIES: &[(&str, &str, &str)] = &[
    ("pot", "Pot", "Pot"),
    ("crack", "Crack", "Crack"),
    ("cannabis", "Cannabis", "Cannabis"),
    ("cocaine", "Cocaine", "Cocaine"),
    ("meth", "Meth", "Meth"),
    ("xanax", "Xanax", "Xanax"),
    ("materials", "Materials", "Materials"),
];

fn parse_storage(record: &RawRecord, kind: PropertyKind, catalogs: &Catalogs) -> Storage {
    // Only houses bank cash in storage.
    let money = if kind == PropertyKind::Vehicle {
        0
    } else {
        record.int("Cash")
    };

    let mut items = Vec::new();
    let mut push = |id: &str, name: &str, amount: i64| {
        if amount > 0 {
            items.push(Item {
                id: id.to_string(),
                name: name.to_string(),
                amount,
            });
        }
    };
    for (id, name, column) in STORAGE_COMMODITIES {
        push(id, name, record.int(column));
    }
    if kind == PropertyKind::Vehicle {
        push("armor", "Body Armor", record.int("Armor"));
    }

    let max_guns = if kind == PropertyKind::Vehicle {
        VEHICLE_GUN_SLOTS
    } else {
        HOUSE_GUN_SLOTS
    };
    let mut weapons = Vec::new();
    for i in 1..=max_guns {
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

    Storage {
        money,
        items,
        weapons,
    }
}
