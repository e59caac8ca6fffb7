//! UCP domain - the schema-tolerant mapping layer.
//!
//! Takes raw, loosely-typed rows from the legacy gamemode database and
//! derives the normalized panel model: player profile, character profile,
//! affiliations, and owned assets with their storage. All mapping is pure
//! and total; malformed or missing source data degrades to defaults
//! instead of failing.

pub mod affiliation;
pub mod asset;
pub mod catalog;
pub mod character;
pub mod profile;
pub mod record;

pub use affiliation::{map_affiliations, Affiliation, AffiliationKind};
pub use asset::{
    map_assets, map_house, map_vehicle, Property, PropertyKind, PropertyStatus, Storage,
};
pub use catalog::Catalogs;
pub use character::{CharacterProfile, Item, License, PoliceBadge, WeaponSlot};
pub use profile::{AccountStatus, PlayerProfile};
pub use record::{is_truthy, to_bool01, to_number, to_string_safe, RawRecord};
