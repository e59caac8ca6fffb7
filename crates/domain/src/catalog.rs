//! Static id→label catalogs.
//!
//! The legacy schema has no authoritative name columns for any of these, so
//! the tables are best-guess reconstructions carried as data, not code: a
//! deployment can deserialize its own `Catalogs` to override them. Every
//! lookup is total — an unknown id resolves to a synthesized label, never an
//! error.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// All id→label tables plus the law-enforcement id set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalogs {
    pub weapons: BTreeMap<i64, String>,
    pub factions: BTreeMap<i64, String>,
    pub families: BTreeMap<i64, String>,
    /// Sparse group/division table, used only when the record carries no
    /// human-entered nickname.
    pub groups: BTreeMap<i64, String>,
    pub vehicles: BTreeMap<i64, String>,
    /// Faction ids treated as law enforcement for badge purposes.
    pub leo_faction_ids: BTreeSet<i64>,
    /// Department labels for the known LEO faction ids; anything else in
    /// the LEO set renders as generic "Law Enforcement".
    pub departments: BTreeMap<i64, String>,
}

impl Catalogs {
    pub fn weapon_name(&self, id: i64) -> String {
        self.weapons
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Weapon {id}"))
    }

    pub fn faction_name(&self, id: i64) -> String {
        self.factions
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Faction #{id}"))
    }

    pub fn family_name(&self, id: i64) -> String {
        self.families
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Family #{id}"))
    }

    pub fn group_name(&self, id: i64) -> String {
        self.groups
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Group #{id}"))
    }

    pub fn vehicle_name(&self, model: i64) -> String {
        self.vehicles
            .get(&model)
            .cloned()
            .unwrap_or_else(|| format!("Vehicle {model}"))
    }

    pub fn is_leo_faction(&self, id: i64) -> bool {
        self.leo_faction_ids.contains(&id)
    }

    pub fn department_name(&self, faction_id: i64) -> String {
        self.departments
            .get(&faction_id)
            .cloned()
            .unwrap_or_else(|| "Law Enforcement".to_string())
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            weapons: table(WEAPONS),
            factions: table(FACTIONS),
            families: table(FAMILIES),
            groups: table(GROUPS),
            vehicles: table(VEHICLES),
            leo_faction_ids: LEO_FACTION_IDS.iter().copied().collect(),
            departments: table(DEPARTMENTS),
        }
    }
}

fn table(entries: &[(i64, &str)]) -> BTreeMap<i64, String> {
    entries
        .iter()
        .map(|(id, name)| (*id, (*name).to_string()))
        .collect()
}

/// GTA:SA weapon ids. Sparse: 11-13 and 19-21 are unused slots, 44/45 are
/// goggles the gamemode never stores.
const WEAPONS: &[(i64, &str)] = &[
    (0, "Fist"),
    (1, "Brass Knuckles"),
    (2, "Golf Club"),
    (3, "Nightstick"),
    (4, "Knife"),
    (5, "Bat"),
    (6, "Shovel"),
    (7, "Pool Cue"),
    (8, "Katana"),
    (9, "Chainsaw"),
    (10, "Dildo"),
    (14, "Flowers"),
    (15, "Cane"),
    (16, "Grenade"),
    (17, "Tear Gas"),
    (18, "Molotov"),
    (22, "Colt 45"),
    (23, "Silenced Pistol"),
    (24, "Desert Eagle"),
    (25, "Shotgun"),
    (26, "Sawn-off Shotgun"),
    (27, "Combat Shotgun"),
    (28, "Micro SMG"),
    (29, "MP5"),
    (30, "AK-47"),
    (31, "M4"),
    (32, "Tec-9"),
    (33, "Country Rifle"),
    (34, "Sniper Rifle"),
    (35, "RPG"),
    (36, "HS Rocket"),
    (37, "Flamethrower"),
    (38, "Minigun"),
    (39, "Satchel Charge"),
    (40, "Detonator"),
    (41, "Spraycan"),
    (42, "Fire Extinguisher"),
    (43, "Camera"),
    (46, "Parachute"),
];

// Best-guess faction roster based on the `stuff` table context.
const FACTIONS: &[(i64, &str)] = &[
    (0, "Civilian"),
    (1, "Los Santos Police Dept"),
    (2, "Federal Bureau of Investigation"),
    (3, "San Andreas National Guard"),
    (4, "Fire & Medic Dept"),
    (5, "La Cosa Nostra"),
    (6, "Yakuza"),
    (7, "Government"),
    (8, "Hitmen Agency"),
    (9, "News Reporter"),
    (10, "Taxi Company"),
    (11, "Driving Instructors"),
    (12, "Supreme Court (SCOTUS)"),
    (13, "San Andreas Sheriff Dept"),
    (14, "San Andreas Police Dept"),
];

const FAMILIES: &[(i64, &str)] = &[
    (0, "None"),
    (1, "Grove Street Families"),
    (2, "The Ballas"),
    (3, "Los Santos Vagos"),
    (4, "Varrios Los Aztecas"),
    (5, "San Fierro Rifa"),
    (6, "Da Nang Boys"),
    (7, "Triads"),
    (8, "Italian Mafia"),
    (9, "Russian Mafia"),
    (10, "Biker Gang"),
];

const GROUPS: &[(i64, &str)] = &[
    (1, "Traffic Division"),
    (2, "S.W.A.T"),
    (3, "Investigative Services"),
    (5, "Community Service"),
    (7, "Gang Intelligence"),
    (10, "Training Bureau"),
    (11, "Air Support"),
    (12, "Internal Affairs"),
    (14, "Unassigned / Civilian"),
];

// LSPD, FBI and National Guard player factions plus the squad-car model ids
// some deployments store in `Member` instead.
const LEO_FACTION_IDS: &[i64] = &[1, 2, 3, 596, 597, 598];

const DEPARTMENTS: &[(i64, &str)] = &[
    (1, "LSPD"),
    (2, "FBI"),
    (3, "National Guard"),
];

/// GTA:SA vehicle model ids 400-611.
const VEHICLES: &[(i64, &str)] = &[
    (400, "Landstalker"),
    (401, "Bravura"),
    (402, "Buffalo"),
    (403, "Linerunner"),
    (404, "Perennial"),
    (405, "Sentinel"),
    (406, "Dumper"),
    (407, "Fire Truck"),
    (408, "Trashmaster"),
    (409, "Stretch"),
    (410, "Manana"),
    (411, "Infernus"),
    (412, "Voodoo"),
    (413, "Pony"),
    (414, "Mule"),
    (415, "Cheetah"),
    (416, "Ambulance"),
    (417, "Leviathan"),
    (418, "Moonbeam"),
    (419, "Esperanto"),
    (420, "Taxi"),
    (421, "Washington"),
    (422, "Bobcat"),
    (423, "Mr Whoopee"),
    (424, "BF Injection"),
    (425, "Hunter"),
    (426, "Premier"),
    (427, "Enforcer"),
    (428, "Securicar"),
    (429, "Banshee"),
    (430, "Predator"),
    (431, "Bus"),
    (432, "Rhino"),
    (433, "Barracks"),
    (434, "Hotknife"),
    (435, "Trailer"),
    (436, "Previon"),
    (437, "Coach"),
    (438, "Cabbie"),
    (439, "Stallion"),
    (440, "Rumpo"),
    (441, "RC Bandit"),
    (442, "Romero"),
    (443, "Packer"),
    (444, "Monster"),
    (445, "Admiral"),
    (446, "Squalo"),
    (447, "Seasparrow"),
    (448, "Pizzaboy"),
    (449, "Tram"),
    (450, "Trailer"),
    (451, "Turismo"),
    (452, "Speeder"),
    (453, "Reefer"),
    (454, "Tropic"),
    (455, "Flatbed"),
    (456, "Yankee"),
    (457, "Caddy"),
    (458, "Solair"),
    (459, "Berkley's RC Van"),
    (460, "Skimmer"),
    (461, "PCJ-600"),
    (462, "Faggio"),
    (463, "Freeway"),
    (464, "RC Baron"),
    (465, "RC Raider"),
    (466, "Glendale"),
    (467, "Oceanic"),
    (468, "Sanchez"),
    (469, "Sparrow"),
    (470, "Patriot"),
    (471, "Quad"),
    (472, "Coastguard"),
    (473, "Dinghy"),
    (474, "Hermes"),
    (475, "Sabre"),
    (476, "Rustler"),
    (477, "ZR-350"),
    (478, "Walton"),
    (479, "Regina"),
    (480, "Comet"),
    (481, "BMX"),
    (482, "Burrito"),
    (483, "Camper"),
    (484, "Marquis"),
    (485, "Baggage"),
    (486, "Dozer"),
    (487, "Maverick"),
    (488, "News Chopper"),
    (489, "Rancher"),
    (490, "FBI Rancher"),
    (491, "Virgo"),
    (492, "Greenwood"),
    (493, "Jetmax"),
    (494, "Hotring Racer"),
    (495, "Sandking"),
    (496, "Blista Compact"),
    (497, "Police Maverick"),
    (498, "Boxville"),
    (499, "Benson"),
    (500, "Mesa"),
    (501, "RC Goblin"),
    (502, "Hotring Racer A"),
    (503, "Hotring Racer B"),
    (504, "Bloodring Banger"),
    (505, "Rancher Lure"),
    (506, "Super GT"),
    (507, "Elegant"),
    (508, "Journey"),
    (509, "Bike"),
    (510, "Mountain Bike"),
    (511, "Beagle"),
    (512, "Cropduster"),
    (513, "Stuntplane"),
    (514, "Tanker"),
    (515, "Roadtrain"),
    (516, "Nebula"),
    (517, "Majestic"),
    (518, "Buccaneer"),
    (519, "Shamal"),
    (520, "Hydra"),
    (521, "FCR-900"),
    (522, "NRG-500"),
    (523, "HPV1000"),
    (524, "Cement Truck"),
    (525, "Towtruck"),
    (526, "Fortune"),
    (527, "Cadrona"),
    (528, "FBI Truck"),
    (529, "Willard"),
    (530, "Forklift"),
    (531, "Tractor"),
    (532, "Combine Harvester"),
    (533, "Feltzer"),
    (534, "Remington"),
    (535, "Slamvan"),
    (536, "Blade"),
    (537, "Freight"),
    (538, "Brown Streak"),
    (539, "Vortex"),
    (540, "Vincent"),
    (541, "Bullet"),
    (542, "Clover"),
    (543, "Sadler"),
    (544, "Fire Truck LA"),
    (545, "Hustler"),
    (546, "Intruder"),
    (547, "Primo"),
    (548, "Cargobob"),
    (549, "Tampa"),
    (550, "Sunrise"),
    (551, "Merit"),
    (552, "Utility Van"),
    (553, "Nevada"),
    (554, "Yosemite"),
    (555, "Windsor"),
    (556, "Monster A"),
    (557, "Monster B"),
    (558, "Uranus"),
    (559, "Jester"),
    (560, "Sultan"),
    (561, "Stratum"),
    (562, "Elegy"),
    (563, "Raindance"),
    (564, "RC Tiger"),
    (565, "Flash"),
    (566, "Tahoma"),
    (567, "Savanna"),
    (568, "Bandito"),
    (569, "Freight Flat"),
    (570, "Streak Carriage"),
    (571, "Kart"),
    (572, "Mower"),
    (573, "Duneride"),
    (574, "Sweeper"),
    (575, "Broadway"),
    (576, "Tornado"),
    (577, "AT-400"),
    (578, "DFT-30"),
    (579, "Huntley"),
    (580, "Stafford"),
    (581, "BF-400"),
    (582, "Newsvan"),
    (583, "Tug"),
    (584, "Petrol Trailer"),
    (585, "Emperor"),
    (586, "Wayfarer"),
    (587, "Euros"),
    (588, "Hotdog"),
    (589, "Club"),
    (590, "Freight Carriage"),
    (591, "Trailer"),
    (592, "Andromada"),
    (593, "Dodo"),
    (594, "RC Cam"),
    (595, "Launch"),
    (596, "Police Car (LSPD)"),
    (597, "Police Car (SFPD)"),
    (598, "Police Car (LVPD)"),
    (599, "Police Ranger"),
    (600, "Picador"),
    (601, "S.W.A.T. Van"),
    (602, "Alpha"),
    (603, "Phoenix"),
    (604, "Glendale Damaged"),
    (605, "Sadler Damaged"),
    (606, "Baggage Trailer A"),
    (607, "Baggage Trailer B"),
    (608, "Tug Stairs Trailer"),
    (609, "Boxville Mission"),
    (610, "Farm Trailer"),
    (611, "Utility Trailer"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lookups() {
        let c = Catalogs::default();
        assert_eq!(c.weapon_name(24), "Desert Eagle");
        assert_eq!(c.faction_name(1), "Los Santos Police Dept");
        assert_eq!(c.family_name(2), "The Ballas");
        assert_eq!(c.group_name(2), "S.W.A.T");
        assert_eq!(c.vehicle_name(411), "Infernus");
    }

    #[test]
    fn test_unknown_ids_synthesize_labels() {
        let c = Catalogs::default();
        assert_eq!(c.weapon_name(99), "Weapon 99");
        assert_eq!(c.faction_name(77), "Faction #77");
        assert_eq!(c.family_name(77), "Family #77");
        assert_eq!(c.group_name(99), "Group #99");
        assert_eq!(c.vehicle_name(9000), "Vehicle 9000");
    }

    #[test]
    fn test_departments() {
        let c = Catalogs::default();
        assert!(c.is_leo_faction(1));
        assert!(c.is_leo_faction(597));
        assert!(!c.is_leo_faction(4));
        assert_eq!(c.department_name(1), "LSPD");
        assert_eq!(c.department_name(2), "FBI");
        assert_eq!(c.department_name(3), "National Guard");
        assert_eq!(c.department_name(597), "Law Enforcement");
    }
}
