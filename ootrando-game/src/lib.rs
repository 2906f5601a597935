use anyhow::{Context, Result};
use hashbrown::HashMap;
use log::info;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use strum_macros::{Display, EnumString, VariantNames};

/// Tag carried by every world location. The tag decides how an item placed at the
/// location is encoded into ROM bytes; see [`LocationType::encoding`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, Display, VariantNames, Serialize, Deserialize,
)]
pub enum LocationType {
    Chest,
    Collectable,
    #[strum(serialize = "GS Token")]
    #[serde(rename = "GS Token")]
    GoldSkulltulaToken,
    Event,
    Boss,
    Drop,
    Special,
    Song,
    #[strum(serialize = "NPC")]
    #[serde(rename = "NPC")]
    Npc,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemEncoding {
    Special,
    Song,
    Npc,
    Default,
}

impl LocationType {
    pub fn encoding(self) -> ItemEncoding {
        match self {
            LocationType::Special => ItemEncoding::Special,
            LocationType::Song => ItemEncoding::Song,
            LocationType::Npc => ItemEncoding::Npc,
            _ => ItemEncoding::Default,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    // None for event-only placeholders, which never reach the ROM.
    #[serde(default)]
    pub code: Option<u16>,
    // Ordinal position of the item within its group (songs, NPC rewards).
    #[serde(default)]
    pub index: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_addr")]
    pub address: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_opt_addr")]
    pub address2: Option<usize>,
    #[serde(rename = "type")]
    pub location_type: String,
    #[serde(default, deserialize_with = "deserialize_word")]
    pub default: u16,
    #[serde(default)]
    pub item: Option<Item>,
}

impl Location {
    pub fn kind(&self) -> Result<LocationType, strum::ParseError> {
        self.location_type.parse()
    }
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, EnumString, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BridgeMode {
    Medallions,
    Open,
    #[default]
    Vanilla,
    Dungeons,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldSettings {
    #[serde(default)]
    pub bridge: BridgeMode,
    #[serde(default)]
    pub open_forest: bool,
    #[serde(default)]
    pub open_door_of_time: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct World {
    #[serde(default)]
    pub settings: WorldSettings,
    pub locations: Vec<Location>,
}

impl World {
    pub fn load(path: &Path) -> Result<World> {
        let world: World = read_json(path)?;
        info!(
            "Loaded world with {} locations (bridge: {}, open forest: {}, open door of time: {})",
            world.locations.len(),
            world.settings.bridge,
            world.settings.open_forest,
            world.settings.open_door_of_time
        );
        Ok(world)
    }
}

/// Encoding data for one item: a single byte for most items, or a tuple of bytes
/// for the items that carry extra chest/graphic information.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemData {
    Byte(u8),
    Bytes(Vec<u8>),
}

impl ItemData {
    pub fn bytes(&self) -> &[u8] {
        match self {
            ItemData::Byte(b) => std::slice::from_ref(b),
            ItemData::Bytes(v) => v,
        }
    }

    pub fn byte(&self, i: usize) -> Option<u8> {
        self.bytes().get(i).copied()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GameData {
    #[serde(default)]
    pub item_data: HashMap<String, ItemData>,
    // Text-box glyph per item. Items without an entry fall back to their
    // single-byte item data.
    #[serde(default)]
    pub glyphs: HashMap<String, u8>,
    // Message-box speed bytes, each patched to 0x08.
    #[serde(default, deserialize_with = "deserialize_addr_list")]
    pub text_speed_addresses: Vec<usize>,
}

impl GameData {
    pub fn load(path: &Path) -> Result<GameData> {
        let game_data: GameData = read_json(path)?;
        info!(
            "Loaded game data: {} items, {} glyphs, {} text speed addresses",
            game_data.item_data.len(),
            game_data.glyphs.len(),
            game_data.text_speed_addresses.len()
        );
        Ok(game_data)
    }

    pub fn item_data(&self, item_name: &str) -> Option<&ItemData> {
        self.item_data.get(item_name)
    }

    pub fn glyph(&self, item_name: &str) -> Option<u8> {
        if let Some(&g) = self.glyphs.get(item_name) {
            return Some(g);
        }
        match self.item_data.get(item_name)? {
            ItemData::Byte(b) => Some(*b),
            ItemData::Bytes(_) => None,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
    let json_str = std::io::read_to_string(file)
        .with_context(|| format!("unable to read {}", path.display()))?;
    let data = serde_json::from_str(&json_str)
        .with_context(|| format!("unable to parse {}", path.display()))?;
    Ok(data)
}

// Addresses are written either as plain JSON numbers or as "0x"-prefixed hex strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(u64),
    Str(String),
}

impl RawNumber {
    fn value(&self) -> Result<u64, String> {
        match self {
            RawNumber::Int(x) => Ok(*x),
            RawNumber::Str(s) => parse_number(s),
        }
    }
}

pub fn parse_number(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
    } else {
        s.parse::<u64>()
            .map_err(|e| format!("invalid decimal value '{s}': {e}"))
    }
}

fn deserialize_opt_addr<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
    let raw: Option<RawNumber> = Option::deserialize(d)?;
    match raw {
        None => Ok(None),
        Some(r) => {
            let x = r.value().map_err(D::Error::custom)?;
            usize::try_from(x).map(Some).map_err(D::Error::custom)
        }
    }
}

fn deserialize_addr_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<usize>, D::Error> {
    let raw: Vec<RawNumber> = Vec::deserialize(d)?;
    raw.iter()
        .map(|r| {
            let x = r.value().map_err(D::Error::custom)?;
            usize::try_from(x).map_err(D::Error::custom)
        })
        .collect()
}

fn deserialize_word<'de, D: Deserializer<'de>>(d: D) -> Result<u16, D::Error> {
    let raw = RawNumber::deserialize(d)?;
    let x = raw.value().map_err(D::Error::custom)?;
    u16::try_from(x).map_err(|_| D::Error::custom(format!("value {x:#x} does not fit in 16 bits")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0xCB6844"), Ok(0xCB6844));
        assert_eq!(parse_number(" 42 "), Ok(42));
        assert!(parse_number("0xZZ").is_err());
        assert!(parse_number("-1").is_err());
    }

    #[test]
    fn test_location_kind() {
        let loc: Location = serde_json::from_str(
            r#"{"name": "Kokiri Sword Chest", "address": "0x20A6142", "type": "Chest", "default": "0x04E0"}"#,
        )
        .unwrap();
        assert_eq!(loc.address, Some(0x20A6142));
        assert_eq!(loc.address2, None);
        assert_eq!(loc.default, 0x04E0);
        assert_eq!(loc.kind().unwrap(), LocationType::Chest);
        assert_eq!(loc.kind().unwrap().encoding(), ItemEncoding::Default);

        let loc: Location =
            serde_json::from_str(r#"{"name": "Deku Theater", "type": "NPC", "address": 100}"#)
                .unwrap();
        assert_eq!(loc.kind().unwrap(), LocationType::Npc);

        let loc: Location =
            serde_json::from_str(r#"{"name": "Skulltula", "type": "GS Token"}"#).unwrap();
        assert_eq!(loc.kind().unwrap(), LocationType::GoldSkulltulaToken);

        let loc: Location =
            serde_json::from_str(r#"{"name": "Mystery", "type": "Shop"}"#).unwrap();
        assert!(loc.kind().is_err());
    }

    #[test]
    fn test_default_out_of_range() {
        let r: Result<Location, _> =
            serde_json::from_str(r#"{"name": "x", "type": "Chest", "default": "0x10000"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_glyph_fallback() {
        let game_data: GameData = serde_json::from_str(
            r#"{
                "item_data": {"Song of Time": 194, "Bow": [1, 2, 3, 4]},
                "glyphs": {"Bow": 9}
            }"#,
        )
        .unwrap();
        assert_eq!(game_data.glyph("Song of Time"), Some(194));
        assert_eq!(game_data.glyph("Bow"), Some(9));
        assert_eq!(game_data.glyph("Hookshot"), None);
        assert_eq!(game_data.item_data("Bow").unwrap().byte(3), Some(4));
        assert_eq!(game_data.item_data("Song of Time").unwrap().byte(1), None);
    }

    #[test]
    fn test_world_load() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                "settings": {{"bridge": "medallions", "open_forest": true}},
                "locations": [
                    {{
                        "name": "Song from Saria",
                        "type": "Song",
                        "address": "0x20B1DB1",
                        "address2": "0x20B1DB6",
                        "item": {{"name": "Sarias Song", "code": 98, "index": 3}}
                    }}
                ]
            }}"#
        )?;
        let world = World::load(file.path())?;
        assert_eq!(world.settings.bridge, BridgeMode::Medallions);
        assert!(world.settings.open_forest);
        assert!(!world.settings.open_door_of_time);
        let item = world.locations[0].item.as_ref().unwrap();
        assert_eq!(item.code, Some(98));
        assert_eq!(item.index, 3);
        Ok(())
    }

    #[test]
    fn test_world_load_missing_file() {
        let err = World::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("unable to open"));
    }
}
