use anyhow::{bail, Result};
use log::debug;
use ootrando_game::{GameData, Item, ItemData, ItemEncoding, Location};

use crate::error::PatchError;
use crate::rom::Rom;

pub const TREASURE_CHEST_GAME: &str = "Treasure Chest Game";

/// Extra writes needed when a song is placed at one of the song-teaching locations.
/// The cutscenes at these locations hard-code which song they teach, through an
/// inventory slot byte and/or a jump table pointer, and show a fixed text box.
pub struct SongFixup {
    pub location: &'static str,
    // Each receives the inventory slot byte, `0x65 - index`.
    pub slot_addrs: &'static [usize],
    // Each receives the jump table pointer `0x8C34 - 4 * index`, high byte first.
    pub jump_addrs: &'static [usize],
    // Receives the text box glyph of the placed item.
    pub textbox_addr: usize,
}

pub const SONG_FIXUPS: &[SongFixup] = &[
    SongFixup {
        location: "Impa at Castle",
        slot_addrs: &[0xD12ECB],
        jump_addrs: &[0xB063FE],
        textbox_addr: 0x2E8E931,
    },
    SongFixup {
        location: "Song from Malon",
        slot_addrs: &[],
        jump_addrs: &[0xD7E142, 0xD7E786],
        textbox_addr: 0x29BECB9,
    },
    SongFixup {
        location: "Song from Composer Grave",
        slot_addrs: &[],
        jump_addrs: &[0xE09F66],
        textbox_addr: 0x332A87D,
    },
    SongFixup {
        location: "Song from Saria",
        slot_addrs: &[0xE2A02B],
        jump_addrs: &[0xE29382],
        textbox_addr: 0x20B1DBD,
    },
    SongFixup {
        location: "Song from Ocarina of Time",
        slot_addrs: &[],
        jump_addrs: &[],
        textbox_addr: 0x252FC95,
    },
    SongFixup {
        location: "Song at Windmill",
        slot_addrs: &[0xE42ABF],
        jump_addrs: &[],
        textbox_addr: 0x3041091,
    },
    SongFixup {
        location: "Sheik Forest Song",
        slot_addrs: &[0xC7BAA3],
        jump_addrs: &[],
        textbox_addr: 0x20B0815,
    },
    SongFixup {
        location: "Sheik at Temple",
        slot_addrs: &[0xC8060B],
        jump_addrs: &[],
        textbox_addr: 0x2531335,
    },
    SongFixup {
        location: "Sheik in Crater",
        slot_addrs: &[0xC7BC57],
        jump_addrs: &[],
        textbox_addr: 0x224D7FD,
    },
    SongFixup {
        location: "Sheik in Ice Cavern",
        slot_addrs: &[0xC7BD77],
        jump_addrs: &[],
        textbox_addr: 0x2BEC895,
    },
    SongFixup {
        location: "Sheik in Kakariko",
        slot_addrs: &[0xAC9A5B],
        jump_addrs: &[],
        textbox_addr: 0x2000FED,
    },
    SongFixup {
        location: "Sheik at Colossus",
        slot_addrs: &[],
        jump_addrs: &[],
        textbox_addr: 0x218C589,
    },
];

pub fn song_fixup(location_name: &str) -> Option<&'static SongFixup> {
    SONG_FIXUPS.iter().find(|f| f.location == location_name)
}

pub fn slot_pointer(index: u8) -> isize {
    0x65 - index as isize
}

pub fn jump_pointer(index: u8) -> isize {
    0x8C34 - index as isize * 4
}

/// Second in-game representation of a song item.
const SONG_CODE_OFFSET: isize = 0x0D;
const DEFAULT_FLAGS_MASK: u16 = 0xF01F;

pub fn default_encoding(code: u16, location_default: u16) -> u16 {
    code | (location_default & DEFAULT_FLAGS_MASK)
}

fn lookup_item_data<'a>(
    game_data: &'a GameData,
    item: &Item,
    location: &Location,
) -> Result<&'a ItemData> {
    match game_data.item_data(&item.name) {
        Some(data) => Ok(data),
        None => bail!(PatchError::UnknownItem {
            item: item.name.clone(),
            location: location.name.clone(),
        }),
    }
}

fn item_data_byte(data: &ItemData, item: &Item, i: usize) -> Result<u8> {
    match data.byte(i) {
        Some(b) => Ok(b),
        None => bail!(PatchError::ItemDataTooShort {
            item: item.name.clone(),
            needed: i + 1,
            len: data.bytes().len(),
        }),
    }
}

fn secondary_address(location: &Location) -> Result<usize> {
    match location.address2 {
        Some(addr) => Ok(addr),
        None => bail!(PatchError::MissingSecondaryAddress {
            location: location.name.clone(),
        }),
    }
}

/// Writes the item assigned to `location` into the ROM. Returns `false` without
/// touching the ROM when the location has no address or no item code.
pub fn encode_location(rom: &mut Rom, location: &Location, game_data: &GameData) -> Result<bool> {
    let (item, code, addr) = match (&location.item, location.address) {
        (Some(item), Some(addr)) => match item.code {
            Some(code) => (item, code, addr),
            None => return Ok(false),
        },
        _ => return Ok(false),
    };
    let kind = match location.kind() {
        Ok(kind) => kind,
        Err(_) => bail!(PatchError::UnsupportedLocationType {
            location: location.name.clone(),
            tag: location.location_type.clone(),
        }),
    };
    debug!(
        "Placing {} (code {:#X}) at {} [{}]",
        item.name, code, location.name, kind
    );

    match kind.encoding() {
        ItemEncoding::Special => {
            let data = lookup_item_data(game_data, item, location)?;
            if location.name == TREASURE_CHEST_GAME {
                rom.write_n(addr, data.bytes())?;
            } else {
                let addr2 = secondary_address(location)?;
                let b0 = item_data_byte(data, item, 0)?;
                let b3 = item_data_byte(data, item, 3)?;
                rom.write_u8(addr, b0 as isize)?;
                rom.write_u8(addr2, b3 as isize)?;
            }
        }
        ItemEncoding::Song => {
            let addr2 = secondary_address(location)?;
            rom.write_u8(addr, code as isize)?;
            rom.write_u8(addr2, code as isize + SONG_CODE_OFFSET)?;
            if let Some(fixup) = song_fixup(&location.name) {
                apply_song_fixup(rom, fixup, item, location, game_data)?;
            }
        }
        ItemEncoding::Npc => {
            rom.write_u8(addr, item.index as isize)?;
            if let Some(addr2) = location.address2 {
                rom.write_u8(addr2, item.index as isize)?;
            }
        }
        ItemEncoding::Default => {
            let encoded = default_encoding(code, location.default);
            let bytes = encoded.to_be_bytes();
            rom.write_n(addr, &bytes)?;
            if let Some(addr2) = location.address2 {
                rom.write_n(addr2, &bytes)?;
            }
        }
    }
    Ok(true)
}

pub fn apply_song_fixup(
    rom: &mut Rom,
    fixup: &SongFixup,
    item: &Item,
    location: &Location,
    game_data: &GameData,
) -> Result<()> {
    let glyph = match game_data.glyph(&item.name) {
        Some(g) => g,
        None => bail!(PatchError::UnknownItem {
            item: item.name.clone(),
            location: location.name.clone(),
        }),
    };
    for &addr in fixup.slot_addrs {
        rom.write_u8(addr, slot_pointer(item.index))?;
    }
    let jump = jump_pointer(item.index);
    for &addr in fixup.jump_addrs {
        rom.write_u8(addr, jump >> 8)?;
        rom.write_u8(addr + 1, jump & 0xFF)?;
    }
    rom.write_u8(fixup.textbox_addr, glyph as isize)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::tables::SONG_SPEEDUPS;

    #[test]
    fn pointer_formulas() {
        assert_eq!(slot_pointer(0), 0x65);
        assert_eq!(slot_pointer(3), 0x62);
        assert_eq!(jump_pointer(0), 0x8C34);
        assert_eq!(jump_pointer(3), 0x8C28);
    }

    #[test]
    fn default_encoding_masks_location_flags() {
        assert_eq!(default_encoding(0x0021, 0x8000), 0x8021);
        assert_eq!(default_encoding(0x0021, 0xFFFF), 0xF03F);
        assert_eq!(default_encoding(0x0004, 0x0FE0), 0x0004);
    }

    #[test]
    fn song_fixup_names_are_unique() {
        for (i, a) in SONG_FIXUPS.iter().enumerate() {
            for b in &SONG_FIXUPS[i + 1..] {
                assert_ne!(a.location, b.location);
            }
        }
        assert_eq!(SONG_FIXUPS.len(), 12);
        assert!(song_fixup("Sheik at Colossus").is_some());
        assert!(song_fixup("Kokiri Sword Chest").is_none());
    }

    // Every text box byte sits inside one of the song cutscene blocks, which the
    // glyph write then overrides.
    #[test]
    fn textbox_addresses_are_inside_song_blocks() {
        for fixup in SONG_FIXUPS {
            let inside = SONG_SPEEDUPS
                .iter()
                .any(|p| fixup.textbox_addr >= p.addr && fixup.textbox_addr < p.end());
            assert!(inside, "text box for {} is outside song blocks", fixup.location);
        }
    }
}
