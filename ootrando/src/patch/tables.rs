//! Fixed-address writes applied identically on every patch run.
//!
//! Entries within and across the static groups never overlap (checked by the tests
//! below), so they can be applied in any order. The conditional patches at the
//! bottom deliberately land inside [`code::INITIAL_SAVE_FILE`], replacing some of
//! its no-op slots, and must be applied after it.

use super::code;

#[derive(Clone, Copy, Debug)]
pub struct RomPatch {
    pub addr: usize,
    pub data: &'static [u8],
    pub description: &'static str,
}

impl RomPatch {
    pub fn end(&self) -> usize {
        self.addr + self.data.len()
    }
}

const fn patch(addr: usize, description: &'static str, data: &'static [u8]) -> RomPatch {
    RomPatch {
        addr,
        data,
        description,
    }
}

pub const GAMEPLAY_FIXES: &[RomPatch] = &[
    patch(0xCB6844, "Allow returning to child age at any time", &[0x35]),
    patch(0x253C0E2, "Allow returning to child age at any time", &[0x80]),
    patch(0xD35EFC, "Static reward: child shooting gallery", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xE59CD4, "Static reward: Lost Woods target", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xEA3934, "Static reward: Gold Skulltula house", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xEA3940, "Static reward: Gold Skulltula house", &[0x10, 0x00]),
    patch(0xE12BA5, "Static reward: horseback archery", &[0x00]),
    patch(0xE12ADD, "Static reward: horseback archery", &[0x00]),
    patch(0xD35F55, "Static reward: adult shooting gallery", &[0x00]),
    patch(0xEC9A7C, "Static reward: Deku theater (sticks)", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xEC9CD5, "Static reward: Deku theater (nuts)", &[0x00]),
    patch(0xDF8060, "Static reward: Deku stick upgrade scrub", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xDF80D4, "Static reward: Deku nut upgrade scrub", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xED2960, "Static reward: rolling Goron as child", &[0x00, 0x00, 0x00, 0x00]),
    patch(0x22D82B7, "Unlock Fire Temple boss key chest door", &[0x3F]),
    patch(0xC6CEDB, "Bombchu shop requires bomb bag", &[0xA2]),
    patch(0xC6CEDF, "Bombchu shop requires bomb bag", &[0x18]),
    patch(0xE2D716, "Bowling alley requires bomb bag", &[0xA6, 0x72]),
    patch(0xE2D723, "Bowling alley requires bomb bag", &[0x18]),
    patch(0xE2D892, "Bowling alley requires bomb bag", &[0xA6, 0x72]),
    patch(0xE2D897, "Bowling alley requires bomb bag", &[0x18]),
    patch(0xC0082A, "Bazaar requires bomb bag (child)", &[0x00, 0x18]),
    patch(0xC0082C, "Bazaar requires bomb bag (child)", &[0x00, 0x0E, 0x74, 0x02]),
    patch(0xC00833, "Bazaar requires bomb bag (child)", &[0xA0]),
    patch(0xDF7A8E, "Bazaar requires bomb bag (adult)", &[0x00, 0x18]),
    patch(0xDF7A90, "Bazaar requires bomb bag (adult)", &[0x00, 0x0E, 0x74, 0x02]),
    patch(0xDF7A97, "Bazaar requires bomb bag (adult)", &[0xA0]),
    patch(0xC6ED86, "Goron shop requires bomb bag", &[0x00, 0xA2]),
    patch(0xC6ED8A, "Goron shop requires bomb bag", &[0x00, 0x18]),
    patch(0xED2FAC, "Link the Goron always gives his reward", &[0x80, 0x6E, 0x0F, 0x18]),
    patch(0xED2FEC, "Link the Goron always gives his reward", &[0x24, 0x0A, 0x00, 0x00]),
    patch(0xAE74D8, "Link the Goron always gives his reward", &[0x24, 0x0E, 0x00, 0x00]),
    patch(0xE55C4C, "Thawed King Zora always gives his reward", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xE56290, "Thawed King Zora always gives his reward", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xE56298, "Thawed King Zora always gives his reward", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xCD5E76, "Castle courtyard blocks on meeting Zelda", &[0x0E, 0xDC]),
    patch(0xCD5E12, "Castle courtyard blocks on meeting Zelda", &[0x0E, 0xDC]),
    patch(0xD01EA3, "Ruto stays in Jabu Jabu's Belly", &[0x00]),
    patch(0xAE72CC, "Poacher's saw does not affect Deku theater", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xAE577C, "No free sword when returning to child", &[0x80, 0xA4, 0x00, 0x68]),
    patch(0xAE58F4, "No free sword when returning to child", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xAE5F74, "No free sword when returning to child", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xBAED6C, "Kokiri sword not granted on load", &[0x00, 0x00, 0x00, 0x00]),
];

pub const CUTSCENE_SPEEDUPS: &[RomPatch] = &[
    patch(0xB06BBA, "Skip intro cutscene", &[0x00, 0x00]),
    patch(0x290E08E, "Shorten Zelda's letter scene", &[0x05, 0xF0]),
    patch(0x2E8C108, "Shorten Zelda's letter scene", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0xD12F76, "Shorten Zelda's letter scene", &[0x0E, 0xDC]),
    patch(0x1FC0CF8, "Shorten Zelda escaping Hyrule Castle", &[
        0x00, 0x00, 0x00, 0x01, 0x00, 0x21, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02,
    ]),
    patch(0x2077E20, "Shorten scene after Deku Tree", &[0x00, 0x07, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x2078A10, "Shorten scene after Deku Tree", &[0x00, 0x0E, 0x00, 0x1F, 0x00, 0x20, 0x00, 0x20]),
    patch(0x2079570, "Shorten scene after Deku Tree", &[
        0x00, 0x80, 0x00, 0x00, 0x00, 0x1E, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0x00, 0x1E, 0x00, 0x28, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x2221E88, "Shorten scene after Dodongo's Cavern", &[0x00, 0x0C, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0x2223308, "Shorten scene after Dodongo's Cavern", &[0x00, 0x81, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0x2113340, "Shorten scene after Jabu Jabu's Belly", &[0x00, 0x0D, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0x2113C18, "Shorten scene after Jabu Jabu's Belly", &[0x00, 0x82, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0x21131D0, "Shorten scene after Jabu Jabu's Belly", &[0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD4ED68, "Shorten scene after Forest Temple", &[0x00, 0x45, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD4ED78, "Shorten scene after Forest Temple", &[0x00, 0x3E, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0x207B9D4, "Shorten scene after Forest Temple", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0x2001848, "Shorten scene after Fire Temple", &[0x00, 0x1E, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0xD100B4, "Shorten scene after Fire Temple", &[0x00, 0x62, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD10134, "Shorten scene after Fire Temple", &[0x00, 0x3C, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0xD5A458, "Shorten scene after Water Temple", &[0x00, 0x15, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD5A3A8, "Shorten scene after Water Temple", &[0x00, 0x3D, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0x20D0D20, "Shorten scene after Water Temple", &[0x00, 0x29, 0x00, 0xC7, 0x00, 0xC8, 0x00, 0xC8]),
    patch(0xD13EC8, "Shorten scene after Shadow Temple", &[0x00, 0x61, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD13E18, "Shorten scene after Shadow Temple", &[0x00, 0x41, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0xD3A0A8, "Shorten scene after Spirit Temple", &[0x00, 0x60, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0xD39FF0, "Shorten scene after Spirit Temple", &[0x00, 0x3F, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00]),
    patch(0x2F5AF84, "Shorten Nabooru defeat scene", &[0x00, 0x00, 0x00, 0x05]),
    patch(0x2F5B378, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B384, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B4A4, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B4B0, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B568, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B574, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B630, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B63C, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B770, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2F5B77C, "Shorten Nabooru defeat scene", &[0x80, 0x00]),
    patch(0x2512680, "Shorten all-medallions scene", &[0x00, 0x74, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x33FB328, "Shorten Ganon's Tower collapse", &[0x00, 0x76, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31A8090, "Shorten Ganon's Castle trial completion (forest)", &[0x00, 0x6B, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31A9E00, "Shorten Ganon's Castle trial completion (fire)", &[0x00, 0x6E, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31A8B18, "Shorten Ganon's Castle trial completion (water)", &[0x00, 0x6C, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31A9430, "Shorten Ganon's Castle trial completion (shadow)", &[0x00, 0x6D, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31AB200, "Shorten Ganon's Castle trial completion (spirit)", &[0x00, 0x70, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x31AA830, "Shorten Ganon's Castle trial completion (light)", &[0x00, 0x6F, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x2151230, "Shorten Fairy Ocarina scene", &[0x00, 0x72, 0x00, 0x3C, 0x00, 0x3D, 0x00, 0x3D]),
    patch(0x2151240, "Shorten Fairy Ocarina scene", &[
        0x00, 0x4A, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0x00, 0x3C, 0x00, 0x81, 0xFF, 0xFF,
    ]),
    patch(0x2150E20, "Shorten Fairy Ocarina scene", &[0xFF, 0xFF, 0xFA, 0x4C]),
    patch(0x2531B40, "Shorten Light Arrow scene", &[0x00, 0x28, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x2533830, "Shorten Light Arrow scene", &[0x00, 0x31, 0x03, 0x0D, 0x03, 0x0E, 0x03, 0x0E]),
    patch(0x292D644, "Shorten rainbow bridge scene", &[0x00, 0x00, 0x00, 0xA0]),
    patch(0x292D680, "Shorten rainbow bridge scene", &[0x00, 0x02, 0x00, 0x0A, 0x00, 0x6C, 0x00, 0x00]),
    patch(0x292D6E8, "Shorten rainbow bridge scene", &[0x00, 0x27]),
    patch(0x292D718, "Shorten rainbow bridge scene", &[0x00, 0x32]),
    patch(0x292D810, "Shorten rainbow bridge scene", &[0x00, 0x02, 0x00, 0x3C]),
    patch(0x292D924, "Shorten rainbow bridge scene", &[0xFF, 0xFF, 0x00, 0x14, 0x00, 0x96, 0xFF, 0xFF]),
    patch(0x1FE30CE, "Remove owls", &[0x01, 0x4B]),
    patch(0x1FE30DE, "Remove owls", &[0x01, 0x4B]),
    patch(0x1FE30EE, "Remove owls", &[0x01, 0x4B]),
    patch(0x205909E, "Remove owls", &[0x00, 0x3F]),
    patch(0x22769E4, "Skip Darunia dance", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0xE56924, "Faster Zora escort", &[0x00, 0x00, 0x00, 0x00]),
    patch(0xCA0784, "Shorten Jabu Jabu swallowing scene", &[0x00, 0x18, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0xD03BAC, "Skip Ruto pointing at the Zora sapphire", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0x29BE984, "Shorten Epona race start", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0x1FC8B36, "Shorten Epona escape", &[0x00, 0x2A]),
    patch(0xE0A010, "Shorten well draining", &[0x00, 0x2A, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x2001110, "Shorten well draining", &[0x00, 0x2B, 0x00, 0xB7, 0x00, 0xB8, 0x00, 0xB8]),
    patch(0x2025026, "Shorten royal tomb opening", &[0x00, 0x01]),
    patch(0x2023C86, "Shorten royal tomb opening", &[0x00, 0x01]),
    patch(0x2025159, "Shorten royal tomb opening", &[0x02]),
    patch(0x2023E19, "Shorten royal tomb opening", &[0x02]),
    patch(0xE0A176, "Shorten Door of Time opening", &[0x00, 0x02]),
    patch(0xE0A35A, "Shorten Door of Time opening", &[0x00, 0x01, 0x00, 0x02]),
];

pub const SONG_SPEEDUPS: &[RomPatch] = &[
    patch(0x2E8E900, "Fast song: Zelda's Lullaby", &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x03, 0xE8, 0x00, 0x00, 0x00, 0x01, 0x00, 0x73, 0x00, 0x3B,
        0x00, 0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0C,
        0x00, 0x17, 0x00, 0x00, 0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF,
        0x00, 0xD4, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x332A4A6, "Fast song: Sun's Song", &[0x00, 0x3C]),
    patch(0x332A868, "Fast song: Sun's Song", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x08, 0x00, 0x18, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0xD3, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x20B1736, "Fast song: Saria's Song", &[0x00, 0x3C]),
    patch(0x20B1DA8, "Fast song: Saria's Song", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x15, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0xD1, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x20B19C8, "Fast song: Saria's Song", &[0x00, 0x11, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00]),
    patch(0x20B19F8, "Fast song: Saria's Song", &[
        0x00, 0x3E, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xD4, 0xFF, 0xFF, 0xF7, 0x31,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xD4,
    ]),
    patch(0x29BEF68, "Fast song: Epona's Song", &[0x00, 0x5E, 0x00, 0x0A, 0x00, 0x0B, 0x00, 0x0B]),
    patch(0x29BECB0, "Fast song: Epona's Song", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x02, 0x00, 0xD2, 0x00, 0x00,
        0x00, 0x09, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x0A,
        0x00, 0x3C, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x252FC80, "Fast song: Song of Time", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x19, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0xD5, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x252FBA0, "Fast song: Song of Time", &[0x00, 0x35, 0x00, 0x3B, 0x00, 0x3C, 0x00, 0x3C]),
    patch(0x1FC3B84, "Fast song: Song of Time", &[0xFF, 0xFF, 0xFF, 0xFF]),
    patch(0x3041084, "Fast song: Song of Storms", &[
        0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x02,
        0x00, 0xD6, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0x00, 0xBE, 0x00, 0xC8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x20AFF86, "Fast song: Minuet of Forest", &[0x00, 0x3C]),
    patch(0x20B0800, "Fast song: Minuet of Forest", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x0F, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x73, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x20AFF90, "Fast song: Minuet of Forest", &[0x00, 0x11, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00]),
    patch(0x20AFFC1, "Fast song: Minuet of Forest", &[0x00, 0x3E, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00]),
    patch(0x224B5D6, "Fast song: Bolero of Fire", &[0x00, 0x3C]),
    patch(0x224D7E8, "Fast song: Bolero of Fire", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x10, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x74, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x224B5E0, "Fast song: Bolero of Fire", &[0x00, 0x11, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00]),
    patch(0x224B611, "Fast song: Bolero of Fire", &[0x00, 0x3E, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00]),
    patch(0x224B7F8, "Fast song: Bolero of Fire", &[0x00, 0x00]),
    patch(0x224B828, "Fast song: Bolero of Fire", &[0x00, 0x00]),
    patch(0x224B858, "Fast song: Bolero of Fire", &[0x00, 0x00]),
    patch(0x224B888, "Fast song: Bolero of Fire", &[0x00, 0x00]),
    patch(0x2BEB256, "Fast song: Serenade of Water", &[0x00, 0x3C]),
    patch(0x2BEC880, "Fast song: Serenade of Water", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x10, 0x00, 0x11, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x75, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x2BEB260, "Fast song: Serenade of Water", &[0x00, 0x11, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00]),
    patch(0x2BEB290, "Fast song: Serenade of Water", &[0x00, 0x3E, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00]),
    patch(0x2BEB538, "Fast song: Serenade of Water", &[0x00, 0x00]),
    patch(0x2BEB548, "Fast song: Serenade of Water", &[0x80, 0x00]),
    patch(0x2BEB554, "Fast song: Serenade of Water", &[0x80, 0x00]),
    patch(0x1FFE460, "Fast song: Nocturne of Shadow", &[0x00, 0x2F, 0x00, 0x01, 0x00, 0x02, 0x00, 0x02]),
    patch(0x1FFFDF6, "Fast song: Nocturne of Shadow", &[0x00, 0x3C]),
    patch(0x2000FD8, "Fast song: Nocturne of Shadow", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0E, 0x00, 0x13, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x77, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x2000131, "Fast song: Nocturne of Shadow", &[0x00, 0x32, 0x00, 0x3A, 0x00, 0x3B, 0x00, 0x3B]),
    patch(0x218AF16, "Fast song: Requiem of Spirit", &[0x00, 0x3C]),
    patch(0x218C574, "Fast song: Requiem of Spirit", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x08, 0x00, 0x12, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x76, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x218B480, "Fast song: Requiem of Spirit", &[0x00, 0x30, 0x00, 0x3A, 0x00, 0x3B, 0x00, 0x3B]),
    patch(0x218AF20, "Fast song: Requiem of Spirit", &[
        0x00, 0x11, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
        0xFF, 0xFF, 0xFA, 0xF9, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01,
        0xFF, 0xFF, 0xFA, 0xF9, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01,
        0x0F, 0x67, 0x14, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ]),
    patch(0x218AF50, "Fast song: Requiem of Spirit", &[0x00, 0x3E, 0x00, 0x11, 0x00, 0x20, 0x00, 0x00]),
    patch(0x252FD26, "Fast song: Prelude of Light", &[0x00, 0x3C]),
    patch(0x2531320, "Fast song: Prelude of Light", &[
        0x00, 0x00, 0x00, 0x13, 0x00, 0x00, 0x00, 0x0E, 0x00, 0x14, 0x00, 0x00,
        0x00, 0x10, 0x00, 0x02, 0x08, 0x8B, 0xFF, 0xFF, 0x00, 0x78, 0x00, 0x11,
        0x00, 0x20, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]),
    patch(0x252FF24, "Fast song: Prelude of Light", &[0x80, 0x00]),
];

pub const INJECTED_CODE: &[RomPatch] = &[
    patch(0xB17BB4, "DMA the extra code block into RAM", &[
        0xAF, 0xBF, 0x00, 0x1C, 0xAF, 0xA4, 0x01, 0x40, 0x3C, 0x05, 0x03, 0x48,
        0x3C, 0x04, 0x80, 0x40, 0x0C, 0x00, 0x03, 0x7C, 0x24, 0x06, 0x10, 0x00,
        0x0C, 0x10, 0x02, 0x00,
    ]),
    patch(0x3480800, "DMA the extra code block into RAM", &[
        0x3C, 0x02, 0x80, 0x12, 0x24, 0x42, 0xD2, 0xA0, 0x24, 0x0E, 0x01, 0x40,
        0xAC, 0x2E, 0xE5, 0x00, 0x03, 0xE0, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00,
    ]),
    patch(0xD270, "DMA the extra code block into RAM", &[
        0x03, 0x48, 0x00, 0x00, 0x03, 0x48, 0x10, 0x00, 0x03, 0x48, 0x00, 0x00,
    ]),
    patch(0x3480000, "Progressive item text selection", code::PROGRESSIVE_ITEM_TEXT),
    patch(0x3480200, "Progressive item ID selection", code::PROGRESSIVE_ITEM_IDS),
    patch(0x34803FC, "Progressive item graphic selection", code::PROGRESSIVE_ITEM_GRAPHICS),
    patch(0x3480564, "Progressive item object selection", code::PROGRESSIVE_ITEM_OBJECTS),
    patch(0x3480600, "Initial save file writer", code::INITIAL_SAVE_FILE),
];

pub const CODE_HOOKS: &[RomPatch] = &[
    patch(0x10, "Header CRC for the patched image", &[0x93, 0x5E, 0x0E, 0x5B, 0xDA, 0x41, 0x6D, 0x4D]),
    patch(0xBE9AC0, "Hook: progressive item text", &[0x0C, 0x10, 0x00, 0x00]),
    patch(0xBE9AE0, "Hook: progressive item ID", &[0x0C, 0x10, 0x00, 0x81]),
    patch(0xBCECB4, "Hook: progressive item graphic", &[0x08, 0x10, 0x00, 0xFF, 0x03, 0x19, 0x10, 0x21]),
    patch(0xBDA26C, "Hook: progressive item object (chests)", &[0x0C, 0x22, 0x9E, 0xF0]),
    patch(0xBDA0E0, "Hook: progressive item object (NPCs)", &[0x0C, 0x22, 0x9E, 0xF0]),
    patch(0xB06C2C, "Hook: initial save file writer", &[0x0C, 0x10, 0x01, 0x80]),
];
/// Groups applied before the text speed bytes.
pub const STATIC_PATCHES_PRE_TEXT: &[&[RomPatch]] =
    &[GAMEPLAY_FIXES, CUTSCENE_SPEEDUPS, SONG_SPEEDUPS];

/// Groups applied after the text speed bytes.
pub const STATIC_PATCHES_POST_TEXT: &[&[RomPatch]] = &[INJECTED_CODE, CODE_HOOKS];

pub fn static_patches() -> impl Iterator<Item = &'static RomPatch> {
    STATIC_PATCHES_PRE_TEXT
        .iter()
        .chain(STATIC_PATCHES_POST_TEXT)
        .flat_map(|group| group.iter())
}

pub const BRIDGE_MEDALLIONS: RomPatch = patch(
    0xE2B454,
    "Rainbow bridge requires all medallions",
    &[
        0x80, 0xEA, 0x00, 0xA7, 0x24, 0x01, 0x00, 0x3F, 0x31, 0x4A, 0x00, 0x3F, 0x00, 0x00, 0x00,
        0x00,
    ],
);

pub const BRIDGE_OPEN: RomPatch = patch(
    0x34806B0,
    "Rainbow bridge starts open",
    &[0x34, 0xA5, 0x00, 0x20],
);

pub const OPEN_FOREST: &[RomPatch] = &[
    patch(0x2081148, "Kokiri Forest exit starts open", &[0x80]),
    patch(0x34806BC, "Kokiri Forest exit starts open", &[
        0x92, 0x25, 0x0E, 0xD5, 0x34, 0xA5, 0x00, 0x10, 0xA2, 0x25, 0x0E, 0xD5,
    ]),
];

pub const OPEN_DOOR_OF_TIME: RomPatch = patch(
    0x34806B4,
    "Door of Time starts open",
    &[0x34, 0xA5, 0x00, 0x08],
);
