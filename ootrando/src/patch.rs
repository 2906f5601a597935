pub mod code;
pub mod items;
pub mod tables;

use anyhow::{Context, Result};
use log::{info, warn};
use ootrando_game::{BridgeMode, GameData, World};

use crate::rom::{Rom, ROM_SIZE};
use crate::settings::PatchSettings;

use self::tables::{
    RomPatch, BRIDGE_MEDALLIONS, BRIDGE_OPEN, OPEN_DOOR_OF_TIME, OPEN_FOREST,
    STATIC_PATCHES_POST_TEXT, STATIC_PATCHES_PRE_TEXT,
};

const TEXT_SPEED: isize = 0x08;

pub struct Patcher<'a> {
    pub rom: &'a mut Rom,
    pub world: &'a World,
    pub game_data: &'a GameData,
}

impl Patcher<'_> {
    pub fn apply_patch_table(&mut self, patches: &[RomPatch]) -> Result<()> {
        for p in patches {
            self.rom.write_n(p.addr, p.data).with_context(|| {
                format!("Unable to apply patch '{}' at {:#X}", p.description, p.addr)
            })?;
        }
        Ok(())
    }

    fn apply_text_speed(&mut self) -> Result<()> {
        for &addr in &self.game_data.text_speed_addresses {
            self.rom
                .write_u8(addr, TEXT_SPEED)
                .with_context(|| format!("Unable to set text speed at {addr:#X}"))?;
        }
        Ok(())
    }

    pub fn apply_static_patches(&mut self) -> Result<()> {
        for &group in STATIC_PATCHES_PRE_TEXT {
            self.apply_patch_table(group)?;
        }
        self.apply_text_speed()?;
        for &group in STATIC_PATCHES_POST_TEXT {
            self.apply_patch_table(group)?;
        }
        Ok(())
    }

    pub fn apply_world_settings(&mut self) -> Result<()> {
        let settings = &self.world.settings;
        match settings.bridge {
            BridgeMode::Medallions => self.apply_patch_table(&[BRIDGE_MEDALLIONS])?,
            BridgeMode::Open => self.apply_patch_table(&[BRIDGE_OPEN])?,
            BridgeMode::Vanilla | BridgeMode::Dungeons => {}
        }
        if settings.open_forest {
            self.apply_patch_table(OPEN_FOREST)?;
        }
        if settings.open_door_of_time {
            self.apply_patch_table(&[OPEN_DOOR_OF_TIME])?;
        }
        Ok(())
    }

    /// Returns the number of locations that were written.
    pub fn place_items(&mut self) -> Result<usize> {
        let mut num_placed = 0;
        for location in &self.world.locations {
            if items::encode_location(self.rom, location, self.game_data)
                .with_context(|| format!("Unable to place item at '{}'", location.name))?
            {
                num_placed += 1;
            }
        }
        Ok(num_placed)
    }
}

/// Produces the randomized image from `base_rom`. On error nothing is returned, so
/// a partially patched image can never escape.
pub fn make_rom(
    base_rom: &Rom,
    settings: &PatchSettings,
    world: &World,
    game_data: &GameData,
) -> Result<Rom> {
    base_rom.verify_checksum(settings.checksum_policy)?;
    if base_rom.len() != ROM_SIZE {
        warn!(
            "Base ROM is {:#X} bytes, expected {:#X}",
            base_rom.len(),
            ROM_SIZE
        );
    }

    let mut rom = base_rom.clone();
    rom.enable_tracking();
    let mut patcher = Patcher {
        rom: &mut rom,
        world,
        game_data,
    };
    patcher.apply_static_patches()?;
    patcher.apply_world_settings()?;
    let num_placed = patcher.place_items()?;
    info!(
        "Placed items at {} of {} locations",
        num_placed,
        world.locations.len()
    );
    Ok(rom)
}
