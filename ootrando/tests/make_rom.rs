use anyhow::Result;
use hashbrown::HashMap;
use ootrando::error::PatchError;
use ootrando::patch::tables::{
    static_patches, RomPatch, BRIDGE_MEDALLIONS, BRIDGE_OPEN, OPEN_DOOR_OF_TIME, OPEN_FOREST,
};
use ootrando::patch::{make_rom, Patcher};
use ootrando::rom::Rom;
use ootrando::settings::{ChecksumPolicy, PatchSettings};
use ootrando_game::{BridgeMode, GameData, Item, ItemData, Location, World, WorldSettings};
use pretty_assertions::assert_eq;

// Just past the end of the injected code.
const PATCHABLE_SIZE: usize = 0x3481000;
const TEXT_SPEED_ADDRS: [usize; 2] = [0x100, 0x200];

fn base_rom() -> Rom {
    Rom::new(vec![0; PATCHABLE_SIZE])
}

fn no_checksum() -> PatchSettings {
    PatchSettings {
        checksum_policy: ChecksumPolicy::Disabled,
    }
}

fn game_data() -> GameData {
    let mut item_data = HashMap::new();
    item_data.insert(
        "Piece of Heart".to_string(),
        ItemData::Bytes(vec![0x3E, 0x00, 0x14, 0x7A, 0x02]),
    );
    GameData {
        item_data,
        glyphs: HashMap::new(),
        text_speed_addresses: TEXT_SPEED_ADDRS.to_vec(),
    }
}

fn world(settings: WorldSettings) -> World {
    World {
        settings,
        locations: vec![],
    }
}

fn chest_game_location(address: usize) -> Location {
    Location {
        name: "Treasure Chest Game".to_string(),
        address: Some(address),
        address2: None,
        location_type: "Special".to_string(),
        default: 0,
        item: Some(Item {
            name: "Piece of Heart".to_string(),
            code: Some(0x3E),
            index: 0,
        }),
    }
}

fn assert_patch_applied(rom: &Rom, p: &RomPatch) {
    assert_eq!(
        &rom.data[p.addr..p.end()],
        p.data,
        "'{}' at {:#X}",
        p.description,
        p.addr
    );
}

fn assert_patch_untouched(rom: &Rom, p: &RomPatch) {
    let region = &rom.data[p.addr..p.end()];
    assert!(
        region.iter().all(|&b| b == 0),
        "'{}' at {:#X} was written",
        p.description,
        p.addr
    );
}

#[test]
fn static_patches_and_text_speed() -> Result<()> {
    let base = base_rom();
    let rom = make_rom(
        &base,
        &no_checksum(),
        &world(WorldSettings::default()),
        &game_data(),
    )?;

    for p in static_patches() {
        assert_patch_applied(&rom, p);
    }
    for addr in TEXT_SPEED_ADDRS {
        assert_eq!(rom.data[addr], 0x08);
    }

    // The static entries are disjoint, so each byte is written exactly once.
    let num_static: usize = static_patches().map(|p| p.data.len()).sum();
    let num_touched: usize = rom.get_modified_ranges().iter().map(|r| r.1 - r.0).sum();
    assert_eq!(num_touched, num_static + TEXT_SPEED_ADDRS.len());

    // The base image is never modified.
    assert!(base.data.iter().all(|&b| b == 0));
    Ok(())
}

#[test]
fn bridge_modes() -> Result<()> {
    let base = base_rom();
    for bridge in [
        BridgeMode::Medallions,
        BridgeMode::Open,
        BridgeMode::Vanilla,
        BridgeMode::Dungeons,
    ] {
        let settings = WorldSettings {
            bridge,
            ..WorldSettings::default()
        };
        let rom = make_rom(&base, &no_checksum(), &world(settings), &game_data())?;
        match bridge {
            BridgeMode::Medallions => {
                assert_patch_applied(&rom, &BRIDGE_MEDALLIONS);
                assert_eq!(rom.read_n(BRIDGE_OPEN.addr, 4)?, &[0, 0, 0, 0]);
            }
            BridgeMode::Open => {
                assert_patch_applied(&rom, &BRIDGE_OPEN);
                assert_patch_untouched(&rom, &BRIDGE_MEDALLIONS);
            }
            BridgeMode::Vanilla | BridgeMode::Dungeons => {
                assert_patch_untouched(&rom, &BRIDGE_MEDALLIONS);
                assert_eq!(rom.read_n(BRIDGE_OPEN.addr, 4)?, &[0, 0, 0, 0]);
            }
        }
    }
    Ok(())
}

#[test]
fn open_forest_and_door_of_time() -> Result<()> {
    let base = base_rom();

    let rom = make_rom(
        &base,
        &no_checksum(),
        &world(WorldSettings::default()),
        &game_data(),
    )?;
    assert_eq!(rom.data[OPEN_FOREST[0].addr], 0);
    assert_eq!(rom.read_n(OPEN_DOOR_OF_TIME.addr, 4)?, &[0, 0, 0, 0]);

    let settings = WorldSettings {
        open_forest: true,
        open_door_of_time: true,
        ..WorldSettings::default()
    };
    let rom = make_rom(&base, &no_checksum(), &world(settings), &game_data())?;
    for p in OPEN_FOREST {
        assert_patch_applied(&rom, p);
    }
    assert_patch_applied(&rom, &OPEN_DOOR_OF_TIME);
    Ok(())
}

#[test]
fn items_are_placed_after_static_patches() -> Result<()> {
    let base = base_rom();
    let mut world = world(WorldSettings::default());
    world.locations.push(chest_game_location(0x1000));
    let rom = make_rom(&base, &no_checksum(), &world, &game_data())?;
    assert_eq!(rom.read_n(0x1000, 5)?, &[0x3E, 0x00, 0x14, 0x7A, 0x02]);
    Ok(())
}

#[test]
fn failed_item_placement_yields_no_image() {
    let base = base_rom();
    let mut world = world(WorldSettings::default());
    world.locations.push(chest_game_location(PATCHABLE_SIZE - 2));
    let err = make_rom(&base, &no_checksum(), &world, &game_data()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PatchError>(),
        Some(PatchError::AddressOutOfRange { width: 5, .. })
    ));
    assert!(format!("{err:#}").contains("Treasure Chest Game"));
}

#[test]
fn enforced_checksum_rejects_unknown_image() {
    let base = Rom::new(vec![0; 16]);
    let settings = PatchSettings {
        checksum_policy: ChecksumPolicy::Enforce,
    };
    let err = make_rom(
        &base,
        &settings,
        &world(WorldSettings::default()),
        &game_data(),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PatchError>(),
        Some(PatchError::Checksum { .. })
    ));
}

// Under the default policy an unknown image is patched anyway, and fails only
// once a write falls outside it.
#[test]
fn undersized_image_fails_on_first_write() {
    let base = Rom::new(vec![0; 16]);
    let err = make_rom(
        &base,
        &PatchSettings::default(),
        &world(WorldSettings::default()),
        &game_data(),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PatchError>(),
        Some(PatchError::AddressOutOfRange { len: 16, .. })
    ));
}

// A single static entry plus one placed item leaves every other byte alone.
#[test]
fn patcher_writes_only_what_it_is_given() -> Result<()> {
    const ENTRY: RomPatch = RomPatch {
        addr: 0x10,
        data: &[0xDE, 0xAD, 0xBE, 0xEF],
        description: "Test entry",
    };
    let mut rom = Rom::new(vec![0; 0x100]);
    rom.enable_tracking();
    let mut world = world(WorldSettings::default());
    world.locations.push(chest_game_location(0x80));
    let game_data = game_data();
    let mut patcher = Patcher {
        rom: &mut rom,
        world: &world,
        game_data: &game_data,
    };
    patcher.apply_patch_table(&[ENTRY])?;
    assert_eq!(patcher.place_items()?, 1);

    assert_eq!(rom.get_modified_ranges(), vec![(0x10, 0x14), (0x80, 0x85)]);
    let mut expected = vec![0u8; 0x100];
    expected[0x10..0x14].copy_from_slice(ENTRY.data);
    expected[0x80..0x85].copy_from_slice(&[0x3E, 0x00, 0x14, 0x7A, 0x02]);
    assert_eq!(rom.data, expected);
    Ok(())
}

#[test]
fn patched_image_round_trips_through_disk() -> Result<()> {
    let mut rom = Rom::new(vec![0; 0x100]);
    let world = World {
        settings: WorldSettings::default(),
        locations: vec![chest_game_location(0x20)],
    };
    let game_data = game_data();
    Patcher {
        rom: &mut rom,
        world: &world,
        game_data: &game_data,
    }
    .place_items()?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("patched.z64");
    rom.save(&path)?;
    let loaded = Rom::load(&path)?;
    assert_eq!(loaded.md5_hex(), rom.md5_hex());
    assert_eq!(loaded.read_n(0x20, 5)?, &[0x3E, 0x00, 0x14, 0x7A, 0x02]);
    Ok(())
}
