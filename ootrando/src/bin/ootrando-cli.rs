use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use log::info;
use ootrando::patch::make_rom;
use ootrando::rom::Rom;
use ootrando::settings::{ChecksumPolicy, PatchSettings};
use ootrando_game::{GameData, World};
use std::path::PathBuf;
use strum::VariantNames;

#[derive(Parser)]
struct Args {
    #[arg(long)]
    input_rom: PathBuf,

    #[arg(long)]
    output_rom: PathBuf,

    /// World JSON: settings plus every location with its assigned item.
    #[arg(long)]
    world: PathBuf,

    /// Item data, text box glyphs and text speed addresses.
    #[arg(long)]
    game_data: PathBuf,

    /// Patch settings JSON; `--checksum-policy` overrides its policy.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long, value_parser = PossibleValuesParser::new(ChecksumPolicy::VARIANTS))]
    checksum_policy: Option<String>,
}

fn get_settings(args: &Args) -> Result<PatchSettings> {
    let mut settings = match &args.settings {
        Some(path) => PatchSettings::load(path)?,
        None => PatchSettings::default(),
    };
    if let Some(policy) = &args.checksum_policy {
        settings.checksum_policy = policy.parse::<ChecksumPolicy>()?;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let settings = get_settings(&args)?;
    let world = World::load(&args.world)?;
    let game_data = GameData::load(&args.game_data)?;

    let input_rom = Rom::load(&args.input_rom)
        .with_context(|| format!("Unable to load ROM at path {}", args.input_rom.display()))?;
    info!(
        "Input ROM: {} ({} bytes, MD5 {})",
        args.input_rom.display(),
        input_rom.len(),
        input_rom.md5_hex()
    );

    // Generate the patched ROM:
    let output_rom = make_rom(&input_rom, &settings, &world, &game_data)?;
    info!(
        "Patched {} byte ranges (checksum policy: {})",
        output_rom.get_modified_ranges().len(),
        settings.checksum_policy
    );

    output_rom
        .save(&args.output_rom)
        .with_context(|| format!("Unable to save ROM at path {}", args.output_rom.display()))?;
    info!("Wrote output ROM to {}", args.output_rom.display());
    Ok(())
}
