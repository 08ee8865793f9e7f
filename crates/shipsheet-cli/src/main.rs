use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shipsheet_lib::{Compendium, SheetRenderer, Ship};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a printable starship sheet from catalog templates")]
struct Cli {
    /// The name of the ship template to use, matched by substring. Ex: Emblem
    #[arg(short, long)]
    ship: String,

    /// Weapon names assigned to mounts in order; an empty string leaves that
    /// mount unequipped.
    #[arg(short, long, num_args = 0..)]
    weapons: Vec<String>,

    /// Craft names assigned to bays in order; an empty string leaves that
    /// bay unequipped.
    #[arg(short, long, num_args = 0..)]
    crafts: Vec<String>,

    /// Additional systems to equip beyond the class defaults.
    #[arg(short = 'y', long, num_args = 0..)]
    systems: Vec<String>,

    /// Output file path for the rendered sheet.
    #[arg(short, long)]
    output: PathBuf,

    /// Override the catalog data directory.
    #[arg(long, default_value = "./resources")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let compendium = Compendium::load(&cli.data_dir).with_context(|| {
        format!("failed to load catalog data from {}", cli.data_dir.display())
    })?;

    let mut ship = resolve_ship(&compendium, &cli.ship)?;
    compendium
        .equip_default_systems(&mut ship)
        .context("failed to equip class-default systems")?;

    equip_systems(&compendium, &mut ship, &cli.systems)?;
    equip_weapons(&compendium, &mut ship, &cli.weapons)?;
    equip_crafts(&compendium, &mut ship, &cli.crafts)?;

    let renderer = SheetRenderer::default();
    renderer
        .write(&ship, &cli.output)
        .with_context(|| format!("failed to write sheet to {}", cli.output.display()))?;

    println!("Sheet for {} written to {}", ship.name, cli.output.display());
    Ok(())
}

fn resolve_ship(compendium: &Compendium, name: &str) -> Result<Ship> {
    match compendium.ship(name) {
        Some(ship) => Ok(ship),
        None => {
            let available: Vec<&str> = compendium
                .ship_templates()
                .iter()
                .map(|s| s.name.as_str())
                .collect();
            bail!(
                "no ship template matching '{}'; available: {}",
                name,
                available.join(", ")
            )
        }
    }
}

/// Unknown system names are hard errors: silently skipping one would change
/// the slot accounting printed on the sheet.
fn equip_systems(compendium: &Compendium, ship: &mut Ship, names: &[String]) -> Result<()> {
    for name in names {
        let system = compendium
            .system(name)
            .with_context(|| format!("unknown system name: {}", name))?;
        ship.equip(system.clone())
            .with_context(|| format!("cannot equip system {}", name))?;
    }
    Ok(())
}

/// Weapons map onto mounts in declaration order. An empty or unresolved
/// name leaves the mount unequipped; the miss is logged rather than fatal.
fn equip_weapons(compendium: &Compendium, ship: &mut Ship, names: &[String]) -> Result<()> {
    for (name, mount) in names.iter().zip(ship.mounts.iter_mut()) {
        if name.is_empty() {
            continue;
        }
        match compendium.weapon(name) {
            Some(weapon) => mount
                .equip(weapon.clone())
                .with_context(|| format!("cannot equip weapon {}", name))?,
            None => warn!(weapon = %name, "weapon not found in catalog; mount left empty"),
        }
    }
    Ok(())
}

/// Crafts map onto bays in declaration order, with the same omission rule
/// as weapons.
fn equip_crafts(compendium: &Compendium, ship: &mut Ship, names: &[String]) -> Result<()> {
    for (name, bay) in names.iter().zip(ship.bays.iter_mut()) {
        if name.is_empty() {
            continue;
        }
        match compendium.craft(name) {
            Some(craft) => bay
                .equip(craft.clone())
                .with_context(|| format!("cannot equip craft {}", name))?,
            None => warn!(craft = %name, "craft not found in catalog; bay left empty"),
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
