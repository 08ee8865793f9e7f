//! Catalog loading and name resolution.
//!
//! The compendium is the read-only catalog of every loadable template
//! entity. It is constructed once at process start from a data directory
//! and passed by reference to whatever needs it; there is no global
//! instance.

use std::fs;
use std::path::Path;

use tracing::debug;

use serde::Deserialize;

use crate::craft::{Craft, DeployableRecord, PayloadRecord};
use crate::error::Result;
use crate::ship::{Ship, ShipRecord, ShipSystem, ShipSystemRecord};
use crate::weapon::{Weapon, WeaponRecord};

pub const WEAPON_LIST: &str = "weapon_list.json";
pub const CRAFT_LIST: &str = "craft_list.json";
pub const SYSTEM_LIST: &str = "system_list.json";
pub const SHIP_LIST: &str = "ship_list.json";

#[derive(Debug, Deserialize)]
struct WeaponFile {
    weapons: Vec<WeaponRecord>,
}

#[derive(Debug, Deserialize)]
struct CraftFile {
    deployables: Vec<DeployableRecord>,
    payloads: Vec<PayloadRecord>,
}

#[derive(Debug, Deserialize)]
struct SystemFile {
    default: Vec<ShipSystemRecord>,
    slots: Vec<ShipSystemRecord>,
}

#[derive(Debug, Deserialize)]
struct ShipFile {
    ships: Vec<ShipRecord>,
}

/// In-memory catalog of all loaded template entities.
#[derive(Debug, Clone, Default)]
pub struct Compendium {
    weapons: Vec<Weapon>,
    crafts: Vec<Craft>,
    default_systems: Vec<ShipSystem>,
    slot_systems: Vec<ShipSystem>,
    ship_templates: Vec<Ship>,
}

impl Compendium {
    /// Load the four catalog files from a data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let weapon_file: WeaponFile = read_json(&dir.join(WEAPON_LIST))?;
        let craft_file: CraftFile = read_json(&dir.join(CRAFT_LIST))?;
        let system_file: SystemFile = read_json(&dir.join(SYSTEM_LIST))?;
        let ship_file: ShipFile = read_json(&dir.join(SHIP_LIST))?;

        let weapons = weapon_file
            .weapons
            .into_iter()
            .map(Weapon::try_from)
            .collect::<Result<Vec<_>>>()?;

        // Deployables first, then payloads, merged into one pool.
        let mut crafts = craft_file
            .deployables
            .into_iter()
            .map(Craft::try_from)
            .collect::<Result<Vec<_>>>()?;
        crafts.extend(
            craft_file
                .payloads
                .into_iter()
                .map(Craft::try_from)
                .collect::<Result<Vec<_>>>()?,
        );

        let default_systems = system_file
            .default
            .into_iter()
            .map(ShipSystem::try_from)
            .collect::<Result<Vec<_>>>()?;
        let slot_systems = system_file
            .slots
            .into_iter()
            .map(ShipSystem::try_from)
            .collect::<Result<Vec<_>>>()?;

        let ship_templates = ship_file
            .ships
            .into_iter()
            .map(Ship::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            weapons = weapons.len(),
            crafts = crafts.len(),
            default_systems = default_systems.len(),
            slot_systems = slot_systems.len(),
            ships = ship_templates.len(),
            "compendium loaded"
        );

        Ok(Self {
            weapons,
            crafts,
            default_systems,
            slot_systems,
            ship_templates,
        })
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn crafts(&self) -> &[Craft] {
        &self.crafts
    }

    pub fn default_systems(&self) -> &[ShipSystem] {
        &self.default_systems
    }

    pub fn slot_systems(&self) -> &[ShipSystem] {
        &self.slot_systems
    }

    pub fn ship_templates(&self) -> &[Ship] {
        &self.ship_templates
    }

    /// Look up a weapon by exact name.
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Look up a craft by exact name.
    pub fn craft(&self, name: &str) -> Option<&Craft> {
        self.crafts.iter().find(|c| c.name == name)
    }

    /// Look up a system by exact name, defaults before slot systems.
    pub fn system(&self, name: &str) -> Option<&ShipSystem> {
        self.default_systems
            .iter()
            .chain(self.slot_systems.iter())
            .find(|s| s.name == name)
    }

    /// Resolve a ship template by substring match on its name and return a
    /// fresh working copy. Templates themselves are never mutated.
    pub fn ship(&self, name: &str) -> Option<Ship> {
        self.ship_templates
            .iter()
            .find(|s| s.name.contains(name))
            .cloned()
    }

    /// Equip every class-default system onto a fresh ship, in load order.
    pub fn equip_default_systems(&self, ship: &mut Ship) -> Result<()> {
        for system in &self.default_systems {
            ship.equip(system.clone())?;
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
