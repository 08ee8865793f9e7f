//! The ship aggregate and its slot entities.
//!
//! This module is organized into focused submodules:
//!
//! - [`mount`] - weapon hardpoints and equip restrictions
//! - [`bay`] - craft bays
//! - [`system`] - ship subsystems and slot costs
//!
//! A [`Ship`] is cloned from a compendium template, mutated by equip calls
//! for a single run, then handed read-only to the sheet renderer.

pub mod bay;
pub mod mount;
pub mod system;

pub use bay::{Bay, BayRecord};
pub use mount::{Mount, MountRecord, WeaponRestriction};
pub use system::{ShipSystem, ShipSystemRecord};

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::craft::parse_stat_map;
use crate::error::{Error, Result};
use crate::stats::{ShipClass, ShipStat};

/// A named special rule printed in the sheet's trait table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    pub name: String,
    pub description: String,
}

/// A ship: stat block, hardpoints, and equipped systems.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub name: String,
    stats: BTreeMap<ShipStat, i32>,
    pub class: ShipClass,
    pub system_slots: u32,
    pub point_cost: u32,
    pub traits: Vec<Trait>,
    pub mounts: Vec<Mount>,
    pub bays: Vec<Bay>,
    systems: Vec<ShipSystem>,
}

impl Ship {
    /// Build a ship, merging the class's fixed traits into `traits`. A class
    /// trait sharing a name with a ship trait replaces its description;
    /// otherwise it is appended.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        stats: BTreeMap<ShipStat, i32>,
        class: ShipClass,
        system_slots: u32,
        point_cost: u32,
        mut traits: Vec<Trait>,
        mounts: Vec<Mount>,
        bays: Vec<Bay>,
    ) -> Self {
        for (trait_name, description) in class.traits() {
            match traits.iter_mut().find(|t| t.name == *trait_name) {
                Some(existing) => existing.description = description.to_string(),
                None => traits.push(Trait {
                    name: trait_name.to_string(),
                    description: description.to_string(),
                }),
            }
        }
        Self {
            name,
            stats,
            class,
            system_slots,
            point_cost,
            traits,
            mounts,
            bays,
            systems: Vec::new(),
        }
    }

    pub fn stat(&self, stat: ShipStat) -> Option<i32> {
        self.stats.get(&stat).copied()
    }

    pub fn systems(&self) -> &[ShipSystem] {
        &self.systems
    }

    /// Slot capacity remaining after the currently equipped systems.
    pub fn free_system_slots(&self) -> u32 {
        let used: u32 = self.systems.iter().map(|s| s.slots).sum();
        self.system_slots.saturating_sub(used)
    }

    /// A system fits if the ship's class is allowed and enough slots remain.
    pub fn can_equip(&self, system: &ShipSystem) -> bool {
        system.allows_class(self.class) && system.slots <= self.free_system_slots()
    }

    /// Equip a system. Re-equipping an already equipped system is a no-op.
    pub fn equip(&mut self, system: ShipSystem) -> Result<()> {
        if self.systems.contains(&system) {
            return Ok(());
        }
        if !self.can_equip(&system) {
            return Err(Error::IncompatibleSystem {
                system: system.name,
                ship: self.name.clone(),
            });
        }
        self.systems.push(system);
        Ok(())
    }
}

/// Raw catalog record for a ship template.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub name: String,
    pub stats: BTreeMap<String, i32>,
    pub system_slots: u32,
    pub point_cost: u32,
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
    pub ship_class: ShipClass,
    pub mounts: Vec<MountRecord>,
    pub bays: Vec<BayRecord>,
    #[serde(default)]
    pub systems: Vec<ShipSystemRecord>,
}

impl TryFrom<ShipRecord> for Ship {
    type Error = Error;

    fn try_from(record: ShipRecord) -> Result<Self> {
        if record.record_type != "Ship" {
            return Err(Error::RecordTypeMismatch {
                expected: "Ship",
                found: record.record_type,
            });
        }

        // Catalog files carry the power gauge under its in-fiction name.
        let mut raw_stats = record.stats;
        if let Some(reactor) = raw_stats.get("Reactor").copied() {
            raw_stats.insert("Power".to_string(), reactor);
        }
        let stats = parse_stat_map(&raw_stats);

        let mounts = record
            .mounts
            .into_iter()
            .map(Mount::try_from)
            .collect::<Result<Vec<_>>>()?;
        let bays = record
            .bays
            .into_iter()
            .map(Bay::try_from)
            .collect::<Result<Vec<_>>>()?;
        let traits = record
            .traits
            .into_iter()
            .map(|(name, description)| Trait { name, description })
            .collect();

        let mut ship = Ship::new(
            record.name,
            stats,
            record.ship_class,
            record.system_slots,
            record.point_cost,
            traits,
            mounts,
            bays,
        );
        for system in record.systems {
            ship.equip(ShipSystem::try_from(system)?)?;
        }
        Ok(ship)
    }
}
