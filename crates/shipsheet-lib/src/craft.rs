//! Deployable craft and weapon payloads launched from bays.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::dice::is_dice_notation;
use crate::error::{Error, Result};
use crate::stats::ShipStat;
use crate::weapon::Weapon;

/// Stats a craft never overrides; these are forced to zero regardless of
/// what the catalog record supplies. Only Hp, Speed, Evasion and Armour
/// overrides take effect.
const ZEROED_CRAFT_STATS: [ShipStat; 6] = [
    ShipStat::Power,
    ShipStat::Ammo,
    ShipStat::Restores,
    ShipStat::Shields,
    ShipStat::Sensors,
    ShipStat::Signature,
];

/// What kind of craft this is.
#[derive(Debug, Clone, PartialEq)]
pub enum CraftKind {
    /// A launched object with no weapon of its own (chaff, drones, probes).
    Deployable,
    /// A craft that carries exactly one weapon and strikes with it.
    Payload { weapon: Weapon },
}

/// A bay-launched craft: either a deployable or a weapon payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Craft {
    pub name: String,
    stats: BTreeMap<ShipStat, i32>,
    pub size: u32,
    pub ammo_cost: u32,
    pub power_cost: u32,
    pub description: String,
    pub tags: Vec<String>,
    pub kind: CraftKind,
}

impl Craft {
    /// Build a deployable craft from its parts.
    pub fn deployable(
        name: String,
        stats: BTreeMap<ShipStat, i32>,
        size: u32,
        ammo_cost: u32,
        power_cost: u32,
        description: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name,
            stats: zero_fixed_stats(stats),
            size,
            ammo_cost,
            power_cost,
            description,
            tags,
            kind: CraftKind::Deployable,
        }
    }

    /// Build a payload craft; size, ammo and power derive from the weapon.
    pub fn payload(
        name: String,
        stats: BTreeMap<ShipStat, i32>,
        weapon: Weapon,
        description: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name,
            stats: zero_fixed_stats(stats),
            size: weapon.size,
            ammo_cost: weapon.ammo_cost,
            power_cost: weapon.power_cost,
            description,
            tags,
            kind: CraftKind::Payload { weapon },
        }
    }

    pub fn stat(&self, stat: ShipStat) -> Option<i32> {
        self.stats.get(&stat).copied()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Damage roll of the payload weapon; deployables deal none.
    pub fn damage(&self) -> &str {
        match &self.kind {
            CraftKind::Payload { weapon } => &weapon.damage,
            CraftKind::Deployable => "-",
        }
    }

    /// Armor penetration of the payload weapon; deployables have none.
    pub fn ap(&self) -> u32 {
        match &self.kind {
            CraftKind::Payload { weapon } => weapon.ap,
            CraftKind::Deployable => 0,
        }
    }

    /// Craft launched per activation, as dice notation from the first
    /// `Swarm {n}` tag; a single craft when absent.
    pub fn swarm(&self) -> Result<String> {
        for tag in &self.tags {
            if let Some(raw) = tag.strip_prefix("Swarm ") {
                if !is_dice_notation(raw) {
                    return Err(Error::MalformedTag {
                        tag: "Swarm",
                        value: tag.clone(),
                    });
                }
                return Ok(raw.to_string());
            }
        }
        Ok("1".to_string())
    }
}

fn zero_fixed_stats(mut stats: BTreeMap<ShipStat, i32>) -> BTreeMap<ShipStat, i32> {
    for stat in ZEROED_CRAFT_STATS {
        stats.insert(stat, 0);
    }
    stats
}

/// Convert a record's free-form stat map into typed stats, skipping
/// unrecognised keys.
pub(crate) fn parse_stat_map(raw: &BTreeMap<String, i32>) -> BTreeMap<ShipStat, i32> {
    raw.iter()
        .filter_map(|(key, value)| ShipStat::parse(key).map(|stat| (stat, *value)))
        .collect()
}

/// Raw catalog record for a deployable craft.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployableRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
    pub size: u32,
    #[serde(default)]
    pub ammo: u32,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<DeployableRecord> for Craft {
    type Error = Error;

    fn try_from(record: DeployableRecord) -> Result<Self> {
        if record.record_type != "Deployable" {
            return Err(Error::RecordTypeMismatch {
                expected: "Deployable",
                found: record.record_type,
            });
        }
        Ok(Craft::deployable(
            record.name,
            parse_stat_map(&record.stats),
            record.size,
            record.ammo,
            record.power,
            record.description,
            record.tags,
        ))
    }
}

/// Raw catalog record for a payload craft. The weapon's stats are stored
/// flat on the record; the inner [`Weapon`] is built from them with zero
/// range (payloads strike on contact).
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
    pub size: u32,
    pub damage: String,
    #[serde(default)]
    pub ammo: u32,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub ap: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<PayloadRecord> for Craft {
    type Error = Error;

    fn try_from(record: PayloadRecord) -> Result<Self> {
        if record.record_type != "Payload" {
            return Err(Error::RecordTypeMismatch {
                expected: "Payload",
                found: record.record_type,
            });
        }
        let weapon = Weapon {
            name: record.name.clone(),
            size: record.size,
            range: 0,
            damage: record.damage,
            ammo_cost: record.ammo,
            power_cost: record.power,
            ap: record.ap,
            description: String::new(),
            tags: record.tags.clone(),
        };
        Ok(Craft::payload(
            record.name,
            parse_stat_map(&record.stats),
            weapon,
            record.description,
            record.tags,
        ))
    }
}
