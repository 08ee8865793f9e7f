//! Closed enumerations shared across the data model.
//!
//! Catalog files spell these values in uppercase (`"TURRET"`, `"ESCORT"`),
//! matching the printed rulebook; the serde renames keep that spelling on
//! the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a weapon mount articulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountType {
    Fixed,
    Turret,
    Omni,
}

impl MountType {
    /// Single-letter code used in the sheet's position column.
    pub fn code(self) -> char {
        match self {
            MountType::Fixed => 'F',
            MountType::Turret => 'T',
            MountType::Omni => 'O',
        }
    }
}

/// Firing arc of a mount or bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountPosition {
    Forward,
    Port,
    Rear,
    Starboard,
}

impl MountPosition {
    /// Single-letter code used in the sheet's position column.
    pub fn code(self) -> char {
        match self {
            MountPosition::Forward => 'F',
            MountPosition::Port => 'P',
            MountPosition::Rear => 'R',
            MountPosition::Starboard => 'S',
        }
    }
}

/// Hull classification. Each class carries a fixed set of descriptive
/// traits that every ship of the class receives at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipClass {
    Escort,
    Line,
    Capital,
}

impl ShipClass {
    /// The class's fixed trait set as (name, description) pairs.
    pub fn traits(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ShipClass::Escort => &[(
                "Maneuverable",
                "This ship may make two heading adjustments instead of one \
                 during the Movement Phase.",
            )],
            ShipClass::Line => &[(
                "Superior Shielding",
                "When using Charge Shields, this ship generates +1 Shields per \
                 Power spent.",
            )],
            ShipClass::Capital => &[
                (
                    "Supreme Shielding",
                    "When using Charge Shields, this ship generates +2 Shields \
                     per Power spent.",
                ),
                (
                    "Well Defended",
                    "When this ship takes system damage to reduce damage, reduce \
                     the damage taken by 2d6 instead of 1d6.",
                ),
                (
                    "Like a Cow",
                    "This ship can only adjust its heading at the end of its \
                     Movement Phase.",
                ),
            ],
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipClass::Escort => "ESCORT",
            ShipClass::Line => "LINE",
            ShipClass::Capital => "CAPITAL",
        };
        f.write_str(name)
    }
}

/// A ship statistic as printed on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipStat {
    Hp,
    Shields,
    Power,
    Ammo,
    Restores,
    Evasion,
    Armour,
    Speed,
    Sensors,
    Signature,
}

/// All stats in sheet display order.
pub const ALL_STATS: [ShipStat; 10] = [
    ShipStat::Hp,
    ShipStat::Shields,
    ShipStat::Power,
    ShipStat::Ammo,
    ShipStat::Restores,
    ShipStat::Evasion,
    ShipStat::Armour,
    ShipStat::Speed,
    ShipStat::Sensors,
    ShipStat::Signature,
];

impl ShipStat {
    /// Gauge stats are spent during play and render as a current/max box;
    /// the rest render as a flat value with a modifier blank.
    pub fn is_gauge(self) -> bool {
        matches!(
            self,
            ShipStat::Hp | ShipStat::Shields | ShipStat::Power | ShipStat::Ammo | ShipStat::Restores
        )
    }

    /// Parse a stat-map key from a catalog file, case-insensitively.
    ///
    /// Returns `None` for unrecognised keys; the loaders skip those rather
    /// than failing, matching the published catalog files which carry a few
    /// bookkeeping keys alongside the printable stats.
    pub fn parse(name: &str) -> Option<Self> {
        let stat = match name.to_ascii_uppercase().as_str() {
            "HP" => ShipStat::Hp,
            "SHIELDS" => ShipStat::Shields,
            "POWER" => ShipStat::Power,
            "AMMO" => ShipStat::Ammo,
            "RESTORES" => ShipStat::Restores,
            "EVASION" => ShipStat::Evasion,
            "ARMOUR" => ShipStat::Armour,
            "SPEED" => ShipStat::Speed,
            "SENSORS" => ShipStat::Sensors,
            "SIGNATURE" => ShipStat::Signature,
            _ => return None,
        };
        Some(stat)
    }
}

impl fmt::Display for ShipStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipStat::Hp => "HP",
            ShipStat::Shields => "SHIELDS",
            ShipStat::Power => "POWER",
            ShipStat::Ammo => "AMMO",
            ShipStat::Restores => "RESTORES",
            ShipStat::Evasion => "EVASION",
            ShipStat::Armour => "ARMOUR",
            ShipStat::Speed => "SPEED",
            ShipStat::Sensors => "SENSORS",
            ShipStat::Signature => "SIGNATURE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_split_matches_sheet_layout() {
        let gauges: Vec<ShipStat> = ALL_STATS.iter().copied().filter(|s| s.is_gauge()).collect();
        assert_eq!(
            gauges,
            vec![
                ShipStat::Hp,
                ShipStat::Shields,
                ShipStat::Power,
                ShipStat::Ammo,
                ShipStat::Restores
            ]
        );
    }

    #[test]
    fn stat_names_parse_case_insensitively() {
        assert_eq!(ShipStat::parse("armour"), Some(ShipStat::Armour));
        assert_eq!(ShipStat::parse("Hp"), Some(ShipStat::Hp));
        assert_eq!(ShipStat::parse("Reactor"), None);
    }

    #[test]
    fn capital_class_owns_three_traits() {
        assert_eq!(ShipClass::Capital.traits().len(), 3);
        assert_eq!(ShipClass::Escort.traits()[0].0, "Maneuverable");
    }
}
