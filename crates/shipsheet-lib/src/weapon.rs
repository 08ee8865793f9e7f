//! Weapon stat blocks and tag-derived values.

use serde::Deserialize;

use crate::dice::is_dice_notation;
use crate::error::{Error, Result};

/// An immutable weapon stat block from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub size: u32,
    pub range: u32,
    /// Damage roll in dice notation, or a flat integer.
    pub damage: String,
    pub ammo_cost: u32,
    pub power_cost: u32,
    /// Armor penetration.
    pub ap: u32,
    pub description: String,
    pub tags: Vec<String>,
}

impl Weapon {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Spinal weapons may only be fitted to spinal-capable mounts.
    pub fn is_spinal(&self) -> bool {
        self.has_tag("Spinal")
    }

    /// Shots fired per attack, as dice notation.
    ///
    /// EWAR weapons always report a single shot, taking precedence over any
    /// `Shots` tag. Otherwise the value comes from the first `Shots {n}`
    /// tag, defaulting to `"1"` when absent.
    pub fn shots(&self) -> Result<String> {
        if self.has_tag("EWAR") {
            return Ok("1".to_string());
        }
        for tag in &self.tags {
            if let Some(raw) = tag.strip_prefix("Shots ") {
                if !is_dice_notation(raw) {
                    return Err(Error::MalformedTag {
                        tag: "Shots",
                        value: tag.clone(),
                    });
                }
                return Ok(raw.to_string());
            }
        }
        Ok("1".to_string())
    }
}

/// Raw catalog record for a weapon.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub name: String,
    pub size: u32,
    pub range: u32,
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

impl TryFrom<WeaponRecord> for Weapon {
    type Error = Error;

    fn try_from(record: WeaponRecord) -> Result<Self> {
        if record.record_type != "Weapon" {
            return Err(Error::RecordTypeMismatch {
                expected: "Weapon",
                found: record.record_type,
            });
        }
        Ok(Weapon {
            name: record.name,
            size: record.size,
            range: record.range,
            damage: record.damage,
            ammo_cost: record.ammo,
            power_cost: record.power,
            ap: record.ap,
            description: record.description,
            tags: record.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon_with_tags(tags: &[&str]) -> Weapon {
        Weapon {
            name: "Test Weapon".to_string(),
            size: 2,
            range: 12,
            damage: "2d6+3".to_string(),
            ammo_cost: 1,
            power_cost: 0,
            ap: 2,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn shots_defaults_to_one() {
        assert_eq!(weapon_with_tags(&[]).shots().unwrap(), "1");
    }

    #[test]
    fn shots_parses_dice_notation_from_tag() {
        assert_eq!(weapon_with_tags(&["Shots 2d6"]).shots().unwrap(), "2d6");
        assert_eq!(
            weapon_with_tags(&["Inaccurate", "Shots 1d6+2"]).shots().unwrap(),
            "1d6+2"
        );
    }

    #[test]
    fn ewar_overrides_shots_tag() {
        assert_eq!(weapon_with_tags(&["Shots 2d6", "EWAR"]).shots().unwrap(), "1");
        assert_eq!(weapon_with_tags(&["EWAR"]).shots().unwrap(), "1");
    }

    #[test]
    fn malformed_shots_tag_is_rejected() {
        let err = weapon_with_tags(&["Shots lots"]).shots().unwrap_err();
        assert!(matches!(err, Error::MalformedTag { tag: "Shots", .. }));
    }

    #[test]
    fn record_type_is_validated() {
        let record = WeaponRecord {
            record_type: "Payload".to_string(),
            name: "Bad".to_string(),
            size: 1,
            range: 0,
            damage: "1".to_string(),
            ammo: 0,
            power: 0,
            ap: 0,
            description: String::new(),
            tags: Vec::new(),
        };
        let err = Weapon::try_from(record).unwrap_err();
        match err {
            Error::RecordTypeMismatch { expected, found } => {
                assert_eq!(expected, "Weapon");
                assert_eq!(found, "Payload");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
