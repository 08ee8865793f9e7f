//! Weapon hardpoints.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::stats::{MountPosition, MountType};
use crate::weapon::{Weapon, WeaponRecord};

/// Which weapons a mount will accept, beyond the size check.
///
/// `Any` is the explicit no-restriction default; there is no shared mutable
/// predicate state between mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponRestriction {
    #[default]
    Any,
    /// Only weapons carrying the `Spinal` tag fit.
    SpinalOnly,
}

impl WeaponRestriction {
    fn allows(self, weapon: &Weapon) -> bool {
        match self {
            WeaponRestriction::Any => true,
            WeaponRestriction::SpinalOnly => weapon.is_spinal(),
        }
    }
}

/// A weapon hardpoint with a size capacity, replicated `count` times on the
/// hull. Holds at most one weapon; the replication count multiplies its
/// shots on the printed sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    pub size: u32,
    pub count: u32,
    pub mount_type: MountType,
    pub position: MountPosition,
    pub restriction: WeaponRestriction,
    weapon: Option<Weapon>,
}

impl Mount {
    pub fn new(
        size: u32,
        count: u32,
        mount_type: MountType,
        position: MountPosition,
        restriction: WeaponRestriction,
    ) -> Self {
        Self {
            size,
            count,
            mount_type,
            position,
            restriction,
            weapon: None,
        }
    }

    /// A weapon fits if it is no larger than the mount and passes the
    /// mount's restriction.
    pub fn can_equip(&self, weapon: &Weapon) -> bool {
        weapon.size <= self.size && self.restriction.allows(weapon)
    }

    /// Equip a weapon, replacing any previous occupant.
    pub fn equip(&mut self, weapon: Weapon) -> Result<()> {
        if !self.can_equip(&weapon) {
            return Err(Error::IncompatibleWeapon { weapon: weapon.name });
        }
        self.weapon = Some(weapon);
        Ok(())
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    /// Position column code: arc letter plus either the mount-type letter or
    /// `S` for spinal-only mounts.
    pub fn position_code(&self) -> String {
        let kind = match self.restriction {
            WeaponRestriction::SpinalOnly => 'S',
            WeaponRestriction::Any => self.mount_type.code(),
        };
        format!("{}{}", self.position.code(), kind)
    }
}

/// Raw catalog record for a mount, optionally pre-equipped with a weapon.
#[derive(Debug, Clone, Deserialize)]
pub struct MountRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub size: u32,
    pub count: u32,
    #[serde(rename = "type")]
    pub mount_type: MountType,
    pub position: MountPosition,
    #[serde(default)]
    pub spinal: bool,
    #[serde(default)]
    pub weapon: Option<WeaponRecord>,
}

impl TryFrom<MountRecord> for Mount {
    type Error = Error;

    fn try_from(record: MountRecord) -> Result<Self> {
        if record.record_type != "Mount" {
            return Err(Error::RecordTypeMismatch {
                expected: "Mount",
                found: record.record_type,
            });
        }
        let restriction = if record.spinal {
            WeaponRestriction::SpinalOnly
        } else {
            WeaponRestriction::Any
        };
        let mut mount = Mount::new(
            record.size,
            record.count,
            record.mount_type,
            record.position,
            restriction,
        );
        if let Some(weapon) = record.weapon {
            mount.equip(Weapon::try_from(weapon)?)?;
        }
        Ok(mount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(size: u32, tags: &[&str]) -> Weapon {
        Weapon {
            name: "Test Weapon".to_string(),
            size,
            range: 12,
            damage: "2d6".to_string(),
            ammo_cost: 1,
            power_cost: 0,
            ap: 2,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn rejects_oversized_weapons() {
        let mut mount = Mount::new(
            2,
            1,
            MountType::Turret,
            MountPosition::Forward,
            WeaponRestriction::Any,
        );
        assert!(!mount.can_equip(&weapon(3, &[])));
        let err = mount.equip(weapon(3, &[])).unwrap_err();
        assert!(matches!(err, Error::IncompatibleWeapon { .. }));
        assert!(mount.weapon().is_none());
    }

    #[test]
    fn accepts_weapons_at_or_under_capacity() {
        let mut mount = Mount::new(
            3,
            1,
            MountType::Fixed,
            MountPosition::Port,
            WeaponRestriction::Any,
        );
        assert!(mount.can_equip(&weapon(3, &[])));
        mount.equip(weapon(2, &[])).unwrap();
        assert!(mount.weapon().is_some());
    }

    #[test]
    fn spinal_only_requires_spinal_tag_regardless_of_size() {
        let mount = Mount::new(
            5,
            1,
            MountType::Fixed,
            MountPosition::Forward,
            WeaponRestriction::SpinalOnly,
        );
        assert!(!mount.can_equip(&weapon(1, &[])));
        assert!(mount.can_equip(&weapon(5, &["Spinal"])));
    }

    #[test]
    fn equip_replaces_previous_occupant() {
        let mut mount = Mount::new(
            3,
            1,
            MountType::Omni,
            MountPosition::Rear,
            WeaponRestriction::Any,
        );
        mount.equip(weapon(2, &[])).unwrap();
        let mut replacement = weapon(1, &[]);
        replacement.name = "Replacement".to_string();
        mount.equip(replacement).unwrap();
        assert_eq!(mount.weapon().unwrap().name, "Replacement");
    }

    #[test]
    fn position_code_marks_spinal_mounts() {
        let plain = Mount::new(
            2,
            1,
            MountType::Turret,
            MountPosition::Forward,
            WeaponRestriction::Any,
        );
        assert_eq!(plain.position_code(), "FT");

        let spinal = Mount::new(
            4,
            1,
            MountType::Fixed,
            MountPosition::Forward,
            WeaponRestriction::SpinalOnly,
        );
        assert_eq!(spinal.position_code(), "FS");
    }
}
