//! Craft-carrying hardpoints.

use serde::Deserialize;

use crate::craft::{Craft, DeployableRecord, PayloadRecord};
use crate::error::{Error, Result};
use crate::stats::MountPosition;

/// A craft bay with a size capacity, replicated `count` times, launching
/// into one or more arcs. Holds at most one craft type.
#[derive(Debug, Clone, PartialEq)]
pub struct Bay {
    pub size: u32,
    pub count: u32,
    pub positions: Vec<MountPosition>,
    craft: Option<Craft>,
}

impl Bay {
    pub fn new(size: u32, count: u32, positions: Vec<MountPosition>) -> Self {
        Self {
            size,
            count,
            positions,
            craft: None,
        }
    }

    /// A craft fits if it is no larger than the bay.
    pub fn can_equip(&self, craft: &Craft) -> bool {
        craft.size <= self.size
    }

    /// Equip a craft, replacing any previous occupant.
    pub fn equip(&mut self, craft: Craft) -> Result<()> {
        if !self.can_equip(&craft) {
            return Err(Error::IncompatibleCraft { craft: craft.name });
        }
        self.craft = Some(craft);
        Ok(())
    }

    pub fn craft(&self) -> Option<&Craft> {
        self.craft.as_ref()
    }

    /// Count printed on the sheet. A `Highlander` craft exists once no
    /// matter how many bays would carry it.
    pub fn effective_count(&self) -> u32 {
        match &self.craft {
            Some(craft) if craft.has_tag("Highlander") => 1,
            _ => self.count,
        }
    }

    /// Position column code: concatenated arc letters.
    pub fn position_code(&self) -> String {
        self.positions.iter().map(|p| p.code()).collect()
    }
}

/// Raw catalog record for a bay, optionally pre-equipped with a payload or
/// deployable.
#[derive(Debug, Clone, Deserialize)]
pub struct BayRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub size: u32,
    pub count: u32,
    pub positions: Vec<MountPosition>,
    #[serde(default)]
    pub payload: Option<PayloadRecord>,
    #[serde(default)]
    pub deployable: Option<DeployableRecord>,
}

impl TryFrom<BayRecord> for Bay {
    type Error = Error;

    fn try_from(record: BayRecord) -> Result<Self> {
        if record.record_type != "Bay" {
            return Err(Error::RecordTypeMismatch {
                expected: "Bay",
                found: record.record_type,
            });
        }
        let mut bay = Bay::new(record.size, record.count, record.positions);
        if let Some(payload) = record.payload {
            bay.equip(Craft::try_from(payload)?)?;
        }
        if let Some(deployable) = record.deployable {
            bay.equip(Craft::try_from(deployable)?)?;
        }
        Ok(bay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn craft(size: u32, tags: &[&str]) -> Craft {
        Craft::deployable(
            "Test Craft".to_string(),
            BTreeMap::new(),
            size,
            0,
            0,
            String::new(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn size_rule_matches_mounts() {
        let mut bay = Bay::new(2, 2, vec![MountPosition::Forward]);
        assert!(!bay.can_equip(&craft(3, &[])));
        assert!(matches!(
            bay.equip(craft(3, &[])).unwrap_err(),
            Error::IncompatibleCraft { .. }
        ));
        bay.equip(craft(2, &[])).unwrap();
        assert!(bay.craft().is_some());
    }

    #[test]
    fn highlander_craft_collapses_count_to_one() {
        let mut bay = Bay::new(2, 4, vec![MountPosition::Rear]);
        assert_eq!(bay.effective_count(), 4);
        bay.equip(craft(1, &["Highlander"])).unwrap();
        assert_eq!(bay.effective_count(), 1);
    }

    #[test]
    fn plain_craft_keeps_configured_count() {
        let mut bay = Bay::new(2, 3, vec![MountPosition::Port]);
        bay.equip(craft(1, &[])).unwrap();
        assert_eq!(bay.effective_count(), 3);
    }

    #[test]
    fn position_code_joins_arc_letters() {
        let bay = Bay::new(
            3,
            1,
            vec![
                MountPosition::Forward,
                MountPosition::Port,
                MountPosition::Starboard,
            ],
        );
        assert_eq!(bay.position_code(), "FPS");
    }
}
