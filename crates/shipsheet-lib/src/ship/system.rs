//! Ship subsystems.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::stats::ShipClass;

/// A ship subsystem. Default systems cost zero slots and come with the
/// hull; optional systems consume the ship's slot capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSystem {
    pub name: String,
    pub description: String,
    /// Slot cost; zero for core systems.
    pub slots: u32,
    /// Hit points, one damage bubble each.
    pub hp: u32,
    /// Optional labels printed inside the damage bubbles. Must number
    /// exactly `hp` when present.
    pub bubble_labels: Option<Vec<String>>,
    /// Hull classes this system fits. Empty means unrestricted.
    pub ship_classes: Vec<ShipClass>,
}

impl ShipSystem {
    pub fn new(
        name: String,
        description: String,
        slots: u32,
        hp: u32,
        bubble_labels: Option<Vec<String>>,
        ship_classes: Vec<ShipClass>,
    ) -> Result<Self> {
        if let Some(labels) = &bubble_labels {
            if labels.len() != hp as usize {
                return Err(Error::BubbleLabelMismatch {
                    system: name,
                    labels: labels.len(),
                    hp,
                });
            }
        }
        Ok(Self {
            name,
            description,
            slots,
            hp,
            bubble_labels,
            ship_classes,
        })
    }

    /// Whether the system may be fitted to a hull of the given class.
    pub fn allows_class(&self, class: ShipClass) -> bool {
        self.ship_classes.is_empty() || self.ship_classes.contains(&class)
    }
}

/// Raw catalog record for a ship system.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipSystemRecord {
    #[serde(rename = "__type__")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub slots: u32,
    pub hp: u32,
    #[serde(default)]
    pub bubble_text: Option<Vec<String>>,
    #[serde(default)]
    pub ship_classes: Vec<ShipClass>,
}

impl TryFrom<ShipSystemRecord> for ShipSystem {
    type Error = Error;

    fn try_from(record: ShipSystemRecord) -> Result<Self> {
        if record.record_type != "ShipSystem" {
            return Err(Error::RecordTypeMismatch {
                expected: "ShipSystem",
                found: record.record_type,
            });
        }
        ShipSystem::new(
            record.name,
            record.description,
            record.slots,
            record.hp,
            record.bubble_text,
            record.ship_classes,
        )
    }
}
