//! Shipsheet library entry points.
//!
//! This crate holds the game-data model for the sheet builder: catalog
//! loading, equip-compatibility rules, dice scaling, and the text sheet
//! renderer. The CLI should only depend on the items exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod army;
pub mod compendium;
pub mod craft;
pub mod dice;
pub mod error;
pub mod sheet;
pub mod ship;
pub mod stats;
pub mod weapon;

pub use army::Army;
pub use compendium::Compendium;
pub use craft::{Craft, CraftKind};
pub use dice::{is_dice_notation, scale_dice, DiceExpr};
pub use error::{Error, Result};
pub use sheet::SheetRenderer;
pub use ship::{Bay, Mount, Ship, ShipSystem, Trait, WeaponRestriction};
pub use stats::{MountPosition, MountType, ShipClass, ShipStat};
pub use weapon::Weapon;
