//! Army-level point accounting.

use crate::ship::Ship;

/// A collection of ships under a point budget.
#[derive(Debug, Clone, Default)]
pub struct Army {
    pub max_points: u32,
    ships: Vec<Ship>,
}

impl Army {
    pub fn new(max_points: u32) -> Self {
        Self {
            max_points,
            ships: Vec::new(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Total point cost of the ships in the army.
    pub fn point_cost(&self) -> u32 {
        self.ships.iter().map(|s| s.point_cost).sum()
    }

    /// Budget remaining; negative when over budget.
    pub fn free_points(&self) -> i64 {
        i64::from(self.max_points) - i64::from(self.point_cost())
    }

    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Remove the first ship with the given name. Returns whether a ship
    /// was removed.
    pub fn remove_ship(&mut self, name: &str) -> bool {
        match self.ships.iter().position(|s| s.name == name) {
            Some(index) => {
                self.ships.remove(index);
                true
            }
            None => false,
        }
    }
}
