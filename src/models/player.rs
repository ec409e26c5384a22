use super::constants::{Condition, Device, INITIAL_ENERGY, INITIAL_SHIELDS, INITIAL_TORPEDOES, NUM_DEVICES};
use super::position::Position;

/// The player's starship.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    energy: i32,
    shield: i32,
    torpedoes: i32,
    position: Position,
    /// State of repair for each of the 8 devices.
    /// 0 = operational, negative = damaged.
    damage: [f64; NUM_DEVICES],
    condition: Condition,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Player {
            energy: INITIAL_ENERGY,
            shield: INITIAL_SHIELDS,
            torpedoes: INITIAL_TORPEDOES,
            position,
            damage: [0.0; NUM_DEVICES],
            condition: Condition::Green,
        }
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn shield(&self) -> i32 {
        self.shield
    }

    /// Energy plus shield.
    pub fn total_energy(&self) -> i32 {
        self.energy + self.shield
    }

    pub fn torpedoes(&self) -> i32 {
        self.torpedoes
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn damage(&self) -> &[f64; NUM_DEVICES] {
        &self.damage
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn is_damaged(&self, device: Device) -> bool {
        self.damage[device as usize] < 0.0
    }

    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy;
    }

    pub fn set_shield(&mut self, shield: i32) {
        self.shield = shield;
    }

    pub fn set_torpedoes(&mut self, torpedoes: i32) {
        self.torpedoes = torpedoes;
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    pub fn set_damage(&mut self, device: Device, value: f64) {
        self.damage[device as usize] = value;
    }

    /// Only the galaxy moves the ship, so the grid stays in sync.
    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub fn subtract_energy(&mut self, amount: i32) {
        self.energy -= amount;
    }

    pub fn subtract_shield(&mut self, amount: i32) {
        self.shield -= amount;
    }

    /// Spend one torpedo. The count never drops below zero.
    pub fn consume_torpedo(&mut self) {
        self.torpedoes = (self.torpedoes - 1).max(0);
    }

    /// Lower a device's state of repair by `amount`.
    pub fn degrade_device(&mut self, device: Device, amount: f64) {
        self.damage[device as usize] -= amount;
    }

    /// Full overhaul: every device back to 0.
    pub fn repair_all(&mut self) {
        self.damage = [0.0; NUM_DEVICES];
    }

    /// Set the shield to `units`, drawing the difference from main energy.
    /// Returns false, leaving both pools untouched, when the total cannot cover it.
    pub fn transfer_to_shield(&mut self, units: i32) -> bool {
        let total = self.total_energy();
        if units > total {
            return false;
        }
        self.energy = total - units;
        self.shield = units;
        true
    }
}
