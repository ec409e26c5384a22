use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Klingon,
    Starbase,
    Star,
}

/// A klingon, starbase or star. Roster slots are never removed;
/// destruction leaves a tombstone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub energy: i32,
    pub position: Position,
}

impl Entity {
    pub fn new(energy: i32, position: Position) -> Self {
        Entity { energy, position }
    }

    /// Still on the board. Stars carry zero energy but are never destroyed.
    pub fn is_present(&self) -> bool {
        !self.position.is_destroyed()
    }

    pub fn destroy(&mut self) {
        self.energy = -1;
        self.position = Position::DESTROYED;
    }
}
