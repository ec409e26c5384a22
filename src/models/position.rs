use std::fmt;

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};

/// A quadrant within the 8x8 galaxy. 0-based; (0,0) is upper-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadrantPosition {
    pub row: i32,
    pub col: i32,
}

impl QuadrantPosition {
    pub fn in_galaxy(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.row) && (0..GALAXY_SIZE as i32).contains(&self.col)
    }
}

impl fmt::Display for QuadrantPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

/// A sector within a quadrant's 8x8 grid. 0-based; (0,0) is upper-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorPosition {
    pub row: i32,
    pub col: i32,
}

impl SectorPosition {
    pub fn in_quadrant(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.row) && (0..SECTOR_SIZE as i32).contains(&self.col)
    }
}

impl fmt::Display for SectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

/// Full galactic address of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
}

impl Position {
    /// Tombstone carried by destroyed entities.
    pub const DESTROYED: Position = Position {
        quadrant: QuadrantPosition { row: -1, col: -1 },
        sector: SectorPosition { row: -1, col: -1 },
    };

    pub fn new(quadrant_row: i32, quadrant_col: i32, sector_row: i32, sector_col: i32) -> Self {
        Position {
            quadrant: QuadrantPosition {
                row: quadrant_row,
                col: quadrant_col,
            },
            sector: SectorPosition {
                row: sector_row,
                col: sector_col,
            },
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.quadrant.row < 0
    }

    /// Global sector coordinates: quadrant index * 8 + sector index on each axis.
    pub fn global(&self) -> (i32, i32) {
        (
            self.quadrant.row * SECTOR_SIZE as i32 + self.sector.row,
            self.quadrant.col * SECTOR_SIZE as i32 + self.sector.col,
        )
    }

    /// Euclidean distance between global sector coordinates.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let (r1, c1) = self.global();
        let (r2, c2) = other.global();
        let dr = (r1 - r2) as f64;
        let dc = (c1 - c2) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_coordinates_combine_quadrant_and_sector() {
        let pos = Position::new(4, 5, 3, 0);
        assert_eq!(pos.global(), (35, 40));
    }

    #[test]
    fn distance_within_quadrant() {
        let a = Position::new(2, 2, 1, 1);
        let b = Position::new(2, 2, 4, 5);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn distance_spans_quadrants() {
        let a = Position::new(0, 0, 0, 7);
        let b = Position::new(0, 1, 0, 0);
        assert_eq!(a.distance_to(&b), 1.0);
    }

    #[test]
    fn destroyed_sentinel() {
        assert!(Position::DESTROYED.is_destroyed());
        assert!(!Position::new(0, 0, 0, 0).is_destroyed());
    }

    #[test]
    fn display_is_one_based() {
        let pos = Position::new(4, 5, 3, 0);
        assert_eq!(pos.quadrant.to_string(), "5,6");
        assert_eq!(pos.sector.to_string(), "4,1");
    }
}
