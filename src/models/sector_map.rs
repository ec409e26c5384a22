use super::constants::{SectorContent, SECTOR_SIZE};
use super::position::SectorPosition;

/// The 8x8 occupancy grid of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorMap {
    /// Internal 0-based indexing: grid[row][col].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
        }
    }

    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        self.grid[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[pos.row as usize][pos.col as usize] = content;
    }

    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    /// Render a row of the sector grid as a 24-character string.
    pub fn render_row(&self, row: i32) -> String {
        (0..SECTOR_SIZE as i32)
            .map(|col| self.get(SectorPosition { row, col }).symbol())
            .collect()
    }
}
