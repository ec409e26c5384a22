use super::sector_map::SectorMap;

/// Live state of one quadrant: entity counts, scan flag and occupancy grid.
/// The galaxy keeps an archived copy of each quadrant as of its last scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quadrant {
    pub klingons: i32,
    pub starbases: i32,
    pub stars: i32,
    pub scanned: bool,
    pub sectors: SectorMap,
}

impl Quadrant {
    /// The 3-digit encoded value: klingons*100 + starbases*10 + stars.
    pub fn encoded(&self) -> i32 {
        self.klingons * 100 + self.starbases * 10 + self.stars
    }

    /// Scan code as shown by the sensors, e.g. "207".
    pub fn code(&self) -> String {
        format!("{}{}{}", self.klingons, self.starbases, self.stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_encoding() {
        let q = Quadrant {
            klingons: 2,
            starbases: 0,
            stars: 7,
            ..Quadrant::default()
        };
        assert_eq!(q.encoded(), 207);
        assert_eq!(q.code(), "207");
    }
}
