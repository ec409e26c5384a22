//! Galaxy model
//!
//! Represents the game universe: an 8x8 grid of quadrants, an archive of the
//! last scan of each, the klingon/starbase/star rosters and the player.

mod generation;

use std::fmt;

use log::debug;

use super::constants::{
    Condition, DefeatReason, SectorContent, GALAXY_SIZE, INITIAL_ENERGY, MISSION_DAYS,
    START_STARDATE,
};
use super::entity::{Entity, EntityKind};
use super::errors::{GameError, GameResult};
use super::player::Player;
use super::position::{Position, QuadrantPosition};
use super::quadrant::Quadrant;

pub use generation::{generate_galaxy, START_POSITION};

/// Top-level game state container.
pub struct Galaxy {
    stardate: i32,
    days_remaining: i32,
    /// Live quadrant state. Internal 0-based: quadrants[row][col].
    quadrants: [[Quadrant; GALAXY_SIZE]; GALAXY_SIZE],
    /// Copy of each quadrant as of its last scan.
    archive: [[Quadrant; GALAXY_SIZE]; GALAXY_SIZE],
    klingons: Vec<Entity>,
    starbases: Vec<Entity>,
    stars: Vec<Entity>,
    klingons_remaining: i32,
    starbases_remaining: i32,
    initial_klingons: i32,
    player: Player,
    mission_end: Option<DefeatReason>,
}

impl Galaxy {
    /// An empty galaxy with the player placed at `player_position`.
    pub fn new(player_position: Position) -> Self {
        let mut galaxy = Galaxy {
            stardate: START_STARDATE,
            days_remaining: MISSION_DAYS,
            quadrants: [[Quadrant::default(); GALAXY_SIZE]; GALAXY_SIZE],
            archive: [[Quadrant::default(); GALAXY_SIZE]; GALAXY_SIZE],
            klingons: Vec::new(),
            starbases: Vec::new(),
            stars: Vec::new(),
            klingons_remaining: 0,
            starbases_remaining: 0,
            initial_klingons: 0,
            player: Player::new(player_position),
            mission_end: None,
        };
        galaxy
            .quadrant_mut(player_position.quadrant)
            .sectors
            .set(player_position.sector, SectorContent::Player);
        galaxy
    }

    // ========== Accessor Methods ==========

    pub fn stardate(&self) -> i32 {
        self.stardate
    }

    pub fn days_remaining(&self) -> i32 {
        self.days_remaining
    }

    /// Stardates elapsed since the mission began.
    pub fn elapsed(&self) -> i32 {
        self.stardate - START_STARDATE
    }

    pub fn klingons_remaining(&self) -> i32 {
        self.klingons_remaining
    }

    pub fn initial_klingons(&self) -> i32 {
        self.initial_klingons
    }

    pub fn starbases_remaining(&self) -> i32 {
        self.starbases_remaining
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn quadrant(&self, q: QuadrantPosition) -> &Quadrant {
        &self.quadrants[q.row as usize][q.col as usize]
    }

    fn quadrant_mut(&mut self, q: QuadrantPosition) -> &mut Quadrant {
        &mut self.quadrants[q.row as usize][q.col as usize]
    }

    /// The quadrant the player is in.
    pub fn current_quadrant(&self) -> &Quadrant {
        self.quadrant(self.player.position().quadrant)
    }

    /// Last archived scan of a quadrant; `scanned` is false if never scanned.
    pub fn archive(&self, q: QuadrantPosition) -> &Quadrant {
        &self.archive[q.row as usize][q.col as usize]
    }

    pub fn roster(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Klingon => &self.klingons,
            EntityKind::Starbase => &self.starbases,
            EntityKind::Star => &self.stars,
        }
    }

    pub fn klingon(&self, index: usize) -> Option<&Entity> {
        self.klingons.get(index)
    }

    pub fn klingon_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.klingons.get_mut(index)
    }

    pub fn mission_end(&self) -> Option<DefeatReason> {
        self.mission_end
    }

    pub fn is_over(&self) -> bool {
        self.mission_end.is_some()
    }

    // Test-only setters
    #[cfg(test)]
    pub fn set_days_remaining(&mut self, days: i32) {
        self.days_remaining = days;
    }

    // ========== End Accessor Methods ==========

    // ========== Atomic Update Methods ==========

    /// Put an entity on an empty in-bounds sector and count it.
    /// Returns its roster index.
    pub fn place(&mut self, kind: EntityKind, position: Position, energy: i32) -> GameResult<usize> {
        if !position.quadrant.in_galaxy() || !position.sector.in_quadrant() {
            return Err(GameError::InputRejected(format!(
                "POSITION {:?} IS OUTSIDE THE GALAXY",
                position
            )));
        }
        if !self.is_vacant(position) {
            return Err(GameError::InputRejected(format!(
                "SECTOR {} OF QUADRANT {} IS OCCUPIED",
                position.sector, position.quadrant
            )));
        }
        Ok(self.insert(kind, position, energy))
    }

    pub fn place_klingon(&mut self, position: Position, energy: i32) -> GameResult<usize> {
        self.place(EntityKind::Klingon, position, energy)
    }

    pub fn place_starbase(&mut self, position: Position, energy: i32) -> GameResult<usize> {
        self.place(EntityKind::Starbase, position, energy)
    }

    pub fn place_star(&mut self, position: Position) -> GameResult<usize> {
        self.place(EntityKind::Star, position, 0)
    }

    /// Unchecked placement; callers guarantee a vacant in-bounds sector.
    fn insert(&mut self, kind: EntityKind, position: Position, energy: i32) -> usize {
        let entity = Entity::new(energy, position);
        let quadrant = self.quadrant_mut(position.quadrant);
        match kind {
            EntityKind::Klingon => {
                quadrant.klingons += 1;
                quadrant.sectors.set(position.sector, SectorContent::Klingon);
                self.klingons_remaining += 1;
                self.initial_klingons += 1;
                self.klingons.push(entity);
                self.klingons.len() - 1
            }
            EntityKind::Starbase => {
                quadrant.starbases += 1;
                quadrant.sectors.set(position.sector, SectorContent::Starbase);
                self.starbases_remaining += 1;
                self.starbases.push(entity);
                self.starbases.len() - 1
            }
            EntityKind::Star => {
                quadrant.stars += 1;
                quadrant.sectors.set(position.sector, SectorContent::Star);
                self.stars.push(entity);
                self.stars.len() - 1
            }
        }
    }

    pub fn is_vacant(&self, position: Position) -> bool {
        self.quadrant(position.quadrant).sectors.is_empty(position.sector)
    }

    /// Atomically destroy a klingon: clear its cell, decrement the quadrant and
    /// global counts, tombstone its roster slot. Returns false if already gone.
    pub fn destroy_klingon(&mut self, index: usize) -> bool {
        self.destroy(EntityKind::Klingon, index)
    }

    /// Atomically destroy a starbase. Returns false if already gone.
    pub fn destroy_starbase(&mut self, index: usize) -> bool {
        self.destroy(EntityKind::Starbase, index)
    }

    fn destroy(&mut self, kind: EntityKind, index: usize) -> bool {
        let roster = match kind {
            EntityKind::Klingon => &mut self.klingons,
            EntityKind::Starbase => &mut self.starbases,
            EntityKind::Star => return false,
        };
        let Some(entity) = roster.get_mut(index) else {
            return false;
        };
        if !entity.is_present() {
            return false;
        }
        let position = entity.position;
        entity.destroy();

        let quadrant = self.quadrant_mut(position.quadrant);
        quadrant.sectors.set(position.sector, SectorContent::Empty);
        match kind {
            EntityKind::Klingon => {
                quadrant.klingons -= 1;
                self.klingons_remaining -= 1;
            }
            _ => {
                quadrant.starbases -= 1;
                self.starbases_remaining -= 1;
            }
        }
        debug!(
            "{:?} #{} destroyed at quadrant {} sector {}",
            kind, index, position.quadrant, position.sector
        );
        true
    }

    /// Move the player marker on the grids and update the player's position.
    pub fn relocate_player(&mut self, position: Position) {
        let old = self.player.position();
        let old_quadrant = self.quadrant_mut(old.quadrant);
        if old_quadrant.sectors.get(old.sector) == SectorContent::Player {
            old_quadrant.sectors.set(old.sector, SectorContent::Empty);
        }
        self.quadrant_mut(position.quadrant)
            .sectors
            .set(position.sector, SectorContent::Player);
        self.player.move_to(position);
        if old.quadrant != position.quadrant {
            debug!("entered quadrant {}", position.quadrant);
        }
    }

    /// Mark a quadrant scanned and copy it into the archive.
    pub fn record_scan(&mut self, q: QuadrantPosition) {
        let quadrant = self.quadrant_mut(q);
        quadrant.scanned = true;
        let snapshot = *quadrant;
        self.archive[q.row as usize][q.col as usize] = snapshot;
    }

    /// One stardate passes; one day of the budget is used.
    pub fn advance_day(&mut self) {
        self.stardate += 1;
        self.days_remaining -= 1;
    }

    /// Record why the mission ended. The first reason recorded wins.
    pub fn end_mission(&mut self, reason: DefeatReason) {
        if self.mission_end.is_none() {
            debug!("mission ended: {:?}", reason);
            self.mission_end = Some(reason);
        }
    }

    // ========== End Atomic Update Methods ==========

    /// Condition code for the player's current quadrant.
    pub fn evaluate_condition(&self) -> Condition {
        let quadrant = self.current_quadrant();
        if quadrant.starbases > 0 {
            Condition::Docked
        } else if quadrant.klingons > 0 {
            Condition::Red
        } else if (self.player.total_energy() as f64) < INITIAL_ENERGY as f64 * 0.1 {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    /// Recompute and store the player's condition.
    pub fn update_condition(&mut self) -> Condition {
        let condition = self.evaluate_condition();
        self.player.set_condition(condition);
        condition
    }

    pub fn all_klingons_destroyed(&self) -> bool {
        self.klingons_remaining <= 0
    }

    pub fn is_time_expired(&self) -> bool {
        self.days_remaining <= 0
    }

    /// Efficiency rating: initial klingons per elapsed stardate, times 1000.
    pub fn efficiency_rating(&self) -> i32 {
        let elapsed = self.elapsed().max(1);
        ((self.initial_klingons as f64 / elapsed as f64) * 1000.0) as i32
    }
}

impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.stardate)
            .field("days_remaining", &self.days_remaining)
            .field("klingons_remaining", &self.klingons_remaining)
            .field("starbases_remaining", &self.starbases_remaining)
            .field("player", &self.player.position())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Position {
        Position::new(4, 5, 3, 0)
    }

    #[test]
    fn new_galaxy_places_only_the_player() {
        let galaxy = Galaxy::new(start());
        assert_eq!(galaxy.stardate(), START_STARDATE);
        assert_eq!(galaxy.days_remaining(), MISSION_DAYS);
        assert_eq!(galaxy.klingons_remaining(), 0);
        let q = galaxy.current_quadrant();
        assert_eq!(q.sectors.get(start().sector), SectorContent::Player);
        assert_eq!(q.encoded(), 0);
    }

    #[test]
    fn place_counts_entities() {
        let mut galaxy = Galaxy::new(start());
        galaxy.place_klingon(Position::new(4, 5, 0, 0), 200).unwrap();
        galaxy.place_starbase(Position::new(1, 1, 2, 2), 3000).unwrap();
        galaxy.place_star(Position::new(4, 5, 5, 5)).unwrap();

        assert_eq!(galaxy.klingons_remaining(), 1);
        assert_eq!(galaxy.initial_klingons(), 1);
        assert_eq!(galaxy.starbases_remaining(), 1);
        assert_eq!(galaxy.current_quadrant().code(), "101");
        assert_eq!(
            galaxy.quadrant(QuadrantPosition { row: 1, col: 1 }).starbases,
            1
        );
    }

    #[test]
    fn place_rejects_occupied_sector() {
        let mut galaxy = Galaxy::new(start());
        let err = galaxy.place_star(start()).unwrap_err();
        assert!(matches!(err, GameError::InputRejected(_)));
    }

    #[test]
    fn place_rejects_out_of_bounds() {
        let mut galaxy = Galaxy::new(start());
        assert!(galaxy.place_star(Position::new(8, 0, 0, 0)).is_err());
        assert!(galaxy.place_star(Position::new(0, 0, 0, -1)).is_err());
    }

    #[test]
    fn destroy_klingon_updates_every_tracking_location() {
        let mut galaxy = Galaxy::new(start());
        let pos = Position::new(4, 5, 0, 0);
        let idx = galaxy.place_klingon(pos, 200).unwrap();

        assert!(galaxy.destroy_klingon(idx));
        assert_eq!(galaxy.klingons_remaining(), 0);
        assert_eq!(galaxy.current_quadrant().klingons, 0);
        assert!(galaxy.is_vacant(pos));
        assert!(!galaxy.klingon(idx).unwrap().is_present());
        assert_eq!(galaxy.initial_klingons(), 1);
    }

    #[test]
    fn destroy_twice_is_a_no_op() {
        let mut galaxy = Galaxy::new(start());
        let idx = galaxy.place_klingon(Position::new(4, 5, 0, 0), 200).unwrap();
        assert!(galaxy.destroy_klingon(idx));
        assert!(!galaxy.destroy_klingon(idx));
        assert_eq!(galaxy.klingons_remaining(), 0);
    }

    #[test]
    fn destroy_starbase_decrements_counts() {
        let mut galaxy = Galaxy::new(start());
        let idx = galaxy.place_starbase(Position::new(4, 5, 7, 7), 3000).unwrap();
        assert!(galaxy.destroy_starbase(idx));
        assert_eq!(galaxy.starbases_remaining(), 0);
        assert_eq!(galaxy.current_quadrant().starbases, 0);
    }

    #[test]
    fn relocate_player_moves_marker_across_quadrants() {
        let mut galaxy = Galaxy::new(start());
        let target = Position::new(4, 6, 3, 0);
        galaxy.relocate_player(target);

        assert_eq!(galaxy.player().position(), target);
        assert!(galaxy.is_vacant(start()));
        assert_eq!(
            galaxy.quadrant(target.quadrant).sectors.get(target.sector),
            SectorContent::Player
        );
    }

    #[test]
    fn record_scan_refreshes_archive() {
        let mut galaxy = Galaxy::new(start());
        let q = start().quadrant;
        assert!(!galaxy.archive(q).scanned);

        galaxy.place_star(Position::new(4, 5, 1, 1)).unwrap();
        galaxy.record_scan(q);
        assert!(galaxy.archive(q).scanned);
        assert_eq!(galaxy.archive(q).stars, 1);

        // Archive is a snapshot until the next scan.
        galaxy.place_star(Position::new(4, 5, 2, 2)).unwrap();
        assert_eq!(galaxy.archive(q).stars, 1);
    }

    #[test]
    fn condition_priority() {
        let mut galaxy = Galaxy::new(start());
        assert_eq!(galaxy.evaluate_condition(), Condition::Green);

        galaxy.player_mut().set_energy(INITIAL_ENERGY / 10 - 1);
        assert_eq!(galaxy.evaluate_condition(), Condition::Yellow);

        galaxy.place_klingon(Position::new(4, 5, 0, 0), 200).unwrap();
        assert_eq!(galaxy.evaluate_condition(), Condition::Red);

        galaxy.place_starbase(Position::new(4, 5, 7, 7), 3000).unwrap();
        assert_eq!(galaxy.update_condition(), Condition::Docked);
        assert_eq!(galaxy.player().condition(), Condition::Docked);
    }

    #[test]
    fn yellow_counts_shield_toward_total() {
        let mut galaxy = Galaxy::new(start());
        galaxy.player_mut().set_energy(100);
        galaxy.player_mut().set_shield(250);
        assert_eq!(galaxy.evaluate_condition(), Condition::Green);
    }

    #[test]
    fn first_mission_end_reason_wins() {
        let mut galaxy = Galaxy::new(start());
        galaxy.end_mission(DefeatReason::ShipDestroyed);
        galaxy.end_mission(DefeatReason::Resigned);
        assert_eq!(galaxy.mission_end(), Some(DefeatReason::ShipDestroyed));
    }

    #[test]
    fn advance_day_moves_both_clocks() {
        let mut galaxy = Galaxy::new(start());
        galaxy.advance_day();
        assert_eq!(galaxy.stardate(), START_STARDATE + 1);
        assert_eq!(galaxy.days_remaining(), MISSION_DAYS - 1);
        galaxy.set_days_remaining(1);
        galaxy.advance_day();
        assert!(galaxy.is_time_expired());
    }

    #[test]
    fn efficiency_rating_guards_zero_elapsed() {
        let mut galaxy = Galaxy::new(start());
        galaxy.place_klingon(Position::new(0, 0, 0, 0), 200).unwrap();
        galaxy.place_klingon(Position::new(0, 0, 0, 1), 200).unwrap();
        assert_eq!(galaxy.efficiency_rating(), 2000);
        for _ in 0..4 {
            galaxy.advance_day();
        }
        assert_eq!(galaxy.efficiency_rating(), 500);
    }
}
