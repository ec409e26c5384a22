use log::debug;

use crate::models::constants::{
    GALAXY_SIZE, KLINGON_MAX_ENERGY, KLINGON_MIN_ENERGY, MAX_KLINGONS_PER_QUADRANT, NUM_KLINGONS,
    NUM_STARBASES, NUM_STARS, SECTOR_SIZE, STARBASE_ENERGY,
};
use crate::models::entity::EntityKind;
use crate::models::position::{Position, QuadrantPosition, SectorPosition};
use crate::random::RandomSource;

use super::Galaxy;

/// Where every mission starts: quadrant (4,5), sector (3,0), 0-based.
pub const START_POSITION: Position = Position {
    quadrant: QuadrantPosition { row: 4, col: 5 },
    sector: SectorPosition { row: 3, col: 0 },
};

fn random_quadrant(rng: &mut dyn RandomSource) -> QuadrantPosition {
    QuadrantPosition {
        row: rng.below(GALAXY_SIZE as u32) as i32,
        col: rng.below(GALAXY_SIZE as u32) as i32,
    }
}

fn random_sector(rng: &mut dyn RandomSource) -> SectorPosition {
    SectorPosition {
        row: rng.below(SECTOR_SIZE as u32) as i32,
        col: rng.below(SECTOR_SIZE as u32) as i32,
    }
}

/// Draw a quadrant other than the starting one, then a sector in it.
fn random_position_away_from_start(rng: &mut dyn RandomSource) -> Position {
    let quadrant = loop {
        let q = random_quadrant(rng);
        if q != START_POSITION.quadrant {
            break q;
        }
    };
    Position {
        quadrant,
        sector: random_sector(rng),
    }
}

/// Build a fresh galaxy: starbases first, then klingons, then stars.
///
/// - Starbases never share a quadrant and never sit in the starting quadrant.
/// - Exactly one klingon starts in the player's quadrant; the rest are spread
///   elsewhere, at most 3 per quadrant and never alongside a starbase.
/// - Stars fill random empty sectors anywhere.
pub fn generate_galaxy(rng: &mut dyn RandomSource) -> Galaxy {
    let mut galaxy = Galaxy::new(START_POSITION);

    // Phase 1: starbases
    let mut placed = 0;
    while placed < NUM_STARBASES {
        let pos = random_position_away_from_start(rng);
        if galaxy.is_vacant(pos) && galaxy.quadrant(pos.quadrant).starbases == 0 {
            galaxy.insert(EntityKind::Starbase, pos, STARBASE_ENERGY);
            placed += 1;
        }
    }

    // Phase 2: klingons
    let mut placed = 0;
    while placed < NUM_KLINGONS {
        let pos = if placed == 0 {
            Position {
                quadrant: START_POSITION.quadrant,
                sector: random_sector(rng),
            }
        } else {
            random_position_away_from_start(rng)
        };
        let quadrant = galaxy.quadrant(pos.quadrant);
        if galaxy.is_vacant(pos)
            && quadrant.klingons < MAX_KLINGONS_PER_QUADRANT
            && quadrant.starbases == 0
        {
            let energy = rng.between(KLINGON_MIN_ENERGY, KLINGON_MAX_ENERGY) as i32;
            galaxy.insert(EntityKind::Klingon, pos, energy);
            placed += 1;
        }
    }

    // Phase 3: stars
    let mut placed = 0;
    while placed < NUM_STARS {
        let pos = Position {
            quadrant: random_quadrant(rng),
            sector: random_sector(rng),
        };
        if galaxy.is_vacant(pos) {
            galaxy.insert(EntityKind::Star, pos, 0);
            placed += 1;
        }
    }

    debug!(
        "generated galaxy: {} klingons, {} starbases, {} stars",
        galaxy.klingons_remaining(),
        galaxy.starbases_remaining(),
        NUM_STARS
    );
    galaxy
}
