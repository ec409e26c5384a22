//! Game state machine
//!
//! Owns the galaxy and the session's random stream, and decides when a
//! mission is over. A new mission can be started from the same stream.

use log::info;

use crate::models::galaxy::{generate_galaxy, Galaxy};
use crate::random::{RandomSource, SeededRandom};

pub use crate::models::constants::DefeatReason;

/// Core game engine that manages game state and victory/defeat conditions
pub struct GameEngine {
    galaxy: Galaxy,
    rng: Box<dyn RandomSource>,
    state: GameState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Victory { rating: i32 },
    Defeat { reason: DefeatReason },
}

impl GameEngine {
    /// Creates a new game engine with a procedurally generated galaxy
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the session's random stream
    ///
    /// # Returns
    ///
    /// A new GameEngine in the Playing state with a freshly generated galaxy
    pub fn new(seed: u64) -> Self {
        Self::with_random(Box::new(SeededRandom::new(seed)))
    }

    /// Generate the galaxy from `rng` and keep using it for the session.
    pub fn with_random(mut rng: Box<dyn RandomSource>) -> Self {
        let galaxy = generate_galaxy(rng.as_mut());
        Self::from_galaxy(galaxy, rng)
    }

    /// Start from a prepared galaxy.
    pub fn from_galaxy(galaxy: Galaxy, rng: Box<dyn RandomSource>) -> Self {
        Self {
            galaxy,
            rng,
            state: GameState::Playing,
        }
    }

    /// Returns an immutable reference to the galaxy
    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Returns a mutable reference to the galaxy
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    /// The galaxy and the random stream together, for commands that need both.
    pub fn parts_mut(&mut self) -> (&mut Galaxy, &mut dyn RandomSource) {
        (&mut self.galaxy, self.rng.as_mut())
    }

    /// Returns the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Victory or Defeat)
    /// * `None` if the game is still in progress
    ///
    /// # Victory Conditions
    ///
    /// The player wins when all Klingon battle cruisers are destroyed.
    /// The efficiency rating is the initial klingon count per elapsed
    /// stardate, times 1000.
    ///
    /// # Defeat Conditions
    ///
    /// The player loses if:
    /// - The Enterprise is destroyed (shields fall below 0)
    /// - The last starbase is destroyed by the Enterprise
    /// - The captain resigns
    /// - Time expires before all Klingons are destroyed
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            return Some(self.state.clone());
        }

        // Victory: all Klingons destroyed
        if self.galaxy.all_klingons_destroyed() {
            let rating = self.galaxy.efficiency_rating();
            info!("victory at stardate {}, rating {}", self.galaxy.stardate(), rating);
            self.state = GameState::Victory { rating };
            return Some(self.state.clone());
        }

        // Defeat: time expired
        if self.galaxy.is_time_expired() {
            self.galaxy.end_mission(DefeatReason::TimeExpired);
        }

        // Defeat: whatever ended the mission first
        if let Some(reason) = self.galaxy.mission_end() {
            info!("defeat at stardate {}: {:?}", self.galaxy.stardate(), reason);
            self.state = GameState::Defeat { reason };
            return Some(self.state.clone());
        }

        None
    }

    /// Record the captain's resignation.
    pub fn resign(&mut self) {
        self.galaxy.end_mission(DefeatReason::Resigned);
    }

    /// Begin a new mission in a freshly generated galaxy, continuing the
    /// same random stream.
    pub fn restart(&mut self) {
        self.galaxy = generate_galaxy(self.rng.as_mut());
        self.state = GameState::Playing;
        info!("new mission started");
    }
}
