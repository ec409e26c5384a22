//! Domain models
//!
//! Positions, entity rosters, quadrants and the galaxy that owns them,
//! plus the player's ship state and the validated navigation inputs.

pub mod constants;
pub mod entity;
pub mod errors;
pub mod galaxy;
pub mod navigation_types;
pub mod player;
pub mod position;
pub mod quadrant;
pub mod sector_map;
