//! Navigation system
//!
//! Course geometry, warp travel across sectors and quadrants, and the
//! damage control repair roll that follows a move.

mod course;
mod damage;
mod movement;

pub use course::{bearing, round_half_up, sector_bearing, unit_step, Bearing};
pub use movement::{engage_warp, navigate, NavigationOutcome};
