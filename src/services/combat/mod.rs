//! Combat system
//!
//! Phaser fire, torpedo launch, shield control and klingon return fire.

mod phasers;
mod retaliation;
mod shields;
mod torpedoes;

pub use phasers::{discharge_phasers, fire_phasers};
pub use retaliation::klingons_fire;
pub use shields::{set_shields, shield_control};
pub use torpedoes::{fire_torpedoes, launch_torpedo, TorpedoOutcome};
