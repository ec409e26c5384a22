use log::info;

use crate::io::OutputWriter;
use crate::models::galaxy::Galaxy;
use crate::random::RandomSource;

/// Odds of a full overhaul after an accepted warp move: one in this many.
const REPAIR_ODDS: u32 = 6;

/// Repair roll after a warp move. On success every device is reset to fully
/// operational. Consumes exactly one draw. Returns true if repairs ran.
pub fn repair_roll(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    output: &mut dyn OutputWriter,
) -> bool {
    if rng.below(REPAIR_ODDS) != 0 {
        return false;
    }
    galaxy.player_mut().repair_all();
    info!("damage control completed repairs at stardate {}", galaxy.stardate());
    output.writeln("REPAIRING IN PROGRESS");
    true
}
