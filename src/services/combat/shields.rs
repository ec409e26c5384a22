use log::debug;

use crate::io::{read_value, InputReader, OutputWriter};
use crate::models::constants::Device;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;

/// Sets the shield level (SHE command)
///
/// Shows the total energy available and prompts for the new shield level.
/// The shield is set to exactly that many units, the rest of the total
/// stays in main energy.
///
/// # Returns
///
/// * `Ok(())` when the shields were set or left unchanged
/// * `Err(GameError::SubsystemInoperable)` if shield control is damaged
/// * `Err(GameError::ResourceExhausted)` if the request exceeds the total
pub fn shield_control(
    galaxy: &mut Galaxy,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    if galaxy.player().is_damaged(Device::ShieldControl) {
        return Err(GameError::SubsystemInoperable(Device::ShieldControl));
    }

    output.writeln(&format!(
        "ENERGY AVAILABLE = {}",
        galaxy.player().total_energy()
    ));
    let units: i32 = read_value(io, "     NUMBER OF UNITS TO SHIELDS?")?;
    set_shields(galaxy, units, output)
}

/// Move the shield to `units`, drawing from or returning to main energy.
pub fn set_shields(galaxy: &mut Galaxy, units: i32, output: &mut dyn OutputWriter) -> GameResult<()> {
    let player = galaxy.player_mut();
    if units == player.shield() || units < 1 {
        output.writeln("");
        output.writeln("<SHIELDS UNCHANGED>");
        return Ok(());
    }
    if !player.transfer_to_shield(units) {
        return Err(GameError::ResourceExhausted(
            "SHIELD CONTROL REPORTS : \n 'THIS IS NOT THE FEDERATION TREASURY.'".to_string(),
        ));
    }

    debug!("shields set to {}, energy now {}", player.shield(), player.energy());
    output.writeln("DEFLECTOR CONTROL ROOM REPORT : ");
    output.writeln(&format!(
        "'SHIELDS NOW AT {} UNITS PER YOUR COMMAND'",
        player.shield()
    ));
    output.writeln("");
    Ok(())
}
