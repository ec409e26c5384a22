use crate::io::OutputWriter;
use crate::models::constants::{Device, LOW_SHIELD_WARNING, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;

const SRS_BORDER: &str = "------------------------------------";
const LRS_BORDER: &str = "    -------------------";

/// Short range sensor scan (SRS command).
///
/// The player's condition is recomputed even when the sensors are out; only
/// the display is lost. A successful scan archives the quadrant.
pub fn short_range_scan(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) -> GameResult<()> {
    let condition = galaxy.update_condition();
    if galaxy.player().is_damaged(Device::ShortRangeSensors) {
        return Err(GameError::SubsystemInoperable(Device::ShortRangeSensors));
    }

    let player = galaxy.player();
    let position = player.position();
    let quadrant = galaxy.current_quadrant();

    output.writeln("");
    if quadrant.klingons > 0 {
        output.writeln("COMBAT AREA      CONDITION RED");
    }
    if player.shield() <= LOW_SHIELD_WARNING {
        output.writeln("   SHIELDS DANGEROUSLY LOW");
    }

    let status: [(&str, String); SECTOR_SIZE] = [
        ("STARDATE:", galaxy.stardate().to_string()),
        ("CONDITION:", condition.label().to_string()),
        ("QUADRANT:", position.quadrant.to_string()),
        ("SECTOR:", position.sector.to_string()),
        ("PHOTON TORPEDOES:", player.torpedoes().to_string()),
        ("TOTAL ENERGY:", player.total_energy().to_string()),
        ("SHIELDS:", player.shield().to_string()),
        (
            "KLINGONS REMAINING:",
            format!("{} [{}]", galaxy.klingons_remaining(), quadrant.klingons),
        ),
    ];

    output.writeln(SRS_BORDER);
    for (row, (label, value)) in status.iter().enumerate() {
        output.writeln(&format!(
            "{}       {:<21}{}",
            quadrant.sectors.render_row(row as i32),
            label,
            value
        ));
    }
    output.writeln(SRS_BORDER);

    galaxy.record_scan(position.quadrant);
    Ok(())
}

/// Long range sensor scan (LRS command).
///
/// Shows the 3x3 block of quadrants around the player as `KBS` codes and
/// archives each one. Quadrants beyond the galaxy edge show `***`.
pub fn long_range_scan(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) -> GameResult<()> {
    if galaxy.player().is_damaged(Device::LongRangeSensors) {
        return Err(GameError::SubsystemInoperable(Device::LongRangeSensors));
    }

    let center = galaxy.player().position().quadrant;
    output.writeln(&format!("LONG RANGE SCAN FOR QUADRANT {}", center));
    output.writeln(LRS_BORDER);
    for row in center.row - 1..=center.row + 1 {
        let mut line = String::from(" :  ");
        for col in center.col - 1..=center.col + 1 {
            let q = QuadrantPosition { row, col };
            if q.in_galaxy() {
                line.push_str(&galaxy.quadrant(q).code());
                galaxy.record_scan(q);
            } else {
                line.push_str("***");
            }
            line.push_str("  :  ");
        }
        output.writeln(line.trim_end());
        output.writeln(LRS_BORDER);
    }
    Ok(())
}
