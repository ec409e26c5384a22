use log::debug;

use crate::io::{read_value, InputReader, OutputWriter};
use crate::models::constants::Device;
use crate::models::entity::EntityKind;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::random::RandomSource;
use crate::services::proximity;
use crate::ui::presenters::CombatPresenter;

use super::retaliation::klingons_fire;

const NO_ENEMY_SHIPS: &str = "SCIENCE OFFICER SPOCK REPORTS  'SENSORS SHOW NO ENEMY SHIPS\n                              IN THIS QUADRANT'";

/// Phasers must be working and there must be something to shoot at.
fn check_phaser_readiness(galaxy: &Galaxy) -> GameResult<()> {
    if galaxy.player().is_damaged(Device::PhaserControl) {
        return Err(GameError::SubsystemInoperable(Device::PhaserControl));
    }
    if galaxy.current_quadrant().klingons <= 0 {
        return Err(GameError::InputRejected(NO_ENEMY_SHIPS.to_string()));
    }
    Ok(())
}

/// Prompt until a usable amount is entered. `None` means the player cancelled.
fn read_phaser_units(
    available: i32,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<Option<i32>> {
    loop {
        let units: i32 = match read_value(io, "NUMBER OF UNITS TO FIRE?") {
            Ok(units) => units,
            Err(GameError::ParseError(_)) => {
                output.writeln("?REENTER");
                continue;
            }
            Err(e) => return Err(e),
        };
        if units > available {
            output.writeln(&format!("ENERGY AVAILABLE = {}", available));
        } else if units > 0 {
            return Ok(Some(units));
        } else {
            return Ok(None);
        }
    }
}

/// Fires phasers at every klingon in the quadrant (PHA command)
///
/// Locks on, prompts for the number of energy units to fire and splits them
/// evenly across the klingons present. Malformed input re-prompts, too much
/// energy re-prompts with the amount available, and zero or less cancels.
///
/// # Arguments
///
/// * `galaxy` - The game galaxy state
/// * `rng` - Random source for hit jitter and retaliation
/// * `io` - Input reader for getting the number of units
/// * `output` - Output writer for the combat report
///
/// # Returns
///
/// * `Ok(())` after firing or cancelling
/// * `Err(GameError::SubsystemInoperable)` if phaser control is damaged
/// * `Err(GameError::InputRejected)` if no klingons are in the quadrant
pub fn fire_phasers(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    check_phaser_readiness(galaxy)?;

    // A damaged computer only costs the crew confidence.
    if galaxy.player().is_damaged(Device::LibraryComputer) {
        output.writeln("COMPUTER FAILURE HAMPERS ACCURACY");
    }

    let available = galaxy.player().energy();
    output.writeln(&format!(
        "PHASERS LOCKED ON TARGET;  ENERGY AVAILABLE = {} UNITS",
        available
    ));

    match read_phaser_units(available, io, output)? {
        Some(units) => discharge_phasers(galaxy, rng, units, output),
        None => Ok(()),
    }
}

/// Spend `units` of energy on phaser fire and resolve every hit.
///
/// Each klingon, nearest first, takes `floor(share / distance * (u + 2))`
/// where `share` is `units` divided evenly. A hit that does not exceed 15% of
/// the target's energy does nothing. Survivors return fire.
/// `units <= 0` is a no-op.
pub fn discharge_phasers(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    units: i32,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    if units <= 0 {
        return Ok(());
    }
    check_phaser_readiness(galaxy)?;
    if units > galaxy.player().energy() {
        return Err(GameError::ResourceExhausted(format!(
            "ENERGY AVAILABLE = {}",
            galaxy.player().energy()
        )));
    }

    // Phase 1: energy is spent whatever happens next
    galaxy.player_mut().subtract_energy(units);

    // Phase 2: resolve hits in proximity order
    let targets = proximity::nearby(galaxy, EntityKind::Klingon);
    let share = units / targets.len() as i32;
    let player_pos = galaxy.player().position();
    for index in targets {
        let Some(klingon) = galaxy.klingon_mut(index) else {
            continue;
        };
        let distance = player_pos.distance_to(&klingon.position);
        let hit = ((share as f64 / distance) * (rng.uniform() + 2.0)).floor() as i32;
        let sector = klingon.position.sector;

        if (hit as f64) <= 0.15 * klingon.energy as f64 {
            CombatPresenter::show_no_damage(sector, output);
            continue;
        }

        klingon.energy -= hit;
        let remaining = klingon.energy;
        debug!("phaser hit {} on klingon #{}, {} left", hit, index, remaining);
        CombatPresenter::show_klingon_hit(hit, sector, remaining, output);
        if remaining <= 0 {
            CombatPresenter::show_klingon_destroyed(output);
            galaxy.destroy_klingon(index);
        }
    }

    // Phase 3: survivors retaliate
    if galaxy.current_quadrant().klingons > 0 {
        klingons_fire(galaxy, rng, output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::position::Position;
    use crate::random::ScriptedRandom;

    /// Helper: player at sector (7,7) of quadrant (4,5), one klingon at (0,0).
    fn setup_combat_scenario(klingon_energy: i32) -> (Galaxy, usize) {
        let mut galaxy = Galaxy::new(Position::new(4, 5, 7, 7));
        galaxy.player_mut().set_shield(1000);
        let k = galaxy
            .place_klingon(Position::new(4, 5, 0, 0), klingon_energy)
            .unwrap();
        (galaxy, k)
    }

    #[test]
    fn corner_to_corner_shot_destroys_weak_klingon() {
        let (mut galaxy, k) = setup_combat_scenario(50);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut output = MockOutput::new();

        discharge_phasers(&mut galaxy, &mut rng, 300, &mut output).unwrap();

        // 300 / sqrt(98) * 2 = 60.6
        assert_eq!(galaxy.player().energy(), 2700);
        assert!(output.contains("60 UNIT HIT ON KLINGON AT SECTOR 1,1"));
        assert!(output.contains("*** KLINGON DESTROYED ***"));
        assert!(!galaxy.klingon(k).unwrap().is_present());
        assert_eq!(galaxy.current_quadrant().klingons, 0);
        assert_eq!(galaxy.klingons_remaining(), 0);
        // one jitter draw, no retaliation
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn surviving_klingon_reports_remaining_and_fires_back() {
        let (mut galaxy, k) = setup_combat_scenario(200);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut output = MockOutput::new();

        discharge_phasers(&mut galaxy, &mut rng, 300, &mut output).unwrap();

        // 200 - 60 = 140, then divided by 3 when it fires back
        assert_eq!(galaxy.klingon(k).unwrap().energy, 46);
        assert!(output.contains("(SENSORS SHOW 140 UNITS REMAINING)"));
        assert!(output.contains("UNIT HIT ON ENTERPRISE"));
        assert!(galaxy.player().shield() < 1000);
    }

    #[test]
    fn weak_hit_does_no_damage() {
        let (mut galaxy, k) = setup_combat_scenario(300);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut output = MockOutput::new();

        // 20 / 9.9 * 2 = 4, under 15% of 300
        discharge_phasers(&mut galaxy, &mut rng, 20, &mut output).unwrap();

        assert_eq!(galaxy.player().energy(), 2980);
        assert!(output.contains("SENSORS SHOW NO DAMAGE TO ENEMY AT 1,1"));
        // retaliation divides its energy
        assert_eq!(galaxy.klingon(k).unwrap().energy, 100);
    }

    #[test]
    fn non_positive_units_is_a_no_op() {
        let (mut galaxy, k) = setup_combat_scenario(200);
        let mut rng = ScriptedRandom::constant(0.0);

        discharge_phasers(&mut galaxy, &mut rng, 0, &mut MockOutput::new()).unwrap();
        discharge_phasers(&mut galaxy, &mut rng, -50, &mut MockOutput::new()).unwrap();

        assert_eq!(galaxy.player().energy(), 3000);
        assert_eq!(galaxy.klingon(k).unwrap().energy, 200);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn damaged_phasers_block_without_cost() {
        let (mut galaxy, _) = setup_combat_scenario(200);
        galaxy.player_mut().set_damage(Device::PhaserControl, -1.0);
        let mut rng = ScriptedRandom::constant(0.0);

        let err = discharge_phasers(&mut galaxy, &mut rng, 100, &mut MockOutput::new()).unwrap_err();

        assert_eq!(err.to_string(), "PHASERS INOPERATIVE");
        assert_eq!(galaxy.player().energy(), 3000);
    }

    #[test]
    fn empty_quadrant_is_rejected() {
        let mut galaxy = Galaxy::new(Position::new(4, 5, 7, 7));
        let mut rng = ScriptedRandom::constant(0.0);
        let err = discharge_phasers(&mut galaxy, &mut rng, 100, &mut MockOutput::new()).unwrap_err();
        assert!(err.to_string().contains("SENSORS SHOW NO ENEMY SHIPS"));
    }

    #[test]
    fn energy_is_split_evenly() {
        let mut galaxy = Galaxy::new(Position::new(4, 5, 4, 4));
        galaxy.player_mut().set_shield(1000);
        galaxy.place_klingon(Position::new(4, 5, 4, 6), 300).unwrap();
        galaxy.place_klingon(Position::new(4, 5, 4, 0), 300).unwrap();
        let mut rng = ScriptedRandom::constant(0.0);
        let mut output = MockOutput::new();

        // 200 each: 200 / 2 * 2 = 200 and 200 / 4 * 2 = 100
        discharge_phasers(&mut galaxy, &mut rng, 401, &mut output).unwrap();

        assert!(output.contains("200 UNIT HIT ON KLINGON AT SECTOR 5,7"));
        assert!(output.contains("100 UNIT HIT ON KLINGON AT SECTOR 5,1"));
    }

    #[test]
    fn interactive_prompt_retries_then_fires() {
        let (mut galaxy, _) = setup_combat_scenario(50);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut input = MockInput::new(vec!["lots", "5000", "300"]);
        let mut output = MockOutput::new();

        fire_phasers(&mut galaxy, &mut rng, &mut input, &mut output).unwrap();

        assert!(output.contains("PHASERS LOCKED ON TARGET;  ENERGY AVAILABLE = 3000 UNITS"));
        assert!(output.contains("?REENTER"));
        assert!(output.contains("ENERGY AVAILABLE = 3000\n"));
        assert_eq!(galaxy.player().energy(), 2700);
    }

    #[test]
    fn interactive_prompt_cancels_on_zero() {
        let (mut galaxy, _) = setup_combat_scenario(50);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut input = MockInput::new(vec!["0"]);

        fire_phasers(&mut galaxy, &mut rng, &mut input, &mut MockOutput::new()).unwrap();

        assert_eq!(galaxy.player().energy(), 3000);
    }

    #[test]
    fn damaged_computer_only_warns() {
        let (mut galaxy, _) = setup_combat_scenario(50);
        galaxy.player_mut().set_damage(Device::LibraryComputer, -2.0);
        let mut rng = ScriptedRandom::constant(0.0);
        let mut input = MockInput::new(vec!["300"]);
        let mut output = MockOutput::new();

        fire_phasers(&mut galaxy, &mut rng, &mut input, &mut output).unwrap();

        assert!(output.contains("COMPUTER FAILURE HAMPERS ACCURACY"));
        assert_eq!(galaxy.klingons_remaining(), 0);
    }
}
