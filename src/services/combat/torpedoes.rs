use log::{debug, info};

use crate::io::{read_value, InputReader, OutputWriter};
use crate::models::constants::{
    DefeatReason, Device, SectorContent, TORPEDO_ENERGY_COST, TORPEDO_RANGE,
};
use crate::models::entity::EntityKind;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Course;
use crate::models::position::SectorPosition;
use crate::random::RandomSource;
use crate::services::navigation::{round_half_up, unit_step};
use crate::services::proximity;
use crate::ui::presenters::CombatPresenter;

use super::retaliation::klingons_fire;

/// How a torpedo shot ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorpedoOutcome {
    Missed,
    KlingonDestroyed,
    StarbaseDestroyed,
    Absorbed,
}

/// Check preconditions for firing torpedoes.
/// An empty magazine is reported before damaged tubes.
fn check_torpedo_readiness(galaxy: &Galaxy) -> GameResult<()> {
    if galaxy.player().torpedoes() <= 0 {
        return Err(GameError::ResourceExhausted(
            "ALL PHOTON TORPEDOES EXPENDED".to_string(),
        ));
    }
    if galaxy.player().is_damaged(Device::PhotonTubes) {
        return Err(GameError::SubsystemInoperable(Device::PhotonTubes));
    }
    Ok(())
}

/// Fires a photon torpedo along a course (TOR command)
///
/// Prompts for a course on the 1-9 dial. Values from 9 up to 10 fold back
/// onto 1, so 9.5 fires along 1.5.
///
/// # Returns
///
/// * `Ok(())` after the torpedo has been resolved
/// * `Err(GameError::ResourceExhausted)` if no torpedoes are left
/// * `Err(GameError::SubsystemInoperable)` if the tubes are damaged
/// * `Err(GameError::InputRejected)` for a course off the dial
pub fn fire_torpedoes(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    check_torpedo_readiness(galaxy)?;
    let value: f64 = read_value(io, "PHOTON TORPEDO COURSE (1-9)")?;
    let course = Course::torpedo(value)?;
    launch_torpedo(galaxy, rng, course, output)?;
    Ok(())
}

/// Launch one torpedo along `course` and resolve what it hits.
///
/// Costs 2 energy and 1 torpedo whatever the result. The torpedo flies at
/// most 9 sectors and never leaves the quadrant. Klingons still present
/// afterwards return fire.
pub fn launch_torpedo(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    course: Course,
    output: &mut dyn OutputWriter,
) -> GameResult<TorpedoOutcome> {
    check_torpedo_readiness(galaxy)?;

    galaxy.player_mut().subtract_energy(TORPEDO_ENERGY_COST);
    galaxy.player_mut().consume_torpedo();

    let outcome = fly(galaxy, course, output);
    debug!("torpedo on course {} resolved as {:?}", course, outcome);

    if !galaxy.is_over() && galaxy.current_quadrant().klingons > 0 {
        klingons_fire(galaxy, rng, output);
    }
    Ok(outcome)
}

/// Walk the torpedo track. Targets are captured before the first step.
fn fly(galaxy: &mut Galaxy, course: Course, output: &mut dyn OutputWriter) -> TorpedoOutcome {
    let klingons = proximity::nearby(galaxy, EntityKind::Klingon);
    let starbases = proximity::nearby(galaxy, EntityKind::Starbase);
    let (d_row, d_col) = unit_step(course);
    let start = galaxy.player().position().sector;
    let mut row = start.row as f64;
    let mut col = start.col as f64;

    output.writeln("TORPEDO TRACK :");
    for _ in 0..TORPEDO_RANGE {
        row += d_row;
        col += d_col;
        let sector = SectorPosition {
            row: round_half_up(row),
            col: round_half_up(col),
        };
        if !sector.in_quadrant() {
            output.writeln("TORPEDO MISSED");
            return TorpedoOutcome::Missed;
        }
        output.writeln(&format!("               {}", sector));

        if let Some(index) = find_at(galaxy, EntityKind::Klingon, &klingons, sector) {
            CombatPresenter::show_klingon_destroyed(output);
            galaxy.destroy_klingon(index);
            return TorpedoOutcome::KlingonDestroyed;
        }

        if let Some(index) = find_at(galaxy, EntityKind::Starbase, &starbases, sector) {
            output.writeln("*** STARBASE DESTROYED ***");
            galaxy.destroy_starbase(index);
            if galaxy.starbases_remaining() == 2 {
                output.writeln("STARFLEET COMMAND REVIEWING YOUR RECORD TO CONSIDER");
                output.writeln("COURT MARTIAL!");
            } else {
                output.writeln("THAT DOES IT, CAPTAIN!! YOU ARE HEREBY RELIEVED OF COMMAND");
                output.writeln("AND SENTENCED TO 99 STARDATES AT HARD LABOR ON CYGNUS 12!!");
                output.writeln("");
                info!("starbase destroyed by friendly fire, command relieved");
                galaxy.end_mission(DefeatReason::StarbasesDestroyed);
            }
            return TorpedoOutcome::StarbaseDestroyed;
        }

        if galaxy.current_quadrant().sectors.get(sector) == SectorContent::Star {
            output.writeln(&format!("STAR AT {} ABSORBED TORPEDO ENERGY.", sector));
            return TorpedoOutcome::Absorbed;
        }
    }
    output.writeln("TORPEDO MISSED");
    TorpedoOutcome::Missed
}

/// First live entity from `candidates` sitting on `sector`.
fn find_at(
    galaxy: &Galaxy,
    kind: EntityKind,
    candidates: &[usize],
    sector: SectorPosition,
) -> Option<usize> {
    let roster = galaxy.roster(kind);
    candidates
        .iter()
        .copied()
        .find(|&i| roster[i].is_present() && roster[i].position.sector == sector)
}
