use log::debug;

use crate::io::{read_value, InputReader, OutputWriter};
use crate::models::constants::{Device, DAMAGED_MAX_WARP, MAX_WARP, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::{Course, WarpFactor};
use crate::models::position::{Position, SectorPosition};
use crate::random::RandomSource;
use crate::services::{combat, scan};

use super::course::{round_half_up, unit_step};
use super::damage::repair_roll;

/// How a warp move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Every step was taken.
    Arrived,
    /// An occupied sector stopped the ship short.
    Hazard,
    /// Starfleet refused a crossing of the galaxy's edge.
    Perimeter,
    /// Klingon fire destroyed the ship before it could move.
    Destroyed,
}

/// Engages warp engines to move the Enterprise (NAV command)
///
/// Prompts the player for a course (1-9) and a warp factor. Damaged engines
/// limit the warp factor to 0.2.
///
/// # Arguments
///
/// * `galaxy` - The game galaxy state
/// * `rng` - Random source for klingon fire and the repair roll
/// * `io` - Input reader for getting course and warp factor
/// * `output` - Output writer for displaying navigation results
///
/// # Returns
///
/// * `Ok(())` once the move has been made, complete or cut short
/// * `Err(GameError::InputRejected)` for a bad course or warp factor
/// * `Err(GameError::ResourceExhausted)` if the move needs more energy than is left
pub fn navigate(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    let course = Course::navigation(read_value(io, "COURSE (1-9)")?)?;

    let max_warp = if galaxy.player().is_damaged(Device::WarpEngines) {
        DAMAGED_MAX_WARP
    } else {
        MAX_WARP
    };
    let warp_value: f64 = read_value(io, &format!("WARP FACTOR (0-{:.1})", max_warp))?;
    let warp = WarpFactor::new(warp_value, max_warp)?;

    engage_warp(galaxy, rng, course, warp, output)?;
    Ok(())
}

/// Move the ship along `course` at `warp`.
///
/// Klingons in the starting quadrant fire first. Every accepted move then
/// costs one stardate and `warp.energy_cost()` units of main energy, however
/// far the ship actually got. Unless the ship was destroyed, damage control
/// gets its repair roll and the short range sensors rescan.
pub fn engage_warp(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    course: Course,
    warp: WarpFactor,
    output: &mut dyn OutputWriter,
) -> GameResult<NavigationOutcome> {
    let cost = warp.energy_cost();
    if cost > galaxy.player().total_energy() {
        return Err(GameError::ResourceExhausted(format!(
            "ENGINEERING REPORTS 'INSUFFICIENT ENERGY AVAILABLE\n                     FOR MANEUVERING AT WARP {:.1}!'",
            warp.value()
        )));
    }
    debug!(
        "warp {:.1} on course {}: {} steps for {} energy",
        warp.value(),
        course,
        warp.step_count(),
        cost
    );

    let destroyed =
        galaxy.current_quadrant().klingons > 0 && combat::klingons_fire(galaxy, rng, output);

    let outcome = if destroyed {
        NavigationOutcome::Destroyed
    } else {
        let (stop, outcome) = walk(galaxy, course, warp.step_count(), output);
        galaxy.relocate_player(stop);
        outcome
    };

    galaxy.advance_day();
    galaxy.player_mut().subtract_energy(cost);

    if !destroyed {
        repair_roll(galaxy, rng, output);
        if let Err(report) = scan::short_range_scan(galaxy, output) {
            output.writeln(&report.to_string());
        }
    }
    Ok(outcome)
}

/// Step sector by sector from the player's position. Returns where the ship
/// stops and why.
fn walk(
    galaxy: &Galaxy,
    course: Course,
    steps: usize,
    output: &mut dyn OutputWriter,
) -> (Position, NavigationOutcome) {
    let (d_row, d_col) = unit_step(course);
    let start = galaxy.player().position();
    let span = SECTOR_SIZE as f64;

    let mut quadrant = start.quadrant;
    let mut row = start.sector.row as f64;
    let mut col = start.sector.col as f64;
    let mut stop = start;

    for _ in 0..steps {
        row += d_row;
        col += d_col;

        // Leaving the quadrant wraps to the opposite edge of the next one.
        let mut next = quadrant;
        if round_half_up(row) < 0 {
            row += span;
            next.row -= 1;
        } else if round_half_up(row) >= SECTOR_SIZE as i32 {
            row -= span;
            next.row += 1;
        }
        if round_half_up(col) < 0 {
            col += span;
            next.col -= 1;
        } else if round_half_up(col) >= SECTOR_SIZE as i32 {
            col -= span;
            next.col += 1;
        }

        if !next.in_galaxy() {
            report_perimeter(stop, output);
            return (stop, NavigationOutcome::Perimeter);
        }
        quadrant = next;

        let sector = SectorPosition {
            row: round_half_up(row),
            col: round_half_up(col),
        };
        let candidate = Position { quadrant, sector };
        if !galaxy.is_vacant(candidate) {
            output.writeln(&format!(
                "WARP ENGINES SHUT DOWN AT SECTOR {} DUE TO BAD NAVIGATION.",
                sector
            ));
            return (stop, NavigationOutcome::Hazard);
        }
        stop = candidate;
    }
    (stop, NavigationOutcome::Arrived)
}

fn report_perimeter(stop: Position, output: &mut dyn OutputWriter) {
    debug!("perimeter crossing refused at {:?}", stop);
    output.writeln("LT. UHURA REPORTS MESSAGE FROM STARFLEET COMMAND:");
    output.writeln("  'PERMISSION TO ATTEMPT CROSSING OF GALACTIC PERIMETER");
    output.writeln("  IS HEREBY *DENIED*.  SHUT DOWN YOUR ENGINES.'");
    output.writeln("CHIEF ENGINEER SCOTT REPORTS  'WARP ENGINES SHUT DOWN");
    output.writeln(&format!(
        "  AT SECTOR {} OF QUADRANT {}.'",
        stop.sector, stop.quadrant
    ));
}
