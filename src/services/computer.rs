use crate::io::{read_value, InputReader, OutputWriter};
use crate::models::constants::{Device, GALAXY_SIZE};
use crate::models::entity::EntityKind;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;
use crate::services::navigation::{bearing, sector_bearing, Bearing};
use crate::services::proximity;
use crate::ui::presenters::PlayerPresenter;

const RECORD_HEADER: &str = "       1     2     3     4     5     6     7     8";
const RECORD_BORDER: &str = "     ----- ----- ----- ----- ----- ----- ----- -----";

/// Region names, two per galaxy row: columns 1-4 and 5-8.
const REGION_NAMES: [(&str, &str); GALAXY_SIZE] = [
    ("ANTARES", "SIRIUS"),
    ("RIGEL", "DENEB"),
    ("PROCYON", "CAPELLA"),
    ("VEGA", "BETELGEUSE"),
    ("CANOPUS", "ALDEBRAN"),
    ("ALTAIR", "REGULUS"),
    ("SAGITTARIUS", "ARCTURUS"),
    ("POLLUX", "SPICA"),
];

/// Library-computer functions, selected by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerFunction {
    GalacticRecord,
    StatusReport,
    TorpedoData,
    StarbaseData,
    Calculator,
    RegionMap,
}

impl ComputerFunction {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            0 => Some(ComputerFunction::GalacticRecord),
            1 => Some(ComputerFunction::StatusReport),
            2 => Some(ComputerFunction::TorpedoData),
            3 => Some(ComputerFunction::StarbaseData),
            4 => Some(ComputerFunction::Calculator),
            5 => Some(ComputerFunction::RegionMap),
            _ => None,
        }
    }
}

/// Calls on the library-computer (COM command)
///
/// Prompts for a function number. Anything that is not a known function
/// lists the menu and asks again.
///
/// # Returns
///
/// * `Ok(())` after the selected function has run
/// * `Err(GameError::SubsystemInoperable)` if the computer is damaged
pub fn library_computer(
    galaxy: &Galaxy,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    if galaxy.player().is_damaged(Device::LibraryComputer) {
        return Err(GameError::SubsystemInoperable(Device::LibraryComputer));
    }

    let function = loop {
        match read_value::<i32>(io, "COMPUTER ACTIVE AND AWAITING COMMAND:") {
            Ok(n) => match ComputerFunction::from_number(n) {
                Some(function) => break function,
                None => show_menu(output),
            },
            Err(GameError::ParseError(_)) => show_menu(output),
            Err(e) => return Err(e),
        }
    };
    run_function(galaxy, function, io, output)
}

pub fn run_function(
    galaxy: &Galaxy,
    function: ComputerFunction,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    match function {
        ComputerFunction::GalacticRecord => galactic_record(galaxy, output),
        ComputerFunction::StatusReport => status_report(galaxy, output),
        ComputerFunction::TorpedoData => torpedo_data(galaxy, output),
        ComputerFunction::StarbaseData => starbase_data(galaxy, output),
        ComputerFunction::Calculator => calculator(galaxy, io, output)?,
        ComputerFunction::RegionMap => region_map(output),
    }
    Ok(())
}

fn show_menu(output: &mut dyn OutputWriter) {
    output.writeln("FUNCTIONS AVAILABLE FROM LIBRARY-COMPUTER :");
    output.writeln("   0 = CUMULATIVE GALACTIC RECORD");
    output.writeln("   1 = STATUS REPORT");
    output.writeln("   2 = PHOTON TORPEDO DATA");
    output.writeln("   3 = STARBASE NAV DATA");
    output.writeln("   4 = DIRECTION/DISTANCE CALCULATOR");
    output.writeln("   5 = GALAXY 'REGION NAME' MAP");
    output.writeln("");
}

/// Option 0: every quadrant as last scanned; `***` where never scanned.
fn galactic_record(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln(&format!(
        "        COMPUTER RECORD OF GALAXY FOR QUADRANT {}",
        galaxy.player().position().quadrant
    ));
    output.writeln(RECORD_HEADER);
    output.writeln(RECORD_BORDER);
    for row in 0..GALAXY_SIZE as i32 {
        let mut line = format!("{}     ", row + 1);
        for col in 0..GALAXY_SIZE as i32 {
            let archived = galaxy.archive(QuadrantPosition { row, col });
            if archived.scanned {
                line.push_str(&archived.code());
            } else {
                line.push_str("***");
            }
            line.push_str("   ");
        }
        output.writeln(line.trim_end());
        output.writeln(RECORD_BORDER);
    }
}

/// Option 1: mission status followed by the damage table.
fn status_report(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("  STATUS REPORT :");
    output.writeln(&format!("KLINGONS LEFT : {}", galaxy.klingons_remaining()));
    output.writeln(&format!(
        "MISSION MUST BE COMPLETED IN {} STARDATES",
        galaxy.days_remaining()
    ));
    output.writeln(&format!(
        "THE FEDERATION IS MAINTAINING {} STARBASES IN THE GALAXY",
        galaxy.starbases_remaining()
    ));
    output.writeln("");
    PlayerPresenter::show_damage_report(galaxy.player(), output);
}

/// Option 2: bearing to every klingon in the quadrant, nearest first.
fn torpedo_data(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    let targets = proximity::nearby(galaxy, EntityKind::Klingon);
    if targets.is_empty() {
        output.writeln("SCIENCE OFFICER SPOCK REPORTS  'SENSORS SHOW NO ENEMY SHIPS");
        output.writeln("                                IN THIS QUADRANT'");
        return;
    }
    output.writeln("");
    output.writeln("FROM ENTERPRISE TO KLINGON BATTLE CRUISER(S)");
    show_bearings(galaxy, EntityKind::Klingon, &targets, output);
}

/// Option 3: bearing to every starbase in the quadrant.
fn starbase_data(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    let targets = proximity::nearby(galaxy, EntityKind::Starbase);
    output.writeln("");
    if targets.is_empty() {
        output.writeln("MR. SPOCK REPORTS,  'SENSORS SHOW NO STARBASES IN THIS QUADRANT.'");
        return;
    }
    output.writeln("FROM ENTERPRISE TO STARBASE");
    show_bearings(galaxy, EntityKind::Starbase, &targets, output);
}

fn show_bearings(galaxy: &Galaxy, kind: EntityKind, targets: &[usize], output: &mut dyn OutputWriter) {
    let from = galaxy.player().position().sector;
    let roster = galaxy.roster(kind);
    for &index in targets {
        if let Some(b) = sector_bearing(from, roster[index].position.sector) {
            show_bearing(b, output);
        }
    }
}

fn show_bearing(b: Bearing, output: &mut dyn OutputWriter) {
    output.writeln(&format!("DIRECTION = {:.6}", b.direction));
    output.writeln(&format!("DISTANCE = {:.6}", b.distance));
}

/// Option 4: bearing between two sectors typed in as `row,col`.
fn calculator(
    galaxy: &Galaxy,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    let position = galaxy.player().position();
    output.writeln("DIRECTION/DISTANCE CALCULATOR :");
    output.writeln(&format!(
        "YOU ARE AT QUADRANT {} SECTOR {}",
        position.quadrant, position.sector
    ));
    output.writeln("PLEASE ENTER");
    let from = parse_coordinates(&io.read_line("  INITIAL COORDINATES (X,Y)")?)?;
    let to = parse_coordinates(&io.read_line("  FINAL COORDINATES (X,Y)")?)?;

    match bearing(from, to) {
        Some(b) => show_bearing(b, output),
        None => output.writeln("DISTANCE = 0.000000"),
    }
    Ok(())
}

/// Parse `"row,col"`.
fn parse_coordinates(line: &str) -> GameResult<(f64, f64)> {
    let trimmed = line.trim();
    let (row, col) = trimmed
        .split_once(',')
        .ok_or_else(|| GameError::ParseError(trimmed.to_string()))?;
    Ok((row.trim().parse()?, col.trim().parse()?))
}

/// Option 5: region names of the galaxy.
fn region_map(output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("                        THE GALAXY");
    output.writeln(RECORD_HEADER);
    output.writeln(RECORD_BORDER);
    for (row, (west, east)) in REGION_NAMES.iter().enumerate() {
        let line = format!("{}    {:^24}{:^24}", row + 1, west, east);
        output.writeln(line.trim_end());
        output.writeln(RECORD_BORDER);
    }
}
