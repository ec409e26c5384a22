use std::io::ErrorKind;

use log::{debug, info};

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{DefeatReason, Device};
use crate::models::errors::{GameError, GameResult};
use crate::services::{combat, computer, navigation, scan};
use crate::ui::presenters::{MissionPresenter, PlayerPresenter};

/// Bridge commands, selected by their three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate,
    ShortRangeScan,
    LongRangeScan,
    Phasers,
    Torpedoes,
    Shields,
    DamageReport,
    Computer,
    Resign,
}

impl Command {
    /// Match the first three letters of `input`, ignoring case.
    pub fn parse(input: &str) -> Option<Command> {
        let code: String = input.trim().chars().take(3).collect::<String>().to_uppercase();
        match code.as_str() {
            "NAV" => Some(Command::Navigate),
            "SRS" => Some(Command::ShortRangeScan),
            "LRS" => Some(Command::LongRangeScan),
            "PHA" => Some(Command::Phasers),
            "TOR" => Some(Command::Torpedoes),
            "SHE" => Some(Command::Shields),
            "DAM" => Some(Command::DamageReport),
            "COM" => Some(Command::Computer),
            "XXX" => Some(Command::Resign),
            _ => None,
        }
    }
}

/// An interactive session: one mission after another until the player
/// declines to volunteer again or input runs out.
pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::from_engine(GameEngine::new(seed))
    }

    pub fn from_engine(engine: GameEngine) -> Self {
        Game { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn run(&mut self, io: &mut dyn InputReader, output: &mut dyn OutputWriter) -> GameResult<()> {
        self.begin_mission(output);

        loop {
            let line = match io.read_line("COMMAND:") {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };

            match Command::parse(&line) {
                Some(command) => match self.execute(command, io, output) {
                    Err(GameError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
                    result => result?,
                },
                None => Self::print_command_menu(output),
            }

            if let Some(state) = self.engine.check_game_over() {
                self.report_outcome(&state, output);
                if !Self::volunteer(io, output)? {
                    break;
                }
                self.engine.restart();
                self.begin_mission(output);
            }
        }

        MissionPresenter::show_farewell(output);
        Ok(())
    }

    /// Run one command against the current mission.
    ///
    /// Refusals and bad input are reported to the player and the session
    /// carries on. Only I/O failures are returned, plus `GameEnding` or
    /// `MissionAccomplished` if the mission is already over.
    pub fn execute(
        &mut self,
        command: Command,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<()> {
        self.ensure_mission_active()?;
        debug!("executing {:?}", command);

        let (galaxy, rng) = self.engine.parts_mut();
        let result = match command {
            Command::Navigate => navigation::navigate(galaxy, rng, io, output),
            Command::ShortRangeScan => scan::short_range_scan(galaxy, output),
            Command::LongRangeScan => scan::long_range_scan(galaxy, output),
            Command::Phasers => combat::fire_phasers(galaxy, rng, io, output),
            Command::Torpedoes => combat::fire_torpedoes(galaxy, rng, io, output),
            Command::Shields => combat::shield_control(galaxy, io, output),
            Command::DamageReport => {
                if galaxy.player().is_damaged(Device::DamageControl) {
                    Err(GameError::SubsystemInoperable(Device::DamageControl))
                } else {
                    PlayerPresenter::show_damage_report(galaxy.player(), output);
                    Ok(())
                }
            }
            Command::Computer => computer::library_computer(galaxy, io, output),
            Command::Resign => {
                galaxy.end_mission(DefeatReason::Resigned);
                Ok(())
            }
        };

        match result {
            Err(GameError::IoError(e)) => Err(GameError::IoError(e)),
            Err(report) => {
                output.writeln(&report.to_string());
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    /// Refuse commands once the mission has ended, whether or not the
    /// engine has been asked to check yet.
    fn ensure_mission_active(&self) -> GameResult<()> {
        match self.engine.state() {
            GameState::Victory { .. } => Err(GameError::MissionAccomplished),
            GameState::Defeat { reason } => Err(GameError::GameEnding(*reason)),
            GameState::Playing => {
                let galaxy = self.engine.galaxy();
                match galaxy.mission_end() {
                    Some(reason) => Err(GameError::GameEnding(reason)),
                    None if galaxy.is_time_expired() => {
                        Err(GameError::GameEnding(DefeatReason::TimeExpired))
                    }
                    None => Ok(()),
                }
            }
        }
    }

    fn begin_mission(&mut self, output: &mut dyn OutputWriter) {
        MissionPresenter::show_title(output);
        MissionPresenter::show_briefing(self.engine.galaxy(), output);
        if let Err(report) = scan::short_range_scan(self.engine.galaxy_mut(), output) {
            output.writeln(&report.to_string());
        }
    }

    fn report_outcome(&self, state: &GameState, output: &mut dyn OutputWriter) {
        match state {
            GameState::Victory { rating } => MissionPresenter::show_victory(*rating, output),
            GameState::Defeat { reason } => {
                MissionPresenter::show_defeat(*reason, self.engine.galaxy(), output)
            }
            GameState::Playing => {}
        }
    }

    /// Ask for a volunteer for the next mission. End of input counts as no.
    fn volunteer(io: &mut dyn InputReader, output: &mut dyn OutputWriter) -> GameResult<bool> {
        MissionPresenter::show_volunteer_call(output);
        let answer = match io.read_line("LET HIM STEP FORWARD AND ENTER 'AYE':") {
            Ok(answer) => answer,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        let accepted = answer.trim().to_uppercase().starts_with("AYE");
        info!("volunteer for a new mission: {}", accepted);
        Ok(accepted)
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("ENTER ONE OF THE FOLLOWING :");
        output.writeln("  NAV  (TO SET COURSE)");
        output.writeln("  SRS  (FOR SHORT RANGE SENSOR SCAN)");
        output.writeln("  LRS  (FOR LONG RANGE SENSOR SCAN)");
        output.writeln("  PHA  (TO FIRE PHASERS)");
        output.writeln("  TOR  (TO FIRE PHOTON TORPEDOES)");
        output.writeln("  SHE  (TO RAISE OR LOWER SHIELDS)");
        output.writeln("  DAM  (FOR DAMAGE CONTROL REPORTS)");
        output.writeln("  COM  (TO CALL ON LIBRARY-COMPUTER)");
        output.writeln("  XXX  (TO RESIGN YOUR COMMAND)");
        output.writeln("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::galaxy::Galaxy;
    use crate::models::position::Position;
    use crate::random::ScriptedRandom;

    /// Helper: a quiet galaxy with one far-off klingon and scripted draws.
    fn setup_game() -> Game {
        let mut galaxy = Galaxy::new(Position::new(4, 5, 3, 0));
        galaxy.place_klingon(Position::new(0, 0, 0, 0), 200).unwrap();
        Game::from_engine(GameEngine::from_galaxy(
            galaxy,
            Box::new(ScriptedRandom::constant(0.9)),
        ))
    }

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(Command::parse("nav"), Some(Command::Navigate));
        assert_eq!(Command::parse("  SrS\n"), Some(Command::ShortRangeScan));
        assert_eq!(Command::parse("phasers"), Some(Command::Phasers));
        assert_eq!(Command::parse("xxx"), Some(Command::Resign));
        assert_eq!(Command::parse("NA"), None);
        assert_eq!(Command::parse("HELP"), None);
    }

    #[test]
    fn refusals_are_reported_not_returned() {
        let mut game = setup_game();
        game.engine_mut()
            .galaxy_mut()
            .player_mut()
            .set_damage(Device::LongRangeSensors, -1.0);
        let mut output = MockOutput::new();

        game.execute(Command::LongRangeScan, &mut MockInput::new(vec![]), &mut output)
            .unwrap();

        assert!(output.contains("LONG RANGE SENSORS ARE INOPERABLE"));
    }

    #[test]
    fn parse_errors_print_reenter() {
        let mut game = setup_game();
        let mut output = MockOutput::new();

        game.execute(Command::Navigate, &mut MockInput::new(vec!["north"]), &mut output)
            .unwrap();

        assert!(output.contains("?REENTER"));
        assert_eq!(game.engine().galaxy().stardate(), 2700);
    }

    #[test]
    fn damage_report_is_gated_by_damage_control() {
        let mut game = setup_game();
        let mut output = MockOutput::new();
        game.execute(Command::DamageReport, &mut MockInput::new(vec![]), &mut output)
            .unwrap();
        assert!(output.contains("DEVICE                    STATE OF REPAIR"));

        game.engine_mut()
            .galaxy_mut()
            .player_mut()
            .set_damage(Device::DamageControl, -1.0);
        let mut output = MockOutput::new();
        game.execute(Command::DamageReport, &mut MockInput::new(vec![]), &mut output)
            .unwrap();
        assert!(output.contains("DAMAGE CONTROL REPORT NOT AVAILABLE"));
    }

    #[test]
    fn no_commands_after_the_mission_ends() {
        let mut game = setup_game();
        game.execute(Command::Resign, &mut MockInput::new(vec![]), &mut MockOutput::new())
            .unwrap();
        game.engine_mut().check_game_over();

        let err = game
            .execute(Command::ShortRangeScan, &mut MockInput::new(vec![]), &mut MockOutput::new())
            .unwrap_err();

        assert!(matches!(err, GameError::GameEnding(DefeatReason::Resigned)));
    }

    /// Helper: a 300-energy klingon right next to an unshielded ship.
    fn point_blank_game() -> Game {
        let mut galaxy = Galaxy::new(Position::new(4, 5, 3, 0));
        galaxy.place_klingon(Position::new(4, 5, 3, 1), 300).unwrap();
        Game::from_engine(GameEngine::from_galaxy(
            galaxy,
            Box::new(ScriptedRandom::constant(0.0)),
        ))
    }

    #[test]
    fn destroyed_ship_takes_no_further_commands() {
        let mut game = point_blank_game();
        let mut output = MockOutput::new();

        // too weak to scratch it; the return fire is fatal
        game.execute(Command::Phasers, &mut MockInput::new(vec!["1"]), &mut output)
            .unwrap();
        assert!(output.contains("THE ENTERPRISE HAS BEEN DESTROYED"));

        let err = game
            .execute(Command::Navigate, &mut MockInput::new(vec!["5", "0.1"]), &mut output)
            .unwrap_err();

        assert!(matches!(err, GameError::GameEnding(DefeatReason::ShipDestroyed)));
        assert_eq!(game.engine().galaxy().stardate(), 2700);
        assert_eq!(
            game.engine().galaxy().player().position(),
            Position::new(4, 5, 3, 0)
        );
    }

    #[test]
    fn won_mission_takes_no_further_commands() {
        let mut game = point_blank_game();
        let mut output = MockOutput::new();

        game.execute(Command::Phasers, &mut MockInput::new(vec!["300"]), &mut output)
            .unwrap();
        assert!(output.contains("*** KLINGON DESTROYED ***"));
        assert!(matches!(
            game.engine_mut().check_game_over(),
            Some(GameState::Victory { .. })
        ));

        let err = game
            .execute(Command::Navigate, &mut MockInput::new(vec!["5", "0.1"]), &mut output)
            .unwrap_err();

        assert!(matches!(err, GameError::MissionAccomplished));
        assert_eq!(game.engine().galaxy().stardate(), 2700);
        assert_eq!(game.engine().galaxy().player().energy(), 2700);
    }

    #[test]
    fn expired_clock_takes_no_further_commands() {
        let mut game = setup_game();
        game.engine_mut().galaxy_mut().set_days_remaining(0);

        let err = game
            .execute(Command::ShortRangeScan, &mut MockInput::new(vec![]), &mut MockOutput::new())
            .unwrap_err();

        assert!(matches!(err, GameError::GameEnding(DefeatReason::TimeExpired)));
    }

    #[test]
    fn unknown_command_prints_menu() {
        let mut game = setup_game();
        let mut input = MockInput::new(vec!["zzz"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();

        assert!(output.contains("ENTER ONE OF THE FOLLOWING :"));
        assert!(output.contains("THANKS FOR PLAYING!"));
    }

    #[test]
    fn resigning_without_volunteer_ends_session() {
        let mut game = setup_game();
        let mut input = MockInput::new(vec!["XXX", "no"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();

        assert!(output.contains("THERE WERE 1 KLINGON BATTLE CRUISERS LEFT AT"));
        assert!(output.contains("FOR A SIMILAR MISSION -- IF THERE IS A VOLUNTEER,"));
        assert!(output.contains("THANKS FOR PLAYING!"));
    }

    #[test]
    fn session_starts_with_briefing_and_scan() {
        let mut game = setup_game();
        let mut output = MockOutput::new();

        game.run(&mut MockInput::new(vec![]), &mut output).unwrap();

        assert!(output.contains("SUPER STAR TREK"));
        assert!(output.contains("YOU MUST DESTROY 1 KLINGONS IN 26 STARDATES WITH 0 STARBASES"));
        assert!(output.contains("STARDATE:            2700"));
    }
}
