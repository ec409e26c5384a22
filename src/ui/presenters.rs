use crate::io::OutputWriter;
use crate::models::constants::{DefeatReason, Device};
use crate::models::galaxy::Galaxy;
use crate::models::player::Player;
use crate::models::position::SectorPosition;

pub struct PlayerPresenter;

impl PlayerPresenter {
    /// Device table: one row per subsystem with its state of repair.
    pub fn show_damage_report(player: &Player, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<26}{}", "DEVICE", "STATE OF REPAIR"));
        for device in Device::ALL.iter() {
            let state = player.damage()[*device as usize];
            output.writeln(&format!("{:<26}{:.6}", format!("{}:", device.name()), state));
        }
        output.writeln("");
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_klingon_hit(hit: i32, pos: SectorPosition, remaining: i32, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{} UNIT HIT ON KLINGON AT SECTOR {}", hit, pos));
        if remaining > 0 {
            output.writeln(&format!("    (SENSORS SHOW {} UNITS REMAINING)", remaining));
        }
    }

    pub fn show_no_damage(pos: SectorPosition, output: &mut dyn OutputWriter) {
        output.writeln(&format!("SENSORS SHOW NO DAMAGE TO ENEMY AT {}", pos));
    }

    pub fn show_klingon_destroyed(output: &mut dyn OutputWriter) {
        output.writeln("*** KLINGON DESTROYED ***");
    }

    pub fn show_player_hit(hit: i32, from: SectorPosition, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{} UNIT HIT ON ENTERPRISE FROM SECTOR {}", hit, from));
    }

    pub fn show_shields_down(shield: i32, output: &mut dyn OutputWriter) {
        output.writeln(&format!("      <SHIELDS DOWN TO {} UNITS>", shield));
    }

    pub fn show_device_damaged(device: Device, output: &mut dyn OutputWriter) {
        output.writeln(&format!("DAMAGE CONTROL REPORTS {} DAMAGED BY THE HIT", device.name()));
        output.writeln("");
    }

    pub fn show_player_destroyed(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("");
        output.writeln("THE ENTERPRISE HAS BEEN DESTROYED. THE FEDERATION WILL BE CONQUERED");
    }
}

pub struct MissionPresenter;

impl MissionPresenter {
    pub fn show_title(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*****************************************");
        output.writeln("*                   *                   *");
        output.writeln("*                 * * *                 *");
        output.writeln("*     * *    SUPER STAR TREK   * *      *");
        output.writeln("*               * *   * *               *");
        output.writeln("*              * *     * *              *");
        output.writeln("*****************************************");
        output.writeln("");
    }

    pub fn show_briefing(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        let plural = if galaxy.starbases_remaining() != 1 { "S" } else { "" };
        output.writeln(&format!(
            "YOU MUST DESTROY {} KLINGONS IN {} STARDATES WITH {} STARBASE{}",
            galaxy.klingons_remaining(),
            galaxy.days_remaining(),
            galaxy.starbases_remaining(),
            plural,
        ));
    }

    pub fn show_victory(rating: i32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("THE LAST KLINGON BATTLE CRUISER IN THE GALAXY HAS BEEN DESTROYED");
        output.writeln("THE FEDERATION HAS BEEN SAVED !!!");
        output.writeln("");
        output.writeln(&format!("YOUR EFFICIENCY RATING = {}", rating));
    }

    pub fn show_defeat(reason: DefeatReason, galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        if reason == DefeatReason::TimeExpired {
            output.writeln("");
            output.writeln("YOUR MISSION TIME HAS EXPIRED");
        }
        output.writeln(&format!("IT IS STARDATE {}", galaxy.stardate()));
        output.writeln(&format!(
            "THERE WERE {} KLINGON BATTLE CRUISERS LEFT AT",
            galaxy.klingons_remaining()
        ));
        output.writeln("THE END OF YOUR MISSION.");
        output.writeln("");
    }

    pub fn show_volunteer_call(output: &mut dyn OutputWriter) {
        output.writeln("THE FEDERATION IS IN NEED OF A NEW STARSHIP COMMANDER");
        output.writeln("FOR A SIMILAR MISSION -- IF THERE IS A VOLUNTEER,");
    }

    pub fn show_farewell(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*****************************************");
        output.writeln("*     * *   THANKS FOR PLAYING!   * *   *");
        output.writeln("*****************************************");
        output.writeln("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::position::Position;

    #[test]
    fn damage_report_lists_every_device() {
        let mut player = Player::new(Position::new(0, 0, 0, 0));
        player.set_damage(Device::PhotonTubes, -1.5);
        let mut output = MockOutput::new();

        PlayerPresenter::show_damage_report(&player, &mut output);

        assert_eq!(output.messages.len(), Device::ALL.len() + 2);
        assert!(output.messages[0].starts_with("DEVICE"));
        assert!(output.contains("PHOTON TUBES:             -1.500000"));
        assert!(output.contains("WARP ENGINES:             0.000000"));
    }

    #[test]
    fn klingon_hit_reports_remaining_only_when_alive() {
        let mut output = MockOutput::new();
        let pos = SectorPosition { row: 0, col: 0 };
        CombatPresenter::show_klingon_hit(60, pos, 40, &mut output);
        CombatPresenter::show_klingon_hit(60, pos, -10, &mut output);
        assert_eq!(output.messages.len(), 3);
        assert_eq!(output.messages[0], "60 UNIT HIT ON KLINGON AT SECTOR 1,1\n");
        assert!(output.messages[1].contains("40 UNITS REMAINING"));
    }

    #[test]
    fn defeat_summary_names_stardate_and_survivors() {
        let galaxy = Galaxy::new(Position::new(4, 5, 3, 0));
        let mut output = MockOutput::new();
        MissionPresenter::show_defeat(DefeatReason::Resigned, &galaxy, &mut output);
        assert!(output.contains("IT IS STARDATE 2700"));
        assert!(output.contains("THERE WERE 0 KLINGON BATTLE CRUISERS LEFT AT"));
    }
}
