use log::{debug, warn};

use crate::io::OutputWriter;
use crate::models::constants::{DefeatReason, Device};
use crate::models::entity::EntityKind;
use crate::models::galaxy::Galaxy;
use crate::random::RandomSource;
use crate::services::proximity;
use crate::ui::presenters::CombatPresenter;

/// Klingons in the player's quadrant return fire, nearest first.
/// Returns true if the Enterprise is destroyed.
///
/// Per klingon the draws are: hit jitter, energy divisor, damage roll, and
/// only when the roll passes, the device index and the damage amount.
pub fn klingons_fire(
    galaxy: &mut Galaxy,
    rng: &mut dyn RandomSource,
    output: &mut dyn OutputWriter,
) -> bool {
    if galaxy.current_quadrant().starbases > 0 {
        output.writeln("STARBASE SHIELDS PROTECT THE ENTERPRISE");
        return false;
    }

    let player_pos = galaxy.player().position();
    for index in proximity::nearby(galaxy, EntityKind::Klingon) {
        let Some(klingon) = galaxy.klingon_mut(index) else {
            continue;
        };
        let distance = player_pos.distance_to(&klingon.position);
        let hit = ((klingon.energy as f64 / distance) * (rng.uniform() + 2.0)).floor() as i32;
        let divisor = (rng.uniform() + 3.0).floor() as i32;
        klingon.energy /= divisor;
        let from = klingon.position.sector;

        galaxy.player_mut().subtract_shield(hit);
        CombatPresenter::show_player_hit(hit, from, output);
        debug!("klingon #{} hit for {} from {}", index, hit, from);

        let shield = galaxy.player().shield();
        if shield < 0 {
            CombatPresenter::show_player_destroyed(output);
            galaxy.end_mission(DefeatReason::ShipDestroyed);
            return true;
        }
        CombatPresenter::show_shields_down(shield, output);

        let ratio = hit as f64 / shield as f64;
        if rng.uniform() > 0.6 && ratio <= 0.2 {
            let device = Device::ALL[rng.below(Device::ALL.len() as u32) as usize];
            let amount = ratio - 0.5 * rng.uniform();
            galaxy.player_mut().degrade_device(device, amount);
            warn!("{} degraded by {:.3}", device.name(), amount);
            CombatPresenter::show_device_damaged(device, output);
        }
    }
    false
}
