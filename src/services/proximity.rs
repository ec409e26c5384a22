use std::cmp::Ordering;

use crate::models::entity::EntityKind;
use crate::models::galaxy::Galaxy;

/// Roster indices of the live entities of `kind` in the player's quadrant,
/// nearest first. Equal distances keep roster order.
///
/// Callers compute this once per operation and walk the list, so every
/// entity is visited in a consistent order for the whole round.
pub fn nearby(galaxy: &Galaxy, kind: EntityKind) -> Vec<usize> {
    let player = galaxy.player().position();
    let mut found: Vec<(usize, f64)> = galaxy
        .roster(kind)
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_present() && e.position.quadrant == player.quadrant)
        .map(|(i, e)| (i, player.distance_to(&e.position)))
        .collect();

    // sort_by is stable, which gives the roster-order tie-break.
    found.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    found.into_iter().map(|(i, _)| i).collect()
}

/// The `n`-th closest live entity of `kind` (0 = nearest), if any.
pub fn nth_nearest(galaxy: &Galaxy, kind: EntityKind, n: usize) -> Option<usize> {
    nearby(galaxy, kind).get(n).copied()
}
