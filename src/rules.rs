use crate::registry::{Confederation, Team};

/// Final size of every group.
pub const GROUP_SIZE: usize = crate::registry::POT_COUNT;

/// Maximum number of UEFA teams allowed in one group. Every other
/// confederation is capped at 1.
pub const MAX_UEFA_PER_GROUP: usize = 2;

/// Returns whether `team` may join a group currently holding `group`,
/// according to the confederation rules:
/// at most 1 team per confederation, except UEFA which allows up to
/// [`MAX_UEFA_PER_GROUP`]; PLAYOFF counts as a confederation of its own.
pub fn can_place(team: &Team, group: &[&Team]) -> bool {
    if group.len() >= GROUP_SIZE {
        return false;
    }

    let same_confederation = group
        .iter()
        .filter(|t| t.confederation == team.confederation)
        .count();
    let cap = if team.confederation == Confederation::Uefa {
        MAX_UEFA_PER_GROUP
    } else {
        1
    };

    same_confederation < cap
}

/// Returns whether every group holds at least one UEFA team. Only
/// meaningful on a complete assignment.
pub fn all_groups_have_uefa(groups: &[Vec<&Team>]) -> bool {
    groups.iter().all(|group| {
        group
            .iter()
            .any(|t| t.confederation == Confederation::Uefa)
    })
}
