use crate::draw::GroupDraw;
use crate::registry::{Team, POT_COUNT};
use indexmap::IndexMap;
use itertools::Itertools;
use thiserror::Error;

/// Slot assignments for every group: slot label (`"A1"`..`"L4"`) to team,
/// where the digit is the team's pot.
pub type SlotAssignment<'a> = IndexMap<char, IndexMap<String, &'a Team>>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PositionsError {
    /// A group does not hold exactly one team of some pot. Unreachable for
    /// draws produced by [`crate::draw::draw`], but checked here since this
    /// is the boundary to presentation.
    #[error("group {group} does not hold exactly one pot-{pot} team")]
    InvalidComposition { group: char, pot: u8 },
}

/// Maps each group's teams to fixed slot labels: the pot-1 team to
/// position 1 (`A1`, `B1`, ...), pot 2 to position 2, and so on.
pub fn assign_positions<'a>(draw: &GroupDraw<'a>) -> Result<SlotAssignment<'a>, PositionsError> {
    let mut assignment = IndexMap::with_capacity(draw.groups.len());

    for (&group, members) in &draw.groups {
        let mut slots = IndexMap::with_capacity(POT_COUNT);
        for pot in 1..=POT_COUNT as u8 {
            let team = members
                .iter()
                .copied()
                .filter(|t| t.pot == pot)
                .exactly_one()
                .map_err(|_| PositionsError::InvalidComposition { group, pot })?;
            slots.insert(format!("{group}{pot}"), team);
        }
        assignment.insert(group, slots);
    }

    Ok(assignment)
}
