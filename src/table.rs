use crate::positions::SlotAssignment;
use crate::registry::Confederation;
use serde::Serialize;

/// One row of the tabular draw result handed to presentation code.
#[derive(Serialize, Clone, Eq, PartialEq, Debug)]
pub struct DrawRow<'a> {
    pub group: char,
    pub position: String,
    pub team: &'a str,
    pub confederation: Confederation,
    pub pot: u8,
}

/// Flattens a slot assignment into rows, in stable A1..L4 order.
pub fn to_rows<'a>(assignment: &SlotAssignment<'a>) -> Vec<DrawRow<'a>> {
    assignment
        .iter()
        .flat_map(|(&group, slots)| {
            slots.iter().map(move |(position, team)| DrawRow {
                group,
                position: position.clone(),
                team: team.name,
                confederation: team.confederation,
                pot: team.pot,
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::draw::draw;
    use crate::positions::assign_positions;
    use crate::TEAM_COUNT;

    #[test]
    fn one_row_per_team_in_slot_order() {
        let draw = draw(Some(42)).unwrap();
        let rows = to_rows(&assign_positions(&draw).unwrap());

        assert_eq!(rows.len(), TEAM_COUNT);
        assert_eq!(rows[0].group, 'A');
        assert_eq!(rows[0].position, "A1");
        assert_eq!(rows[0].team, "Mexico");
        assert_eq!(rows[3].position, "A4");
        assert_eq!(rows[4].position, "B1");
        assert_eq!(rows[4].team, "Canada");
    }

    #[test]
    fn fixed_seed_serializes_byte_identical() {
        let first = rows_json(42);
        for _ in 0..5 {
            assert_eq!(rows_json(42), first);
        }
    }

    fn rows_json(seed: u64) -> String {
        let draw = draw(Some(seed)).unwrap();
        let rows = to_rows(&assign_positions(&draw).unwrap());
        serde_json::to_string(&rows).unwrap()
    }
}
