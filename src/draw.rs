use crate::registry::{Team, GROUP_COUNT, GROUP_LETTERS, POT_COUNT, TEAMS};
use crate::rules::{all_groups_have_uefa, can_place};
use crate::{RandGen, Seeder};
use indexmap::IndexMap;
use log::{debug, trace};
use rand::prelude::SliceRandom;
use std::marker::PhantomData;
use thiserror::Error;

/// Host teams and the groups they are bound to before the search starts.
/// Bound hosts are excluded from the randomized pot-1 pool.
pub const HOST_GROUPS: [(&str, char); 3] = [("Mexico", 'A'), ("Canada", 'B'), ("USA", 'D')];

/// A complete, constraint-valid group assignment.
pub struct GroupDraw<'a> {
    /// Group members keyed by group letter, in A..L order. Every group
    /// holds exactly one team per pot.
    pub groups: IndexMap<char, Vec<&'a Team>>,

    _phantom: PhantomData<()>,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DrawError {
    /// The backtracking search found no assignment satisfying all
    /// constraints for the given seed and team list.
    #[error("search exhausted: no group assignment satisfies the draw constraints")]
    SearchExhausted,
}

/// Draws the 48 registry teams into 12 groups.
///
/// Supplying the same `seed` reproduces the same assignment within one
/// build. With `None` the draw is seeded from fresh entropy.
pub fn draw(seed: Option<u64>) -> Result<GroupDraw<'static>, DrawError> {
    let seeder = match seed {
        Some(seed) => Seeder::from(seed),
        None => crate::gen_seeder(),
    };
    draw_from(&TEAMS, seeder)
}

/// Draws the provided teams into 12 groups, using `seeder` as the only
/// source of randomness. Teams named in [`HOST_GROUPS`] are pre-placed.
pub fn draw_from(teams: &[Team], mut seeder: Seeder) -> Result<GroupDraw<'_>, DrawError> {
    let mut rng: RandGen = seeder.make_rng();

    let mut groups: [Vec<&Team>; GROUP_COUNT] =
        std::array::from_fn(|_| Vec::with_capacity(POT_COUNT));
    let mut pots: [Vec<&Team>; POT_COUNT] = Default::default();

    for team in teams {
        if team.pot == 1 {
            if let Some(group) = host_group(team.name) {
                groups[group].push(team);
                continue;
            }
        }
        match team.pot {
            1..=4 => pots[(team.pot - 1) as usize].push(team),
            _ => {}
        }
    }

    // One up-front shuffle per pot fixes the placement order; the group
    // order is reshuffled at every decision point instead.
    for pot in &mut pots {
        pot.shuffle(&mut rng);
    }

    if backtrack(&pots, &mut groups, &mut rng, 0, 0) {
        Ok(GroupDraw {
            groups: GROUP_LETTERS.into_iter().zip(groups).collect(),
            _phantom: PhantomData,
        })
    } else {
        debug!("draw search exhausted without finding a valid assignment");
        Err(DrawError::SearchExhausted)
    }
}

fn host_group(name: &str) -> Option<usize> {
    HOST_GROUPS
        .iter()
        .find(|&&(host, _)| host == name)
        .and_then(|&(_, letter)| GROUP_LETTERS.iter().position(|&g| g == letter))
}

/// Depth-first search over (pot, index-within-pool). Places the current
/// team in some group of a freshly shuffled group order, recurses, and
/// undoes the placement if the recursion fails.
fn backtrack<'a>(
    pots: &[Vec<&'a Team>; POT_COUNT],
    groups: &mut [Vec<&'a Team>; GROUP_COUNT],
    rng: &mut RandGen,
    pot: usize,
    index: usize,
) -> bool {
    if pot >= POT_COUNT {
        // All teams placed; the UEFA coverage rule is only checkable now.
        let valid = all_groups_have_uefa(groups);
        if !valid {
            trace!("complete assignment rejected: a group has no UEFA team");
        }
        return valid;
    }

    let pool = &pots[pot];
    if index >= pool.len() {
        return backtrack(pots, groups, rng, pot + 1, 0);
    }

    let team = pool[index];
    let mut order: [usize; GROUP_COUNT] = std::array::from_fn(|i| i);
    order.shuffle(rng);

    for group in order {
        // One team per pot per group; checked before the confederation rules.
        if groups[group].iter().any(|t| t.pot == team.pot) {
            continue;
        }
        if !can_place(team, &groups[group]) {
            continue;
        }

        groups[group].push(team);
        if backtrack(pots, groups, rng, pot, index + 1) {
            return true;
        }
        groups[group].pop();
    }

    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::Confederation::{self, *};
    use crate::rules::MAX_UEFA_PER_GROUP;
    use crate::TEAM_COUNT;
    use itertools::Itertools;

    #[test]
    fn same_seed_same_draw() {
        for seed in [0u64, 1, 42, 9999] {
            let first = draw(Some(seed)).unwrap();
            let second = draw(Some(seed)).unwrap();
            assert_eq!(first.groups, second.groups);
        }
    }

    #[test]
    fn draws_are_complete_and_valid() {
        for seed in 0..25u64 {
            let draw = draw(Some(seed)).unwrap();
            assert_eq!(draw.groups.len(), GROUP_COUNT);

            let placed: Vec<_> = draw.groups.values().flatten().collect();
            assert_eq!(placed.len(), TEAM_COUNT);
            assert!(placed.iter().map(|t| t.name).all_unique());

            for members in draw.groups.values() {
                assert_eq!(members.len(), POT_COUNT);
                for pot in 1..=POT_COUNT as u8 {
                    assert_eq!(members.iter().filter(|t| t.pot == pot).count(), 1);
                }

                for confederation in [Afc, Caf, Concacaf, Conmebol, Ofc, PlayOff] {
                    assert!(count_confederation(members, confederation) <= 1);
                }
                let uefa = count_confederation(members, Uefa);
                assert!((1..=MAX_UEFA_PER_GROUP).contains(&uefa));
            }
        }
    }

    #[test]
    fn hosts_are_bound_to_their_groups() {
        for seed in 0..25u64 {
            let draw = draw(Some(seed)).unwrap();
            for (host, letter) in HOST_GROUPS {
                let members = &draw.groups[&letter];
                assert!(
                    members.iter().any(|t| t.name == host),
                    "{host} must be in group {letter}"
                );
            }
        }
    }

    #[test]
    fn impossible_registry_exhausts_search() {
        // No UEFA team anywhere, so the coverage rule can never hold.
        let teams = [
            Team {
                name: "Argentina",
                confederation: Conmebol,
                pot: 1,
            },
            Team {
                name: "Brazil",
                confederation: Conmebol,
                pot: 1,
            },
        ];
        let result = draw_from(&teams, Seeder::from(7u64));
        assert!(matches!(result, Err(DrawError::SearchExhausted)));
    }

    fn count_confederation(members: &[&Team], confederation: Confederation) -> usize {
        members
            .iter()
            .filter(|t| t.confederation == confederation)
            .count()
    }
}
