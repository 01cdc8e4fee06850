use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Number of groups in the draw.
pub const GROUP_COUNT: usize = 12;

/// Number of pots, and therefore teams per group.
pub const POT_COUNT: usize = 4;

/// Group letters, in draw order.
pub const GROUP_LETTERS: [char; GROUP_COUNT] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L'];

/// A confederation tag. Inter-confederation play-off slots carry their own
/// tag and count as a confederation of their own in the draw rules.
#[derive(Serialize, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Confederation {
    Afc,
    Caf,
    Concacaf,
    Conmebol,
    Ofc,
    Uefa,
    PlayOff,
}

impl Confederation {
    /// The official upper-case tag of this confederation.
    pub fn tag(&self) -> &'static str {
        match self {
            Confederation::Afc => "AFC",
            Confederation::Caf => "CAF",
            Confederation::Concacaf => "CONCACAF",
            Confederation::Conmebol => "CONMEBOL",
            Confederation::Ofc => "OFC",
            Confederation::Uefa => "UEFA",
            Confederation::PlayOff => "PLAYOFF",
        }
    }
}

impl Display for Confederation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A team taking part in the draw.
#[derive(Serialize, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Team {
    /// Unique name of the team.
    pub name: &'static str,
    /// Confederation the team belongs to.
    pub confederation: Confederation,
    /// Seeding pot, in the range 1..=[`POT_COUNT`].
    pub pot: u8,
}

const fn team(name: &'static str, confederation: Confederation, pot: u8) -> Team {
    Team {
        name,
        confederation,
        pot,
    }
}

/// The 48 qualified teams, per the FIFA 2026 final draw list.
pub static TEAMS: [Team; crate::TEAM_COUNT] = {
    use Confederation::*;

    [
        // Pot 1
        team("Mexico", Concacaf, 1),
        team("Canada", Concacaf, 1),
        team("USA", Concacaf, 1),
        team("Spain", Uefa, 1),
        team("Argentina", Conmebol, 1),
        team("France", Uefa, 1),
        team("England", Uefa, 1),
        team("Brazil", Conmebol, 1),
        team("Portugal", Uefa, 1),
        team("Netherlands", Uefa, 1),
        team("Belgium", Uefa, 1),
        team("Germany", Uefa, 1),
        // Pot 2
        team("Croatia", Uefa, 2),
        team("Morocco", Caf, 2),
        team("Colombia", Conmebol, 2),
        team("Uruguay", Conmebol, 2),
        team("Switzerland", Uefa, 2),
        team("Japan", Afc, 2),
        team("Senegal", Caf, 2),
        team("IR Iran", Afc, 2),
        team("Korea Republic", Afc, 2),
        team("Ecuador", Conmebol, 2),
        team("Austria", Uefa, 2),
        team("Australia", Afc, 2),
        // Pot 3
        team("Norway", Uefa, 3),
        team("Panama", Concacaf, 3),
        team("Egypt", Caf, 3),
        team("Algeria", Caf, 3),
        team("Scotland", Uefa, 3),
        team("Paraguay", Conmebol, 3),
        team("Tunisia", Caf, 3),
        team("Cote d'Ivoire", Caf, 3),
        team("Uzbekistan", Afc, 3),
        team("Qatar", Afc, 3),
        team("Saudi Arabia", Afc, 3),
        team("South Africa", Caf, 3),
        // Pot 4
        team("Jordan", Afc, 4),
        team("Cape Verde", Caf, 4),
        team("Ghana", Caf, 4),
        team("Curacao", Concacaf, 4),
        team("Haiti", Concacaf, 4),
        team("New Zealand", Ofc, 4),
        team("UEFA PO A winner", Uefa, 4),
        team("UEFA PO B winner", Uefa, 4),
        team("UEFA PO C winner", Uefa, 4),
        team("UEFA PO D winner", Uefa, 4),
        team("Inter-conf playoff 1", PlayOff, 4),
        team("Inter-conf playoff 2", PlayOff, 4),
    ]
};
