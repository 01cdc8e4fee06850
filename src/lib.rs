#![forbid(unsafe_code)]

use rand::{thread_rng, Rng};

pub mod draw;
pub mod positions;
pub mod registry;
pub mod rules;
pub mod table;

pub use rand_seeder::Seeder;

/// Pseudo-random generator used by the draw.
pub type RandGen = rand_pcg::Pcg64;

/// Total number of teams taking part in the draw.
pub const TEAM_COUNT: usize = registry::GROUP_COUNT * registry::POT_COUNT;

/// Generates a random seed.
pub fn gen_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    thread_rng().fill(&mut seed[..]);
    seed
}

/// Generates a [`Seeder`] from a random seed.
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
