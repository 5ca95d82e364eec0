use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the identifiers attached to decorated words. These are for
/// display only; collisions are tolerated.
#[derive(Debug, Clone)]
pub enum Identifiers {
    Random(StdRng),
    Sequence(u32),
}

impl Identifiers {
    pub fn random() -> Self {
        Identifiers::Random(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Identifiers::Random(StdRng::seed_from_u64(seed))
    }

    pub fn sequence(first: u32) -> Self {
        Identifiers::Sequence(first)
    }

    pub fn next_id(&mut self) -> u32 {
        match self {
            Identifiers::Random(rng) => rng.random(),
            Identifiers::Sequence(next) => {
                let id = *next;
                *next = next.wrapping_add(1);
                id
            }
        }
    }
}
