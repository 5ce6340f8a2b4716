use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Creates a reproducible rng. Two rngs created from the same seed yield the same sequence.
pub fn create_rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an rng seeded from the operating system. The seed is logged so a run can be replayed.
pub fn create_rng() -> StdRng {
    let seed = rand::thread_rng().next_u64();
    debug!("Seeding rng with {}", seed);
    create_rng_from_seed(seed)
}

pub fn create_rng_from_optional_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng_from_seed(seed),
        None => create_rng(),
    }
}
