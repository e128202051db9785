//! Seeded randomness for deals.
//!
//! A deal is fully determined by its seed: `GameState::new_game` feeds a
//! `GameRng` into the deck shuffle, so the same seed always produces the
//! same layout. `GameRng` implements `RngCore`, which lets it stand in
//! anywhere a `rand::Rng` is accepted.
//!
//! ```
//! use klondike_engine::core::GameRng;
//! use klondike_engine::zones::Deck;
//!
//! let a = Deck::shuffled(&mut GameRng::new(7));
//! let b = Deck::shuffled(&mut GameRng::new(7));
//! assert_eq!(a, b);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream tagged with the seed that started it.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed of the deal this RNG belongs to.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.stream.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.stream.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.stream.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.stream.try_fill_bytes(dest)
    }
}
