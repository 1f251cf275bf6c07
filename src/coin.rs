//! Coin-flip helper built on the same standard randomness as the demo.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two faces of the coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Heads,
    Tails,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Heads => "Heads",
            Side::Tails => "Tails",
        }
    }
}

/// A coin that remembers the side it last landed on.
///
/// A fresh coin is flipped once at construction.
pub struct Coin {
    rng: StdRng,
    side: Side,
}

impl Coin {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut coin = Coin {
            rng,
            side: Side::Heads,
        };
        coin.flip();
        coin
    }

    /// Flip the coin, returns true on heads
    pub fn flip(&mut self) -> bool {
        self.side = if self.rng.gen_range(0..2) == 0 {
            Side::Heads
        } else {
            Side::Tails
        };
        self.is_heads()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn side_name(&self) -> &'static str {
        self.side.name()
    }

    pub fn is_heads(&self) -> bool {
        self.side == Side::Heads
    }

    pub fn is_tails(&self) -> bool {
        !self.is_heads()
    }

    /// Force the coin to heads without flipping
    pub fn set_heads(&mut self) {
        self.side = Side::Heads;
    }

    /// Force the coin to tails without flipping
    pub fn set_tails(&mut self) {
        self.side = Side::Tails;
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::new()
    }
}
