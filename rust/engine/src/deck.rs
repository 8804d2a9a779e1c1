use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

/// The undealt part of a 52-card deck.
///
/// Each draw picks uniformly among the remaining cards, so no separate
/// shuffle step is needed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Exhausted);
        }
        let i = self.rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(i))
    }

    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        (0..n).map(|_| self.deal_card()).collect()
    }

    /// Puts every card back; the RNG stream continues.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
