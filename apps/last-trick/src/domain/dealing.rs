//! Deck construction, deterministic shuffling and FIFO dealing.

use std::collections::{HashSet, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate a full 52-card deck in standard order (clubs..spades, two..ace).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by a seeded ChaCha8 stream.
pub fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Ordered deck for one round. Cards leave from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// A freshly shuffled 52-card deck.
    pub fn shuffled(seed: u64) -> Self {
        let mut cards = full_deck();
        shuffle_with_seed(&mut cards, seed);
        Self::from_cards(cards)
    }

    /// A stacked deck dealt in exactly the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when no card appears twice.
    pub fn all_distinct(&self) -> bool {
        let unique: HashSet<&Card> = self.cards.iter().collect();
        unique.len() == self.cards.len()
    }

    /// Remove the next `n` cards in FIFO order.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if self.cards.len() < n {
            return Err(DomainError::invariant(format!(
                "deck has {} cards, {n} requested",
                self.cards.len()
            )));
        }
        Ok(self.cards.drain(..n).collect())
    }
}
