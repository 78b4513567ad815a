//! The shoe: a shuffled, replenishing supply of cards from several decks.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ConfigError;
use crate::options::{MAX_DECKS, MIN_DECKS};

/// A multi-deck shoe.
///
/// Drawing never fails: an exhausted shoe refills itself with fresh decks
/// and reshuffles before handing out the next card, like a continuous
/// shuffling machine. It keeps no memory of previously drawn cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Creates a shoe holding `decks` standard 52-card decks, shuffled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] unless `decks` is between
    /// [`MIN_DECKS`] and [`MAX_DECKS`].
    pub fn new(decks: u8, rng: &mut ChaCha8Rng) -> Result<Self, ConfigError> {
        if !(MIN_DECKS..=MAX_DECKS).contains(&decks) {
            return Err(ConfigError::InvalidDeckCount(decks));
        }

        let mut shoe = Self {
            cards: Vec::with_capacity(usize::from(decks) * DECK_SIZE),
            decks,
        };
        shoe.refill();
        shoe.shuffle(rng);
        Ok(shoe)
    }

    fn refill(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Shuffles the current contents of the shoe.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Draws the front card. An empty shoe is refilled with fresh decks and
    /// reshuffled first, so a draw always succeeds.
    pub fn draw(&mut self, rng: &mut ChaCha8Rng) -> Card {
        if self.cards.is_empty() {
            self.refill();
            self.shuffle(rng);
        }
        // refill always leaves decks * 52 cards
        self.cards.pop().expect("shoe is non-empty after refill")
    }

    /// Returns the number of cards left before the next refill.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the configured deck count.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.decks
    }

    /// Replaces the shoe contents with the given cards, first element drawn
    /// first. Intended for deterministic setups in tests.
    pub fn load(&mut self, mut cards: Vec<Card>) {
        cards.reverse();
        self.cards = cards;
    }
}
