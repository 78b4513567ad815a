//! Hands and the two-valued blackjack score.

use crate::card::Card;

/// The score of a hand, as one or two totals.
///
/// The hard total counts every ace as 1. If the hand holds at least one ace
/// and upgrading a single ace to 11 stays within 21, the soft total is
/// `hard + 10`. Upgrading a second ace would always bust, so one upgrade is
/// the only case worth modeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Total with every ace counted as 1.
    pub hard: u8,
    /// Total with one ace counted as 11, when that stays within 21.
    pub soft: Option<u8>,
}

impl Score {
    /// Computes the score of a sequence of cards.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut hard: u8 = 0;
        let mut aces: u8 = 0;

        for card in cards {
            if card.is_ace() {
                aces += 1;
            }
            hard = hard.saturating_add(card.point_value());
        }

        // hard <= 11 is exactly hard + 10 <= 21, without risking overflow.
        let soft = (aces > 0 && hard <= 11).then(|| hard + 10);
        Self { hard, soft }
    }

    /// The total used when comparing hands: the soft total when it exists
    /// (it is only kept while within 21), otherwise the hard total.
    #[must_use]
    pub fn effective(self) -> u8 {
        self.soft.unwrap_or(self.hard)
    }

    /// Returns whether the hand is bust. Bust is decided on the hard total;
    /// a hand with a live soft total can never be bust.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.hard > 21
    }

    /// Returns whether the score carries a live soft total.
    #[must_use]
    pub const fn is_soft(self) -> bool {
        self.soft.is_some()
    }
}

/// An ordered sequence of cards held by one participant.
///
/// The score is always recomputed from the cards; it is never cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Computes the hand's score.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(&self.cards)
    }

    /// Returns whether the hand is a blackjack: exactly two cards, one an
    /// ace and the other worth ten. A third card can never make a hand a
    /// blackjack, however it scores.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => {
                (a.is_ace() && b.rank.is_ten_value()) || (b.is_ace() && a.rank.is_ten_value())
            }
            _ => false,
        }
    }

    /// Returns whether the hand is a two-card pair of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    /// Removes and returns the second card, for splitting a pair.
    ///
    /// Returns `None` unless the hand holds exactly two cards.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}
