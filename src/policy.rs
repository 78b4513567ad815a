//! The fixed AI decision heuristic.
//!
//! The policy is a stateless function of the AI's hand and bankroll; the
//! orchestrator consults it once per decision. It never splits, and its
//! insurance take-up is a separate fixed-probability coin.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::hand::Hand;
use crate::participant::Bankroll;

/// A move chosen by the AI policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMove {
    /// Draw one card.
    Hit,
    /// End the turn.
    Stand,
    /// Stake the bet again and draw exactly one card.
    DoubleDown,
}

/// Chooses the next move for an AI hand.
///
/// A natural stands outright. A two-card hand with a hard total of 10 or 11
/// doubles down when the chips cover the bet. Otherwise the hand hits until
/// its effective total reaches 17, the same threshold the dealer plays to.
#[must_use]
pub fn choose(hand: &Hand, bankroll: &Bankroll) -> AiMove {
    if hand.is_blackjack() {
        return AiMove::Stand;
    }

    let score = hand.score();
    if hand.len() == 2 && matches!(score.hard, 10 | 11) && bankroll.can_cover(bankroll.bet()) {
        return AiMove::DoubleDown;
    }

    if score.effective() < 17 {
        AiMove::Hit
    } else {
        AiMove::Stand
    }
}

/// Decides whether an AI takes insurance: a fixed 1-in-3 chance.
pub fn takes_insurance(rng: &mut ChaCha8Rng) -> bool {
    rng.random_bool(1.0 / 3.0)
}
