//! Stateless outcome and payout calculation.
//!
//! Settlement compares effective scores only; it touches no chips itself.
//! The orchestrator applies the computed payouts and statistics.

use crate::hand::Score;
use crate::result::Outcome;

/// Resolves one hand against the dealer's final hand.
///
/// The ladder, in order: a busted hand loses regardless of the dealer. A
/// natural wins unless the dealer also holds one, in which case it pushes.
/// Otherwise a dealer bust or a higher effective score wins, an equal score
/// pushes, and anything else loses. A non-natural 21 pushes against a dealer
/// natural through plain score equality.
#[must_use]
pub fn outcome(score: Score, blackjack: bool, dealer: Score, dealer_blackjack: bool) -> Outcome {
    if score.is_bust() {
        return Outcome::Lose;
    }

    if blackjack {
        return if dealer_blackjack {
            Outcome::Push
        } else {
            Outcome::Blackjack
        };
    }

    let own = score.effective();
    let theirs = dealer.effective();

    if dealer.is_bust() || own > theirs {
        Outcome::Win
    } else if own == theirs {
        Outcome::Push
    } else {
        Outcome::Lose
    }
}

/// Chips credited back for an outcome. Wins pay 2x the bet (a natural pays
/// the same ordinary rate), a push returns the stake, a loss pays nothing.
#[must_use]
pub const fn payout(outcome: Outcome, bet: usize) -> usize {
    match outcome {
        Outcome::Win | Outcome::Blackjack => bet * 2,
        Outcome::Push => bet,
        Outcome::Lose => 0,
    }
}
