use rand::Rng;
use tracing::debug;

use crate::error::{BetError, PhaseError};
use crate::events::GameEvent;
use crate::result::HandSettlement;
use crate::settle;

use super::{Game, HandSlot, RoundState};

impl Game {
    /// Places the player's bet and opens the round.
    ///
    /// On success the stake moves from chips into the bet, every AI opponent
    /// independently stakes a uniform random amount between 1 and half its
    /// chip stack (an AI that cannot cover its roll sits the round out), a
    /// [`GameEvent::ChipsChanged`] notification fires, and the game waits
    /// for [`deal_initial_cards`](Self::deal_initial_cards).
    ///
    /// # Errors
    ///
    /// Returns an error, with no state changed, when the game is not
    /// awaiting a bet, the amount is zero, or the chips cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.player.bankroll.stake(amount) {
            return Err(BetError::InsufficientFunds);
        }
        self.base_bet = amount;

        for i in 0..self.ai_players.len() {
            let ceiling = (self.ai_players[i].bankroll.chips() / 2).max(1);
            let roll = self.rng.random_range(1..=ceiling);
            if self.ai_players[i].bankroll.stake(roll) {
                debug!(ai = self.ai_players[i].nickname(), bet = roll, "AI places bet");
            } else {
                debug!(ai = self.ai_players[i].nickname(), "AI sits the round out");
            }
        }

        self.state = RoundState::Dealing;
        self.emit(GameEvent::ChipsChanged);
        Ok(())
    }

    /// Deals two cards each to the player, the dealer, and every AI
    /// opponent, in that fixed order, clearing all hands first.
    ///
    /// Emits [`GameEvent::CardsDealt`], then routes the round: a dealt
    /// player natural is settled against the dealer on the spot and the
    /// player's turn is skipped; a dealer ace upcard opens the insurance
    /// sub-phase; otherwise play passes to the player (or straight to the
    /// AI turns when the natural already settled).
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed for this round.
    pub fn deal_initial_cards(&mut self) -> Result<(), PhaseError> {
        if self.state != RoundState::Dealing {
            return Err(PhaseError::InvalidState);
        }

        self.player.clear_hands();
        self.player.split_bet = 0;
        self.dealer.hand.clear();
        for ai in &mut self.ai_players {
            ai.hand.clear();
        }
        self.main_settled = None;
        self.active_hand = HandSlot::Main;

        for _ in 0..2 {
            let card = self.draw_card();
            self.player.hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw_card();
            self.dealer.hand.add_card(card);
        }
        for i in 0..self.ai_players.len() {
            for _ in 0..2 {
                let card = self.draw_card();
                self.ai_players[i].hand.add_card(card);
            }
        }

        self.emit(GameEvent::CardsDealt);

        if self.player.hand.is_blackjack() {
            self.settle_natural();
        }

        if self.dealer.upcard().is_some_and(|c| c.is_ace()) {
            self.state = RoundState::Insurance;
        } else if self.main_settled.is_some() {
            self.state = RoundState::AiTurns;
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    /// A dealt natural settles against the dealer at once: 2x the bet
    /// unless the dealer also holds one, which pushes the stake back.
    fn settle_natural(&mut self) {
        let score = self.player.hand.score();
        let outcome = settle::outcome(
            score,
            true,
            self.dealer.hand.score(),
            self.dealer.hand.is_blackjack(),
        );
        let bet = self.player.bankroll.bet();
        let payout = settle::payout(outcome, bet);

        self.player.bankroll.credit(payout);
        self.player.stats.record_round_played();
        self.player.stats.record_outcome(outcome);
        self.main_settled = Some(HandSettlement {
            outcome,
            bet,
            payout,
            score: score.effective(),
        });

        debug!(payout, "player dealt a natural");
        self.emit(GameEvent::ChipsChanged);
    }
}
