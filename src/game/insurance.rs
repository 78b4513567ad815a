use tracing::debug;

use crate::error::InsuranceError;
use crate::events::GameEvent;
use crate::policy;

use super::{Game, RoundState};

impl Game {
    /// Returns whether the insurance decision is currently open.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == RoundState::Insurance
    }

    /// Takes insurance for half the player's bet, then resolves the
    /// sub-phase.
    ///
    /// Returns whether the dealer held a blackjack; if so the round is over
    /// and the game is back to awaiting a bet.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state changed, when insurance is not on
    /// offer or the chips cannot cover half the bet.
    pub fn take_insurance(&mut self) -> Result<bool, InsuranceError> {
        if self.state != RoundState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        let amount = self.base_bet / 2;
        if !self.player.bankroll.stake_insurance(amount) {
            return Err(InsuranceError::InsufficientFunds);
        }
        debug!(amount, "player takes insurance");

        Ok(self.resolve_insurance())
    }

    /// Declines insurance for the player, then resolves the sub-phase.
    ///
    /// Returns whether the dealer held a blackjack, as
    /// [`take_insurance`](Self::take_insurance) does.
    ///
    /// # Errors
    ///
    /// Returns an error when insurance is not on offer.
    pub fn decline_insurance(&mut self) -> Result<bool, InsuranceError> {
        if self.state != RoundState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        Ok(self.resolve_insurance())
    }

    /// Runs the AI insurance decisions, pays out against a dealer
    /// blackjack, and routes the round onward.
    ///
    /// Insurance winners are paid 2x their stake; every insurance bet is
    /// then reset, whatever happened. A dealer blackjack ends the round on
    /// the spot: all round bets are cleared and the game returns to the
    /// betting phase (a player natural was already pushed at the deal).
    fn resolve_insurance(&mut self) -> bool {
        for i in 0..self.ai_players.len() {
            let half = self.ai_players[i].bankroll.bet() / 2;
            if !self.ai_players[i].bankroll.can_cover(half) {
                continue;
            }
            if policy::takes_insurance(&mut self.rng) && self.ai_players[i].bankroll.stake_insurance(half) {
                debug!(ai = self.ai_players[i].nickname(), amount = half, "AI takes insurance");
            }
        }

        let dealer_blackjack = self.dealer.hand.is_blackjack();

        if dealer_blackjack {
            let payout = 2 * self.player.bankroll.insurance();
            self.player.bankroll.credit(payout);
            for ai in &mut self.ai_players {
                let payout = 2 * ai.bankroll.insurance();
                ai.bankroll.credit(payout);
            }
            debug!("dealer has a blackjack; insurance pays out");
        }

        self.player.bankroll.clear_insurance();
        for ai in &mut self.ai_players {
            ai.bankroll.clear_insurance();
        }

        if dealer_blackjack {
            self.player.bankroll.clear_bet();
            self.player.split_bet = 0;
            for ai in &mut self.ai_players {
                ai.bankroll.clear_bet();
            }
            self.state = if self.player.bankroll.chips() == 0 {
                RoundState::GameOver
            } else {
                RoundState::AwaitingBet
            };
        } else if self.main_settled.is_some() {
            self.state = RoundState::AiTurns;
        } else {
            self.state = RoundState::PlayerTurn;
        }

        self.emit(GameEvent::ChipsChanged);
        dealer_blackjack
    }
}
