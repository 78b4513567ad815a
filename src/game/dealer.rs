use tracing::debug;

use crate::card::Card;
use crate::error::PhaseError;
use crate::events::GameEvent;
use crate::result::{AiSettlement, HandSettlement, RoundSummary};
use crate::settle;

use super::{Game, HandSlot, RoundState};

impl Game {
    /// Plays the dealer's hand: draw while the effective total is below 17,
    /// stand at 17 or more, hard or soft. The dealer never doubles, splits,
    /// or takes insurance.
    ///
    /// Returns the cards drawn, emits [`GameEvent::DealerTurnCompleted`],
    /// and readies the round for settlement.
    ///
    /// # Errors
    ///
    /// Returns an error when it is not the dealer's turn.
    pub fn run_dealer_turn(&mut self) -> Result<Vec<Card>, PhaseError> {
        if self.state != RoundState::DealerTurn {
            return Err(PhaseError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.hand.score().effective() < 17 {
            let card = self.draw_card();
            self.dealer.hand.add_card(card);
            drawn.push(card);
        }
        debug!(
            score = self.dealer.hand.score().effective(),
            cards = drawn.len(),
            "dealer turn over"
        );

        self.state = RoundState::Settlement;
        self.emit(GameEvent::DealerTurnCompleted);
        Ok(drawn)
    }

    /// Settles every hand against the dealer and closes the round.
    ///
    /// The player's main hand (unless a dealt natural already settled it at
    /// the deal), the split hand when one exists, and every AI hand are
    /// resolved per the payout rules; chips are credited, the player's
    /// statistics are updated (one `games_played` increment per round, win
    /// or loss or tie per hand), and all bets reset. Emits
    /// [`GameEvent::ChipsChanged`]. The game returns to awaiting a bet, or
    /// ends when the player's chips hit zero.
    ///
    /// # Errors
    ///
    /// Returns an error when the round is not ready to settle.
    pub fn settle_round(&mut self) -> Result<RoundSummary, PhaseError> {
        if self.state != RoundState::Settlement {
            return Err(PhaseError::InvalidState);
        }

        let dealer_score = self.dealer.hand.score();
        let dealer_blackjack = self.dealer.hand.is_blackjack();

        let main = match self.main_settled.take() {
            Some(early) => early,
            None => {
                let settled = self.settle_player_hand(HandSlot::Main);
                self.player.stats.record_round_played();
                settled
            }
        };

        let split = self
            .player
            .has_split()
            .then(|| self.settle_player_hand(HandSlot::Split));

        let mut ai_players = Vec::with_capacity(self.ai_players.len());
        for ai in &mut self.ai_players {
            let score = ai.hand.score();
            let outcome =
                settle::outcome(score, ai.hand.is_blackjack(), dealer_score, dealer_blackjack);
            let bet = ai.bankroll.bet();
            let payout = settle::payout(outcome, bet);
            ai.bankroll.credit(payout);
            ai.bankroll.clear_bet();
            debug!(ai = ai.nickname(), ?outcome, payout, "AI settled");
            ai_players.push(AiSettlement {
                nickname: ai.nickname().to_owned(),
                outcome,
                bet,
                payout,
                score: score.effective(),
            });
        }

        self.player.bankroll.clear_bet();
        self.player.split_bet = 0;

        self.state = if self.player.bankroll.chips() == 0 {
            RoundState::GameOver
        } else {
            RoundState::AwaitingBet
        };
        self.emit(GameEvent::ChipsChanged);

        Ok(RoundSummary {
            main,
            split,
            ai_players,
            dealer_score: dealer_score.effective(),
            dealer_bust: dealer_score.is_bust(),
            dealer_blackjack,
        })
    }

    /// Resolves one of the player's hands: credits the payout and records
    /// exactly one of won, lost, or tied.
    fn settle_player_hand(&mut self, slot: HandSlot) -> HandSettlement {
        let hand = self.player.hand(slot);
        let score = hand.score();
        let outcome = settle::outcome(
            score,
            hand.is_blackjack(),
            self.dealer.hand.score(),
            self.dealer.hand.is_blackjack(),
        );
        let bet = match slot {
            HandSlot::Main => self.player.bankroll.bet(),
            HandSlot::Split => self.player.split_bet,
        };
        let payout = settle::payout(outcome, bet);

        self.player.bankroll.credit(payout);
        self.player.stats.record_outcome(outcome);
        debug!(?slot, ?outcome, payout, "player hand settled");

        HandSettlement {
            outcome,
            bet,
            payout,
            score: score.effective(),
        }
    }
}
