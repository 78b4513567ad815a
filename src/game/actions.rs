use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, HandSlot, RoundState};

impl Game {
    fn ensure_player_turn(&self, slot: HandSlot) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if slot != self.active_hand {
            return Err(ActionError::WrongHand);
        }
        Ok(())
    }

    /// Ends the active hand: a finished main hand passes play to the split
    /// hand when one exists, otherwise to the AI opponents.
    fn advance_after_hand(&mut self) {
        if self.active_hand == HandSlot::Main && self.player.has_split() {
            self.active_hand = HandSlot::Split;
        } else {
            self.state = RoundState::AiTurns;
        }
    }

    /// Player action: draw one card into the targeted hand.
    ///
    /// The target must be the active hand. Busting ends the hand's turn
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state changed, when it is not the player's
    /// turn or `slot` is not the active hand.
    pub fn player_hit(&mut self, slot: HandSlot) -> Result<Card, ActionError> {
        self.ensure_player_turn(slot)?;

        let card = self.draw_card();
        self.player.hand_mut(slot).add_card(card);

        if self.player.hand(slot).score().is_bust() {
            debug!(?slot, "player busts");
            self.advance_after_hand();
        }

        Ok(card)
    }

    /// Player action: end the active hand's turn.
    ///
    /// # Errors
    ///
    /// Returns an error when it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn(self.active_hand)?;
        self.advance_after_hand();
        Ok(())
    }

    /// Player action: double down on the main hand.
    ///
    /// Only available as the very first action on a two-card hand, never
    /// after a split. Stakes the bet a second time, draws exactly one card,
    /// and ends the hand's turn.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state changed, when it is not the player's
    /// turn, the hand is not eligible, or the chips cannot cover the stake.
    pub fn player_double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn(self.active_hand)?;

        if self.player.has_split() || self.player.hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let amount = self.player.bankroll.bet();
        if !self.player.bankroll.stake(amount) {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.draw_card();
        self.player.hand.add_card(card);
        debug!(bet = self.player.bankroll.bet(), "player doubles down");

        self.advance_after_hand();
        Ok(card)
    }

    /// Player action: split the main hand.
    ///
    /// Only available as the very first action on a two-card pair of equal
    /// rank, once per round. The second card moves into the split hand, one
    /// fresh card is drawn into each hand, and the split hand carries its
    /// own stake equal to the original bet. Doubling down is no longer
    /// offered afterwards. The main hand is played to completion before the
    /// split hand activates.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state changed, when it is not the player's
    /// turn, the hand is not a splittable pair, or the chips cannot cover
    /// the second stake.
    pub fn player_split(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn(self.active_hand)?;

        if self.player.has_split() || !self.player.hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }

        let bet = self.player.bankroll.bet();
        if !self.player.bankroll.debit(bet) {
            return Err(ActionError::InsufficientFunds);
        }
        self.player.split_bet = bet;

        // is_pair() guarantees exactly two cards.
        let moved = self
            .player
            .hand
            .take_split_card()
            .expect("a splittable hand holds two cards");
        self.player.split_hand.add_card(moved);

        let card = self.draw_card();
        self.player.hand.add_card(card);
        let card = self.draw_card();
        self.player.split_hand.add_card(card);

        debug!(bet, "player splits");
        Ok(())
    }
}
