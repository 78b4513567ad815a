use tracing::debug;

use crate::error::PhaseError;
use crate::events::GameEvent;
use crate::policy::{self, AiMove};

use super::{Game, RoundState};

impl Game {
    /// Plays every AI opponent's turn, one at a time, in seating order.
    ///
    /// Each move comes from [`policy::choose`]: stand on a natural, double
    /// down on a hard two-card 10 or 11 when affordable, otherwise hit up
    /// to 17. Emits [`GameEvent::AiTurnsCompleted`] and passes play to the
    /// dealer.
    ///
    /// # Errors
    ///
    /// Returns an error when it is not the AI opponents' turn.
    pub fn run_ai_turns(&mut self) -> Result<(), PhaseError> {
        if self.state != RoundState::AiTurns {
            return Err(PhaseError::InvalidState);
        }

        for i in 0..self.ai_players.len() {
            loop {
                let ai = &self.ai_players[i];
                let chosen = policy::choose(&ai.hand, &ai.bankroll);
                match chosen {
                    AiMove::Stand => {
                        let ai = &self.ai_players[i];
                        debug!(ai = ai.nickname(), score = ai.hand.score().effective(), "AI stands");
                        break;
                    }
                    AiMove::Hit => {
                        let card = self.draw_card();
                        self.ai_players[i].hand.add_card(card);
                    }
                    AiMove::DoubleDown => {
                        let amount = self.ai_players[i].bankroll.bet();
                        if self.ai_players[i].bankroll.stake(amount) {
                            let card = self.draw_card();
                            self.ai_players[i].hand.add_card(card);
                            debug!(ai = self.ai_players[i].nickname(), bet = amount * 2, "AI doubles down");
                        }
                        break;
                    }
                }
            }
        }

        self.state = RoundState::DealerTurn;
        self.emit(GameEvent::AiTurnsCompleted);
        Ok(())
    }
}
