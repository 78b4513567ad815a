//! Typed notifications published to the presentation layer.
//!
//! The engine pushes a [`GameEvent`] to every registered subscriber at each
//! observable transition. Events carry full [`TableSnapshot`]s so a
//! subscriber can re-render without calling back into the engine while the
//! notification is being delivered.

use crate::card::Card;
use crate::game::Game;
use crate::hand::Score;
use crate::participant::{AiPlayer, Dealer, Player, PlayerStats};

/// Snapshot of the human player.
#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    /// Cards in the main hand.
    pub cards: Vec<Card>,
    /// Score of the main hand.
    pub score: Score,
    /// Cards in the split hand; empty when the round had no split.
    pub split_cards: Vec<Card>,
    /// Score of the split hand.
    pub split_score: Score,
    /// Chip balance.
    pub chips: usize,
    /// Stake on the main hand.
    pub bet: usize,
    /// Stake on the split hand.
    pub split_bet: usize,
    /// Insurance stake.
    pub insurance: usize,
    /// Persistent statistics.
    pub stats: PlayerStats,
}

impl PlayerSnapshot {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            cards: player.hand.cards().to_vec(),
            score: player.hand.score(),
            split_cards: player.split_hand.cards().to_vec(),
            split_score: player.split_hand.score(),
            chips: player.bankroll.chips(),
            bet: player.bankroll.bet(),
            split_bet: player.split_bet,
            insurance: player.bankroll.insurance(),
            stats: player.stats,
        }
    }
}

/// Snapshot of the dealer.
///
/// All dealt cards are included; concealing the hole card is up to the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct DealerSnapshot {
    /// Cards in the dealer's hand.
    pub cards: Vec<Card>,
    /// Score of the dealer's hand.
    pub score: Score,
}

impl DealerSnapshot {
    pub(crate) fn of(dealer: &Dealer) -> Self {
        Self {
            cards: dealer.hand.cards().to_vec(),
            score: dealer.hand.score(),
        }
    }
}

/// Snapshot of one AI opponent.
#[derive(Debug, Clone)]
pub struct AiSnapshot {
    /// Display nickname.
    pub nickname: String,
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Score of the hand.
    pub score: Score,
    /// Chip balance.
    pub chips: usize,
    /// Current stake.
    pub bet: usize,
    /// Insurance stake.
    pub insurance: usize,
}

impl AiSnapshot {
    pub(crate) fn of(ai: &AiPlayer) -> Self {
        Self {
            nickname: ai.nickname().to_owned(),
            cards: ai.hand.cards().to_vec(),
            score: ai.hand.score(),
            chips: ai.bankroll.chips(),
            bet: ai.bankroll.bet(),
            insurance: ai.bankroll.insurance(),
        }
    }
}

/// Snapshot of the whole table.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    /// The human player.
    pub player: PlayerSnapshot,
    /// The dealer.
    pub dealer: DealerSnapshot,
    /// Every AI opponent, in seating order.
    pub ai_players: Vec<AiSnapshot>,
}

impl TableSnapshot {
    pub(crate) fn of(game: &Game) -> Self {
        Self {
            player: PlayerSnapshot::of(game.player()),
            dealer: DealerSnapshot::of(game.dealer()),
            ai_players: game.ai_players().iter().map(AiSnapshot::of).collect(),
        }
    }
}

/// A state-change notification.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Initial cards were dealt to everyone.
    CardsDealt(TableSnapshot),
    /// Chip balances changed (bets placed, insurance resolved, round settled).
    ChipsChanged(TableSnapshot),
    /// Every AI opponent finished its turn.
    AiTurnsCompleted(TableSnapshot),
    /// The dealer finished drawing.
    DealerTurnCompleted(TableSnapshot),
}

/// A registered event subscriber.
pub type EventSink = Box<dyn FnMut(&GameEvent)>;
