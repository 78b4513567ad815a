//! The round orchestrator.
//!
//! [`Game`] owns the shoe, the player, the dealer, and the AI opponents,
//! and is the only code that mutates them. It drives the round state
//! machine (bet, deal, insurance, player actions, AI turns, dealer turn,
//! settlement) and publishes [`GameEvent`] notifications at each observable
//! transition. All randomness flows through one seeded RNG, so a fixed seed
//! reproduces a full session.

use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ConfigError;
use crate::events::{AiSnapshot, DealerSnapshot, EventSink, GameEvent, PlayerSnapshot, TableSnapshot};
use crate::options::{GameConfig, MAX_AI_PLAYERS};
use crate::participant::{AiPlayer, Dealer, Player};
use crate::result::HandSettlement;
use crate::shoe::Shoe;

mod actions;
mod ai;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{HandSlot, RoundState};

/// A blackjack table: one human player, a dealer, and 0-3 AI opponents
/// sharing a shoe.
pub struct Game {
    config: GameConfig,
    pub(crate) shoe: Shoe,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) player: Player,
    pub(crate) dealer: Dealer,
    pub(crate) ai_players: Vec<AiPlayer>,
    /// The bet the player opened the round with. Doubling and splitting
    /// stake this amount again.
    pub(crate) base_bet: usize,
    pub(crate) state: RoundState,
    pub(crate) active_hand: HandSlot,
    /// Settlement of a natural dealt to the player, recorded at the deal so
    /// `settle_round` does not score the hand twice.
    pub(crate) main_settled: Option<HandSettlement>,
    subscribers: Vec<EventSink>,
}

impl Game {
    /// Creates a table from a validated configuration and an RNG seed.
    ///
    /// # Example
    ///
    /// ```
    /// use ventuno::{Game, GameConfig};
    ///
    /// let game = Game::new(GameConfig::default(), 42).unwrap();
    /// assert_eq!(game.shoe().cards_remaining(), 6 * 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the deck count is outside `[4, 8]` or
    /// more than three AI players are requested.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        if config.ai_players > MAX_AI_PLAYERS {
            return Err(ConfigError::TooManyAiPlayers(config.ai_players));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(config.decks, &mut rng)?;

        Ok(Self {
            config,
            shoe,
            rng,
            player: Player::new(config.starting_chips),
            dealer: Dealer::new(),
            ai_players: Self::fresh_ai_players(&config),
            base_bet: 0,
            state: RoundState::AwaitingBet,
            active_hand: HandSlot::Main,
            main_settled: None,
            subscribers: Vec::new(),
        })
    }

    fn fresh_ai_players(config: &GameConfig) -> Vec<AiPlayer> {
        (1..=config.ai_players)
            .map(|n| AiPlayer::new(format!("AI{n}"), config.starting_chips))
            .collect()
    }

    pub(crate) fn draw_card(&mut self) -> Card {
        self.shoe.draw(&mut self.rng)
    }

    pub(crate) fn emit(&mut self, make: fn(TableSnapshot) -> GameEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        let event = make(TableSnapshot::of(self));
        for sink in &mut self.subscribers {
            sink(&event);
        }
    }

    /// Registers a notification subscriber. Every registered sink receives
    /// every subsequent [`GameEvent`].
    pub fn subscribe(&mut self, sink: EventSink) {
        self.subscribers.push(sink);
    }

    /// The current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The player hand currently awaiting actions. Only meaningful in
    /// [`RoundState::PlayerTurn`].
    #[must_use]
    pub const fn active_hand(&self) -> HandSlot {
        self.active_hand
    }

    /// The bet the player opened the round with.
    #[must_use]
    pub const fn base_bet(&self) -> usize {
        self.base_bet
    }

    /// The table configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// The AI opponents, in seating order.
    #[must_use]
    pub fn ai_players(&self) -> &[AiPlayer] {
        &self.ai_players
    }

    /// The shared shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Mutable access to the shoe, for deterministic card setups.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Snapshot of the player, as carried by notifications.
    #[must_use]
    pub fn player_state(&self) -> PlayerSnapshot {
        PlayerSnapshot::of(&self.player)
    }

    /// Snapshot of the dealer.
    #[must_use]
    pub fn dealer_state(&self) -> DealerSnapshot {
        DealerSnapshot::of(&self.dealer)
    }

    /// Snapshots of every AI opponent, in seating order.
    #[must_use]
    pub fn ai_states(&self) -> Vec<AiSnapshot> {
        self.ai_players.iter().map(AiSnapshot::of).collect()
    }

    /// Restarts the round group: the player comes back with fresh chips and
    /// fresh statistics, the AI opponents are rebuilt with their nicknames
    /// and fresh stacks, and the shoe keeps its current contents. Accepted
    /// in any state.
    pub fn restart(&mut self) {
        self.player = Player::new(self.config.starting_chips);
        self.ai_players = Self::fresh_ai_players(&self.config);
        self.base_bet = 0;
        self.state = RoundState::AwaitingBet;
        self.active_hand = HandSlot::Main;
        self.main_settled = None;
        self.dealer.hand.clear();
        self.emit(GameEvent::ChipsChanged);
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("active_hand", &self.active_hand)
            .field("base_bet", &self.base_bet)
            .field("player", &self.player)
            .field("dealer", &self.dealer)
            .field("ai_players", &self.ai_players)
            .field("cards_remaining", &self.shoe.cards_remaining())
            .finish_non_exhaustive()
    }
}
