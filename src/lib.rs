//! A multiplayer blackjack rules engine.
//!
//! The crate provides a [`Game`] type that drives a full round: betting,
//! dealing, the insurance sub-phase, player actions (hit, stand, double
//! down, split), scripted AI opponent turns, the dealer's fixed rule, and
//! multi-party settlement with persistent player statistics. Presentation
//! layers drive the round through the command methods and observe it
//! through [`GameEvent`] notifications and snapshot queries; they never
//! mutate hands or chips directly.
//!
//! # Example
//!
//! ```
//! use ventuno::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! game.place_bet(50).unwrap();
//! game.deal_initial_cards().unwrap();
//! # let _ = game.state();
//! ```

pub mod card;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod policy;
pub mod result;
pub mod settle;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, ConfigError, InsuranceError, PhaseError};
pub use events::{AiSnapshot, DealerSnapshot, EventSink, GameEvent, PlayerSnapshot, TableSnapshot};
pub use game::{Game, HandSlot, RoundState};
pub use hand::{Hand, Score};
pub use options::{GameConfig, MAX_AI_PLAYERS, MAX_DECKS, MIN_DECKS};
pub use participant::{AiPlayer, Bankroll, Dealer, Player, PlayerStats, WINS_PER_LEVEL};
pub use policy::AiMove;
pub use result::{AiSettlement, HandSettlement, Outcome, RoundSummary};
pub use shoe::Shoe;
