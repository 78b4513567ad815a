//! Error types for game operations.

use thiserror::Error;

use crate::options::{MAX_AI_PLAYERS, MAX_DECKS, MIN_DECKS};

/// Errors that can occur when constructing a game.
///
/// These are fatal: a game cannot be built from an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count outside the allowed range.
    #[error("deck count must be between {MIN_DECKS} and {MAX_DECKS}, got {0}")]
    InvalidDeckCount(u8),
    /// More AI opponents requested than the table seats.
    #[error("at most {MAX_AI_PLAYERS} AI players are supported, got {0}")]
    TooManyAiPlayers(u8),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The game is not accepting bets.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The player cannot cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
///
/// An ineligible action fails without mutating any game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The targeted hand is not the active hand.
    #[error("that hand is not in play")]
    WrongHand,
    /// Doubling down is only allowed as the first action on a two-card hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Splitting requires a two-card pair and no earlier split.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The player cannot cover the extra stake.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the insurance sub-phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not currently offered.
    #[error("invalid game state for insurance")]
    InvalidState,
    /// The player cannot cover the insurance stake.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Error raised when a round phase is driven out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// The operation does not match the current round state.
    #[error("invalid game state for this phase")]
    InvalidState,
}
