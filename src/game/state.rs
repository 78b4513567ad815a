//! Round state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// Bets are in; waiting for the initial deal.
    Dealing,
    /// The dealer shows an ace; waiting for the insurance decision.
    Insurance,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// AI opponents act next.
    AiTurns,
    /// The dealer plays out its hand.
    DealerTurn,
    /// The round can be settled.
    Settlement,
    /// The player is out of chips. Re-enterable via `restart`.
    GameOver,
}

/// Which of the player's hands an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandSlot {
    /// The original hand.
    Main,
    /// The hand created by a split.
    Split,
}
