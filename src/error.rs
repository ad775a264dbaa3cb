//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot cover the initial two cards per seat.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The deck ran out while computer seats were playing.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur during seat actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round has been dealt yet.
    #[error("no round in progress")]
    NoRound,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Seat has already stood or busted.
    #[error("seat is not playing")]
    SeatNotPlaying,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotPlayersTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::EmptyDeck => Self::EmptyDeck,
        }
    }
}
