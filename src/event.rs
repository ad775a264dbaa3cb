//! State-change events recorded for the rendering side.

use crate::card::Card;
use crate::result::Outcome;
use crate::seat::SeatId;

/// A change to the round, in the order it happened.
///
/// Cards are reported as dealt, so a face-down card arrives face down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A card was dealt during the initial deal.
    CardDealt {
        /// Receiving seat.
        seat: SeatId,
        /// The card.
        card: Card,
    },
    /// A seat hit and received a card.
    Hit {
        /// Receiving seat.
        seat: SeatId,
        /// The card.
        card: Card,
    },
    /// A seat stood, by choice, on 21 or at the rotation limit.
    Stood {
        /// The seat.
        seat: SeatId,
    },
    /// A seat went over 21.
    Busted {
        /// The seat.
        seat: SeatId,
    },
    /// The turn moved to another seat.
    TurnPassed {
        /// Seat now holding the turn.
        to: SeatId,
    },
    /// The rotation limit closed the round.
    RotationClosed {
        /// Number of completed rotations.
        rotation: u32,
    },
    /// A seat's face-down cards were turned up.
    Revealed {
        /// The seat.
        seat: SeatId,
    },
    /// The round was resolved.
    RoundOver(Outcome),
}
