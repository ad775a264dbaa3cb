//! Round outcome types.

extern crate alloc;

use alloc::vec::Vec;

use crate::seat::SeatId;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Single seat went over 21.
    Bust,
    /// Single seat reached exactly 21.
    Blackjack,
    /// Single seat stood under 21. No win or loss is judged.
    Stand,
    /// One seat won.
    Win,
    /// Several seats share the best value.
    Tie,
    /// Every seat busted.
    AllBust,
}

/// Resolved result of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// How the round ended.
    pub kind: OutcomeKind,
    /// Winning seats in seat order. Empty for `Bust`, `Stand` and `AllBust`.
    pub winners: Vec<SeatId>,
    /// Final hand value of every seat, indexed by seat.
    pub values: Vec<u8>,
}

impl Outcome {
    /// Returns whether the seat is among the winners.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        self.winners.contains(&seat)
    }

    /// Returns the final value of a seat.
    #[must_use]
    pub fn value_of(&self, seat: SeatId) -> Option<u8> {
        self.values.get(seat).copied()
    }
}
