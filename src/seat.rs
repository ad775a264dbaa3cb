//! Seats and their per-round status.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;

/// Index of a seat at the table. Seat 0 is always the human player.
pub type SeatId = usize;

/// The human player's seat.
pub const PLAYER_SEAT: SeatId = 0;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatKind {
    /// The human-controlled player.
    Player,
    /// A computer-controlled opponent.
    Opponent,
}

/// Seat status within a round.
///
/// Transitions are monotonic: `Playing` moves to `Stood` or `Busted` and never
/// back until the round is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    /// Seat can still hit or stand.
    Playing,
    /// Seat has stopped taking cards.
    Stood,
    /// Seat went over 21.
    Busted,
}

impl SeatStatus {
    /// Returns whether no further action is possible this round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// One participant slot at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    kind: SeatKind,
    hand: Hand,
    status: SeatStatus,
}

impl Seat {
    /// Creates an empty, playing seat.
    #[must_use]
    pub const fn new(id: SeatId, kind: SeatKind) -> Self {
        Self {
            id,
            kind,
            hand: Hand::new(),
            status: SeatStatus::Playing,
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn id(&self) -> SeatId {
        self.id
    }

    /// Returns who controls the seat.
    #[must_use]
    pub const fn kind(&self) -> SeatKind {
        self.kind
    }

    /// Returns whether the seat is computer-controlled.
    #[must_use]
    pub const fn is_opponent(&self) -> bool {
        matches!(self.kind, SeatKind::Opponent)
    }

    /// Returns the seat's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the seat status.
    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        self.status
    }

    /// Returns whether the seat can still act.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.status, SeatStatus::Playing)
    }

    /// Returns the hand value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Adds a card and updates the status.
    ///
    /// Over 21 busts the seat. Exactly 21 stands it, since no card can
    /// improve the hand.
    pub(crate) fn take_card(&mut self, card: Card) {
        self.hand.add_card(card);

        if !self.is_playing() {
            return;
        }

        let value = self.hand.value();
        if value > 21 {
            self.status = SeatStatus::Busted;
        } else if value == 21 {
            self.status = SeatStatus::Stood;
        }
    }

    /// Stands the seat if it is still playing.
    pub(crate) const fn stand(&mut self) {
        if self.is_playing() {
            self.status = SeatStatus::Stood;
        }
    }

    /// Reveals every card in the hand. Returns whether anything was hidden.
    pub(crate) fn reveal(&mut self) -> bool {
        let hidden = self.hand.has_hidden();
        self.hand.reveal();
        hidden
    }
}

/// Formats as `"Hand: King of Hearts, 5 of Spades (Value: 15)"`.
impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: {} (Value: {})", self.hand, self.value())
    }
}
