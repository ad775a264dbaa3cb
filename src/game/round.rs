//! The round record and its snapshots.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DeckError};
use crate::event::GameEvent;
use crate::options::{GameOptions, SeatCount};
use crate::policy::{Decision, OpponentPolicy};
use crate::result::Outcome;
use crate::seat::{PLAYER_SEAT, Seat, SeatId, SeatKind, SeatStatus};

/// One deal-to-resolution cycle. Replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct Round {
    pub(super) deck: Deck,
    pub(super) seats: Vec<Seat>,
    pub(super) current_turn: Option<SeatId>,
    pub(super) turns_completed: u32,
    pub(super) outcome: Option<Outcome>,
    pub(super) events: Vec<GameEvent>,
    hide_opponent_cards: bool,
    pub(super) max_rotations: u32,
}

/// An owned snapshot of a round for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Seats in turn order. Index 0 is the player.
    pub seats: Vec<Seat>,
    /// Seat holding the turn, `None` once the round is over.
    pub current_turn: Option<SeatId>,
    /// Seat-turns taken so far.
    pub turns_completed: u32,
    /// Whether the round has been resolved.
    pub round_over: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// The outcome once the round is over.
    pub outcome: Option<Outcome>,
}

impl RoundState {
    /// Returns a seat by index.
    #[must_use]
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id)
    }

    /// Returns the player's seat.
    #[must_use]
    pub fn player(&self) -> Option<&Seat> {
        self.seats.get(PLAYER_SEAT)
    }

    /// Returns the number of cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.seats.iter().map(|s| s.hand().len()).sum()
    }
}

impl Round {
    /// Seats the table and deals two cards to each seat, one seat at a time.
    pub(super) fn deal(
        seat_count: SeatCount,
        deck: Deck,
        options: &GameOptions,
    ) -> Result<Self, DealError> {
        let count = seat_count.count();
        if deck.len() < count * 2 {
            return Err(DealError::NotEnoughCards);
        }

        let seats = (0..count)
            .map(|id| {
                let kind = if id == PLAYER_SEAT {
                    SeatKind::Player
                } else {
                    SeatKind::Opponent
                };
                Seat::new(id, kind)
            })
            .collect();

        let mut round = Self {
            deck,
            seats,
            current_turn: None,
            turns_completed: 0,
            outcome: None,
            events: Vec::new(),
            hide_opponent_cards: options.hide_opponent_cards,
            max_rotations: options.max_rotations,
        };

        for seat in 0..count {
            for _ in 0..2 {
                let card = round.deck.draw_card()?;
                round.give(seat, card, true);
            }
        }

        log::debug!(
            "dealt {count} seat(s), {} card(s) left",
            round.deck.len()
        );

        round.current_turn = round.next_playing_from(PLAYER_SEAT);
        if let Some(to) = round.current_turn {
            round.events.push(GameEvent::TurnPassed { to });
        }
        round.settle();

        Ok(round)
    }

    /// Places a card in a seat's hand and records the resulting changes.
    fn give(&mut self, seat: SeatId, card: Card, dealt: bool) {
        let hidden = self.hide_opponent_cards && self.seats[seat].is_opponent();
        let card = if hidden { card.face_down() } else { card };

        let before = self.seats[seat].status();
        self.seats[seat].take_card(card);

        self.events.push(if dealt {
            GameEvent::CardDealt { seat, card }
        } else {
            GameEvent::Hit { seat, card }
        });
        self.record_status_change(seat, before);
    }

    fn record_status_change(&mut self, seat: SeatId, before: SeatStatus) {
        let after = self.seats[seat].status();
        if before == after {
            return;
        }
        match after {
            SeatStatus::Stood => self.events.push(GameEvent::Stood { seat }),
            SeatStatus::Busted => self.events.push(GameEvent::Busted { seat }),
            SeatStatus::Playing => {}
        }
    }

    /// Draws one card into a seat.
    pub(super) fn hit(&mut self, seat: SeatId) -> Result<Card, DeckError> {
        let card = self.deck.draw_card()?;
        log::trace!("seat {seat} hits {:?} of {:?}", card.rank, card.suit);
        self.give(seat, card, false);
        Ok(card)
    }

    /// Stands a seat.
    pub(super) fn stand(&mut self, seat: SeatId) {
        let before = self.seats[seat].status();
        self.seats[seat].stand();
        log::trace!("seat {seat} stands on {}", self.seats[seat].value());
        self.record_status_change(seat, before);
    }

    /// Returns whether the seat's turn ends after it acted.
    ///
    /// The player keeps the turn until terminal; opponents get one decision.
    pub(super) fn turn_over_after_action(&self, seat: SeatId) -> bool {
        let seat = &self.seats[seat];
        seat.status().is_terminal() || seat.is_opponent()
    }

    /// Returns the opponent seat holding the turn, if any.
    pub(super) fn current_opponent(&self) -> Option<SeatId> {
        self.current_turn
            .filter(|&seat| self.seats[seat].is_opponent() && self.seats[seat].is_playing())
    }

    /// Plays one decision for the opponent holding the turn.
    ///
    /// An opponent that wants a card from an empty deck stands instead, so
    /// the round always moves on.
    pub(super) fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        seat: SeatId,
        policy: &OpponentPolicy,
        rng: &mut R,
    ) -> Decision {
        let mut decision = policy.decide_with(self.seats[seat].value(), rng);
        if decision == Decision::Hit && self.hit(seat).is_err() {
            log::debug!("deck is empty, seat {seat} stands");
            decision = Decision::Stand;
        }
        if decision == Decision::Stand {
            self.stand(seat);
        }
        self.end_turn();
        decision
    }

    /// Returns whether the round has been resolved.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the resolved outcome.
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns the seat holding the turn.
    #[must_use]
    pub const fn current_turn(&self) -> Option<SeatId> {
        self.current_turn
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Takes a snapshot of the round.
    #[must_use]
    pub fn state(&self) -> RoundState {
        RoundState {
            seats: self.seats.clone(),
            current_turn: self.current_turn,
            turns_completed: self.turns_completed,
            round_over: self.is_over(),
            cards_remaining: self.deck.len(),
            outcome: self.outcome.clone(),
        }
    }

    /// Removes and returns the recorded events.
    pub(super) fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}
