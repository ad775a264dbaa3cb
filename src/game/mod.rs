//! Game engine and round management.

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::deck::Deck;
use crate::error::DealError;
use crate::event::GameEvent;
use crate::options::{GameOptions, SeatCount};
use crate::result::Outcome;
use crate::seat::SeatId;

mod actions;
mod resolver;
mod round;
mod scheduler;

pub use resolver::resolve;
pub use round::RoundState;
use round::Round;

/// A blackjack table for the player and up to two computer opponents.
///
/// The game owns the current round and the random source. Every seat
/// mutation goes through the game, one at a time. Use [`GameOptions`] to
/// configure opponent behaviour and round length.
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// The current round, if one has been dealt.
    round: Mutex<Option<Round>>,
    /// Random source for shuffles and opponent decisions.
    rng: Mutex<R>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, SeatCount};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let state = game.new_round(SeatCount::One).unwrap();
    /// assert_eq!(state.cards_remaining, 50);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    #[must_use]
    pub const fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            round: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// On success any previous round is replaced. Computer seats that hold the
    /// turn after the deal play immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt. The previous round is
    /// then kept.
    pub fn new_round(&self, seats: SeatCount) -> Result<RoundState, DealError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut *self.rng.lock());
        self.new_round_with_deck(seats, deck)
    }

    /// Deals a new round from a prepared deck without shuffling it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover two cards per seat. The
    /// previous round is then kept.
    pub fn new_round_with_deck(
        &self,
        seats: SeatCount,
        deck: Deck,
    ) -> Result<RoundState, DealError> {
        let mut round = Round::deal(seats, deck, &self.options)?;
        self.drive_opponents(&mut round);

        let state = round.state();
        self.round.replace(Some(round));
        Ok(state)
    }

    /// Discards the current round and deals a new one.
    ///
    /// # Errors
    ///
    /// Returns an error if the new round cannot be dealt.
    pub fn reset_round(&self, seats: SeatCount) -> Result<RoundState, DealError> {
        if self.round.replace(None).is_some() {
            log::debug!("discarding current round");
        }
        self.new_round(seats)
    }

    /// Returns the resolved outcome once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round
            .lock()
            .as_ref()
            .and_then(|round| round.outcome().cloned())
    }

    /// Returns a snapshot of the current round.
    pub fn state(&self) -> Option<RoundState> {
        self.round.lock().as_ref().map(Round::state)
    }

    /// Returns the seat holding the turn.
    ///
    /// Returns `None` before the first deal and after the round is over.
    pub fn current_turn(&self) -> Option<SeatId> {
        self.round.lock().as_ref().and_then(Round::current_turn)
    }

    /// Returns whether the current round is over.
    pub fn is_round_over(&self) -> bool {
        self.round.lock().as_ref().is_some_and(Round::is_over)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.round
            .lock()
            .as_ref()
            .map_or(0, Round::cards_remaining)
    }

    /// Removes and returns the events recorded since the last call.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        self.round
            .lock()
            .as_mut()
            .map(Round::drain_events)
            .unwrap_or_default()
    }
}
