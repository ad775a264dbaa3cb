//! A dealer-less blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds for a single player,
//! or for the player against two computer opponents: dealing, hit/stand
//! turns, opponent decisions and outcome resolution. Rendering is left to the
//! caller, which reads [`RoundState`] snapshots and drains [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, PLAYER_SEAT, SeatCount};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let mut state = game.new_round(SeatCount::Three).unwrap();
//!
//! while state.current_turn == Some(PLAYER_SEAT) {
//!     state = if state.player().is_some_and(|seat| seat.value() < 17) {
//!         game.request_hit(PLAYER_SEAT).unwrap()
//!     } else {
//!         game.request_stand(PLAYER_SEAT).unwrap()
//!     };
//! }
//!
//! assert!(state.round_over);
//! assert!(game.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod seat;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError};
pub use event::GameEvent;
pub use game::{Game, RoundState, resolve};
pub use hand::{Hand, evaluate};
pub use options::{GameOptions, SeatCount};
pub use policy::{Decision, OpponentPolicy};
pub use result::{Outcome, OutcomeKind};
pub use seat::{PLAYER_SEAT, Seat, SeatId, SeatKind, SeatStatus};
