//! The 52-card deck owned by a round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. Draws take from the top (the end of the vector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52 cards in creation order, unshuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a prepared deck whose draws return `draws` in order.
    ///
    /// The deck is not shuffled and need not hold all 52 cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_draws(&[
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Spades, Rank::King),
    /// ]);
    /// assert_eq!(deck.draw_card().unwrap().rank, Rank::Ace);
    /// assert_eq!(deck.draw_card().unwrap().rank, Rank::King);
    /// assert!(deck.draw_card().is_err());
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Randomly permutes the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] when no cards remain.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
