//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Evaluates a sequence of cards, returning `(value, is_soft)`.
///
/// Every ace starts at 11 and is demoted to 1 while the total is over 21.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// The cards held by one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// Face-down cards count.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| c.is_face_up())
            .copied()
            .collect();
        evaluate(&visible).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|c| !c.is_face_up())
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Lists the cards, comma separated.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn ace_adjustment() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).value(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace]).value(), 13);
        assert_eq!(hand(&[Rank::Ten, Rank::Nine, Rank::Five]).value(), 24);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(), 14);
        assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Ace]).value(), 21);
        assert!(hand(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Ace]).is_bust());
    }

    #[test]
    fn soft_and_hard_totals() {
        assert!(hand(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!hand(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
        assert!(!hand(&[Rank::Ten, Rank::Six]).is_soft());
    }

    #[test]
    fn value_never_exceeds_21_when_hard_total_fits() {
        for a in Rank::ALL {
            for b in Rank::ALL {
                for c in Rank::ALL {
                    let cards = [a, b, c];
                    let hard: u8 = cards
                        .iter()
                        .map(|r| if r.is_ace() { 1 } else { r.value() })
                        .sum();
                    let value = hand(&cards).value();
                    if hard <= 21 {
                        assert!(value <= 21);
                        assert!(value >= hard);
                    } else {
                        assert_eq!(value, hard);
                    }
                }
            }
        }
    }

    #[test]
    fn valuation_is_idempotent() {
        let h = hand(&[Rank::Ace, Rank::Five, Rank::Ace]);
        let first = h.value();
        assert_eq!(h.value(), first);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn visible_value_skips_face_down_cards() {
        let mut h = Hand::new();
        h.add_card(Card::new(Suit::Hearts, Rank::Nine));
        h.add_card(Card::new(Suit::Spades, Rank::King).face_down());

        assert_eq!(h.value(), 19);
        assert_eq!(h.visible_value(), 9);
        assert!(h.has_hidden());

        h.reveal();
        assert_eq!(h.visible_value(), 19);
        assert!(!h.has_hidden());
    }

    #[test]
    fn hand_lists_its_cards() {
        use alloc::string::ToString;

        assert_eq!(Hand::new().to_string(), "");
        assert_eq!(
            hand(&[Rank::King, Rank::Five]).to_string(),
            "King of Clubs, 5 of Clubs"
        );
    }
}
