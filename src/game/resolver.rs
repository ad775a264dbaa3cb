use alloc::vec::Vec;

use crate::event::GameEvent;
use crate::result::{Outcome, OutcomeKind};
use crate::seat::SeatId;

use super::round::Round;

fn seats_at(values: &[u8], target: u8) -> Vec<SeatId> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == target)
        .map(|(seat, _)| seat)
        .collect()
}

/// Resolves final hand values, indexed by seat, into an outcome.
///
/// A single seat is judged on its own: over 21 is a bust, 21 a blackjack,
/// anything else a stand. With several seats, 21s take precedence, then the
/// highest valid hand wins; equal values tie.
///
/// ```
/// use bjtable::{resolve, OutcomeKind};
///
/// let outcome = resolve(&[21, 21, 18]);
/// assert_eq!(outcome.kind, OutcomeKind::Tie);
/// assert_eq!(outcome.winners, vec![0, 1]);
/// ```
#[must_use]
pub fn resolve(values: &[u8]) -> Outcome {
    let (kind, winners) = if let [value] = values {
        match *value {
            v if v > 21 => (OutcomeKind::Bust, Vec::new()),
            21 => (OutcomeKind::Blackjack, alloc::vec![0]),
            _ => (OutcomeKind::Stand, Vec::new()),
        }
    } else {
        let twenty_ones = seats_at(values, 21);
        match twenty_ones.len() {
            0 => match values.iter().copied().filter(|&v| v <= 21).max() {
                None => (OutcomeKind::AllBust, Vec::new()),
                Some(best) => {
                    let winners = seats_at(values, best);
                    let kind = if winners.len() == 1 {
                        OutcomeKind::Win
                    } else {
                        OutcomeKind::Tie
                    };
                    (kind, winners)
                }
            },
            1 => (OutcomeKind::Win, twenty_ones),
            _ => (OutcomeKind::Tie, twenty_ones),
        }
    };

    Outcome {
        kind,
        winners,
        values: values.to_vec(),
    }
}

impl Round {
    /// Resolves the round once no seat is playing.
    ///
    /// This is the only place an outcome is produced; it runs after every
    /// status-changing action and is a no-op while anyone can still act.
    pub(super) fn settle(&mut self) {
        if self.outcome.is_some() || self.seats.iter().any(|s| s.is_playing()) {
            return;
        }

        self.current_turn = None;

        for seat in 0..self.seats.len() {
            if self.seats[seat].reveal() {
                self.events.push(GameEvent::Revealed { seat });
            }
        }

        let values: Vec<u8> = self.seats.iter().map(|s| s.value()).collect();
        let outcome = resolve(&values);
        log::debug!(
            "round over: {:?}, winners {:?}, values {:?}",
            outcome.kind,
            outcome.winners,
            outcome.values
        );

        self.events.push(GameEvent::RoundOver(outcome.clone()));
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_seat_outcomes() {
        assert_eq!(resolve(&[24]).kind, OutcomeKind::Bust);
        assert!(resolve(&[24]).winners.is_empty());

        let blackjack = resolve(&[21]);
        assert_eq!(blackjack.kind, OutcomeKind::Blackjack);
        assert_eq!(blackjack.winners, vec![0]);

        let stand = resolve(&[17]);
        assert_eq!(stand.kind, OutcomeKind::Stand);
        assert_eq!(stand.value_of(0), Some(17));
        assert!(stand.winners.is_empty());
    }

    #[test]
    fn two_twenty_ones_tie() {
        let outcome = resolve(&[21, 21, 18]);
        assert_eq!(outcome.kind, OutcomeKind::Tie);
        assert_eq!(outcome.winners, vec![0, 1]);
    }

    #[test]
    fn single_twenty_one_wins() {
        let outcome = resolve(&[20, 21, 25]);
        assert_eq!(outcome.kind, OutcomeKind::Win);
        assert_eq!(outcome.winners, vec![1]);
    }

    #[test]
    fn all_bust_has_no_winner() {
        let outcome = resolve(&[25, 25, 25]);
        assert_eq!(outcome.kind, OutcomeKind::AllBust);
        assert!(outcome.winners.is_empty());
    }

    #[test]
    fn highest_valid_hand_wins() {
        let outcome = resolve(&[18, 16, 17]);
        assert_eq!(outcome.kind, OutcomeKind::Win);
        assert_eq!(outcome.winners, vec![0]);

        let outcome = resolve(&[22, 16, 19]);
        assert_eq!(outcome.kind, OutcomeKind::Win);
        assert_eq!(outcome.winners, vec![2]);
    }

    #[test]
    fn equal_highest_hands_tie() {
        let outcome = resolve(&[19, 23, 19]);
        assert_eq!(outcome.kind, OutcomeKind::Tie);
        assert_eq!(outcome.winners, vec![0, 2]);
        assert_eq!(outcome.values, vec![19, 23, 19]);
    }
}
