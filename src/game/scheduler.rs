use crate::event::GameEvent;
use crate::seat::SeatId;

use super::round::Round;

impl Round {
    /// Scans the rotation from `start` for the first seat still playing.
    pub(super) fn next_playing_from(&self, start: SeatId) -> Option<SeatId> {
        let count = self.seats.len();
        (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&seat| self.seats[seat].is_playing())
    }

    /// Ends the current seat-turn and passes the turn on.
    ///
    /// Terminal seats are skipped without counting as a turn. Each completed
    /// rotation is checked against the rotation limit, and the round resolves
    /// as soon as nobody is left playing.
    pub(super) fn end_turn(&mut self) {
        let Some(current) = self.current_turn else {
            return;
        };

        self.turns_completed += 1;

        let count = self.seats.len() as u32;
        if count > 1 && self.turns_completed % count == 0 {
            let rotation = self.turns_completed / count;
            if self.max_rotations != 0 && rotation >= self.max_rotations {
                self.close_rotation(rotation);
            }
        }

        self.current_turn = self.next_playing_from(current + 1);
        match self.current_turn {
            Some(to) if to != current => {
                log::trace!("turn passes from seat {current} to seat {to}");
                self.events.push(GameEvent::TurnPassed { to });
            }
            _ => {}
        }

        self.settle();
    }

    /// Stands every seat still playing once the rotation limit is reached.
    fn close_rotation(&mut self, rotation: u32) {
        if !self.seats.iter().any(|s| s.is_playing()) {
            return;
        }

        log::debug!("rotation {rotation} reached the limit, closing the round");

        for seat in 0..self.seats.len() {
            if self.seats[seat].is_playing() {
                self.stand(seat);
            }
        }
        self.events.push(GameEvent::RotationClosed { rotation });
    }
}
