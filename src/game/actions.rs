use rand::RngCore;

use crate::error::ActionError;
use crate::seat::SeatId;

use super::{Game, Round, RoundState};

impl Round {
    /// Checks that a seat exists, is playing and holds the turn.
    fn ensure_can_act(&self, seat: SeatId) -> Result<(), ActionError> {
        let target = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;

        if !target.is_playing() {
            return Err(ActionError::SeatNotPlaying);
        }

        if self.current_turn != Some(seat) {
            return Err(ActionError::NotPlayersTurn);
        }

        Ok(())
    }
}

impl<R: RngCore> Game<R> {
    /// Plays computer seats while one of them holds the turn.
    pub(super) fn drive_opponents(&self, round: &mut Round) {
        if !self.options.auto_play_opponents {
            return;
        }

        let mut rng = self.rng.lock();
        while let Some(seat) = round.current_opponent() {
            round.opponent_turn(seat, &self.options.policy, &mut *rng);
        }
    }

    /// Seat action: Hit (draw a card).
    ///
    /// Busting or reaching 21 ends the seat's turn; computer seats then play
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt, the seat does not exist,
    /// the seat has already stood or busted, it is not the seat's turn, or the
    /// deck is empty. A rejected hit leaves the round unchanged.
    pub fn request_hit(&self, seat: SeatId) -> Result<RoundState, ActionError> {
        let mut guard = self.round.lock();
        let round = guard.as_mut().ok_or(ActionError::NoRound)?;
        round.ensure_can_act(seat)?;

        round.hit(seat)?;

        if round.turn_over_after_action(seat) {
            round.end_turn();
        }
        self.drive_opponents(round);

        Ok(round.state())
    }

    /// Seat action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt, the seat does not exist,
    /// the seat has already stood or busted, or it is not the seat's turn.
    /// A rejected stand leaves the round unchanged.
    pub fn request_stand(&self, seat: SeatId) -> Result<RoundState, ActionError> {
        let mut guard = self.round.lock();
        let round = guard.as_mut().ok_or(ActionError::NoRound)?;
        round.ensure_can_act(seat)?;

        round.stand(seat);
        round.end_turn();
        self.drive_opponents(round);

        Ok(round.state())
    }

    /// Plays a single decision for the computer seat holding the turn.
    ///
    /// Meant for tables with `auto_play_opponents` disabled, where the caller
    /// paces the opponents itself. An opponent that wants a card from an
    /// empty deck stands instead.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or no computer seat holds
    /// the turn.
    pub fn play_opponent_turn(&self) -> Result<RoundState, ActionError> {
        let mut guard = self.round.lock();
        let round = guard.as_mut().ok_or(ActionError::NoRound)?;
        let seat = round
            .current_opponent()
            .ok_or(ActionError::NotPlayersTurn)?;

        round.opponent_turn(seat, &self.options.policy, &mut *self.rng.lock());

        Ok(round.state())
    }
}
