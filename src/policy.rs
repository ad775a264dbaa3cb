//! Decision policy for computer-controlled seats.

use rand::Rng;

/// Number of faces on the die rolled for borderline hands.
pub const ROLL_SIDES: u8 = 13;

/// A seat decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Stop taking cards.
    Stand,
}

/// Hit/stand policy for opponents.
///
/// Hands at or below `always_hit_max` always hit and hands at or above
/// `stand_min` always stand. In between, the seat rolls a 13-sided die and
/// hits when the roll is at most `stand_min - value`, so with the defaults a
/// 16 hits on 4/13, 17 on 3/13, 18 on 2/13 and 19 on 1/13.
///
/// ```
/// use bjtable::{Decision, OpponentPolicy};
///
/// let policy = OpponentPolicy::default();
/// assert_eq!(policy.decide(12, 13), Decision::Hit);
/// assert_eq!(policy.decide(17, 3), Decision::Hit);
/// assert_eq!(policy.decide(17, 4), Decision::Stand);
/// assert_eq!(policy.decide(20, 1), Decision::Stand);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpponentPolicy {
    /// Highest value that always hits.
    pub always_hit_max: u8,
    /// Lowest value that always stands.
    pub stand_min: u8,
}

impl Default for OpponentPolicy {
    fn default() -> Self {
        Self {
            always_hit_max: 15,
            stand_min: 20,
        }
    }
}

impl OpponentPolicy {
    /// Returns the number of winning faces out of [`ROLL_SIDES`] for a hit.
    #[must_use]
    pub const fn hit_chance(&self, value: u8) -> u8 {
        if value <= self.always_hit_max {
            ROLL_SIDES
        } else if value >= self.stand_min {
            0
        } else {
            self.stand_min - value
        }
    }

    /// Decides for a hand value given a roll in `1..=13`.
    #[must_use]
    pub const fn decide(&self, value: u8, roll: u8) -> Decision {
        if roll <= self.hit_chance(value) {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }

    /// Decides for a hand value, rolling with the given RNG.
    ///
    /// The RNG is only consulted for borderline hands.
    pub fn decide_with<R: Rng + ?Sized>(&self, value: u8, rng: &mut R) -> Decision {
        if value <= self.always_hit_max {
            return Decision::Hit;
        }
        if value >= self.stand_min {
            return Decision::Stand;
        }

        let roll = rng.random_range(1..=ROLL_SIDES);
        let decision = self.decide(value, roll);
        log::trace!("opponent at {value} rolled {roll}: {decision:?}");
        decision
    }
}
