//! Game configuration options.

use crate::policy::OpponentPolicy;

/// Number of seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatCount {
    /// The player alone.
    #[default]
    One,
    /// The player and two computer opponents.
    Three,
}

impl SeatCount {
    /// Returns the number of seats.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Three => 3,
        }
    }
}

impl TryFrom<usize> for SeatCount {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            other => Err(other),
        }
    }
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{GameOptions, OpponentPolicy};
///
/// let options = GameOptions::default()
///     .with_hide_opponent_cards(false)
///     .with_max_rotations(0)
///     .with_policy(OpponentPolicy { always_hit_max: 16, stand_min: 19 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether opponent cards are dealt face down until the round ends.
    pub hide_opponent_cards: bool,
    /// Whether computer seats act as soon as they hold the turn.
    ///
    /// When disabled, the caller steps them with `play_opponent_turn`.
    pub auto_play_opponents: bool,
    /// Full rotations after which seats still playing are stood and the
    /// round resolves. 0 to play until every seat stops on its own.
    pub max_rotations: u32,
    /// Decision policy for computer seats.
    pub policy: OpponentPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hide_opponent_cards: true,
            auto_play_opponents: true,
            max_rotations: 1,
            policy: OpponentPolicy::default(),
        }
    }
}

impl GameOptions {
    /// Sets whether opponent cards are dealt face down.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_hide_opponent_cards(false);
    /// assert_eq!(options.hide_opponent_cards, false);
    /// ```
    #[must_use]
    pub const fn with_hide_opponent_cards(mut self, hide: bool) -> Self {
        self.hide_opponent_cards = hide;
        self
    }

    /// Sets whether computer seats act automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_play_opponents(false);
    /// assert_eq!(options.auto_play_opponents, false);
    /// ```
    #[must_use]
    pub const fn with_auto_play_opponents(mut self, auto: bool) -> Self {
        self.auto_play_opponents = auto;
        self
    }

    /// Sets the rotation limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rotations(3);
    /// assert_eq!(options.max_rotations, 3);
    /// ```
    #[must_use]
    pub const fn with_max_rotations(mut self, rotations: u32) -> Self {
        self.max_rotations = rotations;
        self
    }

    /// Sets the opponent policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, OpponentPolicy};
    ///
    /// let policy = OpponentPolicy { always_hit_max: 14, stand_min: 18 };
    /// let options = GameOptions::default().with_policy(policy);
    /// assert_eq!(options.policy.stand_min, 18);
    /// ```
    #[must_use]
    pub const fn with_policy(mut self, policy: OpponentPolicy) -> Self {
        self.policy = policy;
        self
    }
}
