//! Players and their running scores.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name given to the opponent when the second name is left blank.
pub const COMPUTER_NAME: &str = "Computer";

/// Which of the two session players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Seat {
    /// The first player on the setup form.
    #[display("player one")]
    One,
    /// The second player (possibly the computer).
    #[display("player two")]
    Two,
}

/// A player taking part in a session.
///
/// The score is only ever raised by one, once per won round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    starts_first: bool,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, starts_first: bool) -> Self {
        Self {
            name: name.into(),
            score: 0,
            starts_first,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rounds won.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true if this player opens every round.
    pub fn starts_first(&self) -> bool {
        self.starts_first
    }

    /// The mark this player places. The starting player always plays X.
    pub fn mark(&self) -> Mark {
        if self.starts_first { Mark::X } else { Mark::O }
    }

    /// Returns true if this player is driven by the heuristic AI.
    ///
    /// Decided by name alone, so a second player typed as "Computer" is the AI.
    pub fn is_computer(&self) -> bool {
        self.name == COMPUTER_NAME
    }

    /// Records a won round.
    #[instrument(skip(self), fields(player = %self.name))]
    pub(crate) fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
        debug!(score = self.score, "Score incremented");
    }
}
