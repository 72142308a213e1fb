//! Render events emitted by a round.
//!
//! The engine never reads anything back from the presentation layer. It only
//! pushes these events out after its own state has changed.

use super::player::Seat;
use super::types::{Line, Mark};
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A player completed a line.
    Win {
        /// Winning mark.
        mark: Mark,
        /// Completed line.
        line: Line,
        /// Player who owns the mark.
        seat: Seat,
    },
    /// The board filled without a completed line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winning seat, if any.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Win { seat, .. } => Some(*seat),
            RoundOutcome::Draw => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            RoundOutcome::Win { line, .. } => Some(*line),
            RoundOutcome::Draw => None,
        }
    }
}

/// Event pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A player's score went up.
    ScoreChanged {
        /// Whose score.
        seat: Seat,
        /// Player name.
        name: String,
        /// New score.
        score: u32,
    },
    /// The round ended.
    RoundResolved(RoundOutcome),
    /// The board was cleared for the next round.
    BoardCleared,
}

/// Receiver for [`RoundEvent`]s.
pub trait RoundObserver {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: RoundEvent);
}

/// Collects events, mostly for tests and logging.
impl RoundObserver for Vec<RoundEvent> {
    fn notify(&mut self, event: RoundEvent) {
        self.push(event);
    }
}

/// Discards events.
impl RoundObserver for () {
    fn notify(&mut self, _event: RoundEvent) {}
}
