//! Noughts - tic-tac-toe round engine
//!
//! Pure game logic for a two-player (or player-vs-computer) tic-tac-toe
//! session: the board, win and draw detection, turn sequencing, scoring
//! across rounds, and a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells, row-major, write-once until reset
//! - **Rules**: winning-line and draw detection
//! - **Sequencer**: turn parity picks the mark, applies moves
//! - **Round**: Setup -> Active -> Resolved -> Cooldown -> Active
//! - **AI**: win, else block, else lowest open cell
//!
//! # Example
//!
//! ```
//! use noughts::{MoveOutcome, Round, Seat, SetupRequest, Starter};
//!
//! let mut round = Round::start(SetupRequest::new("Ann", "Bo", Starter::One));
//! let mut events = Vec::new();
//! for index in [0, 3, 1, 4] {
//!     round.submit_move(index, &mut events).unwrap();
//! }
//! let outcome = round.submit_move(2, &mut events).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Win(..)));
//! assert_eq!(round.player(Seat::One).score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod events;
mod player;
mod position;
mod round;
mod sequencer;
mod setup;
mod types;

pub mod rules;

pub use action::{MoveError, MoveOutcome};
pub use ai::{AiMove, Reason, choose_move};
pub use events::{RoundEvent, RoundObserver, RoundOutcome};
pub use player::{COMPUTER_NAME, Player, Seat};
pub use position::Position;
pub use round::{ResetTicket, Round, RoundPhase};
pub use sequencer::{active_mark, apply_move};
pub use setup::{DEFAULT_PLAYER_ONE_NAME, SetupRequest, Starter};
pub use types::{Board, CELL_COUNT, Cell, Line, Mark};
