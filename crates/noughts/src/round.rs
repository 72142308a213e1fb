//! Round lifecycle state machine.
//!
//! ```text
//! Setup -> Active -> Resolved -> Cooldown -> Active -> ...
//! ```
//!
//! A [`Round`] owns the board, the turn counter and both players for the whole
//! session. Each resolution parks a [`ResetTicket`] in a single pending-reset
//! slot; the host fires it after its display delay to clear the board for the
//! next round.

use super::action::{MoveError, MoveOutcome};
use super::ai::{AiMove, choose_move};
use super::events::{RoundEvent, RoundObserver, RoundOutcome};
use super::player::{Player, Seat};
use super::sequencer::{active_mark, apply_move};
use super::setup::SetupRequest;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundPhase {
    /// Players are being created.
    Setup,
    /// Moves are accepted.
    Active,
    /// A win or draw is on display; moves are rejected.
    Resolved,
    /// The board is being cleared.
    Cooldown,
}

/// Token for the deferred board reset after a resolved round.
///
/// Only the ticket issued for the current resolution is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    round: u32,
}

impl ResetTicket {
    /// Number of the resolved round this ticket clears (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }
}

/// A session of consecutive rounds between two players.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    turn: u32,
    phase: RoundPhase,
    players: [Player; 2],
    outcome: Option<RoundOutcome>,
    pending_reset: Option<ResetTicket>,
    history: Vec<usize>,
    rounds_played: u32,
}

fn slot(seat: Seat) -> usize {
    match seat {
        Seat::One => 0,
        Seat::Two => 1,
    }
}

impl Round {
    /// Creates the players from the setup form and opens the first round.
    #[instrument(skip(setup))]
    pub fn start(setup: SetupRequest) -> Self {
        let (one, two) = setup.into_players();
        let mut round = Self {
            board: Board::new(),
            turn: 0,
            phase: RoundPhase::Setup,
            players: [one, two],
            outcome: None,
            pending_reset: None,
            history: Vec::new(),
            rounds_played: 0,
        };
        round.phase = RoundPhase::Active;
        info!(
            player_one = round.players[0].name(),
            player_two = round.players[1].name(),
            first = %round.seat_for(Mark::X),
            "Round started"
        );
        round
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn counter (0 at the start of every round).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player in the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[slot(seat)]
    }

    /// Outcome of the round on display, if resolved.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Ticket waiting in the pending-reset slot.
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    /// Cells played this round, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Number of rounds resolved so far in this session.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Mark to be placed by the next move.
    pub fn active_mark(&self) -> Mark {
        active_mark(self.turn)
    }

    /// Seat that owns `mark`. The starting player owns X.
    pub fn seat_for(&self, mark: Mark) -> Seat {
        if self.players[0].mark() == mark {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Seat whose mark is active.
    pub fn active_seat(&self) -> Seat {
        self.seat_for(self.active_mark())
    }

    /// Seat played by the heuristic AI, if any.
    pub fn computer_seat(&self) -> Option<Seat> {
        self.players[1].is_computer().then_some(Seat::Two)
    }

    /// Returns true if the round is waiting for the computer's move.
    pub fn is_computer_turn(&self) -> bool {
        self.phase == RoundPhase::Active && self.computer_seat() == Some(self.active_seat())
    }

    /// Applies a human move at `index`.
    ///
    /// A rejected move changes nothing; callers treat the error as a no-op.
    #[instrument(skip(self, observer), fields(phase = %self.phase, turn = self.turn))]
    pub fn submit_move(
        &mut self,
        index: usize,
        observer: &mut impl RoundObserver,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_computer_turn() {
            warn!(index, "Move ignored: computer to move");
            return Err(MoveError::ComputerToMove);
        }
        self.play(index, observer)
    }

    /// Lets the heuristic AI play if it owns the active mark.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn.
    #[instrument(skip(self, observer), fields(phase = %self.phase, turn = self.turn))]
    pub fn play_computer_turn(
        &mut self,
        observer: &mut impl RoundObserver,
    ) -> Result<Option<(AiMove, MoveOutcome)>, MoveError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(chosen) = choose_move(&self.board, self.active_mark()) else {
            return Ok(None);
        };
        let outcome = self.play(chosen.index, observer)?;
        Ok(Some((chosen, outcome)))
    }

    /// Applies a human move and, if the round continues, the computer's reply.
    pub fn submit_and_respond(
        &mut self,
        index: usize,
        observer: &mut impl RoundObserver,
    ) -> Result<MoveOutcome, MoveError> {
        let outcome = self.submit_move(index, observer)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        Ok(self
            .play_computer_turn(observer)?
            .map_or(outcome, |(_, reply)| reply))
    }

    /// Clears the board for the next round if `ticket` is the pending one.
    ///
    /// Returns false, changing nothing, for a stale or already used ticket.
    #[instrument(skip(self, observer), fields(phase = %self.phase))]
    pub fn fire_reset(&mut self, ticket: ResetTicket, observer: &mut impl RoundObserver) -> bool {
        if self.phase != RoundPhase::Resolved || self.pending_reset != Some(ticket) {
            debug!(?ticket, pending = ?self.pending_reset, "Reset ignored");
            return false;
        }

        self.pending_reset = None;
        self.phase = RoundPhase::Cooldown;
        self.board.reset();
        self.turn = 0;
        self.history.clear();
        self.outcome = None;
        observer.notify(RoundEvent::BoardCleared);
        self.phase = RoundPhase::Active;

        info!(next_round = self.rounds_played + 1, "Board cleared");
        true
    }

    fn play(
        &mut self,
        index: usize,
        observer: &mut impl RoundObserver,
    ) -> Result<MoveOutcome, MoveError> {
        let outcome = apply_move(&mut self.board, &mut self.turn, self.phase, index)
            .inspect_err(|e| warn!(index, error = %e, "Move rejected"))?;
        self.history.push(index);

        match outcome {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(mark, line) => {
                let seat = self.seat_for(mark);
                let player = &mut self.players[slot(seat)];
                player.increment_score();
                observer.notify(RoundEvent::ScoreChanged {
                    seat,
                    name: player.name().to_string(),
                    score: player.score(),
                });
                self.resolve(RoundOutcome::Win { mark, line, seat }, observer);
            }
            MoveOutcome::Draw => self.resolve(RoundOutcome::Draw, observer),
        }
        Ok(outcome)
    }

    fn resolve(&mut self, outcome: RoundOutcome, observer: &mut impl RoundObserver) {
        self.phase = RoundPhase::Resolved;
        self.outcome = Some(outcome);
        self.rounds_played += 1;
        self.pending_reset = Some(ResetTicket {
            round: self.rounds_played,
        });
        info!(?outcome, round = self.rounds_played, "Round resolved");
        debug!(board = %self.board, "Final board");
        observer.notify(RoundEvent::RoundResolved(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::Starter;
    use crate::types::{Cell, Line};

    fn two_humans() -> Round {
        Round::start(SetupRequest::new("Ann", "Bo", Starter::One))
    }

    #[test]
    fn test_start_is_active() {
        let round = two_humans();
        assert_eq!(round.phase(), RoundPhase::Active);
        assert_eq!(round.turn(), 0);
        assert_eq!(round.active_seat(), Seat::One);
        assert_eq!(round.computer_seat(), None);
    }

    #[test]
    fn test_win_scores_and_resolves() {
        let mut round = two_humans();
        let mut events = Vec::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(round.submit_move(index, &mut events), Ok(MoveOutcome::Continue));
        }
        assert_eq!(
            round.submit_move(2, &mut events),
            Ok(MoveOutcome::Win(Mark::X, Line::Row0))
        );
        assert_eq!(round.phase(), RoundPhase::Resolved);
        assert_eq!(round.player(Seat::One).score(), 1);
        assert_eq!(round.player(Seat::Two).score(), 0);
        assert_eq!(round.outcome().and_then(|o| o.winner()), Some(Seat::One));
        assert_eq!(round.pending_reset().map(|t| t.round()), Some(1));

        let won = RoundOutcome::Win {
            mark: Mark::X,
            line: Line::Row0,
            seat: Seat::One,
        };
        assert_eq!(
            events,
            vec![
                RoundEvent::ScoreChanged {
                    seat: Seat::One,
                    name: "Ann".into(),
                    score: 1
                },
                RoundEvent::RoundResolved(won),
            ]
        );
    }

    #[test]
    fn test_tickets_count_resolved_rounds() {
        let mut round = two_humans();
        for index in [0, 3, 1, 4, 2] {
            round.submit_move(index, &mut ()).unwrap();
        }
        let first = round.pending_reset().unwrap();
        assert!(round.fire_reset(first, &mut ()));

        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            round.submit_move(index, &mut ()).unwrap();
        }
        let second = round.pending_reset().unwrap();
        assert_eq!(second.round(), 2);
        assert_ne!(first, second);
        assert_eq!(round.outcome().and_then(|o| o.winner()), None);
        assert_eq!(round.rounds_played(), 2);
    }

    #[test]
    fn test_resolved_round_rejects_moves() {
        let mut round = two_humans();
        for index in [0, 3, 1, 4, 2] {
            round.submit_move(index, &mut ()).unwrap();
        }
        let board = round.board().clone();
        assert_eq!(round.submit_move(8, &mut ()), Err(MoveError::RoundAlreadyResolved));
        assert_eq!(round.board(), &board);
        assert_eq!(round.player(Seat::One).score(), 1);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut round = two_humans();
        for index in [0, 3, 1, 4, 2] {
            round.submit_move(index, &mut ()).unwrap();
        }
        let ticket = round.pending_reset().unwrap();
        let mut events = Vec::new();
        assert!(round.fire_reset(ticket, &mut events));
        assert!(!round.fire_reset(ticket, &mut events));
        assert_eq!(events, vec![RoundEvent::BoardCleared]);
        assert_eq!(round.pending_reset(), None);
    }

    #[test]
    fn test_human_cannot_play_computer_mark() {
        let mut round = Round::start(SetupRequest::new("Ann", "", Starter::Two));
        assert!(round.is_computer_turn());
        assert_eq!(round.submit_move(4, &mut ()), Err(MoveError::ComputerToMove));

        let (chosen, outcome) = round.play_computer_turn(&mut ()).unwrap().unwrap();
        assert_eq!(chosen.index, 0);
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(round.board().get(0), Some(Cell::Occupied(Mark::X)));
        assert!(!round.is_computer_turn());
    }

    #[test]
    fn test_submit_and_respond_plays_reply() {
        let mut round = Round::start(SetupRequest::new("Ann", "", Starter::One));
        round.submit_and_respond(4, &mut ()).unwrap();
        assert_eq!(round.history(), &[4, 0]);
        assert_eq!(round.active_seat(), Seat::One);
    }
}
