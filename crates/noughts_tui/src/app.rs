//! Application state and logic.

use crate::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use noughts::{
    MoveError, Position, ResetTicket, Round, RoundEvent, RoundObserver, RoundOutcome, RoundPhase,
    Seat, SetupRequest,
};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Number of event lines kept for the log pane.
const EVENT_LOG_LEN: usize = 5;

/// Work the event loop must run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Clear the board once the result has been on screen long enough.
    Reset(ResetTicket),
    /// Let the computer play after a short pause.
    ComputerMove,
}

/// Recent round events, newest last, as display text.
#[derive(Debug, Default)]
pub struct EventLog {
    lines: VecDeque<String>,
}

impl EventLog {
    /// Returns the logged lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    fn push(&mut self, line: String) {
        if self.lines.len() == EVENT_LOG_LEN {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

impl RoundObserver for EventLog {
    fn notify(&mut self, event: RoundEvent) {
        debug!(?event, "Round event");
        let line = match event {
            RoundEvent::ScoreChanged { name, score, .. } => format!("{name} now has {score}"),
            RoundEvent::RoundResolved(RoundOutcome::Win { mark, line, .. }) => {
                format!("{mark} takes the {line}")
            }
            RoundEvent::RoundResolved(RoundOutcome::Draw) => "Draw".to_string(),
            RoundEvent::BoardCleared => "Board cleared".to_string(),
        };
        self.push(line);
    }
}

/// Main application state.
pub struct App {
    round: Round,
    cursor: Position,
    events: EventLog,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application and opens the first round.
    pub fn new(setup: SetupRequest) -> Self {
        Self {
            round: Round::start(setup),
            cursor: Position::Center,
            events: EventLog::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Work to schedule right after start-up (the computer may open).
    pub fn startup(&self) -> Option<Deferred> {
        self.next_deferred()
    }

    /// Status line derived from the round.
    pub fn status(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if let Some(outcome) = self.round.outcome() {
            return match outcome.winner() {
                Some(seat) => {
                    let player = self.round.player(seat);
                    format!("{} ({}) wins the round!", player.name(), player.mark())
                }
                None => "It's a draw!".to_string(),
            };
        }
        if self.round.is_computer_turn() {
            return "Computer is thinking...".to_string();
        }
        let player = self.round.player(self.round.active_seat());
        format!("{} ({}) to move", player.name(), player.mark())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Deferred> {
        match action_for(key)? {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Cursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::PlayCell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index)
            }
        }
    }

    /// Runs deferred work once its delay has passed.
    ///
    /// Returns follow-up work only if the round changed; stale work is dropped.
    #[instrument(skip(self))]
    pub fn handle_deferred(&mut self, deferred: Deferred) -> Option<Deferred> {
        match deferred {
            Deferred::Reset(ticket) => {
                if !self.round.fire_reset(ticket, &mut self.events) {
                    return None;
                }
                debug!(cleared = ticket.round(), "Next round open");
                self.notice = None;
            }
            Deferred::ComputerMove => match self.round.play_computer_turn(&mut self.events) {
                Ok(Some(_)) => self.notice = None,
                Ok(None) => return None,
                Err(e) => {
                    self.notice = Some(e.to_string());
                    return None;
                }
            },
        }
        self.next_deferred()
    }

    fn play(&mut self, index: usize) -> Option<Deferred> {
        match self.round.submit_move(index, &mut self.events) {
            Ok(_) => {
                self.notice = None;
                self.next_deferred()
            }
            Err(e) => {
                // Presses while the result is on screen or the computer thinks
                // are dropped quietly.
                let quiet = self.round.phase() != RoundPhase::Active
                    || matches!(e, MoveError::ComputerToMove);
                if !quiet {
                    self.notice = Some(e.to_string());
                }
                None
            }
        }
    }

    fn next_deferred(&self) -> Option<Deferred> {
        if self.round.phase() == RoundPhase::Resolved {
            return self.round.pending_reset().map(Deferred::Reset);
        }
        self.round.is_computer_turn().then_some(Deferred::ComputerMove)
    }

    /// Score label for one seat, e.g. `Ann (X): 2`.
    pub fn score_label(&self, seat: Seat) -> String {
        let player = self.round.player(seat);
        format!("{} ({}): {}", player.name(), player.mark(), player.score())
    }
}
