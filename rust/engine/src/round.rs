//! One betting round, driven turn by turn.
//!
//! The round never asks anyone for input. A driver pulls the next seat with
//! [`BettingRound::next_turn`], obtains an action however it likes and hands
//! it back through [`BettingRound::submit_action`]. Turn order is clockwise
//! from the table's first-to-act seat, skipping folded seats.
//!
//! ```
//! use tablestakes_engine::action::Action;
//! use tablestakes_engine::events::RoundEnd;
//! use tablestakes_engine::round::BettingRound;
//! use tablestakes_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::with_seed(&["ann", "bob"], TableConfig::default(), 1).unwrap();
//! let mut round = BettingRound::new(&mut table);
//!
//! assert_eq!(round.next_turn(), Ok(Some(0)));
//! round.submit_action(0, Action::bet(100).unwrap()).unwrap();
//! assert_eq!(round.next_turn(), Ok(Some(1)));
//! round.submit_action(1, Action::fold()).unwrap();
//! assert_eq!(round.next_turn(), Ok(None));
//!
//! let outcome = round.finish().unwrap();
//! assert_eq!(outcome.end, RoundEnd::Uncontested(0));
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::errors::RoundError;
use crate::events::{EventSink, RoundEnd, RoundEvent};
use crate::rules::validate_action;
use crate::table::{SeatId, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no seat asked yet
    Idle,
    /// Waiting for the given seat's action
    AwaitingAction(SeatId),
    /// An action was applied; the next seat is not chosen yet
    Advancing,
    Terminated,
}

/// Everything a finished round leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub end: RoundEnd,
    /// Applied actions in order
    pub turns: Vec<(SeatId, Action)>,
    /// Seats in the order they were asked to act
    pub visited: Vec<SeatId>,
}

impl RoundOutcome {
    pub fn uncontested_winner(&self) -> Option<SeatId> {
        match self.end {
            RoundEnd::Uncontested(seat) => Some(seat),
            RoundEnd::ActionClosed => None,
        }
    }
}

/// Scheduler for a single betting round over a borrowed [`Table`].
///
/// Creating the round resets the table's per-round state. The round ends when
/// one active seat remains or when the stopping player acts without betting
/// or raising.
pub struct BettingRound<'a> {
    table: &'a mut Table,
    sink: Option<&'a mut dyn EventSink>,
    phase: Phase,
    cursor: SeatId,
    last: Option<(SeatId, Action)>,
    turns: Vec<(SeatId, Action)>,
    visited: Vec<SeatId>,
    end: Option<RoundEnd>,
    end_reported: bool,
}

impl<'a> BettingRound<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self::build(table, None)
    }

    /// Like [`BettingRound::new`], reporting every event to `sink`.
    pub fn with_sink(table: &'a mut Table, sink: &'a mut dyn EventSink) -> Self {
        Self::build(table, Some(sink))
    }

    fn build(table: &'a mut Table, sink: Option<&'a mut dyn EventSink>) -> Self {
        table.reset_betting_round_states();
        let cursor = table.next_active_from(table.first_to_act());
        let mut round = Self {
            table,
            sink,
            phase: Phase::Idle,
            cursor,
            last: None,
            turns: Vec::new(),
            visited: Vec::new(),
            end: None,
            end_reported: false,
        };
        info!(
            first_to_act = cursor,
            stopping = round.table.stopping_player(),
            active = round.table.active_count(),
            "betting round started"
        );
        round.emit(RoundEvent::RoundStarted {
            first_to_act: cursor,
            stopping_player: round.table.stopping_player(),
            smallest_rising_amount: round.table.smallest_rising_amount(),
        });
        round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn table(&self) -> &Table {
        &*self.table
    }

    pub fn visited(&self) -> &[SeatId] {
        &self.visited
    }

    pub fn history(&self) -> &[(SeatId, Action)] {
        &self.turns
    }

    pub fn uncontested_winner(&self) -> Option<SeatId> {
        match self.end {
            Some(RoundEnd::Uncontested(seat)) => Some(seat),
            _ => None,
        }
    }

    /// Returns the seat that must act next, or `None` once the round is over.
    ///
    /// Asking again while a seat is waiting returns the same seat. `None` is
    /// reported exactly once.
    ///
    /// # Errors
    ///
    /// [`RoundError::Overloaded`] when called after `None` was returned.
    pub fn next_turn(&mut self) -> Result<Option<SeatId>, RoundError> {
        match self.phase {
            Phase::AwaitingAction(seat) => Ok(Some(seat)),
            Phase::Terminated => {
                if self.end_reported {
                    Err(RoundError::Overloaded)
                } else {
                    self.end_reported = true;
                    Ok(None)
                }
            }
            Phase::Idle | Phase::Advancing => match self.advance() {
                Some(seat) => {
                    self.phase = Phase::AwaitingAction(seat);
                    self.visited.push(seat);
                    debug!(seat, amount_to_call = self.table.amount_to_call(seat), "turn");
                    self.emit(RoundEvent::TurnPublished {
                        seat,
                        amount_to_call: self.table.amount_to_call(seat),
                    });
                    Ok(Some(seat))
                }
                None => {
                    self.end_reported = true;
                    Ok(None)
                }
            },
        }
    }

    /// Hands the published seat's action to the round.
    ///
    /// # Errors
    ///
    /// * [`RoundError::Illegal`] when the action breaks the betting rules; the
    ///   same seat stays published and may try again.
    /// * [`RoundError::NotSeatsTurn`] when another seat is waiting.
    /// * [`RoundError::NoTurnPending`] when no seat has been published.
    /// * [`RoundError::Overloaded`] when the round is already over.
    pub fn submit_action(&mut self, seat: SeatId, action: Action) -> Result<(), RoundError> {
        let expected = match self.phase {
            Phase::AwaitingAction(expected) => expected,
            Phase::Terminated => return Err(RoundError::Overloaded),
            Phase::Idle | Phase::Advancing => return Err(RoundError::NoTurnPending),
        };
        if seat != expected {
            return Err(RoundError::NotSeatsTurn {
                expected,
                actual: seat,
            });
        }

        self.table.player_mut(seat)?.set_pending(action);
        let ctx = self.table.betting_context(seat);
        if let Err(e) = validate_action(&action, &ctx) {
            self.table.player_mut(seat)?.take_pending();
            warn!(seat, %action, reason = %e, "invalid action");
            self.emit(RoundEvent::InvalidAttempt {
                seat,
                action,
                reason: e.to_string(),
            });
            return Err(e.into());
        }

        let Some(action) = self.table.player_mut(seat)?.take_pending() else {
            return Err(RoundError::NoTurnPending);
        };
        self.table.apply(seat, &action)?;
        self.turns.push((seat, action));
        self.last = Some((seat, action));
        self.phase = Phase::Advancing;

        let seat_total = self
            .table
            .player(seat)
            .map(|p| p.current_amount())
            .unwrap_or(0);
        debug!(
            seat,
            %action,
            seat_total,
            table_amount = self.table.current_amount(),
            rising = self.table.smallest_rising_amount(),
            stopping = self.table.stopping_player(),
            "action applied"
        );
        self.emit(RoundEvent::ActionApplied {
            seat,
            action,
            seat_total,
            table_amount: self.table.current_amount(),
            smallest_rising_amount: self.table.smallest_rising_amount(),
            stopping_player: self.table.stopping_player(),
        });
        Ok(())
    }

    /// Closes the round and hands back its record.
    ///
    /// # Errors
    ///
    /// [`RoundError::Unended`] if a seat is still due to act. A round whose
    /// last action closed it may be finished without pulling the final `None`.
    pub fn finish(mut self) -> Result<RoundOutcome, RoundError> {
        if matches!(self.phase, Phase::Idle | Phase::Advancing) && self.advance().is_some() {
            return Err(RoundError::Unended);
        }
        let Some(end) = self.end.filter(|_| self.phase == Phase::Terminated) else {
            return Err(RoundError::Unended);
        };
        Ok(RoundOutcome {
            end,
            turns: std::mem::take(&mut self.turns),
            visited: std::mem::take(&mut self.visited),
        })
    }

    // Picks the next seat to publish, or terminates the round.
    fn advance(&mut self) -> Option<SeatId> {
        let active = self.table.active_seats();
        if active.len() <= 1 {
            let end = match active.first() {
                Some(&winner) => RoundEnd::Uncontested(winner),
                None => RoundEnd::ActionClosed,
            };
            self.terminate(end);
            return None;
        }

        if let Some((seat, action)) = self.last {
            if !action.kind().is_aggressive() && seat == self.table.stopping_player() {
                self.terminate(RoundEnd::ActionClosed);
                return None;
            }
            self.cursor = self.table.next_seat(seat);
        }

        for _ in 0..self.table.seat_count() {
            let seat = self.cursor;
            if self.table.is_active(seat) {
                return Some(seat);
            }
            if seat == self.table.stopping_player() {
                self.terminate(RoundEnd::ActionClosed);
                return None;
            }
            self.cursor = self.table.next_seat(seat);
        }
        self.terminate(RoundEnd::ActionClosed);
        None
    }

    fn terminate(&mut self, end: RoundEnd) {
        self.phase = Phase::Terminated;
        self.end = Some(end);
        info!(?end, turns = self.turns.len(), "betting round ended");
        self.emit(RoundEvent::RoundEnded { end });
    }

    fn emit(&mut self, event: RoundEvent) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.record(event);
        }
    }
}

impl Drop for BettingRound<'_> {
    fn drop(&mut self) {
        if self.phase != Phase::Terminated {
            warn!(phase = ?self.phase, turns = self.turns.len(), "betting round dropped before it ended");
        }
    }
}
