use serde::Serialize;

use crate::action::Action;
use crate::table::SeatId;

/// How a betting round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnd {
    /// Everyone else folded; the seat wins without a showdown.
    Uncontested(SeatId),
    /// The stopping player acted without raising, so every active seat has
    /// matched the table amount.
    ActionClosed,
}

/// Something observable that happened during a betting round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    RoundStarted {
        first_to_act: SeatId,
        stopping_player: SeatId,
        smallest_rising_amount: u32,
    },
    TurnPublished {
        seat: SeatId,
        amount_to_call: u32,
    },
    ActionApplied {
        seat: SeatId,
        action: Action,
        seat_total: u32,
        table_amount: u32,
        smallest_rising_amount: u32,
        stopping_player: SeatId,
    },
    InvalidAttempt {
        seat: SeatId,
        action: Action,
        reason: String,
    },
    RoundEnded {
        end: RoundEnd,
    },
}

/// Receives round events as they happen.
pub trait EventSink {
    fn record(&mut self, event: RoundEvent);
}

impl EventSink for Vec<RoundEvent> {
    fn record(&mut self, event: RoundEvent) {
        self.push(event);
    }
}
