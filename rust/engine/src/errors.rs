use thiserror::Error;

use crate::action::ActionKind;
use crate::cards::Card;
use crate::table::SeatId;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CardError {
    #[error("Jokers are not part of a standard deck")]
    Joker,
    #[error("Unknown card value: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DeckError {
    #[error("Deck is exhausted")]
    Exhausted,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum HandError {
    #[error("A hand needs exactly {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ActionError {
    #[error("{kind} must carry an amount of 0, got {amount}")]
    AmountNotAllowed { kind: ActionKind, amount: u32 },
    #[error("{kind} needs a positive amount")]
    AmountRequired { kind: ActionKind },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PlayerError {
    #[error("Player name must not be empty")]
    EmptyName,
    #[error("Hole cards already full")]
    HoleCardsFull,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TableError {
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("A table seats {min} to {max} players, got {actual}")]
    SeatCount { min: usize, max: usize, actual: usize },
    #[error("Player name {0:?} is already seated")]
    DuplicateName(String),
    #[error("Seat {0} does not exist")]
    InvalidSeat(SeatId),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Why an action is not legal in the current betting state.
///
/// These are expected during play: the scheduler keeps the turn on the same
/// seat and the driver may try again.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum LegalityError {
    #[error("{kind} is not allowed when the amount to call is {amount_to_call}")]
    KindNotAllowed {
        kind: ActionKind,
        amount_to_call: u32,
    },
    #[error("Call must be exactly {amount_to_call}, got {amount}")]
    CallMismatch { amount: u32, amount_to_call: u32 },
    #[error("Raise of {amount} does not exceed the amount to call ({amount_to_call})")]
    RaiseNotAboveCall { amount: u32, amount_to_call: u32 },
    #[error("Raise increment {increment} is below the minimum of {minimum}")]
    RaiseTooSmall { increment: u32, minimum: u32 },
    #[error("Amount {amount} is not a multiple of the chip unit {chip_unit}")]
    NotChipMultiple { amount: u32, chip_unit: u32 },
}

/// Errors reported by [`crate::round::BettingRound`].
///
/// Only [`RoundError::Illegal`] is recoverable; every other variant means the
/// driver broke the turn protocol.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RoundError {
    #[error("Illegal action: {0}")]
    Illegal(#[from] LegalityError),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotSeatsTurn { expected: SeatId, actual: SeatId },
    #[error("No seat is waiting to act; call next_turn first")]
    NoTurnPending,
    #[error("Overloaded round: the betting round is over but another turn was requested")]
    Overloaded,
    #[error("Unended round: the round was closed while turns remained outstanding")]
    Unended,
    #[error(transparent)]
    Table(#[from] TableError),
}

impl RoundError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RoundError::Illegal(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ShowdownError {
    #[error("Active seat {0} has no hand assigned")]
    MissingHand(SeatId),
    #[error(transparent)]
    Hand(#[from] HandError),
}
