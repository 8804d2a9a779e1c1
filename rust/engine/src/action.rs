use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

/// The five things a seat can do on its turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Check,
    Fold,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    /// Bet and raise increase what everyone else has to match.
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }

    fn takes_amount(self) -> bool {
        matches!(
            self,
            ActionKind::Call | ActionKind::Bet | ActionKind::Raise
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Check => "check",
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single player action, validated for shape at construction.
///
/// `amount` is the number of chips the player adds on this turn. Check and
/// fold carry exactly zero; call, bet and raise carry a positive amount.
/// Whether the action is legal against the table is a separate question,
/// answered by [`crate::rules::validate_action`].
///
/// ```
/// use tablestakes_engine::action::{Action, ActionKind};
///
/// assert!(Action::new(ActionKind::Fold, 0).is_ok());
/// assert!(Action::new(ActionKind::Fold, 100).is_err());
/// assert!(Action::new(ActionKind::Bet, 0).is_err());
/// assert_eq!(Action::bet(100).unwrap().amount(), 100);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    kind: ActionKind,
    amount: u32,
}

impl Action {
    pub fn new(kind: ActionKind, amount: u32) -> Result<Self, ActionError> {
        if kind.takes_amount() {
            if amount == 0 {
                return Err(ActionError::AmountRequired { kind });
            }
        } else if amount != 0 {
            return Err(ActionError::AmountNotAllowed { kind, amount });
        }
        Ok(Self { kind, amount })
    }

    pub fn check() -> Self {
        Self {
            kind: ActionKind::Check,
            amount: 0,
        }
    }

    pub fn fold() -> Self {
        Self {
            kind: ActionKind::Fold,
            amount: 0,
        }
    }

    pub fn call(amount: u32) -> Result<Self, ActionError> {
        Self::new(ActionKind::Call, amount)
    }

    pub fn bet(amount: u32) -> Result<Self, ActionError> {
        Self::new(ActionKind::Bet, amount)
    }

    pub fn raise(amount: u32) -> Result<Self, ActionError> {
        Self::new(ActionKind::Raise, amount)
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount == 0 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.amount)
        }
    }
}

// Deserialized actions go through the same shape checks as `Action::new`.
#[derive(Deserialize)]
struct RawAction {
    kind: ActionKind,
    #[serde(default)]
    amount: u32,
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Action::new(raw.kind, raw.amount)
    }
}
