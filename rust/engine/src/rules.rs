use crate::action::{Action, ActionKind as K};
use crate::errors::LegalityError;

/// The slice of table state that decides whether an action is legal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BettingContext {
    /// Table amount minus the acting player's contribution this round.
    pub amount_to_call: u32,
    /// Minimum increment a raise must add on top of the call.
    pub smallest_rising_amount: u32,
    /// Every wager must be a multiple of this.
    pub chip_unit: u32,
    /// Whether folding is allowed when nothing is owed.
    pub fold_when_not_facing_bet: bool,
}

impl BettingContext {
    pub fn facing_bet(&self) -> bool {
        self.amount_to_call != 0
    }
}

/// Action kinds a driver may offer in this context.
pub fn legal_kinds(ctx: &BettingContext) -> Vec<K> {
    if ctx.facing_bet() {
        vec![K::Fold, K::Call, K::Raise]
    } else if ctx.fold_when_not_facing_bet {
        vec![K::Check, K::Bet, K::Fold]
    } else {
        vec![K::Check, K::Bet]
    }
}

/// Validates an [`Action`] against the current betting state.
///
/// Facing a wager the legal kinds are fold, call and raise: a call must match
/// the amount to call exactly, and a raise must exceed it by at least the
/// smallest rising amount. With nothing to call the legal kinds are check and
/// bet, plus fold when the table allows open folding. Bets and raises must be
/// multiples of the chip unit.
///
/// # Errors
///
/// Returns the [`LegalityError`] describing the first rule the action breaks.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::action::Action;
/// use tablestakes_engine::errors::LegalityError;
/// use tablestakes_engine::rules::{validate_action, BettingContext};
///
/// let ctx = BettingContext {
///     amount_to_call: 100,
///     smallest_rising_amount: 100,
///     chip_unit: 50,
///     fold_when_not_facing_bet: false,
/// };
/// assert!(validate_action(&Action::call(100).unwrap(), &ctx).is_ok());
/// assert!(validate_action(&Action::raise(200).unwrap(), &ctx).is_ok());
/// assert_eq!(
///     validate_action(&Action::raise(150).unwrap(), &ctx),
///     Err(LegalityError::RaiseTooSmall { increment: 50, minimum: 100 })
/// );
/// ```
pub fn validate_action(action: &Action, ctx: &BettingContext) -> Result<(), LegalityError> {
    let amount = action.amount();
    let to_call = ctx.amount_to_call;

    if !legal_kinds(ctx).contains(&action.kind()) {
        return Err(LegalityError::KindNotAllowed {
            kind: action.kind(),
            amount_to_call: to_call,
        });
    }

    match action.kind() {
        K::Check | K::Fold => Ok(()),
        K::Call => {
            if amount == to_call {
                Ok(())
            } else {
                Err(LegalityError::CallMismatch {
                    amount,
                    amount_to_call: to_call,
                })
            }
        }
        K::Bet => ensure_chip_multiple(amount, ctx.chip_unit),
        K::Raise => {
            if amount <= to_call {
                return Err(LegalityError::RaiseNotAboveCall {
                    amount,
                    amount_to_call: to_call,
                });
            }
            let increment = amount - to_call;
            if increment < ctx.smallest_rising_amount {
                return Err(LegalityError::RaiseTooSmall {
                    increment,
                    minimum: ctx.smallest_rising_amount,
                });
            }
            ensure_chip_multiple(amount, ctx.chip_unit)
        }
    }
}

/// Boolean form of [`validate_action`].
pub fn action_is_valid(action: &Action, ctx: &BettingContext) -> bool {
    validate_action(action, ctx).is_ok()
}

fn ensure_chip_multiple(amount: u32, chip_unit: u32) -> Result<(), LegalityError> {
    if chip_unit != 0 && amount % chip_unit != 0 {
        return Err(LegalityError::NotChipMultiple { amount, chip_unit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(amount_to_call: u32, smallest_rising_amount: u32, open_fold: bool) -> BettingContext {
        BettingContext {
            amount_to_call,
            smallest_rising_amount,
            chip_unit: 50,
            fold_when_not_facing_bet: open_fold,
        }
    }

    #[test]
    fn check_only_when_nothing_owed() {
        assert!(action_is_valid(&Action::check(), &ctx(0, 100, false)));
        assert_eq!(
            validate_action(&Action::check(), &ctx(100, 100, false)),
            Err(LegalityError::KindNotAllowed {
                kind: K::Check,
                amount_to_call: 100
            })
        );
    }

    #[test]
    fn open_fold_follows_the_policy_flag() {
        assert!(!action_is_valid(&Action::fold(), &ctx(0, 100, false)));
        assert!(action_is_valid(&Action::fold(), &ctx(0, 100, true)));
        assert!(action_is_valid(&Action::fold(), &ctx(100, 100, false)));
    }

    #[test]
    fn bet_only_when_nothing_owed() {
        assert!(action_is_valid(&Action::bet(100).unwrap(), &ctx(0, 100, false)));
        assert!(!action_is_valid(&Action::bet(100).unwrap(), &ctx(50, 100, false)));
        assert_eq!(
            validate_action(&Action::bet(120).unwrap(), &ctx(0, 100, false)),
            Err(LegalityError::NotChipMultiple {
                amount: 120,
                chip_unit: 50
            })
        );
    }

    #[test]
    fn call_must_match_exactly() {
        assert!(action_is_valid(&Action::call(200).unwrap(), &ctx(200, 100, false)));
        assert_eq!(
            validate_action(&Action::call(100).unwrap(), &ctx(200, 100, false)),
            Err(LegalityError::CallMismatch {
                amount: 100,
                amount_to_call: 200
            })
        );
        assert!(!action_is_valid(&Action::call(50).unwrap(), &ctx(0, 100, false)));
    }

    #[test]
    fn raise_must_clear_the_rising_amount() {
        let c = ctx(200, 200, false);
        assert_eq!(
            validate_action(&Action::raise(200).unwrap(), &c),
            Err(LegalityError::RaiseNotAboveCall {
                amount: 200,
                amount_to_call: 200
            })
        );
        assert_eq!(
            validate_action(&Action::raise(350).unwrap(), &c),
            Err(LegalityError::RaiseTooSmall {
                increment: 150,
                minimum: 200
            })
        );
        assert!(action_is_valid(&Action::raise(400).unwrap(), &c));
        assert_eq!(
            validate_action(&Action::raise(420).unwrap(), &c),
            Err(LegalityError::NotChipMultiple {
                amount: 420,
                chip_unit: 50
            })
        );
    }

    #[test]
    fn legal_kinds_lists() {
        assert_eq!(legal_kinds(&ctx(100, 100, true)), vec![K::Fold, K::Call, K::Raise]);
        assert_eq!(legal_kinds(&ctx(0, 100, false)), vec![K::Check, K::Bet]);
    }
}
