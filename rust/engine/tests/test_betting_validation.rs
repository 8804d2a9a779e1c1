use tablestakes_engine::action::{Action, ActionKind};
use tablestakes_engine::errors::{ActionError, LegalityError};
use tablestakes_engine::rules::{action_is_valid, legal_kinds, validate_action};
use tablestakes_engine::table::{Table, TableConfig};

fn four_seats(open_fold: bool) -> Table {
    let config = TableConfig {
        fold_when_not_facing_bet: open_fold,
        ..TableConfig::default()
    };
    Table::with_seed(&["A", "B", "C", "D"], config, 9).unwrap()
}

#[test]
fn action_amount_shape_is_checked_at_construction() {
    assert_eq!(
        Action::new(ActionKind::Fold, 100).unwrap_err(),
        ActionError::AmountNotAllowed {
            kind: ActionKind::Fold,
            amount: 100
        }
    );
    assert_eq!(
        Action::new(ActionKind::Raise, 0).unwrap_err(),
        ActionError::AmountRequired {
            kind: ActionKind::Raise
        }
    );
    assert_eq!(Action::check().amount(), 0);
}

#[test]
fn opening_the_round() {
    let t = four_seats(false);
    let ctx = t.betting_context(0);
    assert_eq!(legal_kinds(&ctx), vec![ActionKind::Check, ActionKind::Bet]);
    assert!(action_is_valid(&Action::check(), &ctx));
    assert!(action_is_valid(&Action::bet(100).unwrap(), &ctx));
    // a bet below the table minimum is still legal as long as it is whole chips
    assert!(action_is_valid(&Action::bet(50).unwrap(), &ctx));
    assert_eq!(
        validate_action(&Action::fold(), &ctx),
        Err(LegalityError::KindNotAllowed {
            kind: ActionKind::Fold,
            amount_to_call: 0
        })
    );
}

#[test]
fn open_fold_policy_comes_from_the_table() {
    let t = four_seats(true);
    assert!(action_is_valid(&Action::fold(), &t.betting_context(0)));
}

#[test]
fn facing_a_bet() {
    let mut t = four_seats(false);
    t.apply(0, &Action::bet(100).unwrap()).unwrap();
    let ctx = t.betting_context(1);
    assert_eq!(ctx.amount_to_call, 100);
    assert_eq!(
        legal_kinds(&ctx),
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
    );
    assert!(action_is_valid(&Action::call(100).unwrap(), &ctx));
    assert!(!action_is_valid(&Action::check(), &ctx));
    assert!(!action_is_valid(&Action::bet(200).unwrap(), &ctx));
    assert!(action_is_valid(&Action::raise(200).unwrap(), &ctx));
    assert_eq!(
        validate_action(&Action::raise(150).unwrap(), &ctx),
        Err(LegalityError::RaiseTooSmall {
            increment: 50,
            minimum: 100
        })
    );
}

#[test]
fn minimum_raise_grows_with_the_last_raise() {
    let mut t = four_seats(false);
    t.apply(0, &Action::bet(100).unwrap()).unwrap();
    t.apply(1, &Action::raise(300).unwrap()).unwrap();
    assert_eq!(t.smallest_rising_amount(), 200);

    // seat 2 owes 300 and must add at least 200 on top
    let ctx = t.betting_context(2);
    assert!(!action_is_valid(&Action::raise(450).unwrap(), &ctx));
    assert!(action_is_valid(&Action::raise(500).unwrap(), &ctx));

    // seat 0 already has 100 in
    let ctx = t.betting_context(0);
    assert_eq!(ctx.amount_to_call, 200);
    assert!(action_is_valid(&Action::call(200).unwrap(), &ctx));
    assert!(!action_is_valid(&Action::call(300).unwrap(), &ctx));
}
