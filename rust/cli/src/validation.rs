//! Input parsing for interactive commands.
//!
//! Text only becomes an [`Action`] here; whether the action is legal against
//! the table is decided by the engine when it is submitted.

use tablestakes_engine::action::{Action, ActionKind};

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Well-formed action
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a line such as `bet 100` into an [`Action`].
///
/// Accepted forms (case-insensitive):
/// - `fold` / `f`
/// - `check` / `c`
/// - `call` (uses `amount_to_call`) or `call N`
/// - `bet N`, `raise N`
/// - `q` / `quit`
///
/// Amounts are the chips added on this turn.
///
/// ```rust
/// # use tablestakes_cli::validation::{parse_player_action, ParseResult};
/// use tablestakes_engine::action::Action;
///
/// assert_eq!(parse_player_action("fold", 0), ParseResult::Action(Action::fold()));
/// assert_eq!(
///     parse_player_action("call", 200),
///     ParseResult::Action(Action::call(200).unwrap())
/// );
/// assert_eq!(parse_player_action("q", 0), ParseResult::Quit);
/// match parse_player_action("shove", 0) {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str, amount_to_call: u32) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&word) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if parts.len() > 2 {
        return ParseResult::Invalid(format!("Too many words in {:?}", input));
    }

    let kind = match word {
        "q" | "quit" => return ParseResult::Quit,
        "fold" | "f" => ActionKind::Fold,
        "check" | "c" => ActionKind::Check,
        "call" => ActionKind::Call,
        "bet" => ActionKind::Bet,
        "raise" => ActionKind::Raise,
        _ => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: fold, check, call [amount], bet <amount>, raise <amount>, q",
                word
            ));
        }
    };

    let amount = match (parts.get(1), kind) {
        (Some(text), _) => match text.parse::<u32>() {
            Ok(n) => n,
            Err(_) => return ParseResult::Invalid(format!("Invalid {} amount {:?}", kind, text)),
        },
        (None, ActionKind::Call) => amount_to_call,
        (None, ActionKind::Bet | ActionKind::Raise) => {
            return ParseResult::Invalid(format!(
                "{} requires an amount (e.g., '{} 100')",
                kind, kind
            ));
        }
        (None, _) => 0,
    };

    match Action::new(kind, amount) {
        Ok(action) => ParseResult::Action(action),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

/// Trims names and drops empty entries from a comma separated player list.
pub fn clean_player_names(raw: &[String]) -> Vec<&str> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
