//! Hand evaluation command.
//!
//! Classifies five cards, or the best five out of six or seven, and can
//! compare the result against a second hand.

use std::cmp::Ordering;
use std::io::Write;

use tablestakes_engine::cards::parse_cards;
use tablestakes_engine::hand::Hand;

use crate::error::CliError;

pub fn handle_eval_command(
    cards: &[String],
    against: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let first = evaluate(&cards.join(" "))?;
    writeln!(out, "{}", first)?;

    if let Some(other) = against {
        let second = evaluate(other)?;
        writeln!(out, "{}", second)?;
        let verdict = match first.cmp(&second) {
            Ordering::Greater => "first hand wins",
            Ordering::Less => "second hand wins",
            Ordering::Equal => "tie",
        };
        writeln!(out, "{}", verdict)?;
    }
    Ok(())
}

fn evaluate(text: &str) -> Result<Hand, CliError> {
    let cards = parse_cards(text)?;
    match cards.len() {
        5 => Ok(Hand::new(&cards)?),
        6 | 7 => Ok(Hand::best_of(&cards)?),
        n => Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            n
        ))),
    }
}
