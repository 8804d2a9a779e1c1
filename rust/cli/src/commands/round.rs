//! # Round Command
//!
//! Drives one betting round from text input, one line per turn.
//!
//! The table is dealt before betting starts. Each prompt names the seat to
//! act, what it owes and the action kinds it may choose. Malformed or illegal
//! input is reported on stderr and the same seat is asked again. When the
//! round closes with more than one seat left, the hands are shown down.

use std::io::{BufRead, Write};

use tablestakes_engine::events::RoundEnd;
use tablestakes_engine::round::{BettingRound, RoundOutcome};
use tablestakes_engine::rules::legal_kinds;
use tablestakes_engine::showdown::{assign_best_hands, winners};
use tablestakes_engine::table::{Table, TableConfig};

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui::{self, format_cards};
use crate::validation::{ParseResult, clean_player_names, parse_player_action};

#[derive(Debug, Clone)]
pub struct RoundArgs {
    pub players: Vec<String>,
    pub first: usize,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn handle_round_command(
    args: &RoundArgs,
    config: TableConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let names = clean_player_names(&args.players);
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut table = Table::with_seed(&names, config, seed)?;
    if args.first >= table.seat_count() {
        return Err(CliError::InvalidInput(format!(
            "--first {} is not a seat (0..{})",
            args.first,
            table.seat_count()
        )));
    }
    table.set_first_to_act(args.first)?;
    table.deal_hole_cards()?;
    table.deal_community(5)?;

    writeln!(
        out,
        "round: players={} seed={} min_bet={} chip_unit={}",
        names.len(),
        seed,
        config.min_bet,
        config.chip_unit
    )?;

    let outcome = {
        let mut round = BettingRound::new(&mut table);
        if let Err(e) = drive(&mut round, out, err, stdin) {
            if matches!(e, CliError::Interrupted(_)) {
                ui::display_warning(
                    err,
                    &format!("round abandoned after {} actions", round.history().len()),
                )?;
            }
            return Err(e);
        }
        round.finish()?
    };

    report(&mut table, &outcome, out)?;
    if args.json {
        let json = serde_json::to_string(&outcome).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

fn drive(
    round: &mut BettingRound<'_>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    while let Some(seat) = round.next_turn()? {
        let table = round.table();
        let name = table
            .player(seat)
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        let ctx = table.betting_context(seat);
        let legal: Vec<&str> = legal_kinds(&ctx).iter().map(|k| k.as_str()).collect();

        loop {
            write!(
                out,
                "{} to act (to call {}) [{}]> ",
                name,
                ctx.amount_to_call,
                legal.join("/")
            )?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                return Err(CliError::InvalidInput(
                    "input ended before the betting round closed".into(),
                ));
            };
            if line.is_empty() {
                continue;
            }
            match parse_player_action(&line, ctx.amount_to_call) {
                ParseResult::Quit => return Err(CliError::Interrupted("quit requested".into())),
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                ParseResult::Action(action) => match round.submit_action(seat, action) {
                    Ok(()) => {
                        writeln!(out, "{}: {}", name, action)?;
                        break;
                    }
                    Err(e) if e.is_recoverable() => ui::write_error(err, &e.to_string())?,
                    Err(e) => return Err(e.into()),
                },
            }
        }
    }
    Ok(())
}

fn report(table: &mut Table, outcome: &RoundOutcome, out: &mut dyn Write) -> Result<(), CliError> {
    let name_of = |t: &Table, seat: usize| {
        t.player(seat)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    };

    match outcome.end {
        RoundEnd::Uncontested(seat) => {
            writeln!(out, "{} wins uncontested", name_of(table, seat))?;
        }
        RoundEnd::ActionClosed => {
            writeln!(out, "Betting closed at {}", table.current_amount())?;
            assign_best_hands(table)?;
            writeln!(out, "Board: {}", format_cards(table.community_cards()))?;
            for seat in table.active_seats() {
                if let Some(p) = table.player(seat) {
                    let hand = p.hand().map(|h| h.to_string()).unwrap_or_default();
                    writeln!(out, "{} [{}]: {}", p.name(), format_cards(p.hole_cards()), hand)?;
                }
            }
            let won: Vec<String> = winners(table)?
                .into_iter()
                .map(|s| name_of(table, s))
                .collect();
            writeln!(out, "Winner(s): {}", won.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(players: &[&str]) -> RoundArgs {
        RoundArgs {
            players: players.iter().map(|s| s.to_string()).collect(),
            first: 0,
            seed: Some(8),
            json: false,
        }
    }

    fn play(args: &RoundArgs, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes());
        let res = handle_round_command(args, TableConfig::default(), &mut out, &mut err, &mut stdin);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn fold_out_is_uncontested() {
        let (res, out, _) = play(&args(&["ann", "bob"]), "bet 100\nfold\n");
        res.unwrap();
        assert!(out.contains("ann wins uncontested"), "{out}");
    }

    #[test]
    fn bad_lines_are_reprompted() {
        let (res, out, err) = play(&args(&["ann", "bob"]), "dance\ncall\n\ncheck\ncheck\n");
        res.unwrap();
        assert!(err.contains("Unrecognized action 'dance'"), "{err}");
        assert!(err.contains("Invalid input") || err.contains("needs a positive amount"), "{err}");
        assert!(out.contains("Winner(s):"), "{out}");
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let (res, _, _) = play(&args(&["ann", "bob"]), "check\n");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn quit_interrupts() {
        let (res, _, err) = play(&args(&["ann", "bob"]), "bet 100\nq\n");
        assert!(matches!(res, Err(CliError::Interrupted(_))));
        assert!(err.contains("round abandoned after 1 actions"), "{err}");
    }

    #[test]
    fn first_seat_must_exist() {
        let mut a = args(&["ann", "bob"]);
        a.first = 2;
        let (res, _, _) = play(&a, "");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }
}
