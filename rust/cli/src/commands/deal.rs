//! Deal command handler.
//!
//! Deals hole cards to every player and a full board, then resolves the
//! showdown without any betting. Supports optional seeding for deterministic
//! dealing.

use std::io::Write;

use tablestakes_engine::showdown::{assign_best_hands, winners};
use tablestakes_engine::table::{Table, TableConfig};

use crate::error::CliError;
use crate::ui::format_cards;
use crate::validation::clean_player_names;

pub fn handle_deal_command(
    players: &[String],
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let names = clean_player_names(players);
    let mut table = Table::with_seed(&names, TableConfig::default(), base_seed)?;
    table.deal_hole_cards()?;
    table.deal_community(5)?;
    assign_best_hands(&mut table)?;

    writeln!(out, "deal: players={} seed={}", names.len(), base_seed)?;
    for p in table.players() {
        writeln!(out, "Hole {}: {}", p.name(), format_cards(p.hole_cards()))?;
    }
    writeln!(out, "Board: {}", format_cards(table.community_cards()))?;
    for p in table.players() {
        if let Some(hand) = p.hand() {
            writeln!(out, "{}: {}", p.name(), hand)?;
        }
    }
    let won: Vec<&str> = winners(&table)?
        .into_iter()
        .filter_map(|s| table.player(s).map(|p| p.name()))
        .collect();
    writeln!(out, "Winner(s): {}", won.join(", "))?;
    Ok(())
}
