//! Command-line surface of the `tablestakes` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tablestakes",
    version,
    about = "Hold'em rules engine: hand evaluation and betting rounds"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a hand; six or seven cards pick the best five
    Eval {
        /// Cards such as `Ah Kd 7c 7s 2d`
        #[arg(required = true)]
        cards: Vec<String>,
        /// Second hand to compare against, e.g. "Qs Qd 9h 8c 2s"
        #[arg(long)]
        against: Option<String>,
    },
    /// Deal hole cards and a board, then resolve the showdown
    Deal {
        #[arg(long, value_delimiter = ',', default_value = "P1,P2")]
        players: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Drive one betting round with actions read from stdin
    Round {
        #[arg(long, value_delimiter = ',', default_value = "A,B,C,D")]
        players: Vec<String>,
        /// Seat that opens the betting (0-based)
        #[arg(long, default_value_t = 0)]
        first: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the round outcome as JSON when done
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved table configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Eval { .. } => "eval",
            Commands::Deal { .. } => "deal",
            Commands::Round { .. } => "round",
            Commands::Cfg => "cfg",
        }
    }
}
