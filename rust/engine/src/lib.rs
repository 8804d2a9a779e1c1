//! # tablestakes-engine: Hold'em Rules Core
//!
//! The rules half of a Texas Hold'em table: a five-card hand evaluator and a
//! betting-round scheduler that decides whose turn it is and when the round
//! is over. Reading input and talking to players is left to a driver; the
//! `tablestakes` CLI is one.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seedable deck that deals uniformly from the remaining cards
//! - [`hand`] - Five-card classification, canonical arrangement and ordering
//! - [`action`] - Player actions and their amount invariants
//! - [`rules`] - Betting legality against the current table state
//! - [`player`] - Per-seat state: contribution, pending action, cards
//! - [`table`] - Seats, active set and round bookkeeping
//! - [`round`] - Pull-based betting round scheduler
//! - [`events`] - Observable round events and the sink trait
//! - [`showdown`] - Picking winners among active seats
//! - [`errors`] - Error types for every fallible operation
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::parse_cards;
//! use tablestakes_engine::hand::{Category, Hand};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let best = Hand::best_of(&cards).unwrap();
//! assert_eq!(best.category(), Category::RoyalFlush);
//! ```
//!
//! ## Driving a Betting Round
//!
//! ```rust
//! use tablestakes_engine::action::Action;
//! use tablestakes_engine::round::BettingRound;
//! use tablestakes_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::with_seed(&["ann", "bob", "cy"], TableConfig::default(), 42).unwrap();
//! let mut round = BettingRound::new(&mut table);
//! while let Some(seat) = round.next_turn().unwrap() {
//!     round.submit_action(seat, Action::check()).unwrap();
//! }
//! let outcome = round.finish().unwrap();
//! assert_eq!(outcome.visited, vec![0, 1, 2]);
//! ```

pub mod action;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod hand;
pub mod player;
pub mod round;
pub mod rules;
pub mod showdown;
pub mod table;
