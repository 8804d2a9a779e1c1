use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::{Action, ActionKind};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{DeckError, PlayerError, TableError};
use crate::hand::Hand;
use crate::player::{Player, HOLE_CARDS};
use crate::rules::BettingContext;

/// Index into the table's seating order.
pub type SeatId = usize;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 10;

/// Betting parameters fixed for the life of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Opening value of the smallest rising amount each round
    pub min_bet: u32,
    /// Smallest chip; every bet and raise is a multiple of it
    pub chip_unit: u32,
    /// Allow folding when there is nothing to call
    pub fold_when_not_facing_bet: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_bet: 100,
            chip_unit: 50,
            fold_when_not_facing_bet: false,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.chip_unit == 0 {
            return Err(TableError::InvalidConfig(
                "chip_unit must be >0".into(),
            ));
        }
        if self.min_bet == 0 {
            return Err(TableError::InvalidConfig("min_bet must be >0".into()));
        }
        if self.min_bet % self.chip_unit != 0 {
            return Err(TableError::InvalidConfig(format!(
                "min_bet {} is not a multiple of chip_unit {}",
                self.min_bet, self.chip_unit
            )));
        }
        Ok(())
    }
}

/// Shared state every betting round operates on.
///
/// The table owns its players; everything else refers to them by [`SeatId`].
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    /// Seats still in the hand, parallel to `players`
    active: Vec<bool>,
    /// Highest contribution this round, the amount everyone has to match
    current_amount: u32,
    smallest_rising_amount: u32,
    /// Seat whose unchallenged turn closes the round
    stopping_player: SeatId,
    first_to_act: SeatId,
    community: Vec<Card>,
    deck: Deck,
}

impl Table {
    /// Seats the named players in order with a randomly seeded deck.
    pub fn new(names: &[&str], config: TableConfig) -> Result<Self, TableError> {
        Self::build(names, config, Deck::new())
    }

    /// Like [`Table::new`] but with a reproducible deck.
    pub fn with_seed(names: &[&str], config: TableConfig, seed: u64) -> Result<Self, TableError> {
        Self::build(names, config, Deck::new_with_seed(seed))
    }

    fn build(names: &[&str], config: TableConfig, deck: Deck) -> Result<Self, TableError> {
        config.validate()?;
        if !(MIN_SEATS..=MAX_SEATS).contains(&names.len()) {
            return Err(TableError::SeatCount {
                min: MIN_SEATS,
                max: MAX_SEATS,
                actual: names.len(),
            });
        }
        let mut players: Vec<Player> = Vec::with_capacity(names.len());
        for name in names {
            let p = Player::new(name)?;
            if players.iter().any(|q| q.name() == p.name()) {
                return Err(TableError::DuplicateName(p.name().to_string()));
            }
            players.push(p);
        }
        let seats = players.len();
        let mut table = Self {
            config,
            players,
            active: vec![true; seats],
            current_amount: 0,
            smallest_rising_amount: config.min_bet,
            stopping_player: seats - 1,
            first_to_act: 0,
            community: Vec::with_capacity(5),
            deck,
        };
        table.reset_betting_round_states();
        Ok(table)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn is_active(&self, seat: SeatId) -> bool {
        self.active.get(seat).copied().unwrap_or(false)
    }

    pub fn active_seats(&self) -> Vec<SeatId> {
        (0..self.seat_count()).filter(|&s| self.active[s]).collect()
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn current_amount(&self) -> u32 {
        self.current_amount
    }

    pub fn smallest_rising_amount(&self) -> u32 {
        self.smallest_rising_amount
    }

    pub fn stopping_player(&self) -> SeatId {
        self.stopping_player
    }

    pub fn first_to_act(&self) -> SeatId {
        self.first_to_act
    }

    /// Chooses who opens the next betting round. Takes effect on the next
    /// [`Table::reset_betting_round_states`].
    pub fn set_first_to_act(&mut self, seat: SeatId) -> Result<(), TableError> {
        self.check_seat(seat)?;
        self.first_to_act = seat;
        Ok(())
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// What `seat` still has to put in to match the table.
    pub fn amount_to_call(&self, seat: SeatId) -> u32 {
        self.players
            .get(seat)
            .map(|p| self.current_amount.saturating_sub(p.current_amount()))
            .unwrap_or(0)
    }

    pub fn betting_context(&self, seat: SeatId) -> BettingContext {
        BettingContext {
            amount_to_call: self.amount_to_call(seat),
            smallest_rising_amount: self.smallest_rising_amount,
            chip_unit: self.config.chip_unit,
            fold_when_not_facing_bet: self.config.fold_when_not_facing_bet,
        }
    }

    pub fn next_seat(&self, seat: SeatId) -> SeatId {
        (seat + 1) % self.seat_count()
    }

    /// First active seat at or after `seat`, wrapping.
    pub fn next_active_from(&self, seat: SeatId) -> SeatId {
        let n = self.seat_count();
        (0..n)
            .map(|i| (seat + i) % n)
            .find(|&s| self.active[s])
            .unwrap_or(seat)
    }

    /// Nearest active seat before `seat`, wrapping. Returns `seat` itself
    /// when nobody else is active.
    pub fn previous_active_seat(&self, seat: SeatId) -> SeatId {
        let n = self.seat_count();
        (1..n)
            .map(|i| (seat + n - i) % n)
            .find(|&s| self.active[s])
            .unwrap_or(seat)
    }

    /// Starts a fresh betting round: contributions go back to zero, the
    /// rising amount to the table minimum, and the stopping player becomes
    /// the active seat just before the first one to act.
    pub fn reset_betting_round_states(&mut self) {
        for p in &mut self.players {
            p.reset_round();
        }
        self.current_amount = 0;
        self.smallest_rising_amount = self.config.min_bet;
        let first = self.next_active_from(self.first_to_act);
        self.stopping_player = self.previous_active_seat(first);
    }

    /// Applies an action's bookkeeping without checking legality.
    ///
    /// The amount is added to the player's contribution and the table amount
    /// follows the highest contribution. A bet or raise sets the smallest
    /// rising amount to the growth of the table amount and moves the stopping
    /// player to the active seat before the aggressor. A fold removes the
    /// seat from the active set.
    pub fn apply(&mut self, seat: SeatId, action: &Action) -> Result<(), TableError> {
        self.check_seat(seat)?;
        let previous = self.current_amount;
        let player = &mut self.players[seat];
        player.contribute(action.amount());
        self.current_amount = previous.max(player.current_amount());

        match action.kind() {
            ActionKind::Bet | ActionKind::Raise => {
                self.smallest_rising_amount = self.current_amount - previous;
                self.stopping_player = self.previous_active_seat(seat);
            }
            ActionKind::Fold => {
                self.active[seat] = false;
            }
            ActionKind::Check | ActionKind::Call => {}
        }
        trace!(
            seat,
            %action,
            table_amount = self.current_amount,
            rising = self.smallest_rising_amount,
            stopping = self.stopping_player,
            "applied"
        );
        Ok(())
    }

    /// Gets the table ready for another hand: everyone active again, cards
    /// collected, the deck refilled and round state reset.
    pub fn new_hand(&mut self) {
        self.active.iter_mut().for_each(|a| *a = true);
        for p in &mut self.players {
            p.clear_cards();
        }
        self.community.clear();
        self.deck.reset();
        self.reset_betting_round_states();
    }

    /// Deals two hole cards to every seat, one at a time around the table.
    ///
    /// Fails without touching the deck if any seat already holds cards.
    pub fn deal_hole_cards(&mut self) -> Result<(), TableError> {
        if self.players.iter().any(|p| !p.hole_cards().is_empty()) {
            return Err(PlayerError::HoleCardsFull.into());
        }
        for _ in 0..HOLE_CARDS {
            for p in &mut self.players {
                let c = self.deck.deal_card()?;
                p.give_card(c)?;
            }
        }
        Ok(())
    }

    /// Turns `n` community cards face up.
    pub fn deal_community(&mut self, n: usize) -> Result<(), TableError> {
        if n > self.deck.remaining() {
            return Err(DeckError::Exhausted.into());
        }
        let cards = self.deck.deal_n(n)?;
        self.community.extend(cards);
        Ok(())
    }

    pub fn assign_hand(&mut self, seat: SeatId, hand: Hand) -> Result<(), TableError> {
        self.check_seat(seat)?;
        self.players[seat].set_hand(hand);
        Ok(())
    }

    pub(crate) fn player_mut(&mut self, seat: SeatId) -> Result<&mut Player, TableError> {
        self.players
            .get_mut(seat)
            .ok_or(TableError::InvalidSeat(seat))
    }

    fn check_seat(&self, seat: SeatId) -> Result<(), TableError> {
        if seat < self.seat_count() {
            Ok(())
        } else {
            Err(TableError::InvalidSeat(seat))
        }
    }
}
