use crate::action::Action;
use crate::cards::Card;
use crate::errors::PlayerError;
use crate::hand::Hand;

/// Most private cards a Hold'em player holds.
pub const HOLE_CARDS: usize = 2;

/// One seat's state at the table.
///
/// `current_amount` is what the player has put in during the current betting
/// round. It only grows within a round and is reset by
/// [`crate::table::Table::reset_betting_round_states`].
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name, unique at the table
    name: String,
    /// Chips contributed this betting round
    current_amount: u32,
    /// Action submitted for the turn being processed
    pending_action: Option<Action>,
    /// Hole cards (up to 2 cards)
    hole: Vec<Card>,
    /// Best hand, assigned by the caller before showdown
    hand: Option<Hand>,
}

impl Player {
    pub fn new(name: &str) -> Result<Self, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            current_amount: 0,
            pending_action: None,
            hole: Vec::with_capacity(HOLE_CARDS),
            hand: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_amount(&self) -> u32 {
        self.current_amount
    }

    pub fn pending_action(&self) -> Option<&Action> {
        self.pending_action.as_ref()
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), PlayerError> {
        if self.hole.len() >= HOLE_CARDS {
            return Err(PlayerError::HoleCardsFull);
        }
        self.hole.push(c);
        Ok(())
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    /// Drops hole cards and the assigned hand before a new deal.
    pub fn clear_cards(&mut self) {
        self.hole.clear();
        self.hand = None;
    }

    pub(crate) fn contribute(&mut self, amount: u32) {
        self.current_amount = self.current_amount.saturating_add(amount);
    }

    pub(crate) fn reset_round(&mut self) {
        self.current_amount = 0;
        self.pending_action = None;
    }

    pub(crate) fn set_pending(&mut self, action: Action) {
        self.pending_action = Some(action);
    }

    pub(crate) fn take_pending(&mut self) -> Option<Action> {
        self.pending_action.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Player::new("   ").unwrap_err(), PlayerError::EmptyName);
        assert_eq!(Player::new(" ann ").unwrap().name(), "ann");
    }

    #[test]
    fn holds_at_most_two_cards() {
        let mut p = Player::new("ann").unwrap();
        p.give_card(Card::new(Rank::Ace, Suit::Spades)).unwrap();
        p.give_card(Card::new(Rank::King, Suit::Spades)).unwrap();
        assert_eq!(
            p.give_card(Card::new(Rank::Two, Suit::Clubs)),
            Err(PlayerError::HoleCardsFull)
        );
        assert_eq!(p.hole_cards().len(), 2);
        p.clear_cards();
        assert!(p.hole_cards().is_empty());
    }

    #[test]
    fn pending_slot_is_taken_once() {
        let mut p = Player::new("ann").unwrap();
        p.set_pending(Action::check());
        assert_eq!(p.pending_action(), Some(&Action::check()));
        assert_eq!(p.take_pending(), Some(Action::check()));
        assert_eq!(p.take_pending(), None);
    }
}
