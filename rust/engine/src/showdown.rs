use crate::errors::ShowdownError;
use crate::hand::Hand;
use crate::table::{SeatId, Table};

/// Seats among `entries` holding the strongest hand. Several seats tie when
/// their hands are equal; an empty input gives an empty result.
pub fn best_among<'h, I>(entries: I) -> Vec<SeatId>
where
    I: IntoIterator<Item = (SeatId, &'h Hand)>,
{
    let mut best: Option<&Hand> = None;
    let mut seats = Vec::new();
    for (seat, hand) in entries {
        match best {
            Some(b) if hand < b => {}
            Some(b) if hand == b => seats.push(seat),
            _ => {
                best = Some(hand);
                seats.clear();
                seats.push(seat);
            }
        }
    }
    seats
}

/// Winning seats among the table's active players.
///
/// # Errors
///
/// [`ShowdownError::MissingHand`] when an active seat has no hand assigned.
pub fn winners(table: &Table) -> Result<Vec<SeatId>, ShowdownError> {
    let mut entries = Vec::with_capacity(table.active_count());
    for seat in table.active_seats() {
        let hand = table
            .player(seat)
            .and_then(|p| p.hand())
            .ok_or(ShowdownError::MissingHand(seat))?;
        entries.push((seat, hand));
    }
    Ok(best_among(entries))
}

/// Gives every active player the best hand out of their hole cards and the
/// community cards. Needs at least five cards per player.
pub fn assign_best_hands(table: &mut Table) -> Result<(), ShowdownError> {
    for seat in table.active_seats() {
        let mut cards = table.community_cards().to_vec();
        if let Some(p) = table.player(seat) {
            cards.extend_from_slice(p.hole_cards());
        }
        let hand = Hand::best_of(&cards)?;
        table
            .assign_hand(seat, hand)
            .map_err(|_| ShowdownError::MissingHand(seat))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::cards::parse_cards;
    use crate::table::TableConfig;

    fn hand(s: &str) -> Hand {
        Hand::new(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn single_best_hand_wins() {
        let pair = hand("Kh Kd 7c 5s 2d");
        let trips = hand("3h 3d 3c 9s 2h");
        assert_eq!(best_among([(0, &pair), (1, &trips)]), vec![1]);
    }

    #[test]
    fn suit_only_differences_split() {
        let a = hand("Ah Kh 9c 7d 2s");
        let b = hand("As Kc 9d 7h 2c");
        let c = hand("Qs Jc 9d 7h 2c");
        assert_eq!(best_among([(0, &a), (1, &c), (2, &b)]), vec![0, 2]);
    }

    #[test]
    fn folded_seats_are_ignored_and_missing_hands_reported() {
        let mut t = Table::with_seed(&["a", "b", "c"], TableConfig::default(), 11).unwrap();
        t.apply(1, &Action::fold()).unwrap();
        t.assign_hand(0, hand("2c 3d 4h 5s 7c")).unwrap();
        assert_eq!(winners(&t), Err(ShowdownError::MissingHand(2)));
        t.assign_hand(2, hand("2d 3c 4s 5h 7d")).unwrap();
        assert_eq!(winners(&t), Ok(vec![0, 2]));
    }

    #[test]
    fn assigns_from_hole_and_board() {
        let mut t = Table::with_seed(&["a", "b"], TableConfig::default(), 5).unwrap();
        t.deal_hole_cards().unwrap();
        t.deal_community(5).unwrap();
        assign_best_hands(&mut t).unwrap();
        assert!(t.players().iter().all(|p| p.hand().is_some()));
        assert!(!winners(&t).unwrap().is_empty());
    }
}
