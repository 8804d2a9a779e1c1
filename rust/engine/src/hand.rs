use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::HandError;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

// Any five distinct symbols forming a contiguous run here are a straight.
// The ace appears at both ends so the wheel (5-4-3-2-A) matches while
// wrap-arounds such as 3-2-A-K-Q do not.
const STRAIGHT_RUN: &str = "AKQJT98765432A";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified five-card hand.
///
/// The cards are kept in canonical arrangement: most repeated rank first,
/// ties by descending deck position, and the wheel written as 5-4-3-2-A.
/// Comparing two hands compares the category and then the ranks of the
/// arrangement position by position, so suits never break a tie.
///
/// ```
/// use tablestakes_engine::cards::parse_cards;
/// use tablestakes_engine::hand::{Category, Hand};
///
/// let wheel = Hand::new(&parse_cards("Ad 5d 4d 3d 2d").unwrap()).unwrap();
/// assert_eq!(wheel.category(), Category::StraightFlush);
/// assert_eq!(wheel.to_string(), "straight flush: 5d 4d 3d 2d Ad");
///
/// let six_high = Hand::new(&parse_cards("6d 5d 4d 3d 2d").unwrap()).unwrap();
/// assert!(six_high > wheel);
/// ```
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Hand {
    category: Category,
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Classifies exactly five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let mut arranged: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::WrongCardCount {
                expected: HAND_SIZE,
                actual: cards.len(),
            })?;
        ensure_unique(&arranged)?;

        arranged.sort_by(|a, b| b.cmp(a));
        if is_wheel(&arranged) {
            arranged.rotate_left(1);
        } else {
            let counts = rank_counts(&arranged);
            // stable: equal counts keep the descending deck order
            arranged.sort_by(|a, b| {
                counts[b.rank.index() as usize].cmp(&counts[a.rank.index() as usize])
            });
        }

        let category = classify(&arranged);
        Ok(Self {
            category,
            cards: arranged,
        })
    }

    /// Picks the strongest five-card hand out of five or more distinct cards.
    pub fn best_of(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() < HAND_SIZE {
            return Err(HandError::WrongCardCount {
                expected: HAND_SIZE,
                actual: cards.len(),
            });
        }
        ensure_unique(cards)?;

        let n = cards.len();
        let mut best: Option<Hand> = None;
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        for e in d + 1..n {
                            let hand =
                                Hand::new(&[cards[a], cards[b], cards[c], cards[d], cards[e]])?;
                            if best.as_ref().is_none_or(|h| hand > *h) {
                                best = Some(hand);
                            }
                        }
                    }
                }
            }
        }
        best.ok_or(HandError::WrongCardCount {
            expected: HAND_SIZE,
            actual: n,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Cards in canonical arrangement.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Rank indices of the canonical arrangement, the kicker sequence.
    pub fn rank_indices(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|c| c.rank.index())
    }

    fn key(&self) -> (Category, [u8; HAND_SIZE]) {
        (self.category, self.rank_indices())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for c in &self.cards {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.cmp(b)
}

fn ensure_unique(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = [false; 52];
    for c in cards {
        let slot = &mut seen[c.deck_position() as usize];
        if *slot {
            return Err(HandError::DuplicateCard(*c));
        }
        *slot = true;
    }
    Ok(())
}

fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank.index() as usize] += 1;
    }
    counts
}

// Expects cards sorted by descending deck position.
fn is_wheel(sorted: &[Card; HAND_SIZE]) -> bool {
    sorted.map(|c| c.rank) == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]
}

fn classify(arranged: &[Card; HAND_SIZE]) -> Category {
    let flush = arranged.iter().all(|c| c.suit == arranged[0].suit);
    let symbols: String = arranged.iter().map(|c| c.rank.symbol()).collect();
    let straight = STRAIGHT_RUN.contains(symbols.as_str());

    match (flush, straight) {
        (true, true) if arranged[0].rank == Rank::Ace => return Category::RoyalFlush,
        (true, true) => return Category::StraightFlush,
        _ => {}
    }

    let mut repeats: Vec<u8> = rank_counts(arranged)
        .into_iter()
        .filter(|&n| n > 0)
        .collect();
    repeats.sort_unstable_by(|a, b| b.cmp(a));

    match repeats.as_slice() {
        [4, ..] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if flush => Category::Flush,
        _ if straight => Category::Straight,
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::OnePair,
        _ => Category::HighCard,
    }
}
