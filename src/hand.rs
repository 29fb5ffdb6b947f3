use crate::cards::{parse_cards, Card};
use crate::evaluator::{self, Category};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("A hand must contain exactly 5 cards")]
    InvalidHandSize,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A five-card hand in canonical order: sorted by descending rank on
/// construction, index 0 highest. Immutable once built; the wheel straight
/// also stores ace-first, as `[A, 5, 4, 3, 2]`.
///
/// ```
/// use showdown_rs::evaluator::Category;
/// use showdown_rs::hand::Hand;
///
/// let hand: Hand = "A♥ K♥ Q♥ J♥ 10♥".parse().unwrap();
/// assert_eq!(hand.classify(), Category::RoyalFlush);
/// assert_eq!(hand.to_string(), "A♥ K♥ Q♥ J♥ 10♥");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    /// Copy in the given cards; fails unless there are exactly five.
    /// Duplicate cards are accepted: a single-hand evaluator has no deck
    /// to check against.
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let mut fixed: [Card; 5] = cards.try_into().map_err(|_| HandError::InvalidHandSize)?;
        fixed.sort_by(|a, b| b.cmp_by_rank(*a));
        Ok(Self { cards: fixed })
    }

    /// Cards in canonical descending-rank order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Classify the hand into its category.
    pub fn classify(&self) -> Category {
        evaluator::classify_five(&self.cards)
    }

    /// Tie-broken ordering against another hand: positive if `self`
    /// outranks `other`, negative the other way, zero for a ranking tie.
    /// Only the sign is meaningful.
    ///
    /// ```
    /// use showdown_rs::hand::Hand;
    ///
    /// let quads: Hand = "7♥ 7♦ 7♠ 7♣ 9♥".parse().unwrap();
    /// let boat: Hand = "10♥ 10♦ 10♠ 4♣ 4♥".parse().unwrap();
    /// assert!(quads.compare(&boat) > 0);
    /// assert!(boat.compare(&quads) < 0);
    /// ```
    pub fn compare(&self, other: &Hand) -> i32 {
        evaluator::compare_five(&self.cards, &other.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
