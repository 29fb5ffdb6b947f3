use crate::cards::Card;
use crate::evaluator::Category;
use crate::hand::{Hand, HandError};

/// Which side of a two-hand showdown won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    FirstHand,
    SecondHand,
    Tie,
}

/// Outcome of a showdown: the winner plus both categories for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winner: Winner,
    pub first_category: Category,
    pub second_category: Category,
}

impl ShowdownResult {
    /// Category of the winning hand. On a tie both categories are equal, so
    /// the first is returned.
    pub fn winning_category(&self) -> Category {
        match self.winner {
            Winner::SecondHand => self.second_category,
            Winner::FirstHand | Winner::Tie => self.first_category,
        }
    }

    /// Category of the losing hand (or the shared category on a tie).
    pub fn losing_category(&self) -> Category {
        match self.winner {
            Winner::SecondHand => self.first_category,
            Winner::FirstHand | Winner::Tie => self.second_category,
        }
    }
}

/// Decide a showdown between two five-card sequences. Both sides go through
/// hand construction, so anything but exactly five cards per side fails.
///
/// ```
/// use showdown_rs::cards::parse_cards;
/// use showdown_rs::evaluator::Category;
/// use showdown_rs::showdown::{evaluate_winner, Winner};
///
/// let royal = parse_cards("A♥ K♥ Q♥ J♥ 10♥").unwrap();
/// let steel = parse_cards("9♠ 8♠ 7♠ 6♠ 5♠").unwrap();
/// let result = evaluate_winner(&royal, &steel).unwrap();
/// assert_eq!(result.winner, Winner::FirstHand);
/// assert_eq!(result.first_category, Category::RoyalFlush);
/// assert_eq!(result.second_category, Category::StraightFlush);
/// ```
pub fn evaluate_winner(first: &[Card], second: &[Card]) -> Result<ShowdownResult, HandError> {
    let first = Hand::from_slice(first)?;
    let second = Hand::from_slice(second)?;
    let sign = first.compare(&second);
    let winner = if sign > 0 {
        Winner::FirstHand
    } else if sign < 0 {
        Winner::SecondHand
    } else {
        Winner::Tie
    };
    Ok(ShowdownResult {
        winner,
        first_category: first.classify(),
        second_category: second.classify(),
    })
}
