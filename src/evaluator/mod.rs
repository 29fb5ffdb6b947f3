pub(crate) mod analysis;
pub(crate) mod classify;
pub(crate) mod rank_groups;
pub(crate) mod tiebreak;

use crate::cards::Card;
use analysis::HandAnalysis;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category. Ten mutually exclusive tags; strength comparison
/// goes through [`Category::strength`], never through declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    /// All categories, weakest to strongest.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Strength lookup table, low to high. Only differences of these values
    /// are meaningful, and only their sign.
    pub const fn strength(self) -> u8 {
        match self {
            Category::HighCard => 1,
            Category::Pair => 2,
            Category::TwoPair => 3,
            Category::ThreeOfAKind => 4,
            Category::Straight => 5,
            Category::Flush => 6,
            Category::FullHouse => 7,
            Category::FourOfAKind => 8,
            Category::StraightFlush => 9,
            Category::RoyalFlush => 10,
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        };
        f.write_str(name)
    }
}

/// Classify exactly five cards: the first matching category in priority
/// order, strongest checked first.
///
/// ```
/// use showdown_rs::cards::{parse_cards, Card};
/// use showdown_rs::evaluator::{classify_five, Category};
///
/// let cards: [Card; 5] = parse_cards("A♥ K♥ Q♥ J♥ 10♥").unwrap().try_into().unwrap();
/// assert_eq!(classify_five(&cards), Category::RoyalFlush);
/// ```
pub fn classify_five(cards: &[Card; 5]) -> Category {
    classify_analysis(&HandAnalysis::new(cards))
}

fn classify_analysis(analysis: &HandAnalysis) -> Category {
    for (category, matches) in classify::CLASSIFIERS.iter() {
        if matches(analysis) {
            return *category;
        }
    }
    // Unreachable: the high-card predicate always matches as fallback
    unreachable!("high card should always match")
}

/// Compare two five-card hands. Different categories resolve by strength
/// difference; matching categories fall through to the category-specific
/// tiebreak. Only the sign of the result is meaningful.
///
/// ```
/// use showdown_rs::cards::{parse_cards, Card};
/// use showdown_rs::evaluator::compare_five;
///
/// let quads: [Card; 5] = parse_cards("7♥ 7♦ 7♠ 7♣ 9♥").unwrap().try_into().unwrap();
/// let boat: [Card; 5] = parse_cards("10♥ 10♦ 10♠ 4♣ 4♥").unwrap().try_into().unwrap();
/// assert!(compare_five(&quads, &boat) > 0);
/// ```
pub fn compare_five(a: &[Card; 5], b: &[Card; 5]) -> i32 {
    let analysis_a = HandAnalysis::new(a);
    let analysis_b = HandAnalysis::new(b);
    let category_a = classify_analysis(&analysis_a);
    let category_b = classify_analysis(&analysis_b);
    if category_a != category_b {
        return i32::from(category_a.strength()) - i32::from(category_b.strength());
    }
    tiebreak::resolve(category_a, &analysis_a, &analysis_b)
}
