use super::analysis::HandAnalysis;
use super::Category;
use crate::cards::Rank;

/// Resolve a same-category tie as a signed rank difference. Every branch
/// returns a plain difference, so the reversed call is the exact negation.
///
/// The quirks are intentional and preserved: the positional categories do
/// not special-case the wheel (its ace still compares as 14), and the quad
/// tiebreak never consults the kicker.
pub(crate) fn resolve(category: Category, a: &HandAnalysis, b: &HandAnalysis) -> i32 {
    match category {
        // Unique by construction; two royal flushes always tie.
        Category::RoyalFlush => 0,
        Category::StraightFlush | Category::Flush | Category::Straight | Category::HighCard => {
            by_position(&a.ranks, &b.ranks)
        }
        Category::FourOfAKind => rank_diff(a.groups.quad().unwrap(), b.groups.quad().unwrap()),
        Category::FullHouse => {
            let trips = rank_diff(a.groups.trips().unwrap(), b.groups.trips().unwrap());
            if trips != 0 {
                return trips;
            }
            rank_diff(a.groups.pairs()[0], b.groups.pairs()[0])
        }
        Category::ThreeOfAKind => {
            let trips = rank_diff(a.groups.trips().unwrap(), b.groups.trips().unwrap());
            if trips != 0 {
                return trips;
            }
            by_position(&a.groups.kickers(), &b.groups.kickers())
        }
        Category::TwoPair => {
            let pairs_a = a.groups.pairs();
            let pairs_b = b.groups.pairs();
            let high = rank_diff(pairs_a[0], pairs_b[0]);
            if high != 0 {
                return high;
            }
            let low = rank_diff(pairs_a[1], pairs_b[1]);
            if low != 0 {
                return low;
            }
            rank_diff(a.groups.kickers()[0], b.groups.kickers()[0])
        }
        Category::Pair => {
            let pair = rank_diff(a.groups.pairs()[0], b.groups.pairs()[0]);
            if pair != 0 {
                return pair;
            }
            by_position(&a.groups.kickers(), &b.groups.kickers())
        }
    }
}

fn rank_diff(a: Rank, b: Rank) -> i32 {
    i32::from(a.value()) - i32::from(b.value())
}

/// First differing position decides; both sides are already descending.
fn by_position(a: &[Rank], b: &[Rank]) -> i32 {
    a.iter().zip(b.iter()).map(|(x, y)| rank_diff(*x, *y)).find(|d| *d != 0).unwrap_or(0)
}
