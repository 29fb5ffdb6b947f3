use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank};

/// Structural facts about a five-card hand, computed in one pass and shared
/// by every category predicate and tiebreak.
#[derive(Debug, Clone)]
pub(crate) struct HandAnalysis {
    /// Ranks sorted descending; index 0 is the highest card.
    pub ranks: [Rank; 5],
    pub groups: RankGroups,
    pub is_flush: bool,
    pub is_straight: bool,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks =
            [cards[0].rank(), cards[1].rank(), cards[2].rank(), cards[3].rank(), cards[4].rank()];
        ranks.sort_by(|a, b| b.cmp(a));

        let groups = RankGroups::from_cards(cards);
        let first_suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first_suit);
        let is_straight = is_straight(&ranks);

        Self { ranks, groups, is_flush, is_straight }
    }
}

/// Five consecutive descending ranks, or the wheel, where the ace sorts
/// high but plays low: [A, 5, 4, 3, 2].
fn is_straight(ranks_desc: &[Rank; 5]) -> bool {
    let consecutive = (0..4).all(|i| ranks_desc[i].value() == ranks_desc[i + 1].value() + 1);
    consecutive || *ranks_desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]
}
