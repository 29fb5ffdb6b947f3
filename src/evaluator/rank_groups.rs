use crate::cards::{Card, Rank};

/// Rank multiplicities for a five-card hand, grouped and sorted by
/// (count desc, rank desc). AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count each distinct rank's multiplicity over the five cards. Suits
    /// never participate; the multiplicities sum to five.
    pub fn from_cards(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups = Vec::new();
        for rank in Rank::ALL.iter().copied() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Rank appearing four times, if any.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// Rank appearing three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// All ranks appearing exactly twice, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// All singleton ranks, descending.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 1).map(|(rank, _)| *rank).collect()
    }

    /// Trips plus a (different) pair.
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }
}
