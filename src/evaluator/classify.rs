use super::analysis::HandAnalysis;
use super::Category;
use crate::cards::Rank;

type Predicate = fn(&HandAnalysis) -> bool;

/// Category predicates in detection order, strongest first. Higher
/// categories subsume the patterns below them, so the first match wins and
/// the order must not change. High card always matches as the fallback.
pub(crate) const CLASSIFIERS: [(Category, Predicate); 10] = [
    (Category::RoyalFlush, is_royal_flush),
    (Category::StraightFlush, is_straight_flush),
    (Category::FourOfAKind, is_four_of_a_kind),
    (Category::FullHouse, is_full_house),
    (Category::Flush, is_flush),
    (Category::Straight, is_straight),
    (Category::ThreeOfAKind, is_three_of_a_kind),
    (Category::TwoPair, is_two_pair),
    (Category::Pair, is_one_pair),
    (Category::HighCard, is_high_card),
];

fn is_royal_flush(a: &HandAnalysis) -> bool {
    a.is_flush && a.is_straight && a.ranks[0] == Rank::Ace && a.ranks[4] == Rank::Ten
}

fn is_straight_flush(a: &HandAnalysis) -> bool {
    a.is_flush && a.is_straight
}

fn is_four_of_a_kind(a: &HandAnalysis) -> bool {
    a.groups.quad().is_some()
}

fn is_full_house(a: &HandAnalysis) -> bool {
    a.groups.has_full_house()
}

fn is_flush(a: &HandAnalysis) -> bool {
    a.is_flush
}

fn is_straight(a: &HandAnalysis) -> bool {
    a.is_straight
}

fn is_three_of_a_kind(a: &HandAnalysis) -> bool {
    a.groups.trips().is_some() && !a.groups.has_full_house()
}

fn is_two_pair(a: &HandAnalysis) -> bool {
    a.groups.pairs().len() == 2
}

fn is_one_pair(a: &HandAnalysis) -> bool {
    a.groups.pairs().len() == 1
}

fn is_high_card(_: &HandAnalysis) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 5] = crate::cards::parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn royal_flush_also_satisfies_the_weaker_predicates() {
        let royal = analyze("A♥ K♥ Q♥ J♥ 10♥");
        assert!(is_royal_flush(&royal));
        assert!(is_straight_flush(&royal));
        assert!(is_flush(&royal));
        assert!(is_straight(&royal));
    }

    #[test]
    fn king_high_straight_flush_is_not_royal() {
        let sf = analyze("K♥ Q♥ J♥ 10♥ 9♥");
        assert!(!is_royal_flush(&sf));
        assert!(is_straight_flush(&sf));
    }

    #[test]
    fn steel_wheel_is_a_straight_flush_not_royal() {
        let wheel_flush = analyze("A♠ 5♠ 4♠ 3♠ 2♠");
        assert!(!is_royal_flush(&wheel_flush));
        assert!(is_straight_flush(&wheel_flush));
    }

    #[test]
    fn full_house_blocks_three_of_a_kind() {
        let boat = analyze("10♥ 10♦ 10♠ 4♣ 4♥");
        assert!(is_full_house(&boat));
        assert!(!is_three_of_a_kind(&boat));

        let trips = analyze("Q♣ Q♦ Q♥ 10♠ 2♣");
        assert!(!is_full_house(&trips));
        assert!(is_three_of_a_kind(&trips));
    }

    #[test]
    fn pair_counting_separates_one_and_two_pair() {
        let two_pair = analyze("J♥ J♣ 4♠ 4♥ A♦");
        assert!(is_two_pair(&two_pair));
        assert!(!is_one_pair(&two_pair));

        let one_pair = analyze("10♥ 10♣ K♠ 4♥ 3♦");
        assert!(is_one_pair(&one_pair));
        assert!(!is_two_pair(&one_pair));
    }

    #[test]
    fn classifier_table_is_ordered_strongest_first() {
        for window in CLASSIFIERS.windows(2) {
            assert!(window[0].0.strength() > window[1].0.strength());
        }
    }
}
