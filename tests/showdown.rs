use showdown_rs::cards::parse_cards;
use showdown_rs::evaluator::Category;
use showdown_rs::hand::HandError;
use showdown_rs::showdown::{evaluate_winner, Winner};

#[test]
fn royal_flush_beats_nine_high_straight_flush() {
    let first = parse_cards("A♥ K♥ Q♥ J♥ 10♥").unwrap();
    let second = parse_cards("9♠ 8♠ 7♠ 6♠ 5♠").unwrap();

    let result = evaluate_winner(&first, &second).unwrap();
    assert_eq!(result.winner, Winner::FirstHand);
    assert_eq!(result.winning_category(), Category::RoyalFlush);
    assert_eq!(result.losing_category(), Category::StraightFlush);
    assert_eq!(result.winning_category().to_string(), "royal flush");
    assert_eq!(result.losing_category().to_string(), "straight flush");
}

#[test]
fn straight_flush_wins_from_either_seat() {
    let straight = parse_cards("9♥ 8♣ 7♠ 6♦ 5♥").unwrap();
    let straight_flush = parse_cards("K♥ Q♥ J♥ 10♥ 9♥").unwrap();

    let result = evaluate_winner(&straight_flush, &straight).unwrap();
    assert_eq!(result.winner, Winner::FirstHand);

    let reversed = evaluate_winner(&straight, &straight_flush).unwrap();
    assert_eq!(reversed.winner, Winner::SecondHand);
    assert_eq!(reversed.winning_category(), Category::StraightFlush);
    assert_eq!(reversed.losing_category(), Category::Straight);
}

#[test]
fn two_pair_beats_pair_with_king_kicker() {
    let two_pair = parse_cards("J♥ J♣ 4♠ 4♥ A♦").unwrap();
    let one_pair = parse_cards("10♥ 10♣ K♠ 4♦ 3♦").unwrap();

    let result = evaluate_winner(&two_pair, &one_pair).unwrap();
    assert_eq!(result.winner, Winner::FirstHand);
    assert_eq!(result.first_category, Category::TwoPair);
    assert_eq!(result.second_category, Category::Pair);
}

#[test]
fn rank_identical_hands_tie_with_both_categories_reported() {
    let first = parse_cards("9♥ 8♣ 7♠ 6♦ 5♥").unwrap();
    let second = parse_cards("9♦ 8♠ 7♣ 6♥ 5♠").unwrap();

    let result = evaluate_winner(&first, &second).unwrap();
    assert_eq!(result.winner, Winner::Tie);
    assert_eq!(result.first_category, Category::Straight);
    assert_eq!(result.second_category, Category::Straight);
    assert_eq!(result.winning_category(), result.losing_category());
}

#[test]
fn wrong_hand_size_surfaces_the_construction_error() {
    let four = parse_cards("A♥ K♦ 7♠ 5♣").unwrap();
    let five = parse_cards("A♠ K♣ 7♥ 5♦ 2♣").unwrap();

    let err = evaluate_winner(&four, &five).unwrap_err();
    assert!(matches!(err, HandError::InvalidHandSize));
    assert_eq!(err.to_string(), "A hand must contain exactly 5 cards");
}
