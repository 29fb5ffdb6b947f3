//! showdown-rs: five-card poker hand classification and showdown comparison
//!
//! Goals:
//! - Deterministic classification of five-card hands into ten categories
//! - Tie-broken two-hand comparison with explicit per-category rules
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify and compare
//! ```
//! use showdown_rs::evaluator::Category;
//! use showdown_rs::hand::Hand;
//!
//! let straight: Hand = "9♥ 8♣ 7♠ 6♦ 5♥".parse().unwrap();
//! let flush: Hand = "K♦ 10♦ 8♦ 6♦ 3♦".parse().unwrap();
//! assert_eq!(straight.classify(), Category::Straight);
//! assert_eq!(flush.classify(), Category::Flush);
//! assert!(flush.compare(&straight) > 0);
//! ```
//!
//! ## Showdown between two hands
//! ```
//! use showdown_rs::cards::parse_cards;
//! use showdown_rs::showdown::{evaluate_winner, Winner};
//!
//! let first = parse_cards("J♥ J♣ 4♠ 4♥ A♦").unwrap();
//! let second = parse_cards("10♥ 10♣ K♠ 4♦ 3♦").unwrap();
//! let result = evaluate_winner(&first, &second).unwrap();
//! assert_eq!(result.winner, Winner::FirstHand);
//! ```

pub mod cards;
pub mod evaluator;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
