// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker poker hand evaluator.
//!
//! Scores five cards poker hands, compares scores, selects the strongest five
//! cards out of a larger set, and deals evaluated hands to players.
//!
//! To evaluate a hand use [HandScore::eval] and compare the returned scores:
//!
//! ```
//! # use kicker_eval::*;
//! let flush = parse_cards("AS QS 10S 8S 6S").unwrap();
//! let straight = parse_cards("AH KD QC JS 10H").unwrap();
//!
//! let v1 = HandScore::eval(&flush);
//! let v2 = HandScore::eval(&straight);
//! assert_eq!(v1.values(), [5, 14, 12, 10, 8, 6]);
//! assert_eq!(v2.rank(), Some(HandRank::Straight));
//! assert!(v1 > v2);
//! ```
//!
//! To get the best hand out of seven cards use [BestHand::find]:
//!
//! ```
//! # use kicker_eval::*;
//! let cards = parse_cards("AS KS QS JS 10S 9H 8H").unwrap();
//! let best = BestHand::find(&cards, 5).unwrap();
//! assert_eq!(best.score.values(), [8, 14]);
//! ```
//!
//! and to deal hands from a shuffled deck use a [Dealer]:
//!
//! ```
//! # use kicker_eval::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut dealer = Dealer::new(StdRng::seed_from_u64(7));
//! let players = dealer.deal(&Deck::default(), 4, 5).unwrap();
//! assert_eq!(players.len(), 4);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandScore, category_name};

mod best;
pub use best::BestHand;

mod dealer;
pub use dealer::{Dealer, PlayerHand};

// Reexport cards types.
pub use kicker_cards::{Card, Deck, ParseCardError, Rank, Suit, combinations, parse_cards};
