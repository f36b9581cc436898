// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker playing cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10D".parse::<Card>().unwrap();
//! assert_eq!(td.rank().value(), 10);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! a [Deck] type for shuffling, dealing, and iterating cards in the deck:
//!
//! ```
//! # use kicker_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! assert!(deck.deal().is_some());
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! and the [combinations] generators, for example to iterate through all
//! 5 cards hands:
//!
//! ```no_run
//! # use kicker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, parse_cards};

pub mod combinations;

mod deck;
pub use deck::Deck;

mod error;
pub use error::ParseCardError;
