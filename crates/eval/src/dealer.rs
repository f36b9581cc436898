// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands dealing.
use log::debug;
use rand::{prelude::*, rngs::ThreadRng};
use serde::Serialize;
use std::fmt;

use crate::{Card, Deck, HandScore};

/// A dealt player hand with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerHand {
    /// The player cards in the order they were dealt.
    pub hand: Vec<Card>,
    /// The hand score.
    pub score: HandScore,
    /// The hand category name.
    pub name: &'static str,
}

impl PlayerHand {
    /// Evaluates a dealt hand.
    pub fn new(hand: Vec<Card>) -> Self {
        let score = HandScore::eval(&hand);
        let name = score.name();
        Self { hand, score, name }
    }
}

impl fmt::Display for PlayerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.hand {
            write!(f, "{card} ")?;
        }

        write!(f, "{} {}", self.name, self.score)
    }
}

/// Deals hands from shuffled decks.
///
/// The dealer owns the random source used for shuffling, use a seeded rng to
/// get reproducible deals.
#[derive(Debug)]
pub struct Dealer<R> {
    rng: R,
}

impl Dealer<ThreadRng> {
    /// Creates a dealer that shuffles with the thread local rng.
    pub fn new_with_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for Dealer<ThreadRng> {
    fn default() -> Self {
        Self::new_with_thread_rng()
    }
}

impl<R: Rng> Dealer<R> {
    /// Creates a dealer with the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Deals `hand_size` cards to each of `players` players.
    ///
    /// The input deck is not changed, a copy is shuffled and cards are taken
    /// from its end one per player for each round, so the first player gets
    /// the first, the `players + 1`-th, ... card dealt.
    ///
    /// Returns `None` if the deck has fewer than `players * hand_size` cards.
    pub fn deal(
        &mut self,
        deck: &Deck,
        players: usize,
        hand_size: usize,
    ) -> Option<Vec<PlayerHand>> {
        let needed = players.checked_mul(hand_size)?;
        if deck.count() < needed {
            debug!(
                "Deck has {} cards, {players}x{hand_size} needed",
                deck.count()
            );
            return None;
        }

        let mut shuffled = deck.clone();
        shuffled.shuffle(&mut self.rng);

        let mut hands = vec![Vec::with_capacity(hand_size); players];
        for _ in 0..hand_size {
            for hand in hands.iter_mut() {
                hand.extend(shuffled.deal());
            }
        }

        debug!("Dealt {players} hands of {hand_size} cards");
        Some(hands.into_iter().map(PlayerHand::new).collect())
    }
}
