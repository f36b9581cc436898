// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, HandScore, combinations::for_each_combination};

/// The strongest hand found in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// The hand cards in the same order as the input cards.
    pub hand: Vec<Card>,
    /// The hand score.
    pub score: HandScore,
}

impl BestHand {
    /// Finds the strongest `hand_size` subset of `cards`.
    ///
    /// Returns `None` if there are fewer cards than `hand_size` or if
    /// `hand_size` is 0. When more subsets have the same score the first one
    /// generated is returned, subsets are generated in the
    /// [combinations](crate::combinations) order.
    ///
    /// Only five cards hands get a category, any other size evaluates to the
    /// high card sentinel and returns the first subset.
    pub fn find(cards: &[Card], hand_size: usize) -> Option<BestHand> {
        if cards.len() < hand_size {
            debug!(
                "Cannot select a {hand_size} cards hand from {} cards",
                cards.len()
            );
            return None;
        }

        let mut best: Option<BestHand> = None;
        for_each_combination(cards, hand_size, |hand| {
            let score = HandScore::eval(hand);
            if best.as_ref().is_none_or(|b| score > b.score) {
                trace!("New best hand {hand:?} {score}");
                best = Some(BestHand {
                    hand: hand.to_vec(),
                    score,
                });
            }
        });

        best
    }

    /// Finds the strongest five cards hand.
    pub fn find_five(cards: &[Card]) -> Option<BestHand> {
        Self::find(cards, HandScore::HAND_SIZE)
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.hand {
            write!(f, "{card} ")?;
        }

        write!(f, "{} {}", self.score.name(), self.score)
    }
}
