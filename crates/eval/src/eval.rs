// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
//!
//! A hand is scored into a [HandScore], a sequence of integers where the first
//! element is the [HandRank] category and the following elements are the
//! values that break ties between hands of the same category, from the most
//! significant to the least significant:
//!
//! ```text
//!   Straight Flush   [8, high]
//!   Four of a Kind   [7, four, kicker]
//!   Full House       [6, three, pair]
//!   Flush            [5, r1, r2, r3, r4, r5]
//!   Straight         [4, high]
//!   Three of a Kind  [3, three, kicker1, kicker2]
//!   Two Pair         [2, high pair, low pair, kicker]
//!   Pair             [1, pair, kicker1, kicker2, kicker3]
//!   High Card        [0, r1, r2, r3, r4, r5]
//! ```
//!
//! The ace to five straight (the wheel) has high value 5 and is the lowest
//! straight.
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::Card;

/// The hand category from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the lowest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Decodes a category from its index in 0..=8.
    pub fn from_index(index: usize) -> Option<HandRank> {
        HandRank::ranks().nth(index)
    }

    /// The category human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the category name for a category index, or `"Unknown"`.
pub fn category_name(index: usize) -> &'static str {
    HandRank::from_index(index).map_or("Unknown", |rank| rank.name())
}

/// A hand strength.
///
/// Scores are ordered by [HandScore::compare], that treats missing trailing
/// elements as zero, so `[0]` and `[0, 0]` are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandScore(Vec<u8>);

impl HandScore {
    /// The number of cards in an evaluated hand.
    pub const HAND_SIZE: usize = 5;

    /// Evaluates a five cards hand.
    ///
    /// A hand that doesn't have exactly five cards scores `[0]`, that is a high
    /// card with no tie breaking values.
    pub fn eval(hand: &[Card]) -> Self {
        if hand.len() != Self::HAND_SIZE {
            return Self(vec![HandRank::HighCard as u8]);
        }

        let mut values = hand.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
        values.sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = AHashMap::with_capacity(Self::HAND_SIZE);
        for &v in &values {
            *counts.entry(v).or_insert(0u8) += 1;
        }

        // (count, value) pairs with the largest group first and larger values
        // first within groups of the same size.
        let mut groups = counts.into_iter().map(|(v, c)| (c, v)).collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = hand.iter().map(Card::suit).collect::<AHashSet<_>>().len() == 1;
        let straight = straight_high(&groups);

        let rank = match (is_flush, straight, groups.as_slice()) {
            (true, Some(_), _) => HandRank::StraightFlush,
            (_, _, [(4, _), ..]) => HandRank::FourOfAKind,
            (_, _, [(3, _), (2, _)]) => HandRank::FullHouse,
            (true, None, _) => HandRank::Flush,
            (false, Some(_), _) => HandRank::Straight,
            (_, _, [(3, _), ..]) => HandRank::ThreeOfAKind,
            (_, _, [(2, _), (2, _), ..]) => HandRank::TwoPair,
            (_, _, [(2, _), ..]) => HandRank::Pair,
            _ => HandRank::HighCard,
        };

        let tie_break: Vec<u8> = match rank {
            HandRank::StraightFlush | HandRank::Straight => straight.into_iter().collect(),
            HandRank::Flush | HandRank::HighCard => values,
            _ => groups.iter().map(|&(_, v)| v).collect(),
        };

        let mut score = Vec::with_capacity(tie_break.len() + 1);
        score.push(rank as u8);
        score.extend(tie_break);
        Self(score)
    }

    /// Compares two scores element by element, a missing element counts as 0.
    pub fn compare(&self, other: &HandScore) -> Ordering {
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let lhs = self.0.get(i).copied().unwrap_or(0);
                let rhs = other.0.get(i).copied().unwrap_or(0);
                lhs.cmp(&rhs)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// The score values, the category index first.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// The score category, `None` if the category index is not in 0..=8.
    pub fn rank(&self) -> Option<HandRank> {
        self.0
            .first()
            .and_then(|&index| HandRank::from_index(index as usize))
    }

    /// The score category name.
    pub fn name(&self) -> &'static str {
        self.rank().map_or("Unknown", |rank| rank.name())
    }
}

/// Returns the high value of a straight given the hand groups.
fn straight_high(groups: &[(u8, u8)]) -> Option<u8> {
    if groups.len() != HandScore::HAND_SIZE {
        return None;
    }

    // All groups have one card so values are in descending order.
    let values = groups.iter().map(|&(_, v)| v).collect::<Vec<_>>();
    if values.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(values[0])
    } else if values == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

impl From<Vec<u8>> for HandScore {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

impl Eq for HandScore {}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, Suit};
    use rand::prelude::*;

    fn hand(cards: &[(u8, char)]) -> Vec<Card> {
        cards
            .iter()
            .map(|&(r, s)| Card::new(Rank::try_from(r).unwrap(), Suit::try_from(s).unwrap()))
            .collect()
    }

    fn score(cards: &[(u8, char)]) -> Vec<u8> {
        HandScore::eval(&hand(cards)).values().to_vec()
    }

    #[test]
    fn eval_categories() {
        let royal = [(14, 'S'), (13, 'S'), (12, 'S'), (11, 'S'), (10, 'S')];
        assert_eq!(score(&royal), [8, 14]);

        let four = [(14, 'S'), (14, 'H'), (14, 'D'), (14, 'C'), (10, 'S')];
        assert_eq!(score(&four), [7, 14, 10]);

        let full = [(14, 'S'), (14, 'H'), (14, 'D'), (10, 'C'), (10, 'S')];
        assert_eq!(score(&full), [6, 14, 10]);

        let flush = [(14, 'S'), (12, 'S'), (10, 'S'), (8, 'S'), (6, 'S')];
        assert_eq!(score(&flush), [5, 14, 12, 10, 8, 6]);

        let straight = [(14, 'S'), (13, 'H'), (12, 'D'), (11, 'C'), (10, 'S')];
        assert_eq!(score(&straight), [4, 14]);

        let three = [(14, 'S'), (14, 'H'), (14, 'D'), (10, 'C'), (8, 'S')];
        assert_eq!(score(&three), [3, 14, 10, 8]);

        let two_pair = [(14, 'S'), (14, 'H'), (10, 'D'), (10, 'C'), (8, 'S')];
        assert_eq!(score(&two_pair), [2, 14, 10, 8]);

        let pair = [(14, 'S'), (14, 'H'), (12, 'D'), (10, 'C'), (8, 'S')];
        assert_eq!(score(&pair), [1, 14, 12, 10, 8]);

        let high = [(14, 'S'), (12, 'H'), (10, 'D'), (8, 'C'), (6, 'S')];
        assert_eq!(score(&high), [0, 14, 12, 10, 8, 6]);
    }

    #[test]
    fn eval_ignores_card_order() {
        let two_pair = [(8, 'S'), (10, 'D'), (14, 'S'), (10, 'C'), (14, 'H')];
        assert_eq!(score(&two_pair), [2, 14, 10, 8]);

        // Kicker lower than both pairs, and pairs given low first.
        let two_pair = [(3, 'S'), (3, 'D'), (9, 'S'), (2, 'C'), (9, 'H')];
        assert_eq!(score(&two_pair), [2, 9, 3, 2]);

        let full = [(2, 'C'), (13, 'S'), (2, 'H'), (13, 'D'), (2, 'S')];
        assert_eq!(score(&full), [6, 2, 13]);

        let four = [(3, 'S'), (3, 'H'), (9, 'D'), (3, 'C'), (3, 'D')];
        assert_eq!(score(&four), [7, 3, 9]);
    }

    #[test]
    fn eval_wheel() {
        // The wheel has high value 5 even if there is an ace.
        let wheel = [(14, 'S'), (5, 'H'), (4, 'D'), (3, 'C'), (2, 'S')];
        assert_eq!(score(&wheel), [4, 5]);

        let steel_wheel = [(14, 'H'), (5, 'H'), (4, 'H'), (3, 'H'), (2, 'H')];
        assert_eq!(score(&steel_wheel), [8, 5]);

        let six_high = [(6, 'S'), (5, 'H'), (4, 'D'), (3, 'C'), (2, 'S')];
        assert_eq!(score(&six_high), [4, 6]);
        assert!(HandScore::from(score(&wheel)) < HandScore::from(score(&six_high)));

        // No other wrap around straight.
        let wrap = [(13, 'S'), (14, 'H'), (2, 'D'), (3, 'C'), (4, 'S')];
        assert_eq!(score(&wrap), [0, 14, 13, 4, 3, 2]);
    }

    #[test]
    fn eval_wrong_size() {
        assert_eq!(score(&[]), [0]);
        assert_eq!(score(&[(14, 'S'), (14, 'H'), (14, 'D'), (14, 'C')]), [0]);

        let six = [(14, 'S'), (13, 'S'), (12, 'S'), (11, 'S'), (10, 'S'), (9, 'S')];
        assert_eq!(score(&six), [0]);
    }

    #[test]
    fn compare_scores() {
        let s = |v: &[u8]| HandScore::from(v.to_vec());

        assert_eq!(s(&[5, 14, 12]).compare(&s(&[4, 14])), Ordering::Greater);
        assert_eq!(s(&[4, 14]).compare(&s(&[5, 2])), Ordering::Less);
        assert_eq!(s(&[1, 10, 9]).compare(&s(&[1, 10, 8])), Ordering::Greater);
        assert_eq!(s(&[4, 14]).compare(&s(&[4, 14])), Ordering::Equal);

        // Missing values are zeros.
        assert_eq!(s(&[0]).compare(&s(&[0, 0, 0])), Ordering::Equal);
        assert_eq!(s(&[0]).compare(&s(&[0, 2])), Ordering::Less);
        assert_eq!(s(&[3, 5, 1]).compare(&s(&[3, 5])), Ordering::Greater);
        assert_eq!(s(&[]).compare(&s(&[0])), Ordering::Equal);
        assert_eq!(s(&[0]), s(&[0, 0]));
    }

    #[test]
    fn compare_hands() {
        let flush = HandScore::eval(&hand(&[(14, 'S'), (12, 'S'), (10, 'S'), (8, 'S'), (6, 'S')]));
        let straight =
            HandScore::eval(&hand(&[(14, 'H'), (13, 'D'), (12, 'C'), (11, 'S'), (10, 'H')]));
        assert_eq!(flush.compare(&straight), Ordering::Greater);

        let high_flush =
            HandScore::eval(&hand(&[(14, 'S'), (13, 'S'), (11, 'S'), (9, 'S'), (7, 'S')]));
        let low_flush =
            HandScore::eval(&hand(&[(14, 'H'), (13, 'H'), (11, 'H'), (9, 'H'), (6, 'H')]));
        assert_eq!(high_flush.compare(&low_flush), Ordering::Greater);

        let s1 = HandScore::eval(&hand(&[(14, 'S'), (13, 'H'), (12, 'D'), (11, 'C'), (10, 'S')]));
        let s2 = HandScore::eval(&hand(&[(14, 'H'), (13, 'D'), (12, 'C'), (11, 'S'), (10, 'H')]));
        assert_eq!(s1.compare(&s2), Ordering::Equal);

        // Same pair, decided by the last kicker.
        let p1 = HandScore::eval(&hand(&[(9, 'S'), (9, 'H'), (12, 'D'), (7, 'C'), (4, 'S')]));
        let p2 = HandScore::eval(&hand(&[(9, 'D'), (9, 'C'), (12, 'H'), (7, 'S'), (3, 'S')]));
        assert!(p1 > p2);
    }

    #[test]
    fn compare_reflexive_and_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..2_000 {
            let deck = Deck::new_and_shuffled(&mut rng);
            let a = HandScore::eval(&deck.cards()[..5]);
            let b = HandScore::eval(&deck.cards()[5..10]);

            assert_eq!(a.compare(&a), Ordering::Equal);
            assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }
    }

    #[test]
    fn rank_names() {
        let names = (0..=9).map(category_name).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "High Card",
                "Pair",
                "Two Pair",
                "Three of a Kind",
                "Straight",
                "Flush",
                "Full House",
                "Four of a Kind",
                "Straight Flush",
                "Unknown",
            ]
        );

        assert_eq!(HandScore::from(vec![6, 2, 13]).name(), "Full House");
        assert_eq!(HandScore::from(vec![42]).rank(), None);
        assert_eq!(HandScore::from(vec![42]).name(), "Unknown");
        assert_eq!(HandScore::default().name(), "Unknown");
        assert_eq!(HandRank::TwoPair.to_string(), "Two Pair");
    }

    #[test]
    fn score_serde() {
        let score = HandScore::from(vec![8, 14]);
        assert_eq!(serde_json::to_string(&score).unwrap(), "[8,14]");
        let score = serde_json::from_str::<HandScore>("[7,14,10]").unwrap();
        assert_eq!(score.values(), [7, 14, 10]);
    }

    #[test]
    fn eval_all_hands() {
        let mut counts = [0usize; 9];

        Deck::default().for_each(5, |hand| {
            let score = HandScore::eval(hand);
            let rank = score.rank().unwrap();
            counts[rank as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::Pair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
    }
}
