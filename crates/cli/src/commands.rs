// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result, bail};
use log::{debug, warn};
use rand::prelude::*;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use kicker_eval::{BestHand, Card, Dealer, Deck, HandScore, PlayerHand, parse_cards};

/// Commands output format.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print JSON instead of text.
    pub json: bool,
}

impl Output {
    /// Prints a command result.
    pub fn print<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize + fmt::Display,
    {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{value}");
        }

        Ok(())
    }
}

/// The deal command configuration.
#[derive(Debug, Clone)]
pub struct DealConfig {
    /// Number of players.
    pub players: usize,
    /// Number of cards per player.
    pub hand_size: usize,
    /// Shuffle seed, uses the thread rng if not set.
    pub seed: Option<u64>,
}

/// The result of comparing two hands.
#[derive(Debug, Serialize)]
pub struct Comparison {
    /// The first hand.
    pub first: PlayerHand,
    /// The second hand.
    pub second: PlayerHand,
    /// 1 if the first hand wins, -1 if the second wins, 0 for a tie.
    pub result: i8,
}

impl Comparison {
    /// Evaluates and compares two hands.
    pub fn new(first: Vec<Card>, second: Vec<Card>) -> Self {
        let first = PlayerHand::new(first);
        let second = PlayerHand::new(second);
        let result = match first.score.compare(&second.score) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };

        Self {
            first,
            second,
            result,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First:  {}", self.first)?;
        writeln!(f, "Second: {}", self.second)?;
        match self.result {
            1 => write!(f, "First hand wins"),
            -1 => write!(f, "Second hand wins"),
            _ => write!(f, "Tie"),
        }
    }
}

/// The hands dealt to players.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Deal(pub Vec<PlayerHand>);

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, player) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }

            write!(f, "Player {}: {player}", idx + 1)?;
        }

        Ok(())
    }
}

fn parse(text: &str) -> Result<Vec<Card>> {
    parse_cards(text).with_context(|| format!("Invalid cards {text:?}"))
}

/// Evaluates a five cards hand.
pub fn eval(output: &Output, text: &str) -> Result<()> {
    let hand = parse(text)?;
    if hand.len() != HandScore::HAND_SIZE {
        warn!(
            "Expected {} cards got {}, scoring as high card",
            HandScore::HAND_SIZE,
            hand.len()
        );
    }

    output.print(&PlayerHand::new(hand))
}

/// Finds the strongest `size` cards hand.
pub fn best(output: &Output, text: &str, size: usize) -> Result<()> {
    let cards = parse(text)?;
    let Some(best) = BestHand::find(&cards, size) else {
        bail!("Cannot select a {size} cards hand from {} cards", cards.len());
    };

    output.print(&best)
}

/// Compares two hands.
pub fn compare(output: &Output, first: &str, second: &str) -> Result<()> {
    let comparison = Comparison::new(parse(first)?, parse(second)?);
    output.print(&comparison)
}

/// Deals hands from a new deck.
pub fn deal(output: &Output, config: &DealConfig) -> Result<()> {
    debug!("Dealing with {config:?}");

    let deck = Deck::default();
    let hands = match config.seed {
        Some(seed) => Dealer::new(StdRng::seed_from_u64(seed)).deal(
            &deck,
            config.players,
            config.hand_size,
        ),
        None => Dealer::new(rand::rng()).deal(&deck, config.players, config.hand_size),
    }
    .with_context(|| {
        format!(
            "Cannot deal {} cards to {} players from a {} cards deck",
            config.hand_size,
            config.players,
            deck.count()
        )
    })?;

    output.print(&Deal(hands))
}
