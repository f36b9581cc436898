// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker CLI, evaluates, compares, and deals poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a five cards hand, i.e. `kicker eval AS KS QS JS 10S`.
    Eval {
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Find the strongest hand in a set of cards.
    Best {
        /// The hand size.
        #[clap(long, short, default_value_t = 5)]
        size: usize,
        /// The cards to choose from.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compare two five cards hands.
    Compare {
        /// The first hand cards, i.e. "AS KS QS JS 10S".
        #[clap(long)]
        first: String,
        /// The second hand cards.
        #[clap(long)]
        second: String,
    },
    /// Deal hands from a shuffled deck.
    Deal {
        /// Number of players.
        #[clap(
            long,
            short,
            default_value_t = 4,
            value_parser = clap::value_parser!(u8).range(1..=10)
        )]
        players: u8,
        /// Number of cards per player.
        #[clap(
            long,
            short,
            default_value_t = 5,
            value_parser = clap::value_parser!(u8).range(1..=10)
        )]
        size: u8,
        /// Seed for a reproducible shuffle.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let output = commands::Output { json: cli.json };

    match cli.command {
        Command::Eval { cards } => commands::eval(&output, &cards.join(" ")),
        Command::Best { size, cards } => commands::best(&output, &cards.join(" "), size),
        Command::Compare { first, second } => commands::compare(&output, &first, &second),
        Command::Deal {
            players,
            size,
            seed,
        } => {
            let config = commands::DealConfig {
                players: players as usize,
                hand_size: size as usize,
                seed,
            };
            commands::deal(&output, &config)
        }
    }
}
