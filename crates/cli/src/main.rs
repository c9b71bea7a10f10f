// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab CLI, evaluates poker hands and computes equities.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{error, info};

use equilab_eval::{Card, SimConfig, equity::DEFAULT_TRIALS, evaluate_hand, parse_cards};

mod report;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 or more cards.
    Eval {
        /// The cards, as in "AH KD QC JS TH" or AhKdQcJsTh.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Computes the exact equity against one opponent.
    Exact {
        #[clap(flatten)]
        hand: HandArgs,
        /// Number of parallel tasks.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
    /// Estimates the equity against one or more opponents with random trials.
    Sim {
        #[clap(flatten)]
        hand: HandArgs,
        /// The number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=22))]
        opponents: u8,
        /// The number of trials.
        #[clap(long, short, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
        /// Number of parallel tasks.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Seed for a reproducible run, runs on a single task.
        #[clap(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Args)]
struct HandArgs {
    /// The hero hole cards, as in "AH AC".
    #[clap(long)]
    hero: String,
    /// The board cards, from none to five.
    #[clap(long, short, default_value = "")]
    board: String,
}

impl HandArgs {
    fn parse(&self) -> Result<(Vec<Card>, Vec<Card>)> {
        Ok((parse_cards(&self.hero)?, parse_cards(&self.board)?))
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { cards } => {
            let cards = parse_cards(&cards.join(" "))?;
            let value = evaluate_hand(&cards)?;
            println!("{}", report::hand(&value));
        }
        Command::Exact { hand, tasks } => {
            let (hero, board) = hand.parse()?;
            let config = SimConfig {
                num_tasks: tasks as usize,
                ..SimConfig::default()
            };

            if board.is_empty() {
                info!("Preflop enumeration runs more than 2 billion trials, consider --tasks");
            }

            let result = config.exact(&hero, &board)?;
            print!("{}", report::exact(&hero, &board, &result));
        }
        Command::Sim {
            hand,
            opponents,
            trials,
            tasks,
            seed,
        } => {
            let (hero, board) = hand.parse()?;
            let config = SimConfig {
                num_opponents: opponents as usize,
                trials,
                num_tasks: tasks as usize,
                seed,
            };

            let result = config.monte_carlo(&hero, &board)?;
            print!(
                "{}",
                report::monte_carlo(&hero, &board, config.num_opponents, &result)
            );
        }
    }

    Ok(())
}
