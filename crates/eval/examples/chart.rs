// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example chart -- --num-players 2
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use equilab_eval::{equity::par_monte_carlo_equity, *};

fn run_sim(c1: Card, c2: Card, n_against: usize, trials: usize) -> f64 {
    const NUM_TASKS: usize = 4;

    assert_ne!(c1, c2);
    assert!(n_against > 0 && n_against < 7);

    match par_monte_carlo_equity(&[c1, c2], &[], n_against, trials, NUM_TASKS) {
        // Hands that don't lose, split pots included.
        Ok(report) => (report.win + report.tie) * 100.0,
        Err(e) => panic!("{c1}{c2}: {e}"),
    }
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=6))]
    num_players: u8,
    /// The number of trials for each starting hand.
    #[clap(long, short, default_value_t = 100_000)]
    trials: usize,
}

fn main() {
    let cli = Cli::parse();
    let num_players = cli.num_players as usize;

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 < r2 || r1 == r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            probs.push(run_sim(c1, c2, num_players, cli.trials).round());
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.ceil());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
